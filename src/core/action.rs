//! The input alphabet.
//!
//! The embedding UI translates raw input events into exactly one `Action`
//! per event. Directions move the cursor; Confirm/Cancel drive the
//! two-phase pick-up/drop protocol. `Quit` exists so UIs can keep a single
//! closed event type, but quitting (and any dialog around it) is a UI
//! concern - the engine always rejects it.

use serde::{Deserialize, Serialize};

/// One discrete input action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Up,
    Right,
    Down,
    Left,
    Confirm,
    Cancel,
    Quit,
}
