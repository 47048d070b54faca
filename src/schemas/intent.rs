//! Closed intent and reason-category enumerations.
//!
//! These sets are contract boundaries: adding a new command or rejection
//! category here propagates through serde, the verifiers, and the shared
//! schema, and the compiler flags every match that needs updating.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A discrete command the gesture pipeline can recognize.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intent {
    OpenMenu,
    CloseMenu,
    SwitchRight,
    SwitchLeft,
}

impl Intent {
    /// Every recognized command, in a stable order.
    pub const ALL: [Intent; 4] = [
        Intent::OpenMenu,
        Intent::CloseMenu,
        Intent::SwitchRight,
        Intent::SwitchLeft,
    ];

    /// Wire name, identical to the serde rendering.
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::OpenMenu => "OPEN_MENU",
            Intent::CloseMenu => "CLOSE_MENU",
            Intent::SwitchRight => "SWITCH_RIGHT",
            Intent::SwitchLeft => "SWITCH_LEFT",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The verifier's final call: one of the commands, or `NONE` when the motion
/// was not an intentional command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FinalIntent {
    OpenMenu,
    CloseMenu,
    SwitchRight,
    SwitchLeft,
    None,
}

impl FinalIntent {
    pub fn is_none(&self) -> bool {
        matches!(self, FinalIntent::None)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FinalIntent::OpenMenu => "OPEN_MENU",
            FinalIntent::CloseMenu => "CLOSE_MENU",
            FinalIntent::SwitchRight => "SWITCH_RIGHT",
            FinalIntent::SwitchLeft => "SWITCH_LEFT",
            FinalIntent::None => "NONE",
        }
    }
}

impl From<Intent> for FinalIntent {
    fn from(intent: Intent) -> Self {
        match intent {
            Intent::OpenMenu => FinalIntent::OpenMenu,
            Intent::CloseMenu => FinalIntent::CloseMenu,
            Intent::SwitchRight => FinalIntent::SwitchRight,
            Intent::SwitchLeft => FinalIntent::SwitchLeft,
        }
    }
}

impl fmt::Display for FinalIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a verdict accepted or rejected the proposed gesture.
///
/// Everything except `IntentionalCommand` is a hard-negative category: human
/// motion that resembles a command but is not one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonCategory {
    IntentionalCommand,
    SelfGrooming,
    ReachingObject,
    SwattingInsect,
    ConversationGesture,
    AccidentalMotion,
    TrackingError,
    Unknown,
}
