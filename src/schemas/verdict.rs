//! The verification verdict: the sole output type of every verifier.

use serde::{Deserialize, Serialize};

use super::intent::{FinalIntent, Intent, ReasonCategory};

/// Contract version stamped into every verdict. Must match the `version`
/// const in `shared/schema.json`.
pub const CONTRACT_VERSION: &str = "1.0";

/// A structured intentionality judgment for one proposed gesture.
///
/// Immutable once constructed. `proposed_intent` echoes the input exactly;
/// `final_intent` is the verifier's call. The contract invariant is
/// `intentional == false` iff `final_intent == NONE` (see [`Verdict::is_consistent`]).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub version: String,
    pub proposed_intent: Intent,
    pub final_intent: FinalIntent,
    pub intentional: bool,
    pub confidence: f64,
    pub reason_category: ReasonCategory,
    pub rationale: String,
}

impl Verdict {
    /// The seven fields the contract requires, in schema order.
    pub const REQUIRED_FIELDS: [&'static str; 7] = [
        "version",
        "proposed_intent",
        "final_intent",
        "intentional",
        "confidence",
        "reason_category",
        "rationale",
    ];

    /// The fixed rejection returned whenever `force_reject` is set,
    /// regardless of evidence or backend availability.
    pub fn forced_rejection(proposed_intent: Intent) -> Self {
        Self {
            version: CONTRACT_VERSION.to_string(),
            proposed_intent,
            final_intent: FinalIntent::None,
            intentional: false,
            confidence: 0.9,
            reason_category: ReasonCategory::AccidentalMotion,
            rationale: "Forced reject is enabled for test validation.".to_string(),
        }
    }

    /// True when `intentional` and `final_intent` agree: rejected verdicts
    /// carry the `NONE` sentinel, accepted verdicts carry a command.
    pub fn is_consistent(&self) -> bool {
        self.intentional != self.final_intent.is_none()
    }
}
