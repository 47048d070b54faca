//! Shared types: intents, verdicts, and evidence packages.

mod evidence;
mod intent;
mod verdict;

pub use evidence::{EvidencePackage, Frame};
pub use intent::{FinalIntent, Intent, ReasonCategory};
pub use verdict::{Verdict, CONTRACT_VERSION};
