//! Deterministic verifier: contract-valid verdicts with no backend.
//!
//! Lets downstream consumers and test suites exercise the full contract
//! offline. Total and pure: identical inputs yield identical verdicts, and
//! it never fails.

use async_trait::async_trait;

use crate::schemas::{EvidencePackage, ReasonCategory, Verdict, CONTRACT_VERSION};

use super::{Verifier, VerifierError};

#[derive(Clone, Copy, Debug, Default)]
pub struct StubVerifier;

impl StubVerifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Verifier for StubVerifier {
    async fn verify(&self, evidence: &EvidencePackage) -> Result<Verdict, VerifierError> {
        if evidence.force_reject {
            return Ok(Verdict::forced_rejection(evidence.proposed_intent));
        }
        Ok(Verdict {
            version: CONTRACT_VERSION.to_string(),
            proposed_intent: evidence.proposed_intent,
            final_intent: evidence.proposed_intent.into(),
            intentional: true,
            confidence: 0.9,
            reason_category: ReasonCategory::IntentionalCommand,
            rationale: "Gesture appears to be an intentional command.".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::validate_verdict;
    use crate::schemas::Intent;

    #[tokio::test]
    async fn accepts_every_intent_by_default() {
        for intent in Intent::ALL {
            let evidence = EvidencePackage::new(intent);
            let verdict = StubVerifier::new().verify(&evidence).await.expect("stub");
            assert_eq!(verdict.proposed_intent, intent);
            assert_eq!(verdict.final_intent, intent.into());
            assert!(verdict.intentional);
            assert_eq!(verdict.confidence, 0.9);
            assert_eq!(verdict.reason_category, ReasonCategory::IntentionalCommand);
            assert!(verdict.is_consistent());
        }
    }

    #[tokio::test]
    async fn force_reject_yields_fixed_rejection() {
        for intent in Intent::ALL {
            let evidence = EvidencePackage::new(intent).with_force_reject(true);
            let verdict = StubVerifier::new().verify(&evidence).await.expect("stub");
            assert_eq!(verdict.proposed_intent, intent);
            assert!(verdict.final_intent.is_none());
            assert!(!verdict.intentional);
            assert_eq!(verdict.reason_category, ReasonCategory::AccidentalMotion);
            assert!(verdict.is_consistent());
        }
    }

    #[tokio::test]
    async fn stub_verdicts_validate_against_the_contract() {
        for force_reject in [false, true] {
            let evidence =
                EvidencePackage::new(Intent::CloseMenu).with_force_reject(force_reject);
            let verdict = StubVerifier::new().verify(&evidence).await.expect("stub");
            let payload = serde_json::to_value(&verdict).expect("serialize");
            let (ok, error) = validate_verdict(&payload);
            assert!(ok, "stub verdict failed contract: {:?}", error);
        }
    }

    #[tokio::test]
    async fn stub_is_idempotent() {
        let evidence = EvidencePackage::new(Intent::SwitchLeft).with_local_confidence(0.4);
        let first = StubVerifier::new().verify(&evidence).await.expect("stub");
        let second = StubVerifier::new().verify(&evidence).await.expect("stub");
        assert_eq!(first, second);
    }
}
