//! Verifier strategies: one capability, two implementations.
//!
//! [`StubVerifier`] decides locally and never fails; [`CosmosVerifier`]
//! consults the reasoning backend and surfaces each failure mode of that
//! channel as a distinct error. Callers hold an `Arc<dyn Verifier>` and can
//! swap implementations without other changes.

mod cosmos;
mod stub;

pub use cosmos::CosmosVerifier;
pub use stub::StubVerifier;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::schemas::{EvidencePackage, Verdict};

/// Failure modes of a verification call.
///
/// Each variant marks one narrowing stage of the backend's free-text channel,
/// so operators can tell "backend down" from "backend returned garbage" from
/// "backend returned incomplete JSON". None of these is ever coerced into a
/// fabricated rejection verdict.
#[derive(Debug, Error)]
pub enum VerifierError {
    /// Network or connection failure reaching the reasoning endpoint.
    #[error("reasoning backend unreachable at {endpoint}: {source}")]
    BackendUnreachable {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The HTTP reply lacked a `choices[0].message.content` completion.
    #[error("backend reply carried no completion text: {body}")]
    MalformedCompletion { body: Value },

    /// The completion text did not parse as JSON after fence stripping.
    #[error("backend returned non-JSON: {raw:?}")]
    NonJsonResponse { raw: String },

    /// The parsed JSON lacks one or more required verdict fields.
    #[error("backend response missing fields {missing:?}: {payload}")]
    IncompleteResponse {
        missing: Vec<String>,
        payload: Value,
    },

    /// All fields are present but the payload does not decode as a verdict
    /// (unknown enum value, wrong field type).
    #[error("backend response violates the verdict contract ({message}): {payload}")]
    ContractViolation { message: String, payload: Value },
}

/// Produce a contract-valid verdict from an evidence package.
#[async_trait]
pub trait Verifier: Send + Sync {
    async fn verify(&self, evidence: &EvidencePackage) -> Result<Verdict, VerifierError>;
}
