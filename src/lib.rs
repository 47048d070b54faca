//! # gesture-verifier
//!
//! Second-stage confirmation gate for a webcam gesture control pipeline.
//!
//! A local hand tracker proposes a discrete intent from kinematic cues, but
//! many ordinary motions are kinematically identical to commands. This crate
//! decides whether a proposed intent reflects genuine user intent, using
//! richer evidence: a short frame sequence, an optional landmark summary,
//! and the tracker's own confidence.
//!
//! ## Overview
//!
//! - **[schemas]** — closed intent/category enumerations, [`schemas::Verdict`],
//!   and the per-event [`schemas::EvidencePackage`]
//! - **[contract]** — validation against the shared `shared/schema.json`
//!   contract document
//! - **[verifier]** — the [`verifier::Verifier`] strategy trait with two
//!   implementations: [`verifier::StubVerifier`] (deterministic, offline) and
//!   [`verifier::CosmosVerifier`] (Cosmos Reason 2 via a vLLM
//!   OpenAI-compatible endpoint)
//! - **[config]** — backend endpoint/model selection with env overrides
//!
//! ## Example
//!
//! ```ignore
//! use gesture_verifier::config::CosmosConfig;
//! use gesture_verifier::contract::validate_verdict;
//! use gesture_verifier::schemas::{EvidencePackage, Intent};
//! use gesture_verifier::verifier::{CosmosVerifier, Verifier};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let verifier = CosmosVerifier::new(CosmosConfig::from_env());
//! let evidence = EvidencePackage::new(Intent::OpenMenu)
//!     .with_frames(frames)
//!     .with_local_confidence(0.83);
//! let verdict = verifier.verify(&evidence).await?;
//! let (ok, violation) = validate_verdict(&serde_json::to_value(&verdict)?);
//! # Ok(()) }
//! ```
//!
//! Every verdict returned by either verifier validates against the contract;
//! a verifier that cannot produce one fails with a distinct
//! [`verifier::VerifierError`] rather than returning an invalid shape.
//! Callers that need strict conformance on backend-produced verdicts should
//! still run [`contract::validate_verdict`] before trusting them.

/// Backend endpoint and model configuration.
pub mod config;
/// Response contract loading and validation.
pub mod contract;
/// Shared types: intents, verdicts, evidence.
pub mod schemas;
/// Verifier strategies: deterministic stub and reasoning-backed.
pub mod verifier;

use std::sync::Arc;

/// Type alias for a verifier behind a shared trait object.
pub type SharedVerifier = Arc<dyn verifier::Verifier>;
