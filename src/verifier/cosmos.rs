//! Reasoning-backed verifier calling Cosmos Reason 2 over the vLLM
//! OpenAI-compatible API.
//!
//! The backend is treated as an untrusted text generator, not a typed RPC
//! peer. Its reply passes through successive narrowing stages (fence strip,
//! JSON parse, field presence, typed decode), each failing with its own
//! [`VerifierError`] variant. Prompt-token count grows with the number of
//! frames, so callers control latency by how many frames they attach.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{json, Map, Value};

use crate::config::CosmosConfig;
use crate::schemas::{EvidencePackage, Verdict};

use super::{Verifier, VerifierError};

const MAX_TOKENS: u32 = 256;
// Low temperature to favor deterministic-style judgments.
const TEMPERATURE: f64 = 0.1;

/// Fixed behavioral policy sent as the system message on every call.
/// Advisory only: the reply is still narrowed and validated downstream.
const SYSTEM_PROMPT: &str = r#"You are a strict gesture verifier for a desktop control system that uses webcam hand tracking.

You are given:
- A proposed gesture intent detected by a local hand tracker
- A sequence of video frames showing the moment the gesture was detected
- Optionally, a hand landmark summary with trajectory and pose data

Your task is to determine whether the detected gesture was an INTENTIONAL USER COMMAND directed at the computer, or whether it was incidental human motion that happened to resemble a gesture.

Key distinction: Many normal human activities produce hand motions that are kinematically identical to gesture commands. Scratching your head looks like a swipe. Waving during conversation looks like a dismiss gesture. Reaching for a coffee cup looks like a directional motion. You must use the full visual context — body posture, gaze direction, scene context, motion purposefulness — to determine intent.

Hard negative priors (reject unless strong command evidence):
- Self-grooming: scratching head/face, rubbing eyes, adjusting glasses/hair
- Reaching: grabbing objects, wiping surfaces, catching/swatting
- Conversation: waving while talking, gesticulating, receiving items from others
- Accidental: repositioning hands, stretching, fidgeting

Output rules:
- Output ONLY a JSON object, no other text, no markdown, no code fences
- "version" must be "1.0"
- "proposed_intent" must match the proposed intent from the input exactly
- "final_intent" must be one of: OPEN_MENU, CLOSE_MENU, SWITCH_RIGHT, SWITCH_LEFT, NONE
- If not intentional, set final_intent to "NONE"
- "intentional" must be a boolean
- "confidence" must be a number between 0 and 1
- "reason_category" must be exactly one of: intentional_command, self_grooming, reaching_object, swatting_insect, conversation_gesture, accidental_motion, tracking_error, unknown
- "rationale" should be one concise sentence explaining the decision
- When uncertain, err on the side of rejection (set intentional to false)"#;

static FENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```(?:json)?\s*(.*?)```").expect("fence regex compiles"));

/// Verifier backed by a Cosmos Reason 2 NIM.
pub struct CosmosVerifier {
    config: CosmosConfig,
    client: reqwest::Client,
}

impl CosmosVerifier {
    pub fn new(config: CosmosConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Construct from `COSMOS_NIM_URL` / `COSMOS_MODEL`.
    pub fn from_env() -> Self {
        Self::new(CosmosConfig::from_env())
    }

    /// Assemble the chat completion body: images first, in temporal order,
    /// then exactly one text part holding the JSON context object. Optional
    /// evidence that is absent (or an empty landmark object) is omitted
    /// entirely rather than sent as a null placeholder.
    fn build_request_body(&self, evidence: &EvidencePackage) -> Value {
        let mut context = Map::new();
        context.insert(
            "proposed_intent".to_string(),
            json!(evidence.proposed_intent),
        );
        if let Some(confidence) = evidence.local_confidence {
            context.insert("local_confidence".to_string(), json!(confidence));
        }
        if let Some(summary) = &evidence.landmark_summary {
            if !is_empty_summary(summary) {
                context.insert("landmark_summary".to_string(), summary.clone());
            }
        }

        let mut content: Vec<Value> = evidence
            .frames
            .iter()
            .map(|frame| {
                json!({
                    "type": "image_url",
                    "image_url": {
                        "url": format!("data:image/jpeg;base64,{}", BASE64.encode(&frame.jpeg)),
                    },
                })
            })
            .collect();
        content.push(json!({
            "type": "text",
            "text": Value::Object(context).to_string(),
        }));

        json!({
            "model": self.config.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": content },
            ],
            "max_tokens": MAX_TOKENS,
            "temperature": TEMPERATURE,
        })
    }
}

#[async_trait]
impl Verifier for CosmosVerifier {
    async fn verify(&self, evidence: &EvidencePackage) -> Result<Verdict, VerifierError> {
        // Must precede any network activity so rejection stays deterministic
        // even when the backend is down.
        if evidence.force_reject {
            log::debug!(
                "force_reject set for {} (event {:?}); skipping backend",
                evidence.proposed_intent,
                evidence.event_id
            );
            return Ok(Verdict::forced_rejection(evidence.proposed_intent));
        }

        let url = self.config.completions_url();
        let body = self.build_request_body(evidence);
        log::debug!(
            "verifying {} with {} frames via {} (event {:?})",
            evidence.proposed_intent,
            evidence.frames.len(),
            url,
            evidence.event_id
        );

        let response = self
            .client
            .post(&url)
            .json(&body)
            .timeout(self.config.timeout)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|source| VerifierError::BackendUnreachable {
                endpoint: self.config.endpoint.clone(),
                source,
            })?;
        let reply: Value =
            response
                .json()
                .await
                .map_err(|source| VerifierError::BackendUnreachable {
                    endpoint: self.config.endpoint.clone(),
                    source,
                })?;

        let raw = reply
            .pointer("/choices/0/message/content")
            .and_then(Value::as_str)
            .ok_or_else(|| VerifierError::MalformedCompletion { body: reply.clone() })?;

        let cleaned = strip_code_fences(raw);
        let payload: Value = serde_json::from_str(&cleaned).map_err(|_| {
            log::warn!("backend returned non-JSON completion: {:?}", raw);
            VerifierError::NonJsonResponse {
                raw: raw.to_string(),
            }
        })?;

        let missing = missing_fields(&payload);
        if !missing.is_empty() {
            return Err(VerifierError::IncompleteResponse { missing, payload });
        }

        serde_json::from_value(payload.clone()).map_err(|err| VerifierError::ContractViolation {
            message: err.to_string(),
            payload,
        })
    }
}

/// Strip markdown code fences if the model wraps its JSON reply. The first
/// fenced block wins; unfenced text passes through trimmed.
fn strip_code_fences(text: &str) -> String {
    let trimmed = text.trim();
    match FENCE_RE.captures(trimmed) {
        Some(captures) => captures
            .get(1)
            .map(|block| block.as_str().trim().to_string())
            .unwrap_or_else(|| trimmed.to_string()),
        None => trimmed.to_string(),
    }
}

fn missing_fields(payload: &Value) -> Vec<String> {
    Verdict::REQUIRED_FIELDS
        .iter()
        .filter(|field| payload.get(**field).is_none())
        .map(|field| field.to_string())
        .collect()
}

fn is_empty_summary(summary: &Value) -> bool {
    match summary {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::{Frame, Intent};

    fn verifier() -> CosmosVerifier {
        CosmosVerifier::new(CosmosConfig::default())
    }

    #[test]
    fn strips_json_tagged_fences() {
        let text = "```json\n{\"intentional\": true}\n```";
        assert_eq!(strip_code_fences(text), "{\"intentional\": true}");
    }

    #[test]
    fn strips_untagged_fences() {
        let text = "```\n{\"a\": 1}\n```";
        assert_eq!(strip_code_fences(text), "{\"a\": 1}");
    }

    #[test]
    fn takes_first_fenced_block() {
        let text = "```json\n{\"a\": 1}\n```\nand then ```{\"b\": 2}```";
        assert_eq!(strip_code_fences(text), "{\"a\": 1}");
    }

    #[test]
    fn unfenced_text_passes_through_trimmed() {
        assert_eq!(strip_code_fences("  {\"a\": 1}\n"), "{\"a\": 1}");
    }

    #[test]
    fn context_omits_absent_optional_evidence() {
        let evidence = EvidencePackage::new(Intent::OpenMenu)
            .with_frames(vec![Frame::from(vec![1, 2]), Frame::from(vec![3, 4])])
            .with_local_confidence(0.77);
        let body = verifier().build_request_body(&evidence);

        let content = body["messages"][1]["content"].as_array().expect("content");
        assert_eq!(content.len(), 3);
        for image in &content[..2] {
            assert_eq!(image["type"], "image_url");
            let url = image["image_url"]["url"].as_str().expect("url");
            assert!(url.starts_with("data:image/jpeg;base64,"));
        }

        assert_eq!(content[2]["type"], "text");
        let context: Value =
            serde_json::from_str(content[2]["text"].as_str().expect("text")).expect("context");
        let keys: Vec<&String> = context.as_object().expect("object").keys().collect();
        assert_eq!(keys, ["local_confidence", "proposed_intent"]);
        assert_eq!(context["proposed_intent"], "OPEN_MENU");
        assert_eq!(context["local_confidence"], 0.77);
    }

    #[test]
    fn empty_landmark_summary_is_omitted() {
        let evidence =
            EvidencePackage::new(Intent::SwitchLeft).with_landmark_summary(json!({}));
        let body = verifier().build_request_body(&evidence);
        let context: Value = serde_json::from_str(
            body["messages"][1]["content"][0]["text"].as_str().expect("text"),
        )
        .expect("context");
        assert!(context.get("landmark_summary").is_none());
    }

    #[test]
    fn populated_landmark_summary_is_forwarded() {
        let evidence = EvidencePackage::new(Intent::SwitchLeft)
            .with_landmark_summary(json!({"wrist_speed": 0.4}));
        let body = verifier().build_request_body(&evidence);
        let context: Value = serde_json::from_str(
            body["messages"][1]["content"][0]["text"].as_str().expect("text"),
        )
        .expect("context");
        assert_eq!(context["landmark_summary"], json!({"wrist_speed": 0.4}));
    }

    #[test]
    fn request_carries_fixed_sampling_parameters() {
        let body = verifier().build_request_body(&EvidencePackage::new(Intent::CloseMenu));
        assert_eq!(body["model"], CosmosConfig::default().model.as_str());
        assert_eq!(body["max_tokens"], 256);
        assert_eq!(body["temperature"], 0.1);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][0]["content"], SYSTEM_PROMPT);
        assert_eq!(body["messages"][1]["role"], "user");
    }

    #[test]
    fn missing_fields_are_reported_in_schema_order() {
        let payload = json!({"version": "1.0", "proposed_intent": "OPEN_MENU"});
        assert_eq!(
            missing_fields(&payload),
            vec![
                "final_intent",
                "intentional",
                "confidence",
                "reason_category",
                "rationale"
            ]
        );
        assert!(missing_fields(&json!({
            "version": "1.0",
            "proposed_intent": "OPEN_MENU",
            "final_intent": "NONE",
            "intentional": false,
            "confidence": 0.9,
            "reason_category": "accidental_motion",
            "rationale": "r",
        }))
        .is_empty());
    }

    #[tokio::test]
    async fn force_reject_short_circuits_before_any_network_call() {
        // Unroutable endpoint: the call must still succeed deterministically.
        let verifier = CosmosVerifier::new(CosmosConfig::new("http://127.0.0.1:9", "m"));
        let evidence = EvidencePackage::new(Intent::SwitchRight).with_force_reject(true);
        let verdict = verifier.verify(&evidence).await.expect("forced rejection");
        assert!(verdict.final_intent.is_none());
        assert!(!verdict.intentional);
        assert!(verdict.is_consistent());
    }
}
