//! Evidence assembled per detection event and handed to a verifier.

use serde_json::Value;

use super::intent::Intent;

/// One encoded video frame (JPEG bytes). Frames are ordered temporally.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub jpeg: Vec<u8>,
}

impl From<Vec<u8>> for Frame {
    fn from(jpeg: Vec<u8>) -> Self {
        Self { jpeg }
    }
}

/// Everything a verifier may consider for one detection event.
///
/// Built once per event, used once, discarded. Optional fields that are
/// absent are omitted from the backend request entirely rather than sent as
/// null placeholders.
#[derive(Clone, Debug)]
pub struct EvidencePackage {
    /// The command proposed by the local hand tracker.
    pub proposed_intent: Intent,
    /// Video frames around the detection moment, oldest first.
    pub frames: Vec<Frame>,
    /// Opaque trajectory/pose summary from the tracker; forwarded as-is.
    pub landmark_summary: Option<Value>,
    /// The local detector's confidence in [0, 1].
    pub local_confidence: Option<f64>,
    /// Short-circuit to a fixed rejection, for deterministic negative testing.
    pub force_reject: bool,
    /// Upstream correlation id, used only in log lines.
    pub event_id: Option<String>,
}

impl EvidencePackage {
    pub fn new(proposed_intent: Intent) -> Self {
        Self {
            proposed_intent,
            frames: Vec::new(),
            landmark_summary: None,
            local_confidence: None,
            force_reject: false,
            event_id: None,
        }
    }

    pub fn with_frames(mut self, frames: Vec<Frame>) -> Self {
        self.frames = frames;
        self
    }

    pub fn with_landmark_summary(mut self, summary: Value) -> Self {
        self.landmark_summary = Some(summary);
        self
    }

    pub fn with_local_confidence(mut self, confidence: f64) -> Self {
        self.local_confidence = Some(confidence);
        self
    }

    pub fn with_force_reject(mut self, force_reject: bool) -> Self {
        self.force_reject = force_reject;
        self
    }

    pub fn with_event_id(mut self, event_id: impl Into<String>) -> Self {
        self.event_id = Some(event_id.into());
        self
    }
}
