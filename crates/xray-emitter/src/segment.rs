// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! The X-Ray segment data model, as serialized on the daemon wire.
//!
//! Only the fields the test daemon needs are modeled; unknown JSON fields are
//! ignored on decode so real SDK payloads still parse.

use serde::{Deserialize, Serialize};

/// A traced unit of work, JSON-encoded in each daemon datagram.
///
/// Every field has a serde default, so the minimal valid payload is `{}`. The
/// JSON field names follow the X-Ray segment document format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Segment {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Epoch seconds with sub-second precision.
    pub start_time: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<f64>,
    pub in_progress: bool,
    /// Whether the segment was recorded by a sampling decision. The test
    /// daemon overwrites this to `true` on every decoded segment.
    pub sampled: bool,
    pub error: bool,
    pub fault: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<ServiceInfo>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subsegments: Vec<Segment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<serde_json::Map<String, serde_json::Value>>,
}

/// Service metadata attached to a segment, carrying the version label from
/// the emitter configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceInfo {
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_minimal_payload() {
        let segment: Segment = serde_json::from_str(r#"{"id":"abc"}"#).unwrap();
        assert_eq!(segment.id, "abc");
        assert!(!segment.sampled);
        assert!(!segment.in_progress);
        assert!(segment.trace_id.is_none());
        assert!(segment.subsegments.is_empty());
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let segment: Segment =
            serde_json::from_str(r#"{"id":"abc","aws":{"xray":{"sdk":"X-Ray for Go"}}}"#).unwrap();
        assert_eq!(segment.id, "abc");
    }

    #[test]
    fn test_decode_full_payload() {
        let segment: Segment = serde_json::from_str(
            r#"{
                "id": "70de5b6f19ff9a0a",
                "name": "checkout",
                "trace_id": "1-581cf771-a006649127e371903a2de979",
                "start_time": 1478293361.271,
                "end_time": 1478293361.449,
                "sampled": true,
                "service": {"version": "1.2.3"},
                "subsegments": [{"id": "43dd5b6f19ff9a0b", "name": "db"}]
            }"#,
        )
        .unwrap();
        assert_eq!(segment.name, "checkout");
        assert!(segment.sampled);
        assert_eq!(segment.service.unwrap().version, "1.2.3");
        assert_eq!(segment.subsegments.len(), 1);
        assert_eq!(segment.subsegments[0].name, "db");
    }

    #[test]
    fn test_encode_skips_unset_optionals() {
        let segment = Segment {
            id: "abc".to_string(),
            ..Segment::default()
        };
        let json = serde_json::to_string(&segment).unwrap();
        assert!(!json.contains("trace_id"));
        assert!(!json.contains("subsegments"));
        assert!(json.contains(r#""sampled":false"#));
    }
}
