//! Dual-shape section payloads
//!
//! The composite sections (services, photography, testimonials) arrive in
//! one of two wire shapes: a legacy bare array of items, or the current
//! object form with an optional header and an items list. The union is
//! collapsed here, exactly once; merge code only ever sees the headed form.

use serde::Deserialize;

/// Raw wire shape of a composite section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SectionPayload<H, T> {
    /// Legacy shape: a bare array of items.
    Legacy(Vec<T>),
    /// Current shape: optional header plus items.
    Headed(HeadedPayload<H, T>),
}

/// Normalized form of a composite section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(bound(deserialize = "H: serde::Deserialize<'de>, T: serde::Deserialize<'de>"))]
pub struct HeadedPayload<H, T> {
    #[serde(default)]
    pub header: Option<H>,
    #[serde(default)]
    pub items: Vec<T>,
}

impl<H, T> SectionPayload<H, T> {
    /// Collapse either wire shape to the headed form. Idempotent: the headed
    /// form passes through unchanged.
    pub fn normalize(self) -> HeadedPayload<H, T> {
        match self {
            SectionPayload::Legacy(items) => HeadedPayload {
                header: None,
                items,
            },
            SectionPayload::Headed(payload) => payload,
        }
    }
}

impl<H, T> Default for HeadedPayload<H, T> {
    fn default() -> Self {
        Self {
            header: None,
            items: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    type Payload = SectionPayload<Value, Value>;

    #[test]
    fn test_legacy_array_deserializes() {
        let payload: Payload = serde_json::from_value(json!([{"id": "a"}, {"id": "b"}])).unwrap();
        let normalized = payload.normalize();
        assert!(normalized.header.is_none());
        assert_eq!(normalized.items.len(), 2);
    }

    #[test]
    fn test_headed_object_deserializes() {
        let payload: Payload = serde_json::from_value(json!({
            "header": {"titlePart1": "Hello"},
            "items": [{"id": "a"}]
        }))
        .unwrap();
        let normalized = payload.normalize();
        assert!(normalized.header.is_some());
        assert_eq!(normalized.items.len(), 1);
    }

    #[test]
    fn test_items_only_object() {
        let payload: Payload = serde_json::from_value(json!({"items": [1, 2, 3]})).unwrap();
        let normalized = payload.normalize();
        assert!(normalized.header.is_none());
        assert_eq!(normalized.items.len(), 3);
    }

    #[test]
    fn test_empty_object_normalizes_to_nothing() {
        let payload: Payload = serde_json::from_value(json!({})).unwrap();
        let normalized = payload.normalize();
        assert!(normalized.header.is_none());
        assert!(normalized.items.is_empty());
    }

    #[test]
    fn test_both_shapes_normalize_identically() {
        let legacy: Payload = serde_json::from_value(json!([{"id": "x"}])).unwrap();
        let headed: Payload = serde_json::from_value(json!({"items": [{"id": "x"}]})).unwrap();
        assert_eq!(legacy.normalize(), headed.normalize());
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let payload: Payload = serde_json::from_value(json!({
            "header": {"x": 1},
            "items": [2]
        }))
        .unwrap();
        let once = payload.normalize();
        let twice = SectionPayload::Headed(once.clone()).normalize();
        assert_eq!(once, twice);
    }
}
