use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Snapshot of a runtime value captured by the upstream inspection protocol.
///
/// A preview is a bounded, already-truncated description: the producer may
/// have omitted members beyond what it sent (`overflow`) and asserts whether
/// its own capture was complete (`lossless`). The tree is immutable once
/// built; rendering only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preview {
    /// Broad value category
    pub kind: PreviewKind,

    /// Refinement for object-kind values (array, map, regexp, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<PreviewSubtype>,

    /// Short textual label, usually a constructor or class name. May be empty.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Collection length, present only for sized subtypes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    /// Named members, insertion order preserved
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<PropertyPreview>,

    /// Collection key/value pairs, insertion order preserved
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entries: Vec<EntryPreview>,

    /// Producer's claim that its capture of this value was complete
    #[serde(default)]
    pub lossless: bool,

    /// Producer omitted members beyond what it sent
    #[serde(default)]
    pub overflow: bool,
}

impl Preview {
    /// Label the producer uses for a plain object with no interesting class.
    /// Previews carrying it render without a type annotation.
    pub const PLAIN_OBJECT_LABEL: &'static str = "Object";

    /// Lossless primitive preview with the given description, no members.
    pub fn primitive(description: impl Into<String>) -> Self {
        Self {
            kind: PreviewKind::Primitive,
            subtype: None,
            description: description.into(),
            size: None,
            properties: Vec::new(),
            entries: Vec::new(),
            lossless: true,
            overflow: false,
        }
    }

    /// Lossless object preview with the given subtype and description, no members.
    pub fn object(subtype: Option<PreviewSubtype>, description: impl Into<String>) -> Self {
        Self {
            kind: PreviewKind::Object,
            subtype,
            description: description.into(),
            size: None,
            properties: Vec::new(),
            entries: Vec::new(),
            lossless: true,
            overflow: false,
        }
    }

    /// Parse a preview document from the upstream JSON wire format.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Broad category of a captured value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewKind {
    Primitive,
    Object,
}

/// Refinement of an object-kind preview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewSubtype {
    Array,
    Regexp,
    Null,
    Error,
    Date,
    Iterator,
    Map,
    Set,
}

/// Named member of an object-like preview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyPreview {
    pub name: String,

    #[serde(default)]
    pub access_kind: AccessKind,

    /// Nested preview, present when the value was itself capturable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Preview>,

    /// Fallback formatted text used when `value` is absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_formatted: Option<String>,
}

impl PropertyPreview {
    /// Plain value property backed by pre-formatted text.
    pub fn raw(name: impl Into<String>, raw_formatted: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            access_kind: AccessKind::Value,
            value: None,
            raw_formatted: Some(raw_formatted.into()),
        }
    }

    /// Value property backed by a nested preview.
    pub fn nested(name: impl Into<String>, value: Preview) -> Self {
        Self {
            name: name.into(),
            access_kind: AccessKind::Value,
            value: Some(value),
            raw_formatted: None,
        }
    }
}

/// How a property is accessed on the source object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessKind {
    #[default]
    Value,
    Accessor,
}

/// Key/value pair of a collection-like preview.
///
/// `key` is absent for set-like collections; `value` is mandatory, so an
/// entry without one is rejected at deserialization time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryPreview {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<Preview>,
    pub value: Preview,
}

/// Rendering verbosity, fixed for the duration of a rendering pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Brief,
    Full,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_document_defaults() {
        let preview = Preview::from_json_str(r#"{"kind": "primitive", "description": "42"}"#)
            .expect("minimal document should parse");

        assert_eq!(preview.kind, PreviewKind::Primitive);
        assert_eq!(preview.description, "42");
        assert!(preview.subtype.is_none());
        assert!(preview.properties.is_empty());
        assert!(preview.entries.is_empty());
        assert!(!preview.lossless);
        assert!(!preview.overflow);
    }

    #[test]
    fn test_wire_round_trip() {
        let json = r#"{
            "kind": "object",
            "subtype": "map",
            "description": "Map",
            "size": 1,
            "entries": [
                {
                    "key": {"kind": "primitive", "description": "a"},
                    "value": {"kind": "primitive", "description": "1"}
                }
            ],
            "lossless": true
        }"#;

        let preview = Preview::from_json_str(json).unwrap();
        assert_eq!(preview.subtype, Some(PreviewSubtype::Map));
        assert_eq!(preview.size, Some(1));
        assert_eq!(preview.entries.len(), 1);

        let serialized = serde_json::to_string(&preview).unwrap();
        let reparsed = Preview::from_json_str(&serialized).unwrap();
        assert_eq!(preview, reparsed);
    }

    #[test]
    fn test_property_access_kind_defaults_to_value() {
        let json = r#"{
            "kind": "object",
            "subtype": "array",
            "description": "Array",
            "properties": [{"name": "0", "rawFormatted": "4"}]
        }"#;

        let preview = Preview::from_json_str(json).unwrap();
        assert_eq!(preview.properties[0].access_kind, AccessKind::Value);
        assert_eq!(preview.properties[0].raw_formatted.as_deref(), Some("4"));
    }

    #[test]
    fn test_entry_without_value_is_rejected() {
        let json = r#"{
            "kind": "object",
            "subtype": "set",
            "description": "Set",
            "entries": [{}]
        }"#;

        assert!(Preview::from_json_str(json).is_err());
    }

    #[test]
    fn test_camel_case_field_names_on_wire() {
        let preview = Preview {
            properties: vec![PropertyPreview {
                name: "x".to_string(),
                access_kind: AccessKind::Accessor,
                value: None,
                raw_formatted: None,
            }],
            ..Preview::object(None, "Point")
        };

        let json = serde_json::to_string(&preview).unwrap();
        assert!(json.contains(r#""accessKind":"accessor""#));
    }
}
