use std::collections::HashMap;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::personio::parse::null_as_default;

/// Declared type of a Personio attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    Integer,
    Decimal,
    Standard,
    Multiline,
    List,
    Date,
    Object,
    /// Any tag this client does not know about, or no tag at all.
    #[default]
    #[serde(other)]
    Unknown,
}

/// Raw value of an attribute as sent by upstream.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    #[default]
    Null,
    Number(Number),
    String(String),
    Object(Map<String, Value>),
    /// An instant that was already decoded by the caller.
    #[serde(skip_deserializing)]
    Timestamp(DateTime<FixedOffset>),
    /// Booleans, arrays and anything else no accessor understands.
    Other(Value),
}

/// A configurable Personio attribute with label, value and declared type.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Attribute {
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: String,
    #[serde(default)]
    pub value: AttributeValue,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: AttributeType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub universal_id: String,
}

static EMPTY_ATTRIBUTE: Attribute = Attribute {
    label: String::new(),
    value: AttributeValue::Null,
    kind: AttributeType::Unknown,
    universal_id: String::new(),
};

impl Attribute {
    pub fn new(kind: AttributeType, value: AttributeValue) -> Self {
        Self {
            kind,
            value,
            ..Default::default()
        }
    }

    /// Value as integer; requires type `integer` and a numeric value.
    ///
    /// Fractional numbers are truncated toward zero.
    pub fn int_value(&self) -> Option<i64> {
        match (&self.kind, &self.value) {
            (AttributeType::Integer, AttributeValue::Number(n)) => {
                n.as_i64().or_else(|| n.as_f64().map(|f| f as i64))
            }
            _ => None,
        }
    }

    /// Value as float; requires type `integer` or `decimal` and a numeric value.
    pub fn float_value(&self) -> Option<f64> {
        match (&self.kind, &self.value) {
            (AttributeType::Integer | AttributeType::Decimal, AttributeValue::Number(n)) => {
                n.as_f64()
            }
            _ => None,
        }
    }

    /// Value as string; requires type `standard` or `multiline` and a string value.
    pub fn string_value(&self) -> Option<&str> {
        match (&self.kind, &self.value) {
            (AttributeType::Standard | AttributeType::Multiline, AttributeValue::String(s)) => {
                Some(s.as_str())
            }
            _ => None,
        }
    }

    /// Value as tag list; requires type `list` and a comma separated string.
    ///
    /// Tokens are trimmed and empty tokens are dropped.
    pub fn list_value(&self) -> Option<Vec<String>> {
        match (&self.kind, &self.value) {
            (AttributeType::List, AttributeValue::String(s)) => Some(
                s.split(',')
                    .map(str::trim)
                    .filter(|token| !token.is_empty())
                    .map(str::to_string)
                    .collect(),
            ),
            _ => None,
        }
    }

    /// Value as instant; requires type `date` and an RFC 3339 string or a decoded instant.
    ///
    /// Date and time must be separated by an uppercase `T`.
    pub fn time_value(&self) -> Option<DateTime<FixedOffset>> {
        match (&self.kind, &self.value) {
            (AttributeType::Date, AttributeValue::String(s)) => {
                if s.as_bytes().get(10) != Some(&b'T') {
                    return None;
                }
                DateTime::parse_from_rfc3339(s).ok()
            }
            (AttributeType::Date, AttributeValue::Timestamp(ts)) => Some(*ts),
            _ => None,
        }
    }

    /// Attributes of an embedded object; requires type `standard` and an object value.
    ///
    /// An object without an `attributes` member yields an empty map.
    pub fn map_value(&self) -> Option<Map<String, Value>> {
        match (&self.kind, &self.value) {
            (AttributeType::Standard, AttributeValue::Object(nested)) => Some(
                nested
                    .get("attributes")
                    .and_then(Value::as_object)
                    .cloned()
                    .unwrap_or_default(),
            ),
            _ => None,
        }
    }
}

/// Something that carries dynamic Personio attributes, e.g. an employee.
///
/// Looking up a missing key behaves like an attribute of unknown type, so
/// every accessor returns `None`; absence and type mismatch look the same.
pub trait AttributeContainer {
    fn attributes(&self) -> &HashMap<String, Attribute>;

    fn attribute(&self, key: &str) -> &Attribute {
        self.attributes().get(key).unwrap_or(&EMPTY_ATTRIBUTE)
    }

    fn get_int_attribute(&self, key: &str) -> Option<i64> {
        self.attribute(key).int_value()
    }

    fn get_float_attribute(&self, key: &str) -> Option<f64> {
        self.attribute(key).float_value()
    }

    fn get_string_attribute(&self, key: &str) -> Option<&str> {
        self.attribute(key).string_value()
    }

    fn get_list_attribute(&self, key: &str) -> Option<Vec<String>> {
        self.attribute(key).list_value()
    }

    fn get_time_attribute(&self, key: &str) -> Option<DateTime<FixedOffset>> {
        self.attribute(key).time_value()
    }

    fn get_map_attribute(&self, key: &str) -> Option<Map<String, Value>> {
        self.attribute(key).map_value()
    }
}

impl AttributeContainer for HashMap<String, Attribute> {
    fn attributes(&self) -> &HashMap<String, Attribute> {
        self
    }
}
