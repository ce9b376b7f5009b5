use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::personio::attribute::{Attribute, AttributeContainer};
use crate::personio::parse::null_as_default;

/// A single Personio employee.
///
/// All employee data lives in dynamically typed attributes; use the
/// [`AttributeContainer`] accessors to read them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Object type reported by upstream, normally `Employee`.
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    /// Attribute map keyed by attribute name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub attributes: HashMap<String, Attribute>,
}

impl Employee {
    /// Personio id of the employee, if exposed.
    pub fn id(&self) -> Option<i64> {
        self.get_int_attribute("id")
    }
}

impl AttributeContainer for Employee {
    fn attributes(&self) -> &HashMap<String, Attribute> {
        &self.attributes
    }
}
