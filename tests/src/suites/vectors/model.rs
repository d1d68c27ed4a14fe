//! Data model of a vector file. No dependency on the primitives.

use super::error::{EngineError, Result};
use serde::Deserialize;
use std::collections::HashMap;

/// A scalar field value; numbers and strings are both accepted
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FlexValue {
    String(String),
    Number(serde_json::Number),
    Bool(bool),
}

impl FlexValue {
    pub fn as_string(&self) -> String {
        match self {
            FlexValue::String(s) => s.clone(),
            FlexValue::Number(n) => n.to_string(),
            FlexValue::Bool(b) => b.to_string(),
        }
    }

    pub fn as_usize(&self) -> Option<usize> {
        match self {
            FlexValue::Number(n) => n.as_u64().and_then(|v| usize::try_from(v).ok()),
            FlexValue::String(s) => s.parse().ok(),
            FlexValue::Bool(_) => None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    #[serde(rename = "tcId")]
    pub test_id: u64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_expected_result")]
    pub expected_result: String,
    #[serde(flatten)]
    pub inputs: HashMap<String, FlexValue>,
}

fn default_expected_result() -> String {
    "valid".into()
}

impl TestCase {
    pub fn field(&self, name: &'static str) -> Result<String> {
        self.inputs
            .get(name)
            .map(FlexValue::as_string)
            .ok_or(EngineError::MissingField(name))
    }

    pub fn hex(&self, name: &'static str) -> Result<Vec<u8>> {
        Ok(hex::decode(self.field(name)?)?)
    }

    pub fn optional_hex(&self, name: &'static str) -> Result<Option<Vec<u8>>> {
        match self.inputs.get(name) {
            Some(value) => Ok(Some(hex::decode(value.as_string())?)),
            None => Ok(None),
        }
    }

    pub fn number(&self, name: &'static str) -> Result<Option<usize>> {
        match self.inputs.get(name) {
            Some(value) => value
                .as_usize()
                .map(Some)
                .ok_or_else(|| EngineError::InvalidData(format!("{} is not a count", name))),
            None => Ok(None),
        }
    }

    pub fn has(&self, name: &str) -> bool {
        self.inputs.contains_key(name)
    }
}

#[derive(Debug, Deserialize)]
pub struct TestGroup {
    #[serde(rename = "tgId")]
    pub group_id: u64,
    pub algorithm: String,

    /// Fields shared by every case of the group
    #[serde(flatten)]
    pub defaults: HashMap<String, FlexValue>,

    pub tests: Vec<TestCase>,
}

/// A whole vector file
#[derive(Debug, Deserialize)]
pub struct TestSuite {
    pub family: String,
    #[serde(rename = "testGroups")]
    pub groups: Vec<TestGroup>,
}
