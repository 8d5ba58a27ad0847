use super::value::TypedValue;
use crate::source::ConfHeader;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::path::Path;

/// An ordered column-name → value mapping.
///
/// Serializes as a JSON object whose keys follow CSV column order. Inserting an
/// existing key replaces its value in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ColumnMap {
    entries: Vec<(String, TypedValue)>,
}

impl ColumnMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: TypedValue) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&TypedValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypedValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, TypedValue)> for ColumnMap {
    fn from_iter<I: IntoIterator<Item = (K, TypedValue)>>(iter: I) -> Self {
        let mut map = ColumnMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl Serialize for ColumnMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct ColumnMapVisitor;

impl<'de> Visitor<'de> for ColumnMapVisitor {
    type Value = ColumnMap;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of column names to boolean, number or string values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<ColumnMap, A::Error> {
        let mut map = ColumnMap::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, TypedValue>()? {
            map.insert(key, value);
        }
        Ok(map)
    }
}

impl<'de> Deserialize<'de> for ColumnMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ColumnMapVisitor)
    }
}

/// The distinct values seen for one input column, in first-occurrence order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputDomain {
    pub key: String,
    pub values: Vec<TypedValue>,
}

/// The expected outputs of one test case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    pub outputs: ColumnMap,
    /// 1-based position of the source data row, as a string.
    pub row_index: String,
}

/// One compiled CSV data row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    pub inputs: ColumnMap,
    /// Always exactly one entry.
    pub results: Vec<TestResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfData {
    pub inputs: Vec<InputDomain>,
    pub test_cases: Vec<TestCase>,
    /// Reserved; always empty.
    pub variables: Vec<serde_json::Value>,
}

/// The conf document written for each compiled CSV sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfDocument {
    pub data: ConfData,
    pub decision_id: String,
    /// `[dmn_dir, dmn_file]`
    pub dmn_path: Vec<String>,
    pub is_active: String,
}

impl ConfDocument {
    pub fn new(
        header: &ConfHeader,
        dmn_dir: &str,
        inputs: Vec<InputDomain>,
        test_cases: Vec<TestCase>,
    ) -> Self {
        Self {
            data: ConfData {
                inputs,
                test_cases,
                variables: Vec::new(),
            },
            decision_id: header.decision_id.clone(),
            dmn_path: vec![dmn_dir.to_string(), header.dmn_file.clone()],
            is_active: "true".to_string(),
        }
    }

    pub fn test_cases(&self) -> &[TestCase] {
        &self.data.test_cases
    }

    /// Looks up the value domain of an input column by key.
    pub fn input_domain(&self, key: &str) -> Option<&InputDomain> {
        self.data.inputs.iter().find(|d| d.key == key)
    }

    /// Renders the document as 2-space indented JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Loads a previously written conf document.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&content)?)
    }
}
