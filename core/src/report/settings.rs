use std::collections::BTreeMap;

use serde::Serialize;

/// Raw `key -> value` settings of one report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportSettings(BTreeMap<String, String>);

impl ReportSettings {
    /// Later insertions for the same key replace earlier ones.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn description(&self) -> Option<&str> {
        self.get("description")
    }

    /// Column attributes from `columns`, e.g. `["id", "due.relative"]`.
    pub fn columns(&self) -> Vec<&str> {
        split_list(self.get("columns"))
    }

    /// Display labels from `labels`, e.g. `["ID", "Due"]`.
    pub fn labels(&self) -> Vec<&str> {
        split_list(self.get("labels"))
    }
}

fn split_list(value: Option<&str>) -> Vec<&str> {
    value
        .map(|v| v.split(',').map(str::trim).filter(|s| !s.is_empty()).collect())
        .unwrap_or_default()
}

impl FromIterator<(String, String)> for ReportSettings {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut settings = Self::default();
        for (k, v) in iter {
            settings.insert(k, v);
        }
        settings
    }
}
