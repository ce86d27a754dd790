use std::fmt;

use serde::{Deserialize, Serialize};

/// A tracker issue key such as `MOJO-5611`. Both parts are stored uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WorkItemKey {
    pub prefix: String,
    pub number: String,
}

impl WorkItemKey {
    pub fn new(prefix: &str, number: &str) -> Self {
        Self {
            prefix: prefix.to_uppercase(),
            number: number.to_string(),
        }
    }
}

impl fmt::Display for WorkItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.prefix, self.number)
    }
}

/// Story points as reported by the tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Estimate {
    Number(serde_json::Number),
    Text(String),
    NotAvailable,
}

impl Estimate {
    pub fn from_value(value: Option<&serde_json::Value>) -> Self {
        match value {
            Some(serde_json::Value::Number(n)) => Estimate::Number(n.clone()),
            Some(serde_json::Value::String(s)) => Estimate::Text(s.clone()),
            _ => Estimate::NotAvailable,
        }
    }
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Estimate::Number(n) => write!(f, "{n}"),
            Estimate::Text(s) if !s.is_empty() => write!(f, "{s}"),
            _ => write!(f, "N/A"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemType {
    pub name: String,
    pub icon_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRef {
    pub name: String,
    pub url: String,
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemLabel {
    pub name: String,
    pub url: String,
}

/// Snapshot of an issue fetched from the tracker for a single run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDetails {
    pub key: String,
    pub summary: String,
    pub url: String,
    pub status: String,
    pub item_type: ItemType,
    pub project: ProjectRef,
    pub estimate: Estimate,
    #[serde(default)]
    pub labels: Vec<ItemLabel>,
}
