use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::time::parse_calendar_date;
use crate::api::{NodeId, ScatterMode};

/// A single work item as delivered by the activity feed.
///
/// Dates are kept as received text and parsed on demand by [`Activity::span`].
/// A null, missing or non-string date decodes to its raw text (empty for
/// null/missing) and only fails when the span is taken.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub node_id: NodeId,
    /// Duration in days.
    pub duration: f64,
    #[serde(default, deserialize_with = "date_text")]
    pub start_date: String,
    #[serde(default, deserialize_with = "date_text")]
    pub end_date: String,
    #[serde(default)]
    pub direct_prerequisites: Vec<NodeId>,
    #[serde(default)]
    pub all_prerequisites: Vec<NodeId>,
    #[serde(default)]
    pub direct_dependencies: Vec<NodeId>,
    #[serde(default)]
    pub all_dependencies: Vec<NodeId>,
}

fn date_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(text)) => text,
        None | Some(Value::Null) => String::new(),
        Some(other) => other.to_string(),
    })
}

impl Activity {
    pub fn new(
        node_id: i64,
        duration: f64,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        Self {
            node_id: NodeId::new(node_id),
            duration,
            start_date: start_date.into(),
            end_date: end_date.into(),
            direct_prerequisites: Vec::new(),
            all_prerequisites: Vec::new(),
            direct_dependencies: Vec::new(),
            all_dependencies: Vec::new(),
        }
    }

    /// Set direct and transitive prerequisites.
    pub fn with_prerequisites(mut self, direct: &[i64], all: &[i64]) -> Self {
        self.direct_prerequisites = direct.iter().copied().map(NodeId::new).collect();
        self.all_prerequisites = all.iter().copied().map(NodeId::new).collect();
        self
    }

    /// Set direct and transitive dependencies.
    pub fn with_dependencies(mut self, direct: &[i64], all: &[i64]) -> Self {
        self.direct_dependencies = direct.iter().copied().map(NodeId::new).collect();
        self.all_dependencies = all.iter().copied().map(NodeId::new).collect();
        self
    }

    pub fn prerequisites(&self, mode: ScatterMode) -> &[NodeId] {
        match mode {
            ScatterMode::Direct => &self.direct_prerequisites,
            ScatterMode::All => &self.all_prerequisites,
        }
    }

    pub fn dependencies(&self, mode: ScatterMode) -> &[NodeId] {
        match mode {
            ScatterMode::Direct => &self.direct_dependencies,
            ScatterMode::All => &self.all_dependencies,
        }
    }

    /// Parse the start/end pair into a validated calendar span.
    pub fn span(&self) -> Result<DateSpan, ActivityError> {
        let start = parse_calendar_date(&self.start_date).ok_or_else(|| {
            ActivityError::InvalidDate {
                node_id: self.node_id,
                field: "startDate",
                value: self.start_date.clone(),
            }
        })?;
        let end = parse_calendar_date(&self.end_date).ok_or_else(|| ActivityError::InvalidDate {
            node_id: self.node_id,
            field: "endDate",
            value: self.end_date.clone(),
        })?;
        DateSpan::new(start, end).ok_or(ActivityError::InvertedSpan {
            node_id: self.node_id,
            start,
            end,
        })
    }
}

/// Inclusive calendar interval `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSpan {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateSpan {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        if start <= end {
            Some(Self { start, end })
        } else {
            None
        }
    }

    /// True when this span shares at least one day with `[from, to]`.
    pub fn overlaps(&self, from: NaiveDate, to: NaiveDate) -> bool {
        self.start <= to && self.end >= from
    }
}

/// Per-record problems found while interpreting an activity.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ActivityError {
    #[error("activity {node_id}: invalid {field} '{value}'")]
    InvalidDate {
        node_id: NodeId,
        field: &'static str,
        value: String,
    },

    #[error("activity {node_id}: end date {end} precedes start date {start}")]
    InvertedSpan {
        node_id: NodeId,
        start: NaiveDate,
        end: NaiveDate,
    },
}

impl ActivityError {
    pub fn node_id(&self) -> NodeId {
        match self {
            Self::InvalidDate { node_id, .. } | Self::InvertedSpan { node_id, .. } => *node_id,
        }
    }
}
