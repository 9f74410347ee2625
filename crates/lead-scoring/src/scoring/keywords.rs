use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// One entry of the ordered source-quality table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRule {
    pub keyword: String,
    pub points: f64,
}

impl SourceRule {
    fn new(keyword: &str, points: f64) -> Self {
        Self {
            keyword: keyword.to_string(),
            points,
        }
    }
}

/// Locale-specific keyword lists used by the consumer-note and source factors.
///
/// Matching is substring-based on lower-cased text. Source rules are evaluated in
/// order and the first match wins; any urgency keyword triggers the bonus once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringKeywords {
    #[serde(default)]
    pub urgency: Vec<String>,
    #[serde(default)]
    pub sources: Vec<SourceRule>,
}

impl Default for ScoringKeywords {
    fn default() -> Self {
        let urgency = [
            "spoed",
            "dringend",
            "urgent",
            "lekkage",
            "lekt",
            "kapot",
            "storing",
            "defect",
            "noodgeval",
            "zo snel mogelijk",
            "asap",
            "broken",
            "leak",
        ]
        .iter()
        .map(|keyword| keyword.to_string())
        .collect();

        let sources = vec![
            SourceRule::new("referral", 6.0),
            SourceRule::new("aanbeveling", 6.0),
            SourceRule::new("direct", 5.0),
            SourceRule::new("organic", 4.0),
            SourceRule::new("website", 3.0),
            SourceRule::new("partner", 3.0),
            SourceRule::new("paid", 2.0),
            SourceRule::new("google", 2.0),
            SourceRule::new("search", 2.0),
            SourceRule::new("social", 1.0),
            SourceRule::new("cold", -2.0),
            SourceRule::new("purchased", -2.0),
            SourceRule::new("gekocht", -2.0),
        ];

        Self { urgency, sources }
    }
}

impl ScoringKeywords {
    /// Read a keyword override file (JSON) and normalize it.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, KeywordConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| KeywordConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, KeywordConfigError> {
        let parsed: ScoringKeywords = serde_json::from_str(raw)?;
        Ok(parsed.normalized())
    }

    /// Lower-case and trim every keyword, dropping empties and non-finite points.
    pub fn normalized(self) -> Self {
        let urgency = self
            .urgency
            .into_iter()
            .map(|keyword| keyword.trim().to_lowercase())
            .filter(|keyword| !keyword.is_empty())
            .collect();

        let sources = self
            .sources
            .into_iter()
            .filter(|rule| rule.points.is_finite())
            .map(|rule| SourceRule {
                keyword: rule.keyword.trim().to_lowercase(),
                points: rule.points,
            })
            .filter(|rule| !rule.keyword.is_empty())
            .collect();

        Self { urgency, sources }
    }

    /// `text` must already be lower-cased.
    pub(crate) fn has_urgency(&self, text: &str) -> bool {
        self.urgency
            .iter()
            .any(|keyword| text.contains(keyword.as_str()))
    }

    /// `source` must already be lower-cased.
    pub(crate) fn source_points(&self, source: &str) -> Option<f64> {
        self.sources
            .iter()
            .find(|rule| source.contains(rule.keyword.as_str()))
            .map(|rule| rule.points)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum KeywordConfigError {
    #[error("unable to read keyword file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("keyword file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
