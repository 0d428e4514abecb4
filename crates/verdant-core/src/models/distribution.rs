//! Monthly service distribution value type.
//!
//! `services_per_month` is persisted as a JSON-encoded array of 12
//! integers. A legacy form, a brace-delimited comma list resembling
//! `{2,2,2,2,...}`, still exists in older rows; the decoder accepts both
//! shapes and falls back to a default distribution of two visits per month
//! on any parse failure. New writes always produce the canonical JSON
//! array.

use std::ops::Index;

use serde::{Deserialize, Serialize};

/// Per-month visit counts for a calendar year, January first.
///
/// # Examples
///
/// ```rust
/// use verdant_core::models::MonthlyDistribution;
///
/// // Canonical JSON form
/// let dist = MonthlyDistribution::from_db_value("[2,2,2,2,1,1,1,1,2,2,2,2]");
/// assert_eq!(dist.total(), 20);
///
/// // Legacy brace-delimited form
/// let legacy = MonthlyDistribution::from_db_value("{2,2,2,2,1,1,1,1,2,2,2,2}");
/// assert_eq!(legacy, dist);
///
/// // Garbage degrades to the default rather than failing
/// let fallback = MonthlyDistribution::from_db_value("not a distribution");
/// assert_eq!(fallback, MonthlyDistribution::default());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthlyDistribution(pub [u32; 12]);

impl MonthlyDistribution {
    /// Decode a persisted representation, tolerating both the canonical
    /// JSON array and the legacy brace-delimited list. Any malformed or
    /// wrong-length value degrades to the default distribution.
    pub fn from_db_value(raw: &str) -> Self {
        Self::parse(raw).unwrap_or_default()
    }

    fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let values: Vec<u32> = if trimmed.starts_with('{') && trimmed.ends_with('}') {
            trimmed[1..trimmed.len() - 1]
                .split(',')
                .map(|part| part.trim().parse().ok())
                .collect::<Option<Vec<_>>>()?
        } else {
            serde_json::from_str(trimmed).ok()?
        };

        let counts: [u32; 12] = values.try_into().ok()?;
        Some(Self(counts))
    }

    /// Encode to the canonical JSON array form for persistence.
    pub fn to_db_value(&self) -> String {
        let parts: Vec<String> = self.0.iter().map(u32::to_string).collect();
        format!("[{}]", parts.join(","))
    }

    /// Total visits across all twelve months.
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    /// The underlying per-month counts, January first.
    pub fn counts(&self) -> &[u32; 12] {
        &self.0
    }
}

impl Default for MonthlyDistribution {
    /// Two visits per month, the fallback for unreadable legacy rows.
    fn default() -> Self {
        Self([2; 12])
    }
}

impl From<[u32; 12]> for MonthlyDistribution {
    fn from(counts: [u32; 12]) -> Self {
        Self(counts)
    }
}

impl Index<usize> for MonthlyDistribution {
    type Output = u32;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}
