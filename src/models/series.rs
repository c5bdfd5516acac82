//! Balance history response
//!
//! The JSON document the backend answers a [`HistoryQuery`] with, either a
//! set of aligned per-day balance series or an explicit error payload.
//!
//! [`HistoryQuery`]: super::query::HistoryQuery

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::error::{HistoryError, HistoryResult};

/// Balances of one budget, one value per day of the response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetSeries {
    /// Budget name
    pub name: String,
    /// Balance on each day, aligned with [`SeriesResponse::days`]
    #[serde(deserialize_with = "deserialize_balances")]
    pub data: Vec<f64>,
}

impl BudgetSeries {
    /// Create a series
    pub fn new(name: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }
}

/// Aligned balance series for the requested budgets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesResponse {
    /// Day labels, in chronological order
    pub days: Vec<String>,
    /// One series per budget, in the order the backend returned them
    pub budgets: Vec<BudgetSeries>,
}

impl SeriesResponse {
    /// Create a response
    pub fn new(days: Vec<String>, budgets: Vec<BudgetSeries>) -> Self {
        Self { days, budgets }
    }

    /// Number of days on the time axis
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Check that every series lines up with the time axis
    ///
    /// A response with no budgets is valid. Otherwise `days` must be
    /// non-empty and every budget must carry exactly one value per day.
    pub fn validate(&self) -> HistoryResult<()> {
        if self.budgets.is_empty() {
            return Ok(());
        }

        if self.days.is_empty() {
            return Err(HistoryError::Validation(format!(
                "response has {} budget(s) but no days",
                self.budgets.len()
            )));
        }

        for budget in &self.budgets {
            if budget.data.len() != self.days.len() {
                return Err(HistoryError::Validation(format!(
                    "budget '{}' has {} value(s) for {} day(s)",
                    budget.name,
                    budget.data.len(),
                    self.days.len()
                )));
            }
        }

        Ok(())
    }
}

/// Error payload returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorPayload {
    /// Human readable message
    pub error: String,
}

/// Everything a successful exchange with the backend can yield
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiReply {
    /// The backend refused the query; variant order makes an `error` field
    /// win over any series data in the same body
    Error(ErrorPayload),
    /// Balance series to chart
    Series(SeriesResponse),
}

impl ApiReply {
    /// Parse a response body
    pub fn from_json(body: &str) -> HistoryResult<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// The error message, if this is an error payload
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(payload) => Some(&payload.error),
            Self::Series(_) => None,
        }
    }
}

/// Accept balances as JSON numbers or as numeric strings
///
/// Decimal balances may be rendered as `"125.50"` by the backend.
fn deserialize_balances<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Balance {
        Number(f64),
        Text(String),
    }

    let raw: Vec<Balance> = Vec::deserialize(deserializer)?;
    raw.into_iter()
        .map(|value| match value {
            Balance::Number(n) => Ok(n),
            Balance::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| de::Error::custom(format!("invalid balance '{}'", s))),
        })
        .collect()
}
