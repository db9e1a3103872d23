use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use leptos::*;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};
use std::fmt;
use thiserror::Error;

/// Server-assigned timesheet identifier.
///
/// The approvals API is not consistent about emitting ids as JSON strings or
/// integers, so both forms are accepted and normalised to a string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TimesheetId(String);

impl TimesheetId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for TimesheetId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(value) => Self(value),
            RawId::Number(value) => Self(value.to_string()),
        })
    }
}

impl fmt::Display for TimesheetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TimesheetId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TimesheetId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

// Decimal hour totals arrive either as numbers or as decimal strings ("37.50").
#[derive(Deserialize)]
#[serde(untagged)]
enum RawHours {
    Number(f64),
    Text(String),
}

impl RawHours {
    fn into_hours<E: serde::de::Error>(self) -> Result<f64, E> {
        match self {
            RawHours::Number(value) => Ok(value),
            RawHours::Text(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| E::custom(format!("invalid hour value `{}`", text))),
        }
    }
}

fn deserialize_hours<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    RawHours::deserialize(deserializer)?.into_hours()
}

fn deserialize_optional_hours<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<RawHours>::deserialize(deserializer)?
        .map(RawHours::into_hours)
        .transpose()
}

// `submitted_at` is display-only: RFC 3339, naive date-times (read as UTC) and
// bare dates are accepted, anything else becomes `None`.
fn deserialize_lenient_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<Value>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let Some(text) = raw.as_str().map(str::trim) else {
        log::debug!("ignoring non-string submitted_at: {}", raw);
        return Ok(None);
    };
    let parsed = DateTime::parse_from_rfc3339(text)
        .map(|ts| ts.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
                .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f"))
                .ok()
                .map(|naive| naive.and_utc())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|naive| naive.and_utc())
        });
    if parsed.is_none() {
        log::debug!("ignoring unparseable submitted_at `{}`", text);
    }
    Ok(parsed)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimesheetSummary {
    pub id: TimesheetId,
    #[serde(default)]
    pub created_by_full_name: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_hours")]
    pub total_hours: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient_timestamp")]
    pub submitted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimesheetEntry {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default)]
    pub task: Option<String>,
    #[serde(default, deserialize_with = "deserialize_hours")]
    pub hours: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimesheetDetail {
    pub id: TimesheetId,
    #[serde(default)]
    pub created_by_full_name: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub entries: Vec<TimesheetEntry>,
    #[serde(default, deserialize_with = "deserialize_optional_hours")]
    pub total_hours: Option<f64>,
    #[serde(default)]
    pub rejection_reason: Option<String>,
}

impl TimesheetDetail {
    /// Server total when provided, otherwise the sum of the entries.
    pub fn effective_total_hours(&self) -> f64 {
        self.total_hours
            .unwrap_or_else(|| self.entries.iter().map(|entry| entry.hours).sum())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RejectTimesheetRequest {
    pub rejection_reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    /// Non-success status from an action endpoint, e.g.
    /// `Approval failed: 409: Timesheet already approved`.
    pub fn http_status(context: &str, status: u16, server_message: Option<String>) -> Self {
        let message = server_message
            .filter(|msg| !msg.trim().is_empty())
            .unwrap_or_else(|| "Unknown error".to_string());
        Self {
            error: format!("{}: {}: {}", context, status, message),
            code: "HTTP_ERROR".to_string(),
            details: Some(json!({ "status": status })),
        }
    }

    #[cfg(test)]
    pub fn status(&self) -> Option<u16> {
        self.details
            .as_ref()
            .and_then(|details| details.get("status"))
            .and_then(Value::as_u64)
            .and_then(|status| u16::try_from(status).ok())
    }
}
