//! Query parameters and their wire encoding.
//!
//! Parameters keep insertion order so the generated query string is stable,
//! and date-time values are always rendered at seconds precision in UTC with
//! a literal `Z` suffix, which is the only date format the API accepts.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Wire format for `fromDateTime` / `toDateTime` values.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Response format requested from the API.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Format {
    /// JSON body
    #[default]
    Json,
    /// XML body
    Xml,
}

/// A single query parameter value.
///
/// `Absent` models a parameter that was declared but left unset; it is
/// dropped entirely when the query string is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// Free-form text
    Text(String),
    /// Whole number
    Integer(i64),
    /// Boolean flag, rendered as `true`/`false`
    Bool(bool),
    /// Timestamp, rendered with [`DATE_TIME_FORMAT`]
    DateTime(DateTime<Utc>),
    /// Unset value, never serialized
    Absent,
}

impl ParamValue {
    /// Render the value as it appears in the query string.
    ///
    /// Returns `None` for [`ParamValue::Absent`].
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use congress_core::ParamValue;
    ///
    /// let date = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
    /// assert_eq!(
    ///     ParamValue::from(date).to_query_value().as_deref(),
    ///     Some("2021-01-01T00:00:00Z")
    /// );
    /// assert_eq!(ParamValue::Absent.to_query_value(), None);
    /// ```
    pub fn to_query_value(&self) -> Option<String> {
        match self {
            ParamValue::Text(text) => Some(text.clone()),
            ParamValue::Integer(n) => Some(n.to_string()),
            ParamValue::Bool(flag) => Some(flag.to_string()),
            ParamValue::DateTime(at) => Some(at.format(DATE_TIME_FORMAT).to_string()),
            ParamValue::Absent => None,
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Text(value.clone())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Integer(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Integer(i64::from(value))
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Integer(i64::from(value))
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        ParamValue::Integer(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<usize> for ParamValue {
    fn from(value: usize) -> Self {
        ParamValue::Integer(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<Format> for ParamValue {
    fn from(value: Format) -> Self {
        ParamValue::Text(value.to_string())
    }
}

/// A calendar date means midnight UTC on that day.
impl From<NaiveDate> for ParamValue {
    fn from(value: NaiveDate) -> Self {
        ParamValue::DateTime(value.and_time(NaiveTime::MIN).and_utc())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for ParamValue {
    fn from(value: DateTime<Tz>) -> Self {
        ParamValue::DateTime(value.with_timezone(&Utc))
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ParamValue::Absent, Into::into)
    }
}

/// Ordered set of query parameters for one request.
///
/// Setting a key that already exists replaces its value in place, so the
/// key keeps its original position in the query string.
///
/// # Examples
///
/// ```
/// use congress_core::{Format, QueryParams};
///
/// let params = QueryParams::new().limit(20).offset(0).format(Format::Json);
/// assert_eq!(params.to_query_string(), "limit=20&offset=0&format=json");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, ParamValue)>,
}

impl QueryParams {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, replacing any existing value for that key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> &mut Self {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    /// Builder-style variant of [`QueryParams::set`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Number of records to return (the API caps this at 250).
    pub fn limit(self, limit: u32) -> Self {
        self.with("limit", limit)
    }

    /// Index of the first record to return.
    pub fn offset(self, offset: u64) -> Self {
        self.with("offset", offset)
    }

    /// Response format.
    pub fn format(self, format: Format) -> Self {
        self.with("format", format)
    }

    /// Lower bound on update date.
    pub fn from_date_time(self, from: impl Into<ParamValue>) -> Self {
        self.with("fromDateTime", from)
    }

    /// Upper bound on update date.
    pub fn to_date_time(self, to: impl Into<ParamValue>) -> Self {
        self.with("toDateTime", to)
    }

    /// Sort order, e.g. `updateDate desc`.
    pub fn sort(self, sort: impl Into<String>) -> Self {
        self.with("sort", sort.into())
    }

    /// Look up the value stored for `key`.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    /// Remove `key`, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        let index = self.entries.iter().position(|(existing, _)| existing == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Whether no parameters have been set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over parameters in insertion order, including absent ones.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Encode as `application/x-www-form-urlencoded`, skipping absent values.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.entries {
            if let Some(rendered) = value.to_query_value() {
                serializer.append_pair(key, &rendered);
            }
        }
        serializer.finish()
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        for (key, value) in iter {
            params.set(key, value);
        }
        params
    }
}
