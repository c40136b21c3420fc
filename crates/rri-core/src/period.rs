//! Reporting periods and their per-resource date formats
//!
//! Escrow resources are addressed per day (`YYYY-MM-DD`), activity resources
//! per month (`YYYY-MM`). Caller supplied strings are validated strictly:
//! the string must parse under the format and format back to itself.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Date granularity of a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateFormat {
    /// `YYYY-MM-DD`
    Daily,
    /// `YYYY-MM`
    Monthly,
}

impl DateFormat {
    /// The strftime pattern for this format
    pub fn pattern(self) -> &'static str {
        match self {
            DateFormat::Daily => "%Y-%m-%d",
            DateFormat::Monthly => "%Y-%m",
        }
    }

    /// Format a date
    pub fn format(self, date: NaiveDate) -> String {
        date.format(self.pattern()).to_string()
    }

    /// Parse a string under this format
    ///
    /// Monthly strings resolve to the first day of the month.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDate`] if the string does not parse, names a
    /// date that does not exist, or is not in canonical form (`2018-8-09`).
    pub fn parse(self, value: &str) -> Result<NaiveDate> {
        let parsed = match self {
            DateFormat::Daily => NaiveDate::parse_from_str(value, self.pattern()),
            // chrono cannot build a date without a day
            DateFormat::Monthly => {
                NaiveDate::parse_from_str(&format!("{}-01", value), "%Y-%m-%d")
            }
        };

        let date = parsed
            .map_err(|e| Error::invalid_date(value, self.pattern(), e.to_string()))?;

        if self.format(date) != value {
            return Err(Error::invalid_date(
                value,
                self.pattern(),
                "not in canonical form",
            ));
        }

        Ok(date)
    }
}

/// Date input accepted by resource operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period<'a> {
    /// The current date (UTC)
    #[default]
    Now,
    /// A calendar date
    Date(NaiveDate),
    /// A pre-formatted string, validated against the resource format
    Text(&'a str),
}

impl Period<'_> {
    /// Render this period under `format`
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDate`] for a [`Period::Text`] that does not
    /// satisfy [`DateFormat::parse`].
    pub fn render(&self, format: DateFormat) -> Result<String> {
        match self {
            Period::Now => Ok(format.format(Utc::now().date_naive())),
            Period::Date(date) => Ok(format.format(*date)),
            Period::Text(text) => format.parse(text).map(|date| format.format(date)),
        }
    }
}

impl<'a> From<&'a str> for Period<'a> {
    fn from(value: &'a str) -> Self {
        Period::Text(value)
    }
}

impl<'a> From<&'a String> for Period<'a> {
    fn from(value: &'a String) -> Self {
        Period::Text(value.as_str())
    }
}

impl From<NaiveDate> for Period<'_> {
    fn from(value: NaiveDate) -> Self {
        Period::Date(value)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Period<'_> {
    fn from(value: DateTime<Tz>) -> Self {
        Period::Date(value.date_naive())
    }
}

impl<'a, T: Into<Period<'a>>> From<Option<T>> for Period<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Period::Now, Into::into)
    }
}
