//! Validated value types shared by the input boundaries (CLI, REST) and the core.
//!
//! Each type enforces its accepted range once, at construction, so code holding one of these
//! values never has to re-check it.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Errors that can occur when creating validated value types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValueError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,

    /// The input text was longer than the accepted maximum
    #[error("Text exceeds maximum length of {max} characters")]
    TooLong { max: usize },

    /// Height outside the accepted range
    #[error("height {0} cm is outside the accepted range {min}..={max} cm", min = HeightCm::MIN, max = HeightCm::MAX)]
    HeightOutOfRange(u16),

    /// Weight outside the accepted range
    #[error("weight {0} kg is outside the accepted range {min}..={max} kg", min = WeightKg::MIN, max = WeightKg::MAX)]
    WeightOutOfRange(u16),

    /// Birth date before the earliest accepted year
    #[error("birth date {0} is before {min}-01-01", min = BirthDate::MIN_YEAR)]
    BirthDateTooEarly(NaiveDate),

    /// Birth date could not be parsed
    #[error("invalid birth date '{0}' (expected YYYY-MM-DD)")]
    InvalidBirthDate(String),
}

/// A string type that guarantees non-empty content.
///
/// The input is trimmed of leading and trailing whitespace during construction and bounded
/// to [`NonEmptyText::MAX_LEN`] characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Maximum number of characters accepted after trimming.
    pub const MAX_LEN: usize = 200;

    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::Empty`] if the trimmed input is empty, or
    /// [`ValueError::TooLong`] if it exceeds [`Self::MAX_LEN`] characters.
    pub fn new(input: impl AsRef<str>) -> Result<Self, ValueError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValueError::Empty);
        }
        if trimmed.chars().count() > Self::MAX_LEN {
            return Err(ValueError::TooLong { max: Self::MAX_LEN });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for NonEmptyText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for NonEmptyText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NonEmptyText::new(&s).map_err(serde::de::Error::custom)
    }
}

/// Body height in whole centimetres, within `100..=250`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct HeightCm(u16);

impl HeightCm {
    pub const MIN: u16 = 100;
    pub const MAX: u16 = 250;

    pub fn new(cm: u16) -> Result<Self, ValueError> {
        if (Self::MIN..=Self::MAX).contains(&cm) {
            Ok(Self(cm))
        } else {
            Err(ValueError::HeightOutOfRange(cm))
        }
    }

    pub fn get(self) -> u16 {
        self.0
    }
}

impl TryFrom<u16> for HeightCm {
    type Error = ValueError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HeightCm> for u16 {
    fn from(value: HeightCm) -> Self {
        value.0
    }
}

/// Body weight in whole kilograms, within `30..=200`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct WeightKg(u16);

impl WeightKg {
    pub const MIN: u16 = 30;
    pub const MAX: u16 = 200;

    pub fn new(kg: u16) -> Result<Self, ValueError> {
        if (Self::MIN..=Self::MAX).contains(&kg) {
            Ok(Self(kg))
        } else {
            Err(ValueError::WeightOutOfRange(kg))
        }
    }

    pub fn get(self) -> u16 {
        self.0
    }
}

impl TryFrom<u16> for WeightKg {
    type Error = ValueError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WeightKg> for u16 {
    fn from(value: WeightKg) -> Self {
        value.0
    }
}

/// A birth date no earlier than 1940-01-01.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "NaiveDate", into = "NaiveDate")]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    pub const MIN_YEAR: i32 = 1940;

    pub fn new(date: NaiveDate) -> Result<Self, ValueError> {
        if date.year() < Self::MIN_YEAR {
            return Err(ValueError::BirthDateTooEarly(date));
        }
        Ok(Self(date))
    }

    /// Parses an ISO `YYYY-MM-DD` date.
    pub fn parse(input: &str) -> Result<Self, ValueError> {
        let date = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
            .map_err(|_| ValueError::InvalidBirthDate(input.to_owned()))?;
        Self::new(date)
    }

    pub fn date(self) -> NaiveDate {
        self.0
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u32 {
        self.0.month()
    }
}

impl TryFrom<NaiveDate> for BirthDate {
    type Error = ValueError;

    fn try_from(value: NaiveDate) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BirthDate> for NaiveDate {
    fn from(value: BirthDate) -> Self {
        value.0
    }
}

impl std::fmt::Display for BirthDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
