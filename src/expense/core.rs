//! Defines the core data model for expenses: the record type, its field
//! newtypes, and the validation/normalization applied when a record is
//! created.

use std::{
    fmt::Display,
    str::FromStr,
    sync::atomic::{AtomicU64, Ordering},
    time::{SystemTime, UNIX_EPOCH},
};

use serde::{Deserialize, Serialize};
use time::{
    Date, OffsetDateTime, UtcOffset, format_description::BorrowedFormatItem,
    macros::format_description,
};

use crate::Error;

/// The format used for dates on the wire and in the storage slot.
pub(crate) const ISO_DATE_FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day]");

/// The category an expense falls back to when none was given.
pub const DEFAULT_CATEGORY: &str = "Other";

/// The opaque ID of an expense.
///
/// IDs are assigned once when the record is created and never change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(transparent)]
pub struct ExpenseId(String);

impl ExpenseId {
    /// Generate a fresh ID: the current Unix time in milliseconds plus a
    /// process-unique counter suffix, so IDs minted within the same
    /// millisecond stay distinct.
    pub(crate) fn generate() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);

        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis())
            .unwrap_or_default();
        let suffix = COUNTER.fetch_add(1, Ordering::Relaxed);

        Self(format!("{millis}-{suffix:04x}"))
    }

    /// Create an ID from a raw string without generating a new one.
    ///
    /// The caller should ensure that the string is unique within the store.
    pub fn new_unchecked(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl AsRef<str> for ExpenseId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for ExpenseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The name of an expense, e.g., 'Coffee', 'Bus fare'.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(transparent)]
pub struct ExpenseName(String);

impl ExpenseName {
    /// Create an expense name, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyExpenseName] if `name` is
    /// empty or contains only whitespace.
    pub fn new(name: &str) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            Err(Error::EmptyExpenseName)
        } else {
            Ok(Self(name.to_string()))
        }
    }

    /// Create an expense name without validation.
    ///
    /// The caller should ensure that the string is not empty.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl AsRef<str> for ExpenseName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for ExpenseName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExpenseName::new(s)
    }
}

impl Display for ExpenseName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The category an expense is grouped under, e.g., 'Food', 'Transport'.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Hash)]
#[serde(transparent)]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a category name, falling back to [DEFAULT_CATEGORY] when
    /// `name` is empty or contains only whitespace.
    pub fn new(name: &str) -> Self {
        let name = name.trim();

        if name.is_empty() {
            Self::default()
        } else {
            Self(name.to_string())
        }
    }
}

impl Default for CategoryName {
    fn default() -> Self {
        Self(DEFAULT_CATEGORY.to_string())
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for CategoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single expense record.
///
/// To create a new `Expense`, use [Expense::build].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// The ID of the expense.
    pub id: ExpenseId,
    /// A short description of what the money was spent on.
    pub name: ExpenseName,
    /// The amount of money spent, normalized to two decimal places.
    ///
    /// Stored as a fixed two-decimal string on the wire.
    #[serde(with = "amount_string")]
    pub amount: f64,
    /// The category the expense is grouped under.
    pub category: CategoryName,
    /// When the money was spent.
    #[serde(with = "iso_date")]
    pub date: Date,
}

impl Expense {
    /// Create a new expense.
    ///
    /// Shortcut for [ExpenseBuilder] for discoverability.
    pub fn build(name: ExpenseName, amount: f64) -> ExpenseBuilder {
        ExpenseBuilder {
            name,
            amount,
            category: None,
            date: None,
        }
    }
}

/// A builder for creating [Expense] instances.
///
/// The category defaults to [DEFAULT_CATEGORY] and the date defaults to the
/// current date in the local timezone. Once the optional fields are set,
/// call [ExpenseBuilder::finalize] to validate the amount and mint the ID.
#[derive(Debug, PartialEq, Clone)]
pub struct ExpenseBuilder {
    name: ExpenseName,
    amount: f64,
    category: Option<CategoryName>,
    date: Option<Date>,
}

impl ExpenseBuilder {
    /// Set the category of the expense.
    pub fn category(mut self, category: CategoryName) -> Self {
        self.category = Some(category);
        self
    }

    /// Set the date the expense happened on.
    pub fn date(mut self, date: Date) -> Self {
        self.date = Some(date);
        self
    }

    /// Validate the amount, apply the category and date defaults, and
    /// assign a fresh ID.
    ///
    /// `local_offset` is used to compute today's date when no date was set.
    ///
    /// # Errors
    ///
    /// Returns [Error::NegativeAmount] if the amount is below zero and
    /// [Error::InvalidAmount] if it is not a finite number.
    pub fn finalize(self, local_offset: UtcOffset) -> Result<Expense, Error> {
        if !self.amount.is_finite() {
            return Err(Error::InvalidAmount(self.amount.to_string()));
        }

        if self.amount < 0.0 {
            return Err(Error::NegativeAmount(self.amount));
        }

        let date = self
            .date
            .unwrap_or_else(|| OffsetDateTime::now_utc().to_offset(local_offset).date());

        Ok(Expense {
            id: ExpenseId::generate(),
            name: self.name,
            amount: round_amount(self.amount),
            category: self.category.unwrap_or_default(),
            date,
        })
    }
}

/// Round `amount` to two decimal places, the precision expenses are stored
/// with.
pub(crate) fn round_amount(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Parse the raw text of the amount form field.
///
/// # Errors
///
/// Returns [Error::InvalidAmount] if the text is empty or not a number and
/// [Error::NegativeAmount] if the number is below zero.
pub(crate) fn parse_amount(raw: &str) -> Result<f64, Error> {
    let amount: f64 = raw
        .trim()
        .parse()
        .map_err(|_| Error::InvalidAmount(raw.to_string()))?;

    if !amount.is_finite() {
        return Err(Error::InvalidAmount(raw.to_string()));
    }

    if amount < 0.0 {
        return Err(Error::NegativeAmount(amount));
    }

    Ok(amount)
}

/// Parse the raw text of the date form field as an ISO 8601 calendar date.
///
/// # Errors
///
/// Returns [Error::MissingDate] if the text is empty and
/// [Error::InvalidDate] if it is not a valid date.
pub(crate) fn parse_iso_date(raw: &str) -> Result<Date, Error> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(Error::MissingDate);
    }

    Date::parse(raw, ISO_DATE_FORMAT).map_err(|_| Error::InvalidDate(raw.to_string()))
}

mod amount_string {
    //! Serializes amounts as fixed two-decimal strings, the format the
    //! storage slot uses.

    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S>(amount: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{amount:.2}"))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;

        text.parse()
            .map_err(|_| de::Error::custom(format!("\"{text}\" is not a valid amount")))
    }
}

mod iso_date {
    //! Serializes dates as ISO 8601 calendar dates, e.g. "2024-01-31".

    use serde::{Deserialize, Deserializer, Serializer, de};
    use time::Date;

    use super::ISO_DATE_FORMAT;

    pub fn serialize<S>(date: &Date, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let text = date.format(ISO_DATE_FORMAT).map_err(serde::ser::Error::custom)?;

        serializer.serialize_str(&text)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Date, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;

        Date::parse(&text, ISO_DATE_FORMAT)
            .map_err(|_| de::Error::custom(format!("\"{text}\" is not a valid date")))
    }
}


#[cfg(test)]
mod category_name_tests {
    use crate::expense::core::{CategoryName, DEFAULT_CATEGORY};

    #[test]
    fn new_defaults_on_empty_string() {
        let category = CategoryName::new("");

        assert_eq!(category.as_ref(), DEFAULT_CATEGORY);
    }

    #[test]
    fn new_keeps_non_empty_string() {
        let category = CategoryName::new("Transport");

        assert_eq!(category.as_ref(), "Transport");
    }
}


#[cfg(test)]
mod parse_tests {
    use time::macros::date;

    use crate::{
        Error,
        expense::core::{parse_amount, parse_iso_date},
    };

    #[test]
    fn parse_amount_accepts_decimals() {
        assert_eq!(parse_amount("3.5"), Ok(3.5));
    }

    #[test]
    fn parse_amount_rejects_text() {
        assert_eq!(
            parse_amount("lots"),
            Err(Error::InvalidAmount("lots".to_string()))
        );
    }

    #[test]
    fn parse_amount_rejects_empty_string() {
        assert!(matches!(parse_amount(""), Err(Error::InvalidAmount(_))));
    }

    #[test]
    fn parse_amount_rejects_negative_numbers() {
        assert_eq!(parse_amount("-5"), Err(Error::NegativeAmount(-5.0)));
    }

    #[test]
    fn parse_iso_date_accepts_calendar_dates() {
        assert_eq!(parse_iso_date("2024-01-02"), Ok(date!(2024 - 01 - 02)));
    }

    #[test]
    fn parse_iso_date_rejects_empty_string() {
        assert_eq!(parse_iso_date(""), Err(Error::MissingDate));
    }

    #[test]
    fn parse_iso_date_rejects_garbage() {
        assert_eq!(
            parse_iso_date("yesterday"),
            Err(Error::InvalidDate("yesterday".to_string()))
        );
    }
}
