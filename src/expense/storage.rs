//! The persistence adapter: reads and writes the single JSON slot that
//! holds all expenses between sessions.
//!
//! Loading fails soft. A missing slot means an empty store, an unparseable
//! slot is logged and treated as empty, and individually malformed entries
//! are dropped with a warning while the valid ones are kept. Saving is
//! best-effort: a write failure loses durability, not session state.

use std::{fs, io::ErrorKind, path::PathBuf};

use serde_json::Value;

use crate::expense::core::{
    CategoryName, Expense, ExpenseId, ExpenseName, ISO_DATE_FORMAT, round_amount,
};

/// The name of the storage slot inside the data directory.
///
/// The version suffix namespaces the slot so a future format change can use
/// a fresh file instead of migrating in place.
pub const STORAGE_FILE_NAME: &str = "outlay_expenses_v1.json";

/// Reads and writes the expense collection to a JSON file.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseStorage {
    path: PathBuf,
}

impl ExpenseStorage {
    /// Create a storage adapter for the slot inside `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            path: data_dir.into().join(STORAGE_FILE_NAME),
        }
    }

    /// Overwrite the slot with the serialized expense collection.
    ///
    /// Write failures are logged as warnings. The in-memory store remains
    /// the source of truth for the session either way.
    pub fn save(&self, expenses: &[Expense]) {
        let json = match serde_json::to_string_pretty(expenses) {
            Ok(json) => json,
            Err(error) => {
                tracing::warn!("Could not serialize expenses: {error}");
                return;
            }
        };

        if let Some(parent) = self.path.parent()
            && let Err(error) = fs::create_dir_all(parent)
        {
            tracing::warn!("Could not create data directory {parent:?}: {error}");
            return;
        }

        if let Err(error) = fs::write(&self.path, json) {
            tracing::warn!("Could not save expenses to {:?}: {error}", self.path);
        }
    }

    /// Read the expense collection from the slot.
    ///
    /// Returns an empty collection when the slot does not exist or cannot
    /// be parsed. Entries that do not fit the expected shape are dropped
    /// individually.
    pub fn load(&self) -> Vec<Expense> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == ErrorKind::NotFound => return Vec::new(),
            Err(error) => {
                tracing::warn!("Could not read expenses from {:?}: {error}", self.path);
                return Vec::new();
            }
        };

        let entries: Vec<Value> = match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(error) => {
                tracing::warn!(
                    "Stored expenses in {:?} are not a valid JSON array, starting fresh: {error}",
                    self.path
                );
                return Vec::new();
            }
        };

        entries
            .iter()
            .filter_map(|entry| {
                let expense = coerce_entry(entry);

                if expense.is_none() {
                    tracing::warn!("Dropping malformed stored expense: {entry}");
                }

                expense
            })
            .collect()
    }
}

/// Coerce one stored entry into an [Expense], or `None` if it is malformed.
///
/// The id, a non-empty name, and a valid ISO date are required. The amount
/// may be a fixed-decimal string or a bare number; a missing or non-numeric
/// amount degrades to zero. A missing category falls back to the default.
fn coerce_entry(entry: &Value) -> Option<Expense> {
    let id = entry.get("id")?.as_str().filter(|id| !id.is_empty())?;

    let name = entry
        .get("name")?
        .as_str()
        .map(str::trim)
        .filter(|name| !name.is_empty())?;

    let date_text = entry.get("date")?.as_str()?;
    let date = time::Date::parse(date_text, ISO_DATE_FORMAT).ok()?;

    let amount = match entry.get("amount") {
        Some(Value::String(text)) => text.trim().parse().unwrap_or(0.0),
        Some(Value::Number(number)) => number.as_f64().unwrap_or(0.0),
        _ => 0.0,
    };

    // Negative amounts cannot be created through the app, so one in the
    // slot means the entry was tampered with.
    if !amount.is_finite() || amount < 0.0 {
        return None;
    }

    let category = entry
        .get("category")
        .and_then(Value::as_str)
        .map(CategoryName::new)
        .unwrap_or_default();

    Some(Expense {
        id: ExpenseId::new_unchecked(id),
        name: ExpenseName::new_unchecked(name),
        amount: round_amount(amount),
        category,
        date,
    })
}
