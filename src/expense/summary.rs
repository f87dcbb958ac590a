//! Derived views over the expense store: the grand total and the
//! per-category subtotals displayed in the summary table.

use std::collections::HashMap;

use crate::expense::core::{CategoryName, Expense};

/// A category and the summed amount of its expenses.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySubtotal {
    /// The category the expenses are grouped under.
    pub category: CategoryName,
    /// The sum of all amounts in the category.
    pub subtotal: f64,
}

/// The sum of all expense amounts.
pub fn total(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|expense| expense.amount).sum()
}

/// Group expenses by category and sum the amounts per group.
///
/// Subtotals are returned in display order: largest first, ties broken by
/// category name so rendering is deterministic.
pub fn by_category(expenses: &[Expense]) -> Vec<CategorySubtotal> {
    let mut subtotals: HashMap<&CategoryName, f64> = HashMap::new();

    for expense in expenses {
        *subtotals.entry(&expense.category).or_insert(0.0) += expense.amount;
    }

    let mut subtotals: Vec<_> = subtotals
        .into_iter()
        .map(|(category, subtotal)| CategorySubtotal {
            category: category.clone(),
            subtotal,
        })
        .collect();

    subtotals.sort_by(|a, b| {
        b.subtotal
            .partial_cmp(&a.subtotal)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.category.cmp(&b.category))
    });

    subtotals
}

#[cfg(test)]
mod summary_tests {
    use time::{UtcOffset, macros::date};

    use crate::expense::core::{CategoryName, Expense, ExpenseName};

    use super::{by_category, total};

    fn get_test_expense(name: &str, amount: f64, category: &str) -> Expense {
        Expense::build(ExpenseName::new_unchecked(name), amount)
            .category(CategoryName::new(category))
            .date(date!(2024 - 01 - 01))
            .finalize(UtcOffset::UTC)
            .expect("Could not create test expense")
    }

    #[test]
    fn total_of_empty_store_is_zero() {
        assert_eq!(total(&[]), 0.0);
    }

    #[test]
    fn total_sums_all_amounts() {
        let expenses = vec![
            get_test_expense("Coffee", 3.5, "Food"),
            get_test_expense("Bus", 2.0, "Transport"),
        ];

        assert_eq!(total(&expenses), 5.5);
    }

    #[test]
    fn by_category_groups_and_sums() {
        let expenses = vec![
            get_test_expense("Coffee", 3.5, "Food"),
            get_test_expense("Bus", 2.0, "Transport"),
            get_test_expense("Lunch", 10.0, "Food"),
        ];

        let subtotals = by_category(&expenses);

        assert_eq!(subtotals.len(), 2);
        assert_eq!(subtotals[0].category.as_ref(), "Food");
        assert_eq!(subtotals[0].subtotal, 13.5);
        assert_eq!(subtotals[1].category.as_ref(), "Transport");
        assert_eq!(subtotals[1].subtotal, 2.0);
    }

    #[test]
    fn by_category_orders_largest_first() {
        let expenses = vec![
            get_test_expense("Coffee", 1.0, "Food"),
            get_test_expense("Flight", 500.0, "Travel"),
        ];

        let subtotals = by_category(&expenses);

        assert_eq!(subtotals[0].category.as_ref(), "Travel");
        assert_eq!(subtotals[1].category.as_ref(), "Food");
    }

    #[test]
    fn by_category_breaks_ties_by_name() {
        let expenses = vec![
            get_test_expense("Movie", 5.0, "Entertainment"),
            get_test_expense("Sandwich", 5.0, "Food"),
            get_test_expense("Bus", 5.0, "Transport"),
        ];

        let subtotals = by_category(&expenses);

        let categories: Vec<&str> = subtotals
            .iter()
            .map(|subtotal| subtotal.category.as_ref())
            .collect();
        assert_eq!(categories, vec!["Entertainment", "Food", "Transport"]);
    }

    #[test]
    fn subtotals_sum_to_grand_total() {
        let expenses = vec![
            get_test_expense("Coffee", 3.5, "Food"),
            get_test_expense("Bus", 2.0, "Transport"),
            get_test_expense("Movie", 12.25, "Entertainment"),
        ];

        let subtotal_sum: f64 = by_category(&expenses)
            .iter()
            .map(|subtotal| subtotal.subtotal)
            .sum();

        assert_eq!(subtotal_sum, total(&expenses));
    }
}
