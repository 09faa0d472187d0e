use std::sync::Arc;

use chrono::Datelike;
use tracing::debug;

use crate::{
    errors::{LedgerError, Result},
    time::{Clock, SystemClock},
};

use super::{summary::AggregateView, transaction::Transaction};

/// Date-ordered collection of every recorded transaction.
///
/// Transactions only enter through [`Ledger::add`], which validates the raw
/// field text against the ledger's clock and keeps the sequence sorted by
/// date. Transactions sharing a date stay in insertion order.
#[derive(Debug, Clone)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    clock: Arc<dyn Clock>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            transactions: Vec::new(),
            clock,
        }
    }

    /// Validates and records a transaction given as raw text fields.
    pub fn add(&mut self, kind: &str, amount: &str, category: &str, date: &str) -> Result<()> {
        let transaction = Transaction::parse(kind, amount, category, date, self.clock.today())?;
        self.insert(transaction);
        Ok(())
    }

    fn insert(&mut self, transaction: Transaction) {
        let index = self
            .transactions
            .partition_point(|existing| existing.date() <= transaction.date());
        debug!(
            kind = %transaction.kind(),
            amount = transaction.amount(),
            category = transaction.category(),
            date = %transaction.formatted_date(),
            index,
            "transaction recorded"
        );
        self.transactions.insert(index, transaction);
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Totals across the whole ledger; `None` when there are no transactions.
    pub fn summary(&self) -> Option<AggregateView<'_>> {
        AggregateView::collect(&self.transactions)
    }

    /// Totals for one calendar month.
    ///
    /// `month` must be 1-12 and `year` must not be after the current year.
    pub fn month_summary(&self, month: u32, year: i32) -> Result<Option<AggregateView<'_>>> {
        let current_year = self.clock.today().year();
        if !(1..=12).contains(&month) || !(0..=current_year).contains(&year) {
            return Err(LedgerError::InvalidPeriod { month, year });
        }
        Ok(AggregateView::collect(self.transactions.iter().filter(
            |txn| txn.date().year() == year && txn.date().month() == month,
        )))
    }

    /// Totals for one category, matched after trimming and lower-casing `category`.
    pub fn category_summary(&self, category: &str) -> Option<AggregateView<'_>> {
        let needle = category.trim().to_lowercase();
        AggregateView::collect(
            self.transactions
                .iter()
                .filter(|txn| txn.category() == needle),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::FixedClock;
    use chrono::NaiveDate;

    fn ledger() -> Ledger {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        Ledger::with_clock(Arc::new(FixedClock(today)))
    }

    fn sample_ledger() -> Ledger {
        let mut ledger = ledger();
        ledger.add("income", "100", "food", "01-01-2024").unwrap();
        ledger.add("outcome", "40", "food", "02-01-2024").unwrap();
        ledger
    }

    fn categories(ledger: &Ledger) -> Vec<&str> {
        ledger.transactions().iter().map(|txn| txn.category()).collect()
    }

    #[test]
    fn add_keeps_dates_sorted() {
        let mut ledger = ledger();
        ledger.add("income", "1", "c", "10-03-2024").unwrap();
        ledger.add("income", "1", "a", "01-01-2023").unwrap();
        ledger.add("outcome", "1", "d", "15-06-2024").unwrap();
        ledger.add("outcome", "1", "b", "28-02-2024").unwrap();

        assert_eq!(categories(&ledger), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn equal_dates_keep_insertion_order() {
        let mut ledger = ledger();
        ledger.add("income", "1", "first", "05-05-2024").unwrap();
        ledger.add("income", "1", "early", "01-05-2024").unwrap();
        ledger.add("outcome", "1", "second", "05-05-2024").unwrap();
        ledger.add("income", "1", "third", "05-05-2024").unwrap();

        assert_eq!(categories(&ledger), vec!["early", "first", "second", "third"]);
    }

    #[test]
    fn many_inserts_stay_sorted() {
        let mut ledger = ledger();
        let mut seed: u32 = 7;
        for _ in 0..200 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let day = seed % 28 + 1;
            let month = (seed / 28) % 5 + 1;
            let date = format!("{day:02}-{month:02}-2024");
            ledger.add("outcome", "2.5", "misc", &date).unwrap();
        }

        assert_eq!(ledger.len(), 200);
        assert!(ledger
            .transactions()
            .windows(2)
            .all(|pair| pair[0].date() <= pair[1].date()));
    }

    #[test]
    fn failed_add_leaves_ledger_untouched() {
        let mut ledger = sample_ledger();
        let err = ledger
            .add("income", "10", "food", "16-06-2024")
            .expect_err("future date must be rejected");
        assert!(matches!(err, LedgerError::InvalidDate { .. }));
        assert!(matches!(
            ledger.add("refund", "10", "food", "01-01-2024"),
            Err(LedgerError::InvalidKind(_))
        ));
        assert!(matches!(
            ledger.add("income", "-10", "food", "01-01-2024"),
            Err(LedgerError::InvalidAmount(_))
        ));
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn summary_of_empty_ledger_is_none() {
        assert!(ledger().summary().is_none());
    }

    #[test]
    fn summary_totals_income_and_outcome() {
        let ledger = sample_ledger();
        let view = ledger.summary().expect("ledger has transactions");
        assert_eq!(view.total_income, 100.0);
        assert_eq!(view.total_outcome, 40.0);
        assert_eq!(view.balance(), 60.0);
        assert_eq!(view.len(), 2);
    }

    #[test]
    fn month_summary_filters_by_calendar_month() {
        let mut ledger = sample_ledger();
        ledger.add("income", "7", "gift", "31-12-2023").unwrap();
        ledger.add("outcome", "3", "food", "01-02-2024").unwrap();

        let january = ledger
            .month_summary(1, 2024)
            .unwrap()
            .expect("january has transactions");
        assert_eq!(january.len(), 2);
        assert_eq!(january.total_income, 100.0);
        assert_eq!(january.total_outcome, 40.0);

        let march = ledger.month_summary(3, 2024).unwrap();
        assert!(march.is_none());
    }

    #[test]
    fn month_summary_without_matches_is_none() {
        let ledger = sample_ledger();
        assert!(ledger.month_summary(2, 2024).unwrap().is_none());
        assert!(ledger.month_summary(1, 2023).unwrap().is_none());
    }

    #[test]
    fn month_summary_rejects_invalid_periods() {
        let ledger = sample_ledger();
        for (month, year) in [(0, 2024), (13, 2024), (1, 2025), (1, -1)] {
            assert!(
                matches!(
                    ledger.month_summary(month, year),
                    Err(LedgerError::InvalidPeriod { .. })
                ),
                "{month}/{year} should be rejected"
            );
        }
    }

    #[test]
    fn category_summary_normalizes_input() {
        let ledger = sample_ledger();
        let food = ledger.category_summary("  FOOD ").expect("food matches");
        assert_eq!(food.len(), 2);
        assert_eq!(food.balance(), 60.0);
        assert!(ledger.category_summary("rent").is_none());
    }

    #[test]
    fn categories_are_stored_lower_case() {
        let mut ledger = ledger();
        ledger.add("income", "5", "  Side Gig ", "01-01-2024").unwrap();
        assert_eq!(categories(&ledger), vec!["side gig"]);
        assert!(ledger.category_summary("side gig").is_some());
    }
}
