use crate::ledger::{AggregateView, Transaction};

/// One listing row, e.g. `Type: INCOME, Amount:     100.00, Category: food, Date: 01-01-2024`.
pub fn transaction_line(transaction: &Transaction) -> String {
    format!(
        "Type: {}, Amount: {:10.2}, Category: {}, Date: {}",
        transaction.kind().as_str().to_uppercase(),
        transaction.amount(),
        transaction.category(),
        transaction.formatted_date()
    )
}

pub fn amount_column(value: f64) -> String {
    format!("{value:10.2}")
}

pub fn section_title_month(month: u32, year: i32) -> String {
    format!("Summary for {year:04}-{month:02}")
}

pub fn section_title_category(category: &str) -> String {
    format!("Summary for {} transactions", title_case(category))
}

/// Labelled totals printed once after a listing: `(label, value, signed)`.
pub fn totals(view: &AggregateView<'_>, scope: TotalsScope<'_>) -> Vec<(String, f64, bool)> {
    match scope {
        TotalsScope::Overall => vec![
            ("Total Income :".to_string(), view.total_income, false),
            ("Total Outcome:".to_string(), view.total_outcome, false),
            ("Total Balance:".to_string(), view.balance(), true),
        ],
        TotalsScope::Month => vec![
            ("Total Monthly Income :".to_string(), view.total_income, false),
            ("Total Monthly Outcome:".to_string(), view.total_outcome, false),
            ("Monthly Balance      :".to_string(), view.balance(), true),
        ],
        TotalsScope::Category(category) => {
            let name = title_case(category);
            vec![
                (format!("Total Income of {name} :"), view.total_income, false),
                (format!("Total Outcome of {name}:"), view.total_outcome, false),
            ]
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum TotalsScope<'a> {
    Overall,
    Month,
    Category(&'a str),
}

/// Upper-cases the first letter of every whitespace separated word.
pub fn title_case(value: &str) -> String {
    value
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Ledger;
    use crate::time::FixedClock;
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn ledger() -> Ledger {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let mut ledger = Ledger::with_clock(Arc::new(FixedClock(today)));
        ledger.add("income", "100", "food", "01-01-2024").unwrap();
        ledger.add("outcome", "40", "food", "02-01-2024").unwrap();
        ledger
    }

    #[test]
    fn formats_transaction_rows() {
        let ledger = ledger();
        assert_eq!(
            transaction_line(&ledger.transactions()[0]),
            "Type: INCOME, Amount:     100.00, Category: food, Date: 01-01-2024"
        );
    }

    #[test]
    fn category_totals_use_title_case() {
        let ledger = ledger();
        let view = ledger.category_summary("food").unwrap();
        let rows = totals(&view, TotalsScope::Category("eating out"));
        assert_eq!(rows[0].0, "Total Income of Eating Out :");
        assert_eq!(rows[1].1, 40.0);
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn titles() {
        assert_eq!(section_title_month(3, 2024), "Summary for 2024-03");
        assert_eq!(section_title_category("food"), "Summary for Food transactions");
        assert_eq!(amount_column(-12.5), "    -12.50");
        assert_eq!(title_case("  side   gig "), "Side Gig");
    }
}
