use super::transaction::{Transaction, TransactionKind};

/// Totals over a set of transactions, together with the transactions themselves in ledger order.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateView<'a> {
    pub transactions: Vec<&'a Transaction>,
    pub total_income: f64,
    pub total_outcome: f64,
}

impl<'a> AggregateView<'a> {
    /// Builds a view over `transactions`, or `None` when nothing matched.
    pub(crate) fn collect<I>(transactions: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let transactions: Vec<&'a Transaction> = transactions.into_iter().collect();
        if transactions.is_empty() {
            return None;
        }
        let total_income = total_for(&transactions, TransactionKind::Income);
        let total_outcome = total_for(&transactions, TransactionKind::Outcome);
        Some(Self {
            transactions,
            total_income,
            total_outcome,
        })
    }

    pub fn balance(&self) -> f64 {
        self.total_income - self.total_outcome
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

fn total_for(transactions: &[&Transaction], kind: TransactionKind) -> f64 {
    transactions
        .iter()
        .filter(|txn| txn.kind() == kind)
        .map(|txn| txn.amount())
        .sum()
}
