//! Expense tracker: description/amount drafts and a running balance.

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub text: String,
    pub amount: f64,
}

/// Which draft field receives typed input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseField {
    Text,
    Amount,
}

/// Expense tracker state (rendering-agnostic)
#[derive(Debug, Clone)]
pub struct ExpenseTracker {
    pub text: String,
    pub amount: String,
    pub focused: ExpenseField,
    currency: String,
    transactions: Vec<Transaction>,
}

impl ExpenseTracker {
    pub fn new(currency: &str) -> Self {
        Self {
            text: String::new(),
            amount: String::new(),
            focused: ExpenseField::Text,
            currency: currency.to_string(),
            transactions: Vec::new(),
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn field(&self, which: ExpenseField) -> &str {
        match which {
            ExpenseField::Text => &self.text,
            ExpenseField::Amount => &self.amount,
        }
    }

    pub fn set_field(&mut self, which: ExpenseField, value: &str) {
        match which {
            ExpenseField::Text => self.text = value.to_string(),
            ExpenseField::Amount => self.amount = value.to_string(),
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focused = match self.focused {
            ExpenseField::Text => ExpenseField::Amount,
            ExpenseField::Amount => ExpenseField::Text,
        };
    }

    /// Record the drafts as a transaction.
    ///
    /// Both drafts must be filled in and the amount must parse; on success
    /// the drafts are cleared and focus returns to the description.
    pub fn add(&mut self) -> bool {
        if self.text.is_empty() || self.amount.is_empty() {
            return false;
        }
        let amount: f64 = match self.amount.trim().parse() {
            Ok(v) => v,
            Err(_) => {
                tracing::debug!(amount = %self.amount, "Rejected unparsable expense amount");
                return false;
            }
        };
        self.transactions.push(Transaction {
            text: std::mem::take(&mut self.text),
            amount,
        });
        self.amount.clear();
        self.focused = ExpenseField::Text;
        true
    }

    pub fn balance(&self) -> f64 {
        // `sum` of an empty f64 iterator is -0.0, which would print as "-0.00"
        self.transactions.iter().fold(0.0, |acc, t| acc + t.amount)
    }

    /// Balance with currency symbol and two decimals
    pub fn balance_display(&self) -> String {
        self.money(self.balance())
    }

    pub fn money(&self, amount: f64) -> String {
        format!("{}{:.2}", self.currency, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(tracker: &mut ExpenseTracker, text: &str, amount: &str) -> bool {
        tracker.set_field(ExpenseField::Text, text);
        tracker.set_field(ExpenseField::Amount, amount);
        tracker.add()
    }

    #[test]
    fn test_balance() {
        let mut tracker = ExpenseTracker::new("₹");
        assert!(add(&mut tracker, "Salary", "1000"));
        assert!(add(&mut tracker, "Coffee", "-3.5"));
        assert_eq!(tracker.transactions().len(), 2);
        assert_eq!(tracker.balance_display(), "₹996.50");
        assert_eq!(tracker.text, "");
        assert_eq!(tracker.amount, "");
    }

    #[test]
    fn test_fresh_tracker_shows_zero_balance() {
        let tracker = ExpenseTracker::new("₹");
        assert_eq!(tracker.balance(), 0.0);
        assert!(tracker.balance().is_sign_positive());
        assert_eq!(tracker.balance_display(), "₹0.00");
    }

    #[test]
    fn test_requires_both_fields() {
        let mut tracker = ExpenseTracker::new("$");
        assert!(!add(&mut tracker, "", "5"));
        assert!(!add(&mut tracker, "Lunch", ""));
        assert!(!add(&mut tracker, "Lunch", "five"));
        assert!(tracker.transactions().is_empty());
        assert_eq!(tracker.balance_display(), "$0.00");
    }

    #[test]
    fn test_focus_resets_after_add() {
        let mut tracker = ExpenseTracker::new("$");
        tracker.toggle_focus();
        assert_eq!(tracker.focused, ExpenseField::Amount);
        assert!(add(&mut tracker, "Book", "12"));
        assert_eq!(tracker.focused, ExpenseField::Text);
    }
}
