//! Dashboard data types.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::accounting::TransactionType;

/// Dashboard stats response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Sum of asset values.
    pub total_assets: Decimal,
    /// Sum of liability amounts.
    pub total_liabilities: Decimal,
    /// Assets minus liabilities.
    pub net_worth: Decimal,
    /// Active employees.
    pub employee_count: usize,
    /// Sum of income transactions.
    pub total_revenue: Decimal,
    /// Sum of expense transactions.
    pub total_expenses: Decimal,
    /// Income and expense bars.
    pub cash_flow: Vec<CashFlowPoint>,
}

/// One bar of the cash flow chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CashFlowPoint {
    /// Bar label.
    pub name: String,
    /// Bar height.
    pub amount: Decimal,
}

impl CashFlowPoint {
    /// Creates a bar labelled for a transaction type.
    #[must_use]
    pub fn new(transaction_type: TransactionType, amount: Decimal) -> Self {
        let name = match transaction_type {
            TransactionType::Income => "Income",
            TransactionType::Expense => "Expenses",
        };
        Self {
            name: name.to_string(),
            amount,
        }
    }
}
