//! Financial summary handed to the model.
//!
//! Amounts serialize as JSON numbers so the prompt reads like plain data.

use nexus_shared::types::format_plain;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::accounting::{AccountingError, InvoiceStatus, ReportService, Transaction};
use crate::business::BusinessData;

/// Number of ledger lines quoted in the summary.
pub const RECENT_TRANSACTION_COUNT: usize = 5;

/// Revenue, expenses and net income as the model sees them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementTotals {
    /// Sum of income transactions.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_revenue: Decimal,
    /// Sum of expense transactions.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_expenses: Decimal,
    /// Revenue minus expenses.
    #[serde(with = "rust_decimal::serde::float")]
    pub net_income: Decimal,
}

/// Outstanding receivables as the model sees them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutstandingReceivables {
    /// Total of invoices neither paid nor void.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_outstanding: Decimal,
    /// Invoices not yet paid, void ones included.
    pub count: usize,
}

/// An amount with the number of documents behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountedTotal {
    /// Total of unpaid bills.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_unpaid: Decimal,
    /// Number of unpaid bills.
    pub count: usize,
}

/// Snapshot of the books embedded in the financial prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    /// Sum of asset values.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_assets: Decimal,
    /// Sum of liability amounts.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_liabilities: Decimal,
    /// Revenue, expenses and net income.
    pub income_statement: StatementTotals,
    /// Money owed to the business.
    pub receivables: OutstandingReceivables,
    /// Money the business owes.
    pub payables: CountedTotal,
    /// Last ledger lines, rendered as text.
    pub recent_transactions: Vec<String>,
    /// Value of the first cash asset, zero if there is none.
    #[serde(with = "rust_decimal::serde::float")]
    pub cash_position: Decimal,
}

impl FinancialSummary {
    /// Builds the summary from the current data.
    ///
    /// # Errors
    ///
    /// Returns `AccountingError::AmountOverflow` if a total is out of range.
    pub fn from_data(data: &BusinessData) -> Result<Self, AccountingError> {
        let sheet = ReportService::balance_sheet(data)?;
        let statement = ReportService::income_statement(data)?;
        let payables = ReportService::payables_overview(data)?;

        let receivables = OutstandingReceivables {
            total_outstanding: ReportService::receivables_overview(data)?.total_outstanding,
            count: data
                .invoices
                .iter()
                .filter(|i| i.status != InvoiceStatus::Paid)
                .count(),
        };

        // Tail of the sequence. New transactions are prepended, so these are
        // the oldest entries.
        let skip = data
            .transactions
            .len()
            .saturating_sub(RECENT_TRANSACTION_COUNT);
        let recent_transactions = data.transactions[skip..]
            .iter()
            .map(describe)
            .collect();

        let cash_position = data
            .assets
            .iter()
            .find(|a| a.name.contains("Cash"))
            .map_or(Decimal::ZERO, |a| a.value);

        Ok(Self {
            total_assets: sheet.total_assets,
            total_liabilities: sheet.total_liabilities,
            income_statement: StatementTotals {
                total_revenue: statement.total_revenue,
                total_expenses: statement.total_expenses,
                net_income: statement.net_income,
            },
            receivables,
            payables: CountedTotal {
                total_unpaid: payables.total_unpaid,
                count: payables.unpaid_count,
            },
            recent_transactions,
            cash_position,
        })
    }
}

fn describe(tx: &Transaction) -> String {
    format!("{}: {} (${})", tx.date, tx.description, format_plain(tx.amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounting::{Asset, AssetType, Invoice, TransactionType};
    use chrono::NaiveDate;
    use nexus_shared::types::{AssetId, InvoiceId, TransactionId};
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 10, d).unwrap()
    }

    fn tx(day: u32, description: &str, amount: Decimal) -> Transaction {
        Transaction {
            id: TransactionId::generate(),
            date: date(day),
            description: description.to_string(),
            category: "x".to_string(),
            amount,
            transaction_type: TransactionType::Income,
            reference_id: None,
        }
    }

    fn asset(name: &str, value: Decimal) -> Asset {
        Asset {
            id: AssetId::generate(),
            name: name.to_string(),
            value,
            asset_type: AssetType::Current,
            date_acquired: date(1),
            depreciation_rate: None,
        }
    }

    fn invoice(amount: Decimal, status: InvoiceStatus) -> Invoice {
        Invoice {
            id: InvoiceId::generate(),
            client_name: "Acme Corp".to_string(),
            date: date(1),
            due_date: date(30),
            items: vec![],
            total_amount: amount,
            status,
            notes: None,
        }
    }

    #[test]
    fn test_recent_transactions_are_the_last_five() {
        let data = BusinessData {
            transactions: (1..=7)
                .map(|d| tx(d, &format!("Entry {d}"), dec!(850.00)))
                .collect(),
            ..BusinessData::default()
        };

        let summary = FinancialSummary::from_data(&data).unwrap();
        assert_eq!(summary.recent_transactions.len(), 5);
        assert_eq!(summary.recent_transactions[0], "2023-10-03: Entry 3 ($850)");
        assert_eq!(summary.recent_transactions[4], "2023-10-07: Entry 7 ($850)");
    }

    #[test]
    fn test_cash_position_uses_first_cash_asset() {
        let data = BusinessData {
            assets: vec![
                asset("Accounts Receivable", dec!(45000)),
                asset("Cash on Hand", dec!(150000)),
                asset("Petty Cash", dec!(200)),
            ],
            ..BusinessData::default()
        };
        assert_eq!(FinancialSummary::from_data(&data).unwrap().cash_position, dec!(150000));

        let data = BusinessData {
            assets: vec![asset("cash drawer", dec!(10))],
            ..BusinessData::default()
        };
        assert_eq!(FinancialSummary::from_data(&data).unwrap().cash_position, Decimal::ZERO);
    }

    #[test]
    fn test_receivables_count_includes_void() {
        let data = BusinessData {
            invoices: vec![
                invoice(dec!(5000), InvoiceStatus::Sent),
                invoice(dec!(100), InvoiceStatus::Void),
                invoice(dec!(900), InvoiceStatus::Paid),
            ],
            ..BusinessData::default()
        };

        let summary = FinancialSummary::from_data(&data).unwrap();
        assert_eq!(summary.receivables.total_outstanding, dec!(5000));
        assert_eq!(summary.receivables.count, 2);
    }

    #[test]
    fn test_serializes_camel_case() {
        let summary = FinancialSummary::from_data(&BusinessData::default()).unwrap();
        let value = serde_json::to_value(summary).unwrap();
        assert!(value.get("totalAssets").is_some());
        assert!(value["incomeStatement"].get("netIncome").is_some());
        assert!(value["receivables"].get("totalOutstanding").is_some());
        assert!(value["payables"].get("totalUnpaid").is_some());
        assert!(value.get("recentTransactions").is_some());
        assert!(value.get("cashPosition").is_some());
    }

    #[test]
    fn test_amounts_serialize_as_numbers() {
        let data = BusinessData {
            assets: vec![asset("Cash on Hand", dec!(150000))],
            invoices: vec![invoice(dec!(2500.50), InvoiceStatus::Overdue)],
            transactions: vec![tx(1, "Consulting", dec!(8500))],
            ..BusinessData::default()
        };
        let value = serde_json::to_value(FinancialSummary::from_data(&data).unwrap()).unwrap();

        assert_eq!(value["totalAssets"], json!(150000.0));
        assert_eq!(value["cashPosition"], json!(150000.0));
        assert_eq!(value["incomeStatement"]["netIncome"], json!(8500.0));
        assert_eq!(value["receivables"]["totalOutstanding"], json!(2500.5));
        assert!(value["payables"]["totalUnpaid"].is_number());
    }

    #[test]
    fn test_overflowing_books_are_an_error() {
        let data = BusinessData {
            assets: vec![asset("Cash on Hand", Decimal::MAX), asset("Building", Decimal::MAX)],
            ..BusinessData::default()
        };
        assert!(matches!(
            FinancialSummary::from_data(&data),
            Err(AccountingError::AmountOverflow)
        ));
    }
}
