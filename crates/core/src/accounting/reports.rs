//! Financial summaries and aging reports.

use chrono::NaiveDate;
use nexus_shared::types::{BillId, InvoiceId};
use rust_decimal::Decimal;
use serde::Serialize;

use super::amount::{checked_difference, checked_sum};
use super::error::AccountingError;
use super::holdings::HoldingsService;
use super::ledger::LedgerService;
use super::types::{BillStatus, InvoiceStatus, TransactionType};
use crate::business::BusinessData;

/// Simplified balance sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSheetSummary {
    /// Sum of asset values.
    pub total_assets: Decimal,
    /// Sum of liability amounts.
    pub total_liabilities: Decimal,
    /// Assets minus liabilities.
    pub net_worth: Decimal,
}

/// Simplified profit and loss statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeStatementSummary {
    /// Sum of income transactions.
    pub total_revenue: Decimal,
    /// Sum of expense transactions.
    pub total_expenses: Decimal,
    /// Revenue minus expenses.
    pub net_income: Decimal,
}

/// Receivables headline figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceivablesOverview {
    /// Total of invoices that are neither paid nor void.
    pub total_outstanding: Decimal,
    /// Number of sent or overdue invoices.
    pub awaiting_payment_count: usize,
}

/// Payables headline figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayablesOverview {
    /// Total of unpaid bills.
    pub total_unpaid: Decimal,
    /// Number of unpaid bills.
    pub unpaid_count: usize,
}

/// Receivables and payables side by side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountsOverview {
    /// Money owed to the business.
    pub receivables: ReceivablesOverview,
    /// Money the business owes.
    pub payables: PayablesOverview,
}

/// An outstanding invoice in the aged receivables list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgedReceivable {
    /// Invoice id.
    pub invoice_id: InvoiceId,
    /// Client who owes.
    pub client_name: String,
    /// Due date.
    pub due_date: NaiveDate,
    /// Amount owed.
    pub amount: Decimal,
    /// Invoice status.
    pub status: InvoiceStatus,
    /// True when the invoice is marked overdue.
    pub overdue: bool,
}

/// An unpaid bill in the aged payables list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgedPayable {
    /// Bill id.
    pub bill_id: BillId,
    /// Vendor owed.
    pub vendor_name: String,
    /// Due date, if known.
    pub due_date: Option<NaiveDate>,
    /// Amount owed.
    pub amount: Decimal,
    /// Bill status.
    pub status: BillStatus,
}

/// Who owes the business and whom the business owes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgingReport {
    /// Outstanding invoices.
    pub receivables: Vec<AgedReceivable>,
    /// Unpaid bills.
    pub payables: Vec<AgedPayable>,
}

/// Service for generating financial reports.
pub struct ReportService;

impl ReportService {
    /// Totals assets and liabilities.
    ///
    /// # Errors
    ///
    /// Returns `AccountingError::AmountOverflow` if a total is out of range.
    pub fn balance_sheet(data: &BusinessData) -> Result<BalanceSheetSummary, AccountingError> {
        let total_assets = HoldingsService::total_assets(&data.assets)?;
        let total_liabilities = HoldingsService::total_liabilities(&data.liabilities)?;

        Ok(BalanceSheetSummary {
            total_assets,
            total_liabilities,
            net_worth: checked_difference(total_assets, total_liabilities)?,
        })
    }

    /// Totals income and expense transactions.
    ///
    /// # Errors
    ///
    /// Returns `AccountingError::AmountOverflow` if a total is out of range.
    pub fn income_statement(
        data: &BusinessData,
    ) -> Result<IncomeStatementSummary, AccountingError> {
        let total_revenue = LedgerService::total_of(&data.transactions, TransactionType::Income)?;
        let total_expenses = LedgerService::total_of(&data.transactions, TransactionType::Expense)?;

        Ok(IncomeStatementSummary {
            total_revenue,
            total_expenses,
            net_income: checked_difference(total_revenue, total_expenses)?,
        })
    }

    /// Receivables headline figures.
    ///
    /// # Errors
    ///
    /// Returns `AccountingError::AmountOverflow` if the total is out of range.
    pub fn receivables_overview(
        data: &BusinessData,
    ) -> Result<ReceivablesOverview, AccountingError> {
        Ok(ReceivablesOverview {
            total_outstanding: checked_sum(
                data.invoices
                    .iter()
                    .filter(|i| i.status.is_outstanding())
                    .map(|i| i.total_amount),
            )?,
            awaiting_payment_count: data
                .invoices
                .iter()
                .filter(|i| i.status.is_awaiting_payment())
                .count(),
        })
    }

    /// Payables headline figures.
    ///
    /// # Errors
    ///
    /// Returns `AccountingError::AmountOverflow` if the total is out of range.
    pub fn payables_overview(data: &BusinessData) -> Result<PayablesOverview, AccountingError> {
        let unpaid = data.bills.iter().filter(|b| b.status.is_unpaid());
        Ok(PayablesOverview {
            total_unpaid: checked_sum(unpaid.clone().map(|b| b.amount))?,
            unpaid_count: unpaid.count(),
        })
    }

    /// Receivables and payables overview.
    ///
    /// # Errors
    ///
    /// Returns `AccountingError::AmountOverflow` if a total is out of range.
    pub fn overview(data: &BusinessData) -> Result<AccountsOverview, AccountingError> {
        Ok(AccountsOverview {
            receivables: Self::receivables_overview(data)?,
            payables: Self::payables_overview(data)?,
        })
    }

    /// Lists outstanding invoices and unpaid bills in ledger order.
    #[must_use]
    pub fn aging(data: &BusinessData) -> AgingReport {
        let receivables = data
            .invoices
            .iter()
            .filter(|i| i.status.is_outstanding())
            .map(|i| AgedReceivable {
                invoice_id: i.id.clone(),
                client_name: i.client_name.clone(),
                due_date: i.due_date,
                amount: i.total_amount,
                status: i.status,
                overdue: i.status == InvoiceStatus::Overdue,
            })
            .collect();

        let payables = data
            .bills
            .iter()
            .filter(|b| b.status.is_unpaid())
            .map(|b| AgedPayable {
                bill_id: b.id.clone(),
                vendor_name: b.vendor_name.clone(),
                due_date: b.due_date,
                amount: b.amount,
                status: b.status,
            })
            .collect();

        AgingReport {
            receivables,
            payables,
        }
    }
}
