//! Dashboard headline figures.
//!
//! This module provides the numbers behind the landing view:
//! - Balance sheet totals and net worth
//! - Active headcount
//! - Income versus expenses for the cash flow chart

pub mod types;

pub use types::*;

use crate::accounting::{AccountingError, ReportService, TransactionType};
use crate::business::BusinessData;
use crate::hr::DirectoryService;

/// Service for dashboard metrics.
pub struct DashboardService;

impl DashboardService {
    /// Computes the dashboard stats from the current data.
    ///
    /// # Errors
    ///
    /// Returns `AccountingError::AmountOverflow` if a total is out of range.
    pub fn stats(data: &BusinessData) -> Result<DashboardStats, AccountingError> {
        let sheet = ReportService::balance_sheet(data)?;
        let statement = ReportService::income_statement(data)?;

        Ok(DashboardStats {
            total_assets: sheet.total_assets,
            total_liabilities: sheet.total_liabilities,
            net_worth: sheet.net_worth,
            employee_count: DirectoryService::active_headcount(&data.employees),
            total_revenue: statement.total_revenue,
            total_expenses: statement.total_expenses,
            cash_flow: vec![
                CashFlowPoint::new(TransactionType::Income, statement.total_revenue),
                CashFlowPoint::new(TransactionType::Expense, statement.total_expenses),
            ],
        })
    }
}
