//! Read-only reports over the business store.

use nexus_core::accounting::{
    AccountingError, AccountsOverview, AgingReport, BalanceSheetSummary, IncomeStatementSummary,
    ReportService,
};
use nexus_core::dashboard::{DashboardService, DashboardStats};
use nexus_core::insight::FinancialSummary;

use crate::BusinessStore;

/// Repository for computed reports.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    store: BusinessStore,
}

impl ReportRepository {
    /// Creates a new report repository.
    #[must_use]
    pub const fn new(store: BusinessStore) -> Self {
        Self { store }
    }

    /// Dashboard headline figures.
    ///
    /// # Errors
    ///
    /// Returns `AccountingError::AmountOverflow` if a total is out of range.
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, AccountingError> {
        DashboardService::stats(&*self.store.read().await)
    }

    /// Balance sheet summary.
    ///
    /// # Errors
    ///
    /// Returns `AccountingError::AmountOverflow` if a total is out of range.
    pub async fn balance_sheet(&self) -> Result<BalanceSheetSummary, AccountingError> {
        ReportService::balance_sheet(&*self.store.read().await)
    }

    /// Income statement summary.
    ///
    /// # Errors
    ///
    /// Returns `AccountingError::AmountOverflow` if a total is out of range.
    pub async fn income_statement(&self) -> Result<IncomeStatementSummary, AccountingError> {
        ReportService::income_statement(&*self.store.read().await)
    }

    /// Receivables and payables overview.
    ///
    /// # Errors
    ///
    /// Returns `AccountingError::AmountOverflow` if a total is out of range.
    pub async fn overview(&self) -> Result<AccountsOverview, AccountingError> {
        ReportService::overview(&*self.store.read().await)
    }

    /// Outstanding invoices and unpaid bills.
    pub async fn aging(&self) -> AgingReport {
        ReportService::aging(&*self.store.read().await)
    }

    /// Summary handed to the insight collaborator.
    ///
    /// # Errors
    ///
    /// Returns `AccountingError::AmountOverflow` if a total is out of range.
    pub async fn financial_summary(&self) -> Result<FinancialSummary, AccountingError> {
        FinancialSummary::from_data(&*self.store.read().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AccountingRepository;
    use nexus_shared::types::InvoiceId;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_reports_follow_payments() {
        let store = BusinessStore::seeded();
        let reports = ReportRepository::new(store.clone());
        let accounting = AccountingRepository::new(store);

        assert_eq!(reports.income_statement().await.unwrap().net_income, dec!(6300));
        assert_eq!(reports.aging().await.receivables.len(), 2);

        accounting
            .mark_invoice_paid(&InvoiceId::from("INV-2023-001"))
            .await
            .unwrap();

        assert_eq!(reports.income_statement().await.unwrap().total_revenue, dec!(28500));
        assert_eq!(
            reports.overview().await.unwrap().receivables.total_outstanding,
            dec!(2500)
        );
        assert_eq!(reports.aging().await.receivables.len(), 1);
        assert_eq!(reports.dashboard_stats().await.unwrap().net_worth, dec!(1605000));
    }

    #[tokio::test]
    async fn test_financial_summary_of_seed() {
        let summary = ReportRepository::new(BusinessStore::seeded())
            .financial_summary()
            .await
            .unwrap();
        assert_eq!(summary.cash_position, dec!(450000));
        assert_eq!(summary.recent_transactions.len(), 5);
        assert_eq!(
            summary.recent_transactions[0],
            "2023-10-01: Client Payment - Project Alpha ($15000)"
        );
    }
}
