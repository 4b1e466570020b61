//! Accounting repository: chart, ledger, receivables, payables and holdings.

use chrono::Utc;
use nexus_core::accounting::{
    Account, AccountType, AccountingError, Asset, Bill, ChartService, HoldingsService, Invoice,
    LedgerService, Liability, NewAccount, NewAsset, NewBill, NewInvoice, NewLiability,
    NewTransaction, PayablesService, PaymentOutcome, ReceivablesService, Transaction,
};
use nexus_shared::types::{BillId, InvoiceId, format_usd};
use tracing::{debug, info};

use crate::BusinessStore;

/// Repository for bookkeeping records.
#[derive(Debug, Clone)]
pub struct AccountingRepository {
    store: BusinessStore,
}

impl AccountingRepository {
    /// Creates a new accounting repository.
    #[must_use]
    pub const fn new(store: BusinessStore) -> Self {
        Self { store }
    }

    /// Lists the chart of accounts ordered by code, optionally of one type.
    pub async fn list_accounts(&self, account_type: Option<AccountType>) -> Vec<Account> {
        let data = self.store.read().await;
        match account_type {
            Some(t) => ChartService::of_type(&data.chart_of_accounts, t),
            None => ChartService::sorted_by_code(&data.chart_of_accounts),
        }
    }

    /// Adds an account to the chart.
    ///
    /// # Errors
    ///
    /// Returns `AccountingError` on a missing field or duplicate code.
    pub async fn add_account(&self, input: NewAccount) -> Result<Account, AccountingError> {
        let mut data = self.store.write().await;
        let account = ChartService::add_account(&mut data, input)?;
        info!(code = %account.code, name = %account.name, "Account added");
        Ok(account)
    }

    /// Lists ledger transactions, newest first.
    pub async fn list_transactions(&self) -> Vec<Transaction> {
        self.store.read().await.transactions.clone()
    }

    /// Records a manual transaction.
    ///
    /// # Errors
    ///
    /// Returns `AccountingError::MissingField` if a required field is absent.
    pub async fn record_transaction(
        &self,
        input: NewTransaction,
    ) -> Result<Transaction, AccountingError> {
        let mut data = self.store.write().await;
        let tx = LedgerService::record(&mut data, input, Utc::now())?;
        info!(
            transaction_id = %tx.id,
            kind = ?tx.transaction_type,
            amount = %format_usd(tx.amount),
            "Transaction recorded"
        );
        Ok(tx)
    }

    /// Lists invoices, newest first.
    pub async fn list_invoices(&self) -> Vec<Invoice> {
        self.store.read().await.invoices.clone()
    }

    /// Creates an invoice.
    ///
    /// # Errors
    ///
    /// Returns `AccountingError::MissingField` if a required field is absent.
    pub async fn create_invoice(&self, input: NewInvoice) -> Result<Invoice, AccountingError> {
        let mut data = self.store.write().await;
        let invoice = ReceivablesService::create_invoice(&mut data, input, Utc::now())?;
        info!(
            invoice_id = %invoice.id,
            client = %invoice.client_name,
            total = %format_usd(invoice.total_amount),
            "Invoice created"
        );
        Ok(invoice)
    }

    /// Marks an invoice paid, booking the income once.
    ///
    /// # Errors
    ///
    /// Returns `AccountingError::InvoiceNotFound` for an unknown id.
    pub async fn mark_invoice_paid(
        &self,
        id: &InvoiceId,
    ) -> Result<PaymentOutcome<Invoice>, AccountingError> {
        let mut data = self.store.write().await;
        let outcome = ReceivablesService::mark_paid(&mut data, id, Utc::now())?;
        match &outcome.transaction {
            Some(tx) => info!(
                invoice_id = %id,
                transaction_id = %tx.id,
                amount = %format_usd(tx.amount),
                "Invoice paid"
            ),
            None => debug!(invoice_id = %id, "Invoice already paid"),
        }
        Ok(outcome)
    }

    /// Lists bills, newest first.
    pub async fn list_bills(&self) -> Vec<Bill> {
        self.store.read().await.bills.clone()
    }

    /// Enters a vendor bill.
    ///
    /// # Errors
    ///
    /// Returns `AccountingError::MissingField` if a required field is absent.
    pub async fn create_bill(&self, input: NewBill) -> Result<Bill, AccountingError> {
        let mut data = self.store.write().await;
        let bill = PayablesService::create_bill(&mut data, input, Utc::now())?;
        info!(
            bill_id = %bill.id,
            vendor = %bill.vendor_name,
            amount = %format_usd(bill.amount),
            "Bill entered"
        );
        Ok(bill)
    }

    /// Pays a bill, booking the expense once.
    ///
    /// # Errors
    ///
    /// Returns `AccountingError::BillNotFound` for an unknown id.
    pub async fn pay_bill(&self, id: &BillId) -> Result<PaymentOutcome<Bill>, AccountingError> {
        let mut data = self.store.write().await;
        let outcome = PayablesService::pay(&mut data, id, Utc::now())?;
        match &outcome.transaction {
            Some(tx) => info!(
                bill_id = %id,
                transaction_id = %tx.id,
                amount = %format_usd(tx.amount),
                "Bill paid"
            ),
            None => debug!(bill_id = %id, "Bill already paid"),
        }
        Ok(outcome)
    }

    /// Lists the asset register.
    pub async fn list_assets(&self) -> Vec<Asset> {
        self.store.read().await.assets.clone()
    }

    /// Registers an asset acquired today.
    ///
    /// # Errors
    ///
    /// Returns `AccountingError::MissingField` if a required field is absent.
    pub async fn add_asset(&self, input: NewAsset) -> Result<Asset, AccountingError> {
        let mut data = self.store.write().await;
        let asset = HoldingsService::add_asset(&mut data, input, Utc::now())?;
        info!(
            asset_id = %asset.id,
            name = %asset.name,
            value = %format_usd(asset.value),
            "Asset added"
        );
        Ok(asset)
    }

    /// Lists the liability register.
    pub async fn list_liabilities(&self) -> Vec<Liability> {
        self.store.read().await.liabilities.clone()
    }

    /// Registers a liability due today.
    ///
    /// # Errors
    ///
    /// Returns `AccountingError::MissingField` if a required field is absent.
    pub async fn add_liability(&self, input: NewLiability) -> Result<Liability, AccountingError> {
        let mut data = self.store.write().await;
        let liability = HoldingsService::add_liability(&mut data, input, Utc::now())?;
        info!(
            liability_id = %liability.id,
            name = %liability.name,
            amount = %format_usd(liability.amount),
            "Liability added"
        );
        Ok(liability)
    }
}
