//! Bookkeeping.
//!
//! This module implements the dashboard's accounting side:
//! - Chart of accounts queries
//! - General ledger recording
//! - Invoicing and payment collection (receivables)
//! - Bill entry and payment (payables)
//! - Asset and liability registers
//! - Summary and aging reports
//!
//! Settling an invoice or bill is the one place two collections change
//! together: the document is marked paid and a ledger transaction referencing
//! it is booked.

pub mod amount;
pub mod chart;
pub mod error;
pub mod holdings;
pub mod ledger;
pub mod payables;
pub mod receivables;
pub mod reports;
pub mod types;

#[cfg(test)]
mod props;

pub use amount::{checked_difference, checked_product, checked_sum};
pub use chart::{ChartService, NewAccount};
pub use error::AccountingError;
pub use holdings::{HoldingsService, NewAsset, NewLiability};
pub use ledger::{LedgerService, NewTransaction, PaymentOutcome};
pub use payables::{NewBill, PayablesService};
pub use receivables::{INVOICE_PAYMENT_CATEGORY, NewInvoice, NewInvoiceItem, ReceivablesService};
pub use reports::{
    AccountsOverview, AgedPayable, AgedReceivable, AgingReport, BalanceSheetSummary,
    IncomeStatementSummary, PayablesOverview, ReceivablesOverview, ReportService,
};
pub use types::{
    Account, AccountType, Asset, AssetType, Bill, BillStatus, Invoice, InvoiceItem,
    InvoiceStatus, Liability, LiabilityType, Transaction, TransactionType,
};
