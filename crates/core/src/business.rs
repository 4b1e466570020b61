//! The business data aggregate.

use serde::{Deserialize, Serialize};

use crate::accounting::{Account, Asset, Bill, Invoice, Liability, Transaction};
use crate::hr::{Candidate, Employee, JobProforma};

/// Every record the dashboard works on.
///
/// Ordering is meaningful: ledger transactions, invoices and bills are kept
/// newest first, while assets, liabilities and all HR collections are kept in
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessData {
    /// Chart of accounts.
    pub chart_of_accounts: Vec<Account>,
    /// Assets.
    pub assets: Vec<Asset>,
    /// Liabilities.
    pub liabilities: Vec<Liability>,
    /// General ledger, newest first.
    pub transactions: Vec<Transaction>,
    /// Accounts receivable, newest first.
    pub invoices: Vec<Invoice>,
    /// Accounts payable, newest first.
    pub bills: Vec<Bill>,
    /// Employee directory.
    pub employees: Vec<Employee>,
    /// Hiring candidates.
    pub candidates: Vec<Candidate>,
    /// Job requisitions.
    pub job_proformas: Vec<JobProforma>,
}
