//! General ledger recording.

use chrono::{DateTime, NaiveDate, Utc};
use nexus_shared::types::TransactionId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::amount::checked_sum;
use super::error::AccountingError;
use super::types::{Transaction, TransactionType};
use crate::business::BusinessData;
use crate::validation::{required, required_text};

/// Input for recording a manual ledger transaction.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    /// Transaction date; defaults to today.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Description (required).
    #[serde(default)]
    pub description: String,
    /// Amount (required).
    #[serde(default)]
    pub amount: Option<Decimal>,
    /// Account name (required).
    #[serde(default)]
    pub category: String,
    /// Income or expense; defaults to expense.
    #[serde(default, rename = "type")]
    pub transaction_type: Option<TransactionType>,
}

/// Result of settling an invoice or bill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOutcome<T> {
    /// The document after the operation.
    pub document: T,
    /// Ledger transaction created by the payment; `None` when the document
    /// was already paid and nothing changed.
    pub transaction: Option<Transaction>,
}

/// Service for recording ledger transactions.
pub struct LedgerService;

impl LedgerService {
    /// Records a manual transaction at the front of the ledger.
    ///
    /// # Errors
    ///
    /// Returns `AccountingError::MissingField` if description, amount or
    /// category is missing; the ledger is left untouched.
    pub fn record(
        data: &mut BusinessData,
        input: NewTransaction,
        now: DateTime<Utc>,
    ) -> Result<Transaction, AccountingError> {
        let description = required_text("description", &input.description)?.to_string();
        let amount = required("amount", input.amount)?;
        let category = required_text("category", &input.category)?.to_string();

        let transaction = Transaction {
            id: TransactionId::generate(),
            date: input.date.unwrap_or_else(|| now.date_naive()),
            description,
            category,
            amount,
            transaction_type: input.transaction_type.unwrap_or_default(),
            reference_id: None,
        };

        Self::post(data, transaction.clone());
        Ok(transaction)
    }

    /// Inserts an already-built transaction at the front of the ledger.
    pub(crate) fn post(data: &mut BusinessData, transaction: Transaction) {
        data.transactions.insert(0, transaction);
    }

    /// Sums the amounts of all transactions of the given type.
    ///
    /// # Errors
    ///
    /// Returns `AccountingError::AmountOverflow` if the total is out of range.
    pub fn total_of(
        transactions: &[Transaction],
        transaction_type: TransactionType,
    ) -> Result<Decimal, AccountingError> {
        checked_sum(
            transactions
                .iter()
                .filter(|t| t.transaction_type == transaction_type)
                .map(|t| t.amount),
        )
    }

    /// Returns the transactions produced by settling the given document.
    #[must_use]
    pub fn referencing<'a>(
        transactions: &'a [Transaction],
        reference: &str,
    ) -> Vec<&'a Transaction> {
        transactions
            .iter()
            .filter(|t| t.reference_id.as_deref() == Some(reference))
            .collect()
    }
}
