//! Accounts payable: bill entry and payment.

use chrono::{DateTime, NaiveDate, Utc};
use nexus_shared::types::{BillId, TransactionId};
use rust_decimal::Decimal;
use serde::Deserialize;

use super::error::AccountingError;
use super::ledger::{LedgerService, PaymentOutcome};
use super::types::{Bill, BillStatus, Transaction, TransactionType};
use crate::business::BusinessData;
use crate::validation::{required, required_text};

/// Input for entering a vendor bill.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBill {
    /// Vendor owed (required).
    #[serde(default)]
    pub vendor_name: String,
    /// Vendor's invoice number; may be empty.
    #[serde(default)]
    pub invoice_number: String,
    /// Bill date; defaults to today.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Due date.
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    /// Amount owed (required).
    #[serde(default)]
    pub amount: Option<Decimal>,
    /// Expense account name (required).
    #[serde(default)]
    pub category: String,
}

/// Service for the payables workflow.
pub struct PayablesService;

impl PayablesService {
    /// Enters a received bill at the front of the payables list.
    ///
    /// # Errors
    ///
    /// Returns `AccountingError::MissingField` if vendor, amount or category
    /// is missing.
    pub fn create_bill(
        data: &mut BusinessData,
        input: NewBill,
        now: DateTime<Utc>,
    ) -> Result<Bill, AccountingError> {
        let vendor_name = required_text("vendorName", &input.vendor_name)?.to_string();
        let amount = required("amount", input.amount)?;
        let category = required_text("category", &input.category)?.to_string();

        let bill = Bill {
            id: BillId::next_document(now.timestamp_millis(), data.bills.iter().map(|b| &b.id)),
            vendor_name,
            invoice_number: input.invoice_number.trim().to_string(),
            date: input.date.unwrap_or_else(|| now.date_naive()),
            due_date: input.due_date,
            amount,
            category,
            status: BillStatus::Received,
        };

        data.bills.insert(0, bill.clone());
        Ok(bill)
    }

    /// Marks a bill paid and books the payment as an expense against the
    /// bill's category.
    ///
    /// Paying a bill that is already paid changes nothing and books no
    /// transaction.
    ///
    /// # Errors
    ///
    /// Returns `AccountingError::BillNotFound` for an unknown id.
    pub fn pay(
        data: &mut BusinessData,
        id: &BillId,
        now: DateTime<Utc>,
    ) -> Result<PaymentOutcome<Bill>, AccountingError> {
        let bill = data
            .bills
            .iter_mut()
            .find(|b| &b.id == id)
            .ok_or_else(|| AccountingError::BillNotFound(id.clone()))?;

        if bill.status == BillStatus::Paid {
            return Ok(PaymentOutcome {
                document: bill.clone(),
                transaction: None,
            });
        }

        bill.status = BillStatus::Paid;
        let bill = bill.clone();

        let transaction = Transaction {
            id: TransactionId::generate(),
            date: now.date_naive(),
            description: format!("Bill Payment: {} ({})", bill.vendor_name, bill.invoice_number),
            category: bill.category.clone(),
            amount: bill.amount,
            transaction_type: TransactionType::Expense,
            reference_id: Some(bill.id.to_string()),
        };
        LedgerService::post(data, transaction.clone());

        Ok(PaymentOutcome {
            document: bill,
            transaction: Some(transaction),
        })
    }
}
