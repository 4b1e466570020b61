//! Accounts receivable: invoicing and payment collection.

use chrono::{DateTime, NaiveDate, Utc};
use nexus_shared::types::{InvoiceId, TransactionId};
use rust_decimal::Decimal;
use serde::Deserialize;

use super::amount::checked_sum;
use super::error::AccountingError;
use super::ledger::{LedgerService, PaymentOutcome};
use super::types::{Invoice, InvoiceItem, InvoiceStatus, Transaction, TransactionType};
use crate::business::BusinessData;
use crate::validation::{required, required_text};

/// Ledger category credited when an invoice is paid.
pub const INVOICE_PAYMENT_CATEGORY: &str = "Sales Revenue";

/// An invoice line as entered. Its total is always derived.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInvoiceItem {
    /// Line description.
    #[serde(default)]
    pub description: String,
    /// Quantity; defaults to one.
    #[serde(default = "one")]
    pub quantity: Decimal,
    /// Price per unit.
    #[serde(default)]
    pub unit_price: Decimal,
}

fn one() -> Decimal {
    Decimal::ONE
}

/// Input for creating an invoice.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInvoice {
    /// Client billed (required).
    #[serde(default)]
    pub client_name: String,
    /// Issue date; defaults to today.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Due date (required).
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    /// Invoice lines.
    #[serde(default)]
    pub items: Vec<NewInvoiceItem>,
    /// Optional notes.
    #[serde(default)]
    pub notes: Option<String>,
}

/// Service for the receivables workflow.
pub struct ReceivablesService;

impl ReceivablesService {
    /// Creates a sent invoice at the front of the receivables list.
    ///
    /// # Errors
    ///
    /// Returns `AccountingError::MissingField` if the client name or due date
    /// is missing, and `AccountingError::AmountOverflow` if a line or the
    /// invoice total is out of range.
    pub fn create_invoice(
        data: &mut BusinessData,
        input: NewInvoice,
        now: DateTime<Utc>,
    ) -> Result<Invoice, AccountingError> {
        let client_name = required_text("clientName", &input.client_name)?.to_string();
        let due_date = required("dueDate", input.due_date)?;

        let items = input
            .items
            .into_iter()
            .map(|item| InvoiceItem::new(item.description, item.quantity, item.unit_price))
            .collect::<Result<Vec<_>, _>>()?;
        let total_amount = checked_sum(items.iter().map(|item| item.total))?;

        let invoice = Invoice {
            id: InvoiceId::next_document(
                now.timestamp_millis(),
                data.invoices.iter().map(|i| &i.id),
            ),
            client_name,
            date: input.date.unwrap_or_else(|| now.date_naive()),
            due_date,
            items,
            total_amount,
            status: InvoiceStatus::Sent,
            notes: input.notes.filter(|n| !n.trim().is_empty()),
        };

        data.invoices.insert(0, invoice.clone());
        Ok(invoice)
    }

    /// Marks an invoice paid and books the payment as income.
    ///
    /// Paying an invoice that is already paid changes nothing and books no
    /// transaction.
    ///
    /// # Errors
    ///
    /// Returns `AccountingError::InvoiceNotFound` for an unknown id.
    pub fn mark_paid(
        data: &mut BusinessData,
        id: &InvoiceId,
        now: DateTime<Utc>,
    ) -> Result<PaymentOutcome<Invoice>, AccountingError> {
        let invoice = data
            .invoices
            .iter_mut()
            .find(|i| &i.id == id)
            .ok_or_else(|| AccountingError::InvoiceNotFound(id.clone()))?;

        if invoice.status == InvoiceStatus::Paid {
            return Ok(PaymentOutcome {
                document: invoice.clone(),
                transaction: None,
            });
        }

        invoice.status = InvoiceStatus::Paid;
        let invoice = invoice.clone();

        let transaction = Transaction {
            id: TransactionId::generate(),
            date: now.date_naive(),
            description: format!("Invoice Payment: {} - {}", invoice.id, invoice.client_name),
            category: INVOICE_PAYMENT_CATEGORY.to_string(),
            amount: invoice.total_amount,
            transaction_type: TransactionType::Income,
            reference_id: Some(invoice.id.to_string()),
        };
        LedgerService::post(data, transaction.clone());

        Ok(PaymentOutcome {
            document: invoice,
            transaction: Some(transaction),
        })
    }
}
