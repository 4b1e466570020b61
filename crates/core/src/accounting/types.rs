//! Bookkeeping domain types.
//!
//! Field names serialize in camelCase and enum values as their display
//! strings (`"Fixed Asset"`, `"Long-Term Liability"`), which is the shape the
//! dashboard front end consumes.

use chrono::NaiveDate;
use nexus_shared::types::{AssetId, BillId, InvoiceId, LiabilityId, TransactionId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::amount::checked_product;
use super::error::AccountingError;

/// Chart of accounts classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountType {
    /// Things the business owns.
    Asset,
    /// Things the business owes.
    Liability,
    /// Owner's stake.
    Equity,
    /// Income accounts.
    Revenue,
    /// Cost accounts.
    Expense,
}

impl AccountType {
    /// Returns the display name of the account type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asset => "Asset",
            Self::Liability => "Liability",
            Self::Equity => "Equity",
            Self::Revenue => "Revenue",
            Self::Expense => "Expense",
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AccountType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asset" => Ok(Self::Asset),
            "liability" => Ok(Self::Liability),
            "equity" => Ok(Self::Equity),
            "revenue" => Ok(Self::Revenue),
            "expense" => Ok(Self::Expense),
            _ => Err(format!("Unknown account type: {s}")),
        }
    }
}

/// A chart of accounts entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Account code, e.g. `"1000"`.
    pub code: String,
    /// Account name; ledger categories refer to accounts by name.
    pub name: String,
    /// Account classification.
    #[serde(rename = "type")]
    pub account_type: AccountType,
    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Asset classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetType {
    /// Cash and other short-lived assets.
    #[default]
    #[serde(rename = "Current Asset")]
    Current,
    /// Property, vehicles, equipment.
    #[serde(rename = "Fixed Asset")]
    Fixed,
    /// IP, goodwill and similar.
    #[serde(rename = "Intangible Asset")]
    Intangible,
}

/// A tracked asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Unique identifier.
    pub id: AssetId,
    /// Asset name.
    pub name: String,
    /// Carrying value.
    pub value: Decimal,
    /// Asset classification.
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    /// Acquisition date.
    pub date_acquired: NaiveDate,
    /// Annual depreciation rate in percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depreciation_rate: Option<Decimal>,
}

/// Liability classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LiabilityType {
    /// Due within a year.
    #[default]
    #[serde(rename = "Current Liability")]
    Current,
    /// Due after more than a year.
    #[serde(rename = "Long-Term Liability")]
    LongTerm,
}

/// A tracked liability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Liability {
    /// Unique identifier.
    pub id: LiabilityId,
    /// Liability name.
    pub name: String,
    /// Outstanding amount.
    pub amount: Decimal,
    /// Liability classification.
    #[serde(rename = "type")]
    pub liability_type: LiabilityType,
    /// Due date.
    pub due_date: NaiveDate,
    /// Annual interest rate in percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<Decimal>,
}

/// Direction of a ledger transaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    /// Money in.
    Income,
    /// Money out.
    #[default]
    Expense,
}

/// A general ledger transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier.
    pub id: TransactionId,
    /// Transaction date.
    pub date: NaiveDate,
    /// Free-text description.
    pub description: String,
    /// Account name the transaction is booked against.
    pub category: String,
    /// Amount, always recorded as a positive magnitude.
    pub amount: Decimal,
    /// Income or expense.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Invoice or bill that produced this transaction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
}

/// Invoice lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvoiceStatus {
    /// Not yet sent.
    Draft,
    /// Sent to the client, awaiting payment.
    Sent,
    /// Payment received.
    Paid,
    /// Past due date and unpaid.
    Overdue,
    /// Cancelled.
    Void,
}

impl InvoiceStatus {
    /// Returns true if the invoice still counts as money owed to the business.
    #[must_use]
    pub const fn is_outstanding(self) -> bool {
        !matches!(self, Self::Paid | Self::Void)
    }

    /// Returns true if the invoice has been sent and is waiting for payment.
    #[must_use]
    pub const fn is_awaiting_payment(self) -> bool {
        matches!(self, Self::Sent | Self::Overdue)
    }
}

/// A line on an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItem {
    /// Line description.
    pub description: String,
    /// Quantity.
    pub quantity: Decimal,
    /// Price per unit.
    pub unit_price: Decimal,
    /// `quantity * unit_price`.
    pub total: Decimal,
}

impl InvoiceItem {
    /// Creates a line with its total computed from quantity and unit price.
    ///
    /// # Errors
    ///
    /// Returns `AccountingError::AmountOverflow` if the total is out of range.
    pub fn new(
        description: impl Into<String>,
        quantity: Decimal,
        unit_price: Decimal,
    ) -> Result<Self, AccountingError> {
        Ok(Self {
            description: description.into(),
            quantity,
            unit_price,
            total: checked_product(quantity, unit_price)?,
        })
    }
}

/// An invoice issued to a client (accounts receivable).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Unique identifier, e.g. `INV-123456`.
    pub id: InvoiceId,
    /// Client billed.
    pub client_name: String,
    /// Issue date.
    pub date: NaiveDate,
    /// Payment due date.
    pub due_date: NaiveDate,
    /// Invoice lines.
    pub items: Vec<InvoiceItem>,
    /// Sum of line totals.
    pub total_amount: Decimal,
    /// Current status.
    pub status: InvoiceStatus,
    /// Optional notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Bill lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BillStatus {
    /// Entered but not scheduled.
    Received,
    /// Scheduled for payment.
    Pending,
    /// Paid.
    Paid,
    /// Past due date and unpaid.
    Overdue,
}

impl BillStatus {
    /// Returns true if the bill is still owed.
    #[must_use]
    pub const fn is_unpaid(self) -> bool {
        !matches!(self, Self::Paid)
    }
}

/// A vendor bill (accounts payable).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    /// Unique identifier, e.g. `BILL-123456`.
    pub id: BillId,
    /// Vendor owed.
    pub vendor_name: String,
    /// Vendor's own invoice number; may be empty.
    pub invoice_number: String,
    /// Bill date.
    pub date: NaiveDate,
    /// Payment due date, if known.
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    /// Amount owed.
    pub amount: Decimal,
    /// Expense account name the bill is booked against.
    pub category: String,
    /// Current status.
    pub status: BillStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    #[test]
    fn test_invoice_item_total() {
        let item = InvoiceItem::new("Web Development", dec!(3), dec!(1250.50)).unwrap();
        assert_eq!(item.total, dec!(3751.50));
    }

    #[test]
    fn test_invoice_item_total_overflow() {
        let err = InvoiceItem::new("Licences", Decimal::MAX, dec!(2)).unwrap_err();
        assert!(matches!(err, AccountingError::AmountOverflow));
    }

    #[test]
    fn test_invoice_status_predicates() {
        assert!(InvoiceStatus::Sent.is_outstanding());
        assert!(InvoiceStatus::Draft.is_outstanding());
        assert!(!InvoiceStatus::Paid.is_outstanding());
        assert!(!InvoiceStatus::Void.is_outstanding());

        assert!(InvoiceStatus::Overdue.is_awaiting_payment());
        assert!(!InvoiceStatus::Draft.is_awaiting_payment());
    }

    #[test]
    fn test_account_type_from_str() {
        assert_eq!(AccountType::from_str("expense").unwrap(), AccountType::Expense);
        assert_eq!(AccountType::from_str("Revenue").unwrap(), AccountType::Revenue);
        assert!(AccountType::from_str("income").is_err());
    }

    #[test]
    fn test_wire_format() {
        let asset = Asset {
            id: AssetId::from("1"),
            name: "Office HQ".to_string(),
            value: dec!(1200000),
            asset_type: AssetType::Fixed,
            date_acquired: NaiveDate::from_ymd_opt(2020, 1, 15).unwrap(),
            depreciation_rate: Some(dec!(2.5)),
        };
        let json = serde_json::to_value(&asset).unwrap();
        assert_eq!(json["type"], "Fixed Asset");
        assert_eq!(json["dateAcquired"], "2020-01-15");
        assert_eq!(json["depreciationRate"], "2.5");

        let liability: LiabilityType = serde_json::from_str("\"Long-Term Liability\"").unwrap();
        assert_eq!(liability, LiabilityType::LongTerm);
    }
}
