//! Property-based tests for the bookkeeping rules.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::ledger::LedgerService;
use super::payables::{NewBill, PayablesService};
use super::receivables::{NewInvoice, NewInvoiceItem, ReceivablesService};
use super::reports::ReportService;
use super::types::TransactionType;
use crate::business::BusinessData;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 11, 20, 9, 30, 0).unwrap()
}

fn cents(value: i64) -> Decimal {
    Decimal::new(value, 2)
}

proptest! {
    /// Invoice total equals the sum of quantity * unit price over its lines.
    #[test]
    fn prop_invoice_total_is_sum_of_lines(
        lines in prop::collection::vec((1i64..50, 0i64..1_000_000), 0..8),
    ) {
        let mut data = BusinessData::default();
        let items: Vec<NewInvoiceItem> = lines
            .iter()
            .map(|&(quantity, price)| NewInvoiceItem {
                description: "line".to_string(),
                quantity: Decimal::from(quantity),
                unit_price: cents(price),
            })
            .collect();
        let expected: Decimal = lines
            .iter()
            .map(|&(quantity, price)| Decimal::from(quantity) * cents(price))
            .sum();

        let invoice = ReceivablesService::create_invoice(
            &mut data,
            NewInvoice {
                client_name: "Client".to_string(),
                due_date: NaiveDate::from_ymd_opt(2023, 12, 31),
                items,
                ..NewInvoice::default()
            },
            now(),
        )
        .unwrap();

        prop_assert_eq!(invoice.total_amount, expected);
        for item in &invoice.items {
            prop_assert_eq!(item.total, item.quantity * item.unit_price);
        }
    }

    /// Paying an invoice any number of times books exactly one income
    /// transaction for its total.
    #[test]
    fn prop_invoice_payment_is_idempotent(amount in 0i64..10_000_000, times in 1usize..5) {
        let mut data = BusinessData::default();
        let invoice = ReceivablesService::create_invoice(
            &mut data,
            NewInvoice {
                client_name: "Client".to_string(),
                due_date: NaiveDate::from_ymd_opt(2023, 12, 31),
                items: vec![NewInvoiceItem {
                    description: "work".to_string(),
                    quantity: Decimal::ONE,
                    unit_price: cents(amount),
                }],
                ..NewInvoice::default()
            },
            now(),
        )
        .unwrap();

        for _ in 0..times {
            ReceivablesService::mark_paid(&mut data, &invoice.id, now()).unwrap();
        }

        prop_assert_eq!(data.transactions.len(), 1);
        prop_assert_eq!(
            LedgerService::total_of(&data.transactions, TransactionType::Income).unwrap(),
            cents(amount)
        );
        prop_assert_eq!(
            ReportService::receivables_overview(&data).unwrap().total_outstanding,
            Decimal::ZERO
        );
    }

    /// Paying every bill moves the whole unpaid total into expenses.
    #[test]
    fn prop_paying_all_bills_moves_payables_to_expenses(
        amounts in prop::collection::vec(0i64..1_000_000, 1..10),
    ) {
        let mut data = BusinessData::default();
        for amount in &amounts {
            PayablesService::create_bill(
                &mut data,
                NewBill {
                    vendor_name: "Vendor".to_string(),
                    amount: Some(cents(*amount)),
                    category: "Utilities".to_string(),
                    ..NewBill::default()
                },
                now(),
            )
            .unwrap();
        }

        let unpaid_before = ReportService::payables_overview(&data).unwrap().total_unpaid;
        let ids: Vec<_> = data.bills.iter().map(|b| b.id.clone()).collect();
        for id in &ids {
            PayablesService::pay(&mut data, id, now()).unwrap();
        }

        prop_assert_eq!(ReportService::payables_overview(&data).unwrap().unpaid_count, 0);
        prop_assert_eq!(
            ReportService::income_statement(&data).unwrap().total_expenses,
            unpaid_before
        );
        prop_assert_eq!(data.transactions.len(), amounts.len());
    }
}
