//! Overflow-checked money arithmetic.

use rust_decimal::Decimal;

use super::error::AccountingError;

/// Sums amounts, failing instead of overflowing.
///
/// # Errors
///
/// Returns `AccountingError::AmountOverflow` if the total is out of range.
pub fn checked_sum<I>(amounts: I) -> Result<Decimal, AccountingError>
where
    I: IntoIterator<Item = Decimal>,
{
    amounts.into_iter().try_fold(Decimal::ZERO, |total, amount| {
        total
            .checked_add(amount)
            .ok_or(AccountingError::AmountOverflow)
    })
}

/// Multiplies two amounts.
///
/// # Errors
///
/// Returns `AccountingError::AmountOverflow` if the product is out of range.
pub fn checked_product(a: Decimal, b: Decimal) -> Result<Decimal, AccountingError> {
    a.checked_mul(b).ok_or(AccountingError::AmountOverflow)
}

/// Subtracts `b` from `a`.
///
/// # Errors
///
/// Returns `AccountingError::AmountOverflow` if the difference is out of range.
pub fn checked_difference(a: Decimal, b: Decimal) -> Result<Decimal, AccountingError> {
    a.checked_sub(b).ok_or(AccountingError::AmountOverflow)
}
