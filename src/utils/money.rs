//! Overflow-checked decimal arithmetic. `Decimal`'s operators panic past
//! `Decimal::MAX`; stored amounts are user input, so every sum goes through here.

use rust_decimal::Decimal;

use crate::error::AppError;

pub fn add(a: Decimal, b: Decimal) -> Result<Decimal, AppError> {
    a.checked_add(b).ok_or(AppError::AmountOverflow)
}

pub fn sub(a: Decimal, b: Decimal) -> Result<Decimal, AppError> {
    a.checked_sub(b).ok_or(AppError::AmountOverflow)
}

/// `part / whole * 100`, to two decimal places. `whole` must be non-zero.
pub fn percent(part: Decimal, whole: Decimal) -> Result<Decimal, AppError> {
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .map(|pct| pct.round_dp(2))
        .ok_or(AppError::AmountOverflow)
}

pub fn sum<I>(amounts: I) -> Result<Decimal, AppError>
where
    I: IntoIterator<Item = Decimal>,
{
    amounts.into_iter().try_fold(Decimal::ZERO, add)
}
