use rust_decimal::{Decimal, RoundingStrategy, prelude::*};

const DECIMAL_PLACES: u32 = 2;

/// Largest accepted unit price or surcharge.
pub const MAX_PRICE: f64 = 1_000_000.0;
/// Largest accepted quantity on one line.
pub const MAX_QUANTITY: u32 = 9999;

fn require_amount(value: f64, field_name: &str) -> Result<(), String> {
    if !value.is_finite() {
        return Err(format!("{field_name} must be a finite number, got {value}"));
    }
    if value < 0.0 {
        return Err(format!("{field_name} must be non-negative, got {value}"));
    }
    if value > MAX_PRICE {
        return Err(format!(
            "{field_name} exceeds maximum allowed ({MAX_PRICE}), got {value}"
        ));
    }
    Ok(())
}

/// Checks a cart line before its total is computed.
pub fn validate_line(unit_price: f64, extra: f64, quantity: u32) -> Result<(), String> {
    require_amount(unit_price, "price")?;
    require_amount(extra, "extra price")?;
    if quantity > MAX_QUANTITY {
        return Err(format!(
            "quantity exceeds maximum allowed ({MAX_QUANTITY}), got {quantity}"
        ));
    }
    Ok(())
}

pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "non-finite amount in price calculation, using zero");
        Decimal::ZERO
    })
}

/// Rounds to cents and converts back to the wire representation.
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// `(unit_price + extra) * quantity`
/// Lines that passed [`validate_line`] never overflow; anything else logs and
/// yields zero.
pub fn line_total(unit_price: f64, extra: f64, quantity: u32) -> f64 {
    let total = to_decimal(unit_price)
        .checked_add(to_decimal(extra))
        .and_then(|unit| unit.checked_mul(Decimal::from(quantity)));
    match total {
        Some(total) => to_f64(total),
        None => {
            tracing::error!(unit_price, extra, quantity, "line total overflowed, using zero");
            0.0
        }
    }
}

pub fn sum<I>(amounts: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let total = amounts
        .into_iter()
        .map(to_decimal)
        .try_fold(Decimal::ZERO, |acc, amount| acc.checked_add(amount));
    match total {
        Some(total) => to_f64(total),
        None => {
            tracing::error!("amount sum overflowed, using zero");
            0.0
        }
    }
}
