//! Money and quantity arithmetic using rust_decimal for precision
//!
//! Amounts and quantities are stored as `f64`. Every sum, product and
//! comparison goes through `Decimal`, then converts back for storage.

use rust_decimal::prelude::*;
use shared::models::OrderItem;

/// Monetary values keep 2 decimal places
const MONEY_DECIMAL_PLACES: u32 = 2;

/// Quantities keep 3 decimal places (grams on a KG product)
pub const QUANTITY_DECIMAL_PLACES: u32 = 3;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Convert f64 to Decimal, `None` when non-finite or beyond `Decimal`'s range
#[inline]
pub fn try_to_decimal(value: f64) -> Option<Decimal> {
    Decimal::from_f64(value)
}

/// Convert a stored f64 to Decimal
///
/// Unrepresentable input maps to zero. Request values go through
/// [`try_to_decimal`] at the boundary instead.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in decimal calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert a monetary Decimal back to f64, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Convert a quantity Decimal back to f64, rounded to 3 decimal places
#[inline]
pub fn quantity_to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(QUANTITY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// An order line quantity: positive, representable, at most 3 decimal places
pub fn checked_quantity(value: f64) -> Option<Decimal> {
    let quantity = try_to_decimal(value)?.normalize();
    (quantity > Decimal::ZERO && quantity.scale() <= QUANTITY_DECIMAL_PLACES).then_some(quantity)
}

/// `quantity * price` for one line item, `None` on overflow
pub fn line_total(item: &OrderItem) -> Option<Decimal> {
    try_to_decimal(item.quantity)?.checked_mul(try_to_decimal(item.price)?)
}

/// Sum of all line totals, `None` on overflow
pub fn order_total(items: &[OrderItem]) -> Option<Decimal> {
    items
        .iter()
        .try_fold(Decimal::ZERO, |acc, item| acc.checked_add(line_total(item)?))
}

/// Whether a client-supplied total agrees with the computed one
pub fn totals_match(client_total: Decimal, computed: Decimal) -> bool {
    (client_total - computed).abs() <= MONEY_TOLERANCE
}

/// Whether `stock` covers `quantity`
pub fn covers(stock: f64, quantity: f64) -> bool {
    to_decimal(stock) >= to_decimal(quantity)
}

/// Sum a column of stored amounts
pub fn sum_amounts(amounts: &[f64]) -> f64 {
    to_f64(amounts.iter().copied().map(to_decimal).sum())
}

/// Human-readable quantity: `97.5`, `95`, `0.25`
pub fn format_quantity(value: f64) -> String {
    to_decimal(value)
        .round_dp_with_strategy(QUANTITY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
        .to_string()
}
