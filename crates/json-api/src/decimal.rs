//! Decimal fields cross the wire as JSON floats.

use rust_decimal::{
    Decimal, RoundingStrategy,
    prelude::{FromPrimitive, ToPrimitive},
};

/// Stored money and quantity values fit comfortably in an `f64`.
pub(crate) fn to_float(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

/// Parse a client float into a two-place decimal. Rejects NaN, infinities and negatives.
pub(crate) fn from_float(value: f64) -> Option<Decimal> {
    if !value.is_finite() || value < 0.0 {
        return None;
    }

    Decimal::from_f64(value)
        .map(|decimal| decimal.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floats_round_to_cents() {
        assert_eq!(from_float(10.0), Some(Decimal::new(1000, 2)));
        assert_eq!(from_float(38.75), Some(Decimal::new(3875, 2)));
        assert_eq!(from_float(0.1 + 0.2), Some(Decimal::new(30, 2)));
    }

    #[test]
    fn invalid_floats_are_rejected() {
        assert_eq!(from_float(f64::NAN), None);
        assert_eq!(from_float(f64::INFINITY), None);
        assert_eq!(from_float(-1.0), None);
    }

    #[test]
    fn decimals_render_as_floats() {
        assert!((to_float(Decimal::new(2550, 2)) - 25.5).abs() < f64::EPSILON);
    }
}
