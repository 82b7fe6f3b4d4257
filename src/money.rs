use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A rupee amount stored as a whole number of paise.
///
/// Cart arithmetic stays exact in integer space. On the wire the amount is a
/// plain decimal rupee number, because the backend stores prices as `double`
/// and every existing payload carries them that way.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    /// Converts a decimal rupee amount, rounding to the nearest paisa.
    pub fn from_rupees(rupees: f64) -> Self {
        Money((rupees * 100.0).round() as i64)
    }

    pub const fn paise(self) -> i64 {
        self.0
    }

    pub fn as_rupees(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, rhs: u32) -> Money {
        Money(self.0 * i64::from(rhs))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.abs();
        write!(f, "₹{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_rupees())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        f64::deserialize(deserializer).map(Money::from_rupees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_line_arithmetic() {
        // 10.10 * 3 must not pick up float dust
        let price = Money::from_rupees(10.10);
        assert_eq!(price * 3, Money::from_paise(3030));
        assert_eq!((price * 3).as_rupees(), 30.30);
    }

    #[test]
    fn sum_of_lines() {
        let total: Money = [Money::from_rupees(10.0), Money::from_rupees(2.5)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::from_paise(1250));
    }

    #[test]
    fn display() {
        assert_eq!(Money::from_paise(1250).to_string(), "₹12.50");
        assert_eq!(Money::from_paise(5).to_string(), "₹0.05");
        assert_eq!(Money::ZERO.to_string(), "₹0.00");
    }

    #[test]
    fn wire_shape_is_decimal_rupees() {
        let json = serde_json::to_string(&Money::from_paise(1999)).unwrap();
        assert_eq!(json, "19.99");

        let from_int: Money = serde_json::from_str("45").unwrap();
        assert_eq!(from_int, Money::from_paise(4500));

        let from_decimal: Money = serde_json::from_str("19.99").unwrap();
        assert_eq!(from_decimal, Money::from_paise(1999));
    }
}
