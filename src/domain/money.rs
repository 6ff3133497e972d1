use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Neg, Sub, SubAssign};
use std::str::FromStr;

/// Longest amount string accepted from an input field.
pub const MAX_AMOUNT_CHARS: usize = 8;

/// Represents a monetary value in the group's single currency.
///
/// This is a wrapper around `rust_decimal::Decimal`, so amounts typed by a user
/// are represented exactly. The only inexact step is the 28-digit division
/// in [`Money::split`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(pub Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    /// Rounds to two decimal places, halves away from zero.
    pub fn round_to_cents(self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Splits the amount evenly across `parts`. Zero parts yields zero.
    pub fn split(self, parts: usize) -> Self {
        if parts == 0 {
            return Self::ZERO;
        }
        self / Decimal::from(parts as u64)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.round_to_cents().0)
    }
}

impl Add for Money {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Money {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Div<Decimal> for Money {
    type Output = Self;
    fn div(self, rhs: Decimal) -> Self::Output {
        Self(self.0 / rhs)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Parses a loosely formatted amount coming from a text field.
///
/// Characters other than digits, `.`, `,` and `-` are dropped, the result is
/// cut to [`MAX_AMOUNT_CHARS`] and the first `,` is read as a decimal point.
/// Whatever does not then form a plain decimal number is treated as `0`, so
/// the function never fails.
pub fn parse_amount(raw: &str) -> Money {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-'))
        .take(MAX_AMOUNT_CHARS)
        .collect();
    let normalized = cleaned.replacen(',', ".", 1);

    match normalize_decimal(&normalized) {
        Some(text) => Decimal::from_str(&text).map(Money).unwrap_or(Money::ZERO),
        None => Money::ZERO,
    }
}

/// Accepts `-?D+(.D*)?` and `-?.D+`, returning a form `Decimal::from_str`
/// always understands (`"5."` becomes `"5"`, `".5"` becomes `"0.5"`).
fn normalize_decimal(text: &str) -> Option<String> {
    if text.is_empty() {
        return Some("0".to_string());
    }
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if !all_digits(int_part) {
        return None;
    }
    match frac_part {
        None if int_part.is_empty() => None,
        None => Some(format!("{sign}{int_part}")),
        Some(frac) if !all_digits(frac) => None,
        Some(frac) if int_part.is_empty() && frac.is_empty() => None,
        Some("") => Some(format!("{sign}{int_part}")),
        Some(frac) if int_part.is_empty() => Some(format!("{sign}0.{frac}")),
        Some(frac) => Some(format!("{sign}{int_part}.{frac}")),
    }
}
