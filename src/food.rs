//! Food record and its wire shape.
//!
//! The remote collection speaks `{id, name, image, price, description,
//! available}`. Prices arrive either as JSON numbers or as the raw text the
//! user typed into the form, so [`Price`] accepts both and always writes a
//! number back.

#[cfg(test)]
#[path = "food_test.rs"]
mod food_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Largest price accepted, in cents. Kept under 2^53 so the decimal form
/// stays exact as an `f64`.
const MAX_CENTS: u64 = 9_000_000_000_000_000;

/// Currency prefix shown on item cards.
pub const CURRENCY_PREFIX: &str = "R$";

/// Server-assigned identity of a food record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FoodId(pub u64);

impl fmt::Display for FoodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for FoodId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Price text or number that is not a non-negative decimal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid price: {0:?}")]
pub struct InvalidPrice(pub String);

/// Non-negative decimal price held as whole cents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price {
    cents: u64,
}

impl Price {
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    #[must_use]
    pub const fn cents(self) -> u64 {
        self.cents
    }

    /// Round a decimal amount to the nearest cent.
    ///
    /// Returns `None` for negative, non-finite, or out-of-range values.
    #[must_use]
    pub fn from_decimal(value: f64) -> Option<Self> {
        if !value.is_finite() || value < 0.0 {
            return None;
        }
        let cents = (value * 100.0).round();
        #[allow(clippy::cast_precision_loss)]
        let max = MAX_CENTS as f64;
        if cents > max {
            return None;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let cents = cents as u64;
        Some(Self { cents })
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_decimal(self) -> f64 {
        self.cents as f64 / 100.0
    }

    /// Card label, e.g. `R$ 19.90`.
    #[must_use]
    pub fn label(self) -> String {
        format!("{CURRENCY_PREFIX} {self}")
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}

impl FromStr for Price {
    type Err = InvalidPrice;

    /// Accepts `19.9`, `19.90`, `19,90` and surrounding whitespace. Extra
    /// fraction digits round half up on the third digit as typed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidPrice(s.to_owned());
        let trimmed = s.trim();
        let (whole, fraction) = trimmed.split_once(['.', ',']).unwrap_or((trimmed, ""));
        let digits_only = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty())
            || !digits_only(whole)
            || !digits_only(fraction)
        {
            return Err(invalid());
        }

        let units: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let mut fraction_digits = fraction.bytes().map(|b| u64::from(b - b'0'));
        let tenths = fraction_digits.next().unwrap_or(0);
        let hundredths = fraction_digits.next().unwrap_or(0);
        let round_up = u64::from(fraction_digits.next().is_some_and(|d| d >= 5));

        let cents = units
            .checked_mul(100)
            .and_then(|c| c.checked_add(tenths * 10 + hundredths + round_up))
            .filter(|&c| c <= MAX_CENTS)
            .ok_or_else(invalid)?;
        Ok(Self { cents })
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_decimal())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawPrice {
            Number(f64),
            Text(String),
        }

        match RawPrice::deserialize(deserializer)? {
            RawPrice::Number(value) => Self::from_decimal(value)
                .ok_or_else(|| serde::de::Error::custom(InvalidPrice(value.to_string()))),
            RawPrice::Text(text) => text.parse().map_err(serde::de::Error::custom),
        }
    }
}

fn default_available() -> bool {
    true
}

/// One menu item as stored by the remote collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Food {
    pub id: FoodId,
    pub name: String,
    #[serde(default)]
    pub image: String,
    pub price: Price,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_available")]
    pub available: bool,
}

impl Food {
    /// Copy of this record with the supplied patch fields laid over it.
    /// The id never changes.
    #[must_use]
    pub fn merged(&self, patch: &FoodPatch) -> Self {
        Self {
            id: self.id,
            name: patch.name.clone().unwrap_or_else(|| self.name.clone()),
            image: patch.image.clone().unwrap_or_else(|| self.image.clone()),
            price: patch.price.unwrap_or(self.price),
            description: patch
                .description
                .clone()
                .unwrap_or_else(|| self.description.clone()),
            available: patch.available.unwrap_or(self.available),
        }
    }

    /// Copy of this record with availability flipped.
    #[must_use]
    pub fn toggled(&self) -> Self {
        self.merged(&FoodPatch {
            available: Some(!self.available),
            ..FoodPatch::default()
        })
    }
}

/// Create body for `POST /foods`. Always sent with `available: true`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewFood {
    pub image: String,
    pub name: String,
    pub price: Price,
    pub description: String,
    available: bool,
}

impl NewFood {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        image: impl Into<String>,
        price: Price,
        description: impl Into<String>,
    ) -> Self {
        Self {
            image: image.into(),
            name: name.into(),
            price,
            description: description.into(),
            available: true,
        }
    }

    #[must_use]
    pub fn available(&self) -> bool {
        self.available
    }
}

/// Fields supplied by an edit submission. `None` keeps the previous value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FoodPatch {
    pub image: Option<String>,
    pub name: Option<String>,
    pub price: Option<Price>,
    pub description: Option<String>,
    pub available: Option<bool>,
}

impl FoodPatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.image.is_none()
            && self.name.is_none()
            && self.price.is_none()
            && self.description.is_none()
            && self.available.is_none()
    }
}
