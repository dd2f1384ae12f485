//! Target price sources
//!
//! The game only needs one positive price per play-through. Where it comes
//! from is up to the source: a fixed value or a random pick from a local
//! price list.

pub mod catalog;

pub use catalog::Catalog;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A product offered for guessing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub title: String,
    /// Retail price in cents
    pub price_cents: u32,
}

impl Product {
    /// Create a product, rejecting a zero price
    ///
    /// # Errors
    /// Returns [`Error::InvalidPrice`] if `price_cents` is zero.
    pub fn new(title: impl Into<String>, price_cents: u32) -> Result<Self> {
        if price_cents == 0 {
            return Err(Error::InvalidPrice(0.0));
        }
        Ok(Self {
            title: title.into(),
            price_cents,
        })
    }

    /// Price in currency units
    #[must_use]
    pub fn price(&self) -> f64 {
        f64::from(self.price_cents) / 100.0
    }

    /// Whether `price` is this product's price to the cent
    #[must_use]
    pub fn is_priced_at(&self, price: f64) -> bool {
        (price * 100.0).round() as i64 == i64::from(self.price_cents)
    }
}

/// Supplies the product for a new play-through
pub trait PriceSource {
    /// Pick the product to guess
    ///
    /// # Errors
    /// Returns an error if the source has nothing to offer.
    fn pick(&self) -> Result<Product>;
}

/// Always offers the same product
#[derive(Debug, Clone)]
pub struct FixedPrice {
    product: Product,
}

impl FixedPrice {
    /// Fixed source for a price given in currency units, rounded to cents
    ///
    /// # Errors
    /// Returns [`Error::InvalidPrice`] unless `price` is positive and finite.
    pub fn new(title: impl Into<String>, price: f64) -> Result<Self> {
        if !price.is_finite() || price <= 0.0 {
            return Err(Error::InvalidPrice(price));
        }
        let cents = (price * 100.0).round();
        if cents < 1.0 || cents > f64::from(u32::MAX) {
            return Err(Error::InvalidPrice(price));
        }
        Ok(Self {
            product: Product::new(title, cents as u32)?,
        })
    }
}

impl PriceSource for FixedPrice {
    fn pick(&self) -> Result<Product> {
        Ok(self.product.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_price_in_units() {
        let product = Product::new("Butter", 249).unwrap();
        assert!((product.price() - 2.49).abs() < f64::EPSILON);
    }

    #[test]
    fn priced_at_compares_cents() {
        let product = Product::new("Butter", 249).unwrap();
        assert!(product.is_priced_at(product.price()));
        assert!(product.is_priced_at(2.49));
        assert!(!product.is_priced_at(2.5));
        assert!(!product.is_priced_at(9.99));
    }

    #[test]
    fn zero_price_rejected() {
        assert!(matches!(
            Product::new("Free", 0),
            Err(Error::InvalidPrice(_))
        ));
    }

    #[test]
    fn fixed_price_rounds_to_cents() {
        let source = FixedPrice::new("Milk", 1.199).unwrap();
        assert_eq!(source.pick().unwrap().price_cents, 120);
    }

    #[test]
    fn fixed_price_rejects_non_positive() {
        for price in [0.0, -1.0, f64::NAN, f64::INFINITY, 0.001] {
            assert!(FixedPrice::new("x", price).is_err(), "{price}");
        }
    }
}
