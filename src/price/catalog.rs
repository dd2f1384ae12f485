//! Price list loading and random selection
//!
//! A catalog file holds one product per line as `title;price_cents`. Blank
//! lines and lines starting with `#` are ignored; malformed lines are skipped.

use std::fs;
use std::path::Path;

use rand::prelude::IndexedRandom;
use tracing::{debug, info};

use super::{PriceSource, Product};
use crate::error::{Error, Result};

/// A set of products to draw the daily target from
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from already parsed products
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Load a catalog from a file
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    ///
    /// # Examples
    /// ```no_run
    /// use pricedle::price::Catalog;
    ///
    /// let catalog = Catalog::load_from_file("data/products.txt").unwrap();
    /// println!("Loaded {} products", catalog.len());
    /// ```
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let catalog = Self::parse(&content);
        info!(
            "loaded {} products from {}",
            catalog.len(),
            path.as_ref().display()
        );
        Ok(catalog)
    }

    /// Parse catalog text, skipping anything that is not a valid product line
    ///
    /// # Examples
    /// ```
    /// use pricedle::price::Catalog;
    ///
    /// let catalog = Catalog::parse("Butter;249\n# comment\nbroken line\n");
    /// assert_eq!(catalog.len(), 1);
    /// ```
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let products = content
            .lines()
            .enumerate()
            .filter_map(|(number, line)| {
                let trimmed = line.trim();
                if trimmed.is_empty() || trimmed.starts_with('#') {
                    return None;
                }
                let product = parse_line(trimmed);
                if product.is_none() {
                    debug!("skipping catalog line {}: {trimmed:?}", number + 1);
                }
                product
            })
            .collect();

        Self { products }
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn parse_line(line: &str) -> Option<Product> {
    let (title, cents) = line.rsplit_once(';')?;
    let title = title.trim();
    if title.is_empty() {
        return None;
    }
    let cents = cents.trim().parse::<u32>().ok()?;
    Product::new(title, cents).ok()
}

impl PriceSource for Catalog {
    fn pick(&self) -> Result<Product> {
        self.products
            .choose(&mut rand::rng())
            .cloned()
            .ok_or(Error::EmptyCatalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_valid_lines() {
        let catalog = Catalog::parse("Butter;249\nOat Milk 1l ; 199\n");

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.products()[0].title, "Butter");
        assert_eq!(catalog.products()[0].price_cents, 249);
        assert_eq!(catalog.products()[1].title, "Oat Milk 1l");
        assert_eq!(catalog.products()[1].price_cents, 199);
    }

    #[test]
    fn parse_skips_invalid() {
        let content = "\n# header\nno separator\n;100\nFree;0\nNegative;-5\nCheese;349\n";
        let catalog = Catalog::parse(content);

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.products()[0].title, "Cheese");
    }

    #[test]
    fn title_may_contain_separator() {
        let catalog = Catalog::parse("Salt; coarse;89");
        assert_eq!(catalog.products()[0].title, "Salt; coarse");
        assert_eq!(catalog.products()[0].price_cents, 89);
    }

    #[test]
    fn pick_from_catalog() {
        let catalog = Catalog::parse("A;100\nB;200\nC;300");
        for _ in 0..20 {
            let product = catalog.pick().unwrap();
            assert!(catalog.products().contains(&product));
        }
    }

    #[test]
    fn empty_catalog_cannot_pick() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert!(matches!(catalog.pick(), Err(Error::EmptyCatalog)));
    }

    #[test]
    fn load_from_file_reads_products() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Coffee 500g;699").unwrap();
        writeln!(file, "Bread;250").unwrap();

        let catalog = Catalog::load_from_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn load_missing_file_fails() {
        assert!(matches!(
            Catalog::load_from_file("/definitely/not/here.txt"),
            Err(Error::Io(_))
        ));
    }
}
