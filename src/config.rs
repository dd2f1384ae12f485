//! Runtime configuration
//!
//! Built by the CLI from flags and `PRICEDLE_*` environment variables. Game
//! rules (attempt count, tier bands) are fixed in code and not configurable.

use std::path::PathBuf;

use tracing::info;

use crate::error::Result;
use crate::price::{Catalog, FixedPrice, PriceSource};
use crate::session::FileStore;

/// Default directory for session files
pub const DEFAULT_STATE_DIR: &str = ".pricedle";

/// Default play counter file
pub const DEFAULT_COUNTER_FILE: &str = "current-pricedle";

/// Default session key
pub const DEFAULT_SESSION: &str = "default";

/// Title used when the price is fixed on the command line
pub const FIXED_PRODUCT_TITLE: &str = "Mystery product";

/// Built-in price list used when neither a price nor a catalog is configured
pub const BUILTIN_CATALOG: &str = "\
Butter 250g;249
Whole Milk 1l;119
Espresso Beans 1kg;1599
Sourdough Bread 750g;349
Greek Yogurt 500g;229
Dark Chocolate 100g;179
Olive Oil 500ml;899
Free-Range Eggs 10 pcs;369
Basmati Rice 1kg;299
Orange Juice 1l;249
";

#[derive(Debug, Clone)]
pub struct GameConfig {
    pub state_dir: PathBuf,
    pub counter_file: PathBuf,
    pub catalog: Option<PathBuf>,
    pub price: Option<f64>,
    pub session: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            state_dir: PathBuf::from(DEFAULT_STATE_DIR),
            counter_file: PathBuf::from(DEFAULT_COUNTER_FILE),
            catalog: None,
            price: None,
            session: DEFAULT_SESSION.to_string(),
        }
    }
}

impl GameConfig {
    /// Resolve the configured price source
    ///
    /// A fixed price wins over a catalog file; with neither, the built-in
    /// price list is used.
    ///
    /// # Errors
    /// Returns an error if the fixed price is invalid or the catalog file
    /// cannot be read.
    pub fn price_source(&self) -> Result<Box<dyn PriceSource>> {
        if let Some(price) = self.price {
            info!("using fixed price {price:.2}");
            return Ok(Box::new(FixedPrice::new(FIXED_PRODUCT_TITLE, price)?));
        }

        match &self.catalog {
            Some(path) => Ok(Box::new(Catalog::load_from_file(path)?)),
            None => Ok(Box::new(Catalog::parse(BUILTIN_CATALOG))),
        }
    }

    /// Session store rooted at the configured state directory
    #[must_use]
    pub fn store(&self) -> FileStore {
        FileStore::new(&self.state_dir)
    }
}
