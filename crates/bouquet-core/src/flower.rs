//! Flower catalog cycled by day index

use serde::{Deserialize, Serialize};

use crate::{BouquetError, BouquetResult};

/// A single catalog entry
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Flower {
    /// Display glyph
    pub symbol: String,
    /// Human-readable name
    pub name: String,
}

impl Flower {
    pub fn new(symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Flower {
            symbol: symbol.into(),
            name: name.into(),
        }
    }
}

/// Default catalog, in cycling order
const DEFAULT_FLOWERS: [(&str, &str); 14] = [
    ("🌹", "Rose"),
    ("🌷", "Tulip"),
    ("🌼", "Daisy"),
    ("🌻", "Sunflower"),
    ("🌸", "Cherry Blossom"),
    ("🌺", "Hibiscus"),
    ("💮", "Camellia"),
    ("🏵️", "Rosette"),
    ("🪻", "Lavender"),
    ("🪷", "Lotus"),
    ("🌹", "Red Rose"),
    ("🌼", "White Daisy"),
    ("🌻", "Bright Sunflower"),
    ("🌷", "Pink Tulip"),
];

/// Fixed, ordered, non-empty flower sequence
///
/// INVARIANT: never empty, so `for_day` is total.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlowerCatalog {
    flowers: Vec<Flower>,
}

impl FlowerCatalog {
    /// Build a catalog, rejecting an empty list or blank names
    pub fn new(flowers: Vec<Flower>) -> BouquetResult<Self> {
        if flowers.is_empty() {
            return Err(BouquetError::EmptyCatalog);
        }
        for (index, flower) in flowers.iter().enumerate() {
            if flower.name.trim().is_empty() {
                return Err(BouquetError::InvalidFlower {
                    index,
                    reason: "name is blank",
                });
            }
            if flower.symbol.is_empty() {
                return Err(BouquetError::InvalidFlower {
                    index,
                    reason: "symbol is empty",
                });
            }
        }
        Ok(FlowerCatalog { flowers })
    }

    /// Entry at `day_index mod len`. Wraps indefinitely.
    #[inline]
    pub fn for_day(&self, day_index: u64) -> &Flower {
        let len = self.flowers.len() as u64;
        &self.flowers[(day_index % len) as usize]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.flowers.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.flowers.is_empty()
    }

    pub fn first(&self) -> &Flower {
        &self.flowers[0]
    }
}

impl Default for FlowerCatalog {
    fn default() -> Self {
        FlowerCatalog {
            flowers: DEFAULT_FLOWERS
                .iter()
                .map(|(symbol, name)| Flower::new(*symbol, *name))
                .collect(),
        }
    }
}
