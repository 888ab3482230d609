//! Engine configuration
//!
//! The epoch, catalog and milestone set are fixed for the life of an
//! engine. They travel together in one immutable value instead of globals.

use crate::{Epoch, FlowerCatalog, MilestoneSet};

/// Immutable inputs to the temporal engine
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// Reference start date
    pub epoch: Epoch,
    /// Flowers cycled by day index
    pub catalog: FlowerCatalog,
    /// Celebratory day counts
    pub milestones: MilestoneSet,
}

impl EngineConfig {
    pub fn new(epoch: Epoch, catalog: FlowerCatalog, milestones: MilestoneSet) -> Self {
        EngineConfig {
            epoch,
            catalog,
            milestones,
        }
    }

    /// Default catalog and milestones with a different epoch
    pub fn with_epoch(epoch: Epoch) -> Self {
        EngineConfig {
            epoch,
            ..Default::default()
        }
    }
}
