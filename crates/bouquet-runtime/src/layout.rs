//! Bouquet geometry
//!
//! One stem per elapsed day, capped for legibility. Stems fan out from
//! -30° to +30°, are tallest in the middle, and grow in one after another.

use std::f64::consts::PI;

use serde::Serialize;

/// Most stems ever drawn, however many days have passed
pub const MAX_VISIBLE_FLOWERS: usize = 25;

/// Number of distinct stem images cycled through
pub const STEM_VARIANTS: usize = 3;

const BASE_HEIGHT_PX: f64 = 200.0;
const SPREAD_PX: f64 = 80.0;
const GROW_STAGGER_SECS: f64 = 0.15;

/// Placement of a single stem
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Stem {
    pub index: usize,
    /// Which stem image to use, `index % STEM_VARIANTS`
    pub variant: usize,
    pub angle_deg: f64,
    pub scale: f64,
    /// Horizontal offset from center
    pub offset_px: f64,
    pub height_px: f64,
    pub z_index: u32,
    /// Growth animation delay
    pub delay_secs: f64,
}

impl Stem {
    fn place(index: usize, total: usize) -> Self {
        let progress = if total > 1 {
            index as f64 / (total - 1) as f64
        } else {
            0.5
        };
        let scale = 0.8 + 0.4 * (progress * PI).sin();
        Stem {
            index,
            variant: index % STEM_VARIANTS,
            angle_deg: -30.0 + progress * 60.0,
            scale,
            offset_px: (progress - 0.5) * SPREAD_PX,
            height_px: BASE_HEIGHT_PX * scale,
            z_index: 10 + index as u32,
            delay_secs: GROW_STAGGER_SECS * index as f64,
        }
    }
}

/// Layout of the whole bouquet for one day count
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BouquetLayout {
    pub stems: Vec<Stem>,
    /// Days the bouquet stands for, which may exceed the stem count
    pub total_days: u64,
}

impl BouquetLayout {
    /// At least one stem is always shown, even on day zero
    pub fn for_days(days: u64) -> Self {
        let visible = days.clamp(1, MAX_VISIBLE_FLOWERS as u64) as usize;
        BouquetLayout {
            stems: (0..visible).map(|i| Stem::place(i, visible)).collect(),
            total_days: days,
        }
    }

    #[inline]
    pub fn visible(&self) -> usize {
        self.stems.len()
    }

    /// More days than stems
    #[inline]
    pub fn is_truncated(&self) -> bool {
        self.total_days > self.stems.len() as u64
    }
}
