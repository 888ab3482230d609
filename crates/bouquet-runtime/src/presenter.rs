//! Presentation seam
//!
//! Drawing, particle effects and styling live behind [`Presenter`]. The
//! runtime only hands over values.

use tracing::{info, warn};

use bouquet_core::DayPeriod;

use crate::{Frame, PlaybackState};

/// Consumer of render output
pub trait Presenter: Send {
    /// Draw a full frame
    fn present(&mut self, frame: &Frame);

    /// The time-of-day band changed between full renders
    fn period_changed(&mut self, _period: DayPeriod) {}

    /// The music toggle changed state
    fn playback_changed(&mut self, _state: PlaybackState) {}
}

/// Presenter that writes frames to the log
#[derive(Clone, Debug, Default)]
pub struct LogPresenter {
    json: bool,
}

impl LogPresenter {
    /// `json` logs the full frame document instead of a summary line
    pub fn new(json: bool) -> Self {
        LogPresenter { json }
    }
}

impl Presenter for LogPresenter {
    fn present(&mut self, frame: &Frame) {
        if self.json {
            match serde_json::to_string(frame) {
                Ok(doc) => info!(target: "bouquet::frame", "{}", doc),
                Err(e) => warn!("Failed to encode frame: {}", e),
            }
            return;
        }

        let obs = &frame.observation;
        info!(
            days = obs.elapsed_days,
            flower = %obs.flower.name,
            season = %obs.season,
            period = %obs.day_period,
            "{} {} | {} | next: {} ({} days)",
            obs.flower.symbol,
            frame.tag,
            frame.note,
            frame.anniversary_label,
            obs.anniversary.days_until,
        );
        if frame.celebrate {
            info!(days = obs.elapsed_days, "milestone reached");
        }
        if let Some(next) = obs.next_milestone {
            info!(
                milestone = next,
                in_days = next - obs.elapsed_days,
                "next milestone"
            );
        }
    }

    fn period_changed(&mut self, period: DayPeriod) {
        info!(%period, "time of day changed");
    }

    fn playback_changed(&mut self, state: PlaybackState) {
        info!(?state, "{}", state.indicator());
    }
}
