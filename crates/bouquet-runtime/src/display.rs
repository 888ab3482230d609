//! Bouquet Display - runtime loop
//!
//! Renders are triggered by:
//! 1. Startup
//! 2. Local midnight (one pending timer, re-armed from a fresh clock read)
//! 3. Regained visibility
//!
//! Between renders a periodic tick refreshes only the time-of-day band.

use std::ops::ControlFlow;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use tokio::sync::mpsc;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

use bouquet_core::DayPeriod;
use bouquet_time::{day_period_for, Clock, MidnightSchedule, TemporalEngine};

use crate::{
    AudioSink, ConfigError, Frame, PlaybackSession, PlaybackSettings, Presenter, RuntimeConfig,
};

/// Events delivered by the host
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayEvent {
    /// The display became visible again; catches missed midnights
    VisibilityRegained,
    /// Music button pressed
    ToggleMusic,
    /// Stop the loop
    Shutdown,
}

/// Why a full render happened
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderTrigger {
    Startup,
    Midnight,
    Visibility,
}

/// Shortest accepted time-of-day refresh interval
pub const MIN_PERIOD_REFRESH: Duration = Duration::from_secs(1);

/// Longest accepted time-of-day refresh interval
pub const MAX_PERIOD_REFRESH: Duration = Duration::from_secs(24 * 60 * 60);

/// Display options
#[derive(Clone, Debug)]
pub struct DisplayOptions {
    /// Time-of-day refresh interval
    pub period_refresh: Duration,
    pub playback: PlaybackSettings,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        DisplayOptions {
            period_refresh: Duration::from_secs(60),
            playback: PlaybackSettings::default(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisplayStats {
    pub renders: u64,
    pub midnight_renders: u64,
    pub visibility_renders: u64,
    pub period_changes: u64,
    pub playback_toggles: u64,
}

/// Latest frame, readable from other tasks
pub type FrameHandle = Arc<RwLock<Option<Frame>>>;

/// Bouquet Display - owns the engine, the clock and the playback session
pub struct Display<C: Clock, P: Presenter, A: AudioSink> {
    engine: TemporalEngine,
    clock: C,
    presenter: P,
    playback: PlaybackSession<A>,
    schedule: MidnightSchedule,
    options: DisplayOptions,
    period: Option<DayPeriod>,
    latest: FrameHandle,
    stats: DisplayStats,
}

impl<C: Clock, P: Presenter, A: AudioSink> Display<C, P, A> {
    pub fn new(
        engine: TemporalEngine,
        clock: C,
        presenter: P,
        sink: A,
        options: DisplayOptions,
    ) -> Self {
        Display {
            engine,
            clock,
            presenter,
            playback: PlaybackSession::new(sink),
            schedule: MidnightSchedule::new(),
            options,
            period: None,
            latest: Arc::new(RwLock::new(None)),
            stats: DisplayStats::default(),
        }
    }

    /// Build from a validated runtime config
    pub fn from_config(
        config: &RuntimeConfig,
        clock: C,
        presenter: P,
        sink: A,
    ) -> Result<Self, ConfigError> {
        let engine = TemporalEngine::with_config(config.engine_config()?);
        Ok(Self::new(engine, clock, presenter, sink, config.display_options()))
    }

    /// Compute and present a frame for the current instant
    pub fn render(&mut self, trigger: RenderTrigger) -> Frame {
        let now = self.clock.now();
        let frame = Frame::build(self.engine.observe(now));

        self.stats.renders += 1;
        match trigger {
            RenderTrigger::Midnight => self.stats.midnight_renders += 1,
            RenderTrigger::Visibility => self.stats.visibility_renders += 1,
            RenderTrigger::Startup => {}
        }
        self.period = Some(frame.observation.day_period);

        info!(?trigger, %now, days = frame.elapsed_days(), "render");
        self.presenter.present(&frame);
        *self.latest.write() = Some(frame.clone());
        frame
    }

    /// Re-check the time-of-day band; reports it only when it changed
    pub fn refresh_period(&mut self) -> Option<DayPeriod> {
        let period = day_period_for(self.clock.now());
        if self.period == Some(period) {
            return None;
        }
        self.period = Some(period);
        self.stats.period_changes += 1;
        self.presenter.period_changed(period);
        Some(period)
    }

    /// Apply a host event
    pub fn handle_event(&mut self, event: DisplayEvent) -> ControlFlow<()> {
        match event {
            DisplayEvent::VisibilityRegained => {
                self.render(RenderTrigger::Visibility);
            }
            DisplayEvent::ToggleMusic => {
                let state = self.playback.toggle();
                self.stats.playback_toggles += 1;
                self.presenter.playback_changed(state);
            }
            DisplayEvent::Shutdown => return ControlFlow::Break(()),
        }
        ControlFlow::Continue(())
    }

    /// Real wait until the next local midnight, from a fresh clock read
    fn midnight_delay(&self) -> Duration {
        let delay = self.schedule.delay_on(&self.clock);
        debug!(
            next = %self.schedule.next_fire(self.clock.now()),
            ?delay,
            "midnight render armed"
        );
        delay
    }

    /// Run until `Shutdown` or until every event sender is dropped
    pub async fn run(mut self, mut events: mpsc::Receiver<DisplayEvent>) -> DisplayStats {
        self.render(RenderTrigger::Startup);
        let state = self.playback.start(self.options.playback);
        self.presenter.playback_changed(state);

        let refresh = self
            .options
            .period_refresh
            .clamp(MIN_PERIOD_REFRESH, MAX_PERIOD_REFRESH);
        let start = Instant::now();
        let first_tick = start.checked_add(refresh).unwrap_or(start);
        let mut period_tick = time::interval_at(first_tick, refresh);
        period_tick.set_missed_tick_behavior(MissedTickBehavior::Delay);

        // The only midnight timer; reset in place, never duplicated
        let midnight = time::sleep(self.midnight_delay());
        tokio::pin!(midnight);

        loop {
            tokio::select! {
                () = &mut midnight => {
                    self.render(RenderTrigger::Midnight);
                    let delay = self.midnight_delay();
                    midnight.as_mut().reset(Instant::now() + delay);
                }
                _ = period_tick.tick() => {
                    self.refresh_period();
                }
                event = events.recv() => {
                    let Some(event) = event else {
                        break;
                    };
                    if self.handle_event(event).is_break() {
                        break;
                    }
                    if event == DisplayEvent::VisibilityRegained {
                        let delay = self.midnight_delay();
                        midnight.as_mut().reset(Instant::now() + delay);
                    }
                }
            }
        }

        info!(renders = self.stats.renders, "display stopped");
        self.stats
    }

    /// Shared handle to the most recent frame
    pub fn frame_handle(&self) -> FrameHandle {
        Arc::clone(&self.latest)
    }

    pub fn stats(&self) -> &DisplayStats {
        &self.stats
    }
}
