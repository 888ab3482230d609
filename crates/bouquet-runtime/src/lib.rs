//! Bouquet Runtime - display orchestration
//!
//! This crate drives the temporal engine on behalf of a presentation layer:
//! 1. Read the clock
//! 2. Observe (elapsed days, flower, anniversary, milestone, season)
//! 3. Build the frame (bouquet layout, tag, note, labels)
//! 4. Hand the frame to the presenter
//! 5. Re-arm the midnight render
//!
//! Background music state is held by the display's playback session.

pub mod config;
pub mod display;
pub mod frame;
pub mod layout;
pub mod playback;
pub mod presenter;
pub mod telemetry;

pub use config::*;
pub use display::*;
pub use frame::*;
pub use layout::*;
pub use playback::*;
pub use presenter::*;
