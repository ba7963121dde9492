//! # Pomobar Core Library
//!
//! Core logic for Pomobar, a Pomodoro interval timer. The library is
//! CLI-first: everything the shell renders is read back from the
//! [`IntervalSequencer`] state machine, with the binary being a thin
//! presentation layer over this crate.
//!
//! ## Architecture
//!
//! - **Interval Sequencer**: a tick-driven state machine; the caller
//!   delivers one `tick()` per elapsed second, there is no internal clock
//! - **Events**: every transition is reported as an [`Event`] the shell
//!   consumes exactly once
//! - **Configuration**: TOML-based shell preferences
//!
//! ## Key Components
//!
//! - [`IntervalSequencer`]: the eight-slot work/break state machine
//! - [`Event`]: transition and snapshot events
//! - [`Config`]: application configuration management

pub mod config;
pub mod error;
pub mod events;
pub mod sequencer;
pub mod stats;

pub use config::Config;
pub use error::{ConfigError, CoreError};
pub use events::Event;
pub use sequencer::{IntervalSequencer, SequencerState, SlotKind};
pub use stats::SessionStats;
