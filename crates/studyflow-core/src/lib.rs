//! # Studyflow Core Library
//!
//! This library provides the learning-session scheduling engine behind the
//! Studyflow planner. It implements a CLI-first philosophy where all
//! operations are available via a standalone CLI binary, with any GUI being
//! a thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Planner**: free-slot search, relative-time agenda buckets, and grid
//!   projection -- pure, synchronous functions over caller-owned sessions
//! - **Effectiveness**: a static hour-of-day learning-effectiveness table
//! - **Clock**: the injected source of "now" for deterministic behavior
//! - **Config**: TOML-based configuration for windows, scores, and geometry
//!
//! The engine owns no state: the session store belongs to the caller, and
//! every query is recomputed from the inputs plus the supplied instant.
//!
//! ## Key Components
//!
//! - [`SlotSearch`]: free-capacity search over a day window
//! - [`TimeBucket`]: relative-time classification for agenda grouping
//! - [`LayoutProjector`]: offset/length projection for grid display
//! - [`EffectivenessModel`]: hour-of-day effectiveness lookup

pub mod clock;
pub mod config;
pub mod effectiveness;
pub mod error;
pub mod planner;
pub mod session;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{EffectivenessConfig, PlannerConfig, WindowConfig};
pub use effectiveness::EffectivenessModel;
pub use error::{ConfigError, CoreError, Result, ValidationError};
pub use planner::{
    classify, find_free_slots, group_sessions, AgendaGroup, FreeSlot, LayoutProjector,
    LayoutSettings, PlanningAssistant, Projection, SessionProposal, SlotSearch, SlotSize,
    TimeBucket,
};
pub use session::{Session, SessionType, SessionTypeRegistry};
