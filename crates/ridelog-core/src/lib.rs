//! # Ridelog Core
//!
//! Core library for ridelog - a CLI-first log of bike rides.
//!
//! This crate turns free-form answers typed at a prompt into a typed ride
//! record and hands finished records to a relational store, independent of
//! the CLI interface.
//!
//! ## Architecture
//!
//! - **numeric**: the one "is this a number" predicate every grammar uses
//! - **date**: shorthand dates (`d`, `d-m`, `d-m-y`, empty for today)
//! - **duration**: day time and total time grammars
//! - **field**: the four ride fields and their rotation order
//! - **acquire**: the prompt/answer loop that builds a `RideRecord`
//! - **settings**: `key=value` connection settings
//! - **storage**: the SQL collaborator trait and its SQLite backend

pub mod acquire;
pub mod date;
pub mod duration;
pub mod error;
pub mod field;
pub mod numeric;
pub mod record;
pub mod settings;
pub mod storage;

pub use acquire::{acquire, ValueAcquirer};
pub use error::{Result, RideError};
pub use field::{rotate, FieldOrder, FieldSelector};
pub use record::{Period, PeriodSummary, RideRecord};
pub use settings::Settings;
pub use storage::SqlExecutor;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
