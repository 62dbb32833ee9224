//! Preference Editor Library
//!
//! A flat-file preference store with list models for editing an ordered
//! set of enabled items.
//!
//! # Features
//!
//! - Read and write five fixed preferences stored one per line
//! - Reorder enabled items and move them between enabled and disabled lists
//! - Observe model changes through listener registration
//!
//! # Example
//!
//! ```no_run
//! use pref_editor::controller::PreferenceController;
//! use pref_editor::model::RecordModel;
//! use pref_editor::storage::{PrefStore, default_path};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let record = RecordModel::new(PrefStore::new(default_path()));
//!     let mut controller = PreferenceController::new(&record);
//!
//!     // Move the first enabled item down one row
//!     controller.select_enabled(Some(0))?;
//!     controller.move_down()?;
//!
//!     println!("{:?}", controller.enabled().items()?);
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod storage;
pub mod utils;

// Re-exports for convenience
pub use catalog::Item;
pub use controller::PreferenceController;
pub use error::{PrefError, Result};
pub use storage::{PrefKey, PrefStore, PrefValue, PreferenceRecord};
