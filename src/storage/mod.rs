//! Preference storage and persistence module.
//!
//! Handles reading and writing the line-oriented backing file.
//! Includes defaults management and the key/value types.

pub mod defaults;
pub mod store;
pub mod types;

// Re-export commonly used items
pub use defaults::default_lines;
pub use store::{PrefStore, default_path, get_config_dir, user_pref_path};
pub use types::*;
