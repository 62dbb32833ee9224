//! Built-in preference defaults and file locations.
//!
//! Provides the values written on first run and the names used to resolve
//! the backing file.

use crate::catalog::Item;

// =============================================================================
// File Locations
// =============================================================================

/// Name of the backing file, relative to the working directory by default.
pub const PREF_FILE: &str = "pref.txt";

/// Directory name under the platform config dir (used with `--user`).
pub const APP_NAME: &str = "pref-editor";

/// Number of lines (one per key) in a well-formed backing file.
pub const PREF_LINES: usize = 5;

// =============================================================================
// Default Record
// =============================================================================

pub const DEFAULT_OPTION1: bool = true;
pub const DEFAULT_OPTION2: bool = false;
pub const DEFAULT_LINE1: &str = "Hello World";
pub const DEFAULT_LINE2: &str = "Bye";

/// Items enabled on first run, in order.
pub const DEFAULT_ENABLED_ITEMS: [Item; 3] = [Item::Apple, Item::Orange, Item::Banana];

/// Separator between item names on the enabled-items line.
pub const ITEM_SEPARATOR: &str = ",";

/// Textual forms of booleans in the backing file.
pub const TRUE_LITERAL: &str = "True";
pub const FALSE_LITERAL: &str = "False";
