//! Utility modules for the preference editor.

pub mod parsing;
