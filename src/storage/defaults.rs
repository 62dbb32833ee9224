//! Built-in default record, written when no backing file exists yet.

use crate::config::{
    DEFAULT_ENABLED_ITEMS, DEFAULT_LINE1, DEFAULT_LINE2, DEFAULT_OPTION1, DEFAULT_OPTION2,
};
use crate::storage::types::PreferenceRecord;

impl Default for PreferenceRecord {
    fn default() -> Self {
        Self {
            option1: DEFAULT_OPTION1,
            option2: DEFAULT_OPTION2,
            line1: DEFAULT_LINE1.into(),
            line2: DEFAULT_LINE2.into(),
            enabled_items: DEFAULT_ENABLED_ITEMS.to_vec(),
        }
    }
}

/// Lines of a freshly written backing file.
pub fn default_lines() -> Vec<String> {
    PreferenceRecord::default().to_lines()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lines() {
        assert_eq!(
            default_lines(),
            vec!["True", "False", "Hello World", "Bye", "Apple,Orange,Banana"]
        );
    }
}
