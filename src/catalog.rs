//! The fixed catalog of selectable items.
//!
//! Every item that can appear in the enabled or disabled list is one of
//! these variants. The catalog is compiled in and never persisted.

use serde::Serialize;
use std::str::FromStr;

use crate::error::PrefError;

/// One entry of the item catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Item {
    Apple,
    Orange,
    Banana,
    Grapes,
    Strawberry,
    Mango,
    Watermelon,
    Plum,
}

impl Item {
    /// The whole catalog, in presentation order.
    pub const ALL: [Item; 8] = [
        Item::Apple,
        Item::Orange,
        Item::Banana,
        Item::Grapes,
        Item::Strawberry,
        Item::Mango,
        Item::Watermelon,
        Item::Plum,
    ];

    /// Name as written to the backing file.
    pub fn name(&self) -> &'static str {
        match self {
            Item::Apple => "Apple",
            Item::Orange => "Orange",
            Item::Banana => "Banana",
            Item::Grapes => "Grapes",
            Item::Strawberry => "Strawberry",
            Item::Mango => "Mango",
            Item::Watermelon => "Watermelon",
            Item::Plum => "Plum",
        }
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Item {
    type Err = PrefError;

    /// Case-insensitive lookup by name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Item::ALL
            .into_iter()
            .find(|item| item.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PrefError::UnknownItem(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_eight_distinct_items() {
        let mut names: Vec<_> = Item::ALL.iter().map(Item::name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 8);
    }

    #[test]
    fn test_parse_item_case_insensitive() {
        assert_eq!("mango".parse::<Item>().unwrap(), Item::Mango);
        assert_eq!("WATERMELON".parse::<Item>().unwrap(), Item::Watermelon);
        assert_eq!(" Plum ".parse::<Item>().unwrap(), Item::Plum);
    }

    #[test]
    fn test_parse_unknown_item() {
        assert!(matches!(
            "Kiwi".parse::<Item>(),
            Err(PrefError::UnknownItem(name)) if name == "Kiwi"
        ));
        assert!("".parse::<Item>().is_err());
    }

    #[test]
    fn test_display_matches_name() {
        for item in Item::ALL {
            assert_eq!(item.to_string(), item.name());
        }
    }
}
