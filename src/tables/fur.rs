//! Fur color options for recruitment

/// Fur colors a recruit may have
pub static FUR_COLORS: &[&str] = &[
    "Black",
    "Brown",
    "Chestnut",
    "Cinnamon",
    "Dark Brown",
    "Golden",
    "Grey",
    "Red",
    "Russet",
    "Sandy",
    "Tan",
    "White",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fur_colors_nonempty_and_unique() {
        use std::collections::HashSet;
        let set: HashSet<_> = FUR_COLORS.iter().collect();
        assert!(!FUR_COLORS.is_empty());
        assert_eq!(set.len(), FUR_COLORS.len());
    }
}
