/// Ocean regions the backend's dataset covers, with their display emoji.
pub static REGIONS: [(&str, &str); 4] = [
    ("Indian Ocean", "🌊"),
    ("Pacific Ocean", "🌏"),
    ("Atlantic Ocean", "🌎"),
    ("Arctic Ocean", "🧊"),
];

/// Display emoji for a known region.
pub fn region_emoji(region: &str) -> Option<&'static str> {
    REGIONS
        .iter()
        .find(|(name, _)| *name == region)
        .map(|(_, emoji)| *emoji)
}

/// Names of all known regions, in display order.
pub fn region_names() -> impl Iterator<Item = &'static str> {
    REGIONS.iter().map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_emoji() {
        assert_eq!(region_emoji("Arctic Ocean"), Some("🧊"));
        assert_eq!(region_emoji("arctic ocean"), None);
        assert_eq!(region_emoji("Southern Ocean"), None);
    }

    #[test]
    fn test_region_names_order() {
        let names: Vec<&str> = region_names().collect();
        assert_eq!(names[0], "Indian Ocean");
        assert_eq!(names.len(), 4);
    }
}
