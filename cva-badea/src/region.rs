//! The fixed region vocabulary of the feed's `Territorio` column.

/// Name of the aggregate row covering the whole autonomous community.
pub const AGGREGATE_REGION: &str = "Andalucía";

/// The eight provinces of Andalucía as they appear in the feed.
pub const PROVINCES: [&str; 8] = [
    "Almería", "Cádiz", "Córdoba", "Granada", "Huelva", "Jaén", "Málaga", "Sevilla",
];

/// True for the aggregate region name.
pub fn is_aggregate(region: &str) -> bool {
    region == AGGREGATE_REGION
}

/// True if the region is the aggregate or one of the eight provinces.
pub fn is_known_region(region: &str) -> bool {
    is_aggregate(region) || PROVINCES.contains(&region)
}
