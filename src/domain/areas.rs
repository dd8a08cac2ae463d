/// A named geographic zone with its map label coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaMetadata {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Case-insensitive substring search over the area list, first match in the
/// given order wins. An empty query matches the first area, since every name
/// contains the empty string; that permissiveness is deliberate and covered
/// by tests.
#[must_use]
pub fn find_area<'a>(query: &str, areas: &'a [AreaMetadata]) -> Option<&'a AreaMetadata> {
    let needle = query.to_lowercase();
    areas
        .iter()
        .find(|area| area.name.to_lowercase().contains(&needle))
}
