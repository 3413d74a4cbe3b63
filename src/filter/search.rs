use crate::models::Accommodation;

/// Free-text predicate: the lower-cased query must appear in the name,
/// the location, the description, or any amenity label. An empty query
/// passes everything.
pub fn matches_query(record: &Accommodation, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    if record.name().to_lowercase().contains(&query)
        || record.location().to_lowercase().contains(&query)
    {
        return true;
    }
    if let Some(description) = record.description() {
        if description.to_lowercase().contains(&query) {
            return true;
        }
    }
    record
        .amenities()
        .iter()
        .any(|label| label.to_lowercase().contains(&query))
}

/// Narrow a candidate set by free text, preserving order
pub fn search(records: &[Accommodation], query: &str) -> Vec<Accommodation> {
    records
        .iter()
        .filter(|record| matches_query(record, query))
        .cloned()
        .collect()
}
