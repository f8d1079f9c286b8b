//! Parsing for the bulk-item input format: free text with items delimited by
//! a literal `*`.

/// Split bulk-item text on `*`, trimming each segment and dropping empties.
///
/// `"* Apple * Banana *  * Cherry"` → `["Apple", "Banana", "Cherry"]`
pub fn split_items(raw: &str) -> Vec<String> {
    raw.split('*')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
