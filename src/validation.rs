/// Returns the replacement value for an update field, or `None` when the
/// existing value should be kept.
///
/// Only the empty string means "keep". A whitespace-only value counts as a
/// real replacement, and no trimming happens here, so whatever the caller
/// typed is stored verbatim. One consequence worth knowing: a field can
/// never be blanked out through update.
pub fn replacement(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
