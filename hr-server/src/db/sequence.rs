//! Sequential Identifier Generation
//!
//! Human-readable identifiers follow the pattern `<PREFIX><NNN>` with the
//! numeric part zero-padded to three digits (EMP001, TRF012, REQ103).
//!
//! All record kinds use the max-suffix policy: scan every existing id, take
//! the largest numeric suffix, and increment it. This stays correct under
//! arbitrary deletion order, unlike incrementing the last element of the
//! list, which can hand out a duplicate id after the highest-numbered record
//! is deleted.

/// Produce the next identifier in a prefixed sequence
///
/// Ids that do not carry the prefix or whose suffix does not parse are
/// ignored. An empty collection yields `<PREFIX>001`.
pub fn next_in_sequence<'a>(prefix: &str, ids: impl IntoIterator<Item = &'a str>) -> String {
    let max = ids
        .into_iter()
        .filter_map(|id| id.strip_prefix(prefix))
        .filter_map(|suffix| suffix.parse::<u32>().ok())
        .max()
        .unwrap_or(0);
    format!("{prefix}{:03}", max + 1)
}
