/// Drops any non-ASCII bytes (in practice, a UTF-8 BOM) from the front of
/// the first line of a spreadsheet export.
pub fn trim_bom(s: &str) -> &str {
    s.trim_start_matches(|c: char| !c.is_ascii())
}

/// Strips at most one leading and one trailing double quote.
///
/// This is the whole extent of the quote handling: a comma inside a quoted
/// field still splits the record.
pub fn strip_quotes(s: &str) -> &str {
    let s = s.strip_prefix('"').unwrap_or(s);
    s.strip_suffix('"').unwrap_or(s)
}
