//! Folio auto-increment (`CLI007` → `CLI008`).

/// Minimum width of the numeric suffix.
pub const FOLIO_DIGITS: usize = 3;

/// Parses the numeric suffix of `folio` when it carries `prefix`.
///
/// Returns `None` for foreign prefixes and for suffixes that are empty or not all digits.
#[must_use]
pub fn folio_number(prefix: &str, folio: &str) -> Option<u64> {
    let suffix = folio.trim().strip_prefix(prefix)?;
    if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    suffix.parse().ok()
}

/// Formats `number` with `prefix`, zero-padded to [`FOLIO_DIGITS`].
#[must_use]
pub fn format_folio(prefix: &str, number: u64) -> String {
    format!("{prefix}{number:0width$}", width = FOLIO_DIGITS)
}

/// Next free folio for `prefix` given the folios already in use.
///
/// Malformed or foreign folios are skipped; with no usable folio the sequence starts at `001`.
/// Past `999` the suffix simply grows (`ADM1000`).
pub fn next_folio<I>(prefix: &str, existing: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let highest = existing
        .into_iter()
        .filter_map(|folio| folio_number(prefix, folio.as_ref()))
        .max()
        .unwrap_or(0);
    format_folio(prefix, highest.saturating_add(1))
}
