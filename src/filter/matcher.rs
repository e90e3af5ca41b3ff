use super::entry::FilterEntry;
use super::mode::FilterMode;

/// Case-insensitive four-way dispatch on the filter mode.
///
/// No empty-input guarding happens here: an empty search value matches
/// every candidate under `Contains`/`StartsWith`/`EndsWith` and only the
/// empty candidate under `Equals`.
pub(super) fn matches(filter: &FilterEntry, value: &str) -> bool {
    let value = value.to_lowercase();
    let search = filter.search_value().to_lowercase();
    match filter.mode() {
        FilterMode::Contains => value.contains(&search),
        FilterMode::Equals => value == search,
        FilterMode::StartsWith => value.starts_with(&search),
        FilterMode::EndsWith => value.ends_with(&search),
    }
}

/// Keeps the values accepted by `filter`.
pub fn apply_filter<I, S>(values: I, filter: &FilterEntry) -> Vec<S>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .filter(|value| filter.matches(value.as_ref()))
        .collect()
}
