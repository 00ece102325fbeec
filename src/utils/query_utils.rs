use url::form_urlencoded;

/// First value of `key` in a raw query string, like `URLSearchParams.get`.
/// Repeated keys never fail; later occurrences are ignored.
pub fn first_query_value(raw: Option<&str>, key: &str) -> Option<String> {
    form_urlencoded::parse(raw?.as_bytes())
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.into_owned())
}
