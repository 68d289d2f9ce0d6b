/// Domain part of `email`: the text after the last `@`, lower-cased.
///
/// Returns `None` when there is no `@` or nothing follows it. No other
/// syntax check is done.
pub fn extract_domain(email: &str) -> Option<String> {
    let (_, domain) = email.rsplit_once('@')?;
    if domain.is_empty() {
        return None;
    }
    Some(domain.to_lowercase())
}
