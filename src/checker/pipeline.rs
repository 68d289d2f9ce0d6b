use super::{DomainStatus, LookupMx, Verdict, check_domain, extract_domain};

/// Validates addresses one by one against a single shared resolver.
pub struct Validator<'r, R: ?Sized> {
    resolver: &'r R,
}

impl<'r, R> Validator<'r, R>
where
    R: LookupMx + ?Sized,
{
    pub fn new(resolver: &'r R) -> Self {
        Self { resolver }
    }

    /// Addresses without a usable domain are reported `NO_DOMAIN` without
    /// touching the resolver.
    pub fn validate(&self, email: impl Into<String>) -> Verdict {
        let email = email.into();
        let status = match extract_domain(&email) {
            Some(domain) => check_domain(&domain, self.resolver),
            None => DomainStatus::NoDomain,
        };
        Verdict::new(email, status)
    }
}

/// One [`Verdict`] per input address, in input order. Lazy: each lookup
/// happens when the next item is pulled.
pub fn validate_emails<I, R>(emails: I, resolver: &R) -> impl Iterator<Item = Verdict>
where
    I: IntoIterator,
    I::Item: Into<String>,
    R: LookupMx + ?Sized,
{
    let validator = Validator::new(resolver);
    emails.into_iter().map(move |email| validator.validate(email))
}
