use tracing::debug;

use super::{DomainStatus, LookupFailure, MxOutcome, MxRecord};

/// Anything able to answer an MX query for a domain.
pub trait LookupMx {
    fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, LookupFailure>;
}

/// Run exactly one MX lookup for `domain` and classify it.
pub fn check_domain<R>(domain: &str, resolver: &R) -> DomainStatus
where
    R: LookupMx + ?Sized,
{
    lookup_outcome(domain, resolver).status()
}

/// Same as [`check_domain`] but keeps the unclassified detail around.
pub fn lookup_outcome<R>(domain: &str, resolver: &R) -> MxOutcome
where
    R: LookupMx + ?Sized,
{
    let outcome = MxOutcome::from_lookup(resolver.lookup_mx(domain));
    match &outcome {
        MxOutcome::Failed(failure) => debug!(domain, %failure, "MX lookup failed"),
        MxOutcome::Empty => debug!(domain, "MX lookup returned no records"),
        MxOutcome::Found(count) => debug!(domain, count, "MX records found"),
    }
    outcome
}

#[cfg_attr(not(feature = "with-mx"), allow(dead_code))]
pub(crate) fn normalize_exchange(exchange: &str) -> String {
    exchange.trim_end_matches('.').to_ascii_lowercase()
}
