use tracing::warn;
use trust_dns_resolver::{
    Resolver,
    config::{ResolverConfig, ResolverOpts},
    error::{ResolveError, ResolveErrorKind},
    proto::{error::ProtoErrorKind, op::ResponseCode},
};

use super::error::ResolverInitError;
use super::resolver::normalize_exchange;
use super::{LookupFailure, LookupMx, MxRecord};

/// Build the resolver shared by a whole validation run.
///
/// Uses the system configuration and falls back to the library's default
/// upstreams when it cannot be read.
pub fn build_resolver() -> Result<Resolver, ResolverInitError> {
    match Resolver::from_system_conf() {
        Ok(resolver) => Ok(resolver),
        Err(err) => {
            warn!(error = %err, "system resolver configuration unavailable, using defaults");
            Resolver::new(ResolverConfig::default(), ResolverOpts::default())
                .map_err(ResolverInitError::init)
        }
    }
}

impl LookupMx for Resolver {
    fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, LookupFailure> {
        let lookup = Resolver::mx_lookup(self, domain).map_err(|err| classify_error(&err))?;
        let mut records = Vec::new();
        for mx in lookup.iter() {
            let exchange = normalize_exchange(&mx.exchange().to_utf8());
            records.push(MxRecord::new(mx.preference(), exchange));
        }
        Ok(records)
    }
}

pub(crate) fn classify_error(err: &ResolveError) -> LookupFailure {
    match err.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. } => {
            if *response_code == ResponseCode::NXDomain {
                LookupFailure::NxDomain
            } else {
                LookupFailure::NoAnswer
            }
        }
        ResolveErrorKind::NoConnections => LookupFailure::NoNameservers,
        ResolveErrorKind::Timeout => LookupFailure::Timeout,
        ResolveErrorKind::Proto(proto) if matches!(proto.kind(), ProtoErrorKind::Timeout) => {
            LookupFailure::Timeout
        }
        _ => LookupFailure::Unclassified(err.to_string()),
    }
}
