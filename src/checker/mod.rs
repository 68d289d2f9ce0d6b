//! Bulk MX check of e-mail domains.
//!
//! [`read_emails`] yields candidate addresses, [`extract_domain`] isolates
//! the domain, [`check_domain`] runs one MX lookup through a [`LookupMx`]
//! implementation and [`validate_emails`] ties them together.

#[cfg(feature = "with-mx")]
mod dns;
mod domain;
mod error;
mod pipeline;
mod resolver;
mod source;
mod types;

#[cfg(feature = "with-mx")]
pub use dns::build_resolver;
pub use domain::extract_domain;
pub use error::ResolverInitError;
pub use pipeline::{Validator, validate_emails};
pub use resolver::{LookupMx, check_domain, lookup_outcome};
pub use source::{EmailLines, read_emails};
pub use types::{
    DomainStatus, LookupFailure, MxOutcome, MxRecord, STATUS_BAD_MX, STATUS_NO_DOMAIN,
    STATUS_VALID, Verdict,
};
