use std::fmt;

use serde::{Deserialize, Serialize};

pub const STATUS_VALID: &str = "VALID";
pub const STATUS_NO_DOMAIN: &str = "NO_DOMAIN";
pub const STATUS_BAD_MX: &str = "BAD_MX";

/// Per-address result of the domain check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DomainStatus {
    #[serde(rename = "VALID")]
    Valid,
    #[serde(rename = "NO_DOMAIN")]
    NoDomain,
    #[serde(rename = "BAD_MX")]
    BadMx,
}

impl DomainStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Valid => STATUS_VALID,
            Self::NoDomain => STATUS_NO_DOMAIN,
            Self::BadMx => STATUS_BAD_MX,
        }
    }
}

impl fmt::Display for DomainStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub email: String,
    pub status: DomainStatus,
}

impl Verdict {
    pub fn new(email: impl Into<String>, status: DomainStatus) -> Self {
        Self {
            email: email.into(),
            status,
        }
    }

    /// `<email>\t<STATUS>`
    pub fn to_tsv(&self) -> String {
        format!("{}\t{}", self.email, self.status)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MxRecord {
    pub preference: u16,
    pub exchange: String,
}

impl MxRecord {
    pub fn new(preference: u16, exchange: impl Into<String>) -> Self {
        Self {
            preference,
            exchange: exchange.into(),
        }
    }
}

/// Why an MX lookup produced no answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupFailure {
    /// NXDOMAIN: the name does not exist.
    NxDomain,
    /// The name exists but carries no MX record.
    NoAnswer,
    /// No nameserver could be reached.
    NoNameservers,
    Timeout,
    /// Any resolver error outside the kinds above.
    Unclassified(String),
}

impl fmt::Display for LookupFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NxDomain => f.write_str("domain does not exist"),
            Self::NoAnswer => f.write_str("no MX answer"),
            Self::NoNameservers => f.write_str("no nameservers available"),
            Self::Timeout => f.write_str("lookup timed out"),
            Self::Unclassified(detail) => write!(f, "resolver error: {detail}"),
        }
    }
}

/// Observed result of a single MX lookup, before it is collapsed into a
/// [`DomainStatus`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MxOutcome {
    Found(usize),
    Empty,
    Failed(LookupFailure),
}

impl MxOutcome {
    pub fn from_lookup(result: Result<Vec<MxRecord>, LookupFailure>) -> Self {
        match result {
            Ok(records) if records.is_empty() => Self::Empty,
            Ok(records) => Self::Found(records.len()),
            Err(failure) => Self::Failed(failure),
        }
    }

    pub fn status(&self) -> DomainStatus {
        match self {
            Self::Failed(LookupFailure::NxDomain) => DomainStatus::NoDomain,
            Self::Failed(
                LookupFailure::NoAnswer | LookupFailure::NoNameservers | LookupFailure::Timeout,
            ) => DomainStatus::BadMx,
            Self::Failed(LookupFailure::Unclassified(_)) => DomainStatus::BadMx,
            Self::Empty => DomainStatus::BadMx,
            Self::Found(_) => DomainStatus::Valid,
        }
    }
}
