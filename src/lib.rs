#![forbid(unsafe_code)]
//! mailtools — bulk MX check of e-mail domains, file-to-Telegram notifier

pub mod checker;
pub use checker::{
    DomainStatus, EmailLines, LookupFailure, LookupMx, MxOutcome, MxRecord, ResolverInitError,
    STATUS_BAD_MX, STATUS_NO_DOMAIN, STATUS_VALID, Validator, Verdict, check_domain,
    extract_domain, lookup_outcome, read_emails, validate_emails,
};
#[cfg(feature = "with-mx")]
pub use checker::build_resolver;

pub mod settings;
pub use settings::{Credentials, Settings, SettingsError, SettingsLoader};

pub mod telegram;
#[cfg(feature = "with-telegram")]
pub use telegram::send_message;
pub use telegram::{SendError, TELEGRAM_MAX_LENGTH, read_text, send_message_with};

pub mod cli;
pub mod logging;
