//! Bot token and chat id, gathered from explicit values, the process
//! environment and an optional `.env` file, in that order of precedence.

mod error;

pub use error::SettingsError;

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

pub const BOT_TOKEN_KEY: &str = "TELEGRAM_BOT_TOKEN";
pub const CHAT_ID_KEY: &str = "TELEGRAM_CHAT_ID";
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Both fields may be unset; callers decide whether that is fatal.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub bot_token: Option<String>,
    pub chat_id: Option<String>,
}

impl Settings {
    /// Process environment, then `./.env`.
    pub fn load() -> Result<Self, SettingsError> {
        SettingsLoader::new().load()
    }

    /// Explicit values win over whatever was loaded.
    pub fn with_overrides(self, bot_token: Option<String>, chat_id: Option<String>) -> Self {
        Self {
            bot_token: bot_token.or(self.bot_token),
            chat_id: chat_id.or(self.chat_id),
        }
    }

    /// `Some` only when both values are present and not blank.
    pub fn credentials(&self) -> Option<Credentials> {
        let bot_token = non_blank(self.bot_token.as_deref())?;
        let chat_id = non_blank(self.chat_id.as_deref())?;
        Some(Credentials {
            bot_token: bot_token.to_string(),
            chat_id: chat_id.to_string(),
        })
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("bot_token", &self.bot_token.as_ref().map(|_| "<redacted>"))
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub bot_token: String,
    pub chat_id: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("bot_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

type EnvLookup = fn(&str) -> Option<String>;

fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Builds [`Settings`] from an environment lookup and an env file.
///
/// The environment source is injectable so tests never touch the real
/// process environment.
pub struct SettingsLoader<E = EnvLookup> {
    env: E,
    env_file: PathBuf,
}

impl SettingsLoader {
    pub fn new() -> Self {
        Self {
            env: process_env,
            env_file: PathBuf::from(DEFAULT_ENV_FILE),
        }
    }
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> SettingsLoader<E>
where
    E: Fn(&str) -> Option<String>,
{
    pub fn with_env<F>(self, env: F) -> SettingsLoader<F>
    where
        F: Fn(&str) -> Option<String>,
    {
        SettingsLoader {
            env,
            env_file: self.env_file,
        }
    }

    pub fn with_env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = path.into();
        self
    }

    pub fn env_file(&self) -> &Path {
        &self.env_file
    }

    pub fn load(&self) -> Result<Settings, SettingsError> {
        let file = read_env_file(&self.env_file)?;
        let lookup = |key: &str| (self.env)(key).or_else(|| file.get(key).cloned());
        Ok(Settings {
            bot_token: lookup(BOT_TOKEN_KEY),
            chat_id: lookup(CHAT_ID_KEY),
        })
    }
}

/// Parse `KEY=VALUE` lines without exporting them. A missing file yields an
/// empty map; lines that do not parse are skipped.
///
/// Values follow `dotenv` quoting: `$NAME` and `${NAME}` are expanded in bare
/// and double-quoted values, single-quoted values are kept verbatim.
fn read_env_file(path: &Path) -> Result<HashMap<String, String>, SettingsError> {
    let iter = match dotenv::from_path_iter(path) {
        Ok(iter) => iter,
        Err(err) if err.not_found() => {
            debug!(path = %path.display(), "no env file");
            return Ok(HashMap::new());
        }
        Err(err) => return Err(SettingsError::env_file(path, err)),
    };

    let mut values = HashMap::new();
    for item in iter {
        let (key, value) = match item {
            Ok(pair) => pair,
            Err(dotenv::Error::LineParse(line, index)) => {
                warn!(
                    path = %path.display(),
                    line = %line,
                    index,
                    "skipping unparseable env file line"
                );
                continue;
            }
            Err(err) => return Err(SettingsError::env_file(path, err)),
        };
        if key == BOT_TOKEN_KEY || key == CHAT_ID_KEY {
            values.insert(key, value);
        }
    }
    debug!(path = %path.display(), keys = values.len(), "env file loaded");
    Ok(values)
}

#[cfg(test)]
mod tests;
