use std::collections::HashMap;
use std::fs;

use super::*;

fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

fn no_env(_: &str) -> Option<String> {
    None
}

fn write_env_file(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join(".env");
    fs::write(&path, contents).expect("write env file");
    path
}

#[test]
fn environment_is_used_without_env_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let settings = SettingsLoader::new()
        .with_env(env_of(&[(BOT_TOKEN_KEY, "ENV_TOKEN"), (CHAT_ID_KEY, "ENV_CHAT")]))
        .with_env_file(dir.path().join(".env"))
        .load()
        .expect("load");

    assert_eq!(settings.bot_token.as_deref(), Some("ENV_TOKEN"));
    assert_eq!(settings.chat_id.as_deref(), Some("ENV_CHAT"));
}

#[test]
fn env_file_is_used_without_environment() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_env_file(
        &dir,
        "TELEGRAM_BOT_TOKEN=FILE_TOKEN\nTELEGRAM_CHAT_ID=FILE_CHAT\n",
    );

    let settings = SettingsLoader::new()
        .with_env(no_env)
        .with_env_file(path)
        .load()
        .expect("load");

    assert_eq!(settings.bot_token.as_deref(), Some("FILE_TOKEN"));
    assert_eq!(settings.chat_id.as_deref(), Some("FILE_CHAT"));
}

#[test]
fn environment_wins_over_env_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_env_file(
        &dir,
        "TELEGRAM_BOT_TOKEN=FILE_TOKEN\nTELEGRAM_CHAT_ID=FILE_CHAT\n",
    );

    let settings = SettingsLoader::new()
        .with_env(env_of(&[(BOT_TOKEN_KEY, "ENV_TOKEN")]))
        .with_env_file(path)
        .load()
        .expect("load");

    assert_eq!(settings.bot_token.as_deref(), Some("ENV_TOKEN"));
    assert_eq!(settings.chat_id.as_deref(), Some("FILE_CHAT"));
}

#[test]
fn explicit_values_win_over_everything() {
    let loaded = Settings {
        bot_token: Some("ENV_TOKEN".into()),
        chat_id: Some("ENV_CHAT".into()),
    };
    let settings = loaded.with_overrides(Some("FLAG_TOKEN".into()), None);
    assert_eq!(settings.bot_token.as_deref(), Some("FLAG_TOKEN"));
    assert_eq!(settings.chat_id.as_deref(), Some("ENV_CHAT"));
}

#[test]
fn nothing_anywhere_is_not_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let settings = SettingsLoader::new()
        .with_env(no_env)
        .with_env_file(dir.path().join("missing.env"))
        .load()
        .expect("load");
    assert_eq!(settings, Settings::default());
    assert!(settings.credentials().is_none());
}

#[test]
fn unrelated_keys_are_ignored() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_env_file(&dir, "# comment\nOTHER=1\nTELEGRAM_CHAT_ID=42\n");
    let settings = SettingsLoader::new()
        .with_env(no_env)
        .with_env_file(path)
        .load()
        .expect("load");
    assert_eq!(settings.bot_token, None);
    assert_eq!(settings.chat_id.as_deref(), Some("42"));
}

#[test]
fn unparseable_env_lines_are_skipped() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_env_file(
        &dir,
        "not a valid line\nTELEGRAM_BOT_TOKEN\nTELEGRAM_CHAT_ID=42\n",
    );
    let settings = SettingsLoader::new()
        .with_env(no_env)
        .with_env_file(&path)
        .load()
        .expect("bad lines do not abort loading");
    assert_eq!(settings.bot_token, None);
    assert_eq!(settings.chat_id.as_deref(), Some("42"));
}

#[test]
fn unreadable_env_file_is_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = SettingsLoader::new()
        .with_env(no_env)
        .with_env_file(dir.path())
        .load()
        .expect_err("a directory is not a readable env file");
    let message = err.to_string();
    assert!(message.starts_with("cannot read env file"), "{message}");
    assert!(message.contains(&*dir.path().to_string_lossy()), "{message}");
    let source = std::error::Error::source(&err)
        .expect("dotenv error kept as source")
        .to_string();
    assert!(!message.contains(&source), "{message}");
}

#[test]
fn bare_dollar_names_are_expanded() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_env_file(
        &dir,
        "TELEGRAM_CHAT_ID=42\nTELEGRAM_BOT_TOKEN=123:ab$MAILTOOLS_UNSET_NAME_Q7\n",
    );
    let settings = SettingsLoader::new()
        .with_env(no_env)
        .with_env_file(path)
        .load()
        .expect("load");
    assert_eq!(settings.bot_token.as_deref(), Some("123:ab"));
}

#[test]
fn single_quoted_values_are_verbatim() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_env_file(&dir, "TELEGRAM_BOT_TOKEN='123:ab$cd'\n");
    let settings = SettingsLoader::new()
        .with_env(no_env)
        .with_env_file(path)
        .load()
        .expect("load");
    assert_eq!(settings.bot_token.as_deref(), Some("123:ab$cd"));
}

#[test]
fn credentials_require_both_non_blank_values() {
    let partial = Settings {
        bot_token: Some("T".into()),
        chat_id: Some("   ".into()),
    };
    assert!(partial.credentials().is_none());

    let full = Settings {
        bot_token: Some("T".into()),
        chat_id: Some("42".into()),
    };
    let creds = full.credentials().expect("both set");
    assert_eq!(creds.bot_token, "T");
    assert_eq!(creds.chat_id, "42");
}

#[test]
fn debug_output_hides_token() {
    let settings = Settings {
        bot_token: Some("SECRET".into()),
        chat_id: Some("42".into()),
    };
    let rendered = format!("{settings:?}");
    assert!(!rendered.contains("SECRET"), "{rendered}");
    assert!(rendered.contains("42"));
}
