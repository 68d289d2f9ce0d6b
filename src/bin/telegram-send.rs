use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};
use mailtools::settings::{BOT_TOKEN_KEY, CHAT_ID_KEY, DEFAULT_ENV_FILE};
use mailtools::{Settings, SettingsLoader, read_text, send_message};

#[derive(Parser)]
#[command(
    name = "telegram-send",
    version,
    about = "Envoie le contenu d'un fichier texte dans un chat Telegram."
)]
struct Cli {
    /// fichier texte à envoyer
    file: PathBuf,

    /// token du bot (sinon TELEGRAM_BOT_TOKEN)
    #[arg(long)]
    token: Option<String>,

    /// chat_id cible (sinon TELEGRAM_CHAT_ID)
    #[arg(long = "chat-id")]
    chat_id: Option<String>,

    /// fichier KEY=VALUE lu en complément de l'environnement
    #[arg(long = "env-file", default_value = DEFAULT_ENV_FILE)]
    env_file: PathBuf,

    /// logs plus détaillés sur stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli: Cli = mailtools::cli::parse_or_exit();
    mailtools::logging::init(cli.verbose);

    match run(cli) {
        Ok(()) => {
            println!("Message sent successfully.");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    // both flags given: nothing to look up
    let loaded = if cli.token.is_some() && cli.chat_id.is_some() {
        Settings::default()
    } else {
        SettingsLoader::new().with_env_file(&cli.env_file).load()?
    };
    let settings = loaded.with_overrides(cli.token, cli.chat_id);

    let Some(credentials) = settings.credentials() else {
        bail!(
            "token and chat_id are required (--token/--chat-id or {BOT_TOKEN_KEY}/{CHAT_ID_KEY})"
        );
    };

    if !cli.file.exists() {
        bail!("file not found: {}", cli.file.display());
    }

    let text = read_text(&cli.file).with_context(|| format!("read {}", cli.file.display()))?;
    send_message(&credentials.bot_token, &credentials.chat_id, &text)
        .context("failed to send message")?;
    Ok(())
}
