//! Voicecast CLI - convert text into an audio file with a cloud TTS provider

use clap::Parser;
use std::error::Error;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    Layer, filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};
use voicecast_lib::types::{ENV_OUTPUT_DIR, ENV_PROVIDER};
use voicecast_lib::{TextSource, TtsConfig, TtsError};

/// Convert text to speech with ElevenLabs or OpenAI
///
/// # Examples
///
/// ```no_run
/// // Speak literal text
/// // voicecast Hola, esta es mi voz clonada.
///
/// // Read the text from a file
/// // voicecast -f texto.txt
///
/// // Pipe text in
/// // echo "Hola mundo" | voicecast
/// ```
#[derive(Parser)]
#[command(name = "voicecast")]
#[command(about = "Convert text to an audio file using a cloud TTS provider", long_about = None)]
#[command(version)]
struct Cli {
    /// Text to convert (prompts, or reads stdin, if not provided)
    text: Vec<String>,

    /// Path to a text file to convert (takes priority over TEXT)
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Provider to use: elevenlabs or openai [env: TTS_PROVIDER]
    #[arg(short, long, value_name = "NAME")]
    provider: Option<String>,

    /// Directory audio files are written to [env: TTS_OUTPUT_DIR]
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Append-only log file
    #[arg(long, value_name = "PATH", default_value = "tts_log.txt")]
    log_file: PathBuf,

    /// Increase console verbosity (-v, -vv)
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    log_verbosity: u8,
}

/// Joins the positional words into one text.
///
/// `None` when there are no words or every word is an empty string, so
/// `voicecast ""` falls through to the prompt.
fn join_args(args: Vec<String>) -> Option<String> {
    if args.iter().all(String::is_empty) {
        None
    } else {
        Some(args.join(" "))
    }
}

fn init_tracing(verbose: u8, log_file: &Path) {
    // RUST_LOG wins; otherwise INFO mirrors the run's lifecycle on the console
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn,voicecast_lib=info,voicecast=info".to_string(),
            1 => "warn,voicecast_lib=debug,voicecast=debug".to_string(),
            _ => "debug,voicecast_lib=trace,voicecast=trace".to_string(),
        },
    };
    let console_filter =
        EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("info"));

    let console = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .compact()
        .with_filter(console_filter);

    let directory = match log_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = log_file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "tts_log.txt".to_string());
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(directory);

    // A log file we cannot open should not stop the run; console output remains
    let (file, file_error) = match appender {
        Ok(appender) => (
            Some(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(appender)
                    .with_filter(EnvFilter::new("warn,voicecast_lib=info,voicecast=info")),
            ),
            None,
        ),
        Err(error) => (None, Some(error)),
    };

    tracing_subscriber::registry().with(console).with(file).init();

    if let Some(error) = file_error {
        tracing::warn!(path = %log_file.display(), %error, "Could not open log file");
    }
}

/// Formats an error together with its chain of sources.
fn describe(error: &TtsError) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

async fn run(cli: Cli) -> Result<PathBuf, TtsError> {
    let overrides = [
        (ENV_PROVIDER, cli.provider),
        (ENV_OUTPUT_DIR, cli.output_dir.map(|dir| dir.display().to_string())),
    ];
    let config = TtsConfig::from_lookup(|key| {
        overrides
            .iter()
            .find(|(name, _)| *name == key)
            .and_then(|(_, value)| value.clone())
            .or_else(|| std::env::var(key).ok())
    })?;
    tracing::debug!(?config, "Configuration loaded");

    voicecast_lib::ensure_output_dir(&config.output_dir).await?;

    let text = TextSource::from_args(cli.file, join_args(cli.text))
        .resolve()
        .await?;

    voicecast_lib::render(&config, &text).await
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_verbosity, &cli.log_file);

    match run(cli).await {
        Ok(path) => {
            tracing::info!(path = %path.display(), "Done");
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::error!("{}", describe(&error));
            ExitCode::FAILURE
        }
    }
}
