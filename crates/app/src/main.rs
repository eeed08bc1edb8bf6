use std::fmt;
use std::sync::Arc;

use chrono::Duration;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use progress_core::model::{ProgressDraft, ProgressStatus, ProgressTemplate};
use services::{AppServices, Clock, ProgressApiConfig, ProgressBackend, ProgressService};
use tracing_subscriber::{EnvFilter, fmt as log_fmt};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
    InvalidApiUrl { raw: String, reason: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidApiUrl { raw, reason } => {
                write!(f, "invalid --api value {raw}: {reason}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    progress: Arc<ProgressService>,
}

impl UiApp for DesktopApp {
    fn progress_service(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }
}

struct Args {
    db_url: String,
    api: Option<ProgressApiConfig>,
}

impl Args {
    fn backend(&self) -> ProgressBackend {
        match &self.api {
            Some(config) => ProgressBackend::Api(config.clone()),
            None => ProgressBackend::Sqlite {
                db_url: self.db_url.clone(),
            },
        }
    }
}

const DEFAULT_DB_URL: &str = "sqlite://progress.sqlite3";

fn usage() -> String {
    format!(
        "Usage:
  cargo run -p app -- ui   [--db <sqlite_url>] [--api <base_url>]
  cargo run -p app -- seed [--db <sqlite_url>] [--api <base_url>]

Defaults:
  --db {DEFAULT_DB_URL}
  --api unset (records are read from SQLite)

Environment:
  PROGRESS_DB_URL, PROGRESS_API_URL, RUST_LOG"
    )
}

fn print_usage() {
    eprintln!("{}", usage());
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Seed,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "seed" => Some(Self::Seed),
            _ => None,
        }
    }
}

fn parse_api(raw: &str) -> Result<ProgressApiConfig, ArgsError> {
    ProgressApiConfig::new(raw).map_err(|err| ArgsError::InvalidApiUrl {
        raw: raw.to_string(),
        reason: err.to_string(),
    })
}

impl Args {
    fn defaults() -> Self {
        Self {
            db_url: DEFAULT_DB_URL.to_string(),
            api: None,
        }
    }

    /// Defaults overridden by `PROGRESS_DB_URL` and `PROGRESS_API_URL`.
    fn from_env() -> Result<Self, ArgsError> {
        let mut base = Self::defaults();
        if let Ok(raw) = std::env::var("PROGRESS_DB_URL") {
            if !raw.trim().is_empty() {
                base.db_url = normalize_sqlite_url(raw);
            }
        }
        base.api = ProgressApiConfig::from_env().map_err(|err| ArgsError::InvalidApiUrl {
            raw: std::env::var("PROGRESS_API_URL").unwrap_or_default(),
            reason: err.to_string(),
        })?;
        Ok(base)
    }

    /// Apply command-line flags on top of `self`.
    fn parse(mut self, args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    self.db_url = normalize_sqlite_url(value);
                }
                "--api" => {
                    let value = require_value(args, "--api")?;
                    self.api = Some(parse_api(&value)?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(self)
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Launch the UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::from_env()
        .and_then(|base| base.parse(&mut iter))
        .map_err(|e| {
            eprintln!("{e}");
            print_usage();
            e
        })?;

    if parsed.api.is_none() {
        prepare_sqlite_file(&parsed.db_url)?;
    }
    let clock = Clock::default_clock();
    let services = AppServices::new(parsed.backend(), clock).await?;

    match cmd {
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                progress: services.progress(),
            });
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Learning Progress")
                    .with_always_on_top(false),
            );

            tracing::info!("launching desktop ui");
            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Seed => {
            let added = seed(&services.progress(), clock).await?;
            tracing::info!(added, "seeded sample progress entries");
            Ok(())
        }
    }
}

async fn seed(
    progress: &ProgressService,
    clock: Clock,
) -> Result<usize, Box<dyn std::error::Error>> {
    let now = clock.now();
    let samples = [
        (
            "AWS Certified Cloud Practitioner",
            "Passed the foundational cloud exam.",
            ProgressStatus::Completed,
            ProgressTemplate::Certification,
            40,
        ),
        (
            "Personal portfolio site",
            "Rebuilding the portfolio with a static site generator.",
            ProgressStatus::InProgress,
            ProgressTemplate::CompletedProject,
            12,
        ),
        (
            "Advent of Code",
            "Paused after day 14.",
            ProgressStatus::OnHold,
            ProgressTemplate::Challenge,
            25,
        ),
        (
            "Docker & Kubernetes bootcamp",
            "Weekend hands-on labs.",
            ProgressStatus::Completed,
            ProgressTemplate::Workshop,
            5,
        ),
        (
            "Rust reading group",
            "Chapter-a-week book club.",
            ProgressStatus::from_label("Planned"),
            ProgressTemplate::from_label("Reading"),
            1,
        ),
    ];

    let mut added = 0;
    for (topic, description, status, template, days_ago) in samples {
        let draft = ProgressDraft::new(topic, status, template)
            .with_description(description)
            .with_timestamp(now - Duration::days(days_ago));
        progress.add_progress(draft).await?;
        added += 1;
    }
    Ok(added)
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    log_fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        tracing::error!(error = %err, "startup failed");
        eprintln!("{err}");
        std::process::exit(2);
    }
}
