use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use roadmap_core::model::{DEFAULT_CHAT_BASE_URL, DEFAULT_CHAT_MODEL, Roadmap};
use services::{AppServices, ChatConfig, ChatRelay, Clock, SessionManager};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use ui::{App, DesktopLinkOpener, LinkOpenerRef, UiApp, build_app_context};

const DB_URL_ENV: &str = "CYBERSHIELD_DB_URL";
const DEFAULT_DB_URL: &str = "sqlite://cybershield.sqlite3";
const DEFAULT_LOG_FILTER: &str = "app=info,services=info,storage=info,ui=info";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
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
    services: AppServices,
    links: LinkOpenerRef,
}

impl UiApp for DesktopApp {
    fn roadmap(&self) -> Arc<Roadmap> {
        self.services.roadmap()
    }

    fn session(&self) -> Arc<SessionManager> {
        self.services.session()
    }

    fn chat(&self) -> Arc<ChatRelay> {
        self.services.chat()
    }

    fn link_opener(&self) -> LinkOpenerRef {
        Arc::clone(&self.links)
    }
}

struct Args {
    db_url: String,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [ui] [--db <sqlite_url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db {DEFAULT_DB_URL}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {DB_URL_ENV}");
    eprintln!(
        "  {} ({} as fallback)",
        services::API_KEY_ENV,
        services::FALLBACK_API_KEY_ENV
    );
    eprintln!("  {} (default: {DEFAULT_CHAT_MODEL})", services::MODEL_ENV);
    eprintln!("  {} (default: {DEFAULT_CHAT_BASE_URL})", services::BASE_URL_ENV);
    eprintln!("  RUST_LOG (default: {DEFAULT_LOG_FILTER})");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut db_url = std::env::var(DB_URL_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| DEFAULT_DB_URL.into(), normalize_sqlite_url);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { db_url })
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

/// Create the directory holding the database file; the store creates the file.
fn prepare_sqlite_dir(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .map(|rest| rest.split('?').next().unwrap_or(rest))
        .filter(|path| !path.is_empty())
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;

    if let Some(parent) = std::path::Path::new(path).parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

fn parse_args() -> Result<Args, Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    match argv.first().map(String::as_str) {
        None => {}
        Some("--help" | "-h") => {
            print_usage();
            std::process::exit(0);
        }
        Some("ui") => {
            argv.remove(0);
        }
        Some(first) if first.starts_with("--") => {}
        Some(first) => {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            return Err(
                std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand").into(),
            );
        }
    }

    let mut iter = argv.into_iter();
    Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e.into()
    })
}

async fn build_services(args: &Args) -> Result<AppServices, Box<dyn std::error::Error>> {
    let chat = ChatConfig::from_env()?;
    if let Some(config) = &chat {
        info!(model = config.model(), "mentor chat configured");
    }

    prepare_sqlite_dir(&args.db_url)?;
    let services = AppServices::new_sqlite(&args.db_url, Clock::system(), chat).await?;
    info!(db = %args.db_url, "storage ready");
    if !services.chat().enabled() {
        warn!("mentor chat disabled: no API key in the environment");
    }
    Ok(services)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = parse_args()?;

    // Storage setup runs on our own runtime; the desktop launcher starts its own,
    // so it must be called outside `block_on`. The runtime stays alive for the
    // pool's background tasks.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let services = runtime.block_on(build_services(&args))?;

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        services,
        links: Arc::new(DesktopLinkOpener),
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    // Explicitly disable it so the app doesn't behave like a modal window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("CyberShield Roadmap")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);

    drop(runtime);
    Ok(())
}

fn main() {
    // A missing .env file is fine; real environment variables still apply.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
