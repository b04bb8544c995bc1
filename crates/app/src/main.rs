use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::config::parse_timeout;
use services::{QuestionProvider, QuizConfig, TriviaApiProvider};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const APP_NAME: &str = "Quiz App";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidTimeout { raw: String },
    InvalidApiUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidTimeout { raw } => write!(f, "invalid --timeout-secs value: {raw}"),
            ArgsError::InvalidApiUrl { raw } => write!(f, "invalid --api-url value: {raw:?}"),
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
    provider: Arc<dyn QuestionProvider>,
    confirm_reset: bool,
}

impl UiApp for DesktopApp {
    fn app_name(&self) -> &str {
        APP_NAME
    }

    fn question_provider(&self) -> Arc<dyn QuestionProvider> {
        Arc::clone(&self.provider)
    }

    fn confirm_reset(&self) -> bool {
        self.confirm_reset
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--api-url <url>] [--timeout-secs <n>] [--no-confirm-reset]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api-url {}", services::config::DEFAULT_API_URL);
    eprintln!("  --timeout-secs {}", services::config::DEFAULT_TIMEOUT_SECS);
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_API_URL, QUIZ_HTTP_TIMEOUT_SECS, QUIZ_CONFIRM_RESET, RUST_LOG");
}

/// Flags override whatever the environment configured.
fn parse_args(
    mut config: QuizConfig,
    args: &mut impl Iterator<Item = String>,
) -> Result<Option<QuizConfig>, ArgsError> {
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--api-url" => {
                let value = require_value(args, "--api-url")?;
                config = config
                    .with_api_url(value.clone())
                    .map_err(|_| ArgsError::InvalidApiUrl { raw: value })?;
            }
            "--timeout-secs" => {
                let value = require_value(args, "--timeout-secs")?;
                let timeout: Duration = parse_timeout("--timeout-secs", &value)
                    .map_err(|_| ArgsError::InvalidTimeout { raw: value.clone() })?;
                config = config.with_timeout(timeout);
            }
            "--no-confirm-reset" => config = config.with_confirm_reset(false),
            "--help" | "-h" => return Ok(None),
            _ => return Err(ArgsError::UnknownArg(arg)),
        }
    }
    Ok(Some(config))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let from_env = QuizConfig::from_env()?;
    let mut argv = std::env::args().skip(1);
    let Some(config) = parse_args(from_env, &mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?
    else {
        print_usage();
        return Ok(());
    };

    tracing::info!(
        api_url = %config.api_url,
        timeout_secs = config.timeout.as_secs(),
        confirm_reset = config.confirm_reset,
        "starting quiz"
    );

    let provider: Arc<dyn QuestionProvider> = Arc::new(TriviaApiProvider::new(&config)?);
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        provider,
        confirm_reset: config.confirm_reset,
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(APP_NAME)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
