mod action;
mod app_state;
mod cli;
mod view;

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use colorsync_config::ColorsyncConfig;
use colorsync_platform::{ClipboardAccess, MemoryClipboard, SystemClipboard};
use tracing_subscriber::EnvFilter;

use cli::Command;

const DEFAULT_DIRECTIVE: &str = "colorsync=info";

/// `--log-level debug` means `colorsync=debug`; a full directive is kept.
fn cli_directive(level: &str) -> String {
    if level.contains('=') {
        level.to_owned()
    } else {
        format!("colorsync={}", level.trim().to_ascii_lowercase())
    }
}

/// Logs go to stderr so they never mix with the session on stdout.
///
/// `RUST_LOG` wins, then `--log-level`, then `[logging] level`.
fn init_logging(cli_level: Option<&str>, config: &ColorsyncConfig) {
    let directive = cli_level
        .map(cli_directive)
        .unwrap_or_else(|| config.logging.level.directive().to_owned());

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&directive))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn open_clipboard() -> Arc<dyn ClipboardAccess> {
    match SystemClipboard::open() {
        Ok(clipboard) => Arc::new(clipboard),
        Err(e) => {
            tracing::warn!("System clipboard unavailable, using in-process clipboard: {e}");
            Arc::new(MemoryClipboard::new())
        }
    }
}

fn convert(config: &ColorsyncConfig, text: &str) -> ExitCode {
    match app_state::convert_text(config, text) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(msg) => {
            eprintln!("{msg}");
            ExitCode::FAILURE
        }
    }
}

async fn interactive(config: ColorsyncConfig, clipboard: Arc<dyn ClipboardAccess>) -> ExitCode {
    let mut app = app_state::ColorsyncApp::new(&config, clipboard);
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();

    tracing::info!("Entering session loop");
    match app.run(stdin, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Session error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    let args = cli::parse();

    let loaded = colorsync_config::load_config(args.config.as_deref().map(Path::new));
    let (config, load_error) = match loaded {
        Ok(config) => (config, None),
        Err(e) => (ColorsyncConfig::default(), Some(e)),
    };

    init_logging(args.log_level.as_deref(), &config);
    tracing::info!("colorsync v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    match load_error {
        Some(e) => tracing::warn!("Config load failed, using defaults: {e}"),
        None => tracing::debug!("Config loaded"),
    }

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("Failed to start tokio runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    let code = match args.command {
        Some(Command::Convert { text }) => convert(&config, &text),
        None => {
            // Opening waits for the clipboard thread; keep it off the runtime.
            let clipboard = open_clipboard();
            runtime.block_on(interactive(config, clipboard))
        }
    };

    // stdin reads run on a blocking thread that may still be parked.
    runtime.shutdown_timeout(Duration::from_millis(200));
    tracing::info!("Shutdown complete");
    code
}
