// src/main.rs
use plugin_l10n::{store, CommandHandler, Config};
use std::path::PathBuf;
use std::process::ExitCode;

struct CliArgs {
    config: Option<PathBuf>,
    command: Vec<String>,
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut config = None;
    let mut command = Vec::new();

    while let Some(arg) = args.next() {
        if command.is_empty() && arg == "--config" {
            let path = args.next().ok_or("--config needs a path")?;
            config = Some(PathBuf::from(path));
        } else if let (true, Some(path)) = (command.is_empty(), arg.strip_prefix("--config=")) {
            config = Some(PathBuf::from(path));
        } else {
            command.push(arg);
        }
    }

    if command.is_empty() {
        command.push("help".into());
    }
    Ok(CliArgs { config, command })
}

fn init_logger(config: &Config) {
    // RUST_LOG wins over the configured level.
    let mut builder = env_logger::Builder::new();
    builder.filter_level(config.log_level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    let _ = builder.try_init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match parse_args() {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let loaded = match cli.config.as_deref() {
        Some(path) => Config::from_file(path).await,
        None => Config::load().await,
    };
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    init_logger(&config);

    if let Err(e) = config.apply(store::instance()) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }
    log::debug!(
        "Config: {}",
        config
            .config_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "defaults".into())
    );

    let handler = CommandHandler::new();
    let parts: Vec<&str> = cli.command.iter().map(String::as_str).collect();
    let result = handler.handle_args(&parts);

    if result.success {
        println!("{}", result.message);
        ExitCode::SUCCESS
    } else {
        eprintln!("{}", result.message);
        ExitCode::FAILURE
    }
}
