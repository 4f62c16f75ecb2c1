/// Demo for the umbra logger
///
/// Emits a burst of messages through a core/client logger pair so the console
/// colors and the file format picked from the extension can be inspected.
///
/// Usage:
/// cargo run --bin umbra-log-demo -- --file demo.csv --client-debug
/// cargo run --bin umbra-log-demo -- --file demo.json --throttled --repeat 20
use anyhow::{bail, Context};
use clap::Parser;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;
use umbra_log::logger::{
    init_log_bridge, FileCadence, LogContext, LogLevel, LoggerConfig, CLIENT_LOGGER_NAME,
    CORE_LOGGER_NAME, DEFAULT_LOG_DIR,
};
use umbra_log::{log_core_info, log_debug, log_error, log_info, log_trace};

#[derive(Parser, Debug)]
#[command(name = "umbra-log-demo")]
#[command(about = "Write sample log lines to the console and a log file")]
struct Args {
    /// Log file name inside the log directory (.csv, .json, anything else is plain text)
    #[arg(long)]
    file: Option<String>,

    /// Directory log files are created in
    #[arg(long, default_value = DEFAULT_LOG_DIR)]
    log_dir: PathBuf,

    /// Show TRACE and DEBUG lines from the client logger
    #[arg(long)]
    client_debug: bool,

    /// How many times to repeat the same message
    #[arg(long, default_value = "5")]
    repeat: u32,

    /// Level of the repeated message (trace, debug, info, warning, error, fatal)
    #[arg(long, default_value = "warning", value_parser = parse_level)]
    repeat_level: LogLevel,

    /// Milliseconds between repeats
    #[arg(long, default_value = "250")]
    pause_ms: u64,

    /// Only write repeats to the file once per interval
    #[arg(long)]
    throttled: bool,

    /// Disable ANSI colors on the console
    #[arg(long)]
    no_color: bool,
}

fn parse_level(value: &str) -> Result<LogLevel, String> {
    match LogLevel::from_str(value) {
        Some(LogLevel::Off) | None => Err(format!("unknown log level '{}'", value)),
        Some(level) => Ok(level),
    }
}

fn logger_config(args: &Args, name: &str, debug: bool) -> LoggerConfig {
    let cadence = if args.throttled {
        FileCadence::Throttled
    } else {
        FileCadence::EveryMessage
    };

    let mut config = LoggerConfig::new(name)
        .with_debug(debug)
        .with_log_dir(&args.log_dir)
        .with_color(!args.no_color)
        .with_cadence(cadence);
    if let Some(file) = &args.file {
        config = config.with_file(file.clone());
    }
    config
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.repeat == 0 {
        bail!("--repeat must be at least 1");
    }

    let client_config = logger_config(&args, CLIENT_LOGGER_NAME, args.client_debug);
    let client_path = client_config.file_path();
    let ctx = LogContext::from_configs(
        logger_config(&args, CORE_LOGGER_NAME, true),
        client_config,
    );

    if let Some(path) = client_path {
        if !ctx.client().lock().is_file_enabled() {
            bail!("could not open the log file {}", path.display());
        }
    }

    init_log_bridge(ctx.core().clone()).context("failed to install the log bridge")?;

    log_core_info!(ctx, "Demo starting, repeat={} pause={}ms", args.repeat, args.pause_ms);
    log_trace!(ctx, "Only visible with --client-debug");
    log_debug!(ctx, "Arguments: {:?}", args);
    log_info!(ctx, "Client ready");

    for _ in 0..args.repeat {
        ctx.client().lock().log(args.repeat_level, "Queue is backing up");
        thread::sleep(Duration::from_millis(args.pause_ms));
    }

    log_error!(ctx, "Lost connection to {}", "127.0.0.1:9000");
    log::info!("Routed through the log crate");

    {
        let client = ctx.client().lock();
        if let Some(entry) = client.cache_entry("Queue is backing up") {
            println!(
                "Repeated message: total={} pending={}",
                entry.total_count, entry.interval_count
            );
        }
        let metrics = client.cache_metrics();
        println!(
            "Message cache: hits={} misses={} evictions={} hit rate={:.0}%",
            metrics.hits,
            metrics.misses,
            metrics.evictions,
            metrics.hit_rate() * 100.0
        );
        if let Some(path) = client.output_path() {
            println!("Log file: {}", path.display());
        }
    }

    ctx.teardown();
    Ok(())
}
