use anyhow::Result;
use ccincludes_core::{
    BuildError, BuildReport, Settings, TableStyle, Target, UsageError, resolve_credentials,
};
use clap::ArgMatches;
use colored::Colorize;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, fmt};
use url::Url;

pub const EXIT_INTERRUPTED: i32 = 130;

/// Turn parsed arguments into run settings, enforcing the credential pairing rules.
pub fn settings_from_matches(matches: &ArgMatches) -> Result<Settings, UsageError> {
    let target: Target = matches
        .get_one::<String>("ENV")
        .map(String::as_str)
        .unwrap_or_default()
        .parse()?;

    let username = matches.get_one::<String>("username").map(String::as_str);
    let password = matches.get_one::<String>("password").map(String::as_str);
    let credentials = resolve_credentials(target, username, password)?;

    let debug = matches.get_flag("debug");
    let color = !matches.get_flag("no-color");
    let style = if debug { TableStyle::debug(color) } else { TableStyle::quiet() };

    let timeout = *matches.get_one::<u64>("timeout").unwrap_or(&3);
    let templates = matches
        .get_one::<String>("templates")
        .map(|p| expand_path(p))
        .unwrap_or_else(|| PathBuf::from("templates"));
    let output = matches
        .get_one::<String>("output")
        .map(|p| expand_path(p))
        .unwrap_or_else(|| PathBuf::from("."));

    let mut settings = Settings::new(target, credentials)
        .with_timeout(Duration::from_secs(timeout))
        .with_templates_dir(templates)
        .with_output_root(output)
        .with_style(style);

    if let Some(origin) = matches.get_one::<Url>("origin") {
        settings = settings.with_origin(origin.as_str().trim_end_matches('/'));
    }

    Ok(settings)
}

fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

/// Log to stderr. `RUST_LOG` wins; otherwise only warnings unless debugging.
pub fn init_tracing(debug: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if debug {
            EnvFilter::new("warn,ccincludes=debug,ccincludes_core=debug,ccincludes_fetch=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

pub async fn handle_build(settings: &Settings) -> Result<BuildReport> {
    if settings.style.debug {
        println!(
            "{} Building includes for {} from {}",
            "→".blue(),
            settings.target.as_str().bright_white().bold(),
            settings.origin.bright_white()
        );
    }
    let report = ccincludes_core::run(settings).await?;
    Ok(report)
}

pub fn print_summary(report: &BuildReport) {
    println!(
        "{} {} fragments written ({} files, {} appends)",
        "✓".green().bold(),
        report.fragment_count().to_string().cyan(),
        report.written.len(),
        report.appended.len()
    );
}

/// Single-line message and exit code for a failed run.
pub fn describe_failure(err: &anyhow::Error) -> (i32, String) {
    match err.downcast_ref::<BuildError>() {
        Some(build) => {
            let code = build.exit_code();
            (code, format!("CRITICAL ({}) {}", code, build))
        }
        None => (1, format!("ERROR (1) Unhandled exception:\n{:?}", err)),
    }
}

pub fn report_failure(err: &anyhow::Error) -> i32 {
    let (code, message) = describe_failure(err);
    eprintln!("{}", message);
    code
}

/// Anything that panics is unanticipated: report it and exit 1 rather than 101.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("ERROR (1) Unhandled exception:");
        eprintln!("{}", info);
        eprintln!("{}", std::backtrace::Backtrace::force_capture());
        std::process::exit(1);
    }));
}

/// Resolves once the user interrupts the process. Never resolves if no handler can be installed.
pub async fn interrupted() {
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}
