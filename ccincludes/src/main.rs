use ccincludes::commands::command_argument_builder;
use ccincludes::handlers::{
    EXIT_INTERRUPTED, handle_build, init_tracing, install_panic_hook, interrupted, print_summary,
    report_failure, settings_from_matches,
};
use ccincludes_core::UsageError;
use clap::error::ErrorKind;
use tracing::debug;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    install_panic_hook();

    let matches = command_argument_builder().get_matches();
    let settings = match settings_from_matches(&matches) {
        Ok(settings) => settings,
        // Reported like any other usage error, before touching the network
        Err(e) => {
            let kind = match e {
                UsageError::UnknownEnvironment(_) => ErrorKind::InvalidValue,
                _ => ErrorKind::ArgumentConflict,
            };
            command_argument_builder().error(kind, e.to_string()).exit()
        }
    };
    let quiet = matches.get_flag("quiet");

    init_tracing(settings.style.debug);
    debug!("Resolved settings: {:?}", settings);

    let code = tokio::select! {
        result = handle_build(&settings) => match result {
            Ok(report) => {
                if settings.style.debug && !quiet {
                    print_summary(&report);
                }
                0
            }
            Err(e) => report_failure(&e),
        },
        _ = interrupted() => {
            eprintln!("INFO ({}) Halted via interrupt.", EXIT_INTERRUPTED);
            EXIT_INTERRUPTED
        }
    };

    std::process::exit(code);
}
