use clap::{arg, value_parser};
use url::Url;

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);

pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("ccincludes")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("ccincludes")
        .styles(CLAP_STYLING)
        .about(
            "Build creativecommons.org primary site includes (scripts, styles, navigation \
            header, and navigation footer) based on WordPress REST API",
        )
        .arg(
            arg!(<ENV>)
                .help("specify which environment to fetch from")
                .value_parser(["prod", "stage"]),
        )
        .arg(
            arg!(-d --"debug")
                .help("debug mode: print transformed data tables and every write/append action")
                .required(false),
        )
        .arg(
            arg!(-u --"username" <USERNAME>)
                .required(false)
                .env("FETCH_USERNAME")
                .help("HTTP Basic Auth username (required with 'stage' environment)"),
        )
        .arg(
            arg!(-p --"password" <PASSWORD>)
                .required(false)
                .env("FETCH_PASSWORD")
                .hide_env_values(true)
                .help("HTTP Basic Auth password (required with 'stage' environment)"),
        )
        .arg(
            arg!(-t --"timeout" <SECONDS>)
                .required(false)
                .help("Request timeout in seconds")
                .value_parser(value_parser!(u64).range(1..))
                .default_value("3"),
        )
        .arg(
            arg!(--"templates" <PATH>)
                .required(false)
                .help("Directory holding the include templates")
                .default_value("templates"),
        )
        .arg(
            arg!(-o --"output" <PATH>)
                .required(false)
                .help("Directory under which includes_full/ and includes_path/ are written")
                .default_value("."),
        )
        .arg(
            arg!(--"no-color")
                .required(false)
                .help("Do not highlight stripped URL prefixes in debug tables"),
        )
        .arg(arg!(-q --"quiet" "Suppress the completion summary").required(false))
        .arg(
            arg!(--"origin" <URL>)
                .required(false)
                .hide(true)
                .help("Send requests here instead of https://{domain}")
                .value_parser(value_parser!(Url)),
        )
}
