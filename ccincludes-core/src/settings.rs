use crate::rewrite::site_prefix;
use crate::table::TableStyle;
use ccincludes_fetch::{Credentials, DEFAULT_TIMEOUT_SECS};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Deployment to read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Prod,
    Stage,
}

impl Target {
    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Prod => "prod",
            Target::Stage => "stage",
        }
    }

    pub fn domain(&self) -> &'static str {
        match self {
            Target::Prod => "creativecommons.org",
            Target::Stage => "stage.creativecommons.org",
        }
    }

    /// Stage sits behind HTTP Basic Auth, prod is public.
    pub fn requires_credentials(&self) -> bool {
        matches!(self, Target::Stage)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Target {
    type Err = UsageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prod" => Ok(Target::Prod),
            "stage" => Ok(Target::Stage),
            other => Err(UsageError::UnknownEnvironment(other.to_string())),
        }
    }
}

/// Invalid combination of command line options, reported before any I/O.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    #[error("unknown environment '{0}' (expected prod or stage)")]
    UnknownEnvironment(String),

    #[error(
        "the 'prod' environment does not use HTTP Basic Auth: do not use the --username and --password options"
    )]
    CredentialsForbidden,

    #[error("the 'stage' environment requires both the --username and --password options for HTTP Basic Auth")]
    CredentialsRequired,
}

/// Pair username and password against what `target` allows.
///
/// Empty values count as absent. Prod rejects either half; stage needs both.
pub fn resolve_credentials(
    target: Target,
    username: Option<&str>,
    password: Option<&str>,
) -> Result<Option<Credentials>, UsageError> {
    let username = username.filter(|u| !u.is_empty());
    let password = password.filter(|p| !p.is_empty());

    if target.requires_credentials() {
        Credentials::from_parts(username, password)
            .map(Some)
            .ok_or(UsageError::CredentialsRequired)
    } else if username.is_some() || password.is_some() {
        Err(UsageError::CredentialsForbidden)
    } else {
        Ok(None)
    }
}

/// Everything one build run needs, resolved up front.
#[derive(Debug, Clone)]
pub struct Settings {
    pub target: Target,
    /// Domain whose `https://` prefix is stripped for the path variant
    pub domain: String,
    /// Where requests go; `https://{domain}` unless overridden
    pub origin: String,
    pub credentials: Option<Credentials>,
    pub timeout: Duration,
    pub templates_dir: PathBuf,
    pub output_root: PathBuf,
    pub style: TableStyle,
}

impl Settings {
    pub fn new(target: Target, credentials: Option<Credentials>) -> Self {
        let domain = target.domain().to_string();
        Self {
            target,
            origin: site_prefix(&domain),
            domain,
            credentials,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            templates_dir: PathBuf::from("templates"),
            output_root: PathBuf::from("."),
            style: TableStyle::quiet(),
        }
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_templates_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.templates_dir = dir.into();
        self
    }

    pub fn with_output_root(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_root = dir.into();
        self
    }

    pub fn with_style(mut self, style: TableStyle) -> Self {
        self.style = style;
        self
    }
}
