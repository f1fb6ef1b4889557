//! Sequential command-line interpretation.
//!
//! Arguments are processed left to right and a query runs as soon as a
//! provider token is seen, so flags only affect providers that follow them:
//!
//! ```text
//! seidl -f 'sles,15-sp2' gce     # filter applies to gce
//! seidl gce -f 'sles,15-sp2'     # rejected: -f is dangling
//! ```
//!
//! [`find_dangling`] checks the whole list up front; [`tokens`] then yields
//! one [`Token`] at a time for the executor.

use std::ffi::OsString;

use crate::error::ImageError;
use crate::provider::CloudProvider;

const FILTER_FLAGS: &[&str] = &["-f", "--filter"];
const REGION_FLAGS: &[&str] = &["-r", "--region"];
const ENVIRONMENT_FLAG: &str = "--az-env";

/// One interpreted command-line element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Help,
    Version,
    ListEnvironments,
    ListRegions,
    Filter(String),
    Region(String),
    Environment(String),
    Provider(CloudProvider),
}

/// Flags that configure the following provider queries.
fn is_anchored_flag(arg: &str) -> bool {
    FILTER_FLAGS.contains(&arg) || REGION_FLAGS.contains(&arg)
}

/// Find a filter or region flag with no provider token after it.
///
/// Flag values are skipped, so `-f gce` alone is still dangling. The value of
/// `--az-env` is skipped as well but the flag itself never dangles.
pub fn find_dangling(args: &[String]) -> Option<&str> {
    let mut pending = None;
    let mut args = args.iter();
    while let Some(arg) = args.next() {
        if arg.is_empty() {
            continue;
        }
        if is_anchored_flag(arg) {
            pending = Some(arg.as_str());
            args.next();
        } else if arg == ENVIRONMENT_FLAG {
            args.next();
        } else if CloudProvider::from_alias(arg).is_some() {
            pending = None;
        }
    }
    pending
}

/// Iterator over interpreted arguments. Stops after the first error.
#[derive(Debug)]
pub struct Tokens<'a> {
    args: std::slice::Iter<'a, String>,
    failed: bool,
}

/// Interpret `args` lazily, one token at a time.
pub fn tokens(args: &[String]) -> Tokens<'_> {
    Tokens {
        args: args.iter(),
        failed: false,
    }
}

impl Tokens<'_> {
    fn value_for(&mut self, flag: &str) -> Result<String, ImageError> {
        self.args
            .next()
            .cloned()
            .ok_or_else(|| ImageError::MissingValue(flag.to_string()))
    }

    fn interpret(&mut self, arg: &str) -> Result<Token, ImageError> {
        if !arg.starts_with('-') {
            return CloudProvider::from_alias(arg)
                .map(Token::Provider)
                .ok_or_else(|| ImageError::InvalidProvider(arg.to_string()));
        }
        match arg {
            "-h" | "--help" => Ok(Token::Help),
            "--version" => Ok(Token::Version),
            "--list-az-envs" => Ok(Token::ListEnvironments),
            "--list-aws-regions" => Ok(Token::ListRegions),
            ENVIRONMENT_FLAG => self.value_for(arg).map(Token::Environment),
            _ if FILTER_FLAGS.contains(&arg) => self.value_for(arg).map(Token::Filter),
            _ if REGION_FLAGS.contains(&arg) => self.value_for(arg).map(Token::Region),
            _ => Err(ImageError::InvalidParameter(arg.to_string())),
        }
    }
}

impl Iterator for Tokens<'_> {
    type Item = Result<Token, ImageError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let arg = self.args.by_ref().find(|arg| !arg.is_empty())?;
        let token = self.interpret(arg);
        self.failed = token.is_err();
        Some(token)
    }
}

/// Usage text for `program`.
pub fn usage(program: &str) -> String {
    format!(
        "Usage: {program} [OPTIONS] CSP...
CSP (cloud service providers)   gce|aws|azure
OPTIONS:
  -f, --filter FILTER           Filter results based on the given strings (comma-separated)
  -r, --region REGION           Set region (AWS only)
  --list-aws-regions            List AWS regions
  --az-env ENV                  Set environment (for Azure)
  --list-az-envs                List possible Azure environments
  --version                     Show program version
  -h, --help                    Show this help

Arguments are processed sequentially and a query is executed once a CSP is identified.
Consequently an argument following a CSP won't be considered in that query.
  right:  {program} -f 'sles,15-sp2' gce
  wrong:  {program} gce -f 'sles,15-sp2'
"
    )
}

/// Version line.
pub fn version() -> String {
    format!(
        "seidl v{} -- https://github.com/grisu48/seidl/",
        env!("CARGO_PKG_VERSION")
    )
}

/// Convert raw process arguments. Non UTF-8 arguments are rejected.
pub fn collect_args<I>(args: I) -> Result<Vec<String>, ImageError>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            arg.into_string()
                .map_err(|arg| ImageError::InvalidParameter(arg.to_string_lossy().into_owned()))
        })
        .collect()
}

/// What to print after a failed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Stdout(String),
    Stderr(String),
}

/// Render `error` for the user.
///
/// A bare invocation gets the usage text, empty results are printed as is,
/// and usage errors carry a pointer to `--help`.
pub fn report(program: &str, error: &ImageError) -> Report {
    match error {
        ImageError::NoArguments => Report::Stdout(usage(program)),
        ImageError::NoImages | ImageError::FilterTooRestrictive => {
            Report::Stderr(format!("{error}\n"))
        }
        _ if error.is_usage() => Report::Stderr(format!(
            "error: {error}\nRun '{program} --help' for usage information.\n"
        )),
        _ => Report::Stderr(format!("error: {error}\n")),
    }
}
