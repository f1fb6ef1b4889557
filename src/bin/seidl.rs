//! CLI binary for the seidl crate.

use std::env;
use std::io;
use std::process::ExitCode;

use seidl::cli::{self, Report};
use seidl::{ImageError, Session, BASE_URL_ENV, DEFAULT_BASE_URL};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut args = env::args_os();
    let program = args
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| "seidl".to_string());

    match run(&program, args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match cli::report(&program, &e) {
                Report::Stdout(text) => print!("{}", text),
                Report::Stderr(text) => eprint!("{}", text),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(program: &str, args: env::ArgsOs) -> Result<(), ImageError> {
    let args = cli::collect_args(args)?;
    let base_url = env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let mut session = Session::with_base_url(program, &base_url)?;
    session.run(&args, &mut io::stdout()).await
}
