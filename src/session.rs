//! Executes interpreted arguments against the image service.

use std::io::Write;

use tracing::debug;

use crate::catalog::ImageCatalog;
use crate::cli::{self, Token};
use crate::client::ImageClient;
use crate::config::QueryConfig;
use crate::error::ImageError;
use crate::provider::CloudProvider;
use crate::table;

/// One command-line invocation.
///
/// Holds the configuration accumulated so far; each provider token runs a
/// query with it and writes a table to the output.
#[derive(Debug)]
pub struct Session {
    program: String,
    client: ImageClient,
    config: QueryConfig,
}

impl Session {
    /// Create a session against the public image service.
    pub fn new(program: &str) -> Result<Self, ImageError> {
        Ok(Self::with_client(program, ImageClient::with_default_base_url()?))
    }

    /// Create a session against a custom base URL.
    pub fn with_base_url(program: &str, base_url: &str) -> Result<Self, ImageError> {
        Ok(Self::with_client(program, ImageClient::new(base_url)?))
    }

    pub fn with_client(program: &str, client: ImageClient) -> Self {
        Self {
            program: program.to_string(),
            client,
            config: QueryConfig::default(),
        }
    }

    /// Configuration accumulated so far.
    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    /// Validate and execute `args`, writing results to `out`.
    ///
    /// Nothing is fetched if the arguments are empty or a flag is dangling.
    /// Otherwise tokens execute in order and the first error aborts the run;
    /// output already written for earlier providers stays.
    pub async fn run<W: Write>(&mut self, args: &[String], out: &mut W) -> Result<(), ImageError> {
        if args.is_empty() {
            return Err(ImageError::NoArguments);
        }
        if let Some(flag) = cli::find_dangling(args) {
            return Err(ImageError::DanglingArgument(flag.to_string()));
        }

        for token in cli::tokens(args) {
            match token? {
                Token::Help => {
                    write!(out, "{}", cli::usage(&self.program))?;
                    return Ok(());
                }
                Token::Version => {
                    writeln!(out, "{}", cli::version())?;
                    return Ok(());
                }
                Token::ListEnvironments => {
                    let catalog = self.catalog(CloudProvider::Microsoft);
                    for env in catalog.environments()? {
                        writeln!(out, "{}", env.name)?;
                    }
                }
                Token::ListRegions => {
                    let catalog = self.catalog(CloudProvider::Amazon);
                    for region in catalog.regions().await? {
                        writeln!(out, "{}", region.name)?;
                    }
                }
                Token::Filter(filter) => self.config.filter = filter,
                Token::Region(region) => self.config.region = region,
                Token::Environment(environment) => {
                    debug!(%environment, "azure environment set");
                    self.config.environment = environment;
                }
                Token::Provider(provider) => {
                    let images = self.catalog(provider).query(&self.config).await?;
                    table::write_images(out, provider, &self.config, &images)?;
                }
            }
        }
        Ok(())
    }

    fn catalog(&self, provider: CloudProvider) -> ImageCatalog {
        ImageCatalog::new(provider, self.client.clone())
    }
}
