//! Query SUSE public cloud image information for GCE, AWS, and Azure.
//!
//! This crate fetches the image lists published by the public cloud info
//! service, drops deprecated images, filters the rest by name and region,
//! and renders them as fixed-width tables.
//!
//! # Example
//!
//! ```ignore
//! use seidl::{CloudProvider, ImageCatalog, ImageError, QueryConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ImageError> {
//!     let catalog = ImageCatalog::for_provider(CloudProvider::Amazon)?;
//!     let config = QueryConfig::default()
//!         .with_filter("sles,15-sp5")
//!         .with_region("eu-central-1");
//!
//!     let images = catalog.query(&config).await?;
//!     seidl::table::write_images(&mut std::io::stdout(), catalog.provider(), &config, &images)?;
//!     Ok(())
//! }
//! ```
//!
//! # Provider-Specific Behavior
//!
//! | Provider | Aliases | Extra filtering | Columns |
//! |----------|---------|-----------------|---------|
//! | Google | `g gce gcp google` | - | Name, Project, State |
//! | Amazon | `a aws ec2 amazon` | Region | ID, Name, (Region), State |
//! | Microsoft | `m az azure microsoft` | `suse-` name prefix | URN, Name, State |

pub mod cli;
mod catalog;
mod client;
mod config;
mod error;
mod filter;
mod image;
mod provider;
mod providers;
mod session;
pub mod table;

pub use catalog::ImageCatalog;
pub use client::{ImageClient, DEFAULT_BASE_URL};
pub use config::{QueryConfig, BASE_URL_ENV};
pub use error::ImageError;
pub use filter::NameFilter;
pub use image::{Environment, Image, ImageList, Region, RegionList};
pub use provider::CloudProvider;
pub use session::Session;
