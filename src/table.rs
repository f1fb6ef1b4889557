//! Fixed-width text tables for image listings.

use std::io::{self, Write};

use crate::config::QueryConfig;
use crate::image::ImageList;
use crate::provider::CloudProvider;

/// Write the header and one row per image.
///
/// The column set depends on the provider. Amazon drops the region column
/// when a region is configured, since it would be constant.
pub fn write_images<W: Write>(
    out: &mut W,
    provider: CloudProvider,
    config: &QueryConfig,
    images: &ImageList,
) -> io::Result<()> {
    match provider {
        CloudProvider::Google => {
            writeln!(out, "| {:<58} | {:<40} | {:<20} |", "Name", "Project", "State")?;
            for image in images {
                writeln!(
                    out,
                    "{:<60} | {:<40} | {:<20}",
                    image.name, image.project, image.state
                )?;
            }
        }
        CloudProvider::Amazon if config.region.is_empty() => {
            writeln!(
                out,
                "| {:<23} | {:<60} | {:<20} | {:<20} |",
                "ID", "Name", "Region", "State"
            )?;
            for image in images {
                writeln!(
                    out,
                    "{:<25} | {:<60} | {:<20} | {:<20}",
                    image.id, image.name, image.region, image.state
                )?;
            }
        }
        CloudProvider::Amazon => {
            writeln!(out, "| {:<23} | {:<60} | {:<20} |", "ID", "Name", "State")?;
            for image in images {
                writeln!(
                    out,
                    "{:<25} | {:<60} | {:<20}",
                    image.id, image.name, image.state
                )?;
            }
        }
        CloudProvider::Microsoft => {
            writeln!(out, "| {:<58} | {:<60} | {:<20}", "URN", "Name", "State")?;
            for image in images {
                writeln!(
                    out,
                    "{:<60} | {:<60} | {:<20}",
                    image.urn, image.name, image.state
                )?;
            }
        }
    }
    Ok(())
}
