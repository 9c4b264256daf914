//! Packaging a generated page as a `.tar.gz` archive

use crate::template::ThemeId;
use anyhow::{Context, Result};
use flate2::{Compression, write::GzEncoder};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const DOCUMENT_ENTRY: &str = "index.html";
pub const README_ENTRY: &str = "README.md";

/// Short description shipped next to the document
pub fn readme(theme: ThemeId) -> String {
    format!(
        "# Generated Website\n\n\
         Theme: {}\n\n\
         ## Usage\n\n\
         Open `{DOCUMENT_ENTRY}` in a browser. The page is a single self-contained file;\n\
         styling is loaded from the Tailwind CDN, so an internet connection is needed\n\
         for it to render as designed.\n\n\
         To publish it, upload `{DOCUMENT_ENTRY}` to any static host.\n",
        theme.display_name()
    )
}

/// Archive file name for a theme at a given time
pub fn archive_name(theme: ThemeId, unix_millis: i64) -> String {
    format!("website-{theme}-{unix_millis}.tar.gz")
}

/// Build the archive bytes; `html` is stored unmodified
pub fn build_archive(html: &str, theme: ThemeId) -> Result<Vec<u8>> {
    let encoder = GzEncoder::new(Vec::new(), Compression::default());
    let mut builder = tar::Builder::new(encoder);
    let description = readme(theme);

    for (name, contents) in [
        (DOCUMENT_ENTRY, html.as_bytes()),
        (README_ENTRY, description.as_bytes()),
    ] {
        let mut header = tar::Header::new_gnu();
        header.set_size(contents.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder
            .append_data(&mut header, name, contents)
            .with_context(|| format!("Failed to add {name} to archive"))?;
    }

    let encoder = builder.into_inner().context("Failed to finish archive")?;
    encoder.finish().context("Failed to compress archive")
}

/// Write the archive into `out_dir`, creating it if needed
pub fn write_archive(html: &str, theme: ThemeId, out_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create directory {}", out_dir.display()))?;
    let path = out_dir.join(archive_name(theme, chrono::Utc::now().timestamp_millis()));
    let bytes = build_archive(html, theme)?;
    fs::write(&path, &bytes)
        .with_context(|| format!("Failed to write archive {}", path.display()))?;
    info!(path = %path.display(), bytes = bytes.len(), "archive written");
    Ok(path)
}
