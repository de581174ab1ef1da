//! Writing rendered files to disk

use crate::render::RenderedFile;
use anyhow::{Context, Result};
use std::future::Future;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Persists rendered files
pub trait FileWriter {
    fn exists(&self, path: &Path) -> bool;

    /// Write `contents` to `path`, creating intermediate directories
    fn write(&self, path: &Path, contents: &str) -> impl Future<Output = Result<()>>;
}

/// Writes to the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsWriter;

impl FileWriter for FsWriter {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    async fn write(&self, path: &Path, contents: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(path, contents)
            .await
            .with_context(|| format!("Failed to write file: {}", path.display()))
    }
}

/// Destination files under `target_dir` that already exist
pub fn existing_files<W: FileWriter>(
    writer: &W,
    target_dir: &Path,
    files: &[RenderedFile],
) -> Vec<PathBuf> {
    files
        .iter()
        .map(|file| target_dir.join(&file.path))
        .filter(|path| writer.exists(path))
        .collect()
}

/// Write every file below `target_dir`. The first failure is returned as-is.
pub async fn write_files<W: FileWriter>(
    writer: &W,
    target_dir: &Path,
    files: &[RenderedFile],
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    for file in files {
        let target_path = target_dir.join(&file.path);
        writer.write(&target_path, &file.contents).await?;
        written.push(target_path);
    }

    Ok(written)
}
