//! Delivery of renamed files: a single PDF, a zip archive, or loose files.

use std::fs::{self, File};
use std::io::{Seek, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use fakren_core::models::config::{Compression, OutputConfig};
use fakren_core::RenamedFile;
use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// What was written to disk.
#[derive(Debug, PartialEq, Eq)]
pub enum Delivery {
    /// Nothing to write (dry run or no successes).
    Nothing,
    /// Exactly one file, written under its composed name.
    Single(PathBuf),
    /// Several files packed into one archive.
    Archive { path: PathBuf, entries: usize },
    /// Several files written side by side.
    Loose(Vec<PathBuf>),
}

/// How outputs are placed in the target directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeliveryOptions {
    /// Write several outputs side by side instead of archiving them.
    pub loose: bool,
    /// Replace files that already exist in the target directory.
    pub overwrite: bool,
}

/// Write `outputs` into `dir`.
///
/// One file is written as-is; more than one goes into an archive unless
/// `loose` is set. Unless `overwrite` is set, nothing is written when any
/// target already exists.
pub fn deliver(
    outputs: &[RenamedFile],
    dir: &Path,
    config: &OutputConfig,
    options: DeliveryOptions,
) -> anyhow::Result<Delivery> {
    let targets: Vec<PathBuf> = match outputs {
        [] => return Ok(Delivery::Nothing),
        [_] => outputs.iter().map(|file| dir.join(&file.name)).collect(),
        _ if options.loose => outputs.iter().map(|file| dir.join(&file.name)).collect(),
        _ => vec![dir.join(&config.archive_name)],
    };

    if !options.overwrite {
        if let Some(taken) = targets.iter().find(|path| path.exists()) {
            anyhow::bail!(
                "{} already exists. Use --overwrite to replace it.",
                taken.display()
            );
        }
    }
    fs::create_dir_all(dir)?;

    match outputs {
        [single] => {
            let path = write_file(&targets[0], &single.data, options.overwrite)?;
            Ok(Delivery::Single(path))
        }
        many if options.loose => {
            let paths = many
                .iter()
                .zip(targets)
                .map(|(file, path)| write_file(&path, &file.data, options.overwrite))
                .collect::<anyhow::Result<Vec<_>>>()?;
            Ok(Delivery::Loose(paths))
        }
        many => {
            let path = targets.into_iter().next().unwrap_or_default();
            let file = open_target(&path, options.overwrite)?;
            write_archive(file, many, config.compression)?;
            debug!("Wrote {} entries to {}", many.len(), path.display());
            Ok(Delivery::Archive {
                path,
                entries: many.len(),
            })
        }
    }
}

fn open_target(path: &Path, overwrite: bool) -> anyhow::Result<File> {
    let file = if overwrite {
        File::create(path)
    } else {
        File::create_new(path)
    };
    file.with_context(|| format!("Cannot create {}", path.display()))
}

fn write_file(path: &Path, data: &[u8], overwrite: bool) -> anyhow::Result<PathBuf> {
    let mut file = open_target(path, overwrite)?;
    file.write_all(data)?;
    debug!("Wrote {}", path.display());
    Ok(path.to_path_buf())
}

/// Pack `outputs` into a zip archive; entry names are the file names, no directories.
pub fn write_archive<W: Write + Seek>(
    writer: W,
    outputs: &[RenamedFile],
    compression: Compression,
) -> anyhow::Result<W> {
    let method = match compression {
        Compression::Deflated => CompressionMethod::Deflated,
        Compression::Stored => CompressionMethod::Stored,
    };
    let opts = SimpleFileOptions::default().compression_method(method);

    let mut zip = ZipWriter::new(writer);
    for file in outputs {
        zip.start_file(file.name.as_str(), opts)?;
        zip.write_all(&file.data)?;
    }
    Ok(zip.finish()?)
}
