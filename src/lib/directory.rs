use std::fs;
use std::path::{Path, PathBuf};
use log::{debug, info, trace};
use crate::errors::*;
use crate::filter::{classify, destination_for, SkipReason};
use crate::{compress, verify};

/// Options controlling a [compress_directory] run
#[derive(Debug, Default, Clone, Copy)]
pub struct CompressOptions {
    /// Decompress every output after writing it and check it matches the source
    pub verify: bool,
    /// Do not print a progress line per compressed file
    pub quiet: bool,
}

/// A file that was compressed during a run
#[derive(Debug, Clone)]
pub struct Compressed {
    /// The file that was read
    pub source: PathBuf,
    /// The ".gz" file written next to it
    pub destination: PathBuf,
    /// Size of the source in bytes
    pub bytes_in: u64,
    /// Size of the compressed output in bytes
    pub bytes_out: u64,
}

/// Everything a run did, in the order the directory listing produced it
#[derive(Debug, Default)]
pub struct Report {
    /// Files compressed, in processing order
    pub compressed: Vec<Compressed>,
    /// Entries left alone and why
    pub skipped: Vec<(PathBuf, SkipReason)>,
}

/// Compress every eligible file directly inside `dir` into a sibling ".gz" file.
///
/// Sub-directories are not descended into. The first I/O error aborts the run, leaving any
/// outputs already written in place.
pub fn compress_directory(dir: &Path, options: &CompressOptions) -> Result<Report> {
    if !dir.is_dir() {
        bail!(ErrorKind::NotADirectory(dir.to_path_buf()));
    }

    info!("Compressing files in '{}'", dir.display());
    let mut report = Report::default();

    let entries = fs::read_dir(dir)
        .chain_err(|| format!("Could not read directory '{}'", dir.display()))?;
    for entry in entries {
        let path = entry
            .chain_err(|| format!("Could not read entry in '{}'", dir.display()))?
            .path();
        trace!("Found entry '{}'", path.display());

        if let Some(reason) = classify(&path) {
            debug!("Skipping '{}': {reason}", path.display());
            report.skipped.push((path, reason));
            continue;
        }

        let compressed = compress_entry(&path, options)?;
        if !options.quiet {
            println!("{}", progress_line(&compressed));
        }
        report.compressed.push(compressed);
    }

    Ok(report)
}

fn compress_entry(source: &Path, options: &CompressOptions) -> Result<Compressed> {
    let destination = destination_for(source);
    let bytes_in = source.metadata()
        .chain_err(|| format!("Could not read metadata of '{}'", source.display()))?
        .len();
    let bytes_out = compress(source, &destination)?;
    debug!("'{}': {bytes_in} -> {bytes_out} bytes", source.display());

    if options.verify {
        verify(source, &destination)?;
        debug!("Verified '{}'", destination.display());
    }

    Ok(Compressed {
        source: source.to_path_buf(),
        destination,
        bytes_in,
        bytes_out,
    })
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// The line printed after each file, e.g. "Gzipped a.txt -> a.txt.gz"
pub fn progress_line(compressed: &Compressed) -> String {
    format!("Gzipped {} -> {}", file_name(&compressed.source), file_name(&compressed.destination))
}
