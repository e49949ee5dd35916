use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;
use flate2::write::GzEncoder;
use flate2::Compression;
use crate::errors::*;

/// Compress file at `source` into a new gzip file at `destination`, at default compression
/// Return a Result with the size of the output file in bytes
pub fn compress(source: &Path, destination: &Path) -> Result<u64> {
    let input = File::open(source)
        .chain_err(|| format!("Could not open '{}'", source.display()))?;
    let output = File::create(destination)
        .chain_err(|| format!("Could not create '{}'", destination.display()))?;

    let mut reader = BufReader::new(input);
    let mut encoder = GzEncoder::new(BufWriter::new(output), Compression::default());
    io::copy(&mut reader, &mut encoder)
        .chain_err(|| format!("Could not compress '{}'", source.display()))?;

    let mut writer = encoder.finish()
        .chain_err(|| format!("Could not finish writing '{}'", destination.display()))?;
    writer.flush()
        .chain_err(|| format!("Could not flush '{}'", destination.display()))?;
    drop(writer);

    let metadata = destination.metadata()
        .chain_err(|| format!("Could not read metadata of '{}'", destination.display()))?;
    Ok(metadata.len())
}
