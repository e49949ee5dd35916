use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;
use flate2::read::GzDecoder;
use crate::errors::*;

/// Decompress the gzip file at `source`, returning its original contents
pub fn decompress(source: &Path) -> Result<Vec<u8>> {
    let file = File::open(source)
        .chain_err(|| format!("Could not open '{}'", source.display()))?;
    let mut decoder = GzDecoder::new(BufReader::new(file));
    let mut content = Vec::new();
    decoder.read_to_end(&mut content)
        .chain_err(|| format!("Could not decompress '{}'", source.display()))?;
    Ok(content)
}

/// Check that the gzip file at `destination` decompresses to exactly the contents of `source`.
/// Both files are streamed, neither is read whole.
pub fn verify(source: &Path, destination: &Path) -> Result<()> {
    let original = File::open(source)
        .chain_err(|| format!("Could not open '{}'", source.display()))?;
    let compressed = File::open(destination)
        .chain_err(|| format!("Could not open '{}'", destination.display()))?;

    let mut original = BufReader::new(original);
    let mut decoded = BufReader::new(GzDecoder::new(BufReader::new(compressed)));
    let same = streams_equal(&mut original, &mut decoded)
        .chain_err(|| format!("Could not verify '{}'", destination.display()))?;

    if !same {
        bail!(ErrorKind::VerifyMismatch(destination.to_path_buf()));
    }
    Ok(())
}

fn streams_equal(left: &mut impl BufRead, right: &mut impl BufRead) -> io::Result<bool> {
    loop {
        let a = left.fill_buf()?;
        let b = right.fill_buf()?;
        if a.is_empty() || b.is_empty() {
            return Ok(a.is_empty() && b.is_empty());
        }

        let n = a.len().min(b.len());
        if a[..n] != b[..n] {
            return Ok(false);
        }
        left.consume(n);
        right.consume(n);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compress;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn restores_original_bytes() {
        let dir = TempDir::new().expect("Could not create temp dir");
        let source = dir.path().join("bytes.bin");
        let destination = dir.path().join("bytes.bin.gz");
        let content: Vec<u8> = (0..=255u8).cycle().take(10_000).collect();
        fs::write(&source, &content).expect("Could not write file");

        compress(&source, &destination).expect("Could not compress");
        assert_eq!(decompress(&destination).expect("Could not decompress"), content);
    }

    #[test]
    fn verify_accepts_matching_output() {
        let dir = TempDir::new().expect("Could not create temp dir");
        let source = dir.path().join("a.txt");
        let destination = dir.path().join("a.txt.gz");
        fs::write(&source, "abc".repeat(50_000)).expect("Could not write file");

        compress(&source, &destination).expect("Could not compress");
        verify(&source, &destination).expect("Verification failed");
    }

    #[test]
    fn verify_detects_different_content() {
        let dir = TempDir::new().expect("Could not create temp dir");
        let source = dir.path().join("a.txt");
        let other = dir.path().join("b.txt");
        let destination = dir.path().join("b.txt.gz");
        fs::write(&source, b"hello").expect("Could not write file");
        fs::write(&other, b"goodbye").expect("Could not write file");
        compress(&other, &destination).expect("Could not compress");

        let err = verify(&source, &destination).expect_err("Expected a mismatch");
        match err.kind() {
            ErrorKind::VerifyMismatch(path) => assert_eq!(path, &destination),
            kind => panic!("Unexpected error kind: {kind}"),
        }
        assert!(err.to_string().contains("does not decompress to the contents of its source"));
    }

    #[test]
    fn verify_detects_truncated_source() {
        let dir = TempDir::new().expect("Could not create temp dir");
        let source = dir.path().join("a.txt");
        let destination = dir.path().join("a.txt.gz");
        fs::write(&source, b"hello world").expect("Could not write file");
        compress(&source, &destination).expect("Could not compress");
        fs::write(&source, b"hello").expect("Could not write file");

        let err = verify(&source, &destination).expect_err("Expected a mismatch");
        assert!(matches!(err.kind(), ErrorKind::VerifyMismatch(_)));
    }

    #[test]
    fn rejects_non_gzip_input() {
        let dir = TempDir::new().expect("Could not create temp dir");
        let source = dir.path().join("plain.gz");
        fs::write(&source, b"this is not gzip").expect("Could not write file");

        assert!(decompress(&source).is_err());
    }
}
