/// A module with error types
pub mod errors;

/// A module deciding which directory entries are compressed
pub mod filter;

/// A Module for compressing a file into a sibling ".gz"
pub mod compress;

/// A Module for decompressing ".gz" files
pub mod decompress;

/// A Module that compresses every eligible file in a directory
pub mod directory;

pub use compress::compress;
pub use decompress::{decompress, verify};
pub use directory::{compress_directory, CompressOptions, Compressed, Report};
pub use filter::{classify, destination_for, SkipReason};
