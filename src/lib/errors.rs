#![allow(missing_docs)]
#![allow(deprecated)]

use std::path::PathBuf;

use error_chain::error_chain;

error_chain! {
    types {
        Error, ErrorKind, ResultExt, Result;
    }

    errors {
        NotADirectory(path: PathBuf) {
            description("not a directory")
            display("{} is not a directory or doesn't exist.", path.display())
        }
        VerifyMismatch(path: PathBuf) {
            description("compressed output does not match source")
            display("'{}' does not decompress to the contents of its source", path.display())
        }
    }

    foreign_links {
        Io(std::io::Error);
    }
}

pub use error_chain::bail;
