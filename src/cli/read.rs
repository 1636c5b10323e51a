use std::{path::PathBuf, str::FromStr};

use stoat_sat::{context::Context, types::err::ErrorKind};

pub(super) enum ReadError {
    NoPath,
    FailedToOpen(PathBuf),
    ParseError(ErrorKind),
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::NoPath => write!(f, "Some path to a CNF formula is required."),
            Self::FailedToOpen(path) => write!(f, "Could not open {path:?} for reading."),
            Self::ParseError(err) => write!(f, "Parse error: '{err:?}'."),
        }
    }
}

/// Reads the DIMACS file at `path` to `context`.
///
/// With the `xz` feature an `xz` extension selects decompression, and otherwise the file is read as-is.
pub(super) fn read_dimacs(path: &str, context: &mut Context) -> Result<(), ReadError> {
    let path = match PathBuf::from_str(path) {
        Ok(path) => path,
        Err(_) => return Err(ReadError::NoPath),
    };

    let file = match std::fs::File::open(&path) {
        Ok(file) => file,
        Err(_) => return Err(ReadError::FailedToOpen(path)),
    };

    let parse_result = match &path.extension() {
        #[cfg(feature = "xz")]
        Some(extension) if *extension == "xz" => {
            context.read_dimacs(std::io::BufReader::new(xz2::read::XzDecoder::new(&file)))
        }

        _ => context.read_dimacs(std::io::BufReader::new(&file)),
    };

    match parse_result {
        Ok(_) => Ok(()),
        Err(e) => Err(ReadError::ParseError(e)),
    }
}
