//! Result and Error types for the benchmark module

use std::path::PathBuf;

/// Type alias for `Result<T, benchmark::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for `actools-benchmark`
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    Io(#[from] std::io::Error),

    /// Failure during the GET request
    #[error("request for benchmark archive failed")]
    FailedRequest(#[from] minreq::Error),

    /// Server responded, but not with the archive
    #[error("unexpected status {code} from {url}")]
    BadStatus { code: i32, url: String },

    /// Download finished but nothing was written
    #[error("something went wrong with the download, {path:?} does not exist")]
    DownloadMissing { path: PathBuf },

    /// Failure reading or unpacking the archive
    #[error("failed to extract archive")]
    Zip(#[from] zip::result::ZipError),

    /// The extracted benchmark folder is not where it should be
    #[error("{path:?} does not exist, download and extract the benchmark archive first")]
    MissingSourceDir { path: PathBuf },

    /// Could not read numbers from an experimental data row
    #[error("could not parse line {line}: \"{content}\"")]
    ParseError { line: usize, content: String },
}
