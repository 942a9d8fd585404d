//! Fetch and unpack the benchmark archive

// standard library
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

// internal modules
use crate::error::{Error, Result};

// external crates
use kdam::{tqdm, BarExt};
use log::{debug, info};
use zip::ZipArchive;

/// Location of the FNS decay heat benchmark archive
pub const FNS_URL: &str = "https://nds.iaea.org/conderc/fusion/files/fns.zip";

/// Size of each chunk written to file while downloading
const BLOCK_SIZE: usize = 16384;

/// What happened for a single step
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Work was already done, nothing was changed
    Skipped,
    /// Work was done
    Completed,
}

/// Result of both install steps
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct InstallReport {
    /// Fetching the archive
    pub download: Outcome,
    /// Unpacking the archive
    pub extraction: Outcome,
}

/// A benchmark archive and where it is installed
///
/// The archive lands in `<install_dir>/<name>.zip` and is unpacked to
/// `<install_dir>/<name>/`, with `<name>` taken from the URL.
///
/// ```rust
/// # use actools_benchmark::Benchmark;
/// # use std::path::PathBuf;
/// let fns = Benchmark::fns("docs");
/// assert_eq!(fns.archive_path(), PathBuf::from("docs/fns.zip"));
/// assert_eq!(fns.extracted_dir(), PathBuf::from("docs/fns"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Benchmark {
    /// Remote archive location
    pub url: String,
    /// Directory the archive is downloaded and unpacked into
    pub install_dir: PathBuf,
}

impl Benchmark {
    /// Any remote zip archive
    pub fn new<P: Into<PathBuf>>(url: &str, install_dir: P) -> Self {
        Self {
            url: url.to_string(),
            install_dir: install_dir.into(),
        }
    }

    /// The FNS decay heat benchmark from the IAEA CoNDERC pages
    pub fn fns<P: Into<PathBuf>>(install_dir: P) -> Self {
        Self::new(FNS_URL, install_dir)
    }

    /// File name of the archive, from the end of the URL
    pub fn archive_name(&self) -> &str {
        self.url.rsplit('/').next().unwrap_or(&self.url)
    }

    /// Local path of the archive
    pub fn archive_path(&self) -> PathBuf {
        self.install_dir.join(self.archive_name())
    }

    /// Folder created by unpacking the archive
    pub fn extracted_dir(&self) -> PathBuf {
        let name = self.archive_name();
        let stem = name.strip_suffix(".zip").unwrap_or(name);
        self.install_dir.join(stem)
    }

    /// Download and unpack the archive, skipping anything already done
    ///
    /// A download is skipped if the archive already exists locally, and
    /// extraction is skipped if the unpacked folder already exists. There is no
    /// check on the content of an existing archive.
    pub fn install(&self) -> Result<InstallReport> {
        std::fs::create_dir_all(&self.install_dir)?;

        let download = fetch_archive(&self.url, self.archive_path())?;

        let extracted = self.extracted_dir();
        let extraction = if extracted.exists() {
            info!("Extracted folder already exists, skipping");
            Outcome::Skipped
        } else {
            extract_archive(self.archive_path(), &self.install_dir)?;
            Outcome::Completed
        };

        Ok(InstallReport {
            download,
            extraction,
        })
    }
}

/// Download a file to `path` unless it already exists
///
/// The response is streamed to file in blocks with a progress bar. The only
/// check afterwards is that the file exists.
pub fn fetch_archive<P: AsRef<Path>>(url: &str, path: P) -> Result<Outcome> {
    let path = path.as_ref();

    if path.exists() {
        info!("File already exists, skipping download");
        return Ok(Outcome::Skipped);
    }

    debug!("Requesting {url}");
    let mut response = minreq::get(url)
        .with_header("User-Agent", "Mozilla/5.0")
        .send_lazy()?;

    if !(200..300).contains(&response.status_code) {
        return Err(Error::BadStatus {
            code: response.status_code,
            url: url.to_string(),
        });
    }

    let total = response
        .headers
        .get("content-length")
        .and_then(|length| length.parse::<usize>().ok())
        .unwrap_or(0);

    let mut progress = tqdm!(
        total = total,
        unit = "B",
        unit_scale = true,
        desc = "Downloading"
    );

    let mut writer = BufWriter::new(File::create(path)?);
    let mut buffer = [0u8; BLOCK_SIZE];
    loop {
        let n = response.read(&mut buffer)?;
        if n == 0 {
            break;
        }
        writer.write_all(&buffer[..n])?;
        progress.update(n)?;
    }
    writer.flush()?;
    eprintln!();

    if !path.exists() {
        return Err(Error::DownloadMissing {
            path: path.to_path_buf(),
        });
    }

    info!("Completed download of {}", path.display());
    Ok(Outcome::Completed)
}

/// Unpack every entry of a zip archive into `destination`
pub fn extract_archive<P: AsRef<Path>, Q: AsRef<Path>>(archive: P, destination: Q) -> Result<()> {
    let file = File::open(archive.as_ref())?;
    let mut archive = ZipArchive::new(file)?;
    debug!("Extracting {} entries", archive.len());
    archive.extract(destination.as_ref())?;
    info!("Unzipped to {}", destination.as_ref().display());
    Ok(())
}
