//! FNS decay heat benchmark data and documentation pages
//!
//! The FNS (Fusion Neutronics Source) decay heat experiments are published as
//! a single zip archive by the IAEA. This crate fetches and unpacks that
//! archive, discovers which experiments exist for each element, and writes a
//! markdown page per element for the documentation book.
//!
//! ## Quickstart example
//!
//! ```rust, no_run
//! # use actools_benchmark::*;
//! # fn main() -> Result<()> {
//! // Download and unpack into docs/fns.zip and docs/fns/
//! let fns = Benchmark::fns("docs");
//! let report = fns.install()?;
//! println!("{:?}", report);
//!
//! // One page per element, with element names in the titles
//! let catalog = ExperimentCatalog::scan(fns.extracted_dir())?;
//! let options = PageOptions { iframe: true, element_names: true };
//! for line in build_docs(&catalog, "docs", options)? {
//!     println!("{line}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Experimental data
//!
//! Measured values are plain text with three columns, see
//! [read_experimental_data()].
//!
//! ```rust, no_run
//! # use actools_benchmark::*;
//! # fn main() -> Result<()> {
//! let data = read_experimental_data("docs/fns/Os/Os_2000exp_5min_exp.txt")?;
//! println!("{} measurements", data.len());
//! # Ok(())
//! # }
//! ```

// Modules
mod catalog;
mod download;
mod elements;
mod error;
mod experimental;
mod markdown;

// Re-exports of anything important with in-lined documentation for simplicity
#[doc(inline)]
pub use catalog::ExperimentCatalog;

#[doc(inline)]
pub use download::{extract_archive, fetch_archive, Benchmark, InstallReport, Outcome, FNS_URL};

#[doc(inline)]
pub use elements::element_name;

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use experimental::{parse_experimental_data, read_experimental_data, ExperimentalData};

#[doc(inline)]
pub use markdown::{build_docs, chapter_index, render_page, write_page, PageOptions};
