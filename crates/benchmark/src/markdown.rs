//! Markdown pages for the documentation site

// standard library
use std::path::{Path, PathBuf};

// internal modules
use crate::catalog::ExperimentCatalog;
use crate::elements::element_name;
use crate::error::Result;

// external crates
use actools_utils::f;
use log::info;

/// Choices for how each page is written
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct PageOptions {
    /// Embed the interactive HTML plot above each image
    pub iframe: bool,
    /// Add the full element name to the page title where known
    pub element_names: bool,
}

/// Markdown content for a single element page
///
/// One level-2 section per experiment, each referencing the plot image
/// `<element>_<experiment>.png` and optionally the interactive HTML version
/// `<element>_<experiment>.html`.
///
/// ```rust
/// # use actools_benchmark::{render_page, PageOptions};
/// let options = PageOptions { iframe: false, element_names: true };
/// let page = render_page("Os", &["2000exp_5min"], options);
///
/// assert!(page.starts_with("# Os - Osmium\n"));
/// assert!(page.contains("## 2000exp_5min\n"));
/// assert!(page.contains("(Os_2000exp_5min.png)"));
/// ```
pub fn render_page<S: AsRef<str>>(element: &str, experiments: &[S], options: PageOptions) -> String {
    let mut page = match element_name(element).filter(|_| options.element_names) {
        Some(name) => f!("# {element} - {name}\n\n"),
        None => f!("# {element}\n\n"),
    };

    for experiment in experiments {
        let experiment = experiment.as_ref();
        let stem = f!("{element}_{experiment}");

        page.push_str(&f!("## {experiment}\n\n"));

        if options.iframe {
            page.push_str(&f!(
                "<iframe src=\"../{stem}.html\" width=\"100%\" height=\"600px\" frameborder=\"0\"></iframe>\n\n"
            ));
        }

        page.push_str(&f!("![{element} {experiment}]({stem}.png)\n\n"));
    }

    page
}

/// Write the page for one element to `<docs_dir>/<element>.md`
///
/// The directory is created if needed and any existing page is replaced.
pub fn write_page<P, S>(
    docs_dir: P,
    element: &str,
    experiments: &[S],
    options: PageOptions,
) -> Result<PathBuf>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    std::fs::create_dir_all(docs_dir.as_ref())?;

    let path = docs_dir.as_ref().join(f!("{element}.md"));
    std::fs::write(&path, render_page(element, experiments, options))?;

    Ok(path)
}

/// Table of contents entries for the book, sorted by element
///
/// ```rust
/// # use actools_benchmark::chapter_index;
/// let index = chapter_index("docs", ["Rb", "Cd", "Os"]);
/// assert_eq!(index, vec!["- file: docs/Cd", "- file: docs/Os", "- file: docs/Rb"]);
/// ```
pub fn chapter_index<P, I, S>(docs_dir: P, elements: I) -> Vec<String>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let prefix = docs_dir.as_ref().to_string_lossy().replace('\\', "/");
    let prefix = prefix.trim_end_matches('/');
    let mut chapters: Vec<String> = elements
        .into_iter()
        .map(|element| f!("- file: {prefix}/{}", element.as_ref()))
        .collect();
    chapters.sort();
    chapters
}

/// Write a page for every element in the catalog
///
/// Returns the table of contents entries for the pages written.
pub fn build_docs<P: AsRef<Path>>(
    catalog: &ExperimentCatalog,
    docs_dir: P,
    options: PageOptions,
) -> Result<Vec<String>> {
    for (element, experiments) in catalog.iter() {
        let path = write_page(docs_dir.as_ref(), element, experiments, options)?;
        info!("Wrote {}", path.display());
    }

    Ok(chapter_index(docs_dir, catalog.elements()))
}
