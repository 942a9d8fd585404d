//! `actools` is a semi-modular toolkit for running material activation
//! calculations and documenting benchmark comparisons
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use actools_utils as utils;

#[cfg(feature = "activation")]
#[cfg_attr(docsrs, doc(cfg(feature = "activation")))]
#[doc(inline)]
pub use actools_activation as activation;

#[cfg(feature = "benchmark")]
#[cfg_attr(docsrs, doc(cfg(feature = "benchmark")))]
#[doc(inline)]
pub use actools_benchmark as benchmark;
