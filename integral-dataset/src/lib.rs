//! # integral-dataset
//!
//! The canned per-quadrant datasets and the sources that serve them.
//!
//! Each quadrant has three variants (`neg`, `pos`, `inc`) stored as
//! `<quadrant>_<variant>.csv`. [`EmbeddedDatasets`] serves the copies compiled
//! into the binary; [`DirectoryDatasets`] reads the same names from disk.

pub mod catalog;
pub mod source;

pub use catalog::{QuadrantInfo, VariantInfo, catalog};
pub use source::{
    DatasetSource, DirectoryDatasets, EmbeddedDatasets, MemoryDatasets, load_selection,
    resource_name,
};
