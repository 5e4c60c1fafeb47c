//! Input reading for mlmetrics.
//!
//! - **Pairs**: two-column `truth,prediction` CSV files, parsed into equal-length
//!   numeric or categorical columns ready for the metric engine

pub mod pairs;

pub use pairs::{read_label_pairs, read_numeric_pairs, PairColumns, ReadOptions};
