//! Normal sample generation, three-sigma check and density histogram.
//!
//! The numeric pieces are plain functions and types; the plot window sits
//! behind [`app::PlotRenderer`] so everything else runs without a display.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod histogram;
pub mod normal;
pub mod pipeline;
pub mod rng;
pub mod summary;
pub mod three_sigma;

pub use error::{Error, Result};
