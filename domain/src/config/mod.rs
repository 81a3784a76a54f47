//! Presentation choices that several layers agree on

mod output_format;

pub use output_format::OutputFormat;
