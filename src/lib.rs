//! # xsdir-replace
//!
//! Rewrites an MCNP `xsdir` cross-section index into the variant Serpent
//! reads: comment lines are dropped, `xdata/` and `xmc/` path prefixes are
//! stripped, the date stamp ahead of the `directory` marker is removed and a
//! `datapath=` line is put in front.
//!
//! The pure line pipeline lives in [`xsdir::transform`]; [`xsdir::process`]
//! wraps it with the file reading and writing the command-line tool performs.

pub mod xsdir;

pub use xsdir::error::XsdirError;
pub use xsdir::process::{process, process_into, ProcessReport};
pub use xsdir::transform::{transform_lines, transform_text, TransformOutput, TransformStats};
