//! xsdir to Serpent conversion.
//!
//! Modules are layered bottom-up: `rules` holds the fixed literals and line
//! predicates, `transform` runs them over a line sequence, `process` adds the
//! filesystem around it and `error` describes what can go wrong there.

pub mod error;
pub mod process;
pub mod rules;
pub mod transform;
