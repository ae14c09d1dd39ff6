//! gridsmith: generate and splice Symbols grid-selection components.
//!
//! The crate splits into a pure generator ([`component`]) that expands a grid
//! size into Symbols component source text, and a pure patcher ([`patch`],
//! [`routes`]) that splices that text into an existing project's source
//! documents. Neither touches disk; all file I/O lives in the binary.

pub mod component;
pub mod config;
pub mod patch;
pub mod report;
pub mod routes;
