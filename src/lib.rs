//! Merges the direct and indirect phrase (or hierarchical rule) tables written
//! by a phrase extraction pipeline into one consolidated table.
//!
//! Both tables are read line by line in lockstep: [`io::table_read`] pairs the
//! lines, [`validate`] checks that they describe the same phrase pair,
//! [`label`] separates nonterminal labels from hierarchical phrases, and
//! [`consolidate`] drives the whole run, emitting one line per pair through
//! [`io::table_write`].

pub mod config;
pub mod consolidate;
pub mod error;
pub mod fields;
pub mod io;
pub mod label;
pub mod model;
pub mod report;
pub mod validate;

pub use config::ConsolidateConfig;
pub use consolidate::{ConsolidateSummary, Consolidator, consolidate_files, consolidate_streams};
pub use error::{ConsolidateError, PhraseSide, Result};
