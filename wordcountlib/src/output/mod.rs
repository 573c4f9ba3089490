//! Output formatting: present a summary as a report.
//!
//! This module handles the fourth and final stage of the pipeline -
//! formatting the summary and writing it out. It provides:
//!
//! - **format_summary**: The fixed plain-text report layout
//! - **write_report**: Writing a report to a file
//!
//! Formatting is pure; all counting and ranking happens in earlier stages.
//!
//! ## Example
//!
//! ```rust,ignore
//! use wordcountlib::output::{format_summary, write_report};
//!
//! let report = format_summary(&summary);
//! write_report("output.txt", &report)?;
//! ```

pub mod report;

pub use report::{format_summary, write_report};
