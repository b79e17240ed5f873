//! jpregion-cli
//! ============
//!
//! Command-line interface for the `jpregion-core` region repository.
//!
//! This crate primarily provides a binary (`jpregion`). We include a small
//! library target so that docs render an overview page.
//!
//! Basic usage:
//!
//! ```text
//! jpregion --help
//! jpregion get JP-13 --locale en
//! jpregion list JP
//! jpregion --json all JP --locale en
//! ```
//!
//! For programmatic access use the `jpregion-core` crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
