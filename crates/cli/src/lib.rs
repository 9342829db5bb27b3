// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Static HTML site validation.
//!
//! Discovers `.html` files under a site root, checks the entry document
//! and resolves every relative link.

pub mod check;
pub mod checks;
pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod error;
pub mod html;
pub mod output;
pub mod runner;
pub mod walker;

pub use check::{Check, CheckContext, CheckOutput, CheckResult, Violation, ViolationKind};
pub use cli::{CheckArgs, Cli, Command, OutputFormat};
pub use config::{Config, IgnoreConfig};
pub use error::{Error, ExitCode, Result};
pub use html::HtmlDocument;
pub use walker::{FileWalker, HtmlFile, WalkStats, WalkerConfig};
