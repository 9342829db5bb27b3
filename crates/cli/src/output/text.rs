// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! ```text
//! <check-name>: FAIL
//!   <file>: <brief violation description>
//!     <advice>
//! ```

use std::io::Write;
use termcolor::{ColorChoice, StandardStream, WriteColor};

use super::FormatOptions;
use crate::check::{CheckOutput, CheckResult, Violation};
use crate::color::scheme;

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor> {
    out: W,
    options: FormatOptions,
    violations_shown: usize,
    truncated: bool,
}

impl TextFormatter<StandardStream> {
    /// Create a formatter writing to stdout.
    pub fn stdout(color_choice: ColorChoice, options: FormatOptions) -> Self {
        Self::new(StandardStream::stdout(color_choice), options)
    }
}

impl<W: WriteColor> TextFormatter<W> {
    /// Create a new text formatter.
    pub fn new(out: W, options: FormatOptions) -> Self {
        Self {
            out,
            options,
            violations_shown: 0,
            truncated: false,
        }
    }

    /// Write a single check result (streaming).
    /// Returns true if output was truncated.
    pub fn write_check(&mut self, result: &CheckResult) -> std::io::Result<bool> {
        if result.passed {
            return Ok(false);
        }

        // Check name: bold
        self.out.set_color(&scheme::check_name())?;
        write!(self.out, "{}", result.name)?;
        self.out.reset()?;
        write!(self.out, ": ")?;

        if result.skipped {
            self.out.set_color(&scheme::skip())?;
            write!(self.out, "SKIP")?;
            self.out.reset()?;
            writeln!(self.out)?;
            if let Some(ref error) = result.error {
                writeln!(self.out, "  {}", error)?;
            }
            return Ok(false);
        }

        // "FAIL" in red
        self.out.set_color(&scheme::fail())?;
        write!(self.out, "FAIL")?;
        self.out.reset()?;
        writeln!(self.out)?;

        for violation in &result.violations {
            if let Some(limit) = self.options.limit
                && self.violations_shown >= limit
            {
                self.truncated = true;
                return Ok(true);
            }
            self.write_violation(violation)?;
            self.violations_shown += 1;
        }

        Ok(false)
    }

    fn write_violation(&mut self, v: &Violation) -> std::io::Result<()> {
        write!(self.out, "  ")?;

        // File path in cyan
        if let Some(ref file) = v.file {
            self.out.set_color(&scheme::path())?;
            write!(self.out, "{}", file.display())?;
            self.out.reset()?;
            write!(self.out, ": ")?;
        }

        writeln!(self.out, "{}", v.description())?;

        // Advice (4-space indent)
        writeln!(self.out, "    {}", v.advice)?;

        Ok(())
    }

    /// Write the summary line.
    pub fn write_summary(&mut self, output: &CheckOutput) -> std::io::Result<()> {
        let passed = output.checks.iter().filter(|c| c.passed).count();
        let skipped = output.checks.iter().filter(|c| c.skipped).count();
        let failed = output.checks.len() - passed - skipped;

        write!(
            self.out,
            "{} check{} passed",
            passed,
            if passed == 1 { "" } else { "s" }
        )?;
        if failed > 0 {
            write!(self.out, ", {} failed", failed)?;
        }
        if skipped > 0 {
            write!(self.out, ", {} skipped", skipped)?;
        }
        writeln!(self.out)
    }

    /// Write truncation message if applicable.
    pub fn write_truncation_message(&mut self, total: usize) -> std::io::Result<()> {
        if let Some(limit) = self.options.limit
            && self.truncated
            && total > limit
        {
            writeln!(
                self.out,
                "Stopped after {} violations. Use --no-limit to see all.",
                limit
            )?;
        }
        Ok(())
    }

    /// Check if output was truncated.
    pub fn was_truncated(&self) -> bool {
        self.truncated
    }

    /// Get the number of violations shown.
    pub fn violations_shown(&self) -> usize {
        self.violations_shown
    }

    /// Consume the formatter and return the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
