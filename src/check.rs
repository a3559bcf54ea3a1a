//! Staleness check for a generated header
//!
//! Renders the header in memory and compares it with what is on disk.
//! Never writes.

use std::path::Path;

use similar::TextDiff;

use crate::error::IconGenResult;
use crate::generator::IconGenerator;

/// Result of comparing the header on disk with a fresh rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The file on disk matches byte for byte
    UpToDate,
    /// No file exists at the output path
    Missing,
    /// The file differs; `diff` is a unified diff from current to expected
    Stale { diff: String },
}

impl CheckOutcome {
    pub fn is_up_to_date(&self) -> bool {
        matches!(self, CheckOutcome::UpToDate)
    }

    pub fn status(&self) -> &'static str {
        match self {
            CheckOutcome::UpToDate => "up-to-date",
            CheckOutcome::Missing => "missing",
            CheckOutcome::Stale { .. } => "stale",
        }
    }
}

/// Compare the header at `output` with what `generator` would produce.
pub fn check<O, P>(generator: &IconGenerator, output: O, inputs: &[P]) -> IconGenResult<CheckOutcome>
where
    O: AsRef<Path>,
    P: AsRef<Path>,
{
    let output = output.as_ref();
    let expected = generator.render_inputs(inputs)?;

    if !output.exists() {
        return Ok(CheckOutcome::Missing);
    }
    let current = std::fs::read(output)?;
    let current = String::from_utf8_lossy(&current);

    Ok(compare(&output.display().to_string(), &current, &expected))
}

/// Compare two renderings of the header at `label`.
pub fn compare(label: &str, current: &str, expected: &str) -> CheckOutcome {
    if current == expected {
        return CheckOutcome::UpToDate;
    }
    let diff = TextDiff::from_lines(current, expected)
        .unified_diff()
        .header(&format!("a/{}", label), &format!("b/{}", label))
        .to_string();
    CheckOutcome::Stale { diff }
}
