//! Fixture file handling: the hand-written header above the marker line is
//! preserved byte for byte, everything from the marker onward is regenerated
//! on every run.

use std::fs;
use std::path::PathBuf;

use snafu::{OptionExt, ResultExt};

use crate::error::{self as error, Result};

/// The line separating the hand-written header from the generated suffix.
pub const GENERATED_MARKER: &str = "# generated data";

/// Appends one `query I` block to the output buffer.
pub fn push_block(out: &mut String, query: &str, result: &str) {
    out.push_str("\nquery I\n");
    out.push_str(query);
    out.push_str(";\n----\n");
    out.push_str(result);
    out.push('\n');
}

pub struct FixtureFile {
    path: PathBuf,
}

impl FixtureFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Replaces everything after the marker line with `generated`. The file
    /// must already exist and contain the marker; a file without one is
    /// reported rather than silently extended.
    #[tracing::instrument(name = "FixtureFile::rewrite", level = "debug", skip(self, generated), err)]
    pub fn rewrite(&self, generated: &str) -> Result<()> {
        let content = fs::read_to_string(&self.path).context(error::ReadFixtureSnafu {
            path: self.path.clone(),
        })?;
        let prefix_end = Self::prefix_end(&content).context(error::MarkerNotFoundSnafu {
            path: self.path.clone(),
        })?;

        let mut output = String::with_capacity(prefix_end + generated.len() + 1);
        output.push_str(&content[..prefix_end]);
        if !output.ends_with('\n') {
            output.push('\n');
        }
        output.push_str(generated);

        fs::write(&self.path, output).context(error::WriteFixtureSnafu {
            path: self.path.clone(),
        })
    }

    /// Byte offset just past the marker line, or `None` when the marker is
    /// missing.
    fn prefix_end(content: &str) -> Option<usize> {
        let mut end = 0;
        for line in content.split_inclusive('\n') {
            end += line.len();
            if line.strip_suffix('\n').unwrap_or(line) == GENERATED_MARKER {
                return Some(end);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::{FixtureFile, push_block};
    use crate::error::Error;
    use std::fs;

    const HEADER: &str = "# name: test_variant.test\n# group: [variant]\n\n# generated data\n";

    #[allow(clippy::expect_used)]
    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        fs::write(file.path(), content).expect("Failed to seed temp file");
        file
    }

    #[test]
    fn test_push_block_layout() {
        let mut out = String::new();
        push_block(&mut out, "SELECT VARIANT(TRUE)", "blob");
        assert_eq!(out, "\nquery I\nSELECT VARIANT(TRUE);\n----\nblob\n");
    }

    #[test]
    #[allow(clippy::expect_used)]
    fn test_rewrite_replaces_generated_suffix() {
        let seeded = format!("{HEADER}\nquery I\nSELECT old;\n----\nstale\n");
        let file = write_temp(&seeded);

        FixtureFile::new(file.path())
            .rewrite("\nquery I\nSELECT fresh;\n----\nnew\n")
            .expect("Failed to rewrite fixture");

        let content = fs::read_to_string(file.path()).expect("Failed to read fixture");
        assert_eq!(
            content,
            format!("{HEADER}\nquery I\nSELECT fresh;\n----\nnew\n")
        );
    }

    #[test]
    #[allow(clippy::expect_used)]
    fn test_rewrite_is_idempotent() {
        let file = write_temp(HEADER);
        let fixture = FixtureFile::new(file.path());
        let generated = "\nquery I\nSELECT VARIANT(TRUE);\n----\nblob\n";

        fixture.rewrite(generated).expect("first rewrite");
        let first = fs::read_to_string(file.path()).expect("Failed to read fixture");
        fixture.rewrite(generated).expect("second rewrite");
        let second = fs::read_to_string(file.path()).expect("Failed to read fixture");

        assert_eq!(first, second);
        assert!(first.starts_with(HEADER));
    }

    #[test]
    #[allow(clippy::expect_used)]
    fn test_rewrite_handles_marker_without_trailing_newline() {
        let file = write_temp("header\n# generated data");
        FixtureFile::new(file.path())
            .rewrite("\nquery I\nSELECT 1;\n----\n1\n")
            .expect("Failed to rewrite fixture");

        let content = fs::read_to_string(file.path()).expect("Failed to read fixture");
        assert_eq!(
            content,
            "header\n# generated data\n\nquery I\nSELECT 1;\n----\n1\n"
        );
    }

    #[test]
    #[allow(clippy::expect_used)]
    fn test_missing_marker_is_an_error() {
        let file = write_temp("just a header, no marker\n");
        let err = FixtureFile::new(file.path())
            .rewrite("\nquery I\nSELECT 1;\n----\n1\n")
            .expect_err("marker is required");
        assert!(matches!(err, Error::MarkerNotFound { .. }));

        // The file is left untouched.
        let content = fs::read_to_string(file.path()).expect("Failed to read fixture");
        assert_eq!(content, "just a header, no marker\n");
    }

    #[test]
    #[allow(clippy::expect_used)]
    fn test_missing_file_is_an_error() {
        let err = FixtureFile::new("/nonexistent/variant.test")
            .rewrite("")
            .expect_err("file must exist");
        assert!(matches!(err, Error::ReadFixture { .. }));
    }
}
