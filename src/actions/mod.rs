//! Workflow-command surface for the hosting CI runner
//!
//! Everything the runner consumes is plain stdout: `::group::`/`::endgroup::`
//! sections, `::warning::`/`::error::` annotations, and output variables
//! appended to the file named by `GITHUB_OUTPUT`.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::Result;

/// Open a collapsible log group
pub fn start_group(name: &str) {
    println!("::group::{}", escape_data(name));
}

/// Close the most recently opened log group
pub fn end_group() {
    println!("::endgroup::");
}

/// Emit a warning annotation (shown on the run summary, does not fail the step)
pub fn warning(message: &str) {
    println!("::warning::{}", escape_data(message));
}

/// Emit an error annotation. The step is only marked failed once the
/// process exits nonzero; this just surfaces the message in the UI.
pub fn error(message: &str) {
    println!("::error::{}", escape_data(message));
}

/// Publish a named output variable for downstream steps.
///
/// Appends `name=value` to the `GITHUB_OUTPUT` file when the runner provides
/// one, falling back to the legacy `::set-output` command otherwise.
pub fn set_output(name: &str, value: &str) -> Result<()> {
    match std::env::var("GITHUB_OUTPUT") {
        Ok(path) if !path.is_empty() => write_output(Path::new(&path), name, value),
        _ => {
            println!("::set-output name={}::{}", name, escape_data(value));
            Ok(())
        }
    }
}

/// Append one `name=value` line to an output file
fn write_output(path: &Path, name: &str, value: &str) -> Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}={}", name, value)?;
    Ok(())
}

/// Percent-escape message data per the workflow-command protocol.
///
/// `%` must be escaped first so already-escaped sequences are not mangled.
fn escape_data(data: &str) -> String {
    data.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain_text_unchanged() {
        assert_eq!(escape_data("all clear"), "all clear");
    }

    #[test]
    fn test_escape_newlines_and_percent() {
        assert_eq!(escape_data("a%b\r\nc"), "a%25b%0D%0Ac");
    }

    #[test]
    fn test_escape_percent_first() {
        // A literal "%0A" in the input must survive as text, not a newline
        assert_eq!(escape_data("%0A"), "%250A");
    }

    #[test]
    fn test_write_output_appends_lines() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("output");

        write_output(&path, "sonarParameters", "-Dsonar.login=x -Dsonar.host.url=y")
            .expect("first write");
        write_output(&path, "other", "value").expect("second write");

        let contents = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(
            contents,
            "sonarParameters=-Dsonar.login=x -Dsonar.host.url=y\nother=value\n"
        );
    }
}
