//! Presentation adapters around the pure builder: stdout, files, clipboard,
//! warnings.

use crate::Result;
use crate::script::OperationDiagnostic;

use anyhow::Context;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// File name used when saving a script: `<machine>.txt`, or `alarm_script.txt`.
///
/// Path separators become `_` so the file always lands directly in the
/// target directory. Only the file name is touched; script identifiers keep
/// the machine name verbatim.
pub fn download_file_name(machine_name: &str) -> String {
    let stem: String = machine_name
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    match stem.as_str() {
        "" | "." | ".." => "alarm_script.txt".to_string(),
        _ => format!("{}.txt", stem),
    }
}

/// Save `text` into `dir` under [`download_file_name`], creating `dir` if needed.
pub fn write_download(dir: &Path, machine_name: &str, text: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("create output dir {}", dir.display()))?;
    let path = dir.join(download_file_name(machine_name));
    write_to(&path, text)?;
    Ok(path)
}

pub fn write_to(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).with_context(|| format!("write script {}", path.display()))?;
    info!(path = %path.display(), bytes = text.len(), "wrote script");
    Ok(())
}

pub fn print(text: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", text).context("write script to stdout")?;
    stdout.flush()?;
    Ok(())
}

/// Where [`copy_to_clipboard`] put the script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Clipboard,
    /// Clipboard unavailable; the script went to stdout instead.
    Stdout,
}

/// Copy `text` to the system clipboard, falling back to stdout.
pub fn copy_to_clipboard(text: &str) -> Result<CopyOutcome> {
    let mut stdout = std::io::stdout().lock();
    copy_with_fallback(text, set_system_clipboard, &mut stdout)
}

fn set_system_clipboard(text: &str) -> std::result::Result<(), arboard::Error> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text)
}

fn copy_with_fallback<W: Write>(
    text: &str,
    set_clipboard: impl FnOnce(&str) -> std::result::Result<(), arboard::Error>,
    fallback: &mut W,
) -> Result<CopyOutcome> {
    match set_clipboard(text) {
        Ok(()) => {
            info!(bytes = text.len(), "copied script to clipboard");
            Ok(CopyOutcome::Clipboard)
        }
        Err(err) => {
            warn!("clipboard unavailable ({}), writing script to stdout", err);
            writeln!(fallback, "{}", text).context("write script to stdout")?;
            fallback.flush()?;
            Ok(CopyOutcome::Stdout)
        }
    }
}

/// Log one combined warning per operation line with skipped entries.
pub fn report_diagnostics(diagnostics: &[OperationDiagnostic]) {
    for d in diagnostics {
        warn!(operation = %d.operation, "{}", d.message());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_falls_back_when_machine_is_empty() {
        assert_eq!(download_file_name("AS33PerfTest"), "AS33PerfTest.txt");
        assert_eq!(download_file_name(""), "alarm_script.txt");
    }

    #[test]
    fn file_name_cannot_leave_target_dir() {
        assert_eq!(download_file_name("../escaped"), ".._escaped.txt");
        assert_eq!(download_file_name("Line1/AS33"), "Line1_AS33.txt");
        assert_eq!(download_file_name("Line1\\AS33"), "Line1_AS33.txt");
        assert_eq!(download_file_name("."), "alarm_script.txt");
        assert_eq!(download_file_name(".."), "alarm_script.txt");
    }

    #[test]
    fn download_with_separator_in_name_stays_in_dir() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");

        let path = write_download(&out, "../escaped", "x").unwrap();
        assert_eq!(path, out.join(".._escaped.txt"));
        assert!(!dir.path().join("escaped.txt").exists());

        let path = write_download(&out, "Line1/AS33", "y").unwrap();
        assert_eq!(path, out.join("Line1_AS33.txt"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "y");
    }

    #[test]
    fn copy_falls_back_to_writer_when_clipboard_fails() {
        let mut sink = Vec::new();
        let outcome = copy_with_fallback(
            "IF x THEN",
            |_| Err(arboard::Error::ClipboardNotSupported),
            &mut sink,
        )
        .unwrap();
        assert_eq!(outcome, CopyOutcome::Stdout);
        assert_eq!(String::from_utf8(sink).unwrap(), "IF x THEN\n");
    }

    #[test]
    fn copy_success_writes_nothing_to_fallback() {
        let mut copied = String::new();
        let mut sink = Vec::new();
        let outcome = copy_with_fallback(
            "IF x THEN",
            |text| {
                copied.push_str(text);
                Ok(())
            },
            &mut sink,
        )
        .unwrap();
        assert_eq!(outcome, CopyOutcome::Clipboard);
        assert_eq!(copied, "IF x THEN");
        assert!(sink.is_empty());
    }

    #[test]
    fn writes_download_into_new_dir() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested");
        let path = write_download(&target, "AS33", "IF x THEN\nENDIF;").unwrap();
        assert_eq!(path, target.join("AS33.txt"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "IF x THEN\nENDIF;");
    }
}
