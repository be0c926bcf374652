//! Response Writer — one text file per catalog entry plus a running summary.
//!
//! Files are written verbatim and overwrite whatever is already at the sanitized
//! name. Two entries that sanitize to the same name collide; the later one wins.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::GenerationResult;

/// Characters allowed in generated file names; everything else becomes `_`.
const FILENAME_ALLOWED: &str =
    "-_.() abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
pub const MAX_FILENAME_CHARS: usize = 200;
const SNIPPET_CHARS: usize = 400;

/// Maps `s` onto the allow-listed character set and truncates to 200 characters.
pub fn sanitize_filename(s: &str) -> String {
    s.chars()
        .map(|c| if FILENAME_ALLOWED.contains(c) { c } else { '_' })
        .take(MAX_FILENAME_CHARS)
        .collect()
}

/// First 400 characters of `text`, with `...` appended when it was cut.
pub fn snippet(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(SNIPPET_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

/// Writes `content` to `path`, creating parent directories as needed.
pub fn write_text_file(path: &Path, content: &str) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| AppError::io(parent, e))?;
    }
    std::fs::write(path, content).map_err(|e| AppError::io(path, e))
}

/// One section of the summary document.
#[derive(Debug, Clone)]
pub struct SummaryEntry {
    pub key: String,
    pub title: String,
    /// Path relative to the output root, e.g. `responses/a_A.txt`.
    pub file_ref: String,
    pub outcome: String,
    pub snippet: String,
}

pub struct ResponseWriter {
    responses_dir: PathBuf,
    entries: Vec<SummaryEntry>,
}

impl ResponseWriter {
    pub fn new(responses_dir: impl Into<PathBuf>) -> Self {
        Self {
            responses_dir: responses_dir.into(),
            entries: Vec::new(),
        }
    }

    /// Persists one result and records it for the summary. Returns the file path.
    pub fn write(&mut self, result: &GenerationResult) -> Result<PathBuf, AppError> {
        let safe_name = sanitize_filename(&format!("{}_{}", result.key, result.title));
        let file_name = format!("{safe_name}.txt");
        let path = self.responses_dir.join(&file_name);

        write_text_file(&path, &result.text)?;
        info!("Wrote response to: {}", path.display());

        self.entries.push(SummaryEntry {
            key: result.key.clone(),
            title: result.title.clone(),
            file_ref: format!("responses/{file_name}"),
            outcome: result.outcome.label(),
            snippet: snippet(&result.text),
        });

        Ok(path)
    }

    #[cfg(test)]
    pub fn entries(&self) -> &[SummaryEntry] {
        &self.entries
    }

    /// Renders the markdown summary of everything written so far.
    pub fn render_summary(&self, generated_at: DateTime<Utc>, run_id: Uuid) -> String {
        let mut sections = vec![format!(
            "# Responses Summary\nGenerated: {}\nRun: {}\n",
            generated_at.format("%Y-%m-%d %H:%M UTC"),
            run_id
        )];

        for entry in &self.entries {
            sections.push(format!(
                "## {} — {}\nFile: {}\nOutcome: {}\n\nSnippet:\n```\n{}\n```\n",
                entry.key, entry.title, entry.file_ref, entry.outcome, entry.snippet
            ));
        }

        sections.join("\n")
    }

    pub fn write_summary(
        &self,
        path: &Path,
        generated_at: DateTime<Utc>,
        run_id: Uuid,
    ) -> Result<(), AppError> {
        write_text_file(path, &self.render_summary(generated_at, run_id))?;
        info!("Responses summary written to: {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::generation::client::GenerationOutcome;

    fn result(key: &str, title: &str, text: &str) -> GenerationResult {
        GenerationResult {
            key: key.to_string(),
            title: title.to_string(),
            text: text.to_string(),
            outcome: GenerationOutcome::Mock,
        }
    }

    #[test]
    fn test_sanitize_replaces_disallowed_chars() {
        assert_eq!(
            sanitize_filename("idea_generation_10 Faceless Niche SaaS / Product Ideas"),
            "idea_generation_10 Faceless Niche SaaS _ Product Ideas"
        );
        assert_eq!(sanitize_filename("a:b*c?é"), "a_b_c__");
    }

    #[test]
    fn test_sanitize_output_is_allow_listed_and_bounded() {
        let nasty: String = "ab/\\:*?\"<>|€漢字 ().-_".repeat(40);
        let name = sanitize_filename(&nasty);
        assert_eq!(name.chars().count(), MAX_FILENAME_CHARS);
        assert!(name.chars().all(|c| FILENAME_ALLOWED.contains(c)));
    }

    #[test]
    fn test_snippet_truncates_long_text() {
        let long = "x".repeat(450);
        let s = snippet(&long);
        assert_eq!(s.len(), 403);
        assert!(s.ends_with("..."));
        assert_eq!(snippet("short"), "short");
        assert_eq!(snippet(&"y".repeat(400)), "y".repeat(400));
    }

    #[test]
    fn test_write_persists_verbatim_text() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = ResponseWriter::new(dir.path().join("responses"));

        let path = writer.write(&result("a", "A", "line one\n<b>raw</b>")).unwrap();

        assert_eq!(path, dir.path().join("responses").join("a_A.txt"));
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "line one\n<b>raw</b>"
        );
        assert_eq!(writer.entries()[0].file_ref, "responses/a_A.txt");
    }

    #[test]
    fn test_colliding_names_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = ResponseWriter::new(dir.path());

        let first = writer.write(&result("a/b", "T", "first")).unwrap();
        let second = writer.write(&result("a:b", "T", "second")).unwrap();

        assert_eq!(first, second);
        assert_eq!(std::fs::read_to_string(&second).unwrap(), "second");
        assert_eq!(writer.entries().len(), 2);
    }

    #[test]
    fn test_summary_lists_every_entry() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = ResponseWriter::new(dir.path());
        writer.write(&result("a", "A", "alpha")).unwrap();
        writer.write(&result("b", "B", "beta")).unwrap();

        let at = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap();
        let summary = writer.render_summary(at, Uuid::nil());

        assert!(summary.starts_with("# Responses Summary\nGenerated: 2026-03-01 09:30 UTC\n"));
        assert!(summary.contains("## a — A\nFile: responses/a_A.txt\nOutcome: mock\n"));
        assert!(summary.contains("```\nbeta\n```"));
    }
}
