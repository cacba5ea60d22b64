//! Analysis journal: newline-delimited JSON, one record per analyzed photo.
//!
//! The journal is the logging collaborator's input: each line is the
//! lossless serialization of one `AnalysisLogEntry`, so downstream storage
//! can re-parse it field for field.

use snapbite_core::AnalysisLogEntry;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Append one entry to the journal file, creating it (and its parent
/// directory) on first use.
pub fn append(path: &Path, entry: &AnalysisLogEntry) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    let line = serde_json::to_string(entry)?;
    writeln!(file, "{line}")?;

    tracing::debug!(path = %path.display(), "Journaled analysis");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use snapbite_core::NutritionAnalysis;

    #[test]
    fn test_append_creates_file_and_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("journal.jsonl");

        let entry = AnalysisLogEntry::new("U1", "M1", NutritionAnalysis::empty());
        append(&path, &entry).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
        assert!(content.contains("\"user_id\":\"U1\""));
    }

    #[test]
    fn test_append_accumulates_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.jsonl");

        for i in 0..3 {
            let entry =
                AnalysisLogEntry::new("U1", format!("M{i}"), NutritionAnalysis::empty());
            append(&path, &entry).unwrap();
        }

        let content = std::fs::read_to_string(&path).unwrap();
        let entries: Vec<AnalysisLogEntry> = content
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[2].message_id, "M2");
    }
}
