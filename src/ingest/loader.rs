//! Policy document loader
//!
//! Loads one JSON file per policy, shape `{policy, sections: [{section,
//! title, text}, ...]}`, and flattens every usable section into a flat list.
//! Malformed data is skipped at the smallest possible granularity: a file
//! that fails to parse or has no sections is dropped whole, a section with
//! empty text is dropped alone. Skips are logged, never raised.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

/// One addressable unit of a policy document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub policy: String,
    pub section: String,
    pub title: String,
    pub text: String,
}

/// On-disk policy file shape
#[derive(Debug, Deserialize)]
struct PolicyFile {
    policy: Option<String>,
    sections: Option<Vec<SectionEntry>>,
}

#[derive(Debug, Deserialize)]
struct SectionEntry {
    section: Option<String>,
    title: Option<String>,
    text: Option<String>,
}

/// Load policy documents from a directory (non-recursive).
///
/// Returns the retained sections of every parseable `*.json` file, in
/// file-name order then in-file order. An unreadable directory yields an
/// empty list; the index built from it ends up in its empty state.
pub fn load_policies(dir: &Path) -> Vec<Section> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "Failed to read policy directory");
            return Vec::new();
        }
    };

    let mut files: Vec<_> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file() && path.extension().and_then(|ext| ext.to_str()) == Some("json")
        })
        .collect();
    files.sort();

    let mut sections = Vec::new();
    for path in files {
        sections.extend(load_file(&path));
    }

    sections
}

/// Load the retained sections of a single policy file.
fn load_file(path: &Path) -> Vec<Section> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            warn!(file = %path.display(), error = %e, "Skipping unreadable policy file");
            return Vec::new();
        }
    };

    let policy_file: PolicyFile = match serde_json::from_str(&contents) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!(file = %path.display(), error = %e, "Skipping policy file with invalid format");
            return Vec::new();
        }
    };

    let policy = policy_file
        .policy
        .unwrap_or_else(|| "Unknown Policy".to_string());

    let entries = match policy_file.sections {
        Some(entries) if !entries.is_empty() => entries,
        _ => {
            warn!(file = %path.display(), "Skipping policy file with missing sections");
            return Vec::new();
        }
    };

    let mut sections = Vec::new();
    for entry in entries {
        let text = entry.text.unwrap_or_default();
        if text.is_empty() {
            warn!(file = %path.display(), policy = %policy, "Skipping section with empty text");
            continue;
        }

        sections.push(Section {
            policy: policy.clone(),
            section: entry.section.unwrap_or_else(|| "Unknown Section".to_string()),
            title: entry.title.unwrap_or_else(|| "No Title".to_string()),
            text,
        });
    }

    sections
}
