//! Local previews for attachments whose files are mirrored on disk.
//!
//! An attachment only stores a path or URL. When an attachment root is
//! configured, that reference is matched against files under the root and
//! the first hit is summarized: text formats get their leading content,
//! anything else just the resolved path. Every failure means "no preview".

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Characters of text content included in a preview.
pub const PREVIEW_CHAR_BUDGET: usize = 4000;

/// Extensions read as text; everything else is reported as binary.
pub const TEXT_EXTENSIONS: &[&str] = &[
    "txt", "md", "markdown", "csv", "tsv", "json", "yaml", "yml", "xml", "html", "htm", "log",
    "ini", "toml",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LocalPreview {
    #[serde(rename_all = "camelCase")]
    Text {
        local_path: String,
        mime_type: String,
        content: String,
        truncated: bool,
    },
    #[serde(rename_all = "camelCase")]
    Binary {
        local_path: String,
        mime_type: String,
    },
}

/// Resolves attachment references to files inside one root directory.
#[derive(Debug, Clone)]
pub struct PreviewResolver {
    root: PathBuf,
}

impl PreviewResolver {
    /// `None` when the root cannot be canonicalized.
    pub fn new(root: &Path) -> Option<Self> {
        match root.canonicalize() {
            Ok(root) => Some(Self { root }),
            Err(e) => {
                debug!(root = %root.display(), error = %e, "Attachment root unavailable");
                None
            }
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Preview for the first candidate that resolves under the root.
    pub fn preview(&self, full_path: Option<&str>, name: Option<&str>) -> Option<LocalPreview> {
        let path = candidates(full_path, name)
            .into_iter()
            .find_map(|candidate| self.resolve(&candidate))?;

        match build_preview(&path) {
            Ok(preview) => Some(preview),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Failed to read attachment preview");
                None
            }
        }
    }

    /// Existing regular file whose canonical path stays within the root.
    fn resolve(&self, candidate: &str) -> Option<PathBuf> {
        let candidate = Path::new(candidate);
        let joined = if candidate.is_absolute() {
            candidate.to_path_buf()
        } else {
            self.root.join(candidate)
        };

        let canonical = joined.canonicalize().ok()?;
        (canonical.starts_with(&self.root) && canonical.is_file()).then_some(canonical)
    }
}

/// Lookup order: raw path, last URL segment, last two segments,
/// decoded `file://` path, display name.
pub fn candidates(full_path: Option<&str>, name: Option<&str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    let mut push = |value: String| {
        if !value.is_empty() && !out.contains(&value) {
            out.push(value);
        }
    };

    if let Some(raw) = full_path.map(str::trim).filter(|p| !p.is_empty()) {
        push(raw.to_string());

        let without_query = raw.split(['?', '#']).next().unwrap_or(raw);
        let segments: Vec<&str> = without_query
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        if let Some(last) = segments.last() {
            push(decode(last));
        }
        if segments.len() >= 2 {
            let tail = &segments[segments.len() - 2..];
            push(decode(&tail.join("/")));
        }
        if let Some(path) = without_query.strip_prefix("file://") {
            push(decode(path));
        }
    }

    if let Some(name) = name.map(str::trim) {
        push(name.to_string());
    }

    out
}

fn decode(value: &str) -> String {
    urlencoding::decode(value)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| value.to_string())
}

fn is_text(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| TEXT_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

fn build_preview(path: &Path) -> std::io::Result<LocalPreview> {
    let local_path = path.display().to_string();
    let mime_type = mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string();

    if !is_text(path) {
        return Ok(LocalPreview::Binary {
            local_path,
            mime_type,
        });
    }

    let bytes = fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);
    let mut chars = text.chars();
    let content: String = chars.by_ref().take(PREVIEW_CHAR_BUDGET).collect();
    let truncated = chars.next().is_some();

    Ok(LocalPreview::Text {
        local_path,
        mime_type,
        content,
        truncated,
    })
}

#[cfg(test)]
#[path = "preview_test.rs"]
mod preview_test;
