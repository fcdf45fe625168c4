use super::*;
use std::fs;
use tempfile::TempDir;

fn root_with(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (name, content) in files {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
    dir
}

#[test]
fn test_candidate_order() {
    let found = candidates(
        Some("https://files.example.com/attachment/report%20q1.txt?token=abc"),
        Some("Report.txt"),
    );
    assert_eq!(
        found,
        vec![
            "https://files.example.com/attachment/report%20q1.txt?token=abc".to_string(),
            "report q1.txt".to_string(),
            "attachment/report q1.txt".to_string(),
            "Report.txt".to_string(),
        ]
    );
}

#[test]
fn test_candidates_decode_file_url() {
    let found = candidates(Some("file:///srv/docs/a%20b.md"), None);
    assert!(found.contains(&"/srv/docs/a b.md".to_string()));
}

#[test]
fn test_candidates_empty() {
    assert!(candidates(None, None).is_empty());
    assert!(candidates(Some("  "), Some("")).is_empty());
}

#[test]
fn test_text_preview_not_truncated() {
    let dir = root_with(&[("notes.md", "# Hello")]);
    let resolver = PreviewResolver::new(dir.path()).unwrap();

    let preview = resolver.preview(Some("notes.md"), None).unwrap();
    match preview {
        LocalPreview::Text {
            content,
            truncated,
            mime_type,
            local_path,
        } => {
            assert_eq!(content, "# Hello");
            assert!(!truncated);
            assert!(mime_type.starts_with("text/"));
            assert!(local_path.ends_with("notes.md"));
        }
        other => panic!("expected text preview, got {other:?}"),
    }
}

#[test]
fn test_text_preview_truncated_at_budget() {
    let exact = "a".repeat(PREVIEW_CHAR_BUDGET);
    let over = "b".repeat(PREVIEW_CHAR_BUDGET + 1);
    let dir = root_with(&[("exact.txt", exact.as_str()), ("over.txt", over.as_str())]);
    let resolver = PreviewResolver::new(dir.path()).unwrap();

    let Some(LocalPreview::Text { truncated, .. }) = resolver.preview(Some("exact.txt"), None)
    else {
        panic!("expected text preview");
    };
    assert!(!truncated);

    let Some(LocalPreview::Text {
        truncated, content, ..
    }) = resolver.preview(Some("over.txt"), None)
    else {
        panic!("expected text preview");
    };
    assert!(truncated);
    assert_eq!(content.chars().count(), PREVIEW_CHAR_BUDGET);
}

#[test]
fn test_binary_preview_for_other_extensions() {
    let dir = root_with(&[("attachment/logo.png", "not really a png")]);
    let resolver = PreviewResolver::new(dir.path()).unwrap();

    let preview = resolver
        .preview(Some("https://cdn.test/files/attachment/logo.png"), None)
        .unwrap();
    assert!(matches!(
        preview,
        LocalPreview::Binary { ref mime_type, .. } if mime_type == "image/png"
    ));
}

#[test]
fn test_falls_back_to_display_name() {
    let dir = root_with(&[("Contract.txt", "terms")]);
    let resolver = PreviewResolver::new(dir.path()).unwrap();

    let preview = resolver.preview(Some("missing/xyz.bin"), Some("Contract.txt"));
    assert!(matches!(preview, Some(LocalPreview::Text { .. })));
}

#[test]
fn test_rejects_traversal_outside_root() {
    let outer = root_with(&[("secret.txt", "top secret"), ("inner/keep.txt", "ok")]);
    let resolver = PreviewResolver::new(&outer.path().join("inner")).unwrap();

    assert!(resolver.preview(Some("../secret.txt"), None).is_none());
    let absolute = outer.path().join("secret.txt");
    assert!(resolver.preview(absolute.to_str(), None).is_none());
    assert!(resolver.preview(Some("keep.txt"), None).is_some());
}

#[test]
fn test_unresolvable_is_none() {
    let dir = root_with(&[]);
    let resolver = PreviewResolver::new(dir.path()).unwrap();
    assert!(resolver.preview(Some("nowhere.txt"), Some("nothing")).is_none());
}

#[test]
fn test_directories_are_not_previewed() {
    let dir = root_with(&[("folder/file.txt", "x")]);
    let resolver = PreviewResolver::new(dir.path()).unwrap();
    assert!(resolver.preview(Some("folder"), None).is_none());
}

#[test]
fn test_missing_root() {
    assert!(PreviewResolver::new(Path::new("/definitely/not/here")).is_none());
}

#[test]
fn test_serialized_shape() {
    let preview = LocalPreview::Text {
        local_path: "/r/a.txt".to_string(),
        mime_type: "text/plain".to_string(),
        content: "hi".to_string(),
        truncated: false,
    };
    let value = serde_json::to_value(&preview).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "type": "text",
            "localPath": "/r/a.txt",
            "mimeType": "text/plain",
            "content": "hi",
            "truncated": false
        })
    );
}
