use std::fs;

use editkit::{EditorError, FileEditor, TextEditor};

#[test]
fn test_create_writes_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let editor = TextEditor::new();

    let path = editor.create(dir.path(), "notes.txt", ()).unwrap();

    assert_eq!(path, dir.path().join("notes.txt"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn test_create_rejects_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let editor = TextEditor::new();
    let missing = dir.path().join("nope");

    let err = editor.create(&missing, "notes.txt", ()).unwrap_err();
    assert!(matches!(err, EditorError::DirectoryNotFound(_)));
}

#[test]
fn test_create_rejects_bad_names() {
    let dir = tempfile::tempdir().unwrap();
    let editor = TextEditor::new();

    for name in ["notes", "notes.md", "my.notes.txt", "notes.TXT", "notes.txt."] {
        let err = editor.create(dir.path(), name, ()).unwrap_err();
        assert!(
            matches!(err, EditorError::InvalidFileName { .. }),
            "`{name}` produced {err:?}"
        );
        assert!(!dir.path().join(name).exists());
    }
}

#[test]
fn test_create_rejects_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let editor = TextEditor::new();

    editor.create(dir.path(), "notes.txt", ()).unwrap();
    let err = editor.create(dir.path(), "notes.txt", ()).unwrap_err();
    assert!(matches!(err, EditorError::AlreadyExists(_)));
}

#[test]
fn test_update_appends_one_line_per_call() {
    let dir = tempfile::tempdir().unwrap();
    let editor = TextEditor::new();

    let path = editor.create(dir.path(), "notes.txt", ()).unwrap();
    editor.update(&path, "Hello").unwrap();
    editor.update(&path, "  world  ").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "Hello \nworld \n");
}

#[test]
fn test_update_trims_surrounding_whitespace() {
    let dir = tempfile::tempdir().unwrap();
    let editor = TextEditor::new();

    let path = editor.create(dir.path(), "notes.txt", ()).unwrap();
    editor.update(&path, "\n\t  padded  \n").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "padded \n");
}

#[test]
fn test_update_requires_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let editor = TextEditor::new();

    let err = editor
        .update(&dir.path().join("notes.txt"), "hi")
        .unwrap_err();
    assert!(matches!(err, EditorError::FileNotFound(_)));
}

#[test]
fn test_update_rejects_wrong_extension() {
    let dir = tempfile::tempdir().unwrap();
    let editor = TextEditor::new();
    let path = dir.path().join("notes.md");
    fs::write(&path, "existing\n").unwrap();

    let err = editor.update(&path, "hi").unwrap_err();
    assert!(matches!(err, EditorError::InvalidFileName { .. }));
    assert_eq!(fs::read_to_string(&path).unwrap(), "existing\n");
}

#[test]
fn test_update_rejects_binary_content() {
    let dir = tempfile::tempdir().unwrap();
    let editor = TextEditor::new();
    let path = dir.path().join("data.txt");
    let payload = b"\x00\x01\x02 not text".to_vec();
    fs::write(&path, &payload).unwrap();

    let err = editor.update(&path, "hi").unwrap_err();
    assert!(matches!(err, EditorError::BinaryContent(_)));
    assert_eq!(fs::read(&path).unwrap(), payload);
}

#[test]
fn test_update_rejects_utf16_content() {
    let dir = tempfile::tempdir().unwrap();
    let editor = TextEditor::new();
    let path = dir.path().join("wide.txt");
    // UTF-16LE BOM followed by "hello".
    let mut payload = vec![0xFF, 0xFE];
    payload.extend("hello".encode_utf16().flat_map(u16::to_le_bytes));
    fs::write(&path, &payload).unwrap();

    let err = editor.update(&path, "tail").unwrap_err();
    assert!(matches!(err, EditorError::BinaryContent(_)));
    assert_eq!(fs::read(&path).unwrap(), payload);
}

#[test]
fn test_validate_signature_checks_name_before_content() {
    let dir = tempfile::tempdir().unwrap();
    let editor = TextEditor::new();
    let path = dir.path().join("data.bin");
    fs::write(&path, b"\x00\x00").unwrap();

    // Wrong name and binary content: the name error wins.
    let err = editor.validate_signature(&path).unwrap_err();
    assert!(matches!(err, EditorError::InvalidFileName { .. }));
}
