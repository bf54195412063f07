//! Integration tests for repeatable manifest output

use super::test_utils::write_file;
use asset_manifest::manifest::ManifestBuilder;
use tempfile::TempDir;

fn sample_tree(root: &std::path::Path) {
    write_file(root, "CoreA/games/Foo/rom.bin", &[7u8; 64]);
    write_file(root, "CoreA/_hidden/readme.txt", b"hidden");
    write_file(root, "CoreB/Assets/sprites/a.png", b"png");
    write_file(root, "CoreB/core.json", b"{}");
}

/// Two runs over an unchanged tree differ only in their timestamp
#[test]
fn test_rebuild_is_identical_except_timestamp() {
    let temp_dir = TempDir::new().unwrap();
    sample_tree(temp_dir.path());

    let builder = ManifestBuilder::new(temp_dir.path(), "http://x/").unwrap();
    let first = builder.build_at(100).unwrap().manifest;
    let mut second = builder.build_at(200).unwrap().manifest;

    assert_ne!(first.timestamp, second.timestamp);
    second.timestamp = first.timestamp;
    assert_eq!(first, second);
    assert_eq!(first.to_json(false).unwrap(), second.to_json(false).unwrap());
}

/// Changing file content changes only that file's hash
#[test]
fn test_content_change_changes_hash_only() {
    let temp_dir = TempDir::new().unwrap();
    sample_tree(temp_dir.path());

    let builder = ManifestBuilder::new(temp_dir.path(), "http://x/").unwrap();
    let before = builder.build_at(0).unwrap().manifest;

    write_file(temp_dir.path(), "CoreB/core.json", b"{\"v\":2}");
    let after = builder.build_at(0).unwrap().manifest;

    assert_ne!(before.files["core.json"].hash, after.files["core.json"].hash);
    assert_eq!(
        before.files["games/Foo/rom.bin"],
        after.files["games/Foo/rom.bin"]
    );
    assert_eq!(before.folders, after.folders);
}

/// The base URL is normalized, so a trailing slash makes no difference
#[test]
fn test_base_url_trailing_slash_is_irrelevant() {
    let temp_dir = TempDir::new().unwrap();
    sample_tree(temp_dir.path());

    let with_slash = ManifestBuilder::new(temp_dir.path(), "http://x/")
        .unwrap()
        .build_at(0)
        .unwrap()
        .manifest;
    let without_slash = ManifestBuilder::new(temp_dir.path(), "http://x")
        .unwrap()
        .build_at(0)
        .unwrap()
        .manifest;

    assert_eq!(with_slash, without_slash);
}
