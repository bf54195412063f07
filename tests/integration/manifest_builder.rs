//! Integration tests for manifest construction

use super::test_utils::{make_dir, md5_hex, tag_list, write_file};
use asset_manifest::config::ManifestConfig;
use asset_manifest::manifest::{Location, ManifestBuilder};
use tempfile::TempDir;

#[test]
fn test_relocatable_file_record() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_file(root, "CoreA/games/Foo/rom.bin", &[0u8; 10]);

    let report = ManifestBuilder::new(root, "http://x/")
        .unwrap()
        .build()
        .unwrap();
    let manifest = &report.manifest;

    let entry = &manifest.files["games/Foo/rom.bin"];
    assert_eq!(entry.size, 10);
    assert_eq!(entry.url, "http://x/CoreA/games/Foo/rom.bin");
    assert_eq!(entry.hash, md5_hex(&[0u8; 10]));
    assert_eq!(entry.path, Some(Location::Pext));
    assert_eq!(tag_list(&entry.tags)[0], "corea");
    assert_eq!(tag_list(&entry.tags), vec!["corea", "games"]);
}

#[test]
fn test_relocatable_folders() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_file(root, "CoreA/games/Foo/rom.bin", b"rom");

    let manifest = ManifestBuilder::new(root, "http://x/")
        .unwrap()
        .build()
        .unwrap()
        .manifest;

    let games = &manifest.folders["games"];
    assert_eq!(games.path, Some(Location::Pext));
    assert_eq!(tag_list(&games.tags), vec!["games"]);

    let foo = &manifest.folders["games/Foo"];
    assert_eq!(foo.path, Some(Location::Pext));
    assert_eq!(tag_list(&foo.tags), vec!["corea", "games"]);
}

#[test]
fn test_underscore_folder_tag_is_stripped() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_file(root, "CoreA/_hidden/readme.txt", b"hello");

    let manifest = ManifestBuilder::new(root, "http://x/")
        .unwrap()
        .build()
        .unwrap()
        .manifest;

    let file = &manifest.files["_hidden/readme.txt"];
    assert!(tag_list(&file.tags).contains(&"hidden"));
    assert!(!tag_list(&file.tags).contains(&"_hidden"));
    assert_eq!(file.path, None);

    let folder = &manifest.folders["_hidden"];
    assert_eq!(tag_list(&folder.tags), vec!["hidden"]);
}

#[test]
fn test_file_at_core_root_is_tagged_with_its_name() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_file(root, "Arcade-Core/core.json", b"{}");
    write_file(root, "Arcade-Core/_boot.rom", b"boot");

    let manifest = ManifestBuilder::new(root, "https://cdn.example/assets")
        .unwrap()
        .build()
        .unwrap()
        .manifest;

    let entry = &manifest.files["core.json"];
    assert_eq!(tag_list(&entry.tags), vec!["arcade-core", "core.json"]);
    assert_eq!(entry.path, None);
    assert_eq!(entry.url, "https://cdn.example/assets/Arcade-Core/core.json");

    let boot = &manifest.files["_boot.rom"];
    assert_eq!(tag_list(&boot.tags), vec!["arcade-core", "boot.rom"]);
}

#[test]
fn test_root_file_named_like_relocatable_dir() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_file(root, "CoreA/games", b"not a directory");

    let manifest = ManifestBuilder::new(root, "http://x/")
        .unwrap()
        .build()
        .unwrap()
        .manifest;

    let entry = &manifest.files["games"];
    assert_eq!(entry.path, Some(Location::Pext));
    assert_eq!(tag_list(&entry.tags), vec!["corea", "games"]);
    assert!(manifest.folders.is_empty());
}

#[test]
fn test_url_keeps_on_disk_file_name() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let decomposed = "cafe\u{0301}.bin";
    write_file(root, &format!("CoreA/{}", decomposed), b"coffee");

    let manifest = ManifestBuilder::new(root, "http://x/")
        .unwrap()
        .build()
        .unwrap()
        .manifest;

    let entry = &manifest.files["caf\u{e9}.bin"];
    assert_eq!(entry.url, format!("http://x/CoreA/{}", decomposed));
    assert_eq!(entry.hash, md5_hex(b"coffee"));
}

#[test]
fn test_configured_max_depth_limits_scan() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_file(root, "CoreA/top.bin", b"top");
    write_file(root, "CoreA/sub/deep.bin", b"deep");
    write_file(root, "CoreA/sub/inner/deeper.bin", b"deeper");

    let mut config = ManifestConfig::default();
    config.scan.max_depth = Some(2);

    let manifest = ManifestBuilder::from_config(root, "http://x/", &config)
        .unwrap()
        .build()
        .unwrap()
        .manifest;

    let mut files: Vec<&str> = manifest.files.keys().map(String::as_str).collect();
    files.sort();
    assert_eq!(files, vec!["sub/deep.bin", "top.bin"]);
    assert!(manifest.folders.contains_key("sub/inner"));
    assert!(!manifest.files.contains_key("sub/inner/deeper.bin"));
}

#[test]
fn test_file_count_matches_tree() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_file(root, "CoreA/a.bin", b"a");
    write_file(root, "CoreA/Assets/b.bin", b"bb");
    write_file(root, "CoreA/Assets/deep/c.bin", b"ccc");
    write_file(root, "CoreB/games/CoreB/d.bin", b"dddd");
    make_dir(root, "CoreB/empty");
    write_file(root, "loose-file.txt", b"not in a core");

    let report = ManifestBuilder::new(root, "http://x/")
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(report.manifest.files.len(), 4);
    assert_eq!(report.total_files(), 4);
    assert_eq!(report.total_bytes(), 10);
    assert_eq!(report.manifest.folders.len(), 5);
    for key in ["Assets", "Assets/deep", "games", "games/CoreB", "empty"] {
        assert!(report.manifest.folders.contains_key(key), "missing folder {}", key);
    }
    assert!(!report.manifest.files.contains_key("loose-file.txt"));
}

#[test]
fn test_hashes_match_file_contents() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let contents: Vec<(&str, &[u8])> = vec![
        ("CoreA/one.bin", &b"first file"[..]),
        ("CoreA/sub/two.bin", &b"second file"[..]),
        ("CoreA/sub/empty.bin", &b""[..]),
    ];
    for (path, data) in &contents {
        write_file(root, path, data);
    }

    let manifest = ManifestBuilder::new(root, "http://x/")
        .unwrap()
        .build()
        .unwrap()
        .manifest;

    for (path, data) in &contents {
        let key = path.trim_start_matches("CoreA/");
        assert_eq!(manifest.files[key].hash, md5_hex(data));
        assert_eq!(manifest.files[key].size, data.len() as u64);
    }
}

#[test]
fn test_keys_use_forward_slashes() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_file(root, "CoreA/x/y/z/file.bin", b"z");

    let manifest = ManifestBuilder::new(root, "http://x/")
        .unwrap()
        .build()
        .unwrap()
        .manifest;

    for key in manifest.files.keys().chain(manifest.folders.keys()) {
        assert!(!key.contains('\\'), "backslash in {}", key);
        assert!(!key.starts_with('/'), "absolute key {}", key);
    }
    assert!(manifest.files.contains_key("x/y/z/file.bin"));
    assert!(manifest.folders.contains_key("x/y/z"));
}

#[test]
fn test_same_path_in_two_cores_keeps_later_core() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_file(root, "CoreA/shared.bin", b"from a");
    write_file(root, "CoreB/shared.bin", b"from b");

    let report = ManifestBuilder::new(root, "http://x/")
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(report.total_files(), 2);
    assert_eq!(report.manifest.files.len(), 1);
    assert_eq!(
        report.manifest.files["shared.bin"].url,
        "http://x/CoreB/shared.bin"
    );
}

#[test]
fn test_custom_db_id_and_relocatable_dir() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_file(root, "CoreA/roms/Foo/rom.bin", b"rom");

    let manifest = ManifestBuilder::new(root, "http://x/")
        .unwrap()
        .with_db_id("custom_db")
        .with_relocatable_dir("roms")
        .build()
        .unwrap()
        .manifest;

    assert_eq!(manifest.db_id, "custom_db");
    assert_eq!(manifest.files["roms/Foo/rom.bin"].path, Some(Location::Pext));
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_aborts_build() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_file(root, "CoreA/ok.bin", b"ok");
    std::os::unix::fs::symlink(root.join("nowhere"), root.join("CoreA").join("dangling.bin"))
        .unwrap();

    let result = ManifestBuilder::new(root, "http://x/").unwrap().build();
    assert!(matches!(
        result,
        Err(asset_manifest::ApiError::Scan(asset_manifest::ScanError::Io { .. }))
    ));
}
