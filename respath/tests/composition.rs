//! Integration tests for path composition and derived paths.

mod common;

use common::{posix, windows};
use respath::{PathRelationship, PlatformPolicy, ProtocolTable, ResourcePath};

const POSIX: PlatformPolicy = PlatformPolicy::POSIX;

#[test]
fn test_build_path_incrementally() {
    let mut path = posix("/Program Files/");
    path.append_in_place_with("My Game/", &POSIX);
    path.append_in_place_with("../Other Game/", &POSIX);
    path.append_in_place_with("Game.exe", &POSIX);

    assert_eq!(path.to_string(), "file:///Program Files/Other Game/Game.exe");
    assert_eq!(path.parent(), posix("/Program Files/Other Game/"));
}

#[test]
fn test_join_keeps_left_root_and_drive() {
    let base = windows("zip://C:/Game/");
    let joined = base.join_with("sub/../media.zip#ui/button.png", &PlatformPolicy::WINDOWS);

    assert_eq!(joined.protocol(), "zip");
    assert_eq!(joined.drive(), Some("C"));
    assert_eq!(joined.directories(), ["Game"]);
    assert_eq!(joined.filename(), "media.zip");
    assert_eq!(joined.portion(), "ui/button.png");
}

#[test]
fn test_left_filename_becomes_directory() {
    let joined = posix("a/b").join_with("c.txt", &POSIX);
    assert_eq!(joined.directories(), ["a", "b"]);
    assert_eq!(joined.parent(), posix("a/b/"));
}

#[test]
fn test_parent_child_inverse() {
    for raw in ["/", "a/", "/a/b/", "zip://pack/", "memory://"] {
        let dir = posix(raw);
        assert_eq!(dir.join_with("x", &POSIX).parent(), dir, "{raw}");
        assert_eq!(dir.join_with("x.txt", &POSIX).parent(), dir, "{raw}");
    }
}

#[test]
fn test_parent_chain_reaches_root() {
    let mut path = posix("/a/b/c.txt");
    let mut seen = vec![path.to_string()];
    loop {
        let parent = path.parent();
        if parent == path {
            break;
        }
        seen.push(parent.to_string());
        path = parent;
    }
    assert_eq!(
        seen,
        ["file:///a/b/c.txt", "file:///a/b/", "file:///a/", "file:///"]
    );
}

#[test]
fn test_parent_with_one_directory_is_drive() {
    let parent = windows("C:/Games/").parent();
    assert_eq!(parent.to_string(), "file://C:/");
    assert!(parent.is_absolute());
}

#[test]
fn test_archive_entry_relationships() {
    let entry = posix("zip:///games/media.zip#poem.txt");
    let archive = entry.without_portion();

    assert_eq!(archive.to_string(), "zip:///games/media.zip");
    assert_eq!(
        PathRelationship::between(&archive, &entry),
        PathRelationship::Ancestor
    );
    assert_eq!(entry.parent(), archive);
    assert_eq!(entry.parent().parent(), posix("zip:///games/"));
    assert!(PathRelationship::is_within(&entry, &entry.parent()));
}

#[test]
fn test_relative_rebases_under_new_root() {
    let original = windows("zip://C:/Program Files/Game/media.zip#poem.txt");
    let relative = original.relative();
    assert_eq!(relative.to_string(), "file://Program Files/Game/media.zip");

    let rebased = posix("/mnt/backup/").join_with(&relative, &POSIX);
    assert_eq!(
        rebased.os_string_with(&POSIX),
        "/mnt/backup/Program Files/Game/media.zip"
    );
}

#[test]
fn test_protocol_dispatch() {
    let mut handlers: ProtocolTable<&str> = ProtocolTable::new();
    handlers.register("file", "disk");
    handlers.register("zip", "archive");

    let lookups: Vec<Option<&&str>> = ["a/b.txt", "zip://a.zip#b", "memory://"]
        .iter()
        .map(|raw| handlers.get(&ResourcePath::new(raw)))
        .collect();

    assert_eq!(lookups, [Some(&"disk"), Some(&"archive"), None]);
}
