//! Integration tests for parsing the resource path grammar.
//!
//! Each test parses a string in the `protocol://drive:/dirs/file.ext#portion`
//! form and checks every component, under both platform policies where the
//! results differ.

mod common;

use common::{assert_round_trips, posix, windows};
use respath::{PlatformPolicy, ResourcePath, BAD_PATH};

// =============================================================================
// Reference examples
// =============================================================================

#[test]
fn test_windows_file_path() {
    let path = windows("file://C:/Program Files/Game/Game.exe");

    assert_eq!(path.protocol(), "file");
    assert_eq!(path.drive(), Some("C"));
    assert!(path.is_absolute());
    assert_eq!(path.directories(), ["Program Files", "Game"]);
    assert_eq!(path.filename(), "Game.exe");
    assert_eq!(path.filename_only(), "Game");
    assert_eq!(path.extension(), "exe");
    assert!(!path.has_portion());
    assert_eq!(
        path.os_string_with(&PlatformPolicy::WINDOWS),
        "C:\\Program Files\\Game\\Game.exe"
    );
}

#[test]
fn test_archive_entry_with_drive() {
    let path = windows("zip://C:/Program Files/Game/media.zip#file.nxs");

    assert_eq!(path.protocol(), "zip");
    assert_eq!(path.drive(), Some("C"));
    assert_eq!(path.directories(), ["Program Files", "Game"]);
    assert_eq!(path.filename(), "media.zip");
    assert_eq!(path.portion(), "file.nxs");
    assert_eq!(
        path.os_string_with(&PlatformPolicy::WINDOWS),
        "C:\\Program Files\\Game\\media.zip"
    );
}

#[test]
fn test_relative_archive_entry() {
    let path = posix("zip://media.zip#file.nxs");

    assert_eq!(path.protocol(), "zip");
    assert!(!path.is_absolute());
    assert!(path.directories().is_empty());
    assert_eq!(path.filename(), "media.zip");
    assert_eq!(path.portion(), "file.nxs");
}

#[test]
fn test_posix_absolute_path() {
    let path = posix("file:///home/franky/Desktop/file.nxs");

    assert_eq!(path.protocol(), "file");
    assert!(path.is_absolute());
    assert_eq!(path.drive(), None);
    assert_eq!(path.directories(), ["home", "franky", "Desktop"]);
    assert_eq!(path.filename(), "file.nxs");
    assert_eq!(
        path.os_string_with(&PlatformPolicy::POSIX),
        "/home/franky/Desktop/file.nxs"
    );
}

#[test]
fn test_protocol_only_path() {
    let path = posix("memory://");

    assert_eq!(path.protocol(), "memory");
    assert!(path.is_protocol_only());
    assert!(!path.is_bad());
    assert_eq!(path.to_string(), "memory://");
}

#[test]
fn test_resolution_during_parse() {
    let path = windows("file://C:/Program Files/Game/../OtherGame/Game.exe");
    assert_eq!(path.directories(), ["Program Files", "OtherGame"]);
    assert_eq!(path.directory(0).unwrap(), "OtherGame");
}

// =============================================================================
// Defaults and edge cases
// =============================================================================

#[test]
fn test_missing_protocol_defaults_to_file() {
    assert_eq!(posix("a/b.txt").protocol(), "file");
    assert_eq!(posix("://a/b.txt").protocol(), "file");
}

#[test]
fn test_empty_string_is_bad_path() {
    assert_eq!(posix(""), BAD_PATH);
    assert_eq!(windows(""), BAD_PATH);
    assert!(ResourcePath::new("").is_bad());
}

#[test]
fn test_leading_parent_is_dropped() {
    let path = posix("../../textures/stone.png");
    assert_eq!(path.directories(), ["textures"]);
    assert!(!path.is_absolute());
}

#[test]
fn test_parent_past_root_is_dropped() {
    let path = posix("/a/../../b/c.txt");
    assert_eq!(path.directories(), ["b"]);
    assert!(path.is_absolute());
}

#[test]
fn test_drive_letters_depend_on_policy() {
    let windows_path = windows("D:/saves/slot1.dat");
    let posix_path = posix("D:/saves/slot1.dat");

    assert_eq!(windows_path.drive(), Some("D"));
    assert!(windows_path.is_absolute());

    assert_eq!(posix_path.drive(), None);
    assert!(!posix_path.is_absolute());
    assert_eq!(posix_path.directories(), ["D:", "saves"]);

    // The canonical string keeps the directory from turning into a drive.
    assert_eq!(posix_path.to_string(), "file://./D:/saves/slot1.dat");
    assert_eq!(windows(&posix_path.to_string()).directories(), ["D:", "saves"]);
}

#[test]
fn test_drive_case_preserved() {
    assert_eq!(windows("c:/x").drive(), Some("c"));
}

#[test]
fn test_double_slash_after_letter_is_protocol() {
    let path = windows("C://Games/g.exe");
    assert_eq!(path.protocol(), "C");
    assert_eq!(path.drive(), None);
}

#[test]
fn test_backslash_accepted_under_windows_policy() {
    let path = windows("C:\\Games\\Saves\\slot1.dat");
    assert_eq!(path.directories(), ["Games", "Saves"]);
    assert_eq!(path.to_string(), "file://C:/Games/Saves/slot1.dat");
}

#[test]
fn test_portion_without_filename() {
    let path = posix("zip://#entry.txt");
    assert!(!path.has_filename());
    assert_eq!(path.portion(), "entry.txt");
}

#[test]
fn test_every_example_round_trips() {
    for raw in [
        "file://C:/Program Files/Game/Game.exe",
        "zip://C:/Program Files/Game/media.zip#file.nxs",
        "zip://media.zip#file.nxs",
        "file:///home/franky/Desktop/file.nxs",
        "memory://",
        "a/b/c/",
        "../x/y.z",
        "",
    ] {
        assert_round_trips(&posix(raw), &PlatformPolicy::POSIX);
        assert_round_trips(&windows(raw), &PlatformPolicy::WINDOWS);
    }
}

#[test]
fn test_equality_is_structural() {
    assert_eq!(posix("a/./b/../c.txt"), posix("file://a/c.txt"));
    assert_ne!(posix("a/c.txt"), posix("/a/c.txt"));
    assert_ne!(posix("zip://a.zip"), posix("file://a.zip"));
}
