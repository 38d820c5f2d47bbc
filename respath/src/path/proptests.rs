//! Property-based tests for resource paths.
//!
//! The normalize module carries its own quick properties; this suite runs
//! the heavier laws over whole paths with many cases.

use super::normalize::PARENT_DIR;
use super::relationship::PathRelationship;
use super::types::ResourcePath;
use crate::platform::PlatformPolicy;
use proptest::prelude::*;

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,8}(\\.[a-z]{1,3})?"
}

fn protocol_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[a-z]{2,6}")
}

fn policy_strategy() -> impl Strategy<Value = PlatformPolicy> {
    prop_oneof![Just(PlatformPolicy::POSIX), Just(PlatformPolicy::WINDOWS)]
}

/// Well-formed raw strings: optional protocol, drive, root, a leading
/// drive-shaped directory, names, file, portion.
fn raw_path_strategy() -> impl Strategy<Value = String> {
    (
        protocol_strategy(),
        prop::option::of("[A-Z]"),
        any::<bool>(),
        prop::option::of("[a-zA-Z]:"),
        prop::collection::vec(name_strategy(), 0..6),
        prop::option::of(name_strategy()),
        prop::option::of(name_strategy()),
    )
        .prop_map(|(protocol, drive, rooted, drive_like, dirs, file, portion)| {
            let mut raw = String::new();
            if let Some(protocol) = protocol {
                raw.push_str(&protocol);
                raw.push_str("://");
            }
            if let Some(drive) = drive {
                raw.push_str(&drive);
                raw.push(':');
            }
            if rooted {
                raw.push('/');
            }
            if let Some(drive_like) = drive_like {
                raw.push_str("./");
                raw.push_str(&drive_like);
                raw.push('/');
            }
            for dir in dirs {
                raw.push_str(&dir);
                raw.push('/');
            }
            if let Some(file) = file {
                raw.push_str(&file);
            }
            if let Some(portion) = portion {
                raw.push('#');
                raw.push_str(&portion);
            }
            raw
        })
}

/// Relative strings that may contain `.` and `..` segments.
fn dotted_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just(".".to_string()),
            Just("..".to_string()),
            name_strategy(),
        ],
        1..10,
    )
    .prop_map(|parts| parts.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // parse(p.to_string()) == p
    #[test]
    fn canonical_string_round_trips(raw in raw_path_strategy(), policy in policy_strategy()) {
        let path = ResourcePath::parse_with(&raw, &policy);
        let again = ResourcePath::parse_with(&path.to_string(), &policy);
        prop_assert_eq!(again, path);
    }

    // Formatting is idempotent
    #[test]
    fn canonical_string_is_fixed_point(raw in raw_path_strategy(), policy in policy_strategy()) {
        let once = ResourcePath::parse_with(&raw, &policy).to_string();
        let twice = ResourcePath::parse_with(&once, &policy).to_string();
        prop_assert_eq!(once, twice);
    }

    // Resolved paths never contain ".."
    #[test]
    fn no_parent_segments_after_parse(raw in dotted_strategy()) {
        let path = ResourcePath::new(&raw);
        prop_assert!(path.directories().iter().all(|d| d != PARENT_DIR));
    }

    // Predicates agree with accessors
    #[test]
    fn predicates_consistent(raw in raw_path_strategy(), policy in policy_strategy()) {
        let path = ResourcePath::parse_with(&raw, &policy);
        prop_assume!(!path.is_bad());
        prop_assert_eq!(path.has_filename(), !path.filename().is_empty());
        prop_assert_eq!(path.has_extension(), !path.extension().is_empty());
        prop_assert_eq!(path.has_portion(), !path.portion().is_empty());
        prop_assert_eq!(path.has_drive(), path.drive().is_some());
        prop_assert!(!path.protocol().is_empty());
    }

    // filename_only + "." + extension == filename
    #[test]
    fn filename_reconstructs(raw in raw_path_strategy()) {
        let path = ResourcePath::new(&raw);
        if path.has_extension() {
            prop_assert_eq!(
                format!("{}.{}", path.filename_only(), path.extension()),
                path.filename()
            );
        } else {
            prop_assert_eq!(path.filename_only(), path.filename());
        }
    }

    // (dir / x).parent() == dir for directory paths
    #[test]
    fn parent_inverts_join_for_directories(raw in raw_path_strategy(), name in name_strategy()) {
        let mut dir = ResourcePath::new(&raw).parent();
        if dir.has_filename() {
            // The parent of an archive entry is the archive; step up once more.
            dir = dir.parent();
        }
        prop_assume!(!dir.is_bad());
        prop_assert!(!dir.has_filename());
        prop_assert_eq!(dir.join(name.as_str()).parent(), dir);
    }

    // Joining never changes protocol, drive or rootedness
    #[test]
    fn join_preserves_root(base in raw_path_strategy(), tail in dotted_strategy()) {
        let base = ResourcePath::new(&base);
        prop_assume!(!base.is_bad());
        let joined = base.join(tail.as_str());
        prop_assert_eq!(joined.protocol(), base.protocol());
        prop_assert_eq!(joined.drive(), base.drive());
        prop_assert_eq!(joined.is_absolute(), base.is_absolute());
    }

    // Equal protocols hash equally
    #[test]
    fn protocol_hash_consistent(a in raw_path_strategy(), b in raw_path_strategy()) {
        let a = ResourcePath::new(&a);
        let b = ResourcePath::new(&b);
        if a.protocol() == b.protocol() {
            prop_assert_eq!(a.protocol_hash(), b.protocol_hash());
        }
    }

    // A path is within each of its ancestors
    #[test]
    fn parent_contains_child(raw in raw_path_strategy()) {
        let path = ResourcePath::new(&raw);
        let parent = path.parent();
        prop_assert!(PathRelationship::contains(&parent, &path));
        prop_assert!(PathRelationship::is_within(&path, &parent));
    }

    // Relationship symmetry
    #[test]
    fn relationship_symmetric(a in raw_path_strategy(), b in raw_path_strategy()) {
        let a = ResourcePath::new(&a);
        let b = ResourcePath::new(&b);
        let is_symmetric = matches!(
            (PathRelationship::between(&a, &b), PathRelationship::between(&b, &a)),
            (PathRelationship::Ancestor, PathRelationship::Descendant)
                | (PathRelationship::Descendant, PathRelationship::Ancestor)
                | (PathRelationship::Same, PathRelationship::Same)
                | (PathRelationship::Unrelated, PathRelationship::Unrelated)
        );
        prop_assert!(is_symmetric);
    }
}
