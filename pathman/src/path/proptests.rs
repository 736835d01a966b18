//! Property-based tests for `PATH` composition.

use std::collections::HashSet;
use std::path::Path;

use proptest::prelude::*;

use super::{compose_path, join_path_list, split_path_list};
use crate::managed::{ManagedDirectory, ManagedFolders, Priority};

fn segment() -> impl Strategy<Value = String> {
    "[a-z]{1,6}"
}

fn absolute_dir() -> impl Strategy<Value = String> {
    prop::collection::vec(segment(), 1..4).prop_map(|parts| format!("/{}", parts.join("/")))
}

fn priority() -> impl Strategy<Value = Priority> {
    prop_oneof![Just(Priority::Front), Just(Priority::Back)]
}

/// Distinct managed directories under `/d`, away from the folders under `/m`.
fn managed_dirs() -> impl Strategy<Value = Vec<ManagedDirectory>> {
    prop::collection::vec((absolute_dir(), priority()), 0..6).prop_map(|raw| {
        let mut seen = HashSet::new();
        raw.into_iter()
            .filter(|(p, _)| seen.insert(p.clone()))
            .map(|(p, pr)| ManagedDirectory::new(format!("/d{p}"), pr).unwrap())
            .collect()
    })
}

/// A current `PATH` that mixes foreign entries with managed ones.
fn current_path(dirs: Vec<ManagedDirectory>) -> impl Strategy<Value = (String, Vec<ManagedDirectory>)> {
    let managed: Vec<String> = dirs
        .iter()
        .map(|d| d.path.to_string_lossy().into_owned())
        .chain(["/m/front".to_string(), "/m/back".to_string()])
        .collect();
    let entry = prop_oneof![
        3 => absolute_dir(),
        1 => prop::sample::select(managed),
    ];
    prop::collection::vec(entry, 0..10)
        .prop_map(move |entries| (join_path_list(&entries), dirs.clone()))
}

fn scenario() -> impl Strategy<Value = (String, Vec<ManagedDirectory>)> {
    managed_dirs().prop_flat_map(current_path)
}

fn folders() -> ManagedFolders {
    ManagedFolders::from_base(Path::new("/m")).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        .. ProptestConfig::default()
    })]

    #[test]
    fn composition_is_idempotent((current, dirs) in scenario()) {
        let folders = folders();
        let once = compose_path(&current, &folders, &dirs);
        let twice = compose_path(&once.to_string(), &folders, &dirs);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn managed_locations_appear_exactly_once((current, dirs) in scenario()) {
        let composed = compose_path(&current, &folders(), &dirs);
        let entries = split_path_list(&composed.to_string());
        let mut locations = vec!["/m/front".to_string(), "/m/back".to_string()];
        locations.extend(dirs.iter().map(|d| d.path.to_string_lossy().into_owned()));
        for location in &locations {
            prop_assert_eq!(entries.iter().filter(|e| *e == location).count(), 1);
        }
        prop_assert_eq!(entries.first().map(String::as_str), Some("/m/front"));
        prop_assert_eq!(entries.last().map(String::as_str), Some("/m/back"));
    }

    #[test]
    fn same_priority_order_is_kept((current, dirs) in scenario()) {
        let composed = compose_path(&current, &folders(), &dirs);
        for priority in Priority::ALL {
            let positions: Vec<usize> = dirs
                .iter()
                .filter(|d| d.priority == priority)
                .filter_map(|d| composed.position(&d.path.to_string_lossy()))
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn foreign_entries_keep_first_occurrence_order((current, dirs) in scenario()) {
        let composed = compose_path(&current, &folders(), &dirs);
        let managed = super::managed_locations(&folders(), &dirs);
        let mut seen = HashSet::new();
        let expected: Vec<String> = split_path_list(&current)
            .into_iter()
            .filter(|e| !managed.contains(e) && seen.insert(e.clone()))
            .collect();
        let actual: Vec<String> = composed
            .entries()
            .iter()
            .filter(|e| !managed.contains(*e))
            .cloned()
            .collect();
        prop_assert_eq!(actual, expected);
    }
}
