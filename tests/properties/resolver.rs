//! Property tests for config path resolution.

use std::collections::HashSet;
use std::path::PathBuf;

use proptest::prelude::*;

use ado::config::PathResolver;
use tempfile::TempDir;

fn segment() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_-]{0,8}"
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: An explicit path is always chosen and always listed first.
    #[test]
    fn property_explicit_path_wins(
        explicit in proptest::collection::vec(segment(), 1..4),
        with_root in any::<bool>(),
    ) {
        let home = TempDir::new().unwrap();
        let explicit: PathBuf = explicit.iter().collect();
        let root = with_root.then(|| home.path().join("xdg"));

        let resolved = PathResolver::new(root, Some(home.path().to_path_buf()))
            .resolve(Some(explicit.as_path()));

        prop_assert_eq!(resolved.path.as_ref(), Some(&explicit));
        prop_assert_eq!(resolved.sources.first(), Some(&explicit));
    }

    /// PROPERTY: Search paths never repeat and are stable across calls.
    #[test]
    fn property_search_paths_unique_and_stable(
        root in proptest::option::of(segment()),
        home in proptest::option::of(segment()),
    ) {
        let resolver = PathResolver::new(
            root.map(|r| PathBuf::from("/").join(r)),
            home.map(|h| PathBuf::from("/home").join(h)),
        );

        let first = resolver.search_paths();
        let second = resolver.search_paths();
        prop_assert_eq!(&first, &second);

        let unique: HashSet<_> = first.iter().collect();
        prop_assert_eq!(unique.len(), first.len());
        prop_assert!(first.len() <= 2);
    }

    /// PROPERTY: Without an explicit path, the chosen file is the first existing source.
    #[test]
    fn property_first_existing_source_is_chosen(
        create_xdg in any::<bool>(),
        create_legacy in any::<bool>(),
    ) {
        let home = TempDir::new().unwrap();
        let root = home.path().join("xdg");
        let xdg = root.join("ado").join("config.yaml");
        let legacy = home.path().join(".ado").join("config.yaml");

        for (create, path) in [(create_xdg, &xdg), (create_legacy, &legacy)] {
            if create {
                std::fs::create_dir_all(path.parent().unwrap()).unwrap();
                std::fs::write(path, "version: 1\n").unwrap();
            }
        }

        let resolved = PathResolver::new(Some(root), Some(home.path().to_path_buf()))
            .resolve(None);

        let expected = if create_xdg {
            Some(xdg.clone())
        } else if create_legacy {
            Some(legacy.clone())
        } else {
            None
        };
        prop_assert_eq!(resolved.path, expected);
        prop_assert_eq!(resolved.sources, vec![xdg, legacy]);
    }
}
