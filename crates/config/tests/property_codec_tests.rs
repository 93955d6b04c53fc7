//! Property-based tests for the configuration codec.
//!
//! These tests render randomly generated configurations and parse them back,
//! checking that nothing is lost along the way.
//!
//! Test coverage:
//! - Boolean options: arbitrary assignments survive a render/parse cycle
//! - Integer options: the full `u64` range survives
//! - Repeated-line and joined-line lists keep their elements and order
//! - Text options keep their value

use proptest::prelude::*;

use apptainer_config::types::Slot;
use apptainer_config::{ApptainerConf, CATALOG, Kind, parse, render};

/// Strategy for generating absolute paths without whitespace or separators.
fn path_strategy() -> impl Strategy<Value = String> {
    "(/[a-z0-9_.-]{1,10}){1,4}"
}

/// Strategy for generating user and group names.
fn name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("root".to_string()),
        Just("apptainer".to_string()),
        "[a-z_][a-z0-9_-]{0,15}",
    ]
}

fn bool_option_count() -> usize {
    CATALOG.iter().filter(|spec| spec.kind == Kind::Bool).count()
}

fn uint_option_count() -> usize {
    CATALOG.iter().filter(|spec| spec.kind == Kind::Uint).count()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_boolean_options_round_trip(
        values in prop::collection::vec(any::<bool>(), bool_option_count())
    ) {
        let mut conf = ApptainerConf::default();
        let mut values = values.into_iter();
        for spec in CATALOG {
            if let Slot::Bool(slot) = spec.slot(&mut conf) {
                *slot = values.next().unwrap();
            }
        }

        let parsed = parse(&render(&conf)).unwrap();
        prop_assert_eq!(parsed.config, conf);
    }

    #[test]
    fn prop_integer_options_round_trip(
        values in prop::collection::vec(any::<u64>(), uint_option_count())
    ) {
        let mut conf = ApptainerConf::default();
        let mut values = values.into_iter();
        for spec in CATALOG {
            if let Slot::Uint(slot) = spec.slot(&mut conf) {
                *slot = values.next().unwrap();
            }
        }

        let parsed = parse(&render(&conf)).unwrap();
        prop_assert_eq!(parsed.config, conf);
    }

    #[test]
    fn prop_bind_paths_round_trip_in_order(
        paths in prop::collection::vec(path_strategy(), 0..6)
    ) {
        let mut conf = ApptainerConf::default();
        conf.bind_path = paths;

        // No lines at all reads back as the default bind paths.
        let parsed = parse(&render(&conf)).unwrap();
        if conf.bind_path.is_empty() {
            prop_assert_eq!(parsed.config.bind_path, ApptainerConf::default().bind_path);
        } else {
            prop_assert_eq!(parsed.config.bind_path, conf.bind_path);
        }
    }

    #[test]
    fn prop_joined_lists_round_trip(
        owners in prop::collection::vec(name_strategy(), 0..5),
        groups in prop::collection::vec(name_strategy(), 0..5),
        paths in prop::collection::vec(path_strategy(), 0..5),
    ) {
        let mut conf = ApptainerConf::default();
        conf.limit_container_owners = owners;
        conf.limit_container_groups = groups;
        conf.limit_container_paths = paths;

        let parsed = parse(&render(&conf)).unwrap();
        prop_assert_eq!(parsed.config, conf);
    }

    #[test]
    fn prop_text_options_round_trip(
        driver in "[A-Za-z0-9_.-]{0,16}",
        mem in "[0-9]{1,4}[KMG]?",
        cni in path_strategy(),
    ) {
        let mut conf = ApptainerConf::default();
        conf.image_driver = driver;
        conf.mksquashfs_mem = mem;
        conf.cni_plugin_path = cni;

        let parsed = parse(&render(&conf)).unwrap();
        prop_assert_eq!(parsed.config, conf);
    }
}
