mod common;

use origin_gatekeeper::{AllowList, Decision, is_allowed, normalize};
use common::builders::{gatekeeper, get};
use proptest::prelude::*;

fn label_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9]([a-z0-9-]{0,10}[a-z0-9])?").unwrap()
}

fn host_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(label_strategy(), 1..4).prop_map(|labels| labels.join("."))
}

fn scheme_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(""), Just("http://"), Just("https://")]
}

fn slash_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(""), Just("/")]
}

proptest! {
    #[test]
    fn exact_pattern_matches_iff_normalized_forms_are_equal(
        origin_host in host_strategy(),
        pattern_host in host_strategy(),
        scheme in scheme_strategy(),
        slash in slash_strategy(),
    ) {
        let origin = format!("{scheme}{origin_host}{slash}");

        prop_assert_eq!(
            is_allowed(&origin, [pattern_host.as_str()]),
            normalize(&origin) == normalize(&pattern_host)
        );
    }

    #[test]
    fn wildcard_matches_any_labels_before_suffix(
        prefix in host_strategy(),
        suffix in host_strategy(),
        scheme in scheme_strategy(),
        slash in slash_strategy(),
    ) {
        let pattern = format!("*.{suffix}");
        let origin = format!("{scheme}{prefix}.{suffix}{slash}");

        prop_assert!(is_allowed(&origin, [pattern.as_str()]));
    }

    #[test]
    fn wildcard_never_matches_its_apex(suffix in host_strategy(), scheme in scheme_strategy()) {
        let pattern = format!("*.{suffix}");
        let origin = format!("{scheme}{suffix}");

        prop_assert!(!is_allowed(&origin, [pattern.as_str()]));
    }

    #[test]
    fn wildcard_requires_dot_boundary(
        glued in label_strategy(),
        suffix in host_strategy(),
    ) {
        let pattern = format!("*.{suffix}");
        let origin = format!("https://{glued}{suffix}");

        prop_assert!(!is_allowed(&origin, [pattern.as_str()]));
    }

    #[test]
    fn normalization_is_idempotent(
        host in host_strategy(),
        scheme in scheme_strategy(),
        slash in slash_strategy(),
    ) {
        let once = normalize(&format!("{scheme}{host}{slash}")).to_string();

        prop_assert_eq!(normalize(&once), once.as_str());
        prop_assert_eq!(once, host);
    }

    #[test]
    fn empty_allow_list_forbids_every_origin(host in host_strategy(), scheme in scheme_strategy()) {
        let origin = format!("{scheme}{host}");
        let gatekeeper = gatekeeper().build();

        prop_assert!(!AllowList::empty().is_allowed(&origin));
        prop_assert!(
            matches!(get().origin(origin.as_str()).check(&gatekeeper), Decision::Forbidden(_)),
            "expected forbidden decision"
        );
    }
}
