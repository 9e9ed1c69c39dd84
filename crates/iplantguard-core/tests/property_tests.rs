//! Property-based tests for page behaviors
//!
//! Uses proptest to check the validator contract, file name shortening and
//! the single-open accordion invariant over arbitrary inputs.

use iplantguard_core::camera_address::{self, CameraAddress};
use iplantguard_core::faq::FaqAccordion;
use iplantguard_core::photo::shorten_file_name;
use iplantguard_core::theme::{MemoryThemeStore, Theme, ThemePreference, ThemeStore};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Well-formed `a.b.c.d:port` strings
fn address_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}:[0-9]{1,8}")
        .expect("valid regex")
}

/// Sequences of header clicks, some outside the accordion
fn clicks_strategy() -> impl Strategy<Value = (usize, Vec<usize>)> {
    (1..8usize).prop_flat_map(|len| (Just(len), prop::collection::vec(0..len + 2, 0..64)))
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #[test]
    fn prop_well_formed_addresses_validate(addr in address_strategy()) {
        prop_assert!(camera_address::validate(&addr));
        let parsed = CameraAddress::parse(&addr).unwrap();
        prop_assert_eq!(parsed.to_string(), addr);
    }

    #[test]
    fn prop_extra_characters_invalidate(addr in address_strategy(), extra in "[ a-z/#]") {
        let leading = format!("{extra}{addr}");
        let trailing = format!("{addr}{extra}");
        prop_assert!(!camera_address::validate(&leading));
        prop_assert!(!camera_address::validate(&trailing));
    }

    #[test]
    fn prop_missing_colon_invalidates(addr in address_strategy()) {
        let without_colon = addr.replace(':', "");
        prop_assert!(!camera_address::validate(&without_colon));
    }

    #[test]
    fn prop_validate_never_panics(input in ".{0,40}") {
        let _ = camera_address::validate(&input);
    }

    #[test]
    fn prop_short_names_pass_through(name in "[a-z_.]{0,15}") {
        prop_assert_eq!(shorten_file_name(&name), name);
    }

    #[test]
    fn prop_long_names_are_twelve_plus_ellipsis(name in "[a-zA-Z0-9_.ñ]{16,60}") {
        let short = shorten_file_name(&name);
        prop_assert!(short.ends_with("..."));
        prop_assert_eq!(short.chars().count(), 15);
        let head: String = name.chars().take(12).collect();
        prop_assert!(short.starts_with(&head));
    }

    #[test]
    fn prop_at_most_one_panel_open((len, clicks) in clicks_strategy()) {
        let mut faq = FaqAccordion::new(len);
        for index in clicks {
            faq.toggle(index);
            let visible = (0..len).filter(|&i| faq.is_open(i)).count();
            prop_assert!(visible <= 1);
            prop_assert_eq!(visible, faq.open_count());
        }
    }

    #[test]
    fn prop_double_toggle_restores_theme(start_dark in any::<bool>()) {
        let start = if start_dark { Theme::Dark } else { Theme::Light };
        let mut pref = ThemePreference::new(MemoryThemeStore::with_value(start.as_str()));
        pref.toggle_theme().unwrap();
        pref.toggle_theme().unwrap();
        prop_assert_eq!(pref.current(), start);
        prop_assert_eq!(pref.store().load(), Some(start.as_str().to_string()));
    }
}
