//! Property-based tests for display field resolution.
//!
//! These tests verify that universal properties hold across all valid inputs,
//! using the `proptest` crate for random test case generation.

use paydeck_core::holders::AccountHolderProfile;
use paydeck_core::{resolve_field, DisplayFields, FallbackCatalog};
use proptest::prelude::*;

// =============================================================================
// Generators
// =============================================================================

/// Generates one candidate: absent, present-but-empty, or a real value.
fn arb_candidate() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        "[a-zA-Z0-9 ]{1,12}".prop_map(Some),
    ]
}

/// Generates a candidate list of up to six entries.
fn arb_candidates() -> impl Strategy<Value = Vec<Option<String>>> {
    proptest::collection::vec(arb_candidate(), 0..=6)
}

/// Generates a candidate list with no usable value in it.
fn arb_blank_candidates() -> impl Strategy<Value = Vec<Option<String>>> {
    proptest::collection::vec(
        prop_oneof![Just(None), Just(Some(String::new()))],
        0..=6,
    )
}

/// Generates an optional profile field.
fn arb_field() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        "[a-zA-Z0-9 ]{1,16}".prop_map(Some),
    ]
}

/// Generates a profile with any mix of absent, empty, and real fields.
fn arb_profile() -> impl Strategy<Value = AccountHolderProfile> {
    (
        arb_field(), // legal_entity_id
        arb_field(), // description
        arb_field(), // legal_name
        arb_field(), // country
        arb_field(), // country_code
        arb_field(), // status
        arb_field(), // verification_status
    )
        .prop_map(
            |(
                legal_entity_id,
                description,
                legal_name,
                country,
                country_code,
                status,
                verification_status,
            )| {
                AccountHolderProfile {
                    legal_entity_id,
                    description,
                    legal_name,
                    country,
                    country_code,
                    status,
                    verification_status,
                    ..Default::default()
                }
            },
        )
}

fn as_refs(candidates: &[Option<String>]) -> impl Iterator<Item = Option<&str>> {
    candidates.iter().map(|candidate| candidate.as_deref())
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// **Feature: field-resolution, Property 1: First usable candidate wins**
    ///
    /// Whenever any candidate is present and non-empty, the resolver must
    /// return the first such candidate, in list order.
    #[test]
    fn prop_first_usable_candidate_wins(
        candidates in arb_candidates(),
        fallback in "[a-zA-Z]{1,10}"
    ) {
        let resolved = resolve_field(as_refs(&candidates), &fallback);

        let expected = candidates
            .iter()
            .flatten()
            .find(|value| !value.is_empty());

        if let Some(expected) = expected {
            prop_assert_eq!(&resolved, expected);
        }
    }

    /// **Feature: field-resolution, Property 2: Fallback on blank input**
    ///
    /// When every candidate is absent or empty, the resolver must return
    /// the fallback exactly, including an empty fallback.
    #[test]
    fn prop_fallback_when_no_candidate_qualifies(
        candidates in arb_blank_candidates(),
        fallback in "[a-zA-Z -]{0,10}"
    ) {
        let resolved = resolve_field(as_refs(&candidates), &fallback);
        prop_assert_eq!(resolved, fallback);
    }

    /// **Feature: field-resolution, Property 3: Candidates after the winner
    /// are ignored**
    ///
    /// Appending arbitrary extra candidates never changes the result once
    /// a usable candidate exists in the prefix.
    #[test]
    fn prop_candidates_after_winner_are_ignored(
        candidates in arb_candidates(),
        suffix in arb_candidates(),
        fallback in "[a-zA-Z]{1,10}"
    ) {
        let has_winner = candidates
            .iter()
            .flatten()
            .any(|value| !value.is_empty());
        prop_assume!(has_winner);

        let without_suffix = resolve_field(as_refs(&candidates), &fallback);
        let mut extended = candidates.clone();
        extended.extend(suffix);
        let with_suffix = resolve_field(as_refs(&extended), &fallback);

        prop_assert_eq!(without_suffix, with_suffix);
    }

    /// **Feature: field-resolution, Property 4: Resolution is pure**
    ///
    /// Resolving the same inputs twice yields the same output.
    #[test]
    fn prop_resolution_is_deterministic(
        candidates in arb_candidates(),
        fallback in "[a-zA-Z]{0,10}"
    ) {
        let first = resolve_field(as_refs(&candidates), &fallback);
        let second = resolve_field(as_refs(&candidates), &fallback);
        prop_assert_eq!(first, second);
    }

    /// **Feature: field-resolution, Property 5: Header fields are total**
    ///
    /// For any profile shape, all four display fields resolve to non-empty
    /// strings: real values, catalog fallbacks, or the dash sentinel.
    #[test]
    fn prop_header_fields_are_total(
        profile in arb_profile(),
        requested_id in proptest::option::of("[A-Z0-9]{1,8}")
    ) {
        let fields = DisplayFields::resolve(
            Some(&profile),
            requested_id.as_deref(),
            &FallbackCatalog::default(),
        );

        prop_assert!(!fields.id.is_empty());
        prop_assert!(!fields.name.is_empty());
        prop_assert!(!fields.country.is_empty());
        prop_assert!(!fields.status.is_empty());
    }
}
