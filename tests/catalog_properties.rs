//! Property tests over the built-in catalog's table laws.

use once_cell::sync::Lazy;
use proptest::prelude::*;

use progression_engine::config::CatalogConfig;
use progression_engine::domain::catalog::EquivalencyResolver;

static RESOLVER: Lazy<EquivalencyResolver> =
    Lazy::new(|| CatalogConfig::builtin().build().unwrap());

/// Round-trip law: if A maps to {B1..Bn}, every Bi maps back to A.
#[test]
fn equivalency_symmetry_holds_for_the_whole_table() {
    let registry = RESOLVER.registry();

    for level in registry.all_levels() {
        for target in registry.programs() {
            if target == level.program() {
                continue;
            }
            for equivalent in RESOLVER.equivalent_levels(level, target) {
                let back = RESOLVER.equivalent_levels(equivalent, level.program());
                assert!(
                    back.contains(&level),
                    "{} ~ {} declared, but the reverse lookup is missing",
                    level.course_code(),
                    equivalent.course_code()
                );
            }
        }
    }
}

proptest! {
    /// canTransferTo agrees with the equivalent set for any target number,
    /// including numbers outside every program's range.
    #[test]
    fn transfer_answers_match_the_equivalent_set(
        level_index in 0usize..64,
        program_index in 0usize..8,
        target_number in -5i32..20,
    ) {
        let registry = RESOLVER.registry();
        let levels: Vec<_> = registry.all_levels().collect();
        let programs: Vec<_> = registry.programs().collect();

        let level = levels[level_index % levels.len()];
        let target = programs[program_index % programs.len()];

        let in_set = RESOLVER
            .equivalent_levels(level, target)
            .iter()
            .any(|l| l.number() == target_number);
        let expected = level.program() != target && in_set;

        prop_assert_eq!(RESOLVER.can_transfer_to(level, target, target_number), expected);
    }

    /// Every course code carries its program as prefix, and numeric levels
    /// round-trip through the zero-padded suffix.
    #[test]
    fn course_codes_are_deterministic(level_index in 0usize..64) {
        let registry = RESOLVER.registry();
        let levels: Vec<_> = registry.all_levels().collect();
        let level = levels[level_index % levels.len()];

        let code = level.course_code();
        let prefix = format!("{}-", level.program());
        prop_assert!(code.as_str().starts_with(&prefix));

        let suffix = &code.as_str()[prefix.len()..];
        match level.short_code() {
            Some(short) => prop_assert_eq!(suffix, short),
            None => {
                prop_assert_eq!(suffix.parse::<i32>().ok(), Some(level.number()));
                prop_assert!(suffix.len() >= 2);
            }
        }
    }
}
