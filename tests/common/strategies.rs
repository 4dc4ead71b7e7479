//! Proptest strategies for registry property tests.

use proptest::collection::{btree_map, vec};
use proptest::prelude::*;
use std::collections::BTreeMap;

/// Handler names: lowercase, kebab-case, never empty
pub fn handler_name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,31}"
}

pub fn description_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 ]{0,63}"
}

/// Distinct names mapped to descriptions
pub fn handler_set_strategy(max: usize) -> impl Strategy<Value = BTreeMap<String, String>> {
    btree_map(handler_name_strategy(), description_strategy(), 0..=max)
}

pub fn namespace_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,62}"
}

/// Names that may or may not be registered
pub fn lookup_names_strategy() -> impl Strategy<Value = Vec<String>> {
    vec(handler_name_strategy(), 1..16)
}
