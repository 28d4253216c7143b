//! Property-based tests for the differ's invariants.

use confdrift::{
    ChangeRecord, Diff, Mapping, Value,
    diff::{diff, diff_values},
    patch,
};
use proptest::prelude::*;

fn key_strategy() -> impl Strategy<Value = String> {
    // Small alphabet so keys collide across documents; '/' and '~' exercise escaping
    "[ab/~0]{0,2}"
}

fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-3i64..3).prop_map(Value::from),
        (-1.0e6f64..1.0e6).prop_map(Value::Number),
        "[xy]{0,2}".prop_map(Value::from),
    ]
}

fn value_strategy() -> impl Strategy<Value = Value> {
    scalar_strategy().prop_recursive(4, 48, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::List),
            prop::collection::vec((key_strategy(), inner), 0..4)
                .prop_map(|entries| Value::Mapping(entries.into_iter().collect())),
        ]
    })
}

fn document_strategy() -> impl Strategy<Value = Option<Value>> {
    prop::option::weighted(0.9, value_strategy())
}

/// Records keyed by path; a path never appears twice in one diff.
fn by_path(changes: Diff) -> Vec<ChangeRecord> {
    let mut changes = changes.into_inner();
    changes.sort_by_key(|change| change.path().to_string());
    changes
}

fn reverse_mappings(value: &Value) -> Value {
    match value {
        Value::Mapping(map) => {
            let mut entries: Vec<(String, Value)> = map
                .iter()
                .map(|(key, item)| (key.clone(), reverse_mappings(item)))
                .collect();
            entries.reverse();
            Value::Mapping(entries.into_iter().collect::<Mapping>())
        }
        Value::List(items) => Value::List(items.iter().map(reverse_mappings).collect()),
        scalar => scalar.clone(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn diffing_a_value_against_itself_is_empty(value in value_strategy()) {
        prop_assert!(diff_values(&value, &value.clone()).is_empty());
    }

    #[test]
    fn applying_the_diff_reconstructs_new(old in document_strategy(), new in document_strategy()) {
        let changes = diff(old.as_ref(), new.as_ref());

        let rebuilt = patch::apply(old.as_ref(), &changes);

        prop_assert_eq!(rebuilt, Ok(new));
    }

    #[test]
    fn swapping_inputs_inverts_every_record(old in document_strategy(), new in document_strategy()) {
        let forward = diff(old.as_ref(), new.as_ref());
        let backward = diff(new.as_ref(), old.as_ref());

        prop_assert_eq!(by_path(forward.invert()), by_path(backward));
    }

    #[test]
    fn mapping_key_order_does_not_matter(old in value_strategy(), new in value_strategy()) {
        let reordered_old = reverse_mappings(&old);
        let reordered_new = reverse_mappings(&new);

        prop_assert_eq!(
            by_path(diff_values(&old, &new)),
            by_path(diff_values(&reordered_old, &reordered_new))
        );
    }

    #[test]
    fn reordering_a_list_is_a_change(a in scalar_strategy(), b in scalar_strategy()) {
        prop_assume!(a != b);

        let old = Value::List(vec![a.clone(), b.clone()]);
        let new = Value::List(vec![b, a]);

        prop_assert_eq!(diff_values(&old, &new).len(), 2);
    }

    #[test]
    fn diff_output_is_deterministic(old in value_strategy(), new in value_strategy()) {
        let first = serde_json::to_string(&diff_values(&old, &new)).unwrap();
        let second = serde_json::to_string(&diff_values(&old, &new)).unwrap();

        prop_assert_eq!(first, second);
    }
}
