//! Unit tests for keys, mapping order and serde round trips.

use rstest::rstest;
use serde_json::json;

use super::{Key, Mapping, Value};

#[rstest]
#[case("0", Key::Index(0))]
#[case("42", Key::Index(42))]
#[case("042", Key::Name("042".into()))]
#[case("-1", Key::Name("-1".into()))]
#[case("+1", Key::Name("+1".into()))]
#[case("1.5", Key::Name("1.5".into()))]
#[case("", Key::Name(String::new()))]
#[case("99999999999999999999999", Key::Name("99999999999999999999999".into()))]
fn parses_keys(#[case] segment: &str, #[case] expected: Key) {
    assert_eq!(Key::parse(segment), expected);
    assert_eq!(Key::from(segment.to_owned()), expected);
}

#[test]
fn insert_keeps_position_of_existing_key() {
    let mut mapping = Mapping::new();
    mapping.insert(Key::from("a"), Value::Int(1));
    mapping.insert(Key::from("b"), Value::Int(2));
    let previous = mapping.insert(Key::from("a"), Value::Int(3));

    assert_eq!(previous, Some(Value::Int(1)));
    let keys: Vec<String> = mapping.keys().map(Key::to_string).collect();
    assert_eq!(keys, ["a", "b"]);
}

#[test]
fn remove_preserves_remaining_order() {
    let mut mapping: Mapping = ["x", "y", "z"].into_iter().map(Value::from).collect();
    assert_eq!(mapping.remove(&Key::Index(1)), Some(Value::from("y")));
    let values: Vec<_> = mapping.values().cloned().collect();
    assert_eq!(values, [Value::from("x"), Value::from("z")]);
    assert!(!mapping.is_list());
    assert_eq!(mapping.next_index(), 3);
}

#[test]
fn push_uses_next_free_index() {
    let mut mapping = Mapping::new();
    mapping.insert(Key::Index(5), Value::Null);
    mapping.insert(Key::from("name"), Value::Null);
    assert_eq!(mapping.push(Value::Bool(true)), Key::Index(6));
}

#[test]
fn equality_ignores_order() {
    let left: Mapping = [(Key::from("a"), Value::Int(1)), (Key::from("b"), Value::Int(2))]
        .into_iter()
        .collect();
    let right: Mapping = [(Key::from("b"), Value::Int(2)), (Key::from("a"), Value::Int(1))]
        .into_iter()
        .collect();
    assert_eq!(left, right);
}

#[test]
fn json_arrays_become_positional_mappings() {
    let value = Value::from(json!(["a", {"b": null}]));
    let mapping = value.as_map().cloned().unwrap_or_default();
    assert!(mapping.is_list());
    assert_eq!(mapping.get(&Key::Index(0)), Some(&Value::from("a")));
    assert_eq!(serde_json::Value::from(value), json!(["a", {"b": null}]));
}

#[test]
fn numeric_object_keys_normalise() {
    let value = Value::from(json!({"0": "zero", "name": "n"}));
    let mapping = value.into_map().unwrap_or_default();
    assert!(mapping.contains_key(&Key::Index(0)));
    assert_eq!(
        serde_json::to_value(&mapping).ok(),
        Some(json!({"0": "zero", "name": "n"}))
    );
}

#[test]
fn non_finite_floats_serialise_as_null() {
    assert_eq!(serde_json::Value::from(Value::Float(f64::NAN)), json!(null));
}

#[test]
fn deserialises_nested_json() {
    let parsed: Result<Mapping, _> = serde_json::from_str(r#"{"a": {"b": [1, 2.5, true]}}"#);
    let expected = Mapping::try_from(json!({"a": {"b": [1, 2.5, true]}}));
    assert_eq!(parsed.ok(), expected.ok());
}

#[test]
fn scalar_roots_are_not_mappings() {
    assert!(serde_json::from_str::<Mapping>("123").is_err());
    assert!(Mapping::try_from(json!("text")).is_err());
}

#[test]
fn removing_the_last_index_lowers_next_index() {
    let mut mapping: Mapping = ["x", "y", "z"].into_iter().map(Value::from).collect();
    mapping.insert(Key::Index(10), Value::Null);
    assert_eq!(mapping.next_index(), 11);
    assert_eq!(mapping.remove(&Key::Index(10)), Some(Value::Null));
    assert_eq!(mapping.next_index(), 3);
    assert_eq!(mapping.push(Value::from("w")), Key::Index(3));
}

#[rstest]
#[case(Key::Name("0".into()), Key::Index(0))]
#[case(Key::Name("12".into()), Key::Index(12))]
#[case(Key::Name("012".into()), Key::Name("012".into()))]
#[case(Key::Index(4), Key::Index(4))]
fn inserted_keys_are_stored_normalised(#[case] given: Key, #[case] stored: Key) {
    let mapping: Mapping = [(given.clone(), Value::Int(1))].into_iter().collect();
    let keys: Vec<&Key> = mapping.keys().collect();
    assert_eq!(keys, [&stored]);
    assert!(mapping.contains_key(&given));
    assert_eq!(mapping.get(&stored), Some(&Value::Int(1)));
}

#[test]
fn numeric_names_count_towards_next_index() {
    let mut mapping: Mapping = [(Key::Name("2".into()), Value::Int(1))].into_iter().collect();
    assert_eq!(mapping.push(Value::Int(2)), Key::Index(3));
    assert!(mapping.remove(&Key::Name("2".into())).is_some());
    assert!(!mapping.contains_key(&Key::Index(2)));
}

#[test]
fn large_sequences_decode_and_append_in_linear_time() -> anyhow::Result<()> {
    const LEN: usize = 200_000;
    let text = serde_json::to_string(&(0..LEN).collect::<Vec<_>>())?;
    let started = std::time::Instant::now();

    let mut mapping: Mapping = serde_json::from_str(&text)?;
    let copy = mapping.clone();
    for (_, value) in copy {
        mapping.push(value);
    }

    anyhow::ensure!(mapping.len() == 2 * LEN, "unexpected length {}", mapping.len());
    anyhow::ensure!(mapping.is_list(), "appended keys must stay contiguous");
    anyhow::ensure!(
        started.elapsed() < std::time::Duration::from_secs(20),
        "decoding and appending {LEN} entries took {:?}",
        started.elapsed()
    );
    Ok(())
}
