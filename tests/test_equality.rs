use optio::{none, some, Comparand, Maybe, NoneValue, Optional, SomeValue, NONE};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

#[test]
fn test_equals_some_some() {
    assert!(some(1).equals(&some(1)));
    assert!(!some(1).equals(&some(2)));
}

#[test]
fn test_equals_no_cross_type_coercion() {
    // Dynamic payloads compare by exact variant and value
    let one = some(json!(1));
    assert!(one.equals(&some(json!(1))));
    assert!(!one.equals(&some(json!("1"))));
    assert!(!one.equals(&some(json!(1.0))));
    assert!(!one.equals(&some(json!(true))));
}

#[test]
fn test_equals_some_none() {
    assert!(!some(1).equals(&none()));
    assert!(!none().equals(&some(1)));
    assert!(!some(1).equals(NONE));
}

#[test]
fn test_equals_none_none() {
    assert!(none::<i32>().equals(&none()));
    assert!(none::<i32>().equals(NoneValue));
    assert!(none::<i32>().equals(&NONE));
}

#[test]
fn test_equals_some_raw_value() {
    assert!(some(1).equals_value(&1));
    assert!(!some(1).equals_value(&2));
    assert!(some(1).equals(Comparand::Value(&1)));

    let one = some(json!(1));
    assert!(one.equals_value(&json!(1)));
    assert!(!one.equals_value(&Value::from("1")));
    assert!(!one.equals_value(&Value::from(1.0)));
}

#[test]
fn test_equals_none_raw_value() {
    assert!(!none::<i32>().equals_value(&0));
    // A null payload is still a raw value, not an absent option
    assert!(!none::<Value>().equals_value(&Value::Null));
}

#[test]
fn test_equals_leaf_variants() {
    let leaf = SomeValue::new(5);
    assert!(some(5).equals(&leaf));
    assert!(leaf.equals(&some(5)));
    assert!(!leaf.equals(&none()));
}

#[test]
fn test_equals_is_symmetric_for_options() {
    let cases: Vec<Maybe<i32>> = vec![some(1), some(2), none()];
    for a in &cases {
        for b in &cases {
            assert_eq!(a.equals(b), b.equals(a), "{:?} vs {:?}", a, b);
            assert_eq!(a.equals(b), a == b);
        }
    }
}
