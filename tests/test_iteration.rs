use optio::{none, some, Maybe, Optional};
use pretty_assertions::assert_eq;

#[test]
fn test_some_for_each() {
    let a = some(1);
    let mut loop_count = 0;
    for v in &a {
        assert_eq!(*v, 1);
        loop_count += 1;
    }
    assert_eq!(loop_count, 1);
}

#[test]
fn test_none_for_each() {
    let a: Maybe<i32> = none();
    let mut loop_count = 0;
    for _ in &a {
        loop_count += 1;
    }
    assert_eq!(loop_count, 0);
}

#[test]
fn test_iteration_is_restartable() {
    let a = some("once");
    let first: Vec<_> = a.iter().collect();
    let second: Vec<_> = a.iter().collect();
    assert_eq!(first, vec![&"once"]);
    assert_eq!(first, second);

    let b: Maybe<&str> = none();
    assert_eq!(b.iter().count(), 0);
    assert_eq!(b.iter().count(), 0);
}

#[test]
fn test_partially_consumed_iterator_does_not_affect_next() {
    let a = some(3);
    let mut it = a.iter();
    assert_eq!(it.next(), Some(&3));
    assert_eq!(it.next(), None);
    assert_eq!(a.iter().next(), Some(&3));
}

#[test]
fn test_exact_size() {
    assert_eq!(some('x').iter().len(), 1);
    assert_eq!(none::<char>().iter().len(), 0);
}

#[test]
fn test_owning_iteration() {
    let words: Vec<String> = some(String::from("moved")).into_iter().collect();
    assert_eq!(words, vec![String::from("moved")]);

    let flattened: Vec<i32> = vec![some(1), none(), some(3)].into_iter().flatten().collect();
    assert_eq!(flattened, vec![1, 3]);
}
