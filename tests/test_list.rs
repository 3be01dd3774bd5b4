use basetypes::types::list::{List, ListError};

#[derive(Debug, Clone, PartialEq)]
struct Point {
    x: i32,
    tags: Vec<String>,
}

fn point(x: i32, tag: &str) -> Point {
    Point { x, tags: vec![String::from(tag)] }
}

#[test]
fn test_empty() {
    let list: List<String> = List::new();
    assert_eq!(list.len(), 0);
    assert!(list.is_empty());
    assert!(!list.contains(&String::from("a")));
    assert_eq!(list.get_index(&String::from("a")), None);
}

#[test]
fn test_duplicates_and_first_match_removal() {
    let mut list = List::new();
    list.insert("A");
    list.insert("B");
    list.insert("A");

    assert_eq!(list.len(), 3);
    assert_eq!(*list.get(0), "A");
    assert_eq!(*list.get(2), "A");
    assert_eq!(list.get_index(&"A"), Some(0));

    list.remove(&"A");
    assert_eq!(list.as_slice(), &["B", "A"]);
    assert_eq!(list.len(), 2);
}

#[test]
fn test_remove_missing_is_noop() {
    let mut list: List<i32> = vec![1, 2, 3].into();
    list.remove(&9);
    assert_eq!(list.as_slice(), &[1, 2, 3]);
}

/// Equality compares contents, not addresses.
#[test]
fn test_structural_equality() {
    let mut list = List::new();
    list.insert(point(1, "a"));
    list.insert(point(2, "b"));

    let probe = point(2, "b");
    assert!(list.contains(&probe));
    assert_eq!(list.get_index(&probe), Some(1));
    assert!(!list.contains(&point(2, "c")));

    list.remove(&point(1, "a"));
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].x, 2);
}

#[test]
fn test_pop_shifts_down() {
    let mut list: List<char> = "xyz".chars().collect();
    assert_eq!(list.pop(0), 'x');
    assert_eq!(list.as_slice(), &['y', 'z']);
    assert_eq!(*list.get(0), 'y');
    assert_eq!(*list.get(1), 'z');
}

#[test]
fn test_clear() {
    let mut list: List<u32> = vec![4, 5, 6].into();
    list.clear();
    assert_eq!(list.len(), 0);
    for v in [4, 5, 6] {
        assert!(!list.contains(&v));
    }

    let other: List<u32> = vec![4].into();
    assert_eq!(other.len(), 1);
}

#[test]
fn test_last() {
    let mut list: List<&str> = vec!["P", "Q", "R"].into();
    assert_eq!(*list.last(), "R");
    list.insert("S");
    assert_eq!(*list.last(), "S");
}

#[test]
fn test_checked_access() {
    let mut list: List<i32> = vec![10, 20].into();
    assert_eq!(list.try_get(1).ok(), Some(&20));

    match list.try_get(2) {
        Err(ListError::IndexOutOfRange { index, len }) => {
            assert_eq!(index, 2);
            assert_eq!(len, 2);
        }
        Ok(v) => panic!("unexpected value {}", v),
    }
    assert!(list.try_pop(5).is_err());
    assert_eq!(list.len(), 2);

    list.clear();
    assert!(list.try_last().is_err());
}

#[test]
fn test_iteration() {
    let list: List<i32> = (1..=4).collect();
    let doubled: Vec<i32> = list.iter().map(|x| x * 2).collect();
    assert_eq!(doubled, vec![2, 4, 6, 8]);

    let mut sum = 0;
    for v in &list {
        sum += v;
    }
    assert_eq!(sum, 10);
    assert_eq!(list.into_iter().last(), Some(4));
}

#[test]
#[should_panic(expected = "the given index (3) is higher than the length (3)")]
fn test_get_out_of_range() {
    let list: List<i32> = vec![1, 2, 3].into();
    list.get(3);
}

#[test]
#[should_panic(expected = "the given index (0) is higher than the length (0)")]
fn test_last_on_empty() {
    let list: List<i32> = List::new();
    list.last();
}

#[test]
#[should_panic(expected = "the given index (1) is higher than the length (1)")]
fn test_pop_out_of_range() {
    let mut list: List<i32> = vec![1].into();
    list.pop(1);
}

#[test]
#[should_panic(expected = "higher than the length")]
fn test_index_operator_out_of_range() {
    let list: List<i32> = List::default();
    let _v = list[0];
}
