use super::*;
use crate::helpers::models::{get_labels, test_marker};

parameterized_test! {can_get_label_for_index, (index, expected), {
    assert_eq!(label_for(index).as_str(), expected);
}}

can_get_label_for_index! {
    case01_first: (0, "A"),
    case02_second: (1, "B"),
    case03_last_single: (25, "Z"),
    case04_first_double: (26, "AA"),
    case05_second_double: (27, "AB"),
    case06_double_z: (51, "AZ"),
    case07_double_b: (52, "BA"),
    case08_last_double: (701, "ZZ"),
    case09_first_triple: (702, "AAA"),
}

parameterized_test! {can_get_index_of_label, (label, expected), {
    assert_eq!(index_of(label), expected);
}}

can_get_index_of_label! {
    case01_first: ("A", Some(0)),
    case02_last_single: ("Z", Some(25)),
    case03_first_double: ("AA", Some(26)),
    case04_last_double: ("ZZ", Some(701)),
    case05_empty: ("", None),
    case06_lowercase: ("a", None),
    case07_digit: ("A1", None),
    case08_space: (" A", None),
}

#[test]
fn can_invert_label_for_index() {
    (0..2000).for_each(|index| {
        assert_eq!(index_of(label_for(index).as_str()), Some(index));
    });
}

#[test]
fn can_relabel_markers_by_position() {
    let markers = vec![test_marker(3, 1., 1., "C"), test_marker(7, 2., 2., "A"), test_marker(9, 3., 3., "Q")];

    let markers = relabel_all(markers);

    assert_eq!(get_labels(&markers), vec!["A", "B", "C"]);
    assert_eq!(markers.iter().map(|marker| marker.id.value()).collect::<Vec<_>>(), vec![3, 7, 9]);
}

#[test]
fn can_relabel_empty_collection() {
    assert!(relabel_all(Vec::new()).is_empty());
}

#[test]
fn can_get_policy_capacity() {
    assert_eq!(LabelPolicy::Extended.capacity(), None);
    assert_eq!(LabelPolicy::Bounded.capacity(), Some(26));
    assert_eq!(LabelPolicy::default(), LabelPolicy::Extended);
}

#[test]
fn can_deserialize_policy() {
    let policy: LabelPolicy = serde_json::from_str("\"bounded\"").unwrap();

    assert_eq!(policy, LabelPolicy::Bounded);
}

#[test]
fn can_compare_label_with_str() {
    let label = Label::from("AB");

    assert_eq!(label, "AB");
    assert_ne!(label, "BA");
    assert_eq!(label.to_string(), "AB");
}
