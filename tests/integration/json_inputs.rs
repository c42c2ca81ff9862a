//! JSON documents compared through the dynamic checker.

use listeq::{
    check_values, list_equals, CheckError, Checker, ElemType, Side, Value, LIST_EQUALS,
};
use std::fs;
use tempfile::TempDir;

fn load(dir: &TempDir, name: &str, contents: &str) -> Value {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("Failed to write fixture");
    let text = fs::read_to_string(&path).expect("Failed to read fixture");
    Value::from_json_str(&text).expect("Invalid JSON")
}

#[test]
fn test_identical_documents() {
    let dir = TempDir::new().unwrap();
    let a = load(&dir, "a.json", r#"["alpha", "beta", "gamma"]"#);
    let b = load(&dir, "b.json", "[\n  \"alpha\",\n  \"beta\",\n  \"gamma\"\n]");
    assert_eq!(list_equals(&a, &b), (true, String::new()));
}

#[test]
fn test_documents_with_changes() {
    let dir = TempDir::new().unwrap();
    let obtained = load(&dir, "obtained.json", r#"["A", "Z", "C", "Y", "E"]"#);
    let expected = load(&dir, "expected.json", r#"["A", "B", "C", "D", "E"]"#);
    let (equal, message) = LIST_EQUALS.check(&[obtained, expected], &[]);
    assert!(!equal);
    assert_eq!(
        message,
        "difference:\n    - at index 1: obtained element \"Z\", expected \"B\"\n    - at index 3: obtained element \"Y\", expected \"D\""
    );
}

#[test]
fn test_object_is_not_a_list() {
    let dir = TempDir::new().unwrap();
    let obtained = load(&dir, "obtained.json", "[1, 2]");
    let expected = load(&dir, "expected.json", r#"{"items": [1, 2]}"#);
    assert_eq!(
        check_values(&obtained, &expected).unwrap_err(),
        CheckError::NotASequence(Side::Expected)
    );
}

#[test]
fn test_int_and_float_arrays_differ_in_type() {
    let dir = TempDir::new().unwrap();
    let obtained = load(&dir, "obtained.json", "[1, 2]");
    let expected = load(&dir, "expected.json", "[1.0, 2.0]");
    assert_eq!(
        list_equals(&obtained, &expected),
        (false, "element types are not equal".to_string())
    );
}

#[test]
fn test_mixed_arrays_compare_as_untyped() {
    let dir = TempDir::new().unwrap();
    let obtained = load(&dir, "obtained.json", r#"[1, "two", null, true]"#);
    let expected = load(&dir, "expected.json", r#"[1, "two", false]"#);
    assert_eq!(obtained.as_list().unwrap().elem_type(), &ElemType::Any);
    assert_eq!(
        list_equals(&obtained, &expected),
        (
            false,
            "difference:\n    - at index 2: unexpected element null\n    - at index 2: obtained element true, expected false"
                .to_string()
        )
    );
}

#[test]
fn test_nested_arrays_are_not_comparable() {
    let dir = TempDir::new().unwrap();
    let obtained = load(&dir, "obtained.json", "[[1], [2]]");
    let expected = load(&dir, "expected.json", "[[1], [3]]");
    assert_eq!(
        list_equals(&obtained, &expected),
        (false, "element type is not comparable".to_string())
    );
}

#[test]
fn test_large_documents() {
    let dir = TempDir::new().unwrap();
    let items: Vec<String> = (0..2_000).map(|i| i.to_string()).collect();
    let text = format!("[{}]", items.join(","));
    let a = load(&dir, "a.json", &text);
    let b = load(&dir, "b.json", &text);
    assert!(list_equals(&a, &b).0);
}
