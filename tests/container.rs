mod common;

use rusqlite::types::{Type, Value};
use serde::{Deserialize, Serialize};
use structenum::{Enum, EnumError, Enummer, FromEnum};

use common::*;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct CompositeInt {
    test_type: Box<TestTypeInt>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct CompositeString {
    test_type: TestState,
    priority: Enum<i32>,
}

#[test]
fn value_and_text() {
    let e = Enum::new(1i64);
    assert_eq!(*e.value(), 1);
    assert_eq!(e.to_string(), "1");
    assert!(e.equal_value(&1));
    assert!(!e.equal_value(&2));

    let s = passed();
    assert_eq!(s.value(), "passed");
    assert_eq!(s.text(), "passed");
    assert_eq!(format!("{s}"), "passed");
    assert!(s.equal_value(&"passed".to_string()));
    assert!(!s.equal_value(&"failed".to_string()));

    let p = Priority::new(3);
    assert_eq!(*p.value(), 3);
    assert_eq!(p.text(), "3");
}

#[test]
fn constant_declaration() {
    const CRITICAL: TestTypeInt = TestTypeInt::new(5);
    assert_eq!(*CRITICAL.value(), 5);
}

#[test]
fn json_literals() {
    assert_eq!(Enum::new(1i64).to_json().expect("json"), b"1");
    assert_eq!(Enum::new("hello".to_string()).to_json().expect("json"), b"\"hello\"");
    assert_eq!(TestTypeInt::new(1).to_json().expect("json"), b"1");
    assert_eq!(passed().to_json().expect("json"), b"\"passed\"");
    assert_eq!(Priority::new(7).to_json().expect("json"), b"7");
}

#[test]
fn json_decoding() {
    assert_eq!(Enum::<i64>::from_json(b"1").expect("decode"), Enum::new(1));
    assert_eq!(TestState::from_json(b"\"passed\"").expect("decode"), passed());
    assert_eq!(Priority::from_json(b"4").expect("decode"), Priority::new(4));
    let boxed: Box<TestTypeInt> = FromEnum::from_json(b"9").expect("decode");
    assert_eq!(*boxed, TestTypeInt::new(9));
}

#[test]
fn json_decoding_failures() {
    let err = TestTypeInt::from_json(b"\"one\"").unwrap_err();
    assert!(matches!(err, EnumError::Json(_)));
    let err = TestState::from_json(b"1").unwrap_err();
    assert!(matches!(err, EnumError::Json(_)));
    let err = TestState::from_json(b"\"unterminated").unwrap_err();
    assert!(format!("{err}").starts_with("enum: json:"));
}

#[test]
fn composite_round_trip() {
    let composite = CompositeInt { test_type: Box::new(TestTypeInt::new(1)) };
    let json = serde_json::to_string(&composite).expect("encode");
    assert_eq!(json, "{\"test_type\":1}");
    let back: CompositeInt = serde_json::from_str(&json).expect("decode");
    assert_eq!(back, composite);

    let composite = CompositeString { test_type: state("hello"), priority: Enum::new(2) };
    let json = serde_json::to_string(&composite).expect("encode");
    assert_eq!(json, "{\"test_type\":\"hello\",\"priority\":2}");
    let back: CompositeString = serde_json::from_str(&json).expect("decode");
    assert_eq!(back, composite);
}

#[test]
fn storage_values() {
    assert_eq!(TestTypeInt::new(1).to_storage_value(), Value::Integer(1));
    assert_eq!(passed().to_storage_value(), Value::Text("passed".to_string()));
    assert_eq!(Priority::new(-2).to_storage_value(), Value::Integer(-2));

    let e = Enum::<i64>::from_storage_value(&Value::Integer(1)).expect("scan");
    assert_eq!(e, Enum::new(1));
    let s = TestState::from_storage_value(&Value::Text("hello".into())).expect("scan");
    assert_eq!(s, state("hello"));
    let p = Priority::from_storage_value(&Value::Integer(8)).expect("scan");
    assert_eq!(p, Priority::new(8));
}

#[test]
fn storage_type_mismatch() {
    match Enum::<String>::from_storage_value(&Value::Integer(1)) {
        Err(EnumError::TypeMismatch { expected, found }) => {
            assert_eq!(expected, "String");
            assert_eq!(found, Type::Integer);
        }
        other => panic!("expected a type mismatch, got {other:?}"),
    }
    let err = TestTypeInt::from_storage_value(&Value::Text("1".into())).unwrap_err();
    assert!(matches!(err, EnumError::TypeMismatch { expected: "i64", .. }));
    let err = TestTypeInt::from_storage_value(&Value::Null).unwrap_err();
    assert!(matches!(err, EnumError::TypeMismatch { found: Type::Null, .. }));
    let err = Severity::from_storage_value(&Value::Integer(300)).unwrap_err();
    assert!(matches!(err, EnumError::OutOfRange { expected: "i8", value: 300 }));
}
