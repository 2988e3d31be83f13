use tests::prelude::*;
use tests::prelude::assert_eq;

use structmap::Value;

#[derive(Debug, Default, Clone, PartialEq, Record)]
struct Person {
    pub name: String,
    pub email: String,
    pub age: i32,
}

#[derive(Debug, Default, PartialEq, Record)]
struct PersonSummary {
    pub name: String,
    pub age: i64,
    pub active: bool,
}

#[derive(Debug, Default, PartialEq, Record)]
struct LabelledAge {
    pub age: String,
}

fn ada() -> Person {
    Person {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        age: 36,
    }
}

#[test]
fn copies_fields_with_matching_names() {
    setup();

    let mut dst = PersonSummary {
        active: true,
        ..Default::default()
    };

    assert_ok!(map(&mut dst, &ada()));

    assert_eq!(
        dst,
        PersonSummary {
            name: "Ada".to_string(),
            age: 36,
            active: true,
        }
    );
}

#[test]
fn copies_same_type() {
    let src = ada();
    let mut dst = Person::default();

    assert_ok!(map(&mut dst, &src));
    assert_eq!(dst, src);
}

#[test]
fn incompatible_field_leaves_destination_untouched() {
    let mut dst = ada();
    let src = LabelledAge {
        age: "forty".to_string(),
    };

    let err = assert_err!(map(&mut dst, &src));
    assert!(err.is_incompatible_types());
    assert_failure(&err, "age", "incompatible field types: String -> i32");
    assert_eq!(err.src_ty(), "basic::LabelledAge");
    assert_eq!(err.dst_ty(), "basic::Person");
    assert_eq!(
        err.to_string(),
        "cannot map basic::LabelledAge → basic::Person at field \"age\": incompatible field types: String -> i32"
    );

    assert_eq!(dst, ada());
}

#[derive(Debug, Default, Record)]
struct Measurements {
    pub small: i64,
    pub ratio: f64,
    pub count: u32,
}

#[derive(Debug, Default, Record)]
struct CompactMeasurements {
    pub small: u8,
    pub ratio: i32,
    pub count: f32,
}

#[test]
fn numeric_fields_are_cast() {
    let src = Measurements {
        small: 300,
        ratio: 3.9,
        count: 7,
    };
    let mut dst = CompactMeasurements::default();

    assert_ok!(map(&mut dst, &src));

    assert_eq!(dst.small, 44);
    assert_eq!(dst.ratio, 3);
    assert_eq!(dst.count, 7.0);
}

#[derive(Debug, Default, Record)]
struct Account {
    pub name: String,
    secret: String,
}

#[derive(Debug, Default, Record)]
struct AccountView {
    pub name: String,
    pub secret: String,
}

#[test]
fn private_destination_fields_are_preserved() {
    let mut dst = Account {
        name: String::new(),
        secret: "hunter2".to_string(),
    };

    assert_ok!(map(&mut dst, &ada()));

    assert_eq!(dst.name, "Ada");
    assert_eq!(dst.secret, "hunter2");
}

#[test]
fn private_source_fields_are_invisible() {
    let src = Account {
        name: "Ada".to_string(),
        secret: "hunter2".to_string(),
    };
    let mut dst = AccountView {
        name: String::new(),
        secret: "unchanged".to_string(),
    };

    assert_ok!(map(&mut dst, &src));

    assert_eq!(dst.name, "Ada");
    assert_eq!(dst.secret, "unchanged");
}

#[test]
fn source_behind_box_or_option() {
    let mut dst = PersonSummary::default();
    assert_ok!(map(&mut dst, &Box::new(ada())));
    assert_eq!(dst.name, "Ada");

    let mut dst = PersonSummary::default();
    assert_ok!(map(&mut dst, &Some(ada())));
    assert_eq!(dst.age, 36);
}

#[test]
fn destination_behind_option() {
    let mut dst = Some(PersonSummary {
        active: true,
        ..Default::default()
    });

    assert_ok!(map(&mut dst, &ada()));

    assert_eq!(
        dst,
        Some(PersonSummary {
            name: "Ada".to_string(),
            age: 36,
            active: true,
        })
    );
}

#[derive(Debug, Default, Record)]
struct Envelope {
    pub name: String,
    pub payload: Value,
}

#[derive(Debug, Default, Record)]
struct TypedEnvelope {
    pub name: String,
    pub payload: i64,
}

#[test]
fn opaque_destination_accepts_any_value() {
    let src = TypedEnvelope {
        name: "count".to_string(),
        payload: 12,
    };
    let mut dst = Envelope::default();

    assert_ok!(map(&mut dst, &src));

    assert_eq!(dst.name, "count");
    assert_eq!(dst.payload, Value::I64(12));
}

#[test]
fn mapping_twice_gives_the_same_result() {
    let src = ada();
    let mut first = PersonSummary::default();
    let mut second = PersonSummary::default();

    assert_ok!(map(&mut first, &src));
    assert_ok!(map(&mut second, &src));
    assert_ok!(map(&mut second, &src));

    assert_eq!(first, second);
}
