use tests::prelude::*;
use tests::prelude::assert_eq;

use std::error::Error as _;

#[derive(Debug, Default, Clone, Record)]
struct ProfileForm {
    #[mapconv("int")]
    pub age: String,

    #[mapconv("float64")]
    pub score: String,

    #[mapconv("bool")]
    pub active: String,

    #[mapconv("uint8")]
    pub level: String,
}

#[derive(Debug, Default, PartialEq, Record)]
struct Profile {
    pub age: isize,
    pub score: f64,
    pub active: bool,
    pub level: u8,
}

fn form() -> ProfileForm {
    ProfileForm {
        age: "36".to_string(),
        score: "95.5".to_string(),
        active: "true".to_string(),
        level: "7".to_string(),
    }
}

#[test]
fn strings_are_parsed_by_directive() {
    let mut dst = Profile::default();

    assert_ok!(map(&mut dst, &form()));

    assert_eq!(
        dst,
        Profile {
            age: 36,
            score: 95.5,
            active: true,
            level: 7,
        }
    );
}

#[test]
fn parse_failure_reports_text_and_target() {
    let src = ProfileForm {
        age: "abc".to_string(),
        ..form()
    };
    let mut dst = Profile::default();

    let err = assert_err!(map(&mut dst, &src));
    assert!(err.is_conversion_failed());
    assert_failure(
        &err,
        "age",
        "cannot convert \"abc\" to int: invalid digit found in string",
    );
    assert!(err.source().is_some());

    assert_eq!(dst, Profile::default());
}

#[test]
fn empty_text_is_not_a_zero_value() {
    let src = ProfileForm {
        level: String::new(),
        ..form()
    };
    let mut dst = Profile::default();

    let err = assert_err!(map(&mut dst, &src));
    assert_failure(
        &err,
        "level",
        "cannot convert \"\" to uint8: cannot parse integer from empty string",
    );
}

#[test]
fn out_of_range_integer_fails() {
    let src = ProfileForm {
        level: "256".to_string(),
        ..form()
    };
    let mut dst = Profile::default();

    let err = assert_err!(map(&mut dst, &src));
    assert_failure(
        &err,
        "level",
        "cannot convert \"256\" to uint8: number too large to fit in target type",
    );
}

#[test]
fn unsigned_target_rejects_plus_sign() {
    let src = ProfileForm {
        level: "+7".to_string(),
        ..form()
    };
    let mut dst = Profile::default();

    let err = assert_err!(map(&mut dst, &src));
    assert!(err.is_conversion_failed());
    assert_failure(
        &err,
        "level",
        "cannot convert \"+7\" to uint8: unsigned value must not carry a sign",
    );
    assert_eq!(dst, Profile::default());
}

#[test]
fn boolean_spellings() {
    for (text, expect) in [("1", true), ("T", true), ("FALSE", false), ("f", false)] {
        let src = ProfileForm {
            active: text.to_string(),
            ..form()
        };
        let mut dst = Profile::default();

        assert_ok!(map(&mut dst, &src));
        assert_eq!(dst.active, expect, "{text}");
    }
}

#[derive(Debug, Default, Record)]
struct Wider {
    #[mapconv("int32")]
    pub count: String,

    #[mapconv("int16")]
    pub limit: String,
}

#[derive(Debug, Default, Record)]
struct WiderTarget {
    pub count: i64,
    pub limit: Option<i16>,
}

#[test]
fn converted_value_is_assigned_like_any_other() {
    let src = Wider {
        count: "-12".to_string(),
        limit: "40".to_string(),
    };
    let mut dst = WiderTarget::default();

    assert_ok!(map(&mut dst, &src));

    assert_eq!(dst.count, -12);
    assert_eq!(dst.limit, Some(40));
}

#[derive(Debug, Default, Record)]
struct OptionalText {
    #[mapconv("uint")]
    pub port: Option<String>,
}

#[derive(Debug, Default, Record)]
struct Endpoint {
    pub port: usize,
}

#[test]
fn optional_source_text_is_converted() {
    let mut dst = Endpoint::default();

    assert_ok!(map(
        &mut dst,
        &OptionalText {
            port: Some("8080".to_string()),
        }
    ));
    assert_eq!(dst.port, 8080);

    // An absent source leaves the destination alone.
    assert_ok!(map(&mut dst, &OptionalText { port: None }));
    assert_eq!(dst.port, 8080);
}

#[derive(Debug, Default, Record)]
struct Unsupported {
    #[mapconv("decimal")]
    pub price: String,
}

#[derive(Debug, Default, Record)]
struct Priced {
    pub price: f64,
}

#[test]
fn unknown_directive_fails_at_mapping_time() {
    let src = Unsupported {
        price: "1.50".to_string(),
    };
    let mut dst = Priced::default();

    let err = assert_err!(map(&mut dst, &src));
    assert!(err.is_unsupported_conversion());
    assert_failure(&err, "price", "unsupported mapconv target type: decimal");
}

#[derive(Debug, Default, Record)]
struct NumericWithDirective {
    #[mapconv("int")]
    pub count: i64,
}

#[derive(Debug, Default, Record)]
struct Counted {
    pub count: i64,
}

#[test]
fn directive_applies_only_to_text() {
    let mut dst = Counted::default();

    assert_ok!(map(&mut dst, &NumericWithDirective { count: 9 }));
    assert_eq!(dst.count, 9);
}

#[derive(Debug, Default, Record)]
struct Code {
    pub code: String,
}

#[derive(Debug, Default, Record)]
struct CodeWithDirective {
    #[mapconv("int")]
    pub code: String,
}

#[test]
fn directive_on_destination_is_ignored() {
    let mut dst = CodeWithDirective::default();

    assert_ok!(map(
        &mut dst,
        &Code {
            code: "A-1".to_string(),
        }
    ));
    assert_eq!(dst.code, "A-1");
}

#[test]
fn converted_value_must_fit_the_destination() {
    let mut dst = Code::default();

    let err = assert_err!(map(
        &mut dst,
        &CodeWithDirective {
            code: "42".to_string(),
        }
    ));
    assert_failure(&err, "code", "incompatible field types: isize -> String");
}
