use tests::prelude::*;
use tests::prelude::assert_eq;

#[derive(Debug, Default, Clone, PartialEq, Record)]
struct Document {
    #[readonly]
    pub id: u64,
    pub title: String,
}

#[derive(Debug, Default, Record)]
struct DocumentInput {
    pub id: u64,
    pub title: String,
}

#[derive(Debug, Default, Record)]
struct TitleInput {
    pub title: String,
}

fn document() -> Document {
    Document {
        id: 7,
        title: "Draft".to_string(),
    }
}

#[test]
fn writing_a_readonly_field_fails() {
    let mut dst = document();

    let err = assert_err!(map(
        &mut dst,
        &DocumentInput {
            id: 8,
            title: "Final".to_string(),
        }
    ));

    assert!(err.is_unsettable_field());
    assert_failure(&err, "id", "destination field cannot be set");
    assert_eq!(dst, document());
}

#[test]
fn unmatched_readonly_field_is_fine() {
    let mut dst = document();

    assert_ok!(map(
        &mut dst,
        &TitleInput {
            title: "Final".to_string(),
        }
    ));

    assert_eq!(dst.id, 7);
    assert_eq!(dst.title, "Final");
}

#[test]
fn readonly_source_fields_can_be_read() {
    let mut dst = DocumentInput::default();

    assert_ok!(map(&mut dst, &document()));

    assert_eq!(dst.id, 7);
    assert_eq!(dst.title, "Draft");
}

#[test]
fn same_type_copy_still_checks_readonly() {
    let mut dst = Document::default();

    let err = assert_err!(map(&mut dst, &document()));
    assert_failure(&err, "id", "destination field cannot be set");
}
