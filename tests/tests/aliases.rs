use tests::prelude::*;
use tests::prelude::assert_eq;

#[derive(Debug, Default, Record)]
struct UserForm {
    #[tag(map = "full_name", json = "display_name")]
    pub name: String,

    #[tag(map = "contact")]
    pub email: String,
}

#[derive(Debug, Default, PartialEq, Record)]
struct User {
    pub full_name: String,
    pub display_name: String,
    pub contact: String,
    pub email: String,
}

fn form() -> UserForm {
    UserForm {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
    }
}

#[test]
fn source_aliases_under_default_tag() {
    let mut dst = User::default();

    assert_ok!(map(&mut dst, &form()));

    assert_eq!(
        dst,
        User {
            full_name: "Ada".to_string(),
            display_name: String::new(),
            contact: "ada@example.com".to_string(),
            email: "ada@example.com".to_string(),
        }
    );
}

#[test]
fn custom_tag_name_selects_other_aliases() {
    let mut dst = User::default();

    assert_ok!(map_with_options(
        &mut dst,
        &form(),
        &MapOptions::new().tag_name("json")
    ));

    assert_eq!(
        dst,
        User {
            full_name: String::new(),
            display_name: "Ada".to_string(),
            contact: String::new(),
            email: "ada@example.com".to_string(),
        }
    );
}

#[test]
fn empty_tag_name_matches_by_name_only() {
    let mut dst = User::default();

    assert_ok!(map_with_options(
        &mut dst,
        &form(),
        &MapOptions::new().tag_name("")
    ));

    assert_eq!(dst.full_name, "");
    assert_eq!(dst.contact, "");
    assert_eq!(dst.email, "ada@example.com");
}

#[derive(Debug, Default, Record)]
struct Renamed {
    #[tag(map = "title")]
    pub heading: String,
    pub title: String,
}

#[derive(Debug, Default, Record)]
struct Article {
    pub title: String,
}

#[test]
fn name_match_wins_over_alias() {
    let src = Renamed {
        heading: "by alias".to_string(),
        title: "by name".to_string(),
    };
    let mut dst = Article::default();

    assert_ok!(map(&mut dst, &src));
    assert_eq!(dst.title, "by name");
}

#[derive(Debug, Default, Record)]
struct DuplicateAlias {
    #[tag(map = "title")]
    pub first: String,
    #[tag(map = "title")]
    pub second: String,
}

#[test]
fn later_duplicate_alias_wins() {
    let src = DuplicateAlias {
        first: "first".to_string(),
        second: "second".to_string(),
    };
    let mut dst = Article::default();

    assert_ok!(map(&mut dst, &src));
    assert_eq!(dst.title, "second");
}

#[derive(Debug, Default, Record)]
struct TaggedDestination {
    #[tag(map = "name")]
    pub label: String,
}

#[test]
fn destination_tags_are_not_used_for_matching() {
    let mut dst = TaggedDestination {
        label: "unchanged".to_string(),
    };

    assert_ok!(map(&mut dst, &form()));
    assert_eq!(dst.label, "unchanged");
}

#[test]
fn unmatched_fields_keep_their_values() {
    let mut dst = User {
        display_name: "kept".to_string(),
        ..Default::default()
    };

    assert_ok!(map(&mut dst, &form()));
    assert_eq!(dst.display_name, "kept");
}
