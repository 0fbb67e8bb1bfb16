use std::path::Path;

use pass2csv_core::parser::{NoopDiagnostics, ParseError, ParsedRecord, RecordBuilder};
use rstest::rstest;

fn parse(text: &str) -> Result<ParsedRecord, ParseError> {
    RecordBuilder::default().parse(
        Path::new("/root/.password-store"),
        Path::new("/root/.password-store/web/site.gpg"),
        text,
        &NoopDiagnostics,
    )
}

#[rstest]
#[case("secret123")]
#[case("secret123\n")]
#[case("s3cr3t with spaces\nuser: bob")]
#[case("user: looks-like-a-label\nuser: real")]
#[case("---\n---")]
#[case("autotype: x\nnotes")]
#[case("\n\n\n")]
fn password_is_always_the_first_line(#[case] text: &str) {
    let first = text.split('\n').next().unwrap();
    assert_eq!(parse(text).unwrap().login_password, first);
}

#[rstest]
#[case("pw\n---\nuser: a\nurl: b\nnote")]
#[case("pw\nuser: a\n---\nnote\nautotype: {username} {tab}")]
#[case("pw\nAUTOTYPE: off\n---\n---\nurl: b")]
#[case("pw\nautotype:\n")]
fn excluded_lines_never_reach_the_record(#[case] text: &str) {
    let record = parse(text).unwrap();
    for value in [&record.fields, &record.login_username, &record.login_uri] {
        assert!(!value.contains("---"), "{value:?}");
        assert!(!value.to_lowercase().contains("autotype"), "{value:?}");
    }
}

#[test]
fn second_username_is_discarded_entirely() {
    let record = parse("pw\nusername: first\nsome note\nlogin: second").unwrap();
    assert_eq!(record.login_username, "first");
    assert_eq!(record.fields, "some note");
}

#[test]
fn second_url_is_discarded_entirely() {
    let record = parse("pw\nurl: https://a.example\nurl: https://b.example").unwrap();
    assert_eq!(record.login_uri, "https://a.example");
    assert_eq!(record.fields, "");
}

#[test]
fn unlabeled_metadata_passes_through() {
    let metadata = "  pin: 1234\nsecurity question: blue\n\nrecovery codes:\n  a1 b2 c3  ";
    let record = parse(&format!("pw\n{metadata}\n")).unwrap();
    assert_eq!(record.fields, metadata.trim());
}

#[test]
fn username_wins_over_url_on_the_same_line() {
    // "login" is a username label even when the value looks like a url.
    let record = parse("pw\nlogin: https://x.com").unwrap();
    assert_eq!(record.login_username, "https://x.com");
    assert_eq!(record.login_uri, "");
}

#[test]
fn worked_example() {
    let record = parse("secret123\nurl: https://x.com\nuser: bob\nnotes line").unwrap();
    assert_eq!(record.login_password, "secret123");
    assert_eq!(record.login_uri, "https://x.com");
    assert_eq!(record.login_username, "bob");
    assert_eq!(record.fields, "notes line");
    assert_eq!(record.name, "site");
    assert_eq!(record.folder, "web");
}

#[test]
fn empty_text_is_rejected() {
    assert!(matches!(parse(""), Err(ParseError::EmptyContent(_))));
}

#[test]
fn separator_and_consumed_user_leave_no_fields() {
    let record = parse("pw\n---\nuser: a").unwrap();
    assert_eq!(record.fields, "");
    assert_eq!(record.login_username, "a");
    assert_eq!(record.login_password, "pw");
}

#[test]
fn nested_entry_name_and_folder() {
    let record = RecordBuilder::default()
        .parse(
            Path::new("/store"),
            Path::new("/store/work/email.gpg"),
            "pw",
            &NoopDiagnostics,
        )
        .unwrap();
    assert_eq!(record.name, "email");
    assert_eq!(record.folder, "work");
}
