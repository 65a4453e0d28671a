//! End-to-end behavior of parsing and building whole documents.

use ini::{Entry, Ini, ParseError, Section};
use rstest::rstest;

fn shape(ini: &Ini) -> Vec<(&str, Vec<(&str, &str)>)> {
    ini.sections()
        .iter()
        .map(|section| {
            let entries = section
                .entries()
                .iter()
                .map(|entry| (entry.key(), entry.value()))
                .collect();
            (section.name(), entries)
        })
        .collect()
}

#[rstest]
#[case::general(
    "[General]\nName = Test\nValue=42\n",
    vec![("General", vec![("Name", "Test"), ("Value", "42")])]
)]
#[case::blank_lines(
    "   \n[A]\n\n[B]\nx=1\n",
    vec![("A", vec![]), ("B", vec![("x", "1")])]
)]
#[case::orphan(
    "orphan=1\n[A]\nk=v\n",
    vec![("A", vec![("k", "v")])]
)]
#[case::crlf(
    "[A]\r\nk = v\r\n\r\n[B]\r\n",
    vec![("A", vec![("k", "v")]), ("B", vec![])]
)]
#[case::no_trailing_newline(
    "[A]\nk=v",
    vec![("A", vec![("k", "v")])]
)]
#[case::empty_value(
    "[A]\nk =\n",
    vec![("A", vec![("k", "")])]
)]
#[case::empty_header_is_ignored(
    "[A]\na=1\n[]\nb=2\n",
    vec![("A", vec![("a", "1"), ("b", "2")])]
)]
#[case::duplicate_keys_are_kept(
    "[A]\nk=1\nk=2\n",
    vec![("A", vec![("k", "1"), ("k", "2")])]
)]
#[case::duplicate_sections_are_kept(
    "[A]\nk=1\n[A]\nk=2\n",
    vec![("A", vec![("k", "1")]), ("A", vec![("k", "2")])]
)]
#[case::tabs_inside_values(
    "\t[ Tabbed ]\t\n\tkey\t=\ta\tb\t\n",
    vec![("Tabbed", vec![("key", "a\tb")])]
)]
#[case::nothing(
    "",
    vec![]
)]
fn parse(#[case] text: &str, #[case] expected: Vec<(&str, Vec<(&str, &str)>)>) {
    let ini = Ini::parse(text);

    assert_eq!(shape(&ini), expected);
}

#[rstest]
#[case::single("[A]\nk=v\n", "[A]\nk=v\n\n")]
#[case::canonical_spacing("[ A ]\n  k  =  v  \n", "[A]\nk=v\n\n")]
#[case::two_sections("[A]\nk=v\n\n\n[B]\nx=\n", "[A]\nk=v\n\n[B]\nx=\n\n")]
#[case::empty("just text\n", "")]
fn build(#[case] text: &str, #[case] expected: &str) {
    assert_eq!(Ini::parse(text).build(), expected);
}

#[test]
fn build_from_constructed_model() {
    let mut section = Section::new("A").expect("expected hardcoded name to be valid");
    section.push(Entry::new("k", "v").expect("expected hardcoded entry to be valid"));

    let ini: Ini = std::iter::once(section).collect();

    assert_eq!(ini.build(), "[A]\nk=v\n\n");
    assert_eq!(ini.to_string(), ini.build());
}

#[rstest]
#[case::orphan("k=v\n[A]\n", ParseError::OrphanEntry { line: 1 })]
#[case::empty_header("[A]\n\n[  ]\n", ParseError::SectionNameEmpty { line: 3 })]
#[case::empty_key("[A]\n=v\n", ParseError::EmptyKey { line: 2 })]
#[case::no_separator(
    "[A]\r\nk=v\r\nvalue only\r\n",
    ParseError::UnrecognizedLine { line: 3, text: "value only".to_owned() }
)]
#[case::text_before_header(
    "hello\n[A]\n",
    ParseError::UnrecognizedLine { line: 1, text: "hello".to_owned() }
)]
fn strict_rejects(#[case] text: &str, #[case] expected: ParseError) {
    assert_eq!(Ini::parse_strict(text), Err(expected));
}

#[test]
fn strict_accepts_well_formed_text() {
    let text = "\n[General]\nName = Test\n\n[Other]\n";

    assert_eq!(Ini::parse_strict(text), Ok(Ini::parse(text)));
}

#[test]
fn diagnostics_do_not_change_result() {
    let text = "stray\n[A]\nk=v\nstray\n[]\n=x\n";
    let (ini, diagnostics) = Ini::parse_with_diagnostics(text);

    assert_eq!(ini, Ini::parse(text));
    assert_eq!(diagnostics.len(), 4);
    assert_eq!(
        diagnostics[0].to_string(),
        "line 1: expected `[section]` or `key = value`, found \"stray\""
    );
}

#[test]
fn lookup_after_parse() {
    let ini = Ini::parse("[Window]\nwidth = 640\nheight = 480\n[Audio]\nvolume=\n");

    let window = ini.find_section("Window").expect("expected section Window");
    assert_eq!(window.get("width"), Some("640"));
    assert_eq!(window.get("depth"), None);

    let audio = ini.find_section("Audio").expect("expected section Audio");
    assert_eq!(audio.get("volume"), Some(""));

    assert!(ini.find_section("window").is_none());
}
