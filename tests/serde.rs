#![cfg(feature = "serde")]

use ini::Ini;

#[test]
fn serializes_as_list_of_sections() {
    let ini = Ini::parse("[A]\nk = v\n[B]\n");
    let json = serde_json::to_value(&ini).expect("expected model to serialize");

    assert_eq!(
        json,
        serde_json::json!([
            { "name": "A", "entries": [{ "key": "k", "value": "v" }] },
            { "name": "B", "entries": [] },
        ])
    );
}
