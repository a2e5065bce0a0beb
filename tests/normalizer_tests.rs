use chat_relay::services::normalizer::normalize;

#[test]
fn test_plain_text_is_only_trimmed() {
    for s in [
        "Plain sentence.",
        "  padded on both sides  ",
        "multi\nline reply",
        "\tTabs and 123 numbers mixed in.\n",
        "",
    ] {
        assert_eq!(normalize(s), s.trim(), "input: {s:?}");
    }
}

#[test]
fn test_reply_field_is_unwrapped_and_unescaped() {
    assert_eq!(normalize(r#"{"reply":"Hello\nWorld"}"#), "Hello\nWorld");
}

#[test]
fn test_quoted_string_is_unwrapped() {
    assert_eq!(normalize(r#""Hi there""#), "Hi there");
}

#[test]
fn test_message_field_is_used_when_reply_missing() {
    assert_eq!(normalize(r#"{"message":"From message","extra":1}"#), "From message");
    assert_eq!(normalize(r#"{"reply":null,"message":"fallback"}"#), "fallback");
    assert_eq!(normalize(r#"{"message":"second","reply":"first"}"#), "first");
}

#[test]
fn test_unknown_object_joins_values_in_key_order() {
    assert_eq!(normalize(r#"{"a":"foo","b":"bar"}"#), "foo bar");
    assert_eq!(normalize(r#"{"z":"last","a":"first"}"#), "last first");
}

#[test]
fn test_nested_values_are_flattened() {
    assert_eq!(
        normalize(r#"{"title":"Result","count":2,"tags":["x","y"],"done":true,"note":null}"#),
        "Result 2 x y true"
    );
}

#[test]
fn test_top_level_array_joins_elements() {
    assert_eq!(normalize(r#"["Hello","World"]"#), "Hello World");
    assert_eq!(normalize(r#"[{"reply":"x"}]"#), "x");
    assert_eq!(normalize(r#"[["a","b"],"c"]"#), "a b c");
}

#[test]
fn test_array_valued_reply_joins_elements() {
    assert_eq!(normalize(r#"{"reply":["a","b"]}"#), "a b");
    assert_eq!(normalize(r#"{"message":["Line one\nLine two","!"]}"#), "Line one\nLine two !");
}

#[test]
fn test_empty_reply_falls_through_to_message() {
    assert_eq!(normalize(r#"{"reply":"","message":"Hi"}"#), "Hi");
    assert_eq!(normalize(r#"{"reply":"","message":""}"#), "");
    assert_eq!(normalize(r#"{"reply":"","other":"kept"}"#), "kept");
}

#[test]
fn test_join_follows_document_key_order() {
    // Integer-like keys are not reordered.
    assert_eq!(normalize(r#"{"2":"b","1":"a"}"#), "b a");
}

#[test]
fn test_scalars_are_coerced() {
    assert_eq!(normalize("42"), "42");
    assert_eq!(normalize("true"), "true");
    assert_eq!(normalize("null"), "");
    assert_eq!(normalize("  null  "), "");
}

#[test]
fn test_malformed_json_is_stripped_of_wrapping() {
    assert_eq!(normalize(r#"{"reply": "unterminated"#), r#""reply": "unterminated"#);
    assert_eq!(normalize("[[Some text]]"), "Some text");
    assert_eq!(normalize("{Some text"), "Some text");
}

#[test]
fn test_literal_escapes_are_unescaped() {
    assert_eq!(normalize(r"Line one\nLine two"), "Line one\nLine two");
    assert_eq!(normalize(r#"He said \"hi\""#), "He said \"hi\"");
    assert_eq!(normalize(r"C:\\temp"), r"C:\temp");
}

#[test]
fn test_double_encoded_reply() {
    // A JSON string whose content is itself escaped text.
    assert_eq!(normalize(r#""Step 1\\nStep 2""#), "Step 1\nStep 2");
}

#[test]
fn test_never_returns_null_or_undefined_literals() {
    assert_eq!(normalize(r#"{"reply":null}"#), "");
    assert_eq!(normalize(r#"{"a":null}"#), "");
}

#[test]
fn test_normalize_is_idempotent() {
    let corpus = [
        "Plain sentence.",
        r#"{"reply":"Hello\nWorld"}"#,
        r#""Hi there""#,
        r#"{"a":"foo","b":"bar"}"#,
        r"Line one\nLine two",
        "[[Some text]]",
        "  spaced out  ",
        r#"{"reply":"Use **bold** and `code`."}"#,
    ];

    for s in corpus {
        let once = normalize(s);
        assert_eq!(normalize(&once), once, "input: {s:?}");
    }
}
