#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

//! Behavior tests for the JSON parser: grammar, escapes, options, errors

use xdmjson::{from_str, from_str_with_options, JsonSpec, Options, Value};

fn strict() -> Options {
    Options::default().with_spec(JsonSpec::Rfc4627)
}

fn raw_escapes() -> Options {
    Options::default().with_unescape(false)
}

// Objects

#[test]
fn test_empty_object() {
    let value = from_str("{}").unwrap();
    let obj = value.as_object().expect("object expected");
    assert!(obj.is_empty());
}

#[test]
fn test_singleton_object_numeric_value() {
    for input in [r#"{"abc":12}"#, r#"{"abc":12e0}"#] {
        let value = from_str(input).unwrap();
        let obj = value.as_object().expect("object expected");
        assert_eq!(obj.len(), 1);
        assert_eq!(obj.get("abc"), Some(&Value::Number(12.0)));
    }
}

#[test]
fn test_singleton_object_negative_number() {
    let value = from_str(r#"{"abc":-1.2e0}"#).unwrap();
    let obj = value.as_object().unwrap();
    assert_eq!(obj.get("abc"), Some(&Value::Number(-1.2)));
}

#[test]
fn test_singleton_object_booleans() {
    let value = from_str(r#"{"abc":true}"#).unwrap();
    assert_eq!(
        value.as_object().unwrap().get("abc"),
        Some(&Value::Bool(true))
    );

    let value = from_str(r#"{"abc":false}"#).unwrap();
    assert_eq!(
        value.as_object().unwrap().get("abc"),
        Some(&Value::Bool(false))
    );
}

#[test]
fn test_singleton_object_null_value() {
    let value = from_str(r#"{"abc":null}"#).unwrap();
    let obj = value.as_object().unwrap();
    assert!(obj.contains_key("abc"));
    assert_eq!(obj.get("abc"), Some(&Value::Null));
}

#[test]
fn test_two_entry_object_with_whitespace() {
    let expected = from_str(r#"{"abc":true,"xyz":false}"#).unwrap();
    let spaced = from_str(" { \"abc\" : true , \"xyz\" : false } ").unwrap();
    let multiline = from_str(
        "    {   \"abc\"   :   true    ,\n            \"xyz\"   :   false   \n            }   ",
    )
    .unwrap();

    assert_eq!(expected, spaced);
    assert_eq!(expected, multiline);

    let obj = expected.as_object().unwrap();
    assert_eq!(obj.len(), 2);
    let keys: Vec<_> = obj.keys().collect();
    assert_eq!(keys, vec!["abc", "xyz"]);
}

#[test]
fn test_duplicate_keys_last_write_wins() {
    let value = from_str(r#"{"a":1,"b":2,"a":3}"#).unwrap();
    let obj = value.as_object().unwrap();
    assert_eq!(obj.len(), 2);
    assert_eq!(obj.get("a"), Some(&Value::Number(3.0)));
    let keys: Vec<_> = obj.keys().collect();
    assert_eq!(keys, vec!["a", "b"]);
}

// Arrays

#[test]
fn test_empty_array() {
    let value = from_str("[]").unwrap();
    let arr = value.as_array().expect("array expected");
    assert!(arr.is_empty());
    assert!(!arr.contains(1));
}

#[test]
fn test_singleton_arrays() {
    let value = from_str("[12345]").unwrap();
    let arr = value.as_array().unwrap();
    assert!(arr.contains(1));
    assert_eq!(arr.entry(1), Some(&Value::Number(12345.0)));

    let value = from_str(r#"["abcd"]"#).unwrap();
    let arr = value.as_array().unwrap();
    assert_eq!(arr.entry(1), Some(&Value::String("abcd".to_string())));

    let value = from_str("[true]").unwrap();
    assert_eq!(value.as_array().unwrap().entry(1), Some(&Value::Bool(true)));

    let value = from_str("[false]").unwrap();
    assert_eq!(
        value.as_array().unwrap().entry(1),
        Some(&Value::Bool(false))
    );

    let value = from_str("[null]").unwrap();
    let arr = value.as_array().unwrap();
    assert!(arr.contains(1));
    assert_eq!(arr.entry(1), Some(&Value::Null));
}

#[test]
fn test_multi_item_array() {
    for input in [
        r#"[1,2,3, "abc", "def", true, false, null]"#,
        "\n        [   1,     2,  3, \n        \"abc\",  \"def\",   true, \n        false,  null ]\n        ",
    ] {
        let value = from_str(input).unwrap();
        let arr = value.as_array().unwrap();
        assert_eq!(arr.len(), 8);
        for position in 1..=8 {
            assert!(arr.contains(position));
        }
        for position in [0, 9, 10] {
            assert!(!arr.contains(position));
        }
        assert_eq!(arr.entry(1), Some(&Value::Number(1.0)));
        assert_eq!(arr.entry(5), Some(&Value::String("def".to_string())));
        assert_eq!(arr.entry(7), Some(&Value::Bool(false)));
        assert_eq!(arr.entry(8), Some(&Value::Null));
    }
}

#[test]
fn test_nested_empty_arrays() {
    let value = from_str("[[[],[]]]").unwrap();
    let outer = value.as_array().unwrap();
    assert_eq!(outer.len(), 1);
    let middle = outer.entry(1).and_then(Value::as_array).unwrap();
    assert_eq!(middle.len(), 2);
    let inner = middle.entry(2).and_then(Value::as_array).unwrap();
    assert!(inner.is_empty());
}

#[test]
fn test_nested_non_empty_arrays() {
    let value = from_str("[1, 2, [], [1], [1,2], [1,2,3]]").unwrap();
    let arr = value.as_array().unwrap();
    assert_eq!(arr.len(), 6);
    let last = arr.entry(6).and_then(Value::as_array).unwrap();
    assert_eq!(last.entry(3), Some(&Value::Number(3.0)));
}

#[test]
fn test_array_of_objects() {
    let value = from_str(r#"[{"x":12,"y":5}, {"x":13,"y":6}]"#).unwrap();
    let arr = value.as_array().unwrap();
    assert_eq!(arr.len(), 2);
    let second = arr.entry(2).and_then(Value::as_object).unwrap();
    assert_eq!(second.get("y"), Some(&Value::Number(6.0)));
}

#[test]
fn test_object_containing_arrays() {
    let value = from_str(r#"{"x":[12,3], "y":[14,9]}"#).unwrap();
    let obj = value.as_object().unwrap();
    assert_eq!(obj.len(), 2);
    let y = obj.get("y").and_then(Value::as_array).unwrap();
    assert_eq!(y.entry(2), Some(&Value::Number(9.0)));
}

// Numbers

#[test]
fn test_number_formats() {
    let cases = [
        ("[0.123]", 0.123),
        ("[-0.123]", -0.123),
        ("[-0.123e2]", -0.123e2),
        ("[-0.123e+2]", -0.123e2),
        ("[-0.123e-2]", -0.123e-2),
    ];
    for (input, expected) in cases {
        let value = from_str(input).unwrap();
        let arr = value.as_array().unwrap();
        assert_eq!(arr.entry(1), Some(&Value::Number(expected)), "{input}");
    }
}

// Strings and escapes

#[test]
fn test_string_escape_forms() {
    let cases = [
        (r#"["\\"]"#, "\\"),
        (r#"["\""]"#, "\""),
        (r#"["\r"]"#, "\r"),
        (r#"["\n"]"#, "\n"),
        (r#"["\/"]"#, "/"),
        (r#"["\t"]"#, "\t"),
        (r#"["aa\u0030aa"]"#, "aa0aa"),
    ];
    for (input, expected) in cases {
        let value = from_str(input).unwrap();
        let arr = value.as_array().unwrap();
        assert_eq!(
            arr.entry(1),
            Some(&Value::String(expected.to_string())),
            "{input}"
        );
    }
}

#[test]
fn test_surrogate_pair_combines() {
    let value = from_str(r#"["\uD834\udD1E"]"#).unwrap();
    let arr = value.as_array().unwrap();
    let s = arr.entry(1).and_then(Value::as_string).unwrap();
    assert_eq!(s.chars().count(), 1);
    assert_eq!(s, "\u{1D11E}");
}

#[test]
fn test_unescape_option() {
    // Disabled: the caller receives the literal backslash escape.
    let value = from_str_with_options(r#"["\r"]"#, raw_escapes()).unwrap();
    let arr = value.as_array().unwrap();
    assert_eq!(arr.entry(1), Some(&Value::String(r"\r".to_string())));

    // Enabled (explicitly and by default): one carriage-return character.
    for options in [Options::default(), Options::default().with_unescape(true)] {
        let value = from_str_with_options(r#"["\r"]"#, options).unwrap();
        let arr = value.as_array().unwrap();
        assert_eq!(arr.entry(1), Some(&Value::String("\r".to_string())));
    }
}

#[test]
fn test_unescape_disabled_skips_character_validation() {
    let value = from_str_with_options(r#"["\u0000"]"#, raw_escapes()).unwrap();
    let arr = value.as_array().unwrap();
    assert_eq!(arr.entry(1), Some(&Value::String(r"\u0000".to_string())));
}

#[test]
fn test_unescape_enabled_rejects_illegal_characters() {
    assert!(from_str(r#"["\u0000"]"#).unwrap_err().is_syntax_error());
    assert!(from_str(r#"["\b"]"#).unwrap_err().is_syntax_error());
}

// Top-level grammar variants

#[test]
fn test_permissive_top_level_scalars() {
    let options = Options::default().with_spec(JsonSpec::Ecma262);

    assert_eq!(
        from_str_with_options("true", options).unwrap(),
        Value::Bool(true)
    );
    assert_eq!(
        from_str_with_options("false", options).unwrap(),
        Value::Bool(false)
    );
    assert_eq!(from_str_with_options("null", options).unwrap(), Value::Null);
    assert_eq!(
        from_str_with_options("93.7", options).unwrap(),
        Value::Number(93.7)
    );
}

#[test]
fn test_permissive_top_level_string_with_raw_escapes() {
    let options = raw_escapes();
    let value = from_str_with_options(r#""abcd\n""#, options).unwrap();
    assert_eq!(value, Value::String(r"abcd\n".to_string()));
}

#[test]
fn test_strict_top_level_rejects_scalars() {
    for input in ["true", "false", "null", "93.7", r#""abcd""#] {
        let err = from_str_with_options(input, strict()).unwrap_err();
        assert!(err.is_syntax_error(), "strict should reject {input}");
    }

    let err =
        from_str_with_options(r#""abcd\n""#, strict().with_unescape(false)).unwrap_err();
    assert!(err.is_syntax_error());
}

#[test]
fn test_strict_top_level_accepts_containers() {
    assert!(from_str_with_options("{}", strict()).unwrap().is_object());
    assert!(from_str_with_options("[]", strict()).unwrap().is_array());
    assert!(from_str_with_options(r#"{"a":[1,2]}"#, strict())
        .unwrap()
        .is_object());
}

// Syntax errors

#[test]
fn test_syntax_errors() {
    let inputs = [
        "[-0.123e-2[",
        "[false",
        "[falsehood]",
        "[(5)]",
        "[{5}]",
        "[{x:23}]",
        "23,24",
        r#"["abc]"#,
        "[1,2,3,]",
        r#"{"a":=13}"#,
        r#"{"a":13,,"b":15}"#,
        r#"{"a":13"#,
        r#"{"a":{"b":12}"#,
        r#"{"a":{"b":12}}}"#,
        r#"["\"]"#,
        r#"["\1"]"#,
        r#"["\u2"]"#,
        r#"["\u123u"]"#,
        r#"["\b"]"#,
        r#"["\x20"]"#,
        r#"["\s"]"#,
        r#"["\uD834"]"#,
        r#"["\udD1E"]"#,
        "[.3]",
        "[01]",
        "[00.00]",
        "[+23]",
        "[1.234f0]",
    ];
    for input in inputs {
        let result = from_str(input);
        match result {
            Ok(value) => panic!("{input:?} should fail, got {value:?}"),
            Err(err) => assert!(err.is_syntax_error(), "{input:?} should be a syntax error"),
        }
    }
}

#[test]
fn test_first_error_aborts_without_result() {
    // The object before the error point is discarded entirely.
    let err = from_str(r#"{"good": 1, "bad": 01}"#).unwrap_err();
    assert!(err.is_syntax_error());
}

// Options resolution

#[test]
fn test_options_resolved_from_parsed_map() {
    let options_map = from_str(r#"{"spec": "RFC4627", "unescape": false}"#).unwrap();
    let options = Options::from_value(&options_map).unwrap();
    assert_eq!(options.spec, JsonSpec::Rfc4627);
    assert!(!options.unescape);

    let err = from_str_with_options("true", options).unwrap_err();
    assert!(err.is_syntax_error());
}

#[test]
fn test_malformed_options_is_type_error() {
    let options_map = from_str(r#"{"unescape": "yes"}"#).unwrap();
    let err = Options::from_value(&options_map).unwrap_err();
    assert!(err.is_type_error());
    assert!(!err.is_syntax_error());

    let err = Options::from_value(&Value::Number(3.0)).unwrap_err();
    assert!(err.is_type_error());
}

#[test]
fn test_unknown_options_are_ignored() {
    let options_map = from_str(r#"{"liberal": true, "indent": 2}"#).unwrap();
    let options = Options::from_value(&options_map).unwrap();
    assert_eq!(options, Options::default());
}

// Determinism

#[test]
fn test_parse_is_deterministic() {
    let input = r#"{"a": [1, 2.5, "x"], "b": {"c": null}}"#;
    assert_eq!(from_str(input).unwrap(), from_str(input).unwrap());

    let bad = "[1,2,3,]";
    assert_eq!(from_str(bad).unwrap_err(), from_str(bad).unwrap_err());
}
