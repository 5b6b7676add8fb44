use std::fs::{self};

use shriek::{
    get_output, get_result,
    interpreter::lexer::{Token, tokenize_lines},
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_script_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = get_result(&code) {
                panic!("Example {} in {:?} failed:\n{}\nError: {:?}",
                       i + 1,
                       path,
                       code,
                       e);
            }
        }
    }

    assert!(count > 0, "No examples found in book/src");
}

fn extract_script_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```shriek") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_output(src: &str, expected: &[&str]) {
    match get_output(src) {
        Ok(lines) => assert_eq!(lines, expected, "unexpected output for script:\n{src}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    if get_result(src).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

#[test]
fn number_declaration_and_print() {
    assert_output("var x = 123!print(x)!", &["123"]);
}

#[test]
fn string_declaration_and_print() {
    assert_output("var x = 'hi'!print(x)!", &["hi"]);
    assert_output("var x = \"hey\"!print(x)!", &["hey"]);
}

#[test]
fn print_literal_without_declaration() {
    assert_output("print('literal')!", &["literal"]);
    assert_output("print(\"literal\")!", &["literal"]);
}

#[test]
fn quoted_digits_lex_as_identifiers() {
    let lines = tokenize_lines("'123'!").unwrap();

    assert_eq!(lines[0].tokens,
               vec![Token::SingleQuote,
                    Token::Identifier("123".to_string()),
                    Token::SingleQuote]);
}

#[test]
fn quoting_forces_string_semantics() {
    // the string keeps its leading zero; the number loses it to decimal
    // formatting
    assert_output("var x = '007'!print(x)!", &["007"]);
    assert_output("var x = 007!print(x)!", &["7"]);
}

#[test]
fn redeclaration_takes_latest_value() {
    assert_output("var x = 1!var x = 2!print(x)!print(x)!", &["2", "2"]);
    assert_output("var x = 'a'!var x = 5!print(x)!", &["5"]);
}

#[test]
fn output_count_matches_recognized_prints() {
    assert_output("var a = 1!var b = 2!print(a)!print(b)!print('c')!",
                  &["1", "2", "c"]);
}

#[test]
fn whitespace_between_tokens_is_ignored() {
    assert_output("var   x\t=\n 5 !\nprint( x ) !", &["5"]);
}

#[test]
fn underscores_are_identifier_characters() {
    assert_output("var _max_count = 9!print(_max_count)!", &["9"]);
}

#[test]
fn identifiers_are_letter_runs() {
    // a digit ends an identifier, so `x1` is two tokens and the line
    // matches no shape
    assert_output("var x1 = 5!print('ok')!", &["ok"]);
}

#[test]
fn illegal_character_aborts_with_location() {
    assert_failure("var x = 1!@");

    let message = get_output("var x = 1!@").unwrap_err().to_string();
    assert!(message.contains('@'), "missing character in: {message}");
    assert!(message.contains("line 1"), "missing line index in: {message}");

    let message = get_output("@").unwrap_err().to_string();
    assert!(message.contains("line 0"), "missing line index in: {message}");
}

#[test]
fn unterminated_trailing_statement_is_discarded() {
    assert_output("print('a')", &[]);
    assert_output("print('a')!print('b')", &["a"]);
}

#[test]
fn unknown_variable_is_error() {
    assert_failure("print(x)!");

    let message = get_output("var y = 1!print(x)!").unwrap_err().to_string();
    assert!(message.contains("Unknown variable 'x'"),
            "unexpected message: {message}");
}

#[test]
fn malformed_lines_are_skipped() {
    assert_output("var!print('ok')!", &["ok"]);
    assert_output("foo bar!print('ok')!", &["ok"]);
    assert_output("!!print('ok')!", &["ok"]);
    assert_output("print(5)!print('ok')!", &["ok"]);
    assert_output("var x = 'a b'!print('ok')!", &["ok"]);
    assert_output("var x = ''!print('ok')!", &["ok"]);
}

#[test]
fn mismatched_quotes_are_skipped() {
    assert_output("var x = 'a\"!print(\"ok\")!", &["ok"]);
}

#[test]
fn quoted_print_argument_is_always_literal() {
    assert_output("var lit = 'value'!print('lit')!", &["lit"]);
}

#[test]
fn oversized_number_errors_at_print() {
    // the declaration itself succeeds; parsing happens at use-site
    assert_output("var x = 99999999999999999999!print('ok')!", &["ok"]);
    assert_failure("var x = 99999999999999999999!print(x)!");
}

#[test]
fn example_works() {
    let script = fs::read_to_string("tests/example.shk").expect("missing file");
    assert_output(&script, &["hello", "goodbye", "42", "done"]);
}
