use std::{fs, io::Cursor};

use pancake::{
    Error, InputSource, Interpreter, LineInput, QueuedInput, Session, Value,
    ast::{BinaryOperator, Position, ValueType},
    error::{RuntimeError, SyntaxError},
    run_captured,
};
use walkdir::WalkDir;

#[test]
fn sample_scripts_produce_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("scripts").into_iter()
                               .filter_map(Result::ok)
                               .filter(|e| e.path().extension().is_some_and(|ext| ext == "pnc"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                             panic!("Failed to read {expected_path:?}: {e}")
                                                         });
        let inputs_path = path.with_extension("in");
        let inputs = fs::read_to_string(&inputs_path).unwrap_or_default();
        let inputs: Vec<&str> = inputs.lines().collect();

        count += 1;
        match run_captured(&source, &inputs) {
            Ok(output) => assert_eq!(output, expected, "output of {path:?} differs"),
            Err(e) => panic!("Script {path:?} failed:\n{source}\nError: {e}"),
        }
    }

    assert!(count > 0, "No scripts found in scripts/");
}

fn assert_output(src: &str, expected: &str) {
    match run_captured(src, &[]) {
        Ok(output) => assert_eq!(output, expected, "unexpected output for {src:?}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn syntax_error(src: &str) -> SyntaxError {
    match run_captured(src, &[]) {
        Err(Error::Syntax(e)) => e,
        other => panic!("Expected a syntax error for {src:?}, got {other:?}"),
    }
}

fn runtime_error(src: &str) -> RuntimeError {
    match run_captured(src, &[]) {
        Err(Error::Runtime(e)) => e,
        other => panic!("Expected a runtime error for {src:?}, got {other:?}"),
    }
}

#[test]
fn arithmetic_respects_precedence() {
    assert_output("out -> 1 + 2 * 3;", "7\n");
    assert_output("out -> (1 + 2) * 3;", "9\n");
    assert_output("out -> 10 - 4 - 3;", "3\n");
    assert_output("out -> 2 * 3 mod 4;", "2\n");
    assert_output("out -> -2 * 3;", "-6\n");
}

#[test]
fn integer_division_truncates_toward_zero() {
    assert_output("out -> 7 / 2;", "3\n");
    assert_output("out -> -7 / 2;", "-3\n");
    assert_output("out -> 7 / -2;", "-3\n");
}

#[test]
fn modulo_takes_sign_of_dividend() {
    assert_output("out -> 7 mod 3;", "1\n");
    assert_output("out -> -7 mod 2;", "-1\n");
    assert_output("out -> 7 mod -2;", "1\n");
}

#[test]
fn mixed_numbers_promote_to_double() {
    assert_output("out -> 7.0 / 2;", "3.5\n");
    assert_output("out -> 1 + 0.5;", "1.5\n");
    assert_output("out -> 2.5 * 2;", "5\n");
    assert_output("out -> 1 == 1.0;", "true\n");
    assert_output("out -> 2 < 2.5;", "true\n");
}

#[test]
fn out_concatenates_segments_with_one_newline() {
    assert_output("out -> 1 -> \"+\" -> true;", "1+true\n");
    assert_output("out -> \"a\";\nout -> \"b\";", "a\nb\n");
    assert_output("let double d = 1.25; out -> d -> \" \" -> -d;", "1.25 -1.25\n");
}

#[test]
fn strings_concatenate_and_compare() {
    assert_output("out -> \"pan\" + \"cake\";", "pancake\n");
    assert_output("out -> \"a\" == \"a\" -> \" \" -> \"a\" != \"a\";", "true false\n");
}

#[test]
fn logical_and_binds_tighter_than_or() {
    assert_output("out -> true and false or true;", "true\n");
    assert_output("out -> false and false or true;", "true\n");
    assert_output("out -> true or true and false;", "true\n");
    assert_output("out -> 1 < 2 and 3 > 4;", "false\n");
    assert_output("out -> !false and 1 == 1;", "true\n");
}

#[test]
fn comparisons_bind_tighter_than_equality() {
    assert_output("out -> 1 < 2 == true;", "true\n");
    assert_output("out -> 1 + 1 == 2;", "true\n");
}

#[test]
fn if_elif_else_takes_first_true_branch() {
    let source = r#"
let int x = 2;
if (x == 1) {
    out -> 1;
} elif (x == 2) {
    out -> 2;
} elif (x > 0) {
    out -> "never";
} else {
    out -> 3;
}
"#;
    assert_output(source, "2\n");
    assert_output("if (1 > 2) { out -> 1; } elif (2 > 1) { out -> 2; } else { out -> 3; }",
                  "2\n");
    assert_output("if (false) { out -> 1; } else { out -> 3; }", "3\n");
    assert_output("if (false) { out -> 1; }\nout -> \"after\";", "after\n");
}

#[test]
fn nested_blocks_share_one_environment() {
    let source = r"
let int x = 1;
if (true) {
    let int y = 10;
    if (x == 1) {
        x = x + y;
    }
}
out -> x -> y;
";
    assert_output(source, "1110\n");
}

#[test]
fn comments_and_separators_are_ignored() {
    assert_output("// leading comment\n;;\nout -> 1; // trailing\n\n;out -> 2;", "1\n2\n");
}

#[test]
fn queued_input_is_bound_verbatim() {
    assert_eq!(run_captured("in <- x; out -> x;", &["5"]).unwrap(), "5\n");
    assert_eq!(run_captured("in <- x; out -> x + \"!\";", &["5"]).unwrap(), "5!\n");
    assert_eq!(run_captured("let int n = 1; in <- n; out -> n + \"1\";", &["4"]).unwrap(),
               "41\n");
}

#[test]
fn exhausted_queue_is_runtime_error() {
    let err = run_captured("in <- a; in <- b;", &["only"]).unwrap_err();
    assert!(matches!(err,
                     Error::Runtime(RuntimeError::InputUnavailable { ref name, .. }) if name == "b"));
}

#[test]
fn interactive_input_coerces_to_current_kind() {
    let input = LineInput::new(Cursor::new("12\nabc\n1.25\nhi\n5\n"));
    let interpreter = Interpreter::with_output(Vec::new()).with_input(input);
    let mut session = Session::with_interpreter(interpreter);

    let source = r#"
let int n = 0;
in <- n;
out -> n + 1;
in <- n;
out -> n;
let double d = 0.5;
in <- d;
out -> d * 2;
in <- s;
out -> s + "!";
in <- t;
out -> t + "0";
"#;
    session.run(source).unwrap();

    assert_eq!(String::from_utf8_lossy(session.interpreter().output()),
               "13\nabc\n2.5\nhi!\n50\n");
}

#[test]
fn queue_hands_out_values_in_order() {
    let mut queue = QueuedInput::new(["1"]);
    queue.push("two");
    assert_eq!(queue.remaining(), 2);

    assert_eq!(queue.read_value(Some(&Value::Integer(0))).unwrap(),
               Some(Value::String("1".to_string())));
    assert_eq!(queue.read_value(None).unwrap(),
               Some(Value::String("two".to_string())));
    assert_eq!(queue.remaining(), 0);
    assert_eq!(queue.read_value(None).unwrap(), None);
}

#[test]
fn queue_falls_back_to_line_input() {
    let input = QueuedInput::new(["a"]).with_fallback(LineInput::new(Cursor::new("b\n")));
    let interpreter = Interpreter::with_output(Vec::new()).with_input(input);
    let mut session = Session::with_interpreter(interpreter);

    session.run("in <- x; in <- y; out -> x -> y;").unwrap();
    assert_eq!(session.interpreter().output(), b"ab\n");
    assert!(session.run("in <- z;").is_err());
}

#[test]
fn division_and_modulo_by_zero_are_runtime_errors() {
    assert_eq!(runtime_error("out -> 1 / 0;"),
               RuntimeError::DivisionByZero { line: 1, column: 10 });
    assert_eq!(runtime_error("out -> 1 mod 0;"),
               RuntimeError::ModuloByZero { line: 1, column: 10 });
    assert!(matches!(runtime_error("out -> 1.5 / 0;"),
                     RuntimeError::DivisionByZero { .. }));
}

#[test]
fn literal_type_mismatch_is_syntax_error() {
    assert_eq!(syntax_error("let int x = \"a\";"),
               SyntaxError::TypeMismatch { name:     "x".to_string(),
                                           expected: ValueType::Int,
                                           found:    ValueType::String,
                                           line:     1,
                                           column:   13, });
    assert!(matches!(syntax_error("let bool b = true; b = 1;"),
                     SyntaxError::TypeMismatch { expected: ValueType::Bool,
                                                 found: ValueType::Int,
                                                 .. }));
}

#[test]
fn non_literal_values_are_not_statically_checked() {
    assert_output("let int x = 1; let string s = \"a\"; x = s; out -> x;", "a\n");
}

#[test]
fn redeclaration_with_same_type_fails_at_runtime() {
    let err = runtime_error("let int x = 1; let int x = 2;");
    assert_eq!(err,
               RuntimeError::Redeclaration { name:   "x".to_string(),
                                             line:   1,
                                             column: 16, });
}

#[test]
fn redeclaration_with_other_type_fails_at_parse_time() {
    assert!(matches!(syntax_error("let int x = 1; let double x = 2;"),
                     SyntaxError::TypeMismatch { expected: ValueType::Double,
                                                 found: ValueType::Int,
                                                 .. }));
}

#[test]
fn assignment_to_undeclared_variable_is_syntax_error() {
    assert_eq!(syntax_error("y = 1;"),
               SyntaxError::UndeclaredAssignment { name:   "y".to_string(),
                                                   line:   1,
                                                   column: 1, });
}

#[test]
fn unknown_variable_is_runtime_error() {
    assert!(matches!(runtime_error("out -> missing;"),
                     RuntimeError::UnknownVariable { ref name, .. } if name == "missing"));
}

#[test]
fn condition_must_be_boolean() {
    assert!(matches!(runtime_error("if (1) { out -> 1; }"),
                     RuntimeError::ConditionNotBoolean { found: ValueType::Int,
                                                         line: 1,
                                                         column: 5 }));
    assert_eq!(runtime_error("let int x = 1;\nif (x + 1) { }").position(),
               Position::new(2, 7));
}

#[test]
fn non_boolean_elif_is_passed_over() {
    assert_output("if (false) { out -> 1; } elif (1) { out -> 2; } elif (true) { out -> 3; }",
                  "3\n");
    assert_output("if (false) { } elif (\"x\") { out -> 1; } else { out -> 2; }",
                  "2\n");
    assert!(matches!(runtime_error("if (false) { } elif (missing) { }"),
                     RuntimeError::UnknownVariable { .. }));
}

#[test]
fn unsupported_operands_name_operator_and_kinds() {
    assert_eq!(runtime_error("out -> 1 + true;"),
               RuntimeError::UnsupportedOperands { op:     BinaryOperator::Add,
                                                   left:   ValueType::Int,
                                                   right:  ValueType::Bool,
                                                   line:   1,
                                                   column: 10, });
    assert!(matches!(runtime_error("out -> \"a\" < \"b\";"),
                     RuntimeError::UnsupportedOperands { op: BinaryOperator::Less,
                                                         .. }));
    assert!(matches!(runtime_error("out -> 1.5 mod 2;"),
                     RuntimeError::UnsupportedOperands { op: BinaryOperator::Mod,
                                                         left: ValueType::Double,
                                                         right: ValueType::Int,
                                                         .. }));
    assert!(matches!(runtime_error("out -> 1 and 2;"),
                     RuntimeError::UnsupportedOperands { op: BinaryOperator::And,
                                                         .. }));
    assert!(matches!(runtime_error("out -> -\"a\";"),
                     RuntimeError::UnsupportedOperand { operand: ValueType::String,
                                                        .. }));
    assert!(matches!(runtime_error("out -> !1;"),
                     RuntimeError::UnsupportedOperand { operand: ValueType::Int,
                                                        .. }));
}

#[test]
fn doubles_print_in_shortest_round_trip_form() {
    assert_output("out -> 0.1 + 0.2;", "0.30000000000000004\n");
    assert_output("out -> 2.5 * 2 -> \" \" -> 1.0 / 4;", "5 0.25\n");
    assert_output("out -> -0.5 - 1;", "-1.5\n");
}

#[test]
fn integer_overflow_is_runtime_error() {
    assert!(matches!(runtime_error("out -> 9223372036854775807 + 1;"),
                     RuntimeError::Overflow { .. }));
    assert!(matches!(runtime_error("let int x = 3037000500; out -> x * x;"),
                     RuntimeError::Overflow { .. }));
    assert!(matches!(runtime_error("out -> 99999999999999999999;"),
                     RuntimeError::InvalidLiteral { ty: ValueType::Int,
                                                    .. }));
}

#[test]
fn promotion_beyond_exact_range_is_runtime_error() {
    assert!(matches!(runtime_error("out -> 9007199254740993 + 0.5;"),
                     RuntimeError::PrecisionLoss { value: 9_007_199_254_740_993,
                                                   .. }));
}

#[test]
fn failing_out_statement_prints_nothing() {
    let mut session = Session::with_interpreter(Interpreter::with_output(Vec::new()));

    let err = session.run("out -> 1;\nout -> 2 -> 3 / 0;\nout -> 4;")
                     .unwrap_err();

    assert!(matches!(err,
                     Error::Runtime(RuntimeError::DivisionByZero { line: 2, .. })));
    assert_eq!(session.interpreter().output(), b"1\n");
}

#[test]
fn session_keeps_state_across_units() {
    let mut session = Session::with_interpreter(Interpreter::with_output(Vec::new()));
    assert!(session.interpreter().environment().is_empty());

    session.run("let int total = 1;").unwrap();
    assert!(session.run("total = total / 0;").is_err());
    session.run("total = total + 1;").unwrap();
    assert!(session.run("let string total = \"x\";").is_err());
    session.run("out -> total;").unwrap();

    assert_eq!(session.interpreter().output(), b"2\n");
    assert_eq!(session.registry().lookup("total"), Some(ValueType::String));
    assert_eq!(session.interpreter().environment().len(), 1);
}

#[test]
fn syntax_error_stops_whole_unit() {
    let mut session = Session::with_interpreter(Interpreter::with_output(Vec::new()));

    assert!(session.run("out -> 1;\nout -> ;").is_err());
    assert!(session.interpreter().output().is_empty());
}

#[test]
fn errors_render_kind_and_position() {
    let err = run_captured("let int x = \"a\";", &[]).unwrap_err();
    assert_eq!(err.to_string(),
               "Syntax Error: Error on line 1, column 13: Type mismatch for 'x': expected int, found string literal.");

    let err = run_captured("let int x = 1;\nout -> x / 0;", &[]).unwrap_err();
    assert_eq!(err.to_string(),
               "Runtime Error: Error on line 2, column 10: Division by zero.");

    assert_eq!(syntax_error("out -> (1;").position(), Position::new(1, 8));
}
