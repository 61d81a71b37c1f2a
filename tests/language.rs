use std::{fs, path::Path};

use tinyl::{
    ast::{Expr, Statement},
    error::{ParseError, RuntimeError},
    eval,
    interpreter::state::State,
    parse, run_source,
};
use walkdir::WalkDir;

#[test]
fn program_files_work() {
    let mut count = 0;

    for entry in WalkDir::new("tests/programs").into_iter()
                                               .filter_map(Result::ok)
                                               .filter(|e| e.path().extension().is_some_and(|ext| ext == "tl"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let input = read_numbers(&path.with_extension("in"));
        let expected = read_numbers(&path.with_extension("out"));

        count += 1;
        match run_source(&source, input) {
            Ok(output) => assert_eq!(output, expected, "Program {path:?} wrote the wrong output"),
            Err(e) => panic!("Program {path:?} failed:\n{source}\nError: {e}"),
        }
    }

    assert!(count > 0, "No programs found in tests/programs");
}

/// Reads whitespace-separated integers; a missing file means no numbers.
fn read_numbers(path: &Path) -> Vec<i64> {
    if !path.exists() {
        return Vec::new();
    }
    fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
                            .split_whitespace()
                            .map(|word| word.parse().unwrap_or_else(|e| panic!("Bad number {word:?} in {path:?}: {e}")))
                            .collect()
}

fn assert_output(src: &str, input: &[i64], expected: &[i64]) {
    match run_source(src, input.iter().copied()) {
        Ok(output) => assert_eq!(output, expected, "Script: {src}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_parse_failure(src: &str) -> ParseError {
    match parse(src) {
        Ok(program) => panic!("Script parsed as {program} but was expected to fail"),
        Err(e) => e,
    }
}

fn assert_runtime_failure(src: &str, input: &[i64]) -> RuntimeError {
    let program = parse(src).unwrap_or_else(|e| panic!("Script failed to parse: {e}"));
    match eval(&program, input.iter().copied()) {
        Ok(output) => panic!("Script wrote {output:?} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn precedence_and_associativity() {
    assert_output("write(1+2*3)", &[], &[7]);
    assert_output("write(2-3-4)", &[], &[-5]);
    assert_output("write(100 / 10 / 5)", &[], &[2]);
    assert_output("write((1 + 2) * 3)", &[], &[9]);
    assert_output("write(1 + 1 == 2 && 3 > 2 !! 0)", &[], &[1]);
}

#[test]
fn chained_comparisons_are_rejected() {
    assert!(matches!(assert_parse_failure("write(1<2<3)"),
                     ParseError::ChainedComparison { .. }));
    assert!(matches!(assert_parse_failure("write(1 < 2 == 1)"),
                     ParseError::ChainedComparison { .. }));
    assert_output("write((1 < 2) == 1)", &[], &[1]);
}

#[test]
fn logical_operators_evaluate_both_operands() {
    assert_eq!(assert_runtime_failure("write(0 && x)", &[]),
               RuntimeError::UndefinedVariable { name: "x".to_string() });
    assert_eq!(assert_runtime_failure("write(1 !! 1 / 0)", &[]),
               RuntimeError::DivisionByZero);
}

#[test]
fn logical_operators_yield_zero_or_one() {
    assert_output("write(2 && 0)", &[], &[0]);
    assert_output("write(2 !! 0)", &[], &[1]);
    assert_output("write(-3 && 7)", &[], &[1]);
    assert_output("write(0 !! 0)", &[], &[0]);
}

#[test]
fn comparisons_yield_zero_or_one() {
    assert_output("write(1 == 1); write(1 != 1); write(2 <= 2); write(3 < 2); write(3 >= 4); write(4 > 3)",
                  &[],
                  &[1, 0, 1, 0, 0, 1]);
}

#[test]
fn division_truncates_toward_zero() {
    assert_output("write(7 / 2); write(-7 / 2); write(7 / -2)", &[], &[3, -3, -3]);
    assert_output("write(7 % 2); write(-7 % 2); write(7 % -2)", &[], &[1, -1, 1]);
}

#[test]
fn state_update_is_persistent() {
    let e1 = State::new().update("x", 1);
    let e2 = e1.update("x", 5);

    assert_eq!(e1.lookup("x"), Ok(1));
    assert_eq!(e2.lookup("x"), Ok(5));
}

#[test]
fn read_and_write() {
    assert_output("read(a); write(a)", &[42], &[42]);
    assert_output("read(a); read(b); write(b); write(a)", &[1, 2], &[2, 1]);
    assert_output("read(a); write(a)", &[1, 2, 3], &[1]);
}

#[test]
fn assignment_and_sequencing() {
    assert_output("x := 3; y := x + 4; write(y)", &[], &[7]);
    assert_output("x := 1; x := x + 1; write(x)", &[], &[2]);
}

#[test]
fn runtime_errors() {
    assert_eq!(assert_runtime_failure("write(z)", &[]),
               RuntimeError::UndefinedVariable { name: "z".to_string() });
    assert_eq!(assert_runtime_failure("read(a)", &[]), RuntimeError::EmptyInputStream);
    assert_eq!(assert_runtime_failure("write(1/0)", &[]), RuntimeError::DivisionByZero);
    assert_eq!(assert_runtime_failure("write(1 % 0)", &[]), RuntimeError::DivisionByZero);
    assert_eq!(assert_runtime_failure("write(9223372036854775807 + 1)", &[]),
               RuntimeError::Overflow);
}

#[test]
fn errors_produce_no_partial_output() {
    assert!(run_source("write(1); write(2); write(nope)", []).is_err());
}

#[test]
fn syntax_errors() {
    assert_eq!(assert_parse_failure(""), ParseError::EmptyProgram);
    assert_eq!(assert_parse_failure("  -- only a comment\n"), ParseError::EmptyProgram);
    assert!(matches!(assert_parse_failure("write(1);"),
                     ParseError::UnexpectedEndOfInput { .. }));
    assert!(matches!(assert_parse_failure(";write(1)"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(assert_parse_failure("write(1) write(2)"),
                     ParseError::UnexpectedTrailingTokens { .. }));
    assert!(matches!(assert_parse_failure("x := (1 + 2"),
                     ParseError::ExpectedClosingParen { .. }));
    assert!(matches!(assert_parse_failure("write(1 $ 2)"),
                     ParseError::UnexpectedCharacter { .. }));
    assert!(matches!(assert_parse_failure("write(99999999999999999999)"),
                     ParseError::LiteralTooLarge { .. }));
}

#[test]
fn syntax_errors_report_positions() {
    let error = assert_parse_failure("x := 1;\nwrite(x +)");
    assert_eq!(error.position().map(|p| (p.line, p.column)), Some((2, 10)));
    assert!(error.to_string().contains("2:10"), "{error}");
}

#[test]
fn comments_are_skipped() {
    assert_output("-- doubles the input\nread(a); (* the (* nested *) result *) write(a * 2)",
                  &[4],
                  &[8]);
}

#[test]
fn sequence_is_right_leaning() {
    let program = parse("write(1); write(2); write(3)").unwrap();
    let expected =
        Statement::Seq(Box::new(Statement::Write(Expr::Const(1))),
                       Box::new(Statement::Seq(Box::new(Statement::Write(Expr::Const(2))),
                                               Box::new(Statement::Write(Expr::Const(3))))));
    assert_eq!(program, expected);
}

#[test]
fn printed_program_parses_back() {
    let source = "read(n); a := n - 0 * 2 % 3; write((a < n) == 1 && n >= 0 !! a / 2 > 1)";
    let program = parse(source).unwrap();
    assert_eq!(parse(&program.to_string()).unwrap(), program);
}

#[test]
fn long_expressions_run() {
    let source = format!("x := 0{}; write(x)", " + 1".repeat(150_000));
    assert_output(&source, &[], &[150_000]);
}

#[test]
fn nesting_depth_is_limited() {
    let nested = |depth: usize| format!("x := {}7{}; write(x)", "(".repeat(depth), ")".repeat(depth));

    assert_output(&nested(100), &[], &[7]);
    assert!(matches!(assert_parse_failure(&nested(1_000)),
                     ParseError::NestingTooDeep { .. }));
}

#[test]
fn printed_negative_constants_keep_their_value() {
    for n in [-5, i64::MIN + 1, i64::MIN] {
        let printed = Statement::Write(Expr::Const(n)).to_string();
        assert_output(&printed, &[], &[n]);
    }
}
