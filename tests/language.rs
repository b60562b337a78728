use std::{fs, path::Path};

use catlang::{error::FatalError, run_file, run_source, validate_extension};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

/// Runs a script, returning its output and diagnostics.
fn run(src: &str) -> (String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();

    if let Err(e) = run_source(src, &mut out, &mut err) {
        panic!("Script failed: {e}");
    }

    (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
}

fn assert_output(src: &str, expected: &str) {
    let (out, err) = run(src);
    assert_eq!(err, "", "unexpected diagnostics");
    assert_eq!(out, expected);
}

fn assert_diagnostic(src: &str, expected_out: &str, diagnostic: &str) {
    let (out, err) = run(src);
    assert_eq!(out, expected_out);
    assert!(err.contains(diagnostic),
            "expected diagnostic {diagnostic:?}, got {err:?}");
}

#[test]
fn script_files_match_expected_output() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("scripts");
    let mut count = 0;

    for entry in WalkDir::new(&root).into_iter()
                                    .filter_map(Result::ok)
                                    .filter(|e| e.path().extension().is_some_and(|ext| ext == "cat"))
    {
        let path = entry.path();
        let expected = path.with_extension("out");
        let expected = fs::read_to_string(&expected).unwrap_or_else(|e| {
                                                         panic!("Failed to read {expected:?}: {e}")
                                                     });

        let mut out = Vec::new();
        let mut err = Vec::new();
        if let Err(e) = run_file(path, &mut out, &mut err) {
            panic!("Script {path:?} failed: {e}");
        }

        count += 1;
        assert_eq!(String::from_utf8(out).unwrap(), expected, "output of {path:?}");
        assert_eq!(String::from_utf8(err).unwrap(), "", "diagnostics of {path:?}");
    }

    assert!(count > 0, "No scripts found in {root:?}");
}

#[test]
fn greeting_prints_without_quotes() {
    assert_output("str greeting ~> \"Hi\";\npurr ~> greeting;", "Hi");
}

#[test]
fn arithmetic_precedence() {
    assert_output("num a ~> 2 + 3 * 4;\nnum b ~> (2 + 3) * 4;\npurr ~> a + \" \" + b;",
                  "14 20");
    assert_output("num c ~> 8 - 4 - 2;\nnum d ~> -c * 3;\npurr ~> c + \",\" + d;", "2,-6");
}

#[test]
fn number_formatting() {
    assert_output("num h ~> 7 / 2;\npurr ~> h;", "3.5");
    assert_output("num w ~> 10 / 2;\npurr ~> w;", "5");
    assert_output("num z ~> 1 / 0;\npurr ~> z;", "inf");
}

#[test]
fn string_concatenation() {
    assert_output("purr ~> \"a\" + \"b\";", "ab");
    assert_output("str name ~> \"Cat\";\npurr ~> name + \"!\";", "Cat!");
    assert_output("purr ~> \"a\" + endl + \"b\";", "a\nb");
}

#[test]
fn text_mode_renders_every_kind() {
    assert_output("num lives ~> 9;\nbool hungry ~> TRUE;\npurr ~> lives + \" \" + hungry;",
                  "9 true");
}

#[test]
fn function_call_returns_sum() {
    let src = "num add(num a, num b) { return a + b; }\nnum r ~> add(2,3);\npurr ~> r;";
    assert_output(src, "5");
}

#[test]
fn nested_calls_inside_arithmetic() {
    let src = "num add(num a, num b) {\n    return a + b;\n}\nnum r ~> add(add(1, 2), 3) * 2;\npurr ~> r;";
    assert_output(src, "12");
}

#[test]
fn undefined_function_is_reported_and_execution_continues() {
    assert_diagnostic("purr ~> ghost();\npurr ~> \"after\";",
                      "after",
                      "Error on line 1: Undefined function: ghost");
}

#[test]
fn undefined_variable_contributes_nothing() {
    assert_diagnostic("purr ~> \"x=\" + missing + endl;",
                      "x=\n",
                      "Error on line 1: Undefined variable: missing");
}

#[test]
fn if_else_runs_only_the_true_block() {
    assert_output("if (5 > 3) {\n    purr ~> \"yes\";\n} else {\n    purr ~> \"no\";\n}", "yes");
    assert_output("if (5 < 3) {\n    purr ~> \"yes\";\n}\nelse {\n    purr ~> \"no\";\n}", "no");
    assert_output("if (1 > 2) { purr ~> \"a\"; } else { purr ~> \"b\"; }", "b");
}

#[test]
fn branches_share_the_enclosing_scope() {
    assert_output("if (1 < 2) {\n    num y ~> 5;\n}\npurr ~> y;", "5");
}

#[test]
fn conditions_on_text_and_booleans() {
    assert_output("str a ~> \"cat\";\nif (a == \"cat\") {\n    purr ~> \"same\";\n}", "same");
    assert_output("if (\"cat\" != \"dog\") {\n    purr ~> \"different\";\n}", "different");
    assert_output("bool big ~> 10 > 3;\nif (big) {\n    purr ~> \"big\";\n}", "big");
}

#[test]
fn invalid_condition_is_false() {
    assert_diagnostic("if (whiskers) {\n    purr ~> \"no\";\n}\npurr ~> \"done\";",
                      "done",
                      "Error on line 1: Invalid condition: whiskers");
}

#[test]
fn callee_mutation_does_not_leak() {
    let src = "num x ~> 1;\nvoid bump() {\n    num x ~> 99;\n}\nbump();\npurr ~> x;";
    assert_output(src, "1");
}

#[test]
fn recursion_sees_its_own_arguments() {
    let src = "void countdown(num n) {\n    if (n > 0) {\n        purr ~> n + \" \";\n        countdown(n - \
               1);\n    }\n}\ncountdown(3);";
    assert_output(src, "3 2 1 ");
}

#[test]
fn return_inside_a_branch_ends_the_function() {
    let src = "str sign(num v) {\n    if (v < 0) {\n        return \"negative\";\n    }\n    return \
               \"positive\";\n}\npurr ~> sign(-2) + \",\" + sign(4);";
    assert_output(src, "negative,positive");
}

#[test]
fn type_mismatch_leaves_variable_unbound() {
    let src = "str greet() {\n    return \"hi\";\n}\nnum n ~> greet();\npurr ~> n;";
    let (out, err) = run(src);

    assert_eq!(out, "");
    assert_eq!(err,
               "Error on line 4: Type mismatch for variable n: expected num, found str\nError on line 5: \
                Undefined variable: n\n");
}

#[test]
fn recoverable_errors() {
    assert_diagnostic("num x ~> 3 +;",
                      "",
                      "Error on line 1: Invalid numeric value for variable: x");
    assert_diagnostic("meow meow\npurr ~> \"ok\";", "ok", "Error on line 1: Unknown command: meow meow");
    assert_diagnostic("return 1;", "", "Error on line 1: 'return' outside of a function.");
    assert_diagnostic("else {\n    purr ~> \"x\";\n}\npurr ~> \"y\";",
                      "y",
                      "Error on line 1: 'else' without a matching 'if'.");
    assert_diagnostic("purr ~> 1 @ 2;", "", "Error on line 1: Invalid token: @");
}

#[test]
fn three_line_block_comment_is_removed() {
    assert_output("purr ~> \"a\";\n/* one\ntwo\nthree */\npurr ~> \"b\";", "ab");
}

#[test]
fn unterminated_block_is_fatal() {
    let mut out = Vec::new();
    let mut err = Vec::new();

    let result = run_source("purr ~> \"before\";\nif (1 < 2) {\n    purr ~> \"inside\";",
                            &mut out,
                            &mut err);

    assert!(matches!(result, Err(FatalError::UnterminatedBlock { construct: "if", line: 2 })));
    assert_eq!(String::from_utf8(out).unwrap(), "before");
}

#[test]
fn only_script_extensions_are_accepted() {
    assert!(validate_extension(Path::new("scripts/hello.cat")).is_ok());
    assert!(matches!(validate_extension(Path::new("notes.txt")),
                     Err(FatalError::InvalidExtension { .. })));

    let mut out = Vec::new();
    let mut err = Vec::new();
    assert!(matches!(run_file(Path::new("does/not/exist.cat"), &mut out, &mut err),
                     Err(FatalError::UnreadableScript { .. })));
}

#[test]
fn boolean_literals_compare_numerically() {
    let src = "bool flag ~> true;\nif (flag == true) {\n    purr ~> \"t\";\n} else {\n    purr ~> \"f\";\n}\nif (flag != \
               false) {\n    purr ~> \"!\";\n}";
    assert_output(src, "t!");
}

#[test]
fn quoted_non_number_leaves_num_unbound() {
    let src = "num x ~> \"abc\";\npurr ~> x;";
    let (out, err) = run(src);

    assert_eq!(out, "");
    assert_eq!(err,
               "Error on line 1: Invalid numeric value for variable: x\nError on line 2: Undefined variable: \
                x\n");
    assert_output("num y ~> \"12\";\npurr ~> y;", "12");
}

#[test]
fn redefinition_replaces_function() {
    assert_output("num f() { return 1; }\nnum f() { return 2; }\npurr ~> f();", "2");
}

#[test]
fn extra_arguments_are_ignored_and_missing_ones_unbound() {
    let add = "num add(num a, num b) { return a + b; }\n";

    assert_output(&format!("{add}purr ~> add(1, 2, 3);"), "3");
    assert_diagnostic(&format!("{add}purr ~> add(1);"),
                      "1",
                      "Error on line 1: Undefined variable: b");
}

#[test]
fn two_statements_on_one_line_are_unknown() {
    assert_diagnostic("purr ~> \"a\"; purr ~> \"b\";",
                      "",
                      "Error on line 1: Unknown command: purr ~> \"a\"; purr ~> \"b\";");
}
