//! Structural pattern checks applied to raw Modelica source text.
//!
//! Five independent lexical checks, run unconditionally and in a fixed order.
//! These are heuristics over the raw text, not a grammar: no AST is built, no
//! identifiers are resolved, and string/comment context is ignored except
//! where noted. One check's outcome never short-circuits another.

use crate::models::Diagnostic;
use once_cell::sync::Lazy;
use regex::Regex;

static DEFINITION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(model|package|class)\b").unwrap());
static BLOCK_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(model|package|class|function|block)\s+\w+").unwrap());
static BLOCK_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bend\s+\w+;").unwrap());
static VAR_DECL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(Real|Integer|Boolean)\s+\w+").unwrap());
static EQUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bequation\b").unwrap());
static ALGORITHM: Lazy<Regex> = Lazy::new(|| Regex::new(r"\balgorithm\b").unwrap());
static CONTROL_KEYWORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(if|for|when|while)").unwrap());

/// Check one file's text and return its diagnostics: all errors first, then
/// all warnings, each group in check order. Pure function, no I/O.
pub fn check_source(content: &str) -> Vec<Diagnostic> {
    let mut errors: Vec<Diagnostic> = Vec::new();
    let mut warnings: Vec<Diagnostic> = Vec::new();

    // 1. Every valid file must open at least one definition block.
    if !DEFINITION.is_match(content) {
        errors.push(Diagnostic::error(
            "No model, package, or class definition found",
        ));
    }

    // 2. Coarse block balance: totals only, names and nesting are not matched.
    let starts = BLOCK_START.find_iter(content).count();
    let ends = BLOCK_END.find_iter(content).count();
    if starts != ends {
        warnings.push(Diagnostic::warning(format!(
            "Mismatched definitions: {starts} starts, {ends} ends"
        )));
    }

    // 3. Typed declarations with no equation or algorithm section anywhere.
    let has_vars = VAR_DECL.is_match(content);
    let has_equations = EQUATION.is_match(content);
    let has_algorithm = ALGORITHM.is_match(content);
    if has_vars && !has_equations && !has_algorithm {
        warnings.push(Diagnostic::warning(
            "Variables declared but no equation or algorithm section",
        ));
    }

    // 4. Raw parenthesis counts, blind to string and comment context.
    let open = content.matches('(').count();
    let close = content.matches(')').count();
    if open != close {
        errors.push(Diagnostic::error(format!(
            "Unmatched parentheses: {open} open, {close} close"
        )));
    }

    // 5. Per-line missing-semicolon tripwire, 1-indexed.
    warnings.extend(missing_semicolons(content));

    errors.into_iter().chain(warnings).collect()
}

/// Flag lines that contain `=` but end without a statement terminator.
///
/// Blank lines, `//` comment lines, and `equation` section headers are
/// exempt; lines mentioning a control keyword are assumed to be continued.
/// Intentionally crude: it both under- and over-reports on multi-line
/// statements and strings containing `=`.
fn missing_semicolons(content: &str) -> Vec<Diagnostic> {
    let mut found = Vec::new();
    for (idx, line) in content.split('\n').enumerate() {
        let stripped = line.trim();
        if stripped.is_empty() || stripped.starts_with("//") {
            continue;
        }
        if EQUATION.is_match(stripped) {
            continue;
        }
        let terminated = stripped.ends_with(';')
            || stripped.ends_with("then")
            || stripped.ends_with("else")
            || stripped.ends_with(')');
        if stripped.contains('=') && !terminated && !CONTROL_KEYWORD.is_match(stripped) {
            found.push(Diagnostic::warning(format!(
                "Line {}: Possible missing semicolon",
                idx + 1
            )));
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;

    fn errors(diags: &[Diagnostic]) -> Vec<&str> {
        diags
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .map(|d| d.message.as_str())
            .collect()
    }

    fn warnings(diags: &[Diagnostic]) -> Vec<&str> {
        diags
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .map(|d| d.message.as_str())
            .collect()
    }

    #[test]
    fn test_well_formed_model_is_clean() {
        let diags = check_source("model Foo\nequation\nend Foo;\n");
        assert!(diags.is_empty(), "unexpected diagnostics: {diags:?}");
    }

    #[test]
    fn test_missing_definition_is_an_error() {
        let diags = check_source("x = 1;\n");
        assert_eq!(
            errors(&diags),
            vec!["No model, package, or class definition found"]
        );
        assert!(warnings(&diags).is_empty());
    }

    #[test]
    fn test_mismatched_start_end_totals() {
        let src = "model A\nend A;\nmodel B\n";
        let diags = check_source(src);
        assert_eq!(
            warnings(&diags),
            vec!["Mismatched definitions: 2 starts, 1 ends"]
        );
    }

    #[test]
    fn test_unmatched_parentheses_echo_counts() {
        let diags = check_source("model Foo ((( a equation end Foo;");
        assert_eq!(errors(&diags), vec!["Unmatched parentheses: 3 open, 0 close"]);
    }

    #[test]
    fn test_vars_without_equation_or_algorithm() {
        let diags = check_source("model Foo\nReal x;\nend Foo;\n");
        assert_eq!(
            warnings(&diags),
            vec!["Variables declared but no equation or algorithm section"]
        );
        assert!(errors(&diags).is_empty());
    }

    #[test]
    fn test_algorithm_section_satisfies_var_check() {
        let diags = check_source("model Foo\nReal x;\nalgorithm\n  x := 1;\nend Foo;\n");
        assert!(warnings(&diags).is_empty());
    }

    #[test]
    fn test_missing_semicolon_reports_line_number() {
        let diags = check_source("model Foo\nequation\n  y = x\nend Foo;\n");
        assert_eq!(warnings(&diags), vec!["Line 3: Possible missing semicolon"]);
    }

    #[test]
    fn test_equation_header_line_is_exempt() {
        // The header itself contains no '=', but an annotated header must
        // still be skipped by the whole-word `equation` exemption.
        let diags = check_source("model Foo\ninitial equation // x = start\nend Foo;\n");
        assert!(warnings(&diags).is_empty());
    }

    #[test]
    fn test_control_keyword_lines_are_exempt() {
        let src = "model Foo\nequation\n  when x > 1\n  y = if a then b else c\nend Foo;\n";
        assert!(warnings(&check_source(src)).is_empty());
    }

    #[test]
    fn test_trailing_then_else_paren_are_terminators() {
        let src = "model Foo\nequation\n  y = f(x)\n  z = a\nend Foo;\n";
        // Line 3 ends with ')', line 4 does not.
        assert_eq!(
            warnings(&check_source(src)),
            vec!["Line 4: Possible missing semicolon"]
        );
    }

    #[test]
    fn test_whole_word_matching_ignores_identifier_substrings() {
        // `RealValue` must not count as a Real declaration, and `modelica`
        // must not count as a definition keyword.
        let diags = check_source("package P\n  RealValue modelica;\nend P;\n");
        assert!(diags.is_empty(), "unexpected diagnostics: {diags:?}");
    }

    #[test]
    fn test_errors_precede_warnings_in_output_order() {
        let src = "Real x\n(";
        let diags = check_source(src);
        let split = diags
            .iter()
            .position(|d| d.severity == Severity::Warning)
            .unwrap();
        assert!(diags[..split]
            .iter()
            .all(|d| d.severity == Severity::Error));
        assert!(diags[split..]
            .iter()
            .all(|d| d.severity == Severity::Warning));
    }

    #[test]
    fn test_checker_is_deterministic() {
        let src = "model A\nReal x\n(unclosed\n";
        let a = check_source(src);
        let b = check_source(src);
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.severity, y.severity);
            assert_eq!(x.message, y.message);
        }
    }
}
