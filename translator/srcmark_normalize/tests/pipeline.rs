//! End-to-end tests: real source text through the lexer and the full
//! normalization chain.

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use srcmark_ir::{IndentPolicy, LanguageProfile, TokenKind};
use srcmark_lexer::Lexer;
use srcmark_normalize::normalize;

fn pipeline(source: &str) -> Vec<srcmark_ir::Token> {
    normalize(Lexer::new(source), LanguageProfile::python())
}

fn kinds(tokens: &[srcmark_ir::Token]) -> Vec<TokenKind> {
    tokens.iter().map(|t| t.kind).collect()
}

fn significant_kinds(tokens: &[srcmark_ir::Token]) -> Vec<TokenKind> {
    tokens
        .iter()
        .map(|t| t.kind)
        .filter(|k| !k.is_trivia() && *k != TokenKind::Eof)
        .collect()
}

#[test]
fn flat_statements_get_terminators_only() {
    let tokens = pipeline("x = 1\ny = 2\n");
    assert_eq!(
        significant_kinds(&tokens),
        vec![
            TokenKind::Name,
            TokenKind::Op,
            TokenKind::Number,
            TokenKind::Terminate,
            TokenKind::Name,
            TokenKind::Op,
            TokenKind::Number,
            TokenKind::Terminate,
        ]
    );
}

#[test]
fn simple_block_round_trip() {
    let tokens = pipeline("if x:\n    y\n");
    assert_eq!(
        significant_kinds(&tokens),
        vec![
            TokenKind::KwIf,
            TokenKind::Name,
            TokenKind::Indent,
            TokenKind::Name,
            TokenKind::Terminate,
            TokenKind::Dedent,
        ]
    );
}

#[test]
fn one_line_block() {
    let tokens = pipeline("if x: y\nz\n");
    assert_eq!(
        significant_kinds(&tokens),
        vec![
            TokenKind::KwIf,
            TokenKind::Name,
            TokenKind::Indent,
            TokenKind::Name,
            TokenKind::Terminate,
            TokenKind::Dedent,
            TokenKind::Name,
            TokenKind::Terminate,
        ]
    );
}

#[test]
fn full_function_with_docstring_and_soft_keyword() {
    let source = "def greet(name):\n    \"\"\"Say hello.\"\"\"\n    if name:\n        print name\ngreet(1)\n";
    let tokens = pipeline(source);
    assert_eq!(
        significant_kinds(&tokens),
        vec![
            TokenKind::KwDef,
            TokenKind::Name,
            TokenKind::LParen,
            TokenKind::Name,
            TokenKind::RParen,
            TokenKind::Indent,
            TokenKind::DocstringStart,
            TokenKind::DocstringEnd,
            TokenKind::Terminate,
            TokenKind::KwIf,
            TokenKind::Name,
            TokenKind::Indent,
            TokenKind::KwPrint,
            TokenKind::Name,
            TokenKind::Terminate,
            TokenKind::Dedent,
            TokenKind::Dedent,
            TokenKind::Name,
            TokenKind::LParen,
            TokenKind::Number,
            TokenKind::RParen,
            TokenKind::Terminate,
        ]
    );
}

#[test]
fn print_call_is_a_name() {
    let tokens = pipeline("print(x)\n");
    assert_eq!(
        significant_kinds(&tokens),
        vec![
            TokenKind::Name,
            TokenKind::LParen,
            TokenKind::Name,
            TokenKind::RParen,
            TokenKind::Terminate,
        ]
    );
}

#[test]
fn match_case_statement() {
    let source = "match command:\n    case 1:\n        go()\n";
    let tokens = pipeline(source);
    assert_eq!(
        significant_kinds(&tokens),
        vec![
            TokenKind::KwMatch,
            TokenKind::Name,
            TokenKind::Indent,
            TokenKind::KwCase,
            TokenKind::Number,
            TokenKind::Indent,
            TokenKind::Name,
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::Terminate,
            TokenKind::Dedent,
            TokenKind::Dedent,
        ]
    );
}

#[test]
fn match_as_variable_stays_a_name() {
    let tokens = pipeline("match = 1\n");
    assert_eq!(
        significant_kinds(&tokens),
        vec![
            TokenKind::Name,
            TokenKind::Op,
            TokenKind::Number,
            TokenKind::Terminate,
        ]
    );
}

#[test]
fn bracketed_expression_spans_lines_without_terminating() {
    let source = "x = (1 +\n     2)\n";
    let tokens = pipeline(source);
    let terminators = kinds(&tokens)
        .iter()
        .filter(|&&k| k == TokenKind::Terminate)
        .count();
    assert_eq!(terminators, 1);
}

#[test]
fn blank_lines_between_blocks() {
    let source = "if x:\n    y\n\n\nz\n";
    let tokens = pipeline(source);
    // the dedent lands right after y's terminator, before the blanks
    let y_index = tokens.iter().position(|t| t.text == "y").unwrap();
    let after: Vec<TokenKind> = kinds(&tokens)[y_index + 1..y_index + 3].to_vec();
    assert_eq!(after, vec![TokenKind::Terminate, TokenKind::Dedent]);
}

#[test]
fn eof_without_trailing_newline() {
    let tokens = pipeline("if x:\n    y");
    assert_eq!(
        significant_kinds(&tokens),
        vec![
            TokenKind::KwIf,
            TokenKind::Name,
            TokenKind::Indent,
            TokenKind::Name,
            TokenKind::Terminate,
            TokenKind::Dedent,
        ]
    );
}

#[test]
fn indents_and_dedents_always_balance() {
    let sources = [
        "",
        "x\n",
        "if a:\n    b\n",
        "if a:\n    if b:\n        c\n",
        "if a: b\n",
        "class A:\n    def m(self):\n        pass\n\nx = A()\n",
        "if a:\n    b\nelse:\n    c\n",
        "try:\n    x\nexcept E:\n    y\nfinally:\n    z\n",
    ];
    for source in sources {
        let tokens = pipeline(source);
        let k = kinds(&tokens);
        let indents = k.iter().filter(|&&x| x == TokenKind::Indent).count();
        let dedents = k.iter().filter(|&&x| x == TokenKind::Dedent).count();
        assert_eq!(indents, dedents, "unbalanced for {source:?}");
    }
}

#[test]
fn source_text_survives_normalization() {
    let source = "def f(a, b):\n    \"\"\"Add.\n\n    Twice.\n    \"\"\"\n    return a + b\n\nprint f(1, 2)\n";
    let tokens = pipeline(source);
    let rebuilt: String = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(rebuilt, source);
}

#[test]
fn two_space_indentation() {
    let source = "if a:\n  if b:\n    c\nd\n";
    let tokens = pipeline(source);
    let k = significant_kinds(&tokens);
    assert_eq!(
        k,
        vec![
            TokenKind::KwIf,
            TokenKind::Name,
            TokenKind::Indent,
            TokenKind::KwIf,
            TokenKind::Name,
            TokenKind::Indent,
            TokenKind::Name,
            TokenKind::Terminate,
            TokenKind::Dedent,
            TokenKind::Dedent,
            TokenKind::Name,
            TokenKind::Terminate,
        ]
    );
}

#[test]
fn strict_policy_closes_misaligned_blocks_early() {
    let source = "if a:\n    if b:\n      c\n";
    let tolerant = normalize(Lexer::new(source), LanguageProfile::python());
    let strict = normalize(
        Lexer::new(source),
        LanguageProfile::python().with_indent_policy(IndentPolicy::Strict),
    );

    let c_index = |tokens: &[srcmark_ir::Token]| tokens.iter().position(|t| t.text == "c").unwrap();
    let dedents_before = |tokens: &[srcmark_ir::Token]| {
        let i = c_index(tokens);
        tokens[..i]
            .iter()
            .filter(|t| t.kind == TokenKind::Dedent)
            .count()
    };
    // 6 columns with a learned width of 4: tolerant keeps c inside the
    // inner block, strict closes the inner block before it
    assert_eq!(dedents_before(&tolerant), 0);
    assert_eq!(dedents_before(&strict), 1);
}

#[test]
fn decorator_line_does_not_open_a_block() {
    let source = "@wraps\ndef f():\n    x\n";
    let tokens = pipeline(source);
    let k = kinds(&tokens);
    assert_eq!(k.iter().filter(|&&x| x == TokenKind::Indent).count(), 1);
    assert_eq!(k.iter().filter(|&&x| x == TokenKind::Dedent).count(), 1);
}

#[test]
fn block_ending_in_multi_line_string_keeps_lines_monotonic() {
    let source = "def f():\n    x = \"\"\"a\nb\"\"\"\ny\n";
    let tokens = pipeline(source);
    // the dedent follows the string onto its closing line
    let dedent = tokens
        .iter()
        .find(|t| t.kind == TokenKind::Dedent)
        .unwrap();
    assert_eq!(dedent.pos.line, 3);
    let lines: Vec<u32> = tokens.iter().map(|t| t.pos.line).collect();
    assert!(lines.windows(2).all(|w| w[0] <= w[1]), "lines: {lines:?}");
}

#[test]
fn line_numbers_are_monotonic() {
    let source = "class A:\n    def m(self):\n        \"\"\"Doc.\n        \"\"\"\n        x\n\ny\n";
    let tokens = pipeline(source);
    let lines: Vec<u32> = tokens.iter().map(|t| t.pos.line).collect();
    assert!(lines.windows(2).all(|w| w[0] <= w[1]), "lines: {lines:?}");
}
