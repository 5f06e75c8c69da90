//! Implementations of the `srcmark` subcommands.

use srcmark_ir::{LanguageProfile, Token, TokenKind, TokenSource};
use srcmark_lexer::{normalize_line_endings, Lexer};
use srcmark_normalize::normalize;

use crate::CliError;

fn read_source(path: &str) -> Result<String, CliError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_string(),
        source,
    })?;
    tracing::debug!(path, bytes = raw.len(), "source read");
    Ok(normalize_line_endings(&raw).into_owned())
}

fn print_tokens(tokens: &[Token]) {
    for token in tokens {
        println!("  {token:?}");
    }
}

/// `srcmark raw <file>`: dump the raw lexer stream, nothing normalized.
pub fn raw_tokens(path: &str) -> Result<(), CliError> {
    let source = read_source(path)?;
    let mut lexer = Lexer::new(&source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            break;
        }
    }
    println!("Raw tokens for '{path}' ({} tokens):", tokens.len());
    print_tokens(&tokens);
    Ok(())
}

/// `srcmark tokens <file>`: dump the fully normalized stream.
pub fn normalized_tokens(path: &str, profile: LanguageProfile) -> Result<(), CliError> {
    let source = read_source(path)?;
    let tokens = normalize(Lexer::new(&source), profile);
    println!("Normalized tokens for '{path}' ({} tokens):", tokens.len());
    print_tokens(&tokens);
    Ok(())
}

/// `srcmark check <file>`: run the pipeline and verify its structural
/// guarantees hold for this input. Returns the number of violations.
pub fn check_file(path: &str, profile: LanguageProfile) -> Result<usize, CliError> {
    let source = read_source(path)?;
    let tokens = normalize(Lexer::new(&source), profile);
    let violations = check_tokens(&tokens, &source);
    tracing::debug!(
        tokens = tokens.len(),
        violations = violations.len(),
        "check finished"
    );
    for violation in &violations {
        eprintln!("{path}: {violation}");
    }
    if violations.is_empty() {
        let errors = tokens.iter().filter(|t| t.kind == TokenKind::Error).count();
        if errors > 0 {
            println!("{path}: ok ({errors} unclassified tokens passed through)");
        } else {
            println!("{path}: ok");
        }
    }
    Ok(violations.len())
}

fn check_tokens(tokens: &[Token], source: &str) -> Vec<String> {
    let mut violations = Vec::new();

    let indents = tokens.iter().filter(|t| t.kind == TokenKind::Indent).count();
    let dedents = tokens.iter().filter(|t| t.kind == TokenKind::Dedent).count();
    if indents != dedents {
        violations.push(format!("unbalanced blocks: {indents} indents, {dedents} dedents"));
    }

    let rebuilt: String = tokens.iter().map(|t| t.text.as_str()).collect();
    if rebuilt != source {
        violations.push("token texts do not reassemble the source".to_string());
    }

    let mut last_line = 0;
    for token in tokens {
        if token.pos.line < last_line {
            violations.push(format!(
                "line numbers regress at {:?} @ {}",
                token.kind, token.pos
            ));
            break;
        }
        last_line = token.pos.line;
    }

    match tokens.last() {
        Some(last) if last.kind == TokenKind::Eof => {}
        _ => violations.push("stream does not end with Eof".to_string()),
    }

    violations
}
