//! Keyword resolution for the raw lexer.
//!
//! Hard keywords always lex as their keyword kind. Soft keywords
//! (`match`, `case`, `type`, `print`, `exec`) also lex as their keyword
//! kind here — the raw lexer is context-free, and deciding whether one is
//! really a name is the keyword filter's job downstream.

use srcmark_ir::TokenKind;

/// Look up a keyword by text.
///
/// Returns the corresponding `TokenKind` if the text is a (hard or soft)
/// keyword, `None` for a regular identifier.
///
/// Uses length-bucketing for fast rejection: identifiers whose length
/// falls outside the 2-7 range are rejected without any comparison.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    let len = text.len();
    if !(2..=7).contains(&len) {
        return None;
    }

    match len {
        2 => match text {
            "if" => Some(TokenKind::KwIf),
            _ => None,
        },
        3 => match text {
            "def" => Some(TokenKind::KwDef),
            "for" => Some(TokenKind::KwFor),
            "try" => Some(TokenKind::KwTry),
            _ => None,
        },
        4 => match text {
            "case" => Some(TokenKind::KwCase),
            "elif" => Some(TokenKind::KwElif),
            "else" => Some(TokenKind::KwElse),
            "exec" => Some(TokenKind::KwExec),
            "pass" => Some(TokenKind::KwPass),
            "type" => Some(TokenKind::KwType),
            "with" => Some(TokenKind::KwWith),
            _ => None,
        },
        5 => match text {
            "class" => Some(TokenKind::KwClass),
            "match" => Some(TokenKind::KwMatch),
            "print" => Some(TokenKind::KwPrint),
            "while" => Some(TokenKind::KwWhile),
            _ => None,
        },
        6 => match text {
            "except" => Some(TokenKind::KwExcept),
            "import" => Some(TokenKind::KwImport),
            "return" => Some(TokenKind::KwReturn),
            _ => None,
        },
        7 => match text {
            "finally" => Some(TokenKind::KwFinally),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hard_keywords_resolve() {
        assert_eq!(lookup("if"), Some(TokenKind::KwIf));
        assert_eq!(lookup("def"), Some(TokenKind::KwDef));
        assert_eq!(lookup("finally"), Some(TokenKind::KwFinally));
    }

    #[test]
    fn soft_keywords_resolve_to_candidate_kinds() {
        assert_eq!(lookup("match"), Some(TokenKind::KwMatch));
        assert_eq!(lookup("case"), Some(TokenKind::KwCase));
        assert_eq!(lookup("type"), Some(TokenKind::KwType));
        assert_eq!(lookup("print"), Some(TokenKind::KwPrint));
        assert_eq!(lookup("exec"), Some(TokenKind::KwExec));
    }

    #[test]
    fn identifiers_do_not_resolve() {
        assert_eq!(lookup("spam"), None);
        assert_eq!(lookup("x"), None);
        assert_eq!(lookup("iffy"), None);
        assert_eq!(lookup("classmethod"), None);
    }
}
