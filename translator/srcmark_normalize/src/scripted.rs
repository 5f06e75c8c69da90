use srcmark_ir::{Pos, Token, TokenKind, TokenSource};

/// A [`TokenSource`] that replays a fixed token script.
///
/// Lets individual stages be driven with hand-built streams instead of
/// lexed source text. If the script does not end with an `Eof` token,
/// one is synthesized past the last scripted position; either way the
/// source is fused and keeps returning that `Eof`.
pub struct ScriptedSource {
    tokens: std::vec::IntoIter<Token>,
    eof: Option<Token>,
}

impl ScriptedSource {
    pub fn new(tokens: Vec<Token>) -> Self {
        let eof = match tokens.last() {
            Some(last) if last.kind == TokenKind::Eof => last.clone(),
            Some(last) => Token::eof(Pos::new(last.pos.line, last.pos.column + 1)),
            None => Token::eof(Pos::new(1, 1)),
        };
        ScriptedSource {
            tokens: tokens.into_iter(),
            eof: Some(eof),
        }
    }
}

impl TokenSource for ScriptedSource {
    fn next_token(&mut self) -> Token {
        match self.tokens.next() {
            Some(token) => token,
            None => match &self.eof {
                Some(eof) => eof.clone(),
                // unreachable by construction, eof is always seeded
                None => Token::eof(Pos::DUMMY),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use srcmark_ir::{Pos, Token, TokenKind, TokenSource};

    use super::ScriptedSource;

    #[test]
    fn replays_script_then_fuses_at_eof() {
        let mut source = ScriptedSource::new(vec![Token::new(
            TokenKind::Name,
            "x",
            Pos::new(1, 1),
        )]);
        assert_eq!(source.next_token().kind, TokenKind::Name);
        let eof = source.next_token();
        assert_eq!(eof.kind, TokenKind::Eof);
        assert_eq!(eof.pos, Pos::new(1, 2));
        assert_eq!(source.next_token().kind, TokenKind::Eof);
    }

    #[test]
    fn empty_script_yields_eof_at_origin() {
        let mut source = ScriptedSource::new(Vec::new());
        let eof = source.next_token();
        assert_eq!(eof.kind, TokenKind::Eof);
        assert_eq!(eof.pos, Pos::new(1, 1));
    }
}
