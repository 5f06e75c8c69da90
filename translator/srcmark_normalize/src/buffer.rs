use std::collections::VecDeque;

use srcmark_ir::Token;

/// FIFO of tokens a stage has produced but not yet handed downstream.
///
/// Stages that look ahead or synthesize tokens park everything here and
/// drain it one token per `next_token` call, which keeps the pull-based
/// contract intact while letting a single upstream pull fan out into
/// several deliveries.
#[derive(Debug, Default)]
pub(crate) struct PendingBuffer {
    tokens: VecDeque<Token>,
}

impl PendingBuffer {
    pub(crate) fn new() -> Self {
        PendingBuffer {
            tokens: VecDeque::new(),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub(crate) fn push_back(&mut self, token: Token) {
        self.tokens.push_back(token);
    }

    pub(crate) fn pop_front(&mut self) -> Option<Token> {
        self.tokens.pop_front()
    }

    pub(crate) fn extend(&mut self, tokens: impl IntoIterator<Item = Token>) {
        self.tokens.extend(tokens);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use srcmark_ir::{Token, TokenKind};

    use super::PendingBuffer;

    #[test]
    fn drains_in_push_order() {
        let mut buffer = PendingBuffer::new();
        buffer.push_back(Token::dummy(TokenKind::Name));
        buffer.push_back(Token::dummy(TokenKind::Colon));
        buffer.extend([Token::dummy(TokenKind::Newline)]);

        let kinds: Vec<TokenKind> = std::iter::from_fn(|| buffer.pop_front())
            .map(|t| t.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Name, TokenKind::Colon, TokenKind::Newline]
        );
        assert!(buffer.is_empty());
    }
}
