use srcmark_ir::TokenKind;

/// Running bracket nesting depth for one stage.
///
/// Each stage keeps its own tracker and feeds it every token it pulls,
/// so "top level" is always judged against the stream that stage
/// actually sees. Unmatched closers saturate at zero rather than
/// underflow; recovery from unbalanced input is the parser's job.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct BracketTracker {
    depth: u32,
}

impl BracketTracker {
    pub(crate) fn observe(&mut self, kind: TokenKind) {
        if kind.is_open_bracket() {
            self.depth += 1;
        } else if kind.is_close_bracket() {
            self.depth = self.depth.saturating_sub(1);
        }
    }

    pub(crate) fn is_top_level(self) -> bool {
        self.depth == 0
    }
}
