use srcmark_ir::{IndentPolicy, LanguageProfile, Pos, Token, TokenKind, TokenSource};

use crate::brackets::BracketTracker;
use crate::buffer::PendingBuffer;
use crate::embedded_newlines;

/// The off-side rule engine: turns indentation into block structure.
///
/// When a statement that expects a block ends its line with the
/// introducer token, the introducer is retyped to `Indent` and a block
/// opens. Blocks close when a later line's indentation recedes, each
/// closure emitting a synthesized `Dedent`; receding several levels at
/// once emits one `Dedent` per level, innermost block first.
///
/// The engine learns the file's columns-per-indent width from the first
/// indented body line and maps every later line's leading width to a
/// block level with it. Uneven widths are rounded per the profile's
/// [`IndentPolicy`].
///
/// Two block shapes exist:
///
/// * multi-line, body on following deeper-indented lines, closed by a
///   measured dedent or end of input;
/// * one-line, body on the header line itself (`if x: y`), closed right
///   after the statement's terminator and never registered as an
///   indentation level.
///
/// Dedents for a statement line are spliced directly after its
/// terminator. The trailing trivia of that line, and any blank or
/// comment lines after it, are held until the next line's indentation
/// is known, then re-emitted after the dedents. Comment and blank lines
/// never open or close anything.
/// Where the engine stands relative to line boundaries.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum LinePhase {
    /// The next significant token starts a fresh line and gets measured.
    Start,
    /// Mid-line; tokens stream through without measurement.
    Within,
    /// Between lines with blocks open: trivia are held until the next
    /// line's level fixes the dedent decision.
    Holding,
}

/// Whether the current statement may open a block at the introducer.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Arming {
    Idle,
    Armed,
}

pub struct OffsideFilter<S> {
    upstream: S,
    profile: LanguageProfile,
    pending: PendingBuffer,
    /// Trivia held while a dedent decision is pending.
    trivia: Vec<Token>,
    brackets: BracketTracker,
    /// Persistent open blocks (indentation levels).
    open_blocks: u32,
    /// Blocks opened on the current line with their body inline.
    inline_open: u32,
    /// Learned width of one indentation level, in columns.
    cols_per_indent: Option<u32>,
    arming: Arming,
    phase: LinePhase,
    /// Line of the last substantive token, used for dedent positions.
    last_content_line: u32,
}

impl<S: TokenSource> OffsideFilter<S> {
    pub fn new(upstream: S, profile: LanguageProfile) -> Self {
        OffsideFilter {
            upstream,
            profile,
            pending: PendingBuffer::new(),
            trivia: Vec::new(),
            brackets: BracketTracker::default(),
            open_blocks: 0,
            inline_open: 0,
            cols_per_indent: None,
            arming: Arming::Idle,
            phase: LinePhase::Start,
            last_content_line: 1,
        }
    }

    fn dispatch(&mut self, token: Token) {
        match token.kind {
            kind if kind.is_trivia() => self.handle_trivia(token),
            TokenKind::Terminate => self.handle_terminate(token),
            TokenKind::Eof => self.handle_eof(token),
            _ => self.handle_significant(token),
        }
    }

    fn handle_trivia(&mut self, token: Token) {
        if self.phase == LinePhase::Holding {
            self.trivia.push(token);
            return;
        }
        if token.kind == TokenKind::Newline && self.brackets.is_top_level() {
            // a line break without a terminator still closes any
            // one-line blocks left open on this line
            self.emit_dedents(self.inline_open, Pos::new(token.pos.line, 1));
            self.inline_open = 0;
            self.arming = Arming::Idle;
            self.pending.push_back(token);
            // with blocks open, everything after the line break is held
            // until the next line's indentation is known
            self.phase = if self.open_blocks > 0 {
                LinePhase::Holding
            } else {
                LinePhase::Start
            };
            return;
        }
        self.pending.push_back(token);
    }

    fn handle_terminate(&mut self, token: Token) {
        self.arming = Arming::Idle;
        let top = self.brackets.is_top_level();
        let pos = token.pos.at_column_one();
        self.pending.push_back(token);
        if top {
            self.emit_dedents(self.inline_open, pos);
            self.inline_open = 0;
            if self.open_blocks > 0 {
                self.phase = LinePhase::Holding;
            }
        }
    }

    fn handle_eof(&mut self, token: Token) {
        let total = self.open_blocks + self.inline_open;
        if total > 0 {
            let pos = Pos::new(self.last_content_line, 1);
            self.emit_dedents(total, pos);
            self.open_blocks = 0;
            self.inline_open = 0;
        }
        self.flush_trivia();
        self.phase = LinePhase::Start;
        self.pending.push_back(token);
    }

    fn handle_significant(&mut self, token: Token) {
        let starts_line = self.phase != LinePhase::Within;
        match self.phase {
            LinePhase::Holding => self.finish_holding(&token),
            LinePhase::Start if self.brackets.is_top_level() => {
                // a header line leaves no terminator behind, so an
                // unindented next line dedents here, before its token
                let count = self.measure(&token);
                self.emit_dedents(count, Pos::new(self.last_content_line, 1));
            }
            _ => {}
        }
        self.phase = LinePhase::Within;

        self.brackets.observe(token.kind);
        let top = self.brackets.is_top_level();

        if top
            && self.profile.expects_block.contains(token.kind)
            && (starts_line || self.inline_open > 0)
        {
            self.arming = Arming::Armed;
        }

        if token.kind == self.profile.block_introducer && top && self.arming == Arming::Armed {
            self.open_block(token);
            return;
        }

        // a multi-line token ends past its start line, and the dedent
        // for its statement must not land before that end
        self.last_content_line = token.pos.line + embedded_newlines(&token.text);
        self.pending.push_back(token);
    }

    /// Ends the trivia-holding window: measures the new line, splices
    /// dedents after the already-delivered terminator, then releases
    /// the held trivia.
    fn finish_holding(&mut self, token: &Token) {
        let count = self.measure(token);
        self.emit_dedents(count, Pos::new(self.last_content_line, 1));
        self.flush_trivia();
        self.phase = LinePhase::Start;
    }

    /// Maps the leading width of the line `token` starts to a block
    /// level and reports how many blocks fall away. Learns the
    /// columns-per-indent width on the first indented line.
    fn measure(&mut self, token: &Token) -> u32 {
        if self.open_blocks == 0 {
            return 0;
        }
        let width = token.pos.column.saturating_sub(1);
        if width == 0 {
            let count = self.open_blocks;
            self.open_blocks = 0;
            return count;
        }
        if self.cols_per_indent.is_none() {
            self.cols_per_indent = Some((width / self.open_blocks).max(1));
            tracing::debug!(width, blocks = self.open_blocks, "indent width learned");
        }
        let unit = match self.cols_per_indent {
            Some(unit) => unit,
            None => width,
        };
        let level = match self.profile.indent_policy {
            IndentPolicy::Tolerant => width.div_ceil(unit),
            IndentPolicy::Strict => width / unit,
        };
        if level < self.open_blocks {
            let count = self.open_blocks - level;
            self.open_blocks = level;
            count
        } else {
            0
        }
    }

    /// Retypes the armed introducer to `Indent` and classifies the new
    /// block as one-line or multi-line by bounded lookahead.
    fn open_block(&mut self, mut token: Token) {
        token.kind = TokenKind::Indent;
        self.arming = Arming::Idle;
        self.last_content_line = token.pos.line;
        tracing::trace!(line = token.pos.line, "block opened");
        self.pending.push_back(token);

        let mut looked = Vec::new();
        let inline = loop {
            let next = self.upstream.next_token();
            let pause = matches!(next.kind, TokenKind::Whitespace | TokenKind::Comment);
            let kind = next.kind;
            looked.push(next);
            if pause {
                continue;
            }
            break !matches!(kind, TokenKind::Newline | TokenKind::Eof);
        };
        if inline {
            self.inline_open += 1;
        } else {
            self.open_blocks += 1;
        }

        // replay the lookahead through normal handling so line starts,
        // nesting, and end of input are still tracked
        for pulled in looked {
            self.dispatch(pulled);
        }
    }

    fn emit_dedents(&mut self, count: u32, pos: Pos) {
        for _ in 0..count {
            tracing::trace!(line = pos.line, "block closed");
            self.pending
                .push_back(Token::synthesized(TokenKind::Dedent, pos));
        }
    }

    fn flush_trivia(&mut self) {
        self.pending.extend(self.trivia.drain(..));
    }
}

impl<S: TokenSource> TokenSource for OffsideFilter<S> {
    fn next_token(&mut self) -> Token {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return token;
            }
            let token = self.upstream.next_token();
            self.dispatch(token);
        }
    }
}
