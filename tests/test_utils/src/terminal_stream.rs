/// Cursor over a sequence of terminal names
///
/// Yields the end-of-input terminal once the input is exhausted.
pub struct TerminalStream<'source> {
    input: &'source [&'source str],
    end: &'source str,
    pos: usize,
}

impl<'source> TerminalStream<'source> {
    pub fn new(input: &'source [&'source str], end: &'source str) -> Self {
        Self { input, end, pos: 0 }
    }

    pub fn advance(&mut self) {
        if self.pos < self.input.len() {
            self.pos += 1;
        }
    }

    pub fn terminal(&self) -> &'source str {
        self.input.get(self.pos).copied().unwrap_or(self.end)
    }

    pub fn is_at_end(&self) -> bool {
        self.pos == self.input.len()
    }
}
