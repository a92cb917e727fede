use crate::constants::{DEFAULT_INDENT, MAX_DEPTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    Spaces(usize),
}

impl Indent {
    pub fn spaces(count: usize) -> Self {
        Indent::Spaces(count)
    }

    pub fn width(self) -> usize {
        let Indent::Spaces(count) = self;
        count
    }
}

impl Default for Indent {
    fn default() -> Self {
        Indent::Spaces(DEFAULT_INDENT)
    }
}

#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Containers nested past this depth abort the parse instead of
    /// overflowing the stack on hostile input.
    pub max_depth: usize,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    pub indent: Indent,
    /// Re-emit number tokens canonically instead of verbatim, so relaxed
    /// spellings like `007` come out as `7`.
    pub normalize_numbers: bool,
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_normalize_numbers(mut self, normalize_numbers: bool) -> Self {
        self.normalize_numbers = normalize_numbers;
        self
    }
}
