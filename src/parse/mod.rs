pub(crate) mod wrap;

use memchr::memchr2;
use smol_str::SmolStr;

use crate::text::{is_color_literal, is_json_whitespace};
use crate::types::{
    ArrayNode, BoolNode, Entry, Node, NullNode, NumberNode, ObjectNode, Span, StringNode,
};
use crate::{ParseError, ParseOptions, Result};

/// Parse one JSON value from `input`; the whole buffer must be consumed
/// apart from surrounding whitespace.
pub fn from_str<'a>(input: &'a str, options: &ParseOptions) -> Result<Node<'a>> {
    let mut reader = Reader::new(input, options);
    reader.parse_root()
}

/// Plain parse first; on failure, retry with the callback wrapper stripped.
/// The plain error wins when neither applies.
pub fn document_from_str<'a>(input: &'a str, options: &ParseOptions) -> Result<Document<'a>> {
    let plain = match from_str(input, options) {
        Ok(root) => {
            return Ok(Document {
                raw: input,
                root,
                wrapper: None,
            })
        }
        Err(err) => err,
    };
    let Some(parts) = wrap::split_callback(input) else {
        return Err(plain);
    };
    let Ok(root) = from_str(parts.inner, options) else {
        return Err(plain);
    };
    Ok(Document {
        raw: input,
        root,
        wrapper: Some(Wrapper {
            prefix: SmolStr::new(parts.prefix.trim()),
            suffix: SmolStr::new(parts.suffix.trim()),
            inner: parts.inner_span,
        }),
    })
}

/// A parsed buffer plus the callback wrapper, when one was stripped.
///
/// With a wrapper present, node offsets are relative to the inner payload;
/// `wrapper.inner` locates that payload inside `raw`.
#[derive(Debug, Clone)]
pub struct Document<'a> {
    pub raw: &'a str,
    pub root: Node<'a>,
    pub wrapper: Option<Wrapper>,
}

impl<'a> Document<'a> {
    /// The text the tree's spans index into.
    pub fn payload(&self) -> &'a str {
        match &self.wrapper {
            Some(wrapper) => &self.raw[wrapper.inner.start..wrapper.inner.end],
            None => self.raw,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wrapper {
    /// Trimmed text up to and including the opening parenthesis.
    pub prefix: SmolStr,
    /// Trimmed text from the closing parenthesis to the end.
    pub suffix: SmolStr,
    pub inner: Span,
}

struct Reader<'a> {
    input: &'a str,
    bytes: &'a [u8],
    max_depth: usize,
    depth: usize,
}

impl<'a> Reader<'a> {
    fn new(input: &'a str, options: &ParseOptions) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            max_depth: options.max_depth,
            depth: 0,
        }
    }

    fn parse_root(&mut self) -> Result<Node<'a>> {
        let node = self.parse_value(0)?;
        let end = self.skip_whitespace(node.end());
        if end < self.bytes.len() {
            return Err(self.unexpected(end));
        }
        Ok(node)
    }

    fn parse_value(&mut self, start: usize) -> Result<Node<'a>> {
        let index = self.expect_index(self.skip_whitespace(start))?;
        match self.bytes[index] {
            b'"' => self.parse_string(index).map(Node::String),
            b'[' => self.parse_array(index),
            b'{' => self.parse_object(index),
            b'-' | b'0'..=b'9' => self.parse_number(index).map(Node::Number),
            _ => self.parse_keyword(index),
        }
    }

    /// Scan from the opening quote to the first unescaped `"`. A backslash
    /// skips the next byte; `\x` skips two more and `\u` four more. That
    /// relaxed escape grammar (standard JSON has no `\x`) is kept on
    /// purpose: it decides where the string is judged to end. No escape
    /// decoding happens; `source` keeps the raw text.
    fn parse_string(&mut self, start: usize) -> Result<StringNode<'a>> {
        let mut index = start + 1;
        loop {
            index = self.expect_index(index)?;
            match self.bytes[index] {
                b'"' => break,
                b'\\' => {
                    index = self.expect_index(index + 1)?;
                    index = match self.bytes[index] {
                        b'x' => self.expect_index(index + 2)?,
                        b'u' => self.expect_index(index + 4)?,
                        _ => index,
                    };
                    index += 1;
                }
                _ => match memchr2(b'"', b'\\', &self.bytes[index..]) {
                    Some(offset) => index += offset,
                    None => return Err(ParseError::UnexpectedEof),
                },
            }
        }
        let source = &self.input[start + 1..index];
        Ok(StringNode {
            source,
            color: is_color_literal(source),
            span: Span {
                start,
                end: index + 1,
            },
        })
    }

    fn parse_number(&mut self, start: usize) -> Result<NumberNode<'a>> {
        let mut index = self.scan_decimal(start, true)?;
        if matches!(self.bytes.get(index), Some(b'e') | Some(b'E')) {
            index = self.scan_decimal(index + 1, false)?;
        }
        let source = &self.input[start..index];
        let value: f64 = source.parse().map_err(|_| self.unexpected(start))?;
        Ok(NumberNode {
            source,
            value,
            span: Span { start, end: index },
        })
    }

    /// Digit run with an optional sign and, in the fractional form, at most
    /// one decimal point. A digit is mandatory right after the sign and
    /// right after the point. Leading zeros are accepted, matching the
    /// relaxed grammar. End of input terminates a well-formed run.
    fn scan_decimal(&self, start: usize, fractional: bool) -> Result<usize> {
        let mut index = start;
        if matches!(self.bytes.get(index), Some(b'+') | Some(b'-')) {
            index += 1;
        }
        let first = index;
        let mut dot: Option<usize> = None;
        loop {
            let digit_required = index == first || dot == Some(index.wrapping_sub(1));
            let Some(&byte) = self.bytes.get(index) else {
                if digit_required {
                    return Err(ParseError::UnexpectedEof);
                }
                return Ok(index);
            };
            if digit_required && !byte.is_ascii_digit() {
                return Err(self.unexpected(index));
            }
            match byte {
                b'0'..=b'9' => index += 1,
                b'.' => {
                    if !fractional || dot.is_some() {
                        return Err(self.unexpected(index));
                    }
                    dot = Some(index);
                    index += 1;
                }
                _ => return Ok(index),
            }
        }
    }

    fn parse_keyword(&self, start: usize) -> Result<Node<'a>> {
        let rest = &self.bytes[start..];
        if rest.starts_with(b"null") {
            return Ok(Node::Null(NullNode {
                span: Span {
                    start,
                    end: start + 4,
                },
            }));
        }
        if rest.starts_with(b"true") {
            return Ok(Node::Bool(BoolNode {
                value: true,
                span: Span {
                    start,
                    end: start + 4,
                },
            }));
        }
        if rest.starts_with(b"false") {
            return Ok(Node::Bool(BoolNode {
                value: false,
                span: Span {
                    start,
                    end: start + 5,
                },
            }));
        }
        Err(self.unexpected(start))
    }

    fn parse_array(&mut self, start: usize) -> Result<Node<'a>> {
        self.enter(start)?;
        let mut items: Vec<Node<'a>> = Vec::new();
        let mut index = start + 1;
        loop {
            index = self.expect_index(self.skip_whitespace(index))?;
            if self.bytes[index] == b']' {
                break;
            }
            if !items.is_empty() {
                index = self.expect_token(index, b',')? + 1;
            }
            let item = self.parse_value(index)?;
            index = item.end();
            items.push(item);
        }
        self.leave();
        Ok(Node::Array(ArrayNode {
            items,
            span: Span {
                start,
                end: index + 1,
            },
        }))
    }

    fn parse_object(&mut self, start: usize) -> Result<Node<'a>> {
        self.enter(start)?;
        let mut entries: Vec<Entry<'a>> = Vec::new();
        let mut index = start + 1;
        loop {
            index = self.expect_index(self.skip_whitespace(index))?;
            if self.bytes[index] == b'}' {
                break;
            }
            if !entries.is_empty() {
                index = self.expect_token(index, b',')? + 1;
                index = self.expect_index(self.skip_whitespace(index))?;
            }
            self.expect_token(index, b'"')?;
            let key = self.parse_string(index)?;
            index = self.expect_index(self.skip_whitespace(key.span.end))?;
            index = self.expect_token(index, b':')? + 1;
            let value = self.parse_value(index)?;
            index = value.end();
            entries.push(Entry { key, value });
        }
        self.leave();
        Ok(Node::Object(ObjectNode {
            entries,
            span: Span {
                start,
                end: index + 1,
            },
        }))
    }

    fn skip_whitespace(&self, mut index: usize) -> usize {
        while index < self.bytes.len() && is_json_whitespace(self.bytes[index]) {
            index += 1;
        }
        index
    }

    fn expect_index(&self, index: usize) -> Result<usize> {
        if index < self.bytes.len() {
            Ok(index)
        } else {
            Err(ParseError::UnexpectedEof)
        }
    }

    fn expect_token(&self, index: usize, token: u8) -> Result<usize> {
        if self.bytes[index] == token {
            Ok(index)
        } else {
            Err(self.unexpected(index))
        }
    }

    fn enter(&mut self, offset: usize) -> Result<()> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(ParseError::DepthLimit {
                limit: self.max_depth,
                offset,
            });
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn unexpected(&self, index: usize) -> ParseError {
        let found = self
            .input
            .get(index..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        ParseError::UnexpectedToken {
            found,
            offset: index,
        }
    }
}
