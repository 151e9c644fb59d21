//! Comment discovery in source text.
//!
//! [`locate`] yields every block comment and every run of line comments in
//! document order. Nothing here looks for the `@auteur` marker.

use std::iter::Peekable;

use regex::{CaptureMatches, Matches, Regex};

use crate::style::CommentSyntax;

/// Kind of comment a [`RawComment`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    /// Delimited block comment.
    Block,
    /// Run of consecutive line comments sharing a prefix.
    Line,
}

/// Comment text with its delimiters removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawComment {
    /// Comment body.
    pub text: String,
    /// Byte offset of the comment in the source.
    pub offset: usize,
    /// Where the comment came from.
    pub kind: CommentKind,
}

/// Find all comments in `text` using `syntax`.
///
/// The iterator is lazy and yields comments ordered by offset. Line comment
/// prefixes inside a block comment do not start or extend a line run. Runs
/// starting at the same offset follow the prefix declaration order.
pub fn locate<'s, 't>(text: &'t str, syntax: &'s CommentSyntax) -> Comments<'s, 't> {
    let mut sources = Vec::with_capacity(1 + syntax.line_prefixes.len());
    if let Some(block) = &syntax.block {
        sources.push(
            Source::Block(BlockComments {
                matches: block.captures_iter(text),
                line_begin: syntax.line_begin.as_ref(),
            })
            .peekable(),
        );
    }
    for prefix in &syntax.line_prefixes {
        sources.push(
            Source::Line(LineRuns {
                text,
                prefix,
                blocks: syntax.block.as_ref().map(|b| b.find_iter(text).peekable()),
                pos: 0,
            })
            .peekable(),
        );
    }
    Comments { sources }
}

/// Iterator returned by [`locate`].
pub struct Comments<'s, 't> {
    sources: Vec<Peekable<Source<'s, 't>>>,
}

impl Iterator for Comments<'_, '_> {
    type Item = RawComment;

    fn next(&mut self) -> Option<RawComment> {
        let mut earliest: Option<(usize, usize)> = None;
        for (index, source) in self.sources.iter_mut().enumerate() {
            if let Some(comment) = source.peek()
                && earliest.is_none_or(|(_, offset)| comment.offset < offset)
            {
                earliest = Some((index, comment.offset));
            }
        }
        let (index, _) = earliest?;
        self.sources[index].next()
    }
}

enum Source<'s, 't> {
    Block(BlockComments<'s, 't>),
    Line(LineRuns<'s, 't>),
}

impl Iterator for Source<'_, '_> {
    type Item = RawComment;

    fn next(&mut self) -> Option<RawComment> {
        match self {
            Self::Block(blocks) => blocks.next(),
            Self::Line(runs) => runs.next(),
        }
    }
}

/// Shortest non-overlapping spans between block delimiters.
struct BlockComments<'s, 't> {
    matches: CaptureMatches<'s, 't>,
    line_begin: Option<&'s Regex>,
}

impl Iterator for BlockComments<'_, '_> {
    type Item = RawComment;

    fn next(&mut self) -> Option<RawComment> {
        let captures = self.matches.next()?;
        let whole = captures.get(0)?;
        let body = captures.get(1).map_or("", |m| m.as_str());

        let text = match self.line_begin {
            Some(begin) => strip_line_begin(body, begin),
            None => body.to_owned(),
        };

        Some(RawComment {
            text,
            offset: whole.start(),
            kind: CommentKind::Block,
        })
    }
}

/// Remove the decoration token from every line of a block body.
///
/// The token is only stripped when followed by whitespace or the end of the
/// line, so `**bold**` survives.
fn strip_line_begin(body: &str, begin: &Regex) -> String {
    let mut out = String::with_capacity(body.len());
    for line in body.split_inclusive('\n') {
        let stripped = begin.find(line).and_then(|m| {
            let rest = &line[m.end()..];
            rest.chars()
                .next()
                .is_none_or(char::is_whitespace)
                .then_some(rest)
        });
        out.push_str(stripped.unwrap_or(line));
    }
    out
}

/// Maximal runs of consecutive lines starting with one prefix.
struct LineRuns<'s, 't> {
    text: &'t str,
    prefix: &'s Regex,
    blocks: Option<Peekable<Matches<'s, 't>>>,
    pos: usize,
}

impl<'t> LineRuns<'_, 't> {
    /// Return the line at `pos` with its terminator and the start of the next.
    fn line_at(&self, pos: usize) -> (&'t str, usize) {
        let text = self.text;
        let rest = &text[pos..];
        let len = rest.find('\n').map_or(rest.len(), |i| i + 1);
        (&rest[..len], pos + len)
    }

    /// Whether `offset` falls strictly inside a block comment span.
    ///
    /// Offsets must be queried in ascending order.
    fn in_block(&mut self, offset: usize) -> bool {
        let Some(blocks) = &mut self.blocks else {
            return false;
        };
        while blocks.next_if(|m| m.end() <= offset).is_some() {}
        blocks.peek().is_some_and(|m| m.start() < offset)
    }
}

impl Iterator for LineRuns<'_, '_> {
    type Item = RawComment;

    fn next(&mut self) -> Option<RawComment> {
        let mut start = None;
        let mut text = String::new();

        while self.pos < self.text.len() {
            let (line, next) = self.line_at(self.pos);
            let found = self
                .prefix
                .find(line)
                .filter(|m| !self.in_block(self.pos + m.end()));
            match found {
                Some(m) => {
                    start.get_or_insert(self.pos);
                    text.push_str(&line[m.end()..]);
                    self.pos = next;
                }
                None if start.is_some() => break,
                None => self.pos = next,
            }
        }

        start.map(|offset| RawComment {
            text,
            offset,
            kind: CommentKind::Line,
        })
    }
}
