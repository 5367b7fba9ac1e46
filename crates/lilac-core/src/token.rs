//! Tokenizer contract consumed by the loader, and a minimal scanner that
//! satisfies it.
//!
//! spec.md places the textual tokenizer itself out of scope and describes
//! only the entity stream the loader consumes (§6.2). [`MeshTokenizer`] is
//! that consumed contract; [`TextTokenizer`] is a small scanner over the
//! subset of Shastina-style syntax Lilac Mesh bodies actually use — `%`
//! opens a metacommand, bare words are its tokens, `;` closes it, and
//! outside of a metacommand a bare word is either a decimal numeric
//! literal or an operator name. It does not implement Shastina's full
//! grammar (string literals, numeric bases, bracketed arrays), the same
//! way the teacher's glTF reader in `rules/mesh/parsing.rs` only reads the
//! chunks its caller needs rather than the whole container format.

use crate::error::MeshError;

/// One lexical entity from a mesh source stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entity {
    /// `%`, opening a metacommand.
    BeginMeta,
    /// `;`, closing a metacommand.
    EndMeta,
    /// A bare word inside a metacommand.
    MetaToken(String),
    /// A bare word outside a metacommand whose first character is a
    /// decimal digit.
    Numeric(String),
    /// A bare word outside a metacommand that is not a numeric literal.
    Operation(String),
    /// End of the source stream.
    Eof,
}

/// The entity-stream contract the loader is generic over (spec.md §6.2).
///
/// Keeping the loader behind this trait rather than a concrete scanner
/// type lets its tests supply a canned `Vec<Entity>` directly, without
/// constructing source text for every case.
pub trait MeshTokenizer {
    /// Produce the next entity, or a tokenizer error at the current line.
    fn next_entity(&mut self) -> Result<Entity, MeshError>;

    /// Produce the next entity while inside a `%...;` metacommand: bare
    /// words are always [`Entity::MetaToken`], never `Numeric`/
    /// `Operation`.
    fn next_meta_entity(&mut self) -> Result<Entity, MeshError>;

    /// The 1-based line the tokenizer is currently positioned at.
    fn line(&self) -> u32;
}

/// A scanner over an in-memory mesh source string.
pub struct TextTokenizer {
    chars: Vec<char>,
    pos: usize,
    line: u32,
}

impl TextTokenizer {
    /// Build a tokenizer over the full contents of a mesh source file.
    pub fn new(source: &str) -> Self {
        TextTokenizer {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.advance();
        }
    }

    fn scan_word(&mut self) -> String {
        let mut word = String::new();
        while let Some(c) = self.peek() {
            if c.is_whitespace() || c == '%' || c == ';' {
                break;
            }
            word.push(c);
            self.advance();
        }
        word
    }
}

impl MeshTokenizer for TextTokenizer {
    fn next_entity(&mut self) -> Result<Entity, MeshError> {
        self.skip_whitespace();
        match self.peek() {
            None => Ok(Entity::Eof),
            Some('%') => {
                self.advance();
                Ok(Entity::BeginMeta)
            }
            Some(';') => {
                self.advance();
                Ok(Entity::EndMeta)
            }
            Some(_) => {
                let word = self.scan_word();
                debug_assert!(!word.is_empty(), "scan_word must consume at least one char");
                if word.chars().next().is_some_and(|c| c.is_ascii_digit()) {
                    Ok(Entity::Numeric(word))
                } else {
                    Ok(Entity::Operation(word))
                }
            }
        }
    }

    fn next_meta_entity(&mut self) -> Result<Entity, MeshError> {
        self.skip_whitespace();
        match self.peek() {
            None => Ok(Entity::Eof),
            Some(';') => {
                self.advance();
                Ok(Entity::EndMeta)
            }
            Some('%') => {
                let line = self.line;
                Err(MeshError::tokenizer(
                    crate::error::TokenizerErrorCode::UnterminatedMeta.code(),
                    line,
                ))
            }
            Some(_) => Ok(Entity::MetaToken(self.scan_word())),
        }
    }

    fn line(&self) -> u32 {
        self.line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scans_a_minimal_header_and_body() {
        let mut t = TextTokenizer::new("%lilac-mesh;\n%dim 3 1;\n1 2 p");
        assert_eq!(t.next_entity().unwrap(), Entity::BeginMeta);
        assert_eq!(t.next_meta_entity().unwrap(), Entity::MetaToken("lilac-mesh".into()));
        assert_eq!(t.next_meta_entity().unwrap(), Entity::EndMeta);
        assert_eq!(t.next_entity().unwrap(), Entity::BeginMeta);
        assert_eq!(t.next_meta_entity().unwrap(), Entity::MetaToken("dim".into()));
        assert_eq!(t.next_meta_entity().unwrap(), Entity::MetaToken("3".into()));
        assert_eq!(t.next_meta_entity().unwrap(), Entity::MetaToken("1".into()));
        assert_eq!(t.next_meta_entity().unwrap(), Entity::EndMeta);
        assert_eq!(t.next_entity().unwrap(), Entity::Numeric("1".into()));
        assert_eq!(t.next_entity().unwrap(), Entity::Numeric("2".into()));
        assert_eq!(t.next_entity().unwrap(), Entity::Operation("p".into()));
        assert_eq!(t.next_entity().unwrap(), Entity::Eof);
    }

    #[test]
    fn tracks_line_numbers_across_newlines() {
        let mut t = TextTokenizer::new("a\nb\nc");
        assert_eq!(t.line(), 1);
        t.next_entity().unwrap();
        assert_eq!(t.line(), 2);
        t.next_entity().unwrap();
        assert_eq!(t.line(), 3);
    }

    #[test]
    fn unterminated_meta_is_an_error() {
        let mut t = TextTokenizer::new("%foo %bar;");
        assert_eq!(t.next_entity().unwrap(), Entity::BeginMeta);
        assert_eq!(t.next_meta_entity().unwrap(), Entity::MetaToken("foo".into()));
        assert!(t.next_meta_entity().is_err());
    }
}
