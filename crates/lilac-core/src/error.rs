//! Error taxonomy for mesh loading and validation.
//!
//! Positive codes ([`ErrorCode`]) belong to this subsystem. Negative codes
//! ([`TokenizerErrorCode`]) are passed through unchanged from the
//! tokenizer. Every failure is reported as a `(code, line)` pair via
//! [`MeshError`]; structural bugs (out-of-range internal indices, impossible
//! states) are never converted into these codes — they are faults and
//! `panic!` instead, per the fault/error split.

use std::fmt;

use thiserror::Error;

/// Positive error codes raised by the loader/validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Stack non-empty at end-of-input.
    Rem,
    /// Fewer points emitted than declared.
    Pundef,
    /// Fewer triangles emitted than declared.
    Tundef,
    /// A declared point index is not referenced by any triangle.
    Orphan,
    /// Unsupported tokenizer entity in body.
    Etype,
    /// Malformed or out-of-range decimal literal.
    Number,
    /// Stack would exceed `STACK_MAX`.
    Overfl,
    /// Unknown operator.
    Badop,
    /// Operator lacks its operands.
    Underf,
    /// Signature metacommand missing or wrong.
    Nosig,
    /// Signature metacommand is syntactically too long (unknown version).
    Sigver,
    /// Dimension metacommand missing.
    Nodim,
    /// Malformed dimension metacommand.
    Baddim,
    /// Non-integer dimension value.
    Dimval,
    /// Point count outside `[0, P_MAX]`.
    Pcount,
    /// Triangle count outside `[0, T_MAX]`.
    Tcount,
    /// Nonzero `norma` with `normd == 0`.
    Normda,
    /// `norma == C_MAX` (one full turn).
    Norm2p,
    /// More points emitted than declared.
    Ptover,
    /// Triangle references an undefined point.
    Ptref,
    /// Triangle has a duplicated vertex.
    Vxdup,
    /// First vertex is not the smallest index.
    Vxord,
    /// Triangle is colinear or clockwise.
    Orient,
    /// Triangles out of sorted order.
    Trsort,
    /// Directed edge used by two triangles.
    Dupedg,
    /// More triangles emitted than declared.
    Trover,
}

impl ErrorCode {
    /// The code's short uppercase name, as it appears in spec.md §7.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorCode::Rem => "REM",
            ErrorCode::Pundef => "PUNDEF",
            ErrorCode::Tundef => "TUNDEF",
            ErrorCode::Orphan => "ORPHAN",
            ErrorCode::Etype => "ETYPE",
            ErrorCode::Number => "NUMBER",
            ErrorCode::Overfl => "OVERFL",
            ErrorCode::Badop => "BADOP",
            ErrorCode::Underf => "UNDERF",
            ErrorCode::Nosig => "NOSIG",
            ErrorCode::Sigver => "SIGVER",
            ErrorCode::Nodim => "NODIM",
            ErrorCode::Baddim => "BADDIM",
            ErrorCode::Dimval => "DIMVAL",
            ErrorCode::Pcount => "PCOUNT",
            ErrorCode::Tcount => "TCOUNT",
            ErrorCode::Normda => "NORMDA",
            ErrorCode::Norm2p => "NORM2P",
            ErrorCode::Ptover => "PTOVER",
            ErrorCode::Ptref => "PTREF",
            ErrorCode::Vxdup => "VXDUP",
            ErrorCode::Vxord => "VXORD",
            ErrorCode::Orient => "ORIENT",
            ErrorCode::Trsort => "TRSORT",
            ErrorCode::Dupedg => "DUPEDG",
            ErrorCode::Trover => "TROVER",
        }
    }

    /// A human-readable message, capitalized, with no trailing punctuation
    /// (the caller adds the `!`), matching `lilac_mesh_errstr()` in the
    /// original C implementation.
    pub fn message(&self) -> &'static str {
        match self {
            ErrorCode::Rem => "Elements remain on the interpreter stack at end",
            ErrorCode::Pundef => "Points remain undefined in mesh",
            ErrorCode::Tundef => "Triangles remain undefined in mesh",
            ErrorCode::Orphan => "Orphan points detected in mesh",
            ErrorCode::Etype => "Unsupported entity type",
            ErrorCode::Number => "Invalid numeric literal",
            ErrorCode::Overfl => "Interpreter stack overflow",
            ErrorCode::Badop => "Unrecognized mesh operation",
            ErrorCode::Underf => "Stack underflow during operation",
            ErrorCode::Nosig => "Failed to read Lilac mesh signature",
            ErrorCode::Sigver => "Lilac mesh signature for unsupported version",
            ErrorCode::Nodim => "Failed to read Lilac mesh dimensions metacommand",
            ErrorCode::Baddim => "Invalid Lilac mesh dimension metacommand syntax",
            ErrorCode::Dimval => "Lilac mesh dimension value is out of range",
            ErrorCode::Pcount => "Declared mesh point count is out of allowed range",
            ErrorCode::Tcount => "Declared mesh triangle count is out of allowed range",
            ErrorCode::Normda => "norma must be zero when normd is zero",
            ErrorCode::Norm2p => "norma must be less than 2*PI radians",
            ErrorCode::Ptover => "More points defined than were declared in dimensions",
            ErrorCode::Ptref => "Triangle references point that hasn't been defined",
            ErrorCode::Vxdup => "Triangle has duplicated vertex point",
            ErrorCode::Vxord => "First triangle vertex must have lowest numeric index",
            ErrorCode::Orient => "Triangle vertices must be in counter-clockwise order",
            ErrorCode::Trsort => "Triangles are sorted incorrectly in list",
            ErrorCode::Dupedg => "Same directed triangle edge used more than once",
            ErrorCode::Trover => "More triangles defined than were declared in dimensions",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Negative codes, passed through unchanged from the tokenizer (§6.2).
///
/// This subsystem's own scanner ([`crate::token::TextTokenizer`]) only ever
/// raises this small subset; a different tokenizer implementation is free
/// to return any negative `i32`, which [`MeshError::Tokenizer`] carries
/// opaquely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenizerErrorCode {
    /// Unterminated metacommand (`%` with no closing `;`).
    UnterminatedMeta,
    /// Input ended while a token was still being read.
    UnexpectedEof,
    /// A byte outside the entity grammar was encountered.
    BadChar,
    /// I/O failure while reading the source.
    Io,
}

impl TokenizerErrorCode {
    /// The code's negative numeric value.
    pub fn code(&self) -> i32 {
        match self {
            TokenizerErrorCode::UnterminatedMeta => -1,
            TokenizerErrorCode::UnexpectedEof => -2,
            TokenizerErrorCode::BadChar => -3,
            TokenizerErrorCode::Io => -4,
        }
    }

    /// Human-readable message for the code, same conventions as
    /// [`ErrorCode::message`].
    pub fn message(&self) -> &'static str {
        match self {
            TokenizerErrorCode::UnterminatedMeta => "Unterminated metacommand",
            TokenizerErrorCode::UnexpectedEof => "Unexpected end of input",
            TokenizerErrorCode::BadChar => "Unrecognized character in input",
            TokenizerErrorCode::Io => "I/O error while reading input",
        }
    }

    fn message_for_code(code: i32) -> &'static str {
        match code {
            -1 => TokenizerErrorCode::UnterminatedMeta.message(),
            -2 => TokenizerErrorCode::UnexpectedEof.message(),
            -3 => TokenizerErrorCode::BadChar.message(),
            -4 => TokenizerErrorCode::Io.message(),
            _ => "Unknown tokenizer error",
        }
    }
}

/// A loader/validator failure, with its source line (0 when the failure is
/// purely structural and has no associated line, per spec.md §4.2.5).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MeshError {
    /// A validation failure specific to this subsystem.
    #[error("[line {line}] {code}")]
    Mesh {
        /// The error code.
        code: ErrorCode,
        /// Normalized source line, or 0 if not attributable to a line.
        line: u32,
    },
    /// A failure passed through from the tokenizer.
    #[error("[line {line}] tokenizer error {code}")]
    Tokenizer {
        /// The tokenizer's negative error code.
        code: i32,
        /// Normalized source line, or 0 if not attributable to a line.
        line: u32,
    },
}

impl MeshError {
    /// Construct a mesh-subsystem error, normalizing the line number the
    /// way spec.md §4.2.5 requires: values outside `[1, very-large]`
    /// collapse to 0.
    pub fn mesh(code: ErrorCode, line: u32) -> Self {
        MeshError::Mesh {
            code,
            line: normalize_line(line),
        }
    }

    /// Construct a tokenizer pass-through error.
    pub fn tokenizer(code: i32, line: u32) -> Self {
        debug_assert!(code < 0, "tokenizer error codes must be negative");
        MeshError::Tokenizer {
            code,
            line: normalize_line(line),
        }
    }

    /// The line number associated with this error, or 0 if none.
    pub fn line(&self) -> u32 {
        match self {
            MeshError::Mesh { line, .. } => *line,
            MeshError::Tokenizer { line, .. } => *line,
        }
    }

    /// A human-readable message with no trailing punctuation, suitable for
    /// embedding in the CLI diagnostic line format of spec.md §6.5.
    pub fn message(&self) -> String {
        match self {
            MeshError::Mesh { code, .. } => code.message().to_string(),
            MeshError::Tokenizer { code, .. } => {
                TokenizerErrorCode::message_for_code(*code).to_string()
            }
        }
    }
}

fn normalize_line(line: u32) -> u32 {
    if line == 0 || line >= i32::MAX as u32 {
        0
    } else {
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_code_names_match_spec() {
        assert_eq!(ErrorCode::Rem.name(), "REM");
        assert_eq!(ErrorCode::Dupedg.name(), "DUPEDG");
        assert_eq!(ErrorCode::Trover.name(), "TROVER");
    }

    #[test]
    fn normalize_line_collapses_zero_and_overflow() {
        assert_eq!(normalize_line(0), 0);
        assert_eq!(normalize_line(42), 42);
        assert_eq!(normalize_line(u32::MAX), 0);
    }

    #[test]
    fn mesh_error_message_has_no_trailing_punctuation() {
        let err = MeshError::mesh(ErrorCode::Orient, 7);
        assert_eq!(err.line(), 7);
        assert!(!err.message().ends_with('.'));
        assert!(!err.message().ends_with('!'));
    }
}
