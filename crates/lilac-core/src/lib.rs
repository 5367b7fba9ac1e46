//! Lilac Mesh canonical model: tokenizer adapter, loader/validator, and the
//! immutable in-memory `Mesh` type.
//!
//! A Lilac mesh file is a small stack-based textual format that encodes a
//! 2D triangulation together with per-vertex surface-normal information
//! (see [`mesh`] for the data model and [`loader`] for the interpreter that
//! builds one from a token stream).
//!
//! # Modules
//!
//! - [`error`]: the flat `MeshError` taxonomy (one variant per positive
//!   code in the format's error space, plus tokenizer pass-through).
//! - [`token`]: the consumed tokenizer contract and a scanner that
//!   satisfies it for the subset of Shastina syntax Lilac Mesh files use.
//! - [`usage_map`]: point/edge usage bitmap accounting used during load.
//! - [`mesh`]: `MeshPoint` and `Mesh`, the validated immutable result.
//! - [`loader`]: the stack interpreter and invariant checks that produce a
//!   `Mesh` from a token stream.

pub mod error;
pub mod loader;
pub mod mesh;
pub mod token;
pub mod usage_map;

pub use error::MeshError;
pub use mesh::{Mesh, MeshPoint};
pub use loader::load_mesh;
pub use token::{Entity, MeshTokenizer, TextTokenizer};

/// The numeric ceiling for encoded coordinates and dimension values.
pub const C_MAX: u32 = 16384;

/// The maximum number of points a mesh may declare.
pub const P_MAX: u32 = 1024;

/// The maximum number of triangles a mesh may declare.
pub const T_MAX: u32 = 1024;

/// Capacity of the loader's interpreter stack.
pub const STACK_MAX: usize = 16;
