//! Shared support for the Lilac mesh command-line utilities.
//!
//! Both binaries (`mesh-to-json` and `mesh-to-png`) load a mesh through
//! [`lilac_core::load_mesh`] and then diverge: one transcribes it to JSON
//! ([`json`]), the other converts and rasterizes it via `lilac_raster`.
//! [`diag`] formats the single diagnostic line both binaries print on
//! failure (spec.md §6.5).

pub mod diag;
pub mod json;

use std::fs;
use std::path::Path;

use lilac_core::{load_mesh, Mesh, MeshError, TextTokenizer};

/// A CLI-level failure: either the mesh file couldn't be opened at all, or
/// it opened but failed to load/validate.
#[derive(Debug)]
pub enum CliError {
    /// The input path could not be read.
    CantOpen,
    /// The mesh failed to load or validate.
    Mesh(MeshError),
}

impl From<MeshError> for CliError {
    fn from(err: MeshError) -> Self {
        CliError::Mesh(err)
    }
}

/// Read a mesh source file and fully load/validate it, matching the
/// original `lilacme2json`/`lilacme2png`'s two-stage failure: a distinct
/// "can't open" diagnostic before any mesh error can occur.
pub fn load_mesh_file(path: &Path) -> Result<Mesh, CliError> {
    let source = fs::read_to_string(path).map_err(|_| CliError::CantOpen)?;
    let mut tok = TextTokenizer::new(&source);
    Ok(load_mesh(&mut tok)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_is_cant_open() {
        let err = load_mesh_file(Path::new("/nonexistent/path/to/a/mesh.sn")).unwrap_err();
        assert!(matches!(err, CliError::CantOpen));
    }

    #[test]
    fn malformed_mesh_file_surfaces_as_mesh_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.sn");
        let mut f = fs::File::create(&path).unwrap();
        write!(f, "%dim 0 0;\n").unwrap();
        drop(f);

        let err = load_mesh_file(&path).unwrap_err();
        assert!(matches!(err, CliError::Mesh(_)));
    }

    #[test]
    fn valid_mesh_file_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quad.sn");
        let mut f = fs::File::create(&path).unwrap();
        write!(
            f,
            "%lilac-mesh;\n%dim 4 2;\n\
             0 0 0 0 p 0 0 10 0 p 0 0 10 10 p 0 0 0 10 p \
             0 1 2 t 0 2 3 t"
        )
        .unwrap();
        drop(f);

        let mesh = load_mesh_file(&path).unwrap();
        assert_eq!(mesh.point_count(), 4);
        assert_eq!(mesh.tri_count(), 2);
    }
}
