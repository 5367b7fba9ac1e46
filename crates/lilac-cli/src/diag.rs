//! The single diagnostic line both CLI binaries print to stderr on
//! failure (spec.md §6.5): `<program>: [line N] <message>!` when the
//! failure has an associated source line, `<program>: <message>!` when it
//! doesn't (line 0, or a failure with no line at all).

use lilac_core::MeshError;

use crate::CliError;

/// Format the one-line diagnostic for a plain message with no source
/// line, e.g. "Wrong number of arguments" or "Can't open input file".
pub fn plain(program: &str, message: &str) -> String {
    format!("{program}: {message}!")
}

/// Format the one-line diagnostic for a [`CliError`].
pub fn for_cli_error(program: &str, err: &CliError) -> String {
    match err {
        CliError::CantOpen => plain(program, "Can't open input file"),
        CliError::Mesh(mesh_err) => for_mesh_error(program, mesh_err),
    }
}

/// Format the one-line diagnostic for a [`MeshError`], including its
/// source line when the error is attributable to one.
pub fn for_mesh_error(program: &str, err: &MeshError) -> String {
    let line = err.line();
    if line > 0 {
        format!("{program}: [line {line}] {message}!", message = err.message())
    } else {
        plain(program, &err.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lilac_core::error::ErrorCode;

    #[test]
    fn mesh_error_with_line_includes_bracketed_line() {
        let err = MeshError::mesh(ErrorCode::Orient, 42);
        assert_eq!(
            for_mesh_error("mesh-to-json", &err),
            "mesh-to-json: [line 42] Triangle vertices must be in counter-clockwise order!"
        );
    }

    #[test]
    fn mesh_error_with_no_line_omits_the_bracket() {
        let err = MeshError::mesh(ErrorCode::Orphan, 0);
        assert_eq!(
            for_mesh_error("mesh-to-json", &err),
            "mesh-to-json: Orphan points detected in mesh!"
        );
    }

    #[test]
    fn cant_open_has_no_line() {
        let err = CliError::CantOpen;
        assert_eq!(
            for_cli_error("mesh-to-json", &err),
            "mesh-to-json: Can't open input file!"
        );
    }
}
