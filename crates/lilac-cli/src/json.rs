//! JSON transcription of a loaded mesh (spec.md §6.4), for the
//! `mesh-to-json` utility and for the Lilac mesh editor that consumes its
//! output.
//!
//! The layout is a fixed, hand-built indentation scheme (two spaces at
//! top level, four inside the arrays, one element per line) rather than a
//! generic pretty-printer's output — it has to match the editor's parser
//! byte-for-byte, the same way `meshToJSON()` in the original builds it
//! with direct `printf` calls instead of a JSON library.

use lilac_core::Mesh;

/// Render `mesh` as the JSON object the Lilac mesh editor expects.
pub fn mesh_to_json(mesh: &Mesh) -> String {
    let mut out = String::from("{\n  \"points\": [");
    for (i, p) in mesh.points().iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str("\n    ");
        out.push_str(&format!(
            "{{\"uid\": \"{:x}\", \"nrm\": \"{},{}\", \"loc\": \"{},{}\"}}",
            i + 1,
            p.normd,
            p.norma,
            p.x,
            p.y
        ));
    }
    out.push_str("\n  ],\n  \"tris\": [");
    for (i, tri) in mesh.tris().iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str("\n    ");
        out.push_str(&format!(
            "[\"{:x}\", \"{:x}\", \"{:x}\"]",
            tri[0] + 1,
            tri[1] + 1,
            tri[2] + 1
        ));
    }
    out.push_str("\n  ]\n}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use lilac_core::{load_mesh, TextTokenizer};
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_mesh_emits_empty_arrays() {
        let mut tok = TextTokenizer::new("%lilac-mesh;\n%dim 0 0;\n");
        let mesh = load_mesh(&mut tok).unwrap();
        assert_eq!(mesh_to_json(&mesh), "{\n  \"points\": [\n  ],\n  \"tris\": [\n  ]\n}\n");
    }

    #[test]
    fn one_triangle_mesh_emits_hex_uids_and_indices() {
        let src = "%lilac-mesh;\n%dim 3 1;\n\
                   0 0 0 0 p 0 0 10 0 p 0 0 10 10 p 0 1 2 t";
        let mut tok = TextTokenizer::new(src);
        let mesh = load_mesh(&mut tok).unwrap();
        let json = mesh_to_json(&mesh);
        assert!(json.contains("\"uid\": \"1\", \"nrm\": \"0,0\", \"loc\": \"0,0\""));
        assert!(json.contains("\"uid\": \"3\", \"nrm\": \"0,0\", \"loc\": \"10,10\""));
        assert!(json.contains("[\"1\", \"2\", \"3\"]"));
    }

    #[test]
    fn point_index_above_15_uses_lowercase_hex() {
        let mut src = String::from("%lilac-mesh;\n%dim 17 0;\n");
        for i in 0..17 {
            src.push_str(&format!("0 0 {i} 0 p "));
        }
        let mut tok = TextTokenizer::new(&src);
        let mesh = load_mesh(&mut tok).unwrap();
        let json = mesh_to_json(&mesh);
        // Point index 16 (0-based) has uid 17 = 0x11.
        assert!(json.contains("\"uid\": \"11\""));
    }
}
