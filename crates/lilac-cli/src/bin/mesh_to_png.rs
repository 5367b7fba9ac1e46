//! `mesh-to-png <mode> <output.png> <input> <mask.png>` or
//! `mesh-to-png <mode> <output.png> <input> <W> <H>` — load a Lilac mesh,
//! rasterize it, and write the result as a PNG (spec.md §6.5).
//!
//! The trailing one-or-two arguments disambiguate by *count*, not
//! content, exactly as the original: one trailing argument is a mask PNG
//! path, two are decimal width/height.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use lilac_cli::{diag, load_mesh_file, CliError};
use lilac_raster::{convert_mesh, render_mesh, Buffer, InterpolationKind, VertexMode};

const PROGRAM: &str = "mesh-to-png";

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    Vector,
    #[value(name = "scalar-x")]
    ScalarX,
    #[value(name = "scalar-y")]
    ScalarY,
}

impl Mode {
    fn vertex_mode(self) -> VertexMode {
        match self {
            Mode::Vector => VertexMode::ThreeD,
            Mode::ScalarX => VertexMode::X,
            Mode::ScalarY => VertexMode::Y,
        }
    }

    fn interpolation_kind(self) -> InterpolationKind {
        match self {
            Mode::Vector => InterpolationKind::Vector,
            Mode::ScalarX | Mode::ScalarY => InterpolationKind::Scalar,
        }
    }
}

#[derive(Parser)]
#[command(name = "mesh-to-png", disable_help_flag = true, disable_version_flag = true)]
struct Args {
    mode: Mode,
    output: PathBuf,
    input: PathBuf,
    /// Either one mask PNG path, or a width and a height.
    #[arg(num_args = 1..=2)]
    rest: Vec<String>,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(_) => {
            eprintln!("{}", diag::plain(PROGRAM, "Wrong number of arguments"));
            return ExitCode::FAILURE;
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{}", diag::plain(PROGRAM, &message));
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), String> {
    if !has_png_extension(&args.output) {
        return Err("Output path must end with .png".to_string());
    }

    let mesh =
        load_mesh_file(&args.input).map_err(|err| mesh_load_message(&err))?;

    let mut buffer = match args.rest.as_slice() {
        [mask_path] => Buffer::from_mask_png(Path::new(mask_path))
            .map_err(|e| format!("Can't read mask image: {e}"))?,
        [w, h] => {
            let width: u32 = w.parse().map_err(|_| "Invalid width argument".to_string())?;
            let height: u32 = h.parse().map_err(|_| "Invalid height argument".to_string())?;
            Buffer::with_dimensions(width, height).map_err(|e| e.to_string())?
        }
        _ => return Err("Wrong number of arguments".to_string()),
    };

    let vertices = convert_mesh(&mesh, buffer.width(), buffer.height(), args.mode.vertex_mode());
    let kind = args.mode.interpolation_kind();
    render_mesh(&mesh, &vertices, kind, &mut buffer);

    // Vector mode writes the full RGB normal; scalar modes down-convert to
    // grayscale, matching the original's SPH_IMAGE_DOWN_RGB/_GRAY split.
    match kind {
        InterpolationKind::Vector => lilac_raster::png_io::write_rgba(
            &args.output,
            buffer.width(),
            buffer.height(),
            &buffer.to_rgba8(),
        ),
        InterpolationKind::Scalar => lilac_raster::png_io::write_gray(
            &args.output,
            buffer.width(),
            buffer.height(),
            &buffer.to_gray8(),
        ),
    }
    .map_err(|e| format!("Failed to write output PNG: {e}"))?;

    Ok(())
}

fn mesh_load_message(err: &CliError) -> String {
    // Reuses the shared diagnostic formatter's message portion, but this
    // binary reports everything through run()'s single plain-message
    // path rather than diag::for_cli_error, so strip the line prefix it
    // would otherwise add and fold the line number into the text here.
    match err {
        CliError::CantOpen => "Can't open mesh file".to_string(),
        CliError::Mesh(mesh_err) => {
            let line = mesh_err.line();
            if line > 0 {
                format!("Mesh error: [line {line}] {}", mesh_err.message())
            } else {
                format!("Mesh error: {}", mesh_err.message())
            }
        }
    }
}

fn has_png_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
}
