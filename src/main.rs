//! Command-line companion for inspecting frustum rows and option presets.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use glam::Mat4;
use raymarch_rig::camera::{camera_space_frustum, Camera, Corner};
use raymarch_rig::options::Options;
use raymarch_rig::RigError;

#[derive(Parser)]
#[command(name = "raymarch-rig", about = "Inspect frustum rows and option presets")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print camera-space frustum corner rows
    Frustum {
        /// Vertical field of view in degrees [default: options camera fovy]
        fovy: Option<f32>,
        /// Viewport aspect ratio (width / height) [default: 16/9]
        aspect: Option<f32>,
        /// Preset whose camera section supplies the default field of view
        #[arg(long)]
        preset: Option<PathBuf>,
    },
    /// Print resolved options as TOML
    Options {
        /// Preset file to load instead of the defaults
        preset: Option<PathBuf>,
    },
    /// Print the options JSON schema
    Schema,
    /// List preset names in a directory
    Presets {
        /// Directory holding `<name>.toml` presets
        dir: PathBuf,
    },
}

fn load_options(preset: Option<&Path>) -> Result<Options, RigError> {
    preset.map_or_else(|| Ok(Options::default()), Options::load)
}

fn print_frustum(
    out: &mut impl Write,
    fovy: Option<f32>,
    aspect: Option<f32>,
    preset: Option<&Path>,
) -> Result<(), RigError> {
    let options = load_options(preset)?;
    let mut camera = Camera::from_options(
        &options.camera,
        aspect.unwrap_or(Camera::default().aspect),
    );
    if let Some(fovy) = fovy {
        camera.fovy = fovy;
    }
    let frustum = camera_space_frustum(
        camera.fovy,
        camera.aspect,
        Mat4::IDENTITY,
        Mat4::IDENTITY,
    );
    for corner in Corner::ALL {
        let row = frustum.row(corner.row());
        writeln!(
            out,
            "{:<12} {:>10.6} {:>10.6} {:>10.6} {:>4.1}",
            format!("{corner:?}"),
            row.x,
            row.y,
            row.z,
            row.w
        )?;
    }
    Ok(())
}

fn print_options(
    out: &mut impl Write,
    preset: Option<&Path>,
) -> Result<(), RigError> {
    let options = load_options(preset)?;
    let text = toml::to_string_pretty(&options.sanitized())
        .map_err(|e| RigError::OptionsParse(e.to_string()))?;
    write!(out, "{text}")?;
    Ok(())
}

fn print_schema(out: &mut impl Write) -> Result<(), RigError> {
    let text = serde_json::to_string_pretty(&Options::json_schema())
        .map_err(|e| RigError::OptionsParse(e.to_string()))?;
    writeln!(out, "{text}")?;
    Ok(())
}

fn print_presets(out: &mut impl Write, dir: &Path) -> Result<(), RigError> {
    for name in Options::try_list_presets(dir)? {
        writeln!(out, "{name}")?;
    }
    Ok(())
}

fn run(cli: Cli, out: &mut impl Write) -> Result<(), RigError> {
    match cli.command {
        Command::Frustum {
            fovy,
            aspect,
            preset,
        } => print_frustum(out, fovy, aspect, preset.as_deref()),
        Command::Options { preset } => print_options(out, preset.as_deref()),
        Command::Schema => print_schema(out),
        Command::Presets { dir } => print_presets(out, &dir),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    match run(cli, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
