//! Pixelrun CLI Tool
//!
//! Command-line interface for inspecting, packing, and unpacking PXR
//! sprite animation files.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use image::RgbaImage;
use pixelrun_core::container::FPS;
use pixelrun_core::frame::CANVAS_LEN;
use pixelrun_core::{Animation, Frame};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pxr")]
#[command(about = "Pixelrun - pixel-art sprite animation file tool")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show information about a PXR animation file
    Info {
        /// Input PXR file path
        input: PathBuf,
    },

    /// Pack 16x16 PNG frames into a PXR animation file
    Pack {
        /// Input PNG frames, in playback order
        frames: Vec<PathBuf>,

        /// Output PXR file path
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Unpack a PXR animation file into PNG frames
    Unpack {
        /// Input PXR file path
        input: PathBuf,

        /// Output directory for frame PNGs
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Info { input } => print_info(input)?,
        Commands::Pack { frames, output } => pack_animation(frames, output)?,
        Commands::Unpack { input, output } => unpack_animation(input, output)?,
    }

    Ok(())
}

fn read_animation(input: &PathBuf) -> Result<Animation> {
    let file = File::open(input)
        .with_context(|| format!("Failed to open {}", input.display()))?;
    Animation::read(BufReader::new(file))
        .with_context(|| format!("Failed to read animation from {}", input.display()))
}

fn print_info(input: PathBuf) -> Result<()> {
    let animation = read_animation(&input)?;
    let file_size = std::fs::metadata(&input)
        .with_context(|| format!("Failed to stat {}", input.display()))?
        .len();

    println!("=== PXR File Information ===");
    println!("File: {}", input.display());
    println!("Canvas: {}x{}", CANVAS_LEN, CANVAS_LEN);
    println!("Frame rate: {} fps", FPS);
    println!("Frames: {}", animation.frame_count());
    println!(
        "Duration: {} ms ({:.2} seconds)",
        animation.duration_ms(),
        animation.duration_ms() as f64 / 1000.0
    );
    println!("File size: {} bytes", file_size);

    Ok(())
}

fn pack_animation(frame_paths: Vec<PathBuf>, output: PathBuf) -> Result<()> {
    if frame_paths.is_empty() {
        bail!("No input frames given");
    }

    let mut frames = Vec::with_capacity(frame_paths.len());
    for path in &frame_paths {
        let image = image::open(path)
            .with_context(|| format!("Failed to open frame {}", path.display()))?
            .to_rgba8();

        let (width, height) = image.dimensions();
        if width != CANVAS_LEN as u32 || height != CANVAS_LEN as u32 {
            bail!(
                "Frame {} is {}x{}, expected {}x{}",
                path.display(),
                width,
                height,
                CANVAS_LEN,
                CANVAS_LEN
            );
        }

        let frame = Frame::from_bytes(image.into_raw())
            .with_context(|| format!("Invalid frame payload from {}", path.display()))?;
        frames.push(frame);
    }

    let animation = Animation::new(frames);
    let file = File::create(&output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    animation
        .write(BufWriter::new(file))
        .context("Failed to write animation")?;

    println!(
        "Packed {} frames into {}",
        animation.frame_count(),
        output.display()
    );

    Ok(())
}

fn unpack_animation(input: PathBuf, output_dir: PathBuf) -> Result<()> {
    let animation = read_animation(&input)?;

    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create directory {}", output_dir.display()))?;

    for (i, frame) in animation.frames.iter().enumerate() {
        let image =
            RgbaImage::from_raw(CANVAS_LEN as u32, CANVAS_LEN as u32, frame.bytes().to_vec())
                .context("Frame payload does not fill the canvas")?;

        let frame_path = output_dir.join(format!("frame_{:03}.png", i));
        image
            .save(&frame_path)
            .with_context(|| format!("Failed to save {}", frame_path.display()))?;
    }

    println!(
        "Unpacked {} frames to {}",
        animation.frame_count(),
        output_dir.display()
    );

    Ok(())
}
