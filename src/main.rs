//! # Tinta CLI
//!
//! Command-line interface for converting PNG images to ESC/POS raster
//! commands.
//!
//! ## Usage
//!
//! ```bash
//! # Convert to a file
//! tinta -o receipt.bin logo.png
//!
//! # Pipe straight to a printer device, centered, cut at the end
//! tinta -c -a center logo.png > /dev/usb/lp0
//!
//! # Photographs: equalize and dither
//! tinta -p -o out.bin photo.png
//!
//! # Several images in one job, rotated upside down
//! tinta -r -o out.bin first.png second.png
//! ```
//!
//! Output is a binary command stream; writing it to a terminal is refused.

use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tinta::{Align, JobEncoder, JobOptions, PrinterConfig, RawImage, TintaError};

/// Convert PNG images to ESC/POS raster commands for thermal receipt printers
#[derive(Parser, Debug)]
#[command(name = "tinta")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Cut the paper at the end of the job
    #[arg(short, long)]
    cut: bool,

    /// Horizontal image alignment
    #[arg(short, long, value_enum, ignore_case = true)]
    align: Option<AlignArg>,

    /// Rotate the image upside down before it is printed
    #[arg(short, long)]
    rotate: bool,

    /// Pre-process photographs (histogram equalization + dithering)
    #[arg(short, long)]
    photo: bool,

    /// Binarization threshold: a pixel prints when lightness <= N
    #[arg(short, long, value_name = "N", default_value_t = tinta::DEFAULT_THRESHOLD)]
    threshold: u8,

    /// Output file; with no FILE, or when FILE is -, write to standard output
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Input PNG files
    #[arg(required = true, value_name = "PNG")]
    inputs: Vec<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AlignArg {
    #[value(alias = "l")]
    Left,
    #[value(alias = "c")]
    Center,
    #[value(alias = "r")]
    Right,
}

impl From<AlignArg> for Align {
    fn from(arg: AlignArg) -> Self {
        match arg {
            AlignArg::Left => Align::Left,
            AlignArg::Center => Align::Center,
            AlignArg::Right => Align::Right,
        }
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), TintaError> {
    let cli = Cli::parse();

    let options = JobOptions {
        cut: cli.cut,
        photo: cli.photo,
        align: cli.align.map(Align::from),
        rotate: cli.rotate,
        threshold: cli.threshold,
    };

    let sink = open_sink(cli.output.as_deref())?;
    let mut encoder = JobEncoder::new(BufWriter::new(sink), PrinterConfig::TM_T70, options);

    for input in &cli.inputs {
        let decoded = image::open(input)
            .map_err(|e| TintaError::Image(format!("{}: {}", input.display(), e)))?
            .to_rgba8();
        let image = RawImage::new(decoded.width(), decoded.height(), decoded.as_raw())?;

        let stats = encoder.print_image(&image)?;
        if !cli.photo && stats.suggests_photo_mode() {
            eprintln!(
                "{}: image has a rich tonal range; -p would likely print better",
                input.display()
            );
        }
    }

    encoder.finish()?;
    Ok(())
}

/// Open the output sink: a file, or stdout when no path (or `-`) is given.
///
/// Stdout is refused when it is a terminal: the stream is binary printer
/// commands, not text.
fn open_sink(output: Option<&Path>) -> Result<Box<dyn Write>, TintaError> {
    match output {
        Some(path) if path != Path::new("-") => Ok(Box::new(File::create(path)?)),
        _ => {
            if unsafe { libc::isatty(libc::STDOUT_FILENO) } == 1 {
                return Err(TintaError::Io(io::Error::other(
                    "output is binary printer commands; redirect it or use -o FILE",
                )));
            }
            Ok(Box::new(io::stdout().lock()))
        }
    }
}
