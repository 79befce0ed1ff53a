use clap::{Parser, Subcommand};
use std::path::PathBuf;

use packshot::types::{Background, OutputFormat};

#[derive(Parser)]
#[command(name = "packshot", version, about = "PACKSHOT CLI")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render a 36-frame turntable sequence (10 degree steps) from a
    /// GLB/glTF model, or from every model in a directory
    Render {
        /// Model file or directory containing models
        input: PathBuf,

        /// Frame output directory (default: renders/ next to the input)
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Square frame resolution in pixels
        #[arg(long, default_value_t = 2048)]
        resolution: u32,

        /// Re-render frames whose files already exist
        #[arg(short, long, default_value_t = false)]
        force: bool,

        /// Enable logging
        #[arg(long, default_value_t = false)]
        log: bool,
    },

    /// Alpha-crop a rendered raster, resize it to fit the target, and
    /// composite it centered over a solid background
    Process {
        /// Source PNG with alpha (file or directory for batch mode)
        #[arg(short, long)]
        source: PathBuf,

        /// Destination path. Directories generate names automatically and a
        /// `{}` placeholder is replaced with the source file stem
        #[arg(short, long)]
        dest: Option<PathBuf>,

        /// Target width in pixels
        #[arg(short = 'w', long, default_value_t = 768)]
        width: u32,

        /// Target height in pixels
        #[arg(short = 'H', long, default_value_t = 1024)]
        height: u32,

        /// Background color preset
        #[arg(long, value_enum, default_value_t = Background::Light)]
        background: Background,

        /// Allow scaling content above its original size to fill the target
        #[arg(long, default_value_t = false)]
        upscale: bool,

        /// Output format (jpeg or png)
        #[arg(long, value_enum, default_value_t = OutputFormat::JPEG)]
        format: OutputFormat,

        /// JPEG quality (ignored for PNG output)
        #[arg(long, default_value_t = 93)]
        jpeg_quality: u8,

        /// JSON preset file supplying the processing parameters; replaces
        /// every flag above (but not --force)
        #[arg(long)]
        preset: Option<PathBuf>,

        /// Overwrite existing destination files
        #[arg(short = 'f', long, default_value_t = false)]
        force: bool,

        /// Enable logging
        #[arg(long, default_value_t = false)]
        log: bool,
    },

    /// Detect and trim dark banner strips from the bottom of images in a
    /// directory, writing results as crop_<name>
    Trim {
        /// Directory containing images to trim
        directory: PathBuf,

        /// Enable logging
        #[arg(long, default_value_t = false)]
        log: bool,
    },
}
