//! High-level, ergonomic library API: render turntable frames to a directory,
//! process alpha rasters to files or in-memory buffers, and batch helpers for
//! directories. Prefer these entrypoints over low-level processing modules
//! when embedding PACKSHOT.
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::core::params::{ProcessParams, RenderParams};
use crate::core::processing::pipeline::process_rgba;
use crate::core::processing::trim;
use crate::error::{Error, Result};
use crate::io::writers::jpeg::write_rgb_jpeg;
use crate::io::writers::png::{write_rgb_png, write_rgba_png};
use crate::io::{read_rgb, read_rgba};
use crate::model::{self, Mesh};
use crate::render::render_frame;
use crate::scene::{Scene, turntable};
use crate::types::OutputFormat;

/// Outcome of one turntable render run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderReport {
    pub rendered: usize,
    pub skipped: usize,
}

/// Outcome of a directory batch run.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
}

/// Result of in-memory processing.
#[derive(Debug, Clone)]
pub struct ProcessedImage {
    pub width: u32,
    pub height: u32,
    /// Interleaved opaque RGB8.
    pub rgb: Vec<u8>,
}

/// Renders the full 36-frame turntable sequence for one model into
/// `output_dir`, naming frames `<stem>_<angle:03>.png`.
///
/// Existing frames are skipped unless `params.force` is set. A render or
/// write failure is fatal and aborts the remaining sequence; re-running is
/// idempotent since completed frames are skipped or overwritten.
pub fn render_turntable_to_dir(
    input: &Path,
    output_dir: &Path,
    params: &RenderParams,
) -> Result<RenderReport> {
    let mesh = model::load_mesh(input)?;
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| Error::InvalidArgument {
            arg: "input",
            value: input.display().to_string(),
        })?;

    fs::create_dir_all(output_dir)?;
    render_turntable_mesh(&mesh, stem, output_dir, params)
}

/// Renders the turntable sequence for an already loaded mesh.
pub fn render_turntable_mesh(
    mesh: &Mesh,
    stem: &str,
    output_dir: &Path,
    params: &RenderParams,
) -> Result<RenderReport> {
    let scene = Scene::stage(mesh)?;
    let mut report = RenderReport::default();

    for angle in turntable::angles() {
        let frame_path = output_dir.join(turntable::frame_name(stem, angle));
        if frame_path.exists() && !params.force {
            info!("Frame exists, skipping: {:?}", frame_path);
            report.skipped += 1;
            continue;
        }

        info!("Rendering angle {} degrees", angle);
        let frame = render_frame(&scene, angle, params.resolution)?;
        write_rgba_png(&frame_path, frame.width, frame.height, &frame.data)?;
        report.rendered += 1;
    }

    Ok(report)
}

/// Renders turntables for every supported model in a directory. Each model's
/// frames go into a `renders/` directory next to the model files. Per-model
/// failures are logged and counted; processing continues.
pub fn render_directory(input_dir: &Path, params: &RenderParams) -> Result<BatchReport> {
    let output_dir = input_dir.join("renders");
    let mut report = BatchReport::default();

    for entry in fs::read_dir(input_dir)? {
        let path = entry?.path();
        if !path.is_file() || !model::is_supported_model(&path) {
            report.skipped += 1;
            continue;
        }

        info!("Processing model: {:?}", path);
        match render_turntable_to_dir(&path, &output_dir, params) {
            Ok(r) => {
                info!("Rendered {} frames, skipped {}: {:?}", r.rendered, r.skipped, path);
                report.processed += 1;
            }
            Err(e) => {
                warn!("Error rendering {:?}: {}", path, e);
                report.errors += 1;
            }
        }
    }

    Ok(report)
}

/// Processes one alpha raster to in-memory RGB (no disk output).
pub fn process_image_to_buffer(input: &Path, params: &ProcessParams) -> Result<ProcessedImage> {
    let (data, width, height) = read_rgba(input)?;
    let rgb = process_rgba(&data, width, height, params)?;
    Ok(ProcessedImage {
        width: params.width,
        height: params.height,
        rgb,
    })
}

/// Processes one alpha raster and writes the opaque result to `output`.
///
/// Fails with [`Error::DestinationExists`] when the destination is present
/// and `params.force` is not set; callers treating that as a skip should
/// match on the variant.
pub fn process_image_to_path(
    input: &Path,
    output: &Path,
    params: &ProcessParams,
) -> Result<()> {
    if output.exists() && !params.force {
        return Err(Error::DestinationExists {
            path: output.to_path_buf(),
        });
    }

    let img = process_image_to_buffer(input, params)?;
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    match params.format {
        OutputFormat::JPEG => {
            write_rgb_jpeg(output, img.width, img.height, &img.rgb, params.jpeg_quality)?
        }
        OutputFormat::PNG => write_rgb_png(output, img.width, img.height, &img.rgb)?,
    }

    info!("Saved: {:?} ({}x{})", output, img.width, img.height);
    Ok(())
}

/// Resolves the destination path for one source file. A directory destination
/// generates `<stem>_<w>x<h>.<ext>`; a `{}` placeholder in the destination is
/// substituted with the source stem; anything else is taken verbatim.
pub fn resolve_dest(source: &Path, dest: &Path, params: &ProcessParams) -> PathBuf {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");

    if dest.is_dir() {
        return dest.join(format!(
            "{stem}_{}x{}.{}",
            params.width,
            params.height,
            params.format.extension()
        ));
    }

    let dest_str = dest.to_string_lossy();
    if dest_str.contains("{}") {
        return PathBuf::from(dest_str.replace("{}", stem));
    }

    dest.to_path_buf()
}

/// Processes every PNG in a directory, resolving per-file destinations via
/// [`resolve_dest`]. Existing destinations count as skipped; other per-file
/// failures are logged and counted.
pub fn process_directory(
    input_dir: &Path,
    dest: &Path,
    params: &ProcessParams,
) -> Result<BatchReport> {
    let mut report = BatchReport::default();

    for entry in fs::read_dir(input_dir)? {
        let path = entry?.path();
        let is_png = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("png"))
            .unwrap_or(false);
        if !path.is_file() || !is_png {
            continue;
        }

        let output = resolve_dest(&path, dest, params);
        match process_image_to_path(&path, &output, params) {
            Ok(()) => {
                info!("Processed: {:?} -> {:?}", path, output);
                report.processed += 1;
            }
            Err(Error::DestinationExists { path: existing }) => {
                info!("Destination exists, skipping: {:?}", existing);
                report.skipped += 1;
            }
            Err(e) => {
                warn!("Error processing {:?}: {}", path, e);
                report.errors += 1;
            }
        }
    }

    Ok(report)
}

/// Trims detected dark bottom banners from every image in a directory,
/// writing results alongside as `crop_<name>`. Sources are never overwritten
/// and already trimmed outputs are not reprocessed.
pub fn trim_directory(input_dir: &Path) -> Result<BatchReport> {
    let mut report = BatchReport::default();

    for entry in fs::read_dir(input_dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();
        if !path.is_file()
            || name.starts_with("crop_")
            || !matches!(ext.as_str(), "png" | "jpg" | "jpeg")
        {
            continue;
        }

        match trim_one(&path, name, &ext) {
            Ok(true) => report.processed += 1,
            Ok(false) => {
                info!("No banner found, skipping: {:?}", path);
                report.skipped += 1;
            }
            Err(e) => {
                warn!("Error trimming {:?}: {}", path, e);
                report.errors += 1;
            }
        }
    }

    Ok(report)
}

fn trim_one(path: &Path, name: &str, ext: &str) -> Result<bool> {
    let (data, width, height) = read_rgb(path)?;
    let crop_h = trim::banner_crop_height(&data, width, height);
    if !trim::is_significant(crop_h, height) {
        return Ok(false);
    }

    let cropped = trim::crop_rows(&data, width, crop_h);
    let output = path.with_file_name(format!("crop_{name}"));
    match ext {
        "png" => write_rgb_png(&output, width, crop_h, &cropped)?,
        _ => write_rgb_jpeg(&output, width, crop_h, &cropped, 93)?,
    }

    info!(
        "Trimmed {:?}: {}x{} -> {}x{} ({} rows removed)",
        path,
        width,
        height,
        width,
        crop_h,
        height - crop_h
    );
    Ok(true)
}
