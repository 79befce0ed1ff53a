use std::path::PathBuf;

use tracing::{info, warn};

use packshot::core::params::{ProcessParams, RenderParams};
use packshot::types::ScalePolicy;
use packshot::{Error, api};

use super::args::{CliArgs, Command};
use super::errors::AppError;

fn init_logging(enabled: bool) {
    if enabled {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }
}

fn run_render(
    input: PathBuf,
    output_dir: Option<PathBuf>,
    resolution: u32,
    force: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let params = RenderParams { resolution, force };

    if input.is_dir() {
        info!("Starting batch rendering from directory: {:?}", input);
        let report = api::render_directory(&input, &params)?;
        info!("Batch rendering complete!");
        info!("Processed: {}", report.processed);
        info!("Skipped: {}", report.skipped);
        info!("Errors: {}", report.errors);
        if report.errors > 0 {
            return Err(Error::Render(format!(
                "{} model(s) failed to render",
                report.errors
            ))
            .into());
        }
        return Ok(());
    }

    let output_dir = output_dir.unwrap_or_else(|| {
        input
            .parent()
            .map(|p| p.join("renders"))
            .unwrap_or_else(|| PathBuf::from("renders"))
    });

    let report = api::render_turntable_to_dir(&input, &output_dir, &params)?;
    info!(
        "Successfully rendered: {:?} -> {:?} ({} new frames, {} skipped)",
        input, output_dir, report.rendered, report.skipped
    );
    Ok(())
}

fn run_process(
    source: PathBuf,
    dest: Option<PathBuf>,
    params: ProcessParams,
) -> Result<(), Box<dyn std::error::Error>> {
    if params.width == 0 || params.height == 0 {
        return Err(AppError::ZeroSize {
            width: params.width,
            height: params.height,
        }
        .into());
    }

    if source.is_dir() {
        let dest = dest.ok_or(AppError::MissingArgument {
            arg: "--dest".to_string(),
        })?;

        info!("Starting batch processing from directory: {:?}", source);
        let report = api::process_directory(&source, &dest, &params)?;
        info!("Batch processing complete!");
        info!("Processed: {}", report.processed);
        info!("Skipped: {}", report.skipped);
        info!("Errors: {}", report.errors);
        if report.errors > 0 {
            return Err(Error::Processing(format!(
                "{} image(s) failed to process",
                report.errors
            ))
            .into());
        }
        return Ok(());
    }

    // Single file mode: default destination replaces the extension
    let dest = dest.unwrap_or_else(|| source.with_extension(params.format.extension()));
    let output = api::resolve_dest(&source, &dest, &params);

    match api::process_image_to_path(&source, &output, &params) {
        Ok(()) => {
            info!("Successfully processed: {:?} -> {:?}", source, output);
            Ok(())
        }
        // Existing destination without --force is a successful no-op
        Err(Error::DestinationExists { path }) => {
            warn!("Destination exists, nothing to do: {:?}", path);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn run_trim(directory: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    if !directory.is_dir() {
        return Err(AppError::NotADirectory { path: directory }.into());
    }

    let report = api::trim_directory(&directory)?;
    info!("Trim complete!");
    info!("Trimmed: {}", report.processed);
    info!("Skipped (no banner): {}", report.skipped);
    info!("Errors: {}", report.errors);
    if report.errors > 0 {
        return Err(Error::Processing(format!("{} image(s) failed to trim", report.errors)).into());
    }
    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        Command::Render {
            input,
            output_dir,
            resolution,
            force,
            log,
        } => {
            init_logging(log);
            run_render(input, output_dir, resolution, force)
        }
        Command::Process {
            source,
            dest,
            width,
            height,
            background,
            upscale,
            format,
            jpeg_quality,
            preset,
            force,
            log,
        } => {
            init_logging(log);
            let mut params = match preset {
                Some(path) => ProcessParams::from_json_file(&path)?,
                None => ProcessParams {
                    width,
                    height,
                    background,
                    scale_policy: if upscale {
                        ScalePolicy::Fit
                    } else {
                        ScalePolicy::ShrinkOnly
                    },
                    format,
                    jpeg_quality,
                    force,
                },
            };
            params.force = force;
            run_process(source, dest, params)
        }
        Command::Trim { directory, log } => {
            init_logging(log);
            run_trim(directory)
        }
    }
}
