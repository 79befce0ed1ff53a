#![doc = r#"
PACKSHOT — a turntable renderer and product-image processor for 3D assets.

This crate turns GLB/glTF models into standardized product images in two
stages. The render stage stages the model (bounding-box centering, fixed
camera and three-point light rig, uniform white-matte material) and rasterizes
a 36-frame turntable sequence — one RGBA PNG per 10 degrees — entirely on the
CPU, no GPU or host engine required. The process stage crops a rendered frame
to its non-transparent content, resizes it to fit a target size without
distortion, and composites it centered over an opaque background. It powers
the PACKSHOT CLI and can be embedded in your own Rust applications.

Stability
---------
The public library API is experimental in initial releases. Breaking changes
can occur.

Add dependency
--------------
```toml
[dependencies]
packshot = "0.1"
```

Quick start: render a turntable sequence
----------------------------------------
```rust,no_run
use std::path::Path;
use packshot::{render_turntable_to_dir, RenderParams};

fn main() -> packshot::Result<()> {
    let report = render_turntable_to_dir(
        Path::new("/assets/chair.glb"),
        Path::new("/assets/renders"),
        &RenderParams::default(),
    )?;
    println!("rendered={} skipped={}", report.rendered, report.skipped);
    Ok(())
}
```

Process a rendered frame to a product image
-------------------------------------------
```rust,no_run
use std::path::Path;
use packshot::{
    process_image_to_path,
    Background, OutputFormat, ProcessParams, ScalePolicy,
};

fn main() -> packshot::Result<()> {
    let params = ProcessParams {
        width: 768,
        height: 1024,
        background: Background::Light,
        scale_policy: ScalePolicy::ShrinkOnly,
        format: OutputFormat::JPEG,
        jpeg_quality: 93,
        force: true,
    };

    process_image_to_path(
        Path::new("/assets/renders/chair_000.png"),
        Path::new("/out/chair_000.jpg"),
        &params,
    )
}
```

Process in-memory to `ProcessedImage`
-------------------------------------
```rust,no_run
use std::path::Path;
use packshot::{process_image_to_buffer, ProcessParams};

fn main() -> packshot::Result<()> {
    let img = process_image_to_buffer(
        Path::new("/assets/renders/chair_000.png"),
        &ProcessParams::default(),
    )?;

    // `img.rgb` holds interleaved RGB8 at exactly img.width x img.height.
    assert_eq!(img.rgb.len(), (img.width * img.height * 3) as usize);
    Ok(())
}
```

Batch helpers
-------------
```rust,no_run
use std::path::Path;
use packshot::{process_directory, ProcessParams};

fn main() -> packshot::Result<()> {
    let report = process_directory(
        Path::new("/assets/renders"),
        Path::new("/out/{}.jpg"),
        &ProcessParams::default(),
    )?;

    println!(
        "processed={} skipped={} errors={}",
        report.processed, report.skipped, report.errors
    );
    Ok(())
}
```

Error handling
--------------
All public functions return `packshot::Result<T>`; match on `packshot::Error`
to handle specific cases, e.g. a fully transparent source frame or an existing
destination without the overwrite flag.

```rust,no_run
use std::path::Path;
use packshot::{process_image_to_path, Error, ProcessParams};

fn main() {
    let params = ProcessParams::default();
    match process_image_to_path(Path::new("/in.png"), Path::new("/out.jpg"), &params) {
        Ok(()) => {}
        Err(Error::EmptyAlphaRegion) => eprintln!("source is fully transparent"),
        Err(Error::DestinationExists { path }) => eprintln!("exists: {}", path.display()),
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`types`] — enums and core types (e.g. `Background`, `ScalePolicy`).
- [`scene`] — bounding-box, camera/light rig, and turntable math.
- [`render`] — the CPU rasterizer.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod model;
pub mod render;
pub mod scene;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::{ProcessParams, RenderParams};
pub use error::{Error, Result};
pub use types::{Background, OutputFormat, ScalePolicy};

// Model loading and rendering
pub use model::{Mesh, ModelError, load_mesh};
pub use render::{Frame, render_frame};
pub use scene::Scene;

// High-level API re-exports
pub use api::{
    BatchReport, ProcessedImage, RenderReport, process_directory, process_image_to_buffer,
    process_image_to_path, render_directory, render_turntable_mesh, render_turntable_to_dir,
    resolve_dest, trim_directory,
};
