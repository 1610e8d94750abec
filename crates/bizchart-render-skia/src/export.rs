// File: crates/bizchart-render-skia/src/export.rs
// Summary: Headless PNG rendering of a `Chart` using Skia CPU raster surfaces.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use bizchart_core::types::{HEIGHT, WIDTH};
use bizchart_core::{Chart, Color, Rect};
use skia_safe as skia;
use tracing::{debug, info};

use crate::surface::{to_sk_color, SkiaSurface};
use crate::text::TextShaper;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub anti_alias: bool,
    /// Overrides the theme background when set.
    pub background: Option<Color>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, anti_alias: true, background: None }
    }
}

pub trait RenderToPng {
    /// Resize the chart to the target size, draw it and encode the result.
    fn render_to_png_bytes(&mut self, opts: &RenderOptions) -> Result<Vec<u8>>;

    fn render_to_png(&mut self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, &bytes).with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), bytes = bytes.len(), "chart written");
        Ok(())
    }
}

impl RenderToPng for Chart {
    fn render_to_png_bytes(&mut self, opts: &RenderOptions) -> Result<Vec<u8>> {
        if opts.width <= 0 || opts.height <= 0 {
            return Err(anyhow!("invalid surface size {}x{}", opts.width, opts.height));
        }
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow!("failed to create raster surface"))?;

        let bounds = Rect::from_ltwh(0, 0, opts.width, opts.height);
        self.update_bounds(bounds);

        let background = opts.background.unwrap_or(self.options().theme.background);
        let shaper = TextShaper::new();
        {
            let canvas = surface.canvas();
            canvas.clear(to_sk_color(background));
            let mut target = SkiaSurface::new(canvas, &shaper, opts.anti_alias);
            self.draw(&mut target, bounds);
        }

        // Snapshot and encode
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow!("encode PNG failed"))?;
        debug!(chart_type = %self.chart_type(), width = opts.width, height = opts.height, "png encoded");
        Ok(data.as_bytes().to_vec())
    }
}
