// File: crates/heatmap-core/src/raster.rs
// Summary: Headless PNG rendering of the heat map using Skia CPU raster surfaces.

use anyhow::{Context, Result};
use skia_safe as skia;

use crate::axis::{Axis, Orientation};
use crate::heatmap::HeatMap;
use crate::palette::Rgb;
use crate::theme::Theme;

fn sk(c: Rgb) -> skia::Color {
    skia::Color::from_argb(255, c.r, c.g, c.b)
}

fn fill(c: Rgb) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_color(sk(c));
    p.set_style(skia::paint::Style::Fill);
    p
}

fn stroke(c: Rgb, width: f32) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_color(sk(c));
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Stroke);
    p.set_stroke_width(width);
    p
}

impl HeatMap {
    /// Render to PNG bytes in memory.
    pub fn render_to_png_bytes(&self) -> Result<Vec<u8>> {
        let opts = self.options();
        let theme = opts.theme();
        let layout = opts.layout();

        let mut surface = skia::surfaces::raster_n32_premul((opts.width as i32, opts.height as i32))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(sk(theme.background));

        let mut font = skia::Font::default();
        font.set_size(11.0);

        // Cells, in dataset order so later records paint over earlier ones
        for cell in self.cells() {
            let cell = cell?;
            let r = cell.rect;
            let rect = skia::Rect::from_xywh(r.x as f32, r.y as f32, r.width as f32, r.height as f32);
            canvas.draw_rect(rect, &fill(cell.color));
        }

        // Legend
        if opts.draw_legend {
            let ll = opts.legend_layout();
            let text = fill(theme.legend_label);
            for (i, entry) in self.legend().iter().enumerate() {
                let r = ll.swatch(i);
                canvas.draw_rect(
                    skia::Rect::from_xywh(r.x as f32, r.y as f32, r.width as f32, r.height as f32),
                    &fill(entry.color),
                );
                if opts.draw_labels {
                    let (lx, ly) = ll.label_anchor(i);
                    draw_centered(canvas, &entry.label, lx as f32, ly as f32, &font, &text);
                }
            }
        }

        // Axes
        let x_axis = self.x_axis()?;
        draw_axis(canvas, &x_axis, layout.x_range(), layout.height - layout.padding, opts.draw_labels, &font, &theme);
        draw_axis(canvas, &self.y_axis(), layout.y_range(), layout.padding, opts.draw_labels, &font, &theme);
        if opts.draw_labels {
            if let Some(label) = &x_axis.label {
                let paint = fill(theme.axis_label);
                draw_centered(canvas, label, (layout.width / 2.0) as f32, (layout.height - 10.0) as f32, &font, &paint);
            }
        }

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        tracing::debug!(bytes = data.as_bytes().len(), "png encoded");
        Ok(data.as_bytes().to_vec())
    }

    /// Render the heat map to a PNG at `output_png_path`.
    pub fn render_to_png(&self, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_centered(canvas: &skia::Canvas, text: &str, cx: f32, baseline: f32, font: &skia::Font, paint: &skia::Paint) {
    let (width, _) = font.measure_str(text, Some(paint));
    canvas.draw_str(text, (cx - width * 0.5, baseline), font, paint);
}

fn draw_axis(
    canvas: &skia::Canvas,
    axis: &Axis,
    (start, end): (f64, f64),
    offset: f64,
    labels: bool,
    font: &skia::Font,
    theme: &Theme,
) {
    let line = stroke(theme.axis_line, 1.0);
    let tick = stroke(theme.tick, 1.0);
    let text = fill(theme.axis_label);
    let (start, end, offset) = (start as f32, end as f32, offset as f32);
    const TICK: f32 = 6.0;

    match axis.orientation {
        Orientation::Bottom => {
            canvas.draw_line((start, offset), (end, offset), &line);
            for t in &axis.ticks {
                let x = t.pos_px as f32;
                canvas.draw_line((x, offset), (x, offset + TICK), &tick);
                if labels {
                    draw_centered(canvas, &t.label, x, offset + TICK + 12.0, font, &text);
                }
            }
        }
        Orientation::Left => {
            canvas.draw_line((offset, start), (offset, end), &line);
            for t in &axis.ticks {
                let y = t.pos_px as f32;
                canvas.draw_line((offset - TICK, y), (offset, y), &tick);
                if labels {
                    let (width, _) = font.measure_str(&t.label, Some(&text));
                    canvas.draw_str(&t.label, (offset - TICK - 3.0 - width, y + 4.0), font, &text);
                }
            }
        }
    }
}
