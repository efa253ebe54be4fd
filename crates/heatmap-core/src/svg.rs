// File: crates/heatmap-core/src/svg.rs
// Summary: Writes the heat map as a standalone SVG document (cells, axes, legend, per-cell tooltips).

use std::fmt::Write as _;
use std::path::Path;

use crate::axis::{Axis, Orientation};
use crate::error::Result;
use crate::heatmap::HeatMap;

const TICK_SIZE: f64 = 6.0;
const FONT: &str = "font-family=\"sans-serif\" font-size=\"10\"";

/// Escape text for element content and attribute values.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Shortest decimal with at most three fractional digits.
fn num(v: f64) -> String {
    let s = format!("{:.3}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

impl HeatMap {
    /// Render the full drawing into an SVG string.
    pub fn render_to_svg_string(&self) -> Result<String> {
        let mut svg = String::new();
        self.write_svg(&mut svg)?;
        Ok(svg)
    }

    /// Render to an SVG file at `path`, creating parent directories.
    pub fn render_to_svg(&self, path: impl AsRef<Path>) -> Result<()> {
        let svg = self.render_to_svg_string()?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, svg)?;
        Ok(())
    }

    fn write_svg(&self, svg: &mut String) -> Result<()> {
        let opts = self.options();
        let theme = opts.theme();
        let layout = opts.layout();

        writeln!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" class=\"svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
            w = opts.width,
            h = opts.height
        )?;
        writeln!(svg, "<rect class=\"background\" width=\"100%\" height=\"100%\" fill=\"{}\"/>", theme.background)?;

        if opts.draw_legend {
            let ll = opts.legend_layout();
            writeln!(svg, "<g class=\"legendQuant\">")?;
            for (i, entry) in self.legend().iter().enumerate() {
                let r = ll.swatch(i);
                writeln!(
                    svg,
                    "<rect class=\"swatch\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>",
                    num(r.x), num(r.y), num(r.width), num(r.height), entry.color
                )?;
                if opts.draw_labels {
                    let (lx, ly) = ll.label_anchor(i);
                    writeln!(
                        svg,
                        "<text class=\"label\" x=\"{}\" y=\"{}\" text-anchor=\"middle\" fill=\"{}\" {FONT}>{}</text>",
                        num(lx), num(ly), theme.legend_label, escape_xml(&entry.label)
                    )?;
                }
            }
            writeln!(svg, "</g>")?;
        }

        writeln!(svg, "<g class=\"cells\">")?;
        for (record, cell) in self.dataset().records().iter().zip(self.cells()) {
            let cell = cell?;
            writeln!(
                svg,
                "<rect class=\"cell\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" data-year=\"{}\" data-month=\"{}\" data-variance=\"{}\" data-tooltip=\"{}\"><title>{}</title></rect>",
                num(cell.rect.x),
                num(cell.rect.y),
                num(cell.rect.width),
                num(cell.rect.height),
                cell.color,
                record.year,
                record.month,
                record.variance,
                escape_xml(&cell.tooltip.html()),
                escape_xml(&cell.tooltip.to_string())
            )?;
        }
        writeln!(svg, "</g>")?;

        let x_axis = self.x_axis()?;
        let (x0, x1) = layout.x_range();
        let (y0, y1) = layout.y_range();
        write_axis(svg, &x_axis, (x0, x1), layout.height - layout.padding, opts.draw_labels, &theme)?;
        write_axis(svg, &self.y_axis(), (y0, y1), layout.padding, opts.draw_labels, &theme)?;

        if opts.draw_labels {
            if let Some(label) = &x_axis.label {
                writeln!(
                    svg,
                    "<text class=\"axis-label\" transform=\"translate({}, {})\" text-anchor=\"middle\" fill=\"{}\">{}</text>",
                    num(layout.width / 2.0),
                    num(layout.height - 10.0),
                    theme.axis_label,
                    escape_xml(label)
                )?;
            }
        }

        writeln!(svg, "</svg>")?;
        Ok(())
    }
}

/// Domain line, tick marks and tick labels. `offset` is the y of a bottom
/// axis or the x of a left axis.
fn write_axis(
    svg: &mut String,
    axis: &Axis,
    (start, end): (f64, f64),
    offset: f64,
    labels: bool,
    theme: &crate::theme::Theme,
) -> std::fmt::Result {
    match axis.orientation {
        Orientation::Bottom => {
            writeln!(svg, "<g class=\"x-axis\" transform=\"translate(0, {})\" {FONT}>", num(offset))?;
            writeln!(
                svg,
                "<path class=\"domain\" stroke=\"{}\" d=\"M{},{}V0H{}V{}\"/>",
                theme.axis_line, num(start), num(TICK_SIZE), num(end), num(TICK_SIZE)
            )?;
            for t in &axis.ticks {
                writeln!(svg, "<g class=\"tick\" transform=\"translate({}, 0)\">", num(t.pos_px))?;
                writeln!(svg, "<line stroke=\"{}\" y2=\"{}\"/>", theme.tick, num(TICK_SIZE))?;
                if labels {
                    writeln!(
                        svg,
                        "<text fill=\"{}\" y=\"{}\" dy=\"0.71em\" text-anchor=\"middle\">{}</text>",
                        theme.axis_label, num(TICK_SIZE + 3.0), escape_xml(&t.label)
                    )?;
                }
                writeln!(svg, "</g>")?;
            }
        }
        Orientation::Left => {
            writeln!(svg, "<g class=\"y-axis\" transform=\"translate({}, 0)\" {FONT}>", num(offset))?;
            writeln!(
                svg,
                "<path class=\"domain\" stroke=\"{}\" d=\"M{},{}H0V{}H{}\"/>",
                theme.axis_line, num(-TICK_SIZE), num(start), num(end), num(-TICK_SIZE)
            )?;
            for t in &axis.ticks {
                writeln!(svg, "<g class=\"tick\" transform=\"translate(0, {})\">", num(t.pos_px))?;
                writeln!(svg, "<line stroke=\"{}\" x2=\"{}\"/>", theme.tick, num(-TICK_SIZE))?;
                if labels {
                    writeln!(
                        svg,
                        "<text fill=\"{}\" x=\"{}\" dy=\"0.32em\" text-anchor=\"end\">{}</text>",
                        theme.axis_label, num(-(TICK_SIZE + 3.0)), escape_xml(&t.label)
                    )?;
                }
                writeln!(svg, "</g>")?;
            }
        }
    }
    writeln!(svg, "</g>")
}
