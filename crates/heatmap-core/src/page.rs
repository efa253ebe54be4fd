// File: crates/heatmap-core/src/page.rs
// Summary: Page chrome capability and a standalone HTML page hosting the SVG and its tooltip overlay.

use crate::error::Result;
use crate::heatmap::HeatMap;
use crate::svg::escape_xml;
use crate::types::MOUNT_ID;

/// The one thing the chart needs from its host page.
pub trait PageChrome {
    fn set_title(&mut self, title: &str);
}

/// Minimal HTML document: a title and a mount element holding the drawing.
#[derive(Clone, Debug, Default)]
pub struct HtmlPage {
    title: String,
    styles: String,
    mount: String,
}

impl PageChrome for HtmlPage {
    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }
}

// Hover handlers: show the overlay with the cell's markup on mouseover,
// hide it on mouseout. Last event wins.
const TOOLTIP_SCRIPT: &str = r#"<script>
(function () {
  var tip = document.querySelector('#svg .tooltip');
  document.querySelectorAll('#svg rect.cell').forEach(function (cell) {
    cell.addEventListener('mouseover', function (e) {
      tip.innerHTML = cell.getAttribute('data-tooltip');
      tip.style.left = (e.pageX - 190) + 'px';
      tip.style.top = (e.pageY + 25) + 'px';
      tip.style.opacity = 0.9;
    });
    cell.addEventListener('mouseout', function () {
      tip.style.opacity = 0;
    });
  });
})();
</script>"#;

impl HtmlPage {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn add_style(&mut self, css: &str) {
        self.styles.push_str(css);
    }

    /// Replace the mount element's content.
    pub fn mount(&mut self, content: String) {
        self.mount = content;
    }

    pub fn to_html(&self) -> String {
        format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>{}</style>\n</head>\n<body>\n<div id=\"{}\">\n{}</div>\n{}\n</body>\n</html>\n",
            escape_xml(&self.title),
            self.styles,
            MOUNT_ID,
            self.mount,
            TOOLTIP_SCRIPT
        )
    }
}

impl HeatMap {
    /// Title the page, then mount the SVG and an initially hidden tooltip overlay.
    pub fn mount_into<P: PageChrome>(&self, page: &mut P) -> Result<String> {
        page.set_title(&self.options().title);
        let mut content = self.render_to_svg_string()?;
        content.push_str("<div class=\"tooltip\" style=\"opacity: 0\"></div>\n");
        Ok(content)
    }

    /// Complete HTML document for the chart.
    pub fn render_to_html(&self) -> Result<String> {
        let theme = self.options().theme();
        let mut page = HtmlPage::default();
        let content = self.mount_into(&mut page)?;
        page.add_style(&format!(
            "body{{background:{bg};margin:0}}#{id}{{position:relative}}.tooltip{{position:absolute;pointer-events:none;padding:4px 10px;border-radius:6px;background:{tbg};color:{tfg};font-family:sans-serif}}",
            bg = theme.background,
            id = MOUNT_ID,
            tbg = theme.tooltip_background,
            tfg = theme.tooltip_text
        ));
        page.mount(content);
        Ok(page.to_html())
    }

    pub fn render_to_html_file(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let html = self.render_to_html()?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, html)?;
        Ok(())
    }
}
