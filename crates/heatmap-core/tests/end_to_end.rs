// File: crates/heatmap-core/tests/end_to_end.rs
// Purpose: Dataset JSON in, cells and SVG document out.

use heatmap_core::{Dataset, HeatMap, ReaderSource, RenderOptions, Result};

const TWO_CELLS: &str = r#"{
    "baseTemperature": 8.0,
    "monthlyVariance": [
        {"year": 2000, "month": 1, "variance": -3.0},
        {"year": 2000, "month": 12, "variance": 3.0}
    ]
}"#;

#[test]
fn two_record_scenario() {
    let hm = HeatMap::from_source(ReaderSource::new(TWO_CELLS.as_bytes()), RenderOptions::default())
        .expect("build heat map");
    let cells: Vec<_> = hm.cells().collect::<Result<_>>().unwrap();
    assert_eq!(cells.len(), 2);

    let (jan, dec) = (&cells[0], &cells[1]);
    assert_eq!(jan.color.to_hex(), "#550000");
    assert_eq!(dec.color.to_hex(), "#FF00D0");
    assert_eq!(jan.rect.x, dec.rect.x);
    assert_eq!(jan.rect.x, 50.0);

    let rows = hm.scales().row_height();
    assert_eq!(jan.rect.y, 50.0);
    assert!((dec.rect.y - (11.0 * rows + 50.0)).abs() < 1e-9);
    assert!((jan.rect.width - 1200.0).abs() < 1e-9);

    assert_eq!(jan.tooltip.heading(), "2000 - January");
    assert_eq!(dec.tooltip.to_string(), "2000 - December\nTemperature: 11.000℃\nVariance: 3℃");
}

#[test]
fn tooltip_temperature_rounds_to_three_places() {
    let ds = Dataset::from_json_str(
        r#"{"baseTemperature": 8.00, "monthlyVariance": [{"year": 1990, "month": 6, "variance": 0.10}]}"#,
    )
    .unwrap();
    let hm = HeatMap::new(ds, RenderOptions::default()).unwrap();
    let cell = hm.cell(0).unwrap().unwrap();
    assert!(cell.tooltip.to_string().contains("Temperature: 8.100℃"));
}

#[test]
fn svg_has_one_rect_per_record_and_legend() {
    let hm = HeatMap::new(Dataset::from_json_str(TWO_CELLS).unwrap(), RenderOptions::default()).unwrap();
    let svg = hm.render_to_svg_string().unwrap();
    assert!(svg.starts_with("<svg "));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert!(svg.contains("width=\"1250\" height=\"650\""));
    assert_eq!(svg.matches("class=\"cell\"").count(), 2);
    assert_eq!(svg.matches("class=\"swatch\"").count(), 11);
    assert!(svg.contains("fill=\"#550000\" data-year=\"2000\" data-month=\"1\""));
    assert!(svg.contains("<title>2000 - January\nTemperature: 5.000℃\nVariance: -3℃</title>"));
    assert!(svg.contains(">January</text>"));
    assert!(svg.contains(">Years</text>"));
}

#[test]
fn labels_can_be_turned_off() {
    let opts = RenderOptions { draw_labels: false, draw_legend: false, ..RenderOptions::default() };
    let hm = HeatMap::new(Dataset::from_json_str(TWO_CELLS).unwrap(), opts).unwrap();
    let svg = hm.render_to_svg_string().unwrap();
    assert!(!svg.contains("<text"));
    assert!(!svg.contains("class=\"swatch\""));
}

#[test]
fn invalid_month_fails_before_rendering() {
    let err = Dataset::from_json_str(
        r#"{"baseTemperature": 8.0, "monthlyVariance": [{"year": 2000, "month": 0, "variance": 0.0}]}"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("month 0"));
}
