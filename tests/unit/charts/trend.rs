use super::*;
use crate::charts::format_percent;

#[test]
fn y_mapping_spans_axis() {
    assert_eq!(map_y(500.0), Y_TOP);
    assert_eq!(map_y(0.0), Y_BOTTOM);
    assert_eq!(map_y(250.0), 141.0);
    assert_eq!(map_y(900.0), Y_TOP);
    assert_eq!(map_y(-10.0), Y_BOTTOM);
}

#[test]
fn points_span_chart_width() {
    let c = TrendChart::new(TrendMetric::Ebit);
    assert_eq!(c.points.len(), 12);
    assert_eq!(c.points[0].x, 0.0);
    assert!((c.points[11].x - CHART_WIDTH).abs() < 1e-9);
}

#[test]
fn area_closes_against_floor() {
    let c = TrendChart::new(TrendMetric::NetIncome);
    let area = c.area_path();
    assert!(area.starts_with(&c.line_path()));
    assert!(area.ends_with(" L760 290 L0 290 Z"));
    assert_eq!(c.line_path().matches(" C").count(), 11);
}

#[test]
fn net_income_deltas() {
    let c = TrendChart::new(TrendMetric::NetIncome);
    assert_eq!(c.latest_amount(), 352_000.0);
    // 352 vs 307.
    assert_eq!(format_percent(c.latest_delta()), "+14.7%");
    // 307 vs 38.
    assert_eq!(format_percent(c.previous_delta()), "+707.9%");
}

#[test]
fn metrics_deserialize_camel_case() {
    let m: TrendMetric = serde_json::from_str("\"grossProfit\"").unwrap();
    assert_eq!(m, TrendMetric::GrossProfit);
}
