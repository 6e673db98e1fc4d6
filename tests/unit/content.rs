use super::*;

const HOME: &str = include_str!("../data/home.sv.json");

fn home() -> SiteContent {
    HOME.parse::<SiteContent>().unwrap()
}

#[test]
fn fixture_parses_and_validates() {
    let c = home();
    c.validate().unwrap();
    assert_eq!(c.locale, "sv");
    assert_eq!(c.ai_copilot.examples.len(), 2);
    assert_eq!(c.ai_copilot.examples[0].question_len(), 30);
    assert_eq!(c.ai_copilot.examples[1].question_len(), 45);
    assert_eq!(c.ai_copilot.examples[0].bars.len(), 3);
    assert!(c.testimonials.is_empty());
}

#[test]
fn builds_components_from_content() {
    let c = home();
    assert_eq!(c.copilot_script().unwrap().len(), 2);
    assert_eq!(c.copilot_timings(), StageTimings::copilot());

    let customers = c.customers_carousel().unwrap();
    assert_eq!(customers.index(), 1);
    assert_eq!(customers.current().company, "Showcase");

    let spotlight = c.spotlight_carousel().unwrap();
    assert_eq!(spotlight.len(), Testimonial::defaults().len());

    let steps = c.step_loop();
    assert_eq!(steps.thresholds(), &[0.125, 0.375, 0.625, 0.875]);

    let rows = c.plan_dimensions(&PlanForecast::new(), 5);
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[3].name, "IT & system");
}

#[test]
fn scenario_tiles_zip_metric_columns() {
    let s = home().scenario.unwrap();
    let tiles: Vec<_> = s.metric_tiles().collect();
    assert_eq!(tiles[0], ("Lägsta kassa", "1,2 Mkr", "i november"));
    assert_eq!(tiles.len(), 2);
    assert!(s.as_example().answer.contains('\n'));
}

#[test]
fn validate_reports_every_issue_with_paths() {
    let mut c = home();
    c.ai_copilot.examples[1].question = "  ".to_owned();
    c.ai_copilot.month_labels.pop();
    if let Some(s) = c.scenario.as_mut() {
        s.metric_hints.pop();
        s.active_month = "Smarch".to_owned();
    }
    let err = c.validate().unwrap_err();
    assert!(matches!(err, MotionError::Content(_)));
    let msg = err.to_string();
    assert!(msg.starts_with("content error: "));
    assert!(msg.contains("$.aiCopilot.examples[1].question: must be non-empty"));
    assert!(msg.contains("$.aiCopilot.monthLabels: expected 12 labels, got 11"));
    assert!(msg.contains("$.scenario.metrics"));
    assert!(msg.contains("$.scenario.activeMonth"));
}

#[test]
fn empty_examples_fail_validation() {
    let mut c = home();
    c.ai_copilot.examples.clear();
    assert!(c.validate().is_err());
    assert!(c.copilot_script().is_err());
}

#[test]
fn zero_tick_timings_fail_validation() {
    let mut c = home();
    c.ai_copilot.timings = Some(StageTimings {
        typing_tick_ms: 0,
        ..StageTimings::copilot()
    });
    let msg = c.validate().unwrap_err().to_string();
    assert!(msg.contains("$.aiCopilot.timings"));
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = "{\"locale\": 3}".parse::<SiteContent>().unwrap_err();
    assert!(matches!(err, MotionError::Serde(_)));
}

#[test]
fn parsing_skips_validation() {
    let mut v: serde_json::Value = serde_json::from_str(HOME).unwrap();
    v["locale"] = serde_json::Value::String(String::new());
    let c: SiteContent = v.to_string().parse().unwrap();
    assert!(c.validate().unwrap_err().to_string().contains("$.locale"));
}

#[test]
fn missing_file_is_a_content_error() {
    let err = SiteContent::from_path("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, MotionError::Content(_)));
}
