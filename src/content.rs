//! Per-locale JSON content documents that feed the demo, carousel and chart components.
//!
//! Documents are loaded with [`SiteContent::from_path`] (or `from_reader` / `str::parse`) and
//! checked with [`SiteContent::validate`], which reports every problem with a `$.field[i]` path.

use std::fmt;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use crate::carousel::{Carousel, Testimonial};
use crate::charts::forecast::{DimensionRow, PlanForecast};
use crate::demo::script::{DemoExample, DemoScript};
use crate::demo::stage::StageTimings;
use crate::demo::steps::StepLoop;
use crate::foundation::error::{MotionError, MotionResult};

/// Root of one locale's content document.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    pub locale: String,
    pub ai_copilot: CopilotContent,
    #[serde(default)]
    pub customers: CustomersContent,
    #[serde(default)]
    pub how_it_works: HowItWorksContent,
    /// Solution-page scenario panel.
    #[serde(default)]
    pub scenario: Option<ScenarioContent>,
    /// Solution-page quote spotlight; empty means the built-in quotes.
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopilotContent {
    pub examples: Vec<DemoExample>,
    #[serde(default)]
    pub timings: Option<StageTimings>,
    #[serde(default)]
    pub month_labels: Vec<String>,
    #[serde(default)]
    pub dimension_rows: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomersContent {
    #[serde(default)]
    pub testimonials: Vec<CustomerCard>,
}

/// Card in the home page customer carousel.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCard {
    pub company: String,
    pub quote: String,
    pub person: String,
    pub role: String,
    #[serde(default)]
    pub avatar_file: String,
    #[serde(default)]
    pub accent: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HowItWorksContent {
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Step {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
}

/// Scripted "what if" scenario shown on solution pages.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioContent {
    pub heading: String,
    #[serde(default)]
    pub description: Option<String>,
    pub question: String,
    pub answer: Vec<String>,
    pub metrics: Vec<String>,
    pub metric_values: Vec<String>,
    pub metric_hints: Vec<String>,
    pub active_month: String,
}

impl ScenarioContent {
    /// Demo example replayed by the scenario panel: the question plus the joined answer lines.
    pub fn as_example(&self) -> DemoExample {
        DemoExample::new(self.question.clone(), self.answer.join("\n"))
    }

    /// `(label, value, hint)` triples for the KPI tiles.
    pub fn metric_tiles(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.metrics
            .iter()
            .zip(&self.metric_values)
            .zip(&self.metric_hints)
            .map(|((m, v), h)| (m.as_str(), v.as_str(), h.as_str()))
    }
}

#[derive(Debug, Clone)]
struct ContentIssue {
    path: String,
    message: String,
}

impl fmt::Display for ContentIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

fn join_issues(issues: &[ContentIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

fn require_text(issues: &mut Vec<ContentIssue>, path: String, value: &str) {
    if value.trim().is_empty() {
        issues.push(ContentIssue {
            path,
            message: "must be non-empty".to_owned(),
        });
    }
}

impl FromStr for SiteContent {
    type Err = MotionError;

    /// Parses without validating; call [`SiteContent::validate`] afterwards.
    fn from_str(json: &str) -> MotionResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl SiteContent {
    pub fn from_reader(reader: impl Read) -> MotionResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Load and validate a document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> MotionResult<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| {
            MotionError::content(format!("open content '{}': {e}", path.display()))
        })?;
        let content = Self::from_reader(std::io::BufReader::new(file))?;
        content.validate()?;
        tracing::debug!(path = %path.display(), locale = %content.locale, "content loaded");
        Ok(content)
    }

    /// Check structural rules that serde cannot express. All problems are reported at once.
    pub fn validate(&self) -> MotionResult<()> {
        let mut issues = Vec::new();

        require_text(&mut issues, "$.locale".to_owned(), &self.locale);

        let copilot = &self.ai_copilot;
        if copilot.examples.is_empty() {
            issues.push(ContentIssue {
                path: "$.aiCopilot.examples".to_owned(),
                message: "needs at least one example".to_owned(),
            });
        }
        for (i, ex) in copilot.examples.iter().enumerate() {
            require_text(
                &mut issues,
                format!("$.aiCopilot.examples[{i}].question"),
                &ex.question,
            );
            require_text(
                &mut issues,
                format!("$.aiCopilot.examples[{i}].answer"),
                &ex.answer,
            );
        }
        if let Some(t) = &copilot.timings
            && let Err(e) = t.validate()
        {
            issues.push(ContentIssue {
                path: "$.aiCopilot.timings".to_owned(),
                message: e.to_string(),
            });
        }
        if !copilot.month_labels.is_empty() && copilot.month_labels.len() != 12 {
            issues.push(ContentIssue {
                path: "$.aiCopilot.monthLabels".to_owned(),
                message: format!("expected 12 labels, got {}", copilot.month_labels.len()),
            });
        }

        for (i, card) in self.customers.testimonials.iter().enumerate() {
            require_text(
                &mut issues,
                format!("$.customers.testimonials[{i}].quote"),
                &card.quote,
            );
        }

        for (i, step) in self.how_it_works.steps.iter().enumerate() {
            require_text(
                &mut issues,
                format!("$.howItWorks.steps[{i}].title"),
                &step.title,
            );
        }

        if let Some(s) = &self.scenario {
            require_text(&mut issues, "$.scenario.question".to_owned(), &s.question);
            if s.answer.is_empty() {
                issues.push(ContentIssue {
                    path: "$.scenario.answer".to_owned(),
                    message: "needs at least one line".to_owned(),
                });
            }
            if s.metric_values.len() != s.metrics.len() || s.metric_hints.len() != s.metrics.len()
            {
                issues.push(ContentIssue {
                    path: "$.scenario.metrics".to_owned(),
                    message: format!(
                        "metrics/metricValues/metricHints lengths differ ({}/{}/{})",
                        s.metrics.len(),
                        s.metric_values.len(),
                        s.metric_hints.len()
                    ),
                });
            }
            if !copilot.month_labels.is_empty()
                && !copilot.month_labels.iter().any(|m| *m == s.active_month)
            {
                issues.push(ContentIssue {
                    path: "$.scenario.activeMonth".to_owned(),
                    message: format!("'{}' is not a month label", s.active_month),
                });
            }
        }

        for (i, t) in self.testimonials.iter().enumerate() {
            require_text(&mut issues, format!("$.testimonials[{i}].quote"), &t.quote);
            require_text(&mut issues, format!("$.testimonials[{i}].name"), &t.name);
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(MotionError::content(join_issues(&issues)))
        }
    }

    pub fn copilot_script(&self) -> MotionResult<DemoScript> {
        DemoScript::new(self.ai_copilot.examples.clone())
    }

    /// Document timings, or the copilot defaults.
    pub fn copilot_timings(&self) -> StageTimings {
        self.ai_copilot.timings.unwrap_or_default()
    }

    pub fn customers_carousel(&self) -> MotionResult<Carousel<CustomerCard>> {
        Carousel::customers(self.customers.testimonials.clone())
    }

    pub fn spotlight_carousel(&self) -> MotionResult<Carousel<Testimonial>> {
        Carousel::spotlight(self.testimonials.clone(), Testimonial::defaults())
    }

    /// Step loop with evenly spaced thresholds, for hosts that have no layout to measure.
    pub fn step_loop(&self) -> StepLoop {
        let n = self.how_it_works.steps.len();
        let thresholds = (0..n).map(|i| (i as f64 + 0.5) / n as f64).collect();
        StepLoop::new(thresholds)
    }

    /// Plan dimension rows for `month`, named from the document.
    pub fn plan_dimensions(&self, forecast: &PlanForecast, month: usize) -> Vec<DimensionRow> {
        forecast.dimension_rows(month, &self.ai_copilot.dimension_rows)
    }
}

#[cfg(test)]
#[path = "../tests/unit/content.rs"]
mod tests;
