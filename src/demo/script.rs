use crate::foundation::error::{MotionError, MotionResult};

/// One bar of the answer chart. `height` is a CSS length (e.g. `"62%"`).
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChartBar {
    pub label: String,
    pub value: String,
    pub height: String,
}

/// A canned question with its scripted answer.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoExample {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub chart_title: String,
    #[serde(default)]
    pub chart_unit: String,
    #[serde(default)]
    pub bars: Vec<ChartBar>,
    #[serde(default)]
    pub y_ticks: Vec<String>,
}

impl DemoExample {
    /// Example with no chart.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            chart_title: String::new(),
            chart_unit: String::new(),
            bars: Vec::new(),
            y_ticks: Vec::new(),
        }
    }

    /// Question length in characters (Unicode scalar values).
    pub fn question_len(&self) -> usize {
        self.question.chars().count()
    }

    /// First `n` characters of the question.
    pub fn question_prefix(&self, n: usize) -> &str {
        match self.question.char_indices().nth(n) {
            Some((byte, _)) => &self.question[..byte],
            None => &self.question,
        }
    }
}

/// Ordered, non-empty list of examples the engine cycles through.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct DemoScript {
    examples: Vec<DemoExample>,
}

impl DemoScript {
    pub fn new(examples: Vec<DemoExample>) -> MotionResult<Self> {
        if examples.is_empty() {
            return Err(MotionError::validation(
                "demo script needs at least one example",
            ));
        }
        Ok(Self { examples })
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    /// Never true for a constructed script.
    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// Example at `index`, wrapping around.
    pub fn get(&self, index: usize) -> &DemoExample {
        &self.examples[index % self.examples.len()]
    }

    pub fn examples(&self) -> &[DemoExample] {
        &self.examples
    }
}

impl<'de> serde::Deserialize<'de> for DemoScript {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let examples = Vec::<DemoExample>::deserialize(deserializer)?;
        Self::new(examples).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/demo/script.rs"]
mod tests;
