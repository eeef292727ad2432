//! HTML page rendering
//!
//! The page template is compiled in and rendered with auto-escaping, so user
//! text and configured titles never reach the markup unescaped. Theme colours
//! are passed as CSS custom properties.

use crate::analysis::{Analysis, EMPTY_INPUT_WARNING};
use crate::config::ThemeConfig;
use minijinja::Environment;
use serde::Serialize;

const INDEX_TEMPLATE: &str = "index.html";

/// Renders the single demo page
pub struct PageRenderer {
    env: Environment<'static>,
}

/// Template context
#[derive(Debug, Serialize)]
pub struct Page<'a> {
    pub theme: &'a ThemeConfig,
    pub load_errors: &'a [String],
    pub text: &'a str,
    pub view: PageView,
}

/// State-specific part of the page
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PageView {
    Idle {
        warning: &'static str,
    },
    Result {
        label: &'static str,
        emoji: &'static str,
        confidence: String,
    },
    Error {
        messages: Vec<String>,
    },
}

impl From<&Analysis> for PageView {
    fn from(analysis: &Analysis) -> Self {
        match analysis {
            Analysis::Idle => Self::Idle {
                warning: EMPTY_INPUT_WARNING,
            },
            Analysis::Result(prediction) => Self::Result {
                label: prediction.label.as_str(),
                emoji: prediction.label.emoji(),
                confidence: prediction.confidence_percent(),
            },
            Analysis::Error(_) => Self::Error {
                messages: analysis.error_messages(),
            },
        }
    }
}

impl PageRenderer {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(
            INDEX_TEMPLATE,
            include_str!("../../web/templates/index.html"),
        )?;
        Ok(Self { env })
    }

    pub fn render(&self, page: &Page<'_>) -> Result<String, minijinja::Error> {
        self.env.get_template(INDEX_TEMPLATE)?.render(page)
    }
}
