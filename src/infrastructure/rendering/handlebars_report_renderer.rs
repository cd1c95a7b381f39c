use std::path::Path;

use handlebars::Handlebars;

use crate::application::ports::{RenderError, ReportRenderer};
use crate::domain::AssembledReport;

const TEMPLATE_NAME: &str = "report";
const DEFAULT_TEMPLATE: &str = include_str!("../../../templates/report.hbs");

/// Logic-less report rendering. The template is compiled once at construction;
/// no helpers beyond the Handlebars built-ins are registered.
pub struct HandlebarsReportRenderer {
    registry: Handlebars<'static>,
}

impl HandlebarsReportRenderer {
    /// Uses the report template embedded in the binary.
    pub fn new() -> Result<Self, RenderError> {
        Self::from_template_str(DEFAULT_TEMPLATE)
    }

    pub fn from_template_str(source: &str) -> Result<Self, RenderError> {
        let mut registry = Handlebars::new();
        registry
            .register_template_string(TEMPLATE_NAME, source)
            .map_err(|e| RenderError::Compilation(e.to_string()))?;

        Ok(Self { registry })
    }

    pub fn from_file(path: &Path) -> Result<Self, RenderError> {
        let source = std::fs::read_to_string(path).map_err(|e| {
            RenderError::TemplateUnavailable(format!("{}: {}", path.display(), e))
        })?;
        tracing::info!(path = %path.display(), "Loaded report template from file");
        Self::from_template_str(&source)
    }
}

impl ReportRenderer for HandlebarsReportRenderer {
    fn render(&self, report: &AssembledReport) -> Result<String, RenderError> {
        self.registry
            .render(TEMPLATE_NAME, report)
            .map_err(|e| RenderError::Rendering(e.to_string()))
    }
}
