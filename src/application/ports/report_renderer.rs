use crate::domain::AssembledReport;

/// Applies a precompiled report template to an assembled report.
pub trait ReportRenderer: Send + Sync {
    fn render(&self, report: &AssembledReport) -> Result<String, RenderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("template could not be loaded: {0}")]
    TemplateUnavailable(String),
    #[error("template compilation failed: {0}")]
    Compilation(String),
    #[error("rendering failed: {0}")]
    Rendering(String),
}
