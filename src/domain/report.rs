use serde::Serialize;

/// Render-ready report handed to the template renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssembledReport {
    pub report_title: String,
    pub cover_image_url: String,
    pub report_fields: Vec<ReportField>,
    pub toc_entries: Vec<TocEntry>,
    pub sections: Vec<ReportSection>,
    pub footer_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportField {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSection {
    pub id: String,
    pub title: String,
    /// Already HTML; emitted unescaped by the template.
    pub content: String,
    pub images: Vec<ReportImage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportImage {
    pub url: String,
    pub caption: String,
}
