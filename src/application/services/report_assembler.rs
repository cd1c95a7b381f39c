use crate::domain::{
    AssembledReport, Observation, Project, Recommendation, ReportField, ReportImage,
    ReportSection, ResolvedProject, TocEntry,
};

pub const DEFAULT_PLACEHOLDER_COVER_URL: &str =
    "https://via.placeholder.com/800x400.png?text=Cover+Image+Not+Available";

const NOT_AVAILABLE: &str = "N/A";

/// Turns a resolved project into the structure the report template consumes.
///
/// Sections appear in a fixed order and only when their backing text or
/// collection is non-empty. Their numeric prefix is the 1-based position among
/// the included sections, so numbering never has gaps.
#[derive(Debug, Clone)]
pub struct ReportAssembler {
    placeholder_cover_url: String,
    product_name: String,
}

impl ReportAssembler {
    pub fn new(placeholder_cover_url: impl Into<String>, product_name: impl Into<String>) -> Self {
        Self {
            placeholder_cover_url: placeholder_cover_url.into(),
            product_name: product_name.into(),
        }
    }

    pub fn assemble(&self, resolved: &ResolvedProject) -> AssembledReport {
        let project = &resolved.project;
        let mut builder = SectionBuilder::default();

        if let Some(text) = non_empty(&project.site_description_text) {
            builder.push("site_description", "Site Description", paragraph(text), Vec::new());
        }

        if let Some(text) = non_empty(&project.scope_of_evaluation_text) {
            builder.push(
                "scope_of_evaluation",
                "Scope of Evaluation",
                paragraph(text),
                Vec::new(),
            );
        }

        if !project.observations.is_empty() {
            let (content, images) = observations_block(&project.observations, resolved);
            builder.push("observations_section", "Observations", content, images);
        }

        if !project.recommendations.is_empty() {
            builder.push(
                "recommendations_section",
                "Recommendations",
                recommendations_block(&project.recommendations),
                Vec::new(),
            );
        }

        if let Some(text) = non_empty(&project.conclusions_text) {
            builder.push("conclusions_section", "Conclusions", paragraph(text), Vec::new());
        }

        let cover_image_url = resolved
            .cover_photo_url
            .clone()
            .unwrap_or_else(|| self.placeholder_cover_url.clone());

        AssembledReport {
            report_title: report_title(project),
            cover_image_url,
            report_fields: cover_fields(project),
            toc_entries: builder.toc,
            sections: builder.sections,
            footer_text: format!(
                "Report for {} - Generated by {}",
                project.name, self.product_name
            ),
        }
    }
}

impl Default for ReportAssembler {
    fn default() -> Self {
        Self::new(DEFAULT_PLACEHOLDER_COVER_URL, env!("CARGO_PKG_NAME"))
    }
}

#[derive(Default)]
struct SectionBuilder {
    toc: Vec<TocEntry>,
    sections: Vec<ReportSection>,
}

impl SectionBuilder {
    fn push(&mut self, id: &str, title: &str, content: String, images: Vec<ReportImage>) {
        let number = self.sections.len() + 1;
        self.toc.push(TocEntry {
            id: id.to_string(),
            title: title.to_string(),
        });
        self.sections.push(ReportSection {
            id: id.to_string(),
            title: format!("{}. {}", number, title),
            content,
            images,
        });
    }
}

fn non_empty(text: &Option<String>) -> Option<&str> {
    text.as_deref().filter(|t| !t.is_empty())
}

/// Newlines become `<br>`; no other markup is touched.
fn line_breaks(text: &str) -> String {
    text.replace('\n', "<br>")
}

fn paragraph(text: &str) -> String {
    format!("<p>{}</p>", line_breaks(text))
}

fn observations_block(
    observations: &[Observation],
    resolved: &ResolvedProject,
) -> (String, Vec<ReportImage>) {
    let mut content = String::new();
    let mut images = Vec::new();

    for obs in observations {
        let title = if obs.title.is_empty() {
            "Observation"
        } else {
            obs.title.as_str()
        };
        let body = if obs.content.is_empty() {
            "No content.".to_string()
        } else {
            line_breaks(&obs.content)
        };
        content.push_str(&format!("<h3>{}</h3><p>{}</p>", title, body));

        if let Some(url) = resolved.image_url(&obs.id) {
            let caption = if obs.title.is_empty() {
                "Observation Image"
            } else {
                obs.title.as_str()
            };
            images.push(ReportImage {
                url: url.to_string(),
                caption: caption.to_string(),
            });
        }
    }

    (content, images)
}

fn recommendations_block(recommendations: &[Recommendation]) -> String {
    let items: String = recommendations
        .iter()
        .map(|rec| {
            if rec.text.is_empty() {
                "<li>No content.</li>".to_string()
            } else {
                format!("<li>{}</li>", line_breaks(&rec.text))
            }
        })
        .collect();
    format!("<ul>{}</ul>", items)
}

fn report_title(project: &Project) -> String {
    [&project.original_template_title, &project.name]
        .into_iter()
        .find(|t| !t.is_empty())
        .cloned()
        .unwrap_or_else(|| "Field Report".to_string())
}

fn cover_fields(project: &Project) -> Vec<ReportField> {
    let field = |label: &str, value: Option<&str>| ReportField {
        label: label.to_string(),
        value: value
            .filter(|v| !v.is_empty())
            .unwrap_or(NOT_AVAILABLE)
            .to_string(),
    };

    vec![
        field("Property Name", Some(project.name.as_str())),
        field("Property Address", project.site_address.as_deref()),
        field("Client Name", project.client_name.as_deref()),
        field("Inspection Date", project.inspection_date.as_deref()),
        field("Inspector Name", project.inspector_name.as_deref()),
    ]
}
