use std::io::Write;

use sitereport::application::ports::{RenderError, ReportRenderer};
use sitereport::domain::{AssembledReport, ReportField, ReportImage, ReportSection, TocEntry};
use sitereport::infrastructure::rendering::HandlebarsReportRenderer;

fn empty_report() -> AssembledReport {
    AssembledReport {
        report_title: "Basic Field Report".to_string(),
        cover_image_url: "https://placeholder.test/cover.png".to_string(),
        report_fields: vec![ReportField {
            label: "Client Name".to_string(),
            value: "N/A".to_string(),
        }],
        toc_entries: Vec::new(),
        sections: Vec::new(),
        footer_text: "Report for Empty - Generated by sitereport".to_string(),
    }
}

#[test]
fn given_report_with_zero_sections_when_rendering_then_cover_and_footer_are_present() {
    let renderer = HandlebarsReportRenderer::new().unwrap();

    let html = renderer.render(&empty_report()).unwrap();

    assert!(html.contains("https://placeholder.test/cover.png"));
    assert!(html.contains("Client Name"));
    assert!(html.contains("Report for Empty - Generated by sitereport"));
    assert!(!html.contains("Table of Contents"));
}

#[test]
fn given_section_with_images_when_rendering_then_content_is_raw_and_captions_escaped() {
    let renderer = HandlebarsReportRenderer::new().unwrap();
    let mut report = empty_report();
    report.toc_entries.push(TocEntry {
        id: "observations_section".to_string(),
        title: "Observations".to_string(),
    });
    report.sections.push(ReportSection {
        id: "observations_section".to_string(),
        title: "1. Observations".to_string(),
        content: "<h3>Crack</h3><p>hairline<br>north wall</p>".to_string(),
        images: vec![ReportImage {
            url: "https://files.test/a.jpg".to_string(),
            caption: "Crack <north>".to_string(),
        }],
    });

    let html = renderer.render(&report).unwrap();

    assert!(html.contains("<h3>Crack</h3><p>hairline<br>north wall</p>"));
    assert!(html.contains("href=\"#observations_section\""));
    assert!(html.contains("https://files.test/a.jpg"));
    assert!(html.contains("Crack &lt;north&gt;"));
}

#[test]
fn given_custom_template_file_when_rendering_then_file_template_is_used() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "<h1>{{{{report_title}}}}</h1>{{{{#each sections}}}}[{{{{title}}}}]{{{{/each}}}}").unwrap();

    let renderer = HandlebarsReportRenderer::from_file(file.path()).unwrap();
    let html = renderer.render(&empty_report()).unwrap();

    assert_eq!(html, "<h1>Basic Field Report</h1>");
}

#[test]
fn given_unbalanced_template_when_compiling_then_returns_compilation_error() {
    let result = HandlebarsReportRenderer::from_template_str("{{#each sections}}never closed");

    assert!(matches!(result, Err(RenderError::Compilation(_))));
}

#[test]
fn given_missing_template_file_when_loading_then_returns_unavailable() {
    let result =
        HandlebarsReportRenderer::from_file(std::path::Path::new("/nonexistent/report.hbs"));

    assert!(matches!(result, Err(RenderError::TemplateUnavailable(_))));
}
