mod handlebars_report_renderer;

pub use handlebars_report_renderer::HandlebarsReportRenderer;
