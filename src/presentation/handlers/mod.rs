mod error;
mod files;
mod health;
mod projects;
mod reports;
mod templates;
mod transcriptions;

pub use error::{ApiError, ApiResult, ErrorResponse};
pub use files::{file_url_handler, get_file_handler, upload_file_handler, upload_url_handler};
pub use health::health_handler;
pub use projects::{
    add_observation_handler, add_recommendation_handler, create_project_handler,
    get_project_handler, list_projects_handler, remove_observation_handler,
    remove_recommendation_handler, replace_recommendations_handler, update_observation_handler,
    update_project_handler,
};
pub use reports::{generate_report_handler, get_report_handler};
pub use templates::list_templates_handler;
pub use transcriptions::transcription_handler;
