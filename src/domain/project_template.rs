use serde::Serialize;

/// Catalog entry used to seed a new project's name and type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectTemplate {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

const CATALOG: &[ProjectTemplate] = &[
    ProjectTemplate {
        id: "1",
        title: "Basic Field Report",
        description: "A simple report to document field notes",
    },
    ProjectTemplate {
        id: "2",
        title: "Structural Evaluation",
        description: "Assess the condition, integrity, and performance of a structure to identify issues and recommend repairs or improvements.",
    },
    ProjectTemplate {
        id: "3",
        title: "Forensic Evaluation",
        description: "Assess structural failures, defects, or damages to determine causes and liability, often for legal or insurance purposes",
    },
    ProjectTemplate {
        id: "4",
        title: "GC Daily Field Report",
        description: "Daily field report for contractors to document site activities, progress, and issues.",
    },
    ProjectTemplate {
        id: "5",
        title: "GC Punch List",
        description: "Detailed checklist / punch list for contractors to track construction project tasks and deficiencies",
    },
    ProjectTemplate {
        id: "6",
        title: "Construction Site Visit",
        description: "For capturing key observations of site conditions and work progress",
    },
    ProjectTemplate {
        id: "7",
        title: "Property Condition Assessment",
        description: "For evaluating commercial and residential property conditions",
    },
    ProjectTemplate {
        id: "8",
        title: "Balcony Inspection",
        description: "For evaluating the condition of balconies and decks, including structural integrity and safety concerns.",
    },
    ProjectTemplate {
        id: "9",
        title: "Cleaning Inspection",
        description: "For cleaning inspection or job site observation",
    },
    ProjectTemplate {
        id: "10",
        title: "Restoration",
        description: "For restoration from emergency such as water damage, fire damage, mold remediation, etc.",
    },
    ProjectTemplate {
        id: "11",
        title: "HVAC Inspection Report",
        description: "For inspecting HVAC systems and components",
    },
    ProjectTemplate {
        id: "12",
        title: "Job Site Observation",
        description: "For assessing on-site activities and potential safety issues",
    },
    ProjectTemplate {
        id: "13",
        title: "Safety Inspection Report",
        description: "For workplace safety compliance and hazard identification",
    },
    ProjectTemplate {
        id: "14",
        title: "Site Walkthrough",
        description: "Structured template for documenting construction site walkthroughs",
    },
    ProjectTemplate {
        id: "15",
        title: "Mold Inspection",
        description: "For evaluating moisture conditions and mold concerns",
    },
    ProjectTemplate {
        id: "16",
        title: "Home Inspection",
        description: "Home inspections for real estate transactions, including buying, selling, and property transfers.",
    },
];

pub fn catalog() -> &'static [ProjectTemplate] {
    CATALOG
}

pub fn find_template(id: &str) -> Option<&'static ProjectTemplate> {
    CATALOG.iter().find(|t| t.id == id)
}

/// Case-insensitive match against title or description. A blank query
/// returns the whole catalog.
pub fn search_templates(query: &str) -> Vec<&'static ProjectTemplate> {
    let needle = query.trim().to_lowercase();
    CATALOG
        .iter()
        .filter(|t| {
            needle.is_empty()
                || t.title.to_lowercase().contains(&needle)
                || t.description.to_lowercase().contains(&needle)
        })
        .collect()
}
