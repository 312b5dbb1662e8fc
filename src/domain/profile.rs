use serde::Serialize;

use crate::domain::project_paths::{
    LAUNCH_SCRIPT_UNIX, LAUNCH_SCRIPT_WINDOWS, PRIMARY_DATASET, SAMPLE_DATASET,
};

/// Names rendered into the generated documentation and launch scripts.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectProfile {
    pub project_title: &'static str,
    pub primary_dataset: &'static str,
    pub sample_dataset: &'static str,
    pub dashboard_entry: &'static str,
    pub analysis_script: &'static str,
    pub notebook: &'static str,
    pub launch_script_unix: &'static str,
    pub launch_script_windows: &'static str,
    pub dataset_url: &'static str,
    pub copyright_holder: &'static str,
    pub copyright_year: u16,
}

impl ProjectProfile {
    /// The CORD-19 analysis project profile.
    pub const fn cord19() -> Self {
        Self {
            project_title: "CORD-19 Analysis",
            primary_dataset: PRIMARY_DATASET,
            sample_dataset: SAMPLE_DATASET,
            dashboard_entry: "streamlit_app.py",
            analysis_script: "analysis.py",
            notebook: "CORD19_Analysis_Notebook.py",
            launch_script_unix: LAUNCH_SCRIPT_UNIX,
            launch_script_windows: LAUNCH_SCRIPT_WINDOWS,
            dataset_url: "https://www.kaggle.com/allen-institute-for-ai/CORD-19-research-challenge",
            copyright_holder: "CORD-19 Analysis Project",
            copyright_year: 2024,
        }
    }
}
