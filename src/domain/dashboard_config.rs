//! Streamlit dashboard configuration written to `.streamlit/config.toml`.

use serde::Serialize;

use crate::domain::AppError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardConfig {
    pub theme: ThemeConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    pub primary_color: String,
    pub background_color: String,
    pub secondary_background_color: String,
    pub text_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServerConfig {
    pub headless: bool,
    pub port: u16,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            theme: ThemeConfig {
                primary_color: "#1f77b4".to_string(),
                background_color: "#ffffff".to_string(),
                secondary_background_color: "#f0f2f6".to_string(),
                text_color: "#262730".to_string(),
            },
            server: ServerConfig { headless: true, port: 8501 },
        }
    }
}

impl DashboardConfig {
    pub fn to_toml(&self) -> Result<String, AppError> {
        Ok(toml::to_string(self)?)
    }
}
