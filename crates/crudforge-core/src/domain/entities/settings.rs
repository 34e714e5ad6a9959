use serde::{Deserialize, Serialize};

use crate::domain::value_objects::SyntaxProfile;

pub const DEFAULT_PROJECT_NAME: &str = "myProject";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DATABASE_URL: &str = "mongodb://localhost:27017/mydatabase";

/// Entity-independent knobs of a generated project.
///
/// Only the entry point and the manifests read these. Nothing here can
/// change an identifier another layer depends on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSettings {
    pub project_name: String,
    pub port: u16,
    pub database_url: String,
    pub profile: SyntaxProfile,
}

impl ProjectSettings {
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            ..Self::default()
        }
    }

    pub fn with_profile(mut self, profile: SyntaxProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = url.into();
        self
    }
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            project_name: DEFAULT_PROJECT_NAME.to_string(),
            port: DEFAULT_PORT,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            profile: SyntaxProfile::Typed,
        }
    }
}
