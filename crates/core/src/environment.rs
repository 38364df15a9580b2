// Runtime environment and backend origin selection

use serde::{Deserialize, Serialize};

pub const DEFAULT_DEV_ORIGIN: &str = "http://localhost:5000";
pub const DEFAULT_PROD_ORIGIN: &str = "https://api.siteline.io";

/// Deployment stage, fixed at build/start time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Dev,
    #[default]
    Prod,
}

impl std::str::FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dev" | "development" | "local" => Ok(Stage::Dev),
            "prod" | "production" => Ok(Stage::Prod),
            other => Err(format!("unknown stage '{}' (expected dev or prod)", other)),
        }
    }
}

/// Where the calling code runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Runtime {
    /// Server-side rendering, scripts, the CLI
    Server,
    /// In a browser, with the hostname the page was served from
    Browser { hostname: String },
}

/// Candidate backend origins
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origins {
    pub development: String,
    pub production: String,
    /// Server-side override (e.g. an internal network address)
    pub server_override: Option<String>,
}

impl Default for Origins {
    fn default() -> Self {
        Self {
            development: DEFAULT_DEV_ORIGIN.to_string(),
            production: DEFAULT_PROD_ORIGIN.to_string(),
            server_override: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    pub runtime: Runtime,
    pub stage: Stage,
}

impl Environment {
    pub fn server(stage: Stage) -> Self {
        Self {
            runtime: Runtime::Server,
            stage,
        }
    }

    pub fn browser(hostname: impl Into<String>, stage: Stage) -> Self {
        Self {
            runtime: Runtime::Browser {
                hostname: hostname.into(),
            },
            stage,
        }
    }

    /// The backend origin requests are sent to.
    ///
    /// In a browser the served hostname decides: local hosts talk to the
    /// development backend, everything else to production. On the server the
    /// configured override wins, then the stage.
    pub fn backend_origin<'a>(&self, origins: &'a Origins) -> &'a str {
        let origin = match &self.runtime {
            Runtime::Browser { hostname } if is_local_host(hostname) => &origins.development,
            Runtime::Browser { .. } => &origins.production,
            Runtime::Server => match (&origins.server_override, self.stage) {
                (Some(explicit), _) => explicit,
                (None, Stage::Dev) => &origins.development,
                (None, Stage::Prod) => &origins.production,
            },
        };
        origin.trim_end_matches('/')
    }

    /// Base URL of the REST surface (`<origin>/api`).
    pub fn api_base_url(&self, origins: &Origins) -> String {
        format!("{}/api", self.backend_origin(origins))
    }

    /// Origin used to absolutize file and image paths returned by the backend.
    pub fn asset_origin<'a>(&self, origins: &'a Origins) -> &'a str {
        self.backend_origin(origins)
    }
}

fn is_local_host(hostname: &str) -> bool {
    matches!(
        hostname.trim().to_ascii_lowercase().as_str(),
        "localhost" | "127.0.0.1" | "::1" | "[::1]"
    )
}
