//! Response payloads and application metadata.
//!
//! Every payload is built fresh for a single request and serialized
//! immediately. Field order here is the key order of the JSON body.

use chrono::Local;
use serde::Serialize;

use crate::Config;

// ---

/// Human readable application name.
pub const APP_NAME: &str = "Platform Engineering API";

/// Semantic version of the application, taken from the package manifest.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const HEALTH_PATH: &str = "/api/v1/health";
pub const DETAILS_PATH: &str = "/api/v1/details";

const DESCRIPTION: &str = "REST API demonstrating Platform Engineering best practices";
const TECHNOLOGIES: [&str; 6] = ["Rust", "Axum", "Docker", "Kubernetes", "Helm", "ArgoCD"];

/// Placeholder for values this service does not compute.
const NOT_AVAILABLE: &str = "N/A";

/// Current local wall-clock time as an ISO-8601 string without offset,
/// e.g. `2025-03-26T18:45:00.123456`.
pub fn now_iso8601() -> String {
    Local::now()
        .naive_local()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}

/// Compiler version captured by `build.rs`, plus the target and profile,
/// e.g. `rustc 1.85.0 (4d91de4e4 2025-02-17) (linux x86_64, release)`.
fn runtime_version() -> String {
    format!(
        "{} ({} {}, {})",
        env!("RUSTC_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH,
        if cfg!(debug_assertions) { "debug" } else { "release" }
    )
}

// --- GET /

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
    pub version: &'static str,
    pub timestamp: String,
    pub endpoints: Endpoints,
    pub documentation: Documentation,
}

#[derive(Debug, Serialize)]
pub struct Endpoints {
    pub health: &'static str,
    pub details: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Documentation {
    pub description: &'static str,
    pub technologies: [&'static str; 6],
}

impl RootResponse {
    pub fn welcome() -> Self {
        RootResponse {
            message: format!("Welcome to {APP_NAME}"),
            version: APP_VERSION,
            timestamp: now_iso8601(),
            endpoints: Endpoints {
                health: HEALTH_PATH,
                details: DETAILS_PATH,
            },
            documentation: Documentation {
                description: DESCRIPTION,
                technologies: TECHNOLOGIES,
            },
        }
    }
}

// --- GET /api/v1/health

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub timestamp: String,
    pub version: &'static str,
    pub checks: HealthChecks,
}

/// Static check results. Nothing is probed.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: &'static str,
    pub memory: &'static str,
    pub disk: &'static str,
}

impl HealthResponse {
    pub fn up() -> Self {
        HealthResponse {
            status: "up",
            message: "The service is running",
            timestamp: now_iso8601(),
            version: APP_VERSION,
            checks: HealthChecks {
                database: "ok",
                memory: "ok",
                disk: "ok",
            },
        }
    }
}

// --- GET /api/v1/details

#[derive(Debug, Serialize)]
pub struct DetailsResponse {
    pub application: ApplicationInfo,
    pub user: UserInfo,
    pub system: SystemInfo,
}

#[derive(Debug, Serialize)]
pub struct ApplicationInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub environment: String,
    pub runtime_version: String,
    pub hostname: String,
}

/// Hardcoded sample identity.
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub name: &'static str,
    pub age: u32,
    pub email: &'static str,
    pub role: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SystemInfo {
    pub timestamp: String,
    pub uptime: &'static str,
    pub memory_usage: &'static str,
}

impl DetailsResponse {
    pub fn from_config(config: &Config) -> Self {
        // ---
        DetailsResponse {
            application: ApplicationInfo {
                name: APP_NAME,
                version: APP_VERSION,
                environment: config.environment.clone(),
                runtime_version: runtime_version(),
                hostname: config.hostname.clone(),
            },
            user: UserInfo {
                name: "John Doe",
                age: 30,
                email: "john.doe@example.com",
                role: "Platform Engineer",
            },
            system: SystemInfo {
                timestamp: now_iso8601(),
                uptime: NOT_AVAILABLE,
                memory_usage: NOT_AVAILABLE,
            },
        }
    }
}

// --- 404 / 500

/// Body shared by every error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
    pub message: &'static str,
    pub status_code: u16,
    pub timestamp: String,
}
