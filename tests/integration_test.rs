use std::io::Read;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use chrono::NaiveDateTime;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

/// Port the service binds when `FLASK_PORT` is unset.
const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
    status_code: u16,
    timestamp: String,
}

#[derive(Debug, Deserialize)]
struct Application {
    name: String,
    version: String,
    environment: String,
    hostname: String,
}

#[derive(Debug, Deserialize)]
struct System {
    uptime: String,
    memory_usage: String,
}

#[derive(Debug, Deserialize)]
struct Details {
    application: Application,
    system: System,
}

/// Running server process, killed when dropped.
struct Server {
    child: Child,
    port: u16,
    base: String,
}

impl Server {
    /// Stop the process and return everything it wrote to stdout.
    fn stop_and_collect_stdout(mut self) -> Result<String> {
        // ---
        let mut stdout = self.child.stdout.take().context("stdout was not piped")?;
        let _ = self.child.kill();
        let _ = self.child.wait();

        let mut output = String::new();
        stdout.read_to_string(&mut output)?;
        Ok(output)
    }
}

impl Drop for Server {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

fn free_port() -> Result<u16> {
    // ---
    let listener = TcpListener::bind("127.0.0.1:0")?;
    Ok(listener.local_addr()?.port())
}

/// Launch the compiled binary bound to `127.0.0.1` on a free port and wait
/// until it answers the health check.
async fn start_server(hostname: &str) -> Result<Server> {
    // ---
    let port = free_port()?;
    let child = Command::new(env!("CARGO_BIN_EXE_platform-api"))
        .env("FLASK_HOST", "127.0.0.1")
        .env("FLASK_PORT", port.to_string())
        .env("FLASK_ENV", "development")
        .env("HOSTNAME", hostname)
        .env("AXUM_LOG_LEVEL", "warn")
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()?;

    let server = Server {
        child,
        port,
        base: format!("http://127.0.0.1:{port}"),
    };

    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(10);
    loop {
        let url = format!("{}/api/v1/health", server.base);
        if let Ok(resp) = client.get(&url).send().await {
            if resp.status().is_success() {
                return Ok(server);
            }
        }
        if Instant::now() > deadline {
            bail!("server did not come up on {}", server.base);
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
}

#[tokio::test]
async fn details_reports_configured_hostname() -> Result<()> {
    // ---
    let server = start_server("test-host").await?;
    let client = Client::new();

    let url = format!("{}/api/v1/details", server.base);
    let resp = client.get(&url).send().await?;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()[reqwest::header::CONTENT_TYPE],
        "application/json"
    );

    let details: Details = resp.json().await?;
    assert_eq!(details.application.name, "Platform Engineering API");
    assert_eq!(details.application.version, "1.0.0");
    assert_eq!(details.application.environment, "development");
    assert_eq!(details.application.hostname, "test-host");
    assert_eq!(details.system.uptime, "N/A");
    assert_eq!(details.system.memory_usage, "N/A");

    Ok(())
}

#[tokio::test]
async fn configured_port_replaces_default_port() -> Result<()> {
    // ---
    // A hostname unique to this process tells our server apart from anything
    // else that may already be listening on the default port.
    let marker = format!("bind-check-{}", std::process::id());
    let server = start_server(&marker).await?;
    assert_ne!(server.port, DEFAULT_PORT);

    let client = Client::builder()
        .timeout(Duration::from_secs(2))
        .build()?;
    let default_url = format!("http://127.0.0.1:{DEFAULT_PORT}/api/v1/details");

    match client.get(&default_url).send().await {
        // Nothing listening on the default port
        Err(_) => {}
        Ok(resp) => {
            let body: serde_json::Value = resp.json().await.unwrap_or_default();
            assert_ne!(
                body["application"]["hostname"], marker.as_str(),
                "server also answered on the default port"
            );
        }
    }

    Ok(())
}

#[tokio::test]
async fn startup_banner_is_printed() -> Result<()> {
    // ---
    let server = start_server("test-host").await?;
    let port = server.port;
    let stdout = server.stop_and_collect_stdout()?;

    for expected in [
        "Starting Platform Engineering API v1.0.0".to_string(),
        "Environment: development".to_string(),
        "Debug mode: true".to_string(),
        format!("Server running on http://127.0.0.1:{port}"),
    ] {
        assert!(
            stdout.lines().any(|line| line == expected),
            "missing banner line {expected:?} in:\n{stdout}"
        );
    }

    Ok(())
}

#[tokio::test]
async fn unknown_routes_return_json_404() -> Result<()> {
    // ---
    let server = start_server("test-host").await?;
    let client = Client::new();

    let get = client.get(format!("{}/foo", server.base)).send().await?;
    let post = client.post(format!("{}/", server.base)).send().await?;

    for resp in [get, post] {
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: ErrorBody = resp.json().await?;
        assert_eq!(body.error, "Not Found");
        assert_eq!(body.status_code, 404);
        assert!(
            NaiveDateTime::parse_from_str(&body.timestamp, "%Y-%m-%dT%H:%M:%S%.f").is_ok(),
            "timestamp should be ISO-8601: {}",
            body.timestamp
        );
    }

    Ok(())
}
