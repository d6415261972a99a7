//! Run with debugging output:
//!
//! ```shell
//! RUST_LOG=ui_tests=debug,api=info cargo test -- --ignored --nocapture
//! ```

use anyhow::{Context, Result};
use fantoccini::{Client, ClientBuilder, Locator};
use rand::Rng;
use std::process::{Child, Command, Stdio};
use std::time::Duration;
use test_helpers::TestApp;
use tokio::time::sleep;
use tracing::{debug, info, warn};

pub struct TestEnvironment {
    pub api: TestApp,
    pub browser: Client,
    pub frontend_process: Child,
    pub geckodriver_process: Child,
    pub frontend_url: String,
}

impl TestEnvironment {
    #[cfg(test)]
    pub async fn setup() -> Result<Self> {
        Self::setup_with_options(false).await
    }

    pub async fn setup_headed() -> Result<Self> {
        Self::setup_with_options(true).await
    }

    async fn setup_with_options(headed: bool) -> Result<Self> {
        info!("🔧 Setting up test environment");

        let api = test_helpers::spawn_app().await;
        let api_url = format!("http://localhost:{}", api.port);
        info!("✅ API server running on {}", api_url);

        let (geckodriver_process, gecko_port) = spawn_on_free_port(4444, |port| {
            let mut command = Command::new("geckodriver");
            command.arg("--port").arg(port.to_string());
            command
        })
        .await
        .context("Failed to start geckodriver")?;
        info!("✅ Geckodriver running on port {}", gecko_port);

        build_frontend(&api_url)?;
        let (frontend_process, frontend_port) = spawn_on_free_port(8080, |port| {
            let mut command = Command::new("trunk");
            command
                .arg("serve")
                .arg("--port")
                .arg(port.to_string())
                .current_dir("../ui")
                .env("BACKEND_URL", &api_url);
            command
        })
        .await
        .context("Failed to start trunk serve")?;
        let frontend_url = format!("http://localhost:{}", frontend_port);

        wait_for_frontend(&frontend_url).await?;
        info!("✅ Frontend ready at {}", frontend_url);

        let browser = connect_to_browser(gecko_port, headed).await?;
        info!("✅ Browser connected");

        Ok(TestEnvironment {
            api,
            browser,
            frontend_process,
            geckodriver_process,
            frontend_url,
        })
    }

    pub async fn goto(&self, path: &str) -> Result<()> {
        self.browser
            .goto(&format!("{}{}", self.frontend_url, path))
            .await?;
        sleep(Duration::from_secs(1)).await;
        Ok(())
    }

    pub async fn current_path(&self) -> Result<String> {
        let url = self.browser.current_url().await?;
        Ok(match url.query() {
            Some(query) => format!("{}?{}", url.path(), query),
            None => url.path().to_string(),
        })
    }

    pub async fn page_text(&self) -> Result<String> {
        let body = self.browser.find(Locator::Css("body")).await?;
        Ok(body.text().await?)
    }
}

impl Drop for TestEnvironment {
    fn drop(&mut self) {
        info!("🧹 Cleaning up test environment");

        if let Err(e) = self.frontend_process.kill() {
            warn!("Failed to kill frontend process: {}", e);
        }
        if let Err(e) = self.geckodriver_process.kill() {
            warn!("Failed to kill geckodriver process: {}", e);
        }
    }
}

/// Start a long-running process on a randomised port near `base_port`,
/// retrying when it exits straight away (usually a port conflict).
async fn spawn_on_free_port(
    base_port: u16,
    command: impl Fn(u16) -> Command,
) -> Result<(Child, u16)> {
    for attempt in 1..=5 {
        let port = base_port + rand::thread_rng().gen_range(0..=100);
        debug!("Starting process on port {} (attempt {})", port, attempt);

        match command(port)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(mut child) => {
                sleep(Duration::from_millis(500)).await;
                match child.try_wait() {
                    Ok(Some(status)) => {
                        debug!("Process exited with {}, trying another port", status);
                    }
                    Ok(None) => return Ok((child, port)),
                    Err(e) => {
                        debug!("Error checking process status: {}", e);
                        let _ = child.kill();
                    }
                }
            }
            Err(e) => debug!("Failed to spawn process: {}", e),
        }

        sleep(Duration::from_millis(100)).await;
    }

    Err(anyhow::anyhow!("No free port after 5 attempts"))
}

fn build_frontend(backend_url: &str) -> Result<()> {
    debug!("Building frontend with trunk build");
    let status = Command::new("trunk")
        .arg("build")
        .current_dir("../ui")
        .env("BACKEND_URL", backend_url)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .context("Failed to run trunk build")?;

    if !status.success() {
        return Err(anyhow::anyhow!(
            "Frontend build failed with status: {}",
            status
        ));
    }
    Ok(())
}

async fn wait_for_frontend(url: &str) -> Result<()> {
    for i in 1..=30 {
        match reqwest::get(url).await {
            Ok(response) if response.status().is_success() => {
                debug!("Frontend ready after {} attempts", i);
                return Ok(());
            }
            _ => sleep(Duration::from_secs(1)).await,
        }
    }
    Err(anyhow::anyhow!(
        "Frontend failed to start after 30 attempts"
    ))
}

async fn connect_to_browser(gecko_port: u16, headed: bool) -> Result<Client> {
    let gecko_url = format!("http://localhost:{}", gecko_port);

    // Configure browser options based on headed parameter
    let mut caps = serde_json::Map::new();
    let firefox_opts = if headed {
        info!("🖥️ Starting browser in headed mode");
        serde_json::json!({
            "log": {"level": "error"}
        })
    } else {
        info!("👻 Starting browser in headless mode");
        serde_json::json!({
            "args": ["--headless"],
            "log": {"level": "error"}
        })
    };
    caps.insert("moz:firefoxOptions".to_string(), firefox_opts);

    let client = ClientBuilder::native()
        .capabilities(caps)
        .connect(&gecko_url)
        .await
        .context("Failed to connect to geckodriver")?;

    Ok(client)
}

/// Fill in the admin sign-in form and wait for the redirect away from it.
pub async fn login_admin(
    browser: &Client,
    frontend_url: &str,
    credentials: &payloads::requests::LoginCredentials,
) -> Result<()> {
    info!("🔐 Signing in as {}", credentials.email);

    let current_url = browser.current_url().await?;
    if !current_url.as_str().contains("/admin/login") {
        browser.goto(&format!("{}/admin/login", frontend_url)).await?;
        sleep(Duration::from_secs(1)).await;
    }

    fill_field(browser, "email", &credentials.email).await?;
    fill_field(browser, "password", &credentials.password).await?;

    let submit_button =
        browser.find(Locator::Css("button[type='submit']")).await?;
    submit_button.click().await?;
    sleep(Duration::from_secs(2)).await;

    let current_url = browser.current_url().await?;
    if current_url.as_str().contains("/admin/login") {
        let page_body = browser.find(Locator::Css("body")).await?;
        let page_text = page_body.text().await?;
        debug!(
            "Still on sign-in page after login attempt. Page content: {}",
            page_text
        );
        return Err(anyhow::anyhow!("Login failed - still on sign-in page"));
    }

    info!("✅ Signed in as {}", credentials.email);
    Ok(())
}

pub async fn fill_field(browser: &Client, id: &str, value: &str) -> Result<()> {
    let field = browser.find(Locator::Id(id)).await?;
    field.click().await?;
    field.clear().await?;
    field.send_keys(value).await?;
    Ok(())
}

/// Read a key from the page's local storage.
pub async fn local_storage_item(
    browser: &Client,
    key: &str,
) -> Result<Option<String>> {
    let value = browser
        .execute(
            "return window.localStorage.getItem(arguments[0]);",
            vec![serde_json::json!(key)],
        )
        .await?;
    Ok(value.as_str().map(str::to_string))
}

pub async fn set_local_storage_item(
    browser: &Client,
    key: &str,
    value: &str,
) -> Result<()> {
    browser
        .execute(
            "window.localStorage.setItem(arguments[0], arguments[1]);",
            vec![serde_json::json!(key), serde_json::json!(value)],
        )
        .await?;
    Ok(())
}
