use payloads::responses::PopupConfig;
use reqwest::StatusCode;

use test_helpers::{assert_status_code, spawn_app};

#[tokio::test]
async fn popup_config_is_seeded() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let config = app.client.popup_config().await?;
    assert_eq!(config, PopupConfig::default());

    Ok(())
}

#[tokio::test]
async fn unknown_setting_not_found() -> anyhow::Result<()> {
    let app = spawn_app().await;

    assert_status_code(
        app.client.setting::<serde_json::Value>("no_such_key").await,
        StatusCode::NOT_FOUND,
    );

    Ok(())
}
