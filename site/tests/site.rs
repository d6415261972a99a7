use payloads::{APIClient, responses::PopupConfig};
use site::{Failure, popup, search};
use test_helpers::spawn_app;

/// A client for a port nothing listens on.
fn unreachable_client() -> APIClient {
    APIClient::new("http://127.0.0.1:9")
}

#[tokio::test]
async fn search_returns_matches() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let results = search::search_locations(&app.client, " newt ", None).await;
    let results = results.map_err(anyhow::Error::msg)?;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].label(), "Newtown, NSW 2042");

    Ok(())
}

#[tokio::test]
async fn empty_inputs_never_reach_backend() -> anyhow::Result<()> {
    // would fail with a network error if a request were made
    let client = unreachable_client();

    assert_eq!(
        search::search_locations(&client, "  ", None).await,
        Err(search::EMPTY_QUERY.to_string())
    );
    assert_eq!(
        search::check_availability(&client, "", None).await,
        Err(search::EMPTY_POSTCODE.to_string())
    );

    Ok(())
}

#[tokio::test]
async fn network_failure_becomes_message() -> anyhow::Result<()> {
    let client = unreachable_client();

    let result = search::search_locations(&client, "bondi", None).await;
    assert_eq!(result, Err(Failure::Unavailable.message()));

    let result = search::check_availability(&client, "2000", None).await;
    assert_eq!(result, Err(Failure::Unavailable.message()));

    Ok(())
}

#[tokio::test]
async fn availability_check() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let availability = search::check_availability(&app.client, "3000", None)
        .await
        .map_err(anyhow::Error::msg)?;
    assert!(availability.available);

    let availability = search::check_availability(&app.client, "5000", None)
        .await
        .map_err(anyhow::Error::msg)?;
    assert!(!availability.available);
    assert!(availability.message.contains("5000"));

    Ok(())
}

#[tokio::test]
async fn unknown_service_is_an_unexpected_failure() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let result = app
        .client
        .check_availability(&payloads::requests::CheckAvailability {
            postcode: "2000".into(),
            service_id: Some(payloads::ServiceId(Default::default())),
        })
        .await;
    let failure = Failure::classify(&result.expect_err("unknown service"));

    let Failure::Unexpected { status, .. } = &failure else {
        panic!("expected an unexpected failure, got {failure:?}");
    };
    assert_eq!(*status, 404);
    assert!(failure.error_page().is_some_and(|url| url.starts_with("/error?status=404")));

    Ok(())
}

#[tokio::test]
async fn popup_config_loaded() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let config = popup::load_config(&app.client).await;
    assert_eq!(config, PopupConfig::default());
    assert!(popup::is_due(&config, None, app.time_source.now()));

    Ok(())
}

#[tokio::test]
async fn popup_config_falls_back_when_unreachable() -> anyhow::Result<()> {
    let config = popup::load_config(&unreachable_client()).await;
    assert_eq!(config, PopupConfig::default());

    Ok(())
}
