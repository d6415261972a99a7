use payloads::{ServiceId, requests};
use reqwest::StatusCode;

use test_helpers::{assert_status_code, service_details_a, spawn_app};

#[tokio::test]
async fn seeded_services_listed() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let services = app.client.all_services().await?;
    assert!(services.iter().any(|s| s.slug == "personal-care"));
    // inactive listings are included for the admin view
    assert!(services.iter().any(|s| !s.is_active));

    Ok(())
}

#[tokio::test]
async fn create_update_delete_service() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.login_admin().await?;

    let created = app.client.create_service(&service_details_a()).await?;
    assert_eq!(created.slug, "dementia-care");
    assert_eq!(created.created_at, app.time_source.now());

    app.time_source.advance(jiff::Span::new().minutes(5));
    let details = requests::ServiceDetails {
        is_active: false,
        ..service_details_a()
    };
    let updated = app.client.update_service(&created.id, &details).await?;
    assert!(!updated.is_active);
    assert!(updated.updated_at > created.updated_at);
    assert_eq!(updated.created_at, created.created_at);

    app.client.delete_service(&created.id).await?;
    let services = app.client.all_services().await?;
    assert!(!services.iter().any(|s| s.id == created.id));

    assert_status_code(
        app.client.delete_service(&created.id).await,
        StatusCode::NOT_FOUND,
    );

    Ok(())
}

#[tokio::test]
async fn service_changes_require_login() -> anyhow::Result<()> {
    let app = spawn_app().await;

    assert_status_code(
        app.client.create_service(&service_details_a()).await,
        StatusCode::UNAUTHORIZED,
    );

    let existing = app.client.all_services().await?.remove(0);
    assert_status_code(
        app.client.delete_service(&existing.id).await,
        StatusCode::UNAUTHORIZED,
    );

    Ok(())
}

#[tokio::test]
async fn invalid_services_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.login_admin().await?;

    let bad_slug = requests::ServiceDetails {
        slug: "Not A Slug".into(),
        ..service_details_a()
    };
    assert_status_code(
        app.client.create_service(&bad_slug).await,
        StatusCode::BAD_REQUEST,
    );

    let duplicate = requests::ServiceDetails {
        slug: "personal-care".into(),
        ..service_details_a()
    };
    assert_status_code(
        app.client.create_service(&duplicate).await,
        StatusCode::BAD_REQUEST,
    );

    assert_status_code(
        app.client
            .update_service(&ServiceId(Default::default()), &service_details_a())
            .await,
        StatusCode::NOT_FOUND,
    );

    Ok(())
}

#[tokio::test]
async fn update_may_keep_own_slug() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.login_admin().await?;

    let created = app.client.create_service(&service_details_a()).await?;
    let details = requests::ServiceDetails {
        name: "Dementia & Memory Care".into(),
        ..service_details_a()
    };
    let updated = app.client.update_service(&created.id, &details).await?;
    assert_eq!(updated.name, "Dementia & Memory Care");

    Ok(())
}
