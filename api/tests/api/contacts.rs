use payloads::requests;
use reqwest::StatusCode;

use test_helpers::{assert_status_code, enquiry_a, spawn_app};

#[tokio::test]
async fn leads_listed_newest_first() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let first = app.submit_enquiry("First").await?;
    app.time_source.advance(jiff::Span::new().minutes(1));
    let second = app.submit_enquiry("Second").await?;

    app.login_admin().await?;
    let leads = app.client.leads().await?;
    let ids: Vec<_> = leads.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![second, first]);
    assert_eq!(leads[0].name, "Second");

    Ok(())
}

#[tokio::test]
async fn leads_require_login() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.submit_enquiry("Someone").await?;

    assert_status_code(app.client.leads().await, StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
async fn invalid_enquiries_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let no_email = requests::ContactEnquiry {
        email: "not-an-email".into(),
        ..enquiry_a()
    };
    assert_status_code(
        app.client.submit_enquiry(&no_email).await,
        StatusCode::BAD_REQUEST,
    );

    let no_message = requests::ContactEnquiry {
        message: "  ".into(),
        ..enquiry_a()
    };
    assert_status_code(
        app.client.submit_enquiry(&no_message).await,
        StatusCode::BAD_REQUEST,
    );

    Ok(())
}

#[tokio::test]
async fn blank_optional_fields_dropped() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let enquiry = requests::ContactEnquiry {
        phone: Some("   ".into()),
        postcode: None,
        ..enquiry_a()
    };
    app.client.submit_enquiry(&enquiry).await?;

    app.login_admin().await?;
    let leads = app.client.leads().await?;
    assert_eq!(leads[0].phone, None);
    assert_eq!(leads[0].postcode, None);

    Ok(())
}
