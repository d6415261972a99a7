use payloads::requests;
use reqwest::StatusCode;

use test_helpers::{assert_status_code, spawn_app};

fn search(q: &str, limit: Option<u32>) -> requests::LocationSearch {
    requests::LocationSearch {
        q: q.into(),
        limit,
    }
}

#[tokio::test]
async fn search_by_suburb_prefix() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let results = app.client.search_locations(&search("bon", None)).await?;
    let suburbs: Vec<_> = results.iter().map(|l| l.suburb.as_str()).collect();
    assert_eq!(suburbs, vec!["Bondi", "Bondi Junction"]);

    // second word of a suburb
    let results = app.client.search_locations(&search("kil", None)).await?;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].postcode, "3182");

    Ok(())
}

#[tokio::test]
async fn search_by_postcode_prefix() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let results = app.client.search_locations(&search("30", None)).await?;
    assert!(!results.is_empty());
    assert!(results.iter().all(|l| l.postcode.starts_with("30")));

    Ok(())
}

#[tokio::test]
async fn search_limit_is_clamped() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let results = app.client.search_locations(&search("2", Some(2))).await?;
    assert_eq!(results.len(), 2);

    let results = app.client.search_locations(&search("2", Some(0))).await?;
    assert_eq!(results.len(), 1);

    Ok(())
}

#[tokio::test]
async fn empty_search_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;

    assert_status_code(
        app.client.search_locations(&search("   ", None)).await,
        StatusCode::BAD_REQUEST,
    );

    Ok(())
}

#[tokio::test]
async fn availability_by_postcode() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let covered = app
        .client
        .check_availability(&requests::CheckAvailability {
            postcode: " 2042 ".into(),
            service_id: None,
        })
        .await?;
    assert!(covered.available);
    assert_eq!(covered.postcode, "2042");

    let regional = app
        .client
        .check_availability(&requests::CheckAvailability {
            postcode: "4350".into(),
            service_id: None,
        })
        .await?;
    assert!(!regional.available);

    assert_status_code(
        app.client
            .check_availability(&requests::CheckAvailability {
                postcode: "".into(),
                service_id: None,
            })
            .await,
        StatusCode::BAD_REQUEST,
    );

    Ok(())
}

#[tokio::test]
async fn availability_for_inactive_service() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let inactive = app
        .client
        .all_services()
        .await?
        .into_iter()
        .find(|s| !s.is_active)
        .expect("seeded inactive service");

    let availability = app
        .client
        .check_availability(&requests::CheckAvailability {
            postcode: "2000".into(),
            service_id: Some(inactive.id),
        })
        .await?;
    assert!(!availability.available);

    Ok(())
}
