//! Calls against the real congress.gov API.
//!
//! Run with `--features api` and `CONGRESS_GOV_API_KEY` set (a `.env` file works).

use congress_client::{BillType, CongressGovClient};
use congress_core::QueryParams;

fn live_client() -> Result<CongressGovClient, Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    Ok(CongressGovClient::from_config()?)
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_live_current_congress() -> Result<(), Box<dyn std::error::Error>> {
    let congress = live_client()?;

    let response = congress
        .congress()
        .get_current_congress(&QueryParams::new())
        .await?;

    assert!(response.rate_limit.limit > 0, "Should report an hourly limit");
    assert!(response.body.get("congress").is_some());
    println!("Quota: {}", response.rate_limit);
    Ok(())
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_live_bill_listing_pages() -> Result<(), Box<dyn std::error::Error>> {
    let congress = live_client()?;

    let response = congress
        .bill()
        .get_bills_by_congress_and_type(118, BillType::Hr, &QueryParams::new().limit(2))
        .await?;

    let bills = response.body["bills"].as_array().cloned().unwrap_or_default();
    assert!(bills.len() <= 2);
    assert!(response.body["pagination"]["count"].as_u64().unwrap_or(0) > 0);
    Ok(())
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_live_congressional_record_is_normalized() -> Result<(), Box<dyn std::error::Error>> {
    let congress = live_client()?;

    let response = congress
        .congressional_record()
        .get_issues(&QueryParams::new().limit(3))
        .await?;

    assert!(response.body.data.issues.len() <= 3);
    assert!(*response.body.pagination.count() > 0);
    Ok(())
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_live_unknown_bill_is_api_error() -> Result<(), Box<dyn std::error::Error>> {
    let congress = live_client()?;

    let err = congress
        .bill()
        .get_bill(117, BillType::Hr, 999_999, &QueryParams::new())
        .await
        .expect_err("bill should not exist");

    assert!(matches!(err.status_code(), Some(404) | Some(400)));
    Ok(())
}
