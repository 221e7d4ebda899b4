use crate::support::*;
use axum::http::StatusCode;

async fn seed_numbered(app: &TestApp, count: usize) -> anyhow::Result<()> {
    for i in 0..count {
        create_certificate(app, CertificateBuilder::new(&format!("Cert {i:02}"))).await?;
    }
    Ok(())
}

#[tokio::test]
async fn last_page_holds_the_remainder() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            seed_numbered(app, 5).await?;

            let page = search_certificates(app, "page=3&pageSize=2&orderByName=asc").await?;
            assert_page_meta(&page, 3, 2, 3, 5)?;
            assert_eq!(extract_names(&page)?, vec!["Cert 04"]);

            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn exact_multiple_fills_the_last_page() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            seed_numbered(app, 4).await?;

            let page = search_certificates(app, "page=2&pageSize=2&orderByName=asc").await?;
            assert_page_meta(&page, 2, 2, 2, 4)?;
            assert_eq!(extract_names(&page)?, vec!["Cert 02", "Cert 03"]);

            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn page_past_the_end_is_empty_with_correct_totals() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            seed_numbered(app, 5).await?;

            let page = search_certificates(app, "page=4&pageSize=2").await?;
            assert_page_meta(&page, 4, 2, 3, 5)?;
            assert!(get_page_content(&page)?.is_empty());

            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn pages_partition_without_overlap_or_gaps() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            seed_numbered(app, 5).await?;

            let mut seen = Vec::new();
            for page_number in 1..=3 {
                let page = search_certificates(
                    app,
                    &format!("page={page_number}&pageSize=2&orderByName=asc"),
                )
                .await?;
                seen.extend(extract_ids(&page)?);
            }

            let mut deduped = seen.clone();
            deduped.sort();
            deduped.dedup();
            assert_eq!(seen.len(), 5, "no rows skipped");
            assert_eq!(deduped.len(), 5, "no rows duplicated");

            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn page_zero_is_rejected_before_storage() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let status = search_certificates_expecting_error(app, "page=0").await?;
            assert_eq!(status, StatusCode::BAD_REQUEST);

            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn page_size_zero_is_rejected_before_storage() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let status = search_certificates_expecting_error(app, "pageSize=0").await?;
            assert_eq!(status, StatusCode::BAD_REQUEST);

            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn page_size_above_maximum_is_rejected() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let status = search_certificates_expecting_error(app, "pageSize=1000").await?;
            assert_eq!(status, StatusCode::BAD_REQUEST);

            Ok(())
        })
    })
    .await
}
