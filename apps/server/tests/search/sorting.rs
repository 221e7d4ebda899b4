use crate::support::*;

#[tokio::test]
async fn name_ascending_orders_lexicographically() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            create_certificate(app, CertificateBuilder::new("Gamma")).await?;
            create_certificate(app, CertificateBuilder::new("Alpha")).await?;
            create_certificate(app, CertificateBuilder::new("Beta")).await?;

            let page = search_certificates(app, "orderByName=asc").await?;
            assert_eq!(extract_names(&page)?, vec!["Alpha", "Beta", "Gamma"]);

            let page = search_certificates(app, "orderByName=desc").await?;
            assert_eq!(extract_names(&page)?, vec!["Gamma", "Beta", "Alpha"]);

            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn repeated_requests_return_identical_order() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            // Equal names force the tie-break to decide the order.
            for _ in 0..4 {
                create_certificate(app, CertificateBuilder::new("Same")).await?;
            }

            let first = search_certificates(app, "orderByName=asc").await?;
            let second = search_certificates(app, "orderByName=asc").await?;
            assert_eq!(extract_ids(&first)?, extract_ids(&second)?);

            // Unsorted searches are deterministic too.
            let first = search_certificates(app, "").await?;
            let second = search_certificates(app, "").await?;
            assert_eq!(extract_ids(&first)?, extract_ids(&second)?);

            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn name_takes_precedence_over_create_date() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            // Creation order fixes the relative create dates.
            let duo_old = create_certificate(app, CertificateBuilder::new("Duo")).await?;
            let solo = create_certificate(app, CertificateBuilder::new("Solo")).await?;
            let duo_new = create_certificate(app, CertificateBuilder::new("Duo")).await?;

            let page =
                search_certificates(app, "orderByName=asc&orderByCreateDate=desc").await?;

            // Primary key: name ascending; among equal names: date descending.
            assert_eq!(extract_ids(&page)?, vec![duo_new, duo_old, solo]);

            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn create_date_sort_without_name_sort() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let first = create_certificate(app, CertificateBuilder::new("One")).await?;
            let second = create_certificate(app, CertificateBuilder::new("Two")).await?;
            let third = create_certificate(app, CertificateBuilder::new("Three")).await?;

            let page = search_certificates(app, "orderByCreateDate=desc").await?;
            assert_eq!(extract_ids(&page)?, vec![third, second, first]);

            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn invalid_sort_direction_is_rejected() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let status = search_certificates_expecting_error(app, "orderByName=sideways").await?;
            assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);

            Ok(())
        })
    })
    .await
}
