use crate::support::*;

#[tokio::test]
async fn name_filter_is_case_insensitive_substring() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            create_certificate(app, CertificateBuilder::new("Spa Treatment")).await?;
            create_certificate(app, CertificateBuilder::new("Massage")).await?;
            create_certificate(app, CertificateBuilder::new("Deep SPA Retreat")).await?;

            let page = search_certificates(app, "name=spa").await?;
            let mut names = extract_names(&page)?;
            names.sort();
            assert_eq!(names, vec!["Deep SPA Retreat", "Spa Treatment"]);

            // Partial occurrence anywhere in the field.
            let page = search_certificates(app, "name=TREAT").await?;
            let mut names = extract_names(&page)?;
            names.sort();
            assert_eq!(names, vec!["Deep SPA Retreat", "Spa Treatment"]);

            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn description_filter_is_case_insensitive_substring() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            create_certificate(
                app,
                CertificateBuilder::new("Alpha").description("A Relaxing day at the spa"),
            )
            .await?;
            create_certificate(
                app,
                CertificateBuilder::new("Beta").description("Adrenaline kart racing"),
            )
            .await?;

            let page = search_certificates(app, "description=relax").await?;
            assert_eq!(extract_names(&page)?, vec!["Alpha"]);

            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn like_metacharacters_in_filters_match_literally() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            create_certificate(app, CertificateBuilder::new("50% off weekend")).await?;
            create_certificate(app, CertificateBuilder::new("500 piece puzzle")).await?;

            // '%' must not act as a wildcard.
            let page = search_certificates(app, "name=50%25%20off").await?;
            assert_eq!(extract_names(&page)?, vec!["50% off weekend"]);

            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn combined_filters_intersect() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            // Three filters with overlapping-but-not-identical result sets:
            // - name "spa" matches A, B
            // - description "family" matches B, C
            // - tag "sale" is attached to B, C, D
            create_certificate(
                app,
                CertificateBuilder::new("Spa Morning").description("quiet solo visit"),
            )
            .await?;
            create_certificate(
                app,
                CertificateBuilder::new("Spa Weekend")
                    .description("family package")
                    .tag("sale"),
            )
            .await?;
            create_certificate(
                app,
                CertificateBuilder::new("Zoo Trip")
                    .description("family outing")
                    .tag("sale"),
            )
            .await?;
            create_certificate(
                app,
                CertificateBuilder::new("Concert").description("loud evening").tag("sale"),
            )
            .await?;

            let page =
                search_certificates(app, "name=spa&description=family&tag=sale").await?;
            assert_eq!(extract_names(&page)?, vec!["Spa Weekend"]);
            assert_page_meta(&page, 1, 10, 1, 1)?;

            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn no_filters_returns_every_certificate() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            create_certificate(app, CertificateBuilder::new("One")).await?;
            create_certificate(app, CertificateBuilder::new("Two")).await?;

            let page = search_certificates(app, "").await?;
            assert_page_meta(&page, 1, 10, 1, 2)?;

            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn zero_matches_is_an_empty_page_not_an_error() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            create_certificate(app, CertificateBuilder::new("Spa Treatment")).await?;

            let page = search_certificates(app, "name=nonexistent").await?;
            assert_page_meta(&page, 1, 10, 0, 0)?;
            assert!(get_page_content(&page)?.is_empty());

            Ok(())
        })
    })
    .await
}
