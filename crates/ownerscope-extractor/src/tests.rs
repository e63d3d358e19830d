//! Integration tests for the finder pipeline

#[cfg(test)]
mod tests {
    use crate::{company_prompt, owners_prompt, Extraction, FinderConfig, FinderError, OwnerFinder};
    use ownerscope_llm::MockProvider;

    const URL: &str = "https://acme.test";

    fn finder(provider: MockProvider) -> OwnerFinder<MockProvider> {
        OwnerFinder::new(provider, FinderConfig::default())
    }

    #[tokio::test]
    async fn test_full_flow_with_json_reply() {
        let provider = MockProvider::new(
            r#"{
                "company_name": "Acme Corp",
                "description": "Makes widgets.",
                "owners": [{"name": "Jane Roe", "title": "Founder", "ownership_percentage": "60%"}],
                "management": {"ceo": {"name": "Jane Roe", "title": "CEO"}},
                "industry": "Manufacturing",
                "founded_year": "1999",
                "headquarters": "Toledo, OH"
            }"#,
        );
        let counter = provider.clone();

        let extraction = finder(provider).find(URL).await.unwrap();
        assert!(matches!(extraction, Extraction::Extracted(_)));

        let record = extraction.into_record();
        assert_eq!(record.company_name, "Acme Corp");
        assert_eq!(record.website, URL);
        assert_eq!(record.owners.len(), 1);
        assert_eq!(record.owners[0].name, "Jane Roe");

        // Owners were found, so no follow-up call was made
        assert_eq!(counter.call_count(), 1);
    }

    #[tokio::test]
    async fn test_invalid_url_fails_before_any_call() {
        let provider = MockProvider::new("{}");
        let counter = provider.clone();

        for bad in ["acme.test", "ftp://acme.test", ""] {
            let result = finder(provider.clone()).find(bad).await;
            assert!(matches!(result, Err(FinderError::InvalidUrl(_))));
        }

        assert_eq!(counter.call_count(), 0);
    }

    #[tokio::test]
    async fn test_first_call_failure_is_wrapped() {
        let mut provider = MockProvider::new("{}");
        provider.add_error(company_prompt(URL));

        let result = finder(provider).find(URL).await;
        match result {
            Err(FinderError::OperationFailed(msg)) => assert!(msg.contains("Mock error")),
            other => panic!("expected OperationFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_reply_degrades() {
        let provider = MockProvider::new("");
        let counter = provider.clone();

        let extraction = finder(provider).find(URL).await.unwrap();
        assert!(extraction.is_degraded());
        assert_eq!(extraction.record().company_name, "Unknown");
        assert!(extraction.record().owners.is_empty());

        // Degraded records have no usable name; the follow-up is skipped
        assert_eq!(counter.call_count(), 1);
    }

    #[tokio::test]
    async fn test_second_pass_replaces_owners() {
        let mut provider = MockProvider::new("{}");
        provider.add_response(
            company_prompt(URL),
            r#"{"company_name": "Acme Corp", "description": "Makes widgets.", "owners": []}"#,
        );
        provider.add_response(
            owners_prompt("Acme Corp"),
            r#"{"owners": [{"name": "Jane Roe", "title": "Owner", "ownership_percentage": "100%"}]}"#,
        );
        let counter = provider.clone();

        let record = finder(provider).find(URL).await.unwrap().into_record();

        assert_eq!(record.owners.len(), 1);
        assert_eq!(record.owners[0].name, "Jane Roe");
        assert_eq!(record.owners[0].ownership_percentage.as_deref(), Some("100%"));
        assert_eq!(counter.call_count(), 2);
    }

    #[tokio::test]
    async fn test_second_pass_merges_management_per_slot() {
        let mut provider = MockProvider::new("{}");
        provider.add_response(
            company_prompt(URL),
            r#"{"company_name": "Acme Corp",
                "owners": [],
                "management": {"ceo": {"name": "Original CEO", "title": "CEO"}}}"#,
        );
        provider.add_response(
            owners_prompt("Acme Corp"),
            r#"{"owners": ["Jane Roe"],
                "management": {
                    "ceo": {"name": "Second-Pass CEO", "title": "CEO"},
                    "cfo": {"name": "Second-Pass CFO", "title": "CFO"}
                }}"#,
        );

        let record = finder(provider).find(URL).await.unwrap().into_record();

        let management = record.management.unwrap();
        assert_eq!(management.ceo.unwrap().name.as_deref(), Some("Original CEO"));
        assert_eq!(
            management.cfo.unwrap().name.as_deref(),
            Some("Second-Pass CFO")
        );
        assert_eq!(record.owners.len(), 1);
    }

    #[tokio::test]
    async fn test_second_pass_failure_keeps_first_pass_record() {
        let mut provider = MockProvider::new("{}");
        provider.add_response(
            company_prompt(URL),
            r#"{"company_name": "Acme Corp", "description": "Makes widgets.", "owners": []}"#,
        );
        provider.add_error(owners_prompt("Acme Corp"));

        let extraction = finder(provider).find(URL).await.unwrap();
        let record = extraction.record();

        assert_eq!(record.company_name, "Acme Corp");
        assert_eq!(record.description, "Makes widgets.");
        assert!(record.owners.is_empty());
    }

    #[tokio::test]
    async fn test_second_pass_skipped_without_usable_name() {
        // Keyword-free text leaves the name Unknown; no follow-up possible
        let provider = MockProvider::new("nothing of note here");
        let counter = provider.clone();

        let record = finder(provider).find(URL).await.unwrap().into_record();

        assert_eq!(record.company_name, "Unknown");
        assert_eq!(counter.call_count(), 1);
    }

    #[tokio::test]
    async fn test_second_pass_disabled_by_config() {
        let mut provider = MockProvider::new("{}");
        provider.add_response(
            company_prompt(URL),
            r#"{"company_name": "Acme Corp", "owners": []}"#,
        );
        let counter = provider.clone();

        let mut config = FinderConfig::default();
        config.second_pass = false;

        let finder = OwnerFinder::new(provider, config);
        let record = finder.find(URL).await.unwrap().into_record();

        assert!(record.owners.is_empty());
        assert_eq!(counter.call_count(), 1);
    }
}
