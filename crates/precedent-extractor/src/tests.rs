//! Pipeline tests for the ContextExtractor

#[cfg(test)]
mod tests {
    use crate::{
        ContextExtractor, DetectionError, ExtractorConfig, ExtractorError, HtmlTextExtractor,
        ReporterCitationDetector, ReporterResolver, ReporterSegmenter,
    };
    use precedent_domain::traits::{CitationDetector, OpinionStore, Segmenter};
    use precedent_domain::{
        CitationContext, CitationMention, Cluster, ClusterId, Opinion, OpinionId,
        OpinionParenthetical, ReporterKey, Segmentation,
    };
    use precedent_store::SqliteStore;
    use std::time::Duration;

    const CITING: OpinionId = OpinionId::new(1);

    fn store_with(citing_text: Option<&str>, clusters: &[(i64, &str, i64)]) -> SqliteStore {
        let mut store = SqliteStore::new(":memory:").unwrap();
        store.insert_opinion(CITING, citing_text, None).unwrap();
        for &(cluster, reporter, opinion) in clusters {
            store.insert_cluster(ClusterId::new(cluster), reporter).unwrap();
            store
                .insert_opinion(
                    OpinionId::new(opinion),
                    Some("<p>cited</p>"),
                    Some(ClusterId::new(cluster)),
                )
                .unwrap();
        }
        store
    }

    fn extractor(window_start: i64, window_end: i64) -> ContextExtractor {
        ContextExtractor::new(ExtractorConfig {
            window_start,
            window_end,
            ..ExtractorConfig::default()
        })
        .unwrap()
    }

    fn context_texts(opinion: &Opinion) -> Vec<&str> {
        opinion.contexts.iter().map(|c| c.text.as_str()).collect()
    }

    #[test]
    fn test_missing_content() {
        let mut store = store_with(None, &[]);
        store
            .insert_opinion(OpinionId::new(5), Some("  \n "), None)
            .unwrap();
        let extractor = extractor(-4, 4);

        for id in [CITING, OpinionId::new(5), OpinionId::new(99)] {
            match extractor.extract(&store, id) {
                Err(ExtractorError::MissingContent(missing)) => assert_eq!(missing, id),
                other => panic!("expected MissingContent, got {:?}", other.map(|r| r.cited)),
            }
        }
    }

    #[test]
    fn test_one_context_per_mention() {
        let text = "First 2 U.S. 100 then words. Again 2 U.S. 100 here. Finally 2 U.S. 100 end.";
        let store = store_with(Some(text), &[(10, "2 U.S. 100", 2)]);

        let result = extractor(-1, 2).extract(&store, CITING).unwrap();

        assert_eq!(result.cited.len(), 1);
        let cited = &result.cited[0];
        assert_eq!(cited.id, OpinionId::new(2));
        assert_eq!(
            context_texts(cited),
            vec![
                "First 2 U.S. 100 then ",
                "Again 2 U.S. 100 here. ",
                "Finally 2 U.S. 100 end."
            ]
        );
        assert!(cited
            .contexts
            .iter()
            .all(|c| c.citing_opinion_id == CITING && c.cited_opinion_id == cited.id));
        assert!(cited.parentheticals.is_empty());
        assert_eq!(result.metadata.mentions_detected, 3);
        assert_eq!(result.metadata.contexts, 3);
    }

    #[test]
    fn test_parenthetical_filtering() {
        let text = "See 2 U.S. 100 (holding that the statute applies). \
                    But see 3 U.S. 7 (Scalia, J., dissenting).";
        let store = store_with(Some(text), &[(10, "2 U.S. 100", 2), (20, "3 U.S. 7", 3)]);

        let result = extractor(-8, 8).extract(&store, CITING).unwrap();

        assert_eq!(result.cited.len(), 2);
        let (first, second) = (&result.cited[0], &result.cited[1]);
        assert_eq!(
            first.parentheticals,
            vec![OpinionParenthetical::new(
                CITING,
                OpinionId::new(2),
                "holding that the statute applies".to_string()
            )]
        );
        assert_eq!(first.contexts.len(), 1);
        assert!(second.parentheticals.is_empty());
        assert_eq!(second.contexts.len(), 1);
        assert_eq!(result.parenthetical_count(), 1);
    }

    #[test]
    fn test_short_and_id_forms() {
        let text = "See 2 U.S. 100 (holding X). Id. (explaining Y). \
                    Later 2 U.S., at 105 (discussing Z).";
        let store = store_with(Some(text), &[(10, "2 U.S. 100", 2)]);

        let result = extractor(-2, 2).extract(&store, CITING).unwrap();

        let cited = &result.cited[0];
        assert_eq!(cited.contexts.len(), 3);
        let parentheticals: Vec<&str> =
            cited.parentheticals.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(parentheticals, vec!["holding X", "discussing Z"]);
    }

    #[test]
    fn test_parallel_citation_parenthetical_reaches_matched_cluster() {
        let text = "See Roe v. Wade, 410 U.S. 113, 93 S. Ct. 705 (1973) \
                    (recognizing a right to privacy).";
        let store = store_with(Some(text), &[(10, "410 U.S. 113", 2)]);

        let result = extractor(-4, 4).extract(&store, CITING).unwrap();

        assert_eq!(result.cited.len(), 1);
        let cited = &result.cited[0];
        assert_eq!(cited.id, OpinionId::new(2));
        assert_eq!(
            cited.parentheticals,
            vec![OpinionParenthetical::new(
                CITING,
                OpinionId::new(2),
                "recognizing a right to privacy".to_string()
            )]
        );
        assert_eq!(cited.contexts.len(), 1);
    }

    #[test]
    fn test_colliding_clusters_share_mentions() {
        let text = "Compare 2 U.S. 100, with 2 U.S. 100 again.";
        let store = store_with(
            Some(text),
            &[(10, "2 U.S. 100", 2), (11, "2  U.S.  100", 3)],
        );

        let result = extractor(0, 1).extract(&store, CITING).unwrap();

        assert_eq!(result.cited.len(), 2);
        for cited in &result.cited {
            assert_eq!(context_texts(cited), vec!["2 U.S. 100", "2 U.S. 100 "]);
        }
        assert_eq!(result.metadata.resources_resolved, 1);
        assert_eq!(result.metadata.opinions_matched, 2);
    }

    #[test]
    fn test_spaced_us_reporter_is_normalized() {
        let store = store_with(Some("See 2 U. S. 100."), &[(10, "2 U.S. 100", 2)]);

        let result = extractor(-1, 1).extract(&store, CITING).unwrap();

        assert_eq!(result.cited.len(), 1);
        assert_eq!(context_texts(&result.cited[0]), vec!["See 2 U.S. 100"]);
    }

    #[test]
    fn test_html_markup_is_flattened() {
        let store = store_with(
            Some("<p>See <i>Smith</i>, 2 U.S. 100 (holding that <b>X</b> applies).</p>"),
            &[(10, "2 U.S. 100", 2)],
        );

        let result = extractor(-1, 1).extract(&store, CITING).unwrap();

        let cited = &result.cited[0];
        assert_eq!(cited.parentheticals[0].text, "holding that X applies");
        assert_eq!(context_texts(cited), vec!["Smith, 2 U.S. 100 "]);
    }

    #[test]
    fn test_unmatched_and_absent_citations() {
        let store = store_with(
            Some("No citations here, only 42 U.S.C. 1983 and 9 U.S. 9."),
            &[(10, "2 U.S. 100", 2)],
        );

        let result = extractor(-4, 4).extract(&store, CITING).unwrap();

        assert!(result.cited.is_empty());
        assert_eq!(result.metadata.mentions_detected, 1);
        assert_eq!(result.metadata.opinions_matched, 0);
    }

    #[test]
    fn test_text_too_long() {
        let store = store_with(Some("See 2 U.S. 100."), &[]);
        let extractor = ContextExtractor::new(ExtractorConfig {
            max_text_length: 4,
            ..ExtractorConfig::default()
        })
        .unwrap();

        assert!(matches!(
            extractor.extract(&store, CITING),
            Err(ExtractorError::TextTooLong(15, 4))
        ));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let result = ContextExtractor::new(ExtractorConfig {
            window_start: 10,
            window_end: 0,
            ..ExtractorConfig::default()
        });
        assert!(matches!(result, Err(ExtractorError::Config(_))));
    }

    struct FailingDetector;

    impl CitationDetector for FailingDetector {
        type Error = DetectionError;

        fn detect(
            &self,
            _text: &str,
            _segmentation: &Segmentation,
        ) -> Result<Vec<CitationMention>, Self::Error> {
            Err(DetectionError::Unrecognised("garbled".to_string()))
        }
    }

    #[test]
    fn test_detection_failure_propagates() {
        let store = store_with(Some("See 2 U.S. 100."), &[(10, "2 U.S. 100", 2)]);
        let extractor = ContextExtractor::from_parts(
            ReporterSegmenter::default(),
            FailingDetector,
            ReporterResolver::new(),
            HtmlTextExtractor::new(),
            ExtractorConfig::default(),
        )
        .unwrap();

        match extractor.extract(&store, CITING) {
            Err(ExtractorError::Detection(message)) => assert!(message.contains("garbled")),
            other => panic!("expected Detection error, got {:?}", other.map(|r| r.cited)),
        }
    }

    struct SlowSegmenter;

    impl Segmenter for SlowSegmenter {
        fn segment(&self, text: &str) -> Segmentation {
            std::thread::sleep(Duration::from_millis(1_100));
            ReporterSegmenter::default().segment(text)
        }
    }

    #[test]
    fn test_time_budget_is_enforced() {
        let store = store_with(Some("See 2 U.S. 100."), &[(10, "2 U.S. 100", 2)]);
        let extractor = ContextExtractor::from_parts(
            SlowSegmenter,
            ReporterCitationDetector::default(),
            ReporterResolver::new(),
            HtmlTextExtractor::new(),
            ExtractorConfig {
                per_opinion_timeout_secs: 1,
                ..ExtractorConfig::default()
            },
        )
        .unwrap();

        assert!(matches!(
            extractor.extract(&store, CITING),
            Err(ExtractorError::Timeout)
        ));
    }

    /// Store whose reporter query always fails
    struct BrokenIndexStore {
        inner: SqliteStore,
    }

    impl OpinionStore for BrokenIndexStore {
        type Error = String;

        fn opinion_ids(&self) -> Result<Vec<OpinionId>, Self::Error> {
            self.inner.opinion_ids().map_err(|e| e.to_string())
        }

        fn get_opinion(&self, id: OpinionId) -> Result<Option<Opinion>, Self::Error> {
            self.inner.get_opinion(id).map_err(|e| e.to_string())
        }

        fn get_cluster(&self, id: ClusterId) -> Result<Option<Cluster>, Self::Error> {
            self.inner.get_cluster(id).map_err(|e| e.to_string())
        }

        fn find_opinions_by_reporters(
            &self,
            _keys: &[ReporterKey],
        ) -> Result<Vec<Opinion>, Self::Error> {
            Err("reporter index unavailable".to_string())
        }

        fn commit_relationships(
            &mut self,
            _citing: OpinionId,
            _cited: &[Opinion],
        ) -> Result<(), Self::Error> {
            Ok(())
        }

        fn parentheticals_from(
            &self,
            _citing: OpinionId,
        ) -> Result<Vec<OpinionParenthetical>, Self::Error> {
            Ok(Vec::new())
        }

        fn contexts_from(&self, _citing: OpinionId) -> Result<Vec<CitationContext>, Self::Error> {
            Ok(Vec::new())
        }

        fn citation_edges(&self) -> Result<Vec<(OpinionId, OpinionId, u32)>, Self::Error> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_matching_failure_propagates() {
        let store = BrokenIndexStore {
            inner: store_with(Some("See 2 U.S. 100."), &[(10, "2 U.S. 100", 2)]),
        };

        match extractor(-4, 4).extract(&store, CITING) {
            Err(ExtractorError::Matching(message)) => {
                assert_eq!(message, "reporter index unavailable")
            }
            other => panic!("expected Matching error, got {:?}", other.map(|r| r.cited)),
        }
    }
}
