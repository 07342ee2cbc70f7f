//! Core ContextExtractor implementation

use crate::config::ExtractorConfig;
use crate::detector::ReporterCitationDetector;
use crate::error::ExtractorError;
use crate::grammar::CitationGrammar;
use crate::html::HtmlTextExtractor;
use crate::normalizer::TextNormalizer;
use crate::parenthetical::ParentheticalFilter;
use crate::resolver::ReporterResolver;
use crate::segmenter::ReporterSegmenter;
use crate::tokenizer::CachingTokenizer;
use crate::types::{ExtractionMetadata, ExtractionResult};
use crate::window::ContextWindow;
use precedent_domain::traits::{
    CitationDetector, CitationResolver, OpinionStore, Segmenter, TextExtractor,
};
use precedent_domain::{
    CitationContext, CitationMention, OpinionId, OpinionParenthetical, ReporterKey,
};
use std::collections::HashMap;
use std::fmt::Display;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Drives one citing opinion through every pipeline stage
///
/// normalize → tokenize once → detect → resolve → match by reporter key →
/// filter parentheticals and extract windows.
///
/// The extractor never writes to storage. It returns the matched cited
/// opinions with their new relationship records appended in memory.
pub struct ContextExtractor<
    G = ReporterSegmenter,
    D = ReporterCitationDetector,
    R = ReporterResolver,
    E = HtmlTextExtractor,
> {
    segmenter: G,
    detector: D,
    resolver: R,
    text_extractor: E,
    normalizer: TextNormalizer,
    filter: ParentheticalFilter,
    window: ContextWindow,
    config: ExtractorConfig,
}

impl ContextExtractor {
    /// Create an extractor with the default reporter-table collaborators
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        let grammar = CitationGrammar::with_extra_reporters(&config.extra_reporters)
            .map_err(|e| ExtractorError::Config(e.to_string()))?;
        let grammar = Arc::new(grammar);

        Self::from_parts(
            ReporterSegmenter::new(Arc::clone(&grammar)),
            ReporterCitationDetector::new(grammar),
            ReporterResolver::new(),
            HtmlTextExtractor::new(),
            config,
        )
    }
}

impl<G, D, R, E> ContextExtractor<G, D, R, E>
where
    G: Segmenter,
    D: CitationDetector,
    R: CitationResolver,
    E: TextExtractor,
    D::Error: Display,
    R::Error: Display,
{
    /// Create an extractor from explicit collaborators
    pub fn from_parts(
        segmenter: G,
        detector: D,
        resolver: R,
        text_extractor: E,
        config: ExtractorConfig,
    ) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        Ok(Self {
            segmenter,
            detector,
            resolver,
            text_extractor,
            normalizer: TextNormalizer::new(),
            filter: ParentheticalFilter::new(),
            window: ContextWindow::from_config(&config),
            config,
        })
    }

    /// Active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Process one citing opinion
    pub fn extract<S>(&self, store: &S, citing: OpinionId) -> Result<ExtractionResult, ExtractorError>
    where
        S: OpinionStore,
        S::Error: Display,
    {
        let started = Instant::now();
        let mut metadata = ExtractionMetadata::new(citing);

        let opinion = store
            .get_opinion(citing)
            .map_err(|e| ExtractorError::Matching(e.to_string()))?
            .filter(|o| o.has_content())
            .ok_or(ExtractorError::MissingContent(citing))?;
        let markup = opinion.html_text.as_deref().unwrap_or_default();

        if markup.len() > self.config.max_text_length {
            return Err(ExtractorError::TextTooLong(
                markup.len(),
                self.config.max_text_length,
            ));
        }

        info!("Extracting citations from opinion {} ({} bytes)", citing, markup.len());

        let text = self
            .normalizer
            .normalize(&self.text_extractor.extract_text(markup));
        self.check_deadline(started, citing)?;

        let tokenizer = CachingTokenizer::new(&self.segmenter);
        let segmentation = tokenizer.tokenize(&text)?;
        debug!(
            "Segmented {} tokens, {} citation tokens",
            segmentation.len(),
            segmentation.citation_tokens.len()
        );
        self.check_deadline(started, citing)?;

        let mentions = self
            .detector
            .detect(&text, segmentation)
            .map_err(|e| ExtractorError::Detection(e.to_string()))?;
        metadata.mentions_detected = mentions.len();
        self.check_deadline(started, citing)?;

        let resolved = self
            .resolver
            .resolve(mentions)
            .map_err(|e| ExtractorError::Detection(e.to_string()))?;
        self.check_deadline(started, citing)?;

        // Keys that collide share one bucket
        let mut slots: HashMap<ReporterKey, usize> = HashMap::new();
        let mut buckets: Vec<(ReporterKey, Vec<CitationMention>)> = Vec::new();
        for citation in resolved {
            let key = citation.resource.key();
            if key.is_empty() {
                debug!("Skipping resolved citation without reporter groups");
                continue;
            }
            metadata.resources_resolved += 1;
            match slots.get(&key) {
                Some(&slot) => buckets[slot].1.extend(citation.mentions),
                None => {
                    slots.insert(key.clone(), buckets.len());
                    buckets.push((key, citation.mentions));
                }
            }
        }
        debug!(
            "Resolved {} citations into {} reporter keys",
            metadata.resources_resolved,
            buckets.len()
        );

        if buckets.is_empty() {
            metadata.processing_time_ms = started.elapsed().as_millis() as u64;
            return Ok(ExtractionResult {
                cited: Vec::new(),
                metadata,
            });
        }

        let keys: Vec<ReporterKey> = buckets.iter().map(|(key, _)| key.clone()).collect();
        let matched = store
            .find_opinions_by_reporters(&keys)
            .map_err(|e| ExtractorError::Matching(e.to_string()))?;

        let mut cited = Vec::with_capacity(matched.len());
        for mut opinion in matched {
            let Some(slot) = opinion
                .reporter
                .as_deref()
                .map(ReporterKey::from_stored)
                .and_then(|key| slots.get(&key).copied())
            else {
                continue;
            };

            for mention in &buckets[slot].1 {
                let parenthetical = mention.metadata.parenthetical.as_deref();
                if mention.kind.is_case_citation() && self.filter.accepts(parenthetical) {
                    if let Some(text) = parenthetical {
                        opinion.parentheticals.push(OpinionParenthetical::new(
                            citing,
                            opinion.id,
                            text.trim().to_string(),
                        ));
                    }
                }

                let window = self.window.extract(mention.index, segmentation, &text);
                opinion
                    .contexts
                    .push(CitationContext::new(citing, opinion.id, window));
            }

            metadata.parentheticals += opinion.parentheticals.len();
            metadata.contexts += opinion.contexts.len();
            cited.push(opinion);
        }
        self.check_deadline(started, citing)?;

        metadata.opinions_matched = cited.len();
        metadata.processing_time_ms = started.elapsed().as_millis() as u64;

        info!(
            "Opinion {}: {} mentions, {} matched opinions, {} parentheticals, {} contexts in {}ms",
            citing,
            metadata.mentions_detected,
            metadata.opinions_matched,
            metadata.parentheticals,
            metadata.contexts,
            metadata.processing_time_ms
        );

        Ok(ExtractionResult { cited, metadata })
    }

    fn check_deadline(&self, started: Instant, citing: OpinionId) -> Result<(), ExtractorError> {
        if started.elapsed() > self.config.per_opinion_timeout() {
            warn!(
                "Opinion {} exceeded the {}s processing budget",
                citing, self.config.per_opinion_timeout_secs
            );
            return Err(ExtractorError::Timeout);
        }
        Ok(())
    }
}
