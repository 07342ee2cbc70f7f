//! Default resolver grouping mentions by cited resource

use precedent_domain::traits::CitationResolver;
use precedent_domain::{
    CitationMention, CitedResource, MentionKind, ReporterGroups, ResolvedCitation,
};
use std::collections::HashMap;
use std::convert::Infallible;
use tracing::debug;

/// Groups mentions into resolved citations, in first-appearance order
///
/// - full citations resolve by (volume, reporter, page)
/// - short citations resolve to the most recent full citation with the same
///   volume and reporter
/// - `Id.` resolves to whatever the previous mention resolved to
///
/// Mentions that resolve to nothing are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReporterResolver;

impl ReporterResolver {
    /// Create a resolver
    pub fn new() -> Self {
        Self
    }
}

impl CitationResolver for ReporterResolver {
    type Error = Infallible;

    fn resolve(
        &self,
        mentions: Vec<CitationMention>,
    ) -> Result<Vec<ResolvedCitation>, Self::Error> {
        let mut resolved: Vec<ResolvedCitation> = Vec::new();
        let mut by_groups: HashMap<ReporterGroups, usize> = HashMap::new();
        let mut latest_full: HashMap<(Option<String>, Option<String>), usize> = HashMap::new();
        let mut previous: Option<usize> = None;

        for mention in mentions {
            let target = match mention.kind {
                MentionKind::FullCase => {
                    let slot = *by_groups.entry(mention.groups.clone()).or_insert_with(|| {
                        resolved.push(ResolvedCitation {
                            resource: CitedResource {
                                groups: mention.groups.clone(),
                            },
                            mentions: Vec::new(),
                        });
                        resolved.len() - 1
                    });
                    latest_full.insert(
                        (mention.groups.volume.clone(), mention.groups.reporter.clone()),
                        slot,
                    );
                    Some(slot)
                }
                MentionKind::ShortCase => latest_full
                    .get(&(mention.groups.volume.clone(), mention.groups.reporter.clone()))
                    .copied(),
                MentionKind::Id => previous,
            };

            match target {
                Some(slot) => resolved[slot].mentions.push(mention),
                None => debug!(
                    kind = mention.kind.as_str(),
                    index = mention.index,
                    "Dropping unresolved mention"
                ),
            }
            previous = target;
        }

        Ok(resolved)
    }
}
