//! Mock component labeler for testing.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::provider::{ComponentLabeler, ComponentLabels};
use crate::Result;

/// Component labeler returning a canned label assignment.
///
/// Lets cut-classification and orchestration logic be exercised with
/// deterministic labels, without a running GDS installation.
#[derive(Clone)]
pub struct MockLabeler {
    labels: ComponentLabels,
    calls: Arc<AtomicUsize>,
}

impl MockLabeler {
    /// Create a mock returning the given labels on every call.
    pub fn new(labels: ComponentLabels) -> Self {
        Self {
            labels,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of times `label_components` was invoked.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ComponentLabeler for MockLabeler {
    async fn label_components(&self, _projection: &str) -> Result<ComponentLabels> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.labels.clone())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::ident::NodeRef;

    #[tokio::test]
    async fn test_mock_returns_canned_labels() {
        let mock = MockLabeler::new(ComponentLabels::from_pairs([
            (NodeRef(1), 0),
            (NodeRef(2), 1),
        ]));

        let labels = mock.label_components("any-projection").await.unwrap();
        assert_eq!(labels.component_of(NodeRef(1)).unwrap(), 0);
        assert_eq!(labels.component_of(NodeRef(2)).unwrap(), 1);
    }

    #[tokio::test]
    async fn test_mock_counts_calls_across_clones() {
        let mock = MockLabeler::new(ComponentLabels::default());
        let clone = mock.clone();

        mock.label_components("p").await.unwrap();
        clone.label_components("p").await.unwrap();
        assert_eq!(mock.call_count(), 2);
    }
}
