/*!
 * Batch breakdown processing.
 *
 * This module contains functionality for processing documents in batches,
 * with support for concurrency, progress tracking, and error handling.
 * Each document flows through segmentation and per-scene element
 * extraction; results come back in submission order and one document's
 * failure never aborts its siblings.
 */

use anyhow::{anyhow, Result};
use futures::stream::{self, StreamExt};
use log::debug;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Semaphore;

use crate::document::{DocumentBreakdown, SceneRecord, ScriptDocument};
use crate::errors::PipelineError;
use crate::extractor::ElementExtractor;
use crate::segmenter::SceneSegmenter;

/// Breakdown pipeline for a single document
pub struct BreakdownPipeline {
    /// Scene segmenter
    segmenter: SceneSegmenter,

    /// Element extractor applied to every scene body
    extractor: ElementExtractor,
}

impl BreakdownPipeline {
    /// Create a new pipeline from its two stages
    pub fn new(segmenter: SceneSegmenter, extractor: ElementExtractor) -> Self {
        Self {
            segmenter,
            extractor,
        }
    }

    /// Process one document: segment, then extract elements per scene
    pub fn process(&self, document: &ScriptDocument) -> Result<DocumentBreakdown> {
        if document.is_empty() {
            return Err(PipelineError::EmptyDocument {
                source_id: document.source_id.clone(),
            }
            .into());
        }

        let scenes = self.segmenter.segment(&document.text);
        debug!(
            "Segmented '{}' into {} scenes",
            document.source_id,
            scenes.len()
        );

        let records = scenes
            .into_iter()
            .map(|scene| {
                let elements = self.extractor.extract(&scene.body_text);
                SceneRecord { scene, elements }
            })
            .collect();

        Ok(DocumentBreakdown {
            source_id: document.source_id.clone(),
            series_label: document.series_label.clone(),
            records,
        })
    }
}

/// Batch processor for running the pipeline over many documents concurrently
pub struct BatchProcessor {
    /// The shared pipeline
    pipeline: Arc<BreakdownPipeline>,

    /// Maximum number of documents processed concurrently
    max_concurrent_documents: usize,
}

impl BatchProcessor {
    /// Create a new batch processor
    pub fn new(pipeline: BreakdownPipeline, max_concurrent_documents: usize) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            max_concurrent_documents: max_concurrent_documents.max(1),
        }
    }

    /// Process a batch of documents concurrently
    ///
    /// Returns one result per input document, in input order. Per-document
    /// failures are carried in the result slot, not propagated.
    pub async fn process_batch(
        &self,
        documents: Vec<ScriptDocument>,
        progress_callback: impl Fn(usize, usize) + Clone + Send + 'static,
    ) -> Vec<Result<DocumentBreakdown>> {
        // Create a semaphore to limit concurrent documents
        let semaphore = Arc::new(Semaphore::new(self.max_concurrent_documents));

        // Track progress
        let total_documents = documents.len();
        let processed_documents = Arc::new(AtomicUsize::new(0));

        // Process documents concurrently
        let results = stream::iter(documents.into_iter().enumerate())
            .map(|(document_index, document)| {
                let pipeline = self.pipeline.clone();
                let semaphore = semaphore.clone();
                let processed_documents = processed_documents.clone();
                let progress_callback = progress_callback.clone();

                async move {
                    // Acquire a permit from the semaphore
                    let _permit = semaphore.acquire().await.unwrap();

                    // Segmentation and extraction are CPU-bound; keep them
                    // off the async worker threads
                    let source_id = document.source_id.clone();
                    let result = tokio::task::spawn_blocking(move || pipeline.process(&document))
                        .await
                        .unwrap_or_else(|e| {
                            Err(anyhow!("Processing task panicked for {}: {}", source_id, e))
                        });

                    // Update progress
                    let current = processed_documents.fetch_add(1, Ordering::SeqCst) + 1;
                    progress_callback(current, total_documents);

                    (document_index, result)
                }
            })
            .buffer_unordered(self.max_concurrent_documents)
            .collect::<Vec<_>>()
            .await;

        // Sort results by document index to maintain original order
        let mut sorted_results = results;
        sorted_results.sort_by_key(|(idx, _)| *idx);

        sorted_results.into_iter().map(|(_, result)| result).collect()
    }
}
