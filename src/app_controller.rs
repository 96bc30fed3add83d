use anyhow::{Context, Result};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use log::{error, info, warn};
use std::path::{Path, PathBuf};

use crate::app_config::{Config, OutputFormat};
use crate::document::{DocumentBreakdown, ScriptDocument};
use crate::extractor::{ElementExtractor, GazetteerSet, NoopEntityTagger};
use crate::file_utils::FileManager;
use crate::pipeline::{BatchProcessor, BreakdownPipeline};
use crate::projector::{ColumnSchema, TableProjector};
use crate::segmenter::{SceneSegmenter, SegmenterConfig};

// @module: Application controller for screenplay breakdown

/// Main application controller for breakdown generation
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The resolved column schema for this run
    pub fn schema(&self) -> ColumnSchema {
        ColumnSchema::resolve(
            &self.config.schema.preset,
            self.config.schema.custom_columns.clone(),
        )
    }

    fn build_pipeline(&self) -> BreakdownPipeline {
        let segmenter = SceneSegmenter::new(SegmenterConfig {
            paragraph_fallback: self.config.processing.paragraph_fallback,
        });
        let extractor = ElementExtractor::new(GazetteerSet::default(), Box::new(NoopEntityTagger));
        BreakdownPipeline::new(segmenter, extractor)
    }

    /// Run the main workflow for a single screenplay file
    pub async fn run(
        &self,
        input_file: PathBuf,
        output_dir: PathBuf,
        force_overwrite: bool,
    ) -> Result<()> {
        let multi_progress = MultiProgress::new();
        self.run_with_progress(input_file, output_dir, &multi_progress, force_overwrite)
            .await
    }

    /// Run the controller with progress reporting
    async fn run_with_progress(
        &self,
        input_file: PathBuf,
        output_dir: PathBuf,
        multi_progress: &MultiProgress,
        force_overwrite: bool,
    ) -> Result<()> {
        let start_time = std::time::Instant::now();

        // Check if the input file exists
        if !input_file.exists() {
            return Err(anyhow::anyhow!("Input file does not exist: {:?}", input_file));
        }

        // Ensure the output directory exists
        FileManager::ensure_dir(&output_dir)?;

        // Check if a breakdown already exists
        let extension = self.config.output.format.extension();
        let output_path = FileManager::generate_output_path(&input_file, &output_dir, extension);
        if output_path.exists() && !force_overwrite {
            warn!("Skipping file, breakdown already exists (use -f to force overwrite)");
            return Ok(());
        }

        // Read the screenplay into memory
        let mut document = FileManager::read_document(&input_file)?;
        if let Some(label) = &self.config.series_label {
            document = document.with_series_label(label);
        }

        let breakdowns = self
            .process_documents_with_progress(vec![document], multi_progress)
            .await?;

        // Single-document run: exactly one result slot
        let breakdown = breakdowns
            .into_iter()
            .next()
            .context("Batch processing returned no result")??;

        info!(
            "Segmented '{}' into {} scenes",
            breakdown.source_id,
            breakdown.scene_count()
        );

        self.save_breakdown(&breakdown, &output_path)?;

        info!(
            "Breakdown completed in {}.",
            Self::format_duration(start_time.elapsed())
        );

        Ok(())
    }

    /// Process documents through the batch pipeline with a progress bar
    async fn process_documents_with_progress(
        &self,
        documents: Vec<ScriptDocument>,
        multi_progress: &MultiProgress,
    ) -> Result<Vec<Result<DocumentBreakdown>>> {
        let total = documents.len() as u64;
        let progress_bar = multi_progress.add(ProgressBar::new(total));
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} documents ({percent}%) {msg} {eta}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(template_result.progress_chars("█▓▒░"));
        progress_bar.set_message("Processing");

        let processor = BatchProcessor::new(
            self.build_pipeline(),
            self.config.processing.concurrent_documents,
        );

        let pb = progress_bar.clone();
        let results = processor
            .process_batch(documents, move |completed, _total| {
                pb.set_position(completed as u64);
            })
            .await;

        progress_bar.finish_and_clear();
        Ok(results)
    }

    /// Project a breakdown through the configured schema and write it out
    fn save_breakdown(&self, breakdown: &DocumentBreakdown, output_path: &Path) -> Result<()> {
        match self.config.output.format {
            OutputFormat::Json => {
                FileManager::write_json(output_path, breakdown)?;
            }
            OutputFormat::Tsv => {
                let schema = self.schema();
                let projector = TableProjector::new();
                let rows = projector.project(
                    &breakdown.records,
                    &schema,
                    breakdown.series_label.as_deref(),
                );
                FileManager::write_delimited(output_path, &schema, &rows)?;
            }
        }

        info!("Success: {}", output_path.display());
        Ok(())
    }

    // Format duration in a human-readable format (HH:MM:SS)
    fn format_duration(duration: std::time::Duration) -> String {
        let total_seconds = duration.as_secs();
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }

    /// Run the workflow in folder mode, processing all screenplay files in a
    /// directory. Files that already have a breakdown are skipped.
    pub async fn run_folder(&self, input_dir: PathBuf, force_overwrite: bool) -> Result<()> {
        let start_time = std::time::Instant::now();

        // Check if the input directory exists
        if !input_dir.exists() {
            return Err(anyhow::anyhow!(
                "Input directory does not exist: {:?}",
                input_dir
            ));
        }

        // Find all screenplay files in the directory (recursive)
        let script_files = FileManager::find_files(&input_dir, "txt")?;

        if script_files.is_empty() {
            return Err(anyhow::anyhow!(
                "No screenplay files found in directory: {:?}",
                input_dir
            ));
        }

        let extension = self.config.output.format.extension();

        // Pair each file with its output path, skipping existing breakdowns
        let mut pending: Vec<(PathBuf, PathBuf)> = Vec::new();
        let mut skip_count = 0;
        for script_file in &script_files {
            let output_dir = match &self.config.output.directory {
                Some(dir) => PathBuf::from(dir),
                None => script_file
                    .parent()
                    .map(|p| p.to_path_buf())
                    .unwrap_or_else(|| input_dir.clone()),
            };
            let output_path =
                FileManager::generate_output_path(script_file, &output_dir, extension);

            if output_path.exists() && !force_overwrite {
                warn!(
                    "Skipping {:?}, breakdown already exists (use -f to force overwrite)",
                    script_file.file_name().unwrap_or_default()
                );
                skip_count += 1;
                continue;
            }

            pending.push((script_file.clone(), output_path));
        }

        if pending.is_empty() {
            info!("Nothing to do: all {} breakdowns already exist", skip_count);
            return Ok(());
        }

        // Read all pending documents up front; unreadable files count as
        // errors without stopping the batch
        let mut documents = Vec::with_capacity(pending.len());
        let mut output_paths = Vec::with_capacity(pending.len());
        let mut error_count = 0;
        for (script_file, output_path) in pending {
            match FileManager::read_document(&script_file) {
                Ok(mut document) => {
                    if let Some(label) = &self.config.series_label {
                        document = document.with_series_label(label);
                    }
                    documents.push(document);
                    output_paths.push(output_path);
                }
                Err(e) => {
                    error!("Error reading file {:?}: {}", script_file, e);
                    error_count += 1;
                }
            }
        }

        let multi_progress = MultiProgress::new();
        let results = self
            .process_documents_with_progress(documents, &multi_progress)
            .await?;

        let mut success_count = 0;
        for (result, output_path) in results.into_iter().zip(output_paths) {
            match result {
                Ok(breakdown) => match self.save_breakdown(&breakdown, &output_path) {
                    Ok(()) => success_count += 1,
                    Err(e) => {
                        error!("Error writing {:?}: {}", output_path, e);
                        error_count += 1;
                    }
                },
                Err(e) => {
                    error!("Error processing document: {}", e);
                    error_count += 1;
                }
            }
        }

        let duration = start_time.elapsed();
        info!(
            "Folder processing completed: {} processed, {} skipped, {} errors - Duration: {}",
            success_count,
            skip_count,
            error_count,
            Self::format_duration(duration)
        );

        Ok(())
    }
}
