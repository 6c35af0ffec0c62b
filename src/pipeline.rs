//! Pipeline - drives Locator, Extractor, Generator, Formatter and Sink
//!
//! Files are processed one at a time in locator order. The first error of any
//! stage ends the run.

use crate::config::{Mode, RunConfig};
use crate::error::Result;
use crate::extractors::{ExtractorManager, SourceParser};
use crate::formatter::SourceFormatter;
use crate::generator::{generate, GenerationJob};
use crate::locator::SourceLocator;
use crate::sink::{Destination, OutputArtifact};
use crate::utils::file_utils::read_source;
use crate::utils::paths::sibling_path;
use std::path::Path;
use tracing::{debug, info};

/// Counts reported at the end of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files_visited: usize,
    pub files_generated: usize,
    pub types_generated: usize,
}

pub struct Pipeline<'a, P: SourceParser, F: SourceFormatter> {
    parser: &'a P,
    formatter: &'a F,
    config: &'a RunConfig,
}

impl<'a, P: SourceParser, F: SourceFormatter> Pipeline<'a, P, F> {
    pub fn new(parser: &'a P, formatter: &'a F, config: &'a RunConfig) -> Self {
        Self {
            parser,
            formatter,
            config,
        }
    }

    pub fn run(&self) -> Result<RunSummary> {
        let mut summary = RunSummary::default();
        let manager = ExtractorManager::new(self.parser, &self.config.exclusions);

        for path in SourceLocator::new(self.config.mode.source_root()) {
            let path = path?;
            summary.files_visited += 1;

            let generated = self.process_file(&manager, &path)?;
            if generated > 0 {
                summary.files_generated += 1;
                summary.types_generated += generated;
            }
        }

        info!(
            "Visited {} files, generated String methods for {} types in {} files",
            summary.files_visited, summary.types_generated, summary.files_generated
        );
        Ok(summary)
    }

    /// Handle one file; returns how many types got a method
    fn process_file(&self, manager: &ExtractorManager<'_, P>, path: &Path) -> Result<usize> {
        debug!("HANDLE FILE: {}", path.display());

        let content = read_source(path)?;
        let extraction = manager.extract(path, &content)?;
        if extraction.is_empty() {
            debug!("NO STRUCT IN FILE: {}", path.display());
            return Ok(0);
        }

        let job = GenerationJob::from_extraction(&extraction, &self.config.method);
        let generated = generate(&job)?;
        let bytes = self
            .formatter
            .format(&generated.text, &generated.strategy.required_import())?;

        OutputArtifact::new(bytes, self.destination_for(path)).write()?;
        Ok(job.records().len())
    }

    fn destination_for(&self, source: &Path) -> Destination {
        match &self.config.mode {
            Mode::Source {
                destination: Some(dest),
                ..
            } => Destination::File(dest.clone()),
            Mode::Recursive { save: true, .. } => Destination::File(sibling_path(source)),
            _ => Destination::Stdout,
        }
    }
}
