use anyhow::{Context, Result};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use super::assembly::{ContentContext, ContentIds, RebuildReport, rebuild_content};
use super::drawable::ContentList;
use crate::config::FileConfig;
use crate::domain::{Park, load_park};
use crate::options::{MapOption, MapOptionSelection};
use crate::source::{CachedSource, DataSource, DirectorySource};

type RebuildListener = Box<dyn FnMut(&ContentList, &RebuildReport)>;

/// One viewing session: a park, the current selection and its content
///
/// Every selection change rebuilds the content list synchronously. Both
/// operations take `&mut self`, so a rebuild can never start while another
/// is still running.
pub struct MapSession {
    park: Park,
    ids: ContentIds,
    source: Box<dyn DataSource>,
    rng: Box<dyn RngCore>,
    selection: MapOptionSelection,
    content: ContentList,
    report: RebuildReport,
    listeners: Vec<RebuildListener>,
}

impl MapSession {
    pub fn new(
        park: Park,
        ids: ContentIds,
        source: impl DataSource + 'static,
        rng: impl RngCore + 'static,
    ) -> Self {
        Self {
            park,
            ids,
            source: Box::new(source),
            rng: Box::new(rng),
            selection: MapOptionSelection::new(),
            content: ContentList::new(),
            report: RebuildReport::default(),
            listeners: Vec::new(),
        }
    }

    /// Open the configured park from its data directory
    pub fn from_config(config: &FileConfig) -> Result<Self> {
        let directory = DirectorySource::new(&config.data_dir);
        let source: Box<dyn DataSource> = if config.cache_sources {
            Box::new(CachedSource::new(directory))
        } else {
            Box::new(directory)
        };

        let park = load_park(&*source, &config.park, config.park_mode)
            .with_context(|| format!("Failed to load park {:?}", config.park))?;

        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        let mut session = Self::new(park, config.content_ids(), source, rng);
        if !config.initial_selection.is_empty() {
            session.apply_selection(config.initial_selection.iter().copied().collect());
        }
        Ok(session)
    }

    pub fn park(&self) -> &Park {
        &self.park
    }

    pub fn selection(&self) -> &MapOptionSelection {
        &self.selection
    }

    /// Content built by the most recent rebuild
    pub fn content_list(&self) -> &ContentList {
        &self.content
    }

    pub fn last_report(&self) -> &RebuildReport {
        &self.report
    }

    /// Called after every rebuild with the new content and its failures
    pub fn on_rebuild(&mut self, listener: impl FnMut(&ContentList, &RebuildReport) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn toggle(&mut self, option: MapOption) -> &RebuildReport {
        self.selection.toggle(option);
        self.rebuild()
    }

    pub fn apply_selection(&mut self, selection: MapOptionSelection) -> &RebuildReport {
        self.selection = selection;
        self.rebuild()
    }

    /// Rebuild from the current selection, replacing the previous content
    pub fn rebuild(&mut self) -> &RebuildReport {
        debug!(selected = self.selection.len(), "rebuilding map content");

        let (content, report) = rebuild_content(
            &self.selection,
            ContentContext {
                park: &self.park,
                ids: &self.ids,
                source: &*self.source,
                rng: &mut *self.rng,
            },
        );
        self.content = content;
        self.report = report;

        for listener in &mut self.listeners {
            listener(&self.content, &self.report);
        }

        &self.report
    }
}
