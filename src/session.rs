//! Browsing session: the open archive, its catalog, the selection, option
//! toggles and the single current canvas.

use std::path::Path;

use crate::archive::{ArchiveOpener, JsonArchiveOpener, walk};
use crate::catalog::{Catalog, DistributionHandle, Selector};
use crate::compose::{Composition, RenderOptions, SeriesComposer};
use crate::error::Result;
use crate::model::{AppConfig, AxisRange, DistributionId};
use crate::render::{Canvas, CanvasRecorder, CompositionKind};
use crate::search::{self, DisplayMode};
use crate::style::{StyleKind, StyleProfile};

pub struct Session<O = JsonArchiveOpener> {
    opener: O,
    config: AppConfig,

    archive_label: Option<String>,
    catalog: Catalog,
    selector: Selector,

    options: RenderOptions,
    query: String,

    current: Option<Canvas>,
}

impl Session<JsonArchiveOpener> {
    pub fn from_config(config: AppConfig) -> Self {
        let opener = JsonArchiveOpener::new(config.base_group.clone());
        Self::new(config, opener)
    }
}

impl<O: ArchiveOpener> Session<O> {
    pub fn new(config: AppConfig, opener: O) -> Self {
        let options = RenderOptions::from_defaults(&config.defaults);
        Self {
            opener,
            config,
            archive_label: None,
            catalog: Catalog::new(),
            selector: Selector::new(),
            options,
            query: String::new(),
            current: None,
        }
    }

    /// Replaces the catalog with the contents of the archive at `path`.
    ///
    /// On failure nothing changes. On success the selection is emptied and
    /// the option toggles return to their configured defaults. Returns the
    /// number of distributions discovered.
    pub fn open_archive(&mut self, path: &Path) -> Result<usize> {
        let opened = self.opener.open_root(path)?;

        self.catalog.clear();
        self.selector.clear();
        let found = self.catalog.discover(walk(&opened.root));
        self.archive_label = Some(opened.label);
        self.options = RenderOptions::from_defaults(&self.config.defaults);
        Ok(found)
    }

    /// Opens the archive named by prompt input. Blank input means the prompt
    /// was cancelled and returns `Ok(None)`.
    pub fn open_from_prompt(&mut self, input: &str) -> Result<Option<usize>> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }
        self.open_archive(Path::new(input)).map(Some)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn archive_label(&self) -> Option<&str> {
        self.archive_label.as_deref()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn display_mode(&self) -> DisplayMode {
        DisplayMode::from_show_path(self.options.show_path)
    }

    pub fn style_kind(&self) -> StyleKind {
        StyleKind::from_publication(self.options.publication_style)
    }

    pub fn style(&self) -> &'static StyleProfile {
        self.style_kind().profile()
    }

    /// Catalog entries matching the current query, display-ordered.
    pub fn visible(&self) -> Vec<&DistributionHandle> {
        search::filter(&self.catalog, &self.query, self.display_mode())
    }

    /// Selected entries, display-ordered.
    pub fn selected(&self) -> Vec<&DistributionHandle> {
        let mut out: Vec<&DistributionHandle> = self.selector.entries().collect();
        search::sort_for_display(&mut out, self.display_mode());
        out
    }

    pub fn select(&mut self, id: DistributionId) -> Result<bool> {
        self.selector.add(&self.catalog, id)
    }

    pub fn deselect(&mut self, id: DistributionId) -> bool {
        self.selector.remove(id)
    }

    pub fn clear_selection(&mut self) {
        self.selector.clear();
    }

    pub fn toggle_show_path(&mut self) -> bool {
        self.options.show_path = !self.options.show_path;
        self.options.show_path
    }

    pub fn toggle_publication_style(&mut self) -> bool {
        self.options.publication_style = !self.options.publication_style;
        tracing::debug!(style = self.style_kind().label(), "style changed");
        self.options.publication_style
    }

    pub fn toggle_stats(&mut self) -> bool {
        self.options.show_stats = !self.options.show_stats;
        self.options.show_stats
    }

    pub fn toggle_legend(&mut self) -> bool {
        self.options.show_legend = !self.options.show_legend;
        self.options.show_legend
    }

    pub fn toggle_normalize(&mut self) -> bool {
        self.options.normalize = !self.options.normalize;
        self.options.normalize
    }

    /// Sets the title shared by every composed series. Blank clears it.
    pub fn set_custom_title(&mut self, title: Option<String>) {
        self.options.custom_title = title.filter(|t| !t.trim().is_empty());
    }

    pub fn set_x_range(&mut self, range: Option<AxisRange>) {
        self.options.x_range = range;
    }

    pub fn set_y_range(&mut self, range: Option<AxisRange>) {
        self.options.y_range = range;
    }

    /// Last composed canvas, if any.
    pub fn current(&self) -> Option<&Canvas> {
        self.current.as_ref()
    }

    pub fn preview(&mut self) -> Result<Composition> {
        self.compose(CompositionKind::Preview)
    }

    pub fn overlay(&mut self) -> Result<Composition> {
        self.compose(CompositionKind::Overlay)
    }

    pub fn merge(&mut self) -> Result<Composition> {
        self.compose(CompositionKind::Merge)
    }

    /// Composes the selection. A drawn canvas replaces the current one; an
    /// empty selection or a failed merge leaves it in place.
    pub fn compose(&mut self, kind: CompositionKind) -> Result<Composition> {
        let payloads = self.selector.payloads();
        let composer = SeriesComposer::new(&self.options);
        let mut recorder = CanvasRecorder::new(self.style(), self.config.canvas);

        let outcome = match kind {
            CompositionKind::Preview => composer.preview(&payloads, &mut recorder),
            CompositionKind::Overlay => composer.overlay(&payloads, &mut recorder),
            CompositionKind::Merge => composer.merge(&payloads, &mut recorder)?,
        };

        if outcome == Composition::Drawn
            && let Some(canvas) = recorder.finish()
        {
            self.current = Some(canvas);
        }
        Ok(outcome)
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
