//! Multi-series composition: preview, overlay and merge.
//!
//! Every mode works on clones of the payloads it is handed. The originals
//! belong to the catalog and are never modified.

mod options;
mod palette;
mod stack;

pub use self::options::RenderOptions;
pub use self::palette::{PALETTE_LEN, palette, series_color};
pub use self::stack::stack_boxes;

use crate::error::Result;
use crate::model::{Axis, Histogram};
use crate::render::{
    CompositionKind, LEGEND_PLACEMENT, Legend, LegendEntry, Renderer, StatBox,
};

/// Outcome of a composition call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Composition {
    Drawn,
    /// Nothing selected; nothing was drawn.
    EmptySelection,
}

pub struct SeriesComposer<'a> {
    options: &'a RenderOptions,
}

impl<'a> SeriesComposer<'a> {
    pub fn new(options: &'a RenderOptions) -> Self {
        Self { options }
    }

    /// Applies axis ranges, the shared custom title and stats visibility.
    pub fn apply_options(&self, series: &mut Histogram) {
        if let Some(r) = self.options.x_range {
            series.set_axis_range(Axis::X, r.min, r.max);
        }
        if let Some(r) = self.options.y_range {
            series.set_axis_range(Axis::Y, r.min, r.max);
        }
        if let Some(title) = self.options.custom_title.as_deref() {
            series.set_title(title);
        }
        series.set_stats(self.options.show_stats);
    }

    /// One pad per series, side by side, each drawn as-is.
    pub fn preview<R>(&self, series: &[&Histogram], renderer: &mut R) -> Composition
    where
        R: Renderer + ?Sized,
    {
        if series.is_empty() {
            tracing::warn!("preview skipped: selection is empty");
            return Composition::EmptySelection;
        }

        let copies: Vec<Histogram> = series.iter().map(|h| (*h).clone()).collect();
        renderer.begin(CompositionKind::Preview, copies.len());
        for (pad, copy) in copies.iter().enumerate() {
            self.draw_maybe_normalized(renderer, pad, copy);
            if copy.stats_visible() {
                renderer.draw_scratch(copy);
                if let Some(placement) = renderer.locate_default_stat_box() {
                    renderer.draw_stat_box(pad, placement, None, copy);
                }
            }
        }
        tracing::debug!(series = copies.len(), "preview composed");
        Composition::Drawn
    }

    /// Summary-box placements for `series` drawn on one pad.
    ///
    /// The first series is laid out on the renderer's scratch pad to learn
    /// its default placement; the rest are stacked below it. The scratch copy
    /// always shows stats, whatever the payload's own flag says.
    pub fn layout_stat_boxes<R>(&self, series: &[Histogram], renderer: &mut R) -> Vec<StatBox>
    where
        R: Renderer + ?Sized,
    {
        let Some(first) = series.first() else {
            return Vec::new();
        };
        let mut scratch = first.clone();
        scratch.set_stats(true);
        renderer.draw_scratch(&scratch);
        match renderer.locate_default_stat_box() {
            Some(placement) => stack_boxes(placement, series.len()),
            None => Vec::new(),
        }
    }

    /// All series on shared axes with colored, stacked summary boxes.
    pub fn overlay<R>(&self, series: &[&Histogram], renderer: &mut R) -> Composition
    where
        R: Renderer + ?Sized,
    {
        if series.is_empty() {
            tracing::warn!("overlay skipped: selection is empty");
            return Composition::EmptySelection;
        }

        let mut copies: Vec<Histogram> = series.iter().map(|h| (*h).clone()).collect();
        renderer.begin(CompositionKind::Overlay, 1);
        let boxes = self.layout_stat_boxes(&copies, renderer);

        let mut legend = Legend {
            placement: LEGEND_PLACEMENT,
            entries: Vec::with_capacity(copies.len()),
        };
        for (i, copy) in copies.iter_mut().enumerate() {
            let color = series_color(i);
            copy.set_line_color(color);
            self.apply_options(copy);
            legend.entries.push(LegendEntry {
                label: copy.title().to_string(),
                color,
            });
            self.draw_maybe_normalized(renderer, 0, copy);
        }

        if self.options.show_stats {
            for (i, (placement, copy)) in boxes.iter().zip(&copies).enumerate() {
                renderer.draw_stat_box(0, *placement, Some(series_color(i)), copy);
            }
        }

        if self.options.show_legend {
            renderer.draw_legend(0, legend);
        }
        tracing::debug!(series = copies.len(), "overlay composed");
        Composition::Drawn
    }

    /// Bin-wise sum of all series, drawn alone.
    pub fn merge<R>(&self, series: &[&Histogram], renderer: &mut R) -> Result<Composition>
    where
        R: Renderer + ?Sized,
    {
        let Some((first, rest)) = series.split_first() else {
            tracing::warn!("merge skipped: selection is empty");
            return Ok(Composition::EmptySelection);
        };

        let mut sum = (*first).clone();
        for h in rest {
            sum.add(h)?;
        }
        self.apply_options(&mut sum);

        renderer.begin(CompositionKind::Merge, 1);
        renderer.draw(0, &sum, false);
        if sum.stats_visible() {
            renderer.draw_scratch(&sum);
            if let Some(placement) = renderer.locate_default_stat_box() {
                renderer.draw_stat_box(0, placement, None, &sum);
            }
        }

        // A single summed series has nothing to list.
        if self.options.show_legend {
            renderer.draw_legend(
                0,
                Legend {
                    placement: LEGEND_PLACEMENT,
                    entries: Vec::new(),
                },
            );
        }
        tracing::debug!(series = series.len(), "merge composed");
        Ok(Composition::Drawn)
    }

    fn draw_maybe_normalized<R>(&self, renderer: &mut R, pad: usize, series: &Histogram)
    where
        R: Renderer + ?Sized,
    {
        if self.options.normalize {
            renderer.draw(pad, &series.normalized(), true);
        } else {
            renderer.draw(pad, series, false);
        }
    }
}

#[cfg(test)]
#[path = "tests/compose/compose_tests.rs"]
mod tests;
