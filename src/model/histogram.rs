use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::color::ColorIndex;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    /// Builds a range, swapping the bounds if they arrive reversed.
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }
}

/// A one-dimensional binned distribution.
///
/// `edges` holds `bins + 1` strictly increasing bin boundaries; `counts` holds
/// one value per bin. Bins are half-open `[lo, hi)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub name: String,

    #[serde(default)]
    pub title: String,

    pub edges: Vec<f64>,
    pub counts: Vec<f64>,

    /// Number of fills. Defaults to the sum of counts when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entries: Option<f64>,

    #[serde(default = "default_stats_visible")]
    stats_visible: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    x_range: Option<AxisRange>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    y_range: Option<AxisRange>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    line_color: Option<ColorIndex>,
}

fn default_stats_visible() -> bool {
    true
}

impl Histogram {
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        edges: Vec<f64>,
        counts: Vec<f64>,
    ) -> Result<Self> {
        let h = Self {
            name: name.into(),
            title: title.into(),
            edges,
            counts,
            entries: None,
            stats_visible: true,
            x_range: None,
            y_range: None,
            line_color: None,
        };
        h.validate()?;
        Ok(h)
    }

    /// Equal-width bins over `[lo, hi)`.
    pub fn uniform(
        name: impl Into<String>,
        title: impl Into<String>,
        lo: f64,
        hi: f64,
        counts: Vec<f64>,
    ) -> Result<Self> {
        let n = counts.len();
        let name = name.into();
        if n == 0 {
            return Err(Error::invalid_histogram(name, "no bins"));
        }
        let width = (hi - lo) / n as f64;
        let edges = (0..=n).map(|i| lo + width * i as f64).collect();
        Self::new(name, title, edges, counts)
    }

    pub fn validate(&self) -> Result<()> {
        if self.edges.len() < 2 {
            return Err(Error::invalid_histogram(
                &self.name,
                "needs at least two bin edges",
            ));
        }
        if self.counts.len() + 1 != self.edges.len() {
            return Err(Error::invalid_histogram(
                &self.name,
                format!(
                    "{} counts for {} edges",
                    self.counts.len(),
                    self.edges.len()
                ),
            ));
        }
        if self.edges.iter().any(|e| !e.is_finite()) {
            return Err(Error::invalid_histogram(&self.name, "non-finite bin edge"));
        }
        if self.edges.windows(2).any(|w| w[0] >= w[1]) {
            return Err(Error::invalid_histogram(
                &self.name,
                "bin edges must be strictly increasing",
            ));
        }
        Ok(())
    }

    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    /// Title shown in legends and headers; falls back to the object name.
    pub fn title(&self) -> &str {
        if self.title.is_empty() {
            &self.name
        } else {
            &self.title
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn stats_visible(&self) -> bool {
        self.stats_visible
    }

    pub fn set_stats(&mut self, visible: bool) {
        self.stats_visible = visible;
    }

    pub fn line_color(&self) -> Option<ColorIndex> {
        self.line_color
    }

    pub fn set_line_color(&mut self, color: ColorIndex) {
        self.line_color = Some(color);
    }

    pub fn x_range(&self) -> Option<AxisRange> {
        self.x_range
    }

    pub fn y_range(&self) -> Option<AxisRange> {
        self.y_range
    }

    pub fn set_axis_range(&mut self, axis: Axis, min: f64, max: f64) {
        let range = AxisRange::new(min, max);
        match axis {
            Axis::X => self.x_range = Some(range),
            Axis::Y => self.y_range = Some(range),
        }
    }

    pub fn entries(&self) -> f64 {
        self.entries
            .unwrap_or_else(|| self.counts.iter().copied().sum())
    }

    /// Bin indices inside the X view range (all bins when unset).
    pub fn visible_bins(&self) -> Range<usize> {
        let n = self.bins();
        let Some(range) = self.x_range else {
            return 0..n;
        };

        let first = self.find_bin(range.min);
        let mut last = self.find_bin(range.max);
        // An upper bound sitting exactly on a low edge excludes that bin.
        if last > first && range.max <= self.edges[last] {
            last -= 1;
        }
        first..last + 1
    }

    fn find_bin(&self, x: f64) -> usize {
        let n = self.bins();
        if x < self.edges[0] {
            return 0;
        }
        // partition_point gives the number of edges <= x.
        let idx = self.edges.partition_point(|e| *e <= x);
        idx.saturating_sub(1).min(n - 1)
    }

    /// Visible bins as `(low edge, high edge, value)`.
    pub fn visible_points(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.visible_bins()
            .map(|i| (self.edges[i], self.edges[i + 1], self.counts[i]))
    }

    /// Sum of bin contents over the visible range.
    pub fn integral(&self) -> f64 {
        self.visible_bins().map(|i| self.counts[i]).sum()
    }

    pub fn mean(&self) -> f64 {
        let (sw, swx, _) = self.moments();
        if sw == 0.0 { 0.0 } else { swx / sw }
    }

    pub fn std_dev(&self) -> f64 {
        let (sw, swx, swx2) = self.moments();
        if sw == 0.0 {
            return 0.0;
        }
        let mean = swx / sw;
        (swx2 / sw - mean * mean).max(0.0).sqrt()
    }

    fn moments(&self) -> (f64, f64, f64) {
        let mut sw = 0.0;
        let mut swx = 0.0;
        let mut swx2 = 0.0;
        for (lo, hi, w) in self.visible_points() {
            let x = 0.5 * (lo + hi);
            sw += w;
            swx += w * x;
            swx2 += w * x * x;
        }
        (sw, swx, swx2)
    }

    /// Bin-wise addition of `other` into `self`.
    ///
    /// Both histograms must share the same binning.
    pub fn add(&mut self, other: &Histogram) -> Result<()> {
        if !self.same_binning(other) {
            return Err(Error::IncompatibleBinning {
                left: self.name.clone(),
                right: other.name.clone(),
            });
        }
        let entries = self.entries() + other.entries();
        for (c, o) in self.counts.iter_mut().zip(&other.counts) {
            *c += *o;
        }
        self.entries = Some(entries);
        Ok(())
    }

    fn same_binning(&self, other: &Histogram) -> bool {
        if self.edges.len() != other.edges.len() {
            return false;
        }
        self.edges.iter().zip(&other.edges).all(|(a, b)| {
            let tol = 1e-9 * a.abs().max(b.abs()).max(1.0);
            (a - b).abs() <= tol
        })
    }

    /// Copy scaled so that the visible contents sum to one.
    ///
    /// A histogram with zero integral is returned unscaled.
    pub fn normalized(&self) -> Histogram {
        let mut out = self.clone();
        let sum = self.integral();
        if sum == 0.0 {
            tracing::warn!(name = %self.name, "cannot normalize histogram with zero integral");
            return out;
        }
        for c in &mut out.counts {
            *c /= sum;
        }
        out
    }

    /// Vertical extent used for drawing: the Y range when set, otherwise
    /// the visible contents padded like an auto-scaled frame.
    pub fn y_extent(&self) -> (f64, f64) {
        if let Some(r) = self.y_range {
            return (r.min, r.max);
        }
        let mut lo = 0.0_f64;
        let mut hi = 0.0_f64;
        for (_, _, v) in self.visible_points() {
            lo = lo.min(v);
            hi = hi.max(v);
        }
        if hi == lo {
            hi = lo + 1.0;
        }
        (lo, hi * 1.05)
    }

    /// Horizontal extent of the visible bins.
    pub fn x_extent(&self) -> (f64, f64) {
        let bins = self.visible_bins();
        (self.edges[bins.start], self.edges[bins.end])
    }
}

#[cfg(test)]
#[path = "../tests/model/histogram_tests.rs"]
mod tests;
