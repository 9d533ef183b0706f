//! Rendering presets.
//!
//! A profile only supplies defaults: frame margins, summary-box geometry and
//! content, fonts, ticks. Per-series options from a composition are applied
//! on top and no profile ever touches series data.

use crate::model::{ColorIndex, Histogram, colors};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StyleKind {
    #[default]
    Default,
    Publication,
}

impl StyleKind {
    pub fn from_publication(publication: bool) -> Self {
        if publication {
            StyleKind::Publication
        } else {
            StyleKind::Default
        }
    }

    pub fn profile(self) -> &'static StyleProfile {
        match self {
            StyleKind::Default => &DEFAULT,
            StyleKind::Publication => &PUBLICATION,
        }
    }

    pub fn label(self) -> &'static str {
        self.profile().name
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StyleProfile {
    pub name: &'static str,
    pub description: &'static str,

    pub canvas_border_mode: i32,
    pub canvas_color: ColorIndex,
    pub canvas_def_x: i32,
    pub canvas_def_y: i32,

    pub pad_border_mode: i32,
    pub pad_color: ColorIndex,
    pub pad_grid_x: bool,
    pub pad_grid_y: bool,
    pub grid_color: ColorIndex,
    pub grid_style: i32,
    pub grid_width: i32,

    pub frame_border_mode: i32,
    pub frame_border_size: i32,
    pub frame_fill_color: ColorIndex,
    pub frame_fill_style: i32,
    pub frame_line_color: ColorIndex,
    pub frame_line_style: i32,
    pub frame_line_width: i32,

    pub hist_line_color: ColorIndex,
    pub hist_line_style: i32,
    pub hist_line_width: i32,
    pub error_x: f64,
    pub marker_style: i32,
    pub marker_size: f64,

    pub opt_fit: i32,
    pub fit_format: &'static str,
    pub func_color: ColorIndex,
    pub func_style: i32,
    pub func_width: i32,

    pub opt_date: i32,
    pub opt_file: i32,

    /// Summary-box fields: n name, e entries, m mean, r std dev, i integral.
    pub opt_stat: &'static str,
    pub stat_color: ColorIndex,
    pub stat_font: i32,
    pub stat_font_size: f64,
    pub stat_text_color: ColorIndex,
    pub stat_format: &'static str,
    pub stat_border_size: i32,
    pub stat_h: f64,
    pub stat_w: f64,
    pub stat_x: f64,
    pub stat_y: f64,

    pub pad_top_margin: f64,
    pub pad_bottom_margin: f64,
    pub pad_left_margin: f64,
    pub pad_right_margin: f64,

    pub opt_title: bool,
    pub title_font: i32,
    pub title_color: ColorIndex,
    pub title_text_color: ColorIndex,
    pub title_fill_color: ColorIndex,
    pub title_font_size: f64,
    pub axis_title_color: ColorIndex,
    pub axis_title_font: i32,
    pub axis_title_size: f64,
    pub title_x_offset: f64,
    pub title_y_offset: f64,

    pub label_color: ColorIndex,
    pub label_font: i32,
    pub label_offset: f64,
    pub label_size: f64,
    pub axis_color: ColorIndex,
    pub strip_decimals: bool,
    pub tick_length: f64,
    pub ndivisions: i32,
    pub pad_tick_x: bool,
    pub pad_tick_y: bool,

    pub opt_log_x: bool,
    pub opt_log_y: bool,
    pub opt_log_z: bool,
}

/// Summary-box height assumes this many lines; boxes with fewer or more
/// fields scale from it.
const REFERENCE_STAT_LINES: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatField {
    Name,
    Entries,
    Mean,
    StdDev,
    Integral,
}

impl StyleProfile {
    pub fn stat_fields(&self) -> Vec<StatField> {
        self.opt_stat
            .chars()
            .filter_map(|c| match c {
                'n' => Some(StatField::Name),
                'e' => Some(StatField::Entries),
                'm' => Some(StatField::Mean),
                'r' => Some(StatField::StdDev),
                'i' => Some(StatField::Integral),
                _ => None,
            })
            .collect()
    }

    /// Text lines of a histogram's summary box under this profile.
    pub fn stat_lines(&self, h: &Histogram) -> Vec<String> {
        let digits = significant_digits(self.stat_format);
        self.stat_fields()
            .into_iter()
            .map(|field| match field {
                StatField::Name => h.name.clone(),
                StatField::Entries => format!("Entries  {}", format_sig(h.entries(), digits)),
                StatField::Mean => format!("Mean  {}", format_sig(h.mean(), digits)),
                StatField::StdDev => format!("Std Dev  {}", format_sig(h.std_dev(), digits)),
                StatField::Integral => format!("Integral  {}", format_sig(h.integral(), digits)),
            })
            .collect()
    }

    /// Height of a summary box holding `lines` lines.
    pub fn stat_box_height(&self, lines: usize) -> f64 {
        self.stat_h * lines.max(1) as f64 / REFERENCE_STAT_LINES as f64
    }
}

fn significant_digits(format: &str) -> usize {
    format
        .split_once('.')
        .and_then(|(_, rest)| rest.trim_end_matches(['g', 'f', 'e']).parse().ok())
        .unwrap_or(4)
}

/// Formats `v` with `digits` significant digits, `%g` style.
pub fn format_sig(v: f64, digits: usize) -> String {
    if v == 0.0 || !v.is_finite() {
        return format!("{}", v);
    }
    let digits = digits.max(1);
    let exp = v.abs().log10().floor() as i32;
    if exp < -4 || exp >= digits as i32 {
        let s = format!("{:.*e}", digits - 1, v);
        return trim_mantissa(&s);
    }
    let decimals = (digits as i32 - 1 - exp).max(0) as usize;
    let s = format!("{:.*}", decimals, v);
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

fn trim_mantissa(s: &str) -> String {
    match s.split_once('e') {
        Some((m, e)) if m.contains('.') => {
            format!("{}e{}", m.trim_end_matches('0').trim_end_matches('.'), e)
        }
        _ => s.to_string(),
    }
}

pub const DEFAULT: StyleProfile = StyleProfile {
    name: "Modern",
    description: "",

    canvas_border_mode: 0,
    canvas_color: colors::WHITE,
    canvas_def_x: 10,
    canvas_def_y: 10,

    pad_border_mode: 0,
    pad_color: colors::WHITE,
    pad_grid_x: false,
    pad_grid_y: false,
    grid_color: ColorIndex(0),
    grid_style: 3,
    grid_width: 1,

    frame_border_mode: 0,
    frame_border_size: 1,
    frame_fill_color: ColorIndex(0),
    frame_fill_style: 1001,
    frame_line_color: colors::BLACK,
    frame_line_style: 1,
    frame_line_width: 1,

    hist_line_color: ColorIndex(602),
    hist_line_style: 1,
    hist_line_width: 1,
    error_x: 0.5,
    marker_style: 1,
    marker_size: 1.0,

    opt_fit: 0,
    fit_format: "5.4g",
    func_color: ColorIndex(2),
    func_style: 1,
    func_width: 2,

    opt_date: 0,
    opt_file: 0,

    opt_stat: "nemr",
    stat_color: colors::WHITE,
    stat_font: 42,
    stat_font_size: 0.0,
    stat_text_color: colors::BLACK,
    stat_format: "6.4g",
    stat_border_size: 1,
    stat_h: 0.16,
    stat_w: 0.20,
    stat_x: 0.98,
    stat_y: 0.935,

    pad_top_margin: 0.1,
    pad_bottom_margin: 0.1,
    pad_left_margin: 0.1,
    pad_right_margin: 0.1,

    opt_title: true,
    title_font: 42,
    title_color: colors::BLACK,
    title_text_color: colors::BLACK,
    title_fill_color: ColorIndex(0),
    title_font_size: 0.05,
    axis_title_color: colors::BLACK,
    axis_title_font: 42,
    axis_title_size: 0.035,
    title_x_offset: 1.0,
    title_y_offset: 1.0,

    label_color: colors::BLACK,
    label_font: 42,
    label_offset: 0.005,
    label_size: 0.035,
    axis_color: colors::BLACK,
    strip_decimals: true,
    tick_length: 0.03,
    ndivisions: 510,
    pad_tick_x: false,
    pad_tick_y: false,

    opt_log_x: false,
    opt_log_y: false,
    opt_log_z: false,
};

pub const PUBLICATION: StyleProfile = StyleProfile {
    name: "tdrStyle",
    description: "Style for P-TDR",

    canvas_border_mode: 0,
    canvas_color: colors::WHITE,
    canvas_def_x: 0,
    canvas_def_y: 0,

    pad_border_mode: 0,
    pad_color: colors::WHITE,
    pad_grid_x: false,
    pad_grid_y: false,
    grid_color: ColorIndex(0),
    grid_style: 3,
    grid_width: 1,

    frame_border_mode: 0,
    frame_border_size: 1,
    frame_fill_color: ColorIndex(0),
    frame_fill_style: 0,
    frame_line_color: colors::BLACK,
    frame_line_style: 1,
    frame_line_width: 1,

    hist_line_color: colors::BLACK,
    hist_line_style: 0,
    hist_line_width: 1,
    error_x: 0.0,
    marker_style: 21,
    marker_size: 0.5,

    opt_fit: 1,
    fit_format: "5.4g",
    func_color: ColorIndex(2),
    func_style: 1,
    func_width: 1,

    opt_date: 0,
    opt_file: 0,

    opt_stat: "mr",
    stat_color: colors::WHITE,
    stat_font: 42,
    stat_font_size: 0.025,
    stat_text_color: colors::BLACK,
    stat_format: "6.4g",
    stat_border_size: 1,
    stat_h: 0.1,
    stat_w: 0.15,
    stat_x: 0.95,
    stat_y: 0.95,

    pad_top_margin: 0.05,
    pad_bottom_margin: 0.13,
    pad_left_margin: 0.13,
    pad_right_margin: 0.05,

    opt_title: true,
    title_font: 42,
    title_color: colors::BLACK,
    title_text_color: colors::BLACK,
    title_fill_color: colors::TITLE_FILL,
    title_font_size: 0.045,
    axis_title_color: colors::BLACK,
    axis_title_font: 42,
    axis_title_size: 0.06,
    title_x_offset: 0.9,
    title_y_offset: 1.05,

    label_color: colors::BLACK,
    label_font: 42,
    label_offset: 0.007,
    label_size: 0.05,
    axis_color: colors::BLACK,
    strip_decimals: true,
    tick_length: 0.03,
    ndivisions: 510,
    pad_tick_x: true,
    pad_tick_y: true,

    opt_log_x: false,
    opt_log_y: false,
    opt_log_z: false,
};

#[cfg(test)]
#[path = "tests/style_tests.rs"]
mod tests;
