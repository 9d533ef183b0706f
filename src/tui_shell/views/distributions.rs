use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};

use crate::model::DistributionId;

use super::super::{RenderCtx, View, render_view_chrome};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) struct DistributionRow {
    pub(in crate::tui_shell) id: DistributionId,
    pub(in crate::tui_shell) label: String,
    /// Already in the selection.
    pub(in crate::tui_shell) marked: bool,
}

/// Scrollable list of distributions, used for both the catalog and the
/// selection panes.
#[derive(Debug)]
pub(in crate::tui_shell) struct DistributionList {
    title: String,
    empty_hint: &'static str,
    pub(in crate::tui_shell) rows: Vec<DistributionRow>,
    pub(in crate::tui_shell) selected_row: usize,
}

impl DistributionList {
    pub(in crate::tui_shell) fn new(title: &str, empty_hint: &'static str) -> Self {
        Self {
            title: title.to_string(),
            empty_hint,
            rows: Vec::new(),
            selected_row: 0,
        }
    }

    pub(in crate::tui_shell) fn set_title(&mut self, title: String) {
        self.title = title;
    }

    /// Replaces the rows, keeping the cursor on the same id when it is still
    /// listed.
    pub(in crate::tui_shell) fn set_rows(&mut self, rows: Vec<DistributionRow>) {
        let keep = self.selected_id();
        self.rows = rows;
        self.selected_row = keep
            .and_then(|id| self.rows.iter().position(|r| r.id == id))
            .unwrap_or_else(|| self.selected_row.min(self.rows.len().saturating_sub(1)));
    }

    pub(in crate::tui_shell) fn selected_id(&self) -> Option<DistributionId> {
        self.rows.get(self.selected_row).map(|r| r.id)
    }

    pub(in crate::tui_shell) fn selected_label(&self) -> Option<&str> {
        self.rows.get(self.selected_row).map(|r| r.label.as_str())
    }
}

impl View for DistributionList {
    fn title(&self) -> &str {
        &self.title
    }

    fn move_up(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    fn move_down(&mut self) {
        let max = self.rows.len().saturating_sub(1);
        self.selected_row = (self.selected_row + 1).min(max);
    }

    fn render(&self, frame: &mut ratatui::Frame, area: ratatui::layout::Rect, ctx: &RenderCtx) {
        let inner = render_view_chrome(frame, self.title(), ctx.focused, area);

        if self.rows.is_empty() {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    self.empty_hint,
                    Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
                ))),
                inner,
            );
            return;
        }

        let items: Vec<ListItem> = self
            .rows
            .iter()
            .map(|r| {
                let marker = if r.marked { "* " } else { "  " };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(Color::Green)),
                    Span::styled(
                        format!("{:>4} ", r.id),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw(r.label.clone()),
                ]))
            })
            .collect();

        let mut state = ListState::default();
        state.select(Some(self.selected_row.min(self.rows.len() - 1)));

        let highlight = if ctx.focused {
            Style::default().bg(Color::DarkGray)
        } else {
            Style::default()
        };
        let list = List::new(items).highlight_style(highlight);
        frame.render_stateful_widget(list, inner, &mut state);
    }
}
