use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::render::Canvas;

use super::super::chart::render_canvas;
use super::super::{RenderCtx, View, render_view_chrome};

/// The current composition.
#[derive(Debug, Default)]
pub(in crate::tui_shell) struct CanvasView {
    title: String,
    canvas: Option<Canvas>,
}

impl CanvasView {
    pub(in crate::tui_shell) fn set_canvas(&mut self, canvas: Option<Canvas>) {
        self.title = match &canvas {
            Some(c) => format!("{} [{}, {}]", c.title, c.kind.label(), c.style),
            None => "Result".to_string(),
        };
        self.canvas = canvas;
    }
}

impl View for CanvasView {
    fn title(&self) -> &str {
        &self.title
    }

    fn render(&self, frame: &mut ratatui::Frame, area: ratatui::layout::Rect, ctx: &RenderCtx) {
        let inner = render_view_chrome(frame, self.title(), ctx.focused, area);
        match &self.canvas {
            Some(canvas) => render_canvas(frame, inner, canvas),
            None => frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    "(select distributions, then p preview, s superimpose or m merge)",
                    Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
                ))),
                inner,
            ),
        }
    }
}
