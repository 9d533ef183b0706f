use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders};

#[derive(Clone, Copy, Debug)]
pub(super) struct RenderCtx {
    pub(super) focused: bool,
}

pub(super) trait View {
    fn title(&self) -> &str;

    fn move_up(&mut self) {}
    fn move_down(&mut self) {}

    fn render(&self, frame: &mut ratatui::Frame, area: Rect, ctx: &RenderCtx);
}

pub(super) fn render_view_chrome(
    frame: &mut ratatui::Frame,
    title: &str,
    focused: bool,
    area: Rect,
) -> Rect {
    let (title_color, border_color) = if focused {
        (Color::Yellow, Color::Yellow)
    } else {
        (Color::Gray, Color::DarkGray)
    };
    let header = Line::from(vec![Span::styled(
        title.to_string(),
        Style::default().fg(title_color),
    )]);
    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(header);
    let inner = outer.inner(area);
    frame.render_widget(outer, area);
    inner
}
