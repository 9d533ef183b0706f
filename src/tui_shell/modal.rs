use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::parse_range;

pub(super) fn draw_modal(frame: &mut ratatui::Frame, modal: &super::Modal) {
    let area = frame.area();
    let w = area.width.saturating_sub(6).clamp(20, 90);
    let h = area.height.saturating_sub(6).clamp(8, 22);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    let box_area = ratatui::layout::Rect {
        x,
        y,
        width: w,
        height: h,
    };

    frame.render_widget(ratatui::widgets::Clear, box_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(modal.title.as_str());
    frame.render_widget(block.clone(), box_area);
    let inner = block.inner(box_area);

    let lines: Vec<Line> = modal
        .lines
        .iter()
        .map(|s| {
            if s.starts_with("error: ") {
                Line::styled(s.as_str(), Style::default().fg(Color::Red))
            } else {
                Line::from(s.as_str())
            }
        })
        .collect();
    let scroll = modal.scroll.min(modal.lines.len().saturating_sub(1)) as u16;

    match &modal.kind {
        super::ModalKind::Viewer => {
            frame.render_widget(
                Paragraph::new(lines)
                    .wrap(Wrap { trim: false })
                    .scroll((scroll, 0)),
                inner,
            );
        }

        super::ModalKind::TextInput { prompt, .. } => {
            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(3)])
                .split(inner);

            frame.render_widget(
                Paragraph::new(lines)
                    .wrap(Wrap { trim: false })
                    .scroll((scroll, 0)),
                parts[0],
            );

            frame.render_widget(
                Paragraph::new(modal.input.buf.as_str())
                    .block(Block::default().borders(Borders::ALL).title(prompt.as_str())),
                parts[1],
            );
            let x = modal.input.cursor as u16;
            let y = parts[1].y + 1;
            frame.set_cursor_position((parts[1].x + 1 + x, y));
        }
    }
}

enum ModalAction {
    None,
    Close,
    SubmitTextInput {
        action: super::TextInputAction,
        value: String,
    },
}

fn validate_text_input(action: super::TextInputAction, raw: &str) -> Result<(), String> {
    match action {
        super::TextInputAction::XRange | super::TextInputAction::YRange => {
            parse_range(raw).map(|_| ())
        }
        super::TextInputAction::OpenArchive | super::TextInputAction::CustomTitle => Ok(()),
    }
}

fn append_modal_error(modal: &mut super::Modal, msg: String) {
    modal.lines.retain(|l| !l.starts_with("error: "));
    modal.lines.push(format!("error: {}", msg));
}

fn map_modal_key(modal: &mut super::Modal, key: KeyEvent) -> ModalAction {
    match &modal.kind {
        super::ModalKind::Viewer => match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => ModalAction::Close,
            KeyCode::Up => {
                modal.scroll = modal.scroll.saturating_sub(1);
                ModalAction::None
            }
            KeyCode::Down => {
                modal.scroll = (modal.scroll + 1).min(modal.lines.len().saturating_sub(1));
                ModalAction::None
            }
            _ => ModalAction::None,
        },

        super::ModalKind::TextInput { action, .. } => {
            let action = *action;
            match key.code {
                KeyCode::Esc => ModalAction::Close,
                KeyCode::Enter => {
                    let raw = modal.input.buf.trim().to_string();
                    match validate_text_input(action, &raw) {
                        Ok(()) => ModalAction::SubmitTextInput { action, value: raw },
                        Err(msg) => {
                            append_modal_error(modal, msg);
                            ModalAction::None
                        }
                    }
                }
                KeyCode::Backspace => {
                    modal.input.backspace();
                    ModalAction::None
                }
                KeyCode::Delete => {
                    modal.input.delete();
                    ModalAction::None
                }
                KeyCode::Left => {
                    modal.input.move_left();
                    ModalAction::None
                }
                KeyCode::Right => {
                    modal.input.move_right();
                    ModalAction::None
                }
                KeyCode::Char(c)
                    if !key.modifiers.contains(KeyModifiers::CONTROL)
                        && !key.modifiers.contains(KeyModifiers::ALT) =>
                {
                    modal.input.insert_char(c);
                    ModalAction::None
                }
                _ => ModalAction::None,
            }
        }
    }
}

pub(super) fn handle_modal_key(app: &mut super::App, key: KeyEvent) {
    let action = {
        let Some(m) = app.modal_mut() else {
            return;
        };
        map_modal_key(m, key)
    };

    match action {
        ModalAction::None => {}
        ModalAction::Close => app.close_modal(),
        ModalAction::SubmitTextInput { action, value } => {
            app.close_modal();
            app.submit_text_input(action, value);
        }
    }
}
