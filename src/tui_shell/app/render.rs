use super::*;

const INPUT_HINT: &str = "Tab focus  Enter add/remove  p/s/m compose  1-5 options  ? keys";

pub(super) fn draw(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    draw_header(frame, app, chunks[0]);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[1]);
    let lists = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(main[0]);

    app.catalog_view.render(
        frame,
        lists[0],
        &RenderCtx {
            focused: app.focus == Focus::Catalog,
        },
    );
    app.selection_view.render(
        frame,
        lists[1],
        &RenderCtx {
            focused: app.focus == Focus::Selection,
        },
    );
    app.canvas_view
        .render(frame, main[1], &RenderCtx { focused: false });

    // Status / last result
    {
        let mut lines = Vec::new();
        if let Some(cmd) = &app.last_command {
            lines.push(Line::from(vec![
                Span::styled("> ", Style::default().fg(Color::Cyan)),
                Span::raw(cmd.as_str()),
            ]));
        }
        if let Some(r) = &app.last_result {
            let style = match r.kind {
                EntryKind::Output => Style::default().fg(Color::White),
                EntryKind::Error => Style::default().fg(Color::Red),
                EntryKind::Command => Style::default().fg(Color::Cyan),
            };
            for (i, l) in r.lines.iter().enumerate() {
                if i == 0 {
                    lines.push(Line::from(vec![
                        Span::styled(
                            format!("{} ", fmt_ts_ui(&r.ts)),
                            Style::default().fg(Color::Gray),
                        ),
                        Span::styled(l.as_str(), style),
                    ]));
                } else {
                    lines.push(Line::from(Span::styled(l.as_str(), style)));
                }
            }
        }
        if lines.is_empty() {
            lines.push(Line::from(""));
        }
        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .block(Block::default().borders(Borders::TOP).title("Last")),
            chunks[2],
        );
    }

    // Search input
    let prompt = "search>";
    let prompt_color = if app.focus == Focus::Search {
        Color::Cyan
    } else {
        Color::Gray
    };
    let buf = &app.search.buf;
    let sep = if buf.is_empty() { "" } else { "  " };
    let input_line = Line::from(vec![
        Span::styled(prompt, Style::default().fg(prompt_color)),
        Span::raw(" "),
        Span::raw(buf.as_str()),
        Span::raw(sep),
        Span::styled(
            INPUT_HINT,
            Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(input_line).block(Block::default().borders(Borders::TOP)),
        chunks[3],
    );

    if let Some(m) = &app.modal {
        dim_frame(frame);
        modal::draw_modal(frame, m);
        return;
    }

    if app.focus == Focus::Search {
        let x = prompt.len() as u16 + 1 + app.search.cursor as u16;
        frame.set_cursor_position((chunks[3].x + x, chunks[3].y + 1));
    }
}

fn draw_header(frame: &mut ratatui::Frame, app: &App, area: ratatui::layout::Rect) {
    let opts = app.session.options();
    let label = app.session.archive_label().unwrap_or("(no archive)");

    let mut spans = vec![
        Span::styled(
            "plotcombine",
            Style::default().fg(Color::Black).bg(Color::White),
        ),
        Span::raw("  "),
        Span::raw(label.to_string()),
        Span::raw("  "),
    ];
    let flags = [
        ("1", "path", opts.show_path),
        ("2", "pub", opts.publication_style),
        ("3", "stats", opts.show_stats),
        ("4", "legend", opts.show_legend),
        ("5", "norm", opts.normalize),
    ];
    for (key, name, on) in flags {
        let style = if on {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Gray).add_modifier(Modifier::DIM)
        };
        spans.push(Span::styled(format!("[{}]{} ", key, name), style));
    }
    spans.push(Span::styled(
        format!("style={}", app.session.style_kind().label()),
        Style::default().fg(Color::Yellow),
    ));
    if let Some(title) = opts.custom_title.as_deref() {
        spans.push(Span::raw(format!("  title={}", title)));
    }

    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, area);
}

fn dim_frame(frame: &mut ratatui::Frame) {
    let area = frame.area();
    let buf = frame.buffer_mut();
    for y in area.y..area.y.saturating_add(area.height) {
        for x in area.x..area.x.saturating_add(area.width) {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.modifier |= Modifier::DIM;
            }
        }
    }
}
