use super::*;

pub(super) fn run_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal
            .draw(|f| super::render::draw(f, app))
            .context("draw")?;
        if app.quit {
            return Ok(());
        }

        if event::poll(Duration::from_millis(50)).context("poll")? {
            match event::read().context("read event")? {
                Event::Key(k) if k.kind == KeyEventKind::Press => handle_key(app, k),
                _ => {}
            }
        }
    }
}

pub(super) fn handle_key(app: &mut App, key: KeyEvent) {
    if app.modal.is_some() {
        modal::handle_modal_key(app, key);
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit = true;
        return;
    }

    match key.code {
        KeyCode::Tab => {
            app.focus = app.focus.next();
            return;
        }
        KeyCode::BackTab => {
            app.focus = app.focus.prev();
            return;
        }
        _ => {}
    }

    if app.focus == Focus::Search {
        handle_search_key(app, key);
    } else {
        handle_list_key(app, key);
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            if app.search.buf.is_empty() {
                app.focus = Focus::Catalog;
            } else {
                app.search.clear();
                app.search_changed();
            }
        }
        KeyCode::Enter | KeyCode::Down => {
            app.search.push_history(&app.search.buf.clone());
            app.focus = Focus::Catalog;
        }
        KeyCode::Up => {
            app.search.history_up();
            app.search_changed();
        }
        KeyCode::Left => app.search.move_left(),
        KeyCode::Right => app.search.move_right(),
        KeyCode::Backspace => {
            app.search.backspace();
            app.search_changed();
        }
        KeyCode::Delete => {
            app.search.delete();
            app.search_changed();
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search.clear();
            app.search_changed();
        }
        KeyCode::Char(c)
            if !key.modifiers.contains(KeyModifiers::CONTROL)
                && !key.modifiers.contains(KeyModifiers::ALT) =>
        {
            app.search.insert_char(c);
            app.search_changed();
        }
        _ => {}
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.quit = true,

        KeyCode::Up => {
            if let Some(v) = app.focused_view_mut() {
                v.move_up();
            }
        }
        KeyCode::Down => {
            if let Some(v) = app.focused_view_mut() {
                v.move_down();
            }
        }

        KeyCode::Enter => match app.focus {
            Focus::Catalog => app.add_focused(),
            Focus::Selection => app.remove_focused(),
            Focus::Search => {}
        },
        KeyCode::Delete | KeyCode::Backspace if app.focus == Focus::Selection => {
            app.remove_focused();
        }

        KeyCode::Char('/') => app.focus = Focus::Search,
        KeyCode::Char('?') => app.show_help(),
        KeyCode::Char('l') => app.show_log(),
        KeyCode::Char('c') => app.clear_selection(),
        KeyCode::Char('p') => app.compose(CompositionKind::Preview),
        KeyCode::Char('s') => app.compose(CompositionKind::Overlay),
        KeyCode::Char('m') => app.compose(CompositionKind::Merge),
        KeyCode::Char('o') => app.prompt_open_archive(),
        KeyCode::Char('t') => app.prompt_custom_title(),
        KeyCode::Char('x') => app.prompt_range(TextInputAction::XRange),
        KeyCode::Char('y') => app.prompt_range(TextInputAction::YRange),
        KeyCode::Char(c @ '1'..='5') => {
            if let Some(n) = c.to_digit(10) {
                app.toggle_option(n);
            }
        }

        _ => {}
    }
}
