use std::io::{self, IsTerminal};
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use time::OffsetDateTime;
use time::format_description::FormatItem;
use time::format_description::well_known::Rfc3339;

use crate::compose::Composition;
use crate::render::CompositionKind;
use crate::search;
use crate::session::Session;

use super::input::Input;
use super::modal;
use super::view::{RenderCtx, View};
use super::views::{CanvasView, DistributionList, DistributionRow};

mod actions;
mod event_loop;
mod log_types;
mod modal_types;
mod parse_utils;
mod render;
mod time_utils;

use self::log_types::{EntryKind, ScrollEntry};
pub(super) use self::modal_types::{Modal, ModalKind, TextInputAction};
pub(super) use self::parse_utils::parse_range;
pub(in crate::tui_shell) use self::time_utils::now_ts;
pub(super) use self::time_utils::fmt_ts_ui;

pub(super) fn run(opts: crate::tui::TuiRunOptions) -> Result<()> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        anyhow::bail!("TUI requires an interactive terminal (TTY)");
    }

    let mut app = App::new(Session::from_config(opts.config));
    if let Some(path) = opts.archive.as_deref() {
        app.open_archive(path);
    }

    let mut stdout = io::stdout();
    enable_raw_mode().context("enable raw mode")?;
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    terminal.clear().ok();

    let res = event_loop::run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    res
}

/// Pane that receives keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum Focus {
    Search,
    Catalog,
    Selection,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Search => Focus::Catalog,
            Focus::Catalog => Focus::Selection,
            Focus::Selection => Focus::Search,
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::Search => Focus::Selection,
            Focus::Catalog => Focus::Search,
            Focus::Selection => Focus::Catalog,
        }
    }
}

pub(super) struct App {
    session: Session,

    focus: Focus,
    search: Input,

    catalog_view: DistributionList,
    selection_view: DistributionList,
    canvas_view: CanvasView,

    log: Vec<ScrollEntry>,
    last_command: Option<String>,
    last_result: Option<ScrollEntry>,

    modal: Option<Modal>,

    quit: bool,
}

impl App {
    pub(super) fn new(session: Session) -> Self {
        let mut app = Self {
            session,
            focus: Focus::Catalog,
            search: Input::default(),
            catalog_view: DistributionList::new("Catalog", "(open an archive with o)"),
            selection_view: DistributionList::new("Selection", "(Enter on a catalog entry adds it)"),
            canvas_view: CanvasView::default(),
            log: Vec::new(),
            last_command: None,
            last_result: None,
            modal: None,
            quit: false,
        };
        app.refresh_views();
        app
    }

    /// Rebuilds the listings and canvas pane from the session.
    pub(super) fn refresh_views(&mut self) {
        let mode = self.session.display_mode();
        let selector = self.session.selector();

        let visible = self.session.visible();
        let total = self.session.catalog().len();
        let rows = visible
            .iter()
            .map(|h| DistributionRow {
                id: h.id,
                label: search::display_label(h, mode).to_string(),
                marked: selector.contains(h.id),
            })
            .collect::<Vec<_>>();
        self.catalog_view
            .set_title(format!("Catalog {}/{}", rows.len(), total));
        self.catalog_view.set_rows(rows);

        let rows = self
            .session
            .selected()
            .iter()
            .map(|h| DistributionRow {
                id: h.id,
                label: search::display_label(h, mode).to_string(),
                marked: false,
            })
            .collect::<Vec<_>>();
        self.selection_view
            .set_title(format!("Selection {}", rows.len()));
        self.selection_view.set_rows(rows);

        self.canvas_view.set_canvas(self.session.current().cloned());
    }

    fn focused_view_mut(&mut self) -> Option<&mut dyn View> {
        match self.focus {
            Focus::Search => None,
            Focus::Catalog => Some(&mut self.catalog_view),
            Focus::Selection => Some(&mut self.selection_view),
        }
    }

    pub(super) fn modal_mut(&mut self) -> Option<&mut Modal> {
        self.modal.as_mut()
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/app_tests.rs"]
mod tests;
