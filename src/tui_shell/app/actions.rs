use super::*;

/// Entries kept in the session log; older ones are dropped first.
pub(super) const LOG_LIMIT: usize = 200;

impl App {
    fn record(&mut self, entry: ScrollEntry) {
        self.log.push(entry);
        if self.log.len() > LOG_LIMIT {
            let excess = self.log.len() - LOG_LIMIT;
            self.log.drain(..excess);
        }
    }

    fn push_entry(&mut self, kind: EntryKind, lines: Vec<String>) {
        let entry = ScrollEntry {
            ts: now_ts(),
            kind,
            lines,
        };
        self.record(entry.clone());
        if entry.kind != EntryKind::Command {
            self.last_result = Some(entry);
        }
    }

    pub(super) fn push_command(&mut self, line: String) {
        self.last_command = Some(line.clone());
        self.record(ScrollEntry {
            ts: now_ts(),
            kind: EntryKind::Command,
            lines: vec![line],
        });
    }

    /// Opens the session log, newest entry first.
    pub(super) fn show_log(&mut self) {
        let mut lines = Vec::new();
        for e in self.log.iter().rev() {
            let marker = match e.kind {
                EntryKind::Command => ">",
                EntryKind::Output => " ",
                EntryKind::Error => "!",
            };
            for (i, l) in e.lines.iter().enumerate() {
                if i == 0 {
                    lines.push(format!("{} {} {}", fmt_ts_ui(&e.ts), marker, l));
                } else {
                    lines.push(format!("           {}", l));
                }
            }
        }
        if lines.is_empty() {
            lines.push("(nothing yet)".to_string());
        }
        self.open_modal("Log", lines);
    }

    pub(in crate::tui_shell) fn push_output(&mut self, lines: Vec<String>) {
        self.push_entry(EntryKind::Output, lines);
    }

    pub(in crate::tui_shell) fn push_error(&mut self, msg: String) {
        self.push_entry(EntryKind::Error, vec![msg]);
    }

    pub(super) fn open_modal(&mut self, title: impl Into<String>, lines: Vec<String>) {
        self.modal = Some(Modal {
            title: title.into(),
            lines,
            scroll: 0,
            kind: ModalKind::Viewer,
            input: Input::default(),
        });
    }

    pub(in crate::tui_shell) fn open_text_input_modal(
        &mut self,
        title: impl Into<String>,
        prompt: impl Into<String>,
        action: TextInputAction,
        initial: Option<String>,
        mut lines: Vec<String>,
    ) {
        lines.push("".to_string());
        lines.push("Enter to apply; Esc to cancel.".to_string());

        let mut input = Input::default();
        if let Some(s) = initial {
            input.set(s);
        }

        self.modal = Some(Modal {
            title: title.into(),
            lines,
            scroll: 0,
            kind: ModalKind::TextInput {
                prompt: prompt.into(),
                action,
            },
            input,
        });
    }

    pub(in crate::tui_shell) fn close_modal(&mut self) {
        self.modal = None;
    }

    pub(super) fn open_archive(&mut self, path: &Path) {
        self.push_command(format!("open {}", path.display()));
        let result = self.session.open_archive(path).map(Some);
        self.finish_open(result);
    }

    /// Opens the archive typed at the prompt; blank input cancels.
    fn open_from_prompt(&mut self, input: &str) {
        if !input.trim().is_empty() {
            self.push_command(format!("open {}", input.trim()));
        }
        let result = self.session.open_from_prompt(input);
        self.finish_open(result);
    }

    fn finish_open(&mut self, result: crate::Result<Option<usize>>) {
        match result {
            Ok(None) => {}
            Ok(Some(found)) => {
                self.search.clear();
                self.session.set_query("");
                self.refresh_views();
                self.push_output(vec![format!(
                    "{}: {} distributions",
                    self.session.archive_label().unwrap_or_default(),
                    found
                )]);
            }
            Err(err) => self.push_error(format!("open: {:#}", err)),
        }
    }

    pub(super) fn prompt_open_archive(&mut self) {
        self.open_text_input_modal(
            "Open archive",
            "path",
            TextInputAction::OpenArchive,
            None,
            vec![
                "Path to a JSON archive.".to_string(),
                "The catalog and selection are replaced.".to_string(),
            ],
        );
    }

    pub(super) fn prompt_custom_title(&mut self) {
        let current = self.session.options().custom_title.clone();
        self.open_text_input_modal(
            "Custom title",
            "title",
            TextInputAction::CustomTitle,
            current,
            vec!["Title given to every composed series. Empty clears.".to_string()],
        );
    }

    pub(super) fn prompt_range(&mut self, action: TextInputAction) {
        let (title, current) = match action {
            TextInputAction::XRange => ("X range", self.session.options().x_range),
            _ => ("Y range", self.session.options().y_range),
        };
        self.open_text_input_modal(
            title,
            "min max",
            action,
            current.map(|r| format!("{} {}", r.min, r.max)),
            vec!["Two numbers, MIN MAX. Empty clears.".to_string()],
        );
    }

    pub(in crate::tui_shell) fn submit_text_input(&mut self, action: TextInputAction, value: String) {
        match action {
            TextInputAction::OpenArchive => self.open_from_prompt(&value),
            TextInputAction::CustomTitle => {
                let title = Some(value).filter(|v| !v.trim().is_empty());
                self.push_output(vec![match &title {
                    Some(t) => format!("title: {}", t),
                    None => "title cleared".to_string(),
                }]);
                self.session.set_custom_title(title);
            }
            TextInputAction::XRange | TextInputAction::YRange => {
                let range = match parse_range(&value) {
                    Ok(r) => r,
                    Err(msg) => {
                        self.push_error(msg);
                        return;
                    }
                };
                let axis = if action == TextInputAction::XRange {
                    self.session.set_x_range(range);
                    "x"
                } else {
                    self.session.set_y_range(range);
                    "y"
                };
                self.push_output(vec![match range {
                    Some(r) => format!("{} range: [{}, {}]", axis, r.min, r.max),
                    None => format!("{} range cleared", axis),
                }]);
            }
        }
    }

    pub(super) fn add_focused(&mut self) {
        let Some(id) = self.catalog_view.selected_id() else {
            return;
        };
        match self.session.select(id) {
            Ok(true) => {
                let label = self.catalog_view.selected_label().unwrap_or_default().to_string();
                self.refresh_views();
                self.push_output(vec![format!("added {}", label)]);
            }
            Ok(false) => self.push_output(vec!["already selected".to_string()]),
            Err(err) => self.push_error(format!("add: {:#}", err)),
        }
    }

    pub(super) fn remove_focused(&mut self) {
        let Some(id) = self.selection_view.selected_id() else {
            return;
        };
        let label = self
            .selection_view
            .selected_label()
            .unwrap_or_default()
            .to_string();
        if self.session.deselect(id) {
            self.refresh_views();
            self.push_output(vec![format!("removed {}", label)]);
        }
    }

    pub(super) fn clear_selection(&mut self) {
        self.session.clear_selection();
        self.refresh_views();
        self.push_output(vec!["selection cleared".to_string()]);
    }

    pub(super) fn compose(&mut self, kind: CompositionKind) {
        self.push_command(kind.label().to_string());
        let count = self.session.selector().len();
        match self.session.compose(kind) {
            Ok(Composition::Drawn) => {
                self.refresh_views();
                self.push_output(vec![format!(
                    "{}: {} series, {} style",
                    kind.label(),
                    count,
                    self.session.style_kind().label()
                )]);
            }
            Ok(Composition::EmptySelection) => {
                self.push_output(vec!["nothing selected".to_string()]);
            }
            Err(err) => self.push_error(format!("{}: {:#}", kind.label(), err)),
        }
    }

    /// Flips option `n` (1 path, 2 publication style, 3 stats, 4 legend,
    /// 5 normalize).
    pub(super) fn toggle_option(&mut self, n: u32) {
        let (name, on) = match n {
            1 => ("show path", self.session.toggle_show_path()),
            2 => ("publication style", self.session.toggle_publication_style()),
            3 => ("stats", self.session.toggle_stats()),
            4 => ("legend", self.session.toggle_legend()),
            5 => ("normalize", self.session.toggle_normalize()),
            _ => return,
        };
        if n == 1 {
            self.refresh_views();
        }
        self.push_output(vec![format!("{}: {}", name, if on { "on" } else { "off" })]);
    }

    pub(super) fn search_changed(&mut self) {
        self.session.set_query(self.search.buf.clone());
        self.refresh_views();
    }

    pub(super) fn show_help(&mut self) {
        self.open_modal(
            "Keys",
            [
                "Tab / Shift+Tab   cycle search, catalog, selection",
                "/                 search (matches full paths)",
                "Up / Down         move",
                "Enter             add (catalog) or remove (selection)",
                "Del               remove from selection",
                "c                 clear selection",
                "p                 preview, one pad per series",
                "s                 superimpose on one pad",
                "m                 merge into one sum",
                "1..5              path, publication, stats, legend, normalize",
                "t / x / y         title, x range, y range",
                "o                 open archive",
                "l                 session log",
                "q                 quit",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        );
    }
}
