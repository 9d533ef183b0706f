    use super::*;
    use crate::archive::demo_document;
    use crate::model::AppConfig;
    use ratatui::backend::TestBackend;

    fn press(app: &mut App, code: KeyCode) {
        event_loop::handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn demo_app() -> (tempfile::TempDir, App) {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("demo.json");
        let doc = demo_document().unwrap();
        std::fs::write(&path, serde_json::to_vec(&doc).unwrap()).unwrap();

        let mut app = App::new(Session::from_config(AppConfig::default()));
        app.open_archive(&path);
        (tmp, app)
    }

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        terminal.draw(|f| render::draw(f, app)).unwrap();
        let buf = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn opening_fills_the_catalog_pane() {
        let (_tmp, app) = demo_app();
        assert!(app.session.catalog().len() > 0);
        assert_eq!(app.catalog_view.rows.len(), app.session.catalog().len());

        let text = screen(&app);
        assert!(text.contains("plotcombine"));
        assert!(text.contains("DQMData"));
        assert!(text.contains("Catalog"));
        assert!(text.contains("Selection 0"));
    }

    #[test]
    fn search_narrows_rows_and_enter_adds() {
        let (_tmp, mut app) = demo_app();
        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.focus, Focus::Search);
        type_str(&mut app, "ring__2");
        assert_eq!(app.catalog_view.rows.len(), 2);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.focus, Focus::Catalog);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.selector().len(), 2);
        assert!(app.catalog_view.rows.iter().all(|r| r.marked));
    }

    #[test]
    fn compose_keys_fill_the_canvas_pane() {
        let (_tmp, mut app) = demo_app();
        press(&mut app, KeyCode::Char('/'));
        type_str(&mut app, "NumberOfClusters");
        press(&mut app, KeyCode::Enter);
        for _ in 0..3 {
            press(&mut app, KeyCode::Enter);
            press(&mut app, KeyCode::Down);
        }
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Char('s'));

        let canvas = app.session.current().unwrap();
        assert_eq!(canvas.kind, CompositionKind::Overlay);
        assert_eq!(canvas.pads[0].series.len(), 3);
        assert_eq!(canvas.pads[0].stat_boxes.len(), 3);

        let text = screen(&app);
        assert!(text.contains("Number of clusters"));
        assert!(text.contains("Mean"));
    }

    #[test]
    fn empty_selection_reports_without_drawing() {
        let (_tmp, mut app) = demo_app();
        press(&mut app, KeyCode::Char('m'));
        assert!(app.session.current().is_none());
        let last = app.last_result.as_ref().unwrap();
        assert_eq!(last.lines, vec!["nothing selected".to_string()]);
    }

    #[test]
    fn failed_open_is_reported_and_keeps_catalog() {
        let (_tmp, mut app) = demo_app();
        let before = app.session.catalog().len();
        press(&mut app, KeyCode::Char('o'));
        assert!(app.modal.is_some());
        type_str(&mut app, "/nonexistent/run.json");
        press(&mut app, KeyCode::Enter);

        assert!(app.modal.is_none());
        assert_eq!(app.session.catalog().len(), before);
        let last = app.last_result.as_ref().unwrap();
        assert_eq!(last.kind, EntryKind::Error);
    }

    #[test]
    fn cancelled_prompt_changes_nothing() {
        let (_tmp, mut app) = demo_app();
        let before = app.session.catalog().len();
        press(&mut app, KeyCode::Char('o'));
        press(&mut app, KeyCode::Esc);
        assert!(app.modal.is_none());
        assert_eq!(app.session.catalog().len(), before);
    }

    #[test]
    fn bad_range_keeps_the_prompt_open() {
        let (_tmp, mut app) = demo_app();
        press(&mut app, KeyCode::Char('x'));
        type_str(&mut app, "1");
        press(&mut app, KeyCode::Enter);
        let modal = app.modal.as_ref().unwrap();
        assert!(modal.lines.iter().any(|l| l.starts_with("error: ")));

        type_str(&mut app, " 5");
        press(&mut app, KeyCode::Enter);
        assert!(app.modal.is_none());
        assert_eq!(
            app.session.options().x_range,
            Some(crate::model::AxisRange::new(1.0, 5.0))
        );
    }

    #[test]
    fn q_quits_outside_the_search_box_only() {
        let (_tmp, mut app) = demo_app();
        press(&mut app, KeyCode::Char('/'));
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.quit);
        assert_eq!(app.search.buf, "q");

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.quit);
    }

    #[test]
    fn log_keeps_only_the_newest_entries() {
        let (_tmp, mut app) = demo_app();
        for i in 0..actions::LOG_LIMIT + 25 {
            app.push_output(vec![format!("line {}", i)]);
        }
        assert_eq!(app.log.len(), actions::LOG_LIMIT);
        let last = app.log.last().unwrap();
        assert_eq!(last.lines, vec![format!("line {}", actions::LOG_LIMIT + 24)]);
    }

    #[test]
    fn l_shows_the_log_newest_first() {
        let (_tmp, mut app) = demo_app();
        press(&mut app, KeyCode::Char('l'));
        let modal = app.modal.as_ref().unwrap();
        assert_eq!(modal.title, "Log");
        assert!(modal.lines[0].contains("distributions"));
        assert!(modal.lines[1].contains("> open "));

        press(&mut app, KeyCode::Esc);
        assert!(app.modal.is_none());
        assert!(!app.quit);
    }

    #[test]
    fn prompt_reopen_replaces_selection_and_blank_cancels() {
        let (tmp, mut app) = demo_app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.selector().len(), 1);
        let logged = app.log.len();

        press(&mut app, KeyCode::Char('o'));
        type_str(&mut app, "   ");
        press(&mut app, KeyCode::Enter);
        assert!(app.modal.is_none());
        assert_eq!(app.log.len(), logged);
        assert_eq!(app.session.selector().len(), 1);

        let path = tmp.path().join("demo.json");
        press(&mut app, KeyCode::Char('o'));
        type_str(&mut app, &format!(" {} ", path.display()));
        press(&mut app, KeyCode::Enter);
        assert!(app.session.selector().is_empty());
        assert_eq!(app.last_result.as_ref().unwrap().kind, EntryKind::Output);
        assert_eq!(
            app.last_command.as_deref(),
            Some(format!("open {}", path.display()).as_str())
        );
    }
