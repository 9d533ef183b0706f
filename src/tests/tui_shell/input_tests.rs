    use super::*;

    fn typed(s: &str) -> Input {
        let mut input = Input::default();
        for c in s.chars() {
            input.insert_char(c);
        }
        input
    }

    #[test]
    fn edits_at_the_cursor() {
        let mut input = typed("Pt");
        input.move_left();
        input.insert_char('_');
        assert_eq!(input.buf, "P_t");
        input.backspace();
        assert_eq!(input.buf, "Pt");
        input.delete();
        assert_eq!(input.buf, "P");
        assert_eq!(input.cursor, 1);
    }

    #[test]
    fn multibyte_characters_stay_whole() {
        let mut input = typed("η→φ");
        assert_eq!(input.cursor, 3);
        input.move_left();
        input.backspace();
        assert_eq!(input.buf, "ηφ");
        input.move_right();
        input.move_right();
        assert_eq!(input.cursor, 2);
    }

    #[test]
    fn history_skips_blanks_and_repeats() {
        let mut input = Input::default();
        input.push_history("Tracking");
        input.push_history("Tracking");
        input.push_history("  ");
        input.push_history("ring__2");
        assert_eq!(input.history, vec!["Tracking", "ring__2"]);

        input.history_up();
        assert_eq!(input.buf, "ring__2");
        input.history_up();
        assert_eq!(input.buf, "Tracking");
        input.history_up();
        assert_eq!(input.buf, "Tracking");
    }
