    use super::*;

    #[test]
    fn blank_clears() {
        assert_eq!(parse_range("").unwrap(), None);
        assert_eq!(parse_range("   ").unwrap(), None);
    }

    #[test]
    fn accepts_spaces_or_commas_and_orders_bounds() {
        assert_eq!(parse_range("0 10").unwrap(), Some(AxisRange::new(0.0, 10.0)));
        assert_eq!(parse_range("-2.5,4").unwrap(), Some(AxisRange::new(-2.5, 4.0)));
        let r = parse_range("10 0").unwrap().unwrap();
        assert_eq!((r.min, r.max), (0.0, 10.0));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_range("1").is_err());
        assert!(parse_range("1 2 3").is_err());
        assert!(parse_range("a 2").is_err());
        assert!(parse_range("3 3").is_err());
        assert!(parse_range("inf 2").is_err());
    }
