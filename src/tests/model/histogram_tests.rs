    use super::*;

    fn hist(name: &str, counts: &[f64]) -> Histogram {
        Histogram::uniform(name, "", 0.0, counts.len() as f64, counts.to_vec()).unwrap()
    }

    #[test]
    fn rejects_mismatched_counts_and_edges() {
        let err = Histogram::new("h", "", vec![0.0, 1.0, 2.0], vec![1.0]).unwrap_err();
        assert!(matches!(err, Error::InvalidHistogram { .. }));

        let err = Histogram::new("h", "", vec![0.0, 0.0], vec![1.0]).unwrap_err();
        assert!(err.to_string().contains("strictly increasing"));
    }

    #[test]
    fn add_is_binwise_and_accumulates_entries() {
        let mut a = hist("a", &[1.0, 2.0, 3.0]);
        let b = hist("b", &[1.0, 1.0, 1.0]);
        a.add(&b).unwrap();
        assert_eq!(a.counts, vec![2.0, 3.0, 4.0]);
        assert_eq!(a.entries(), 9.0);
    }

    #[test]
    fn add_refuses_different_binning() {
        let mut a = hist("a", &[1.0, 2.0, 3.0]);
        let b = hist("b", &[1.0, 1.0]);
        let err = a.add(&b).unwrap_err();
        assert!(matches!(err, Error::IncompatibleBinning { .. }));
        assert_eq!(a.counts, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn x_range_selects_covering_bins() {
        let mut h = hist("h", &[1.0, 2.0, 3.0, 4.0, 5.0]);
        h.set_axis_range(Axis::X, 1.5, 3.0);
        assert_eq!(h.visible_bins(), 1..3);
        assert_eq!(h.integral(), 5.0);

        h.set_axis_range(Axis::X, 10.0, -4.0);
        assert_eq!(h.visible_bins(), 0..5);
    }

    #[test]
    fn normalized_copy_sums_to_one_and_leaves_source_alone() {
        let h = hist("h", &[1.0, 3.0]);
        let n = h.normalized();
        assert_eq!(n.counts, vec![0.25, 0.75]);
        assert_eq!(h.counts, vec![1.0, 3.0]);

        let empty = hist("e", &[0.0, 0.0]);
        assert_eq!(empty.normalized().counts, vec![0.0, 0.0]);
    }

    #[test]
    fn title_falls_back_to_name() {
        let mut h = hist("pt", &[1.0]);
        assert_eq!(h.title(), "pt");
        h.set_title("Transverse momentum");
        assert_eq!(h.title(), "Transverse momentum");
    }

    #[test]
    fn mean_and_std_dev_use_bin_centers() {
        let h = hist("h", &[1.0, 0.0, 1.0]);
        assert!((h.mean() - 1.5).abs() < 1e-12);
        assert!((h.std_dev() - 1.0).abs() < 1e-12);
    }
