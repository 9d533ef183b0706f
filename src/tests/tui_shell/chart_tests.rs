    use super::*;
    use crate::model::Axis as HistAxis;
    use crate::render::DrawnSeries;

    fn h(counts: &[f64]) -> Histogram {
        Histogram::uniform("h", "", 0.0, counts.len() as f64, counts.to_vec()).unwrap()
    }

    #[test]
    fn step_points_trace_each_visible_bin() {
        let mut s = h(&[1.0, 3.0, 2.0]);
        assert_eq!(
            step_points(&s),
            vec![(0.0, 1.0), (1.0, 1.0), (1.0, 3.0), (2.0, 3.0), (2.0, 2.0), (3.0, 2.0)]
        );

        s.set_axis_range(HistAxis::X, 1.0, 2.0);
        assert_eq!(step_points(&s), vec![(1.0, 3.0), (2.0, 3.0)]);
    }

    #[test]
    fn pad_bounds_cover_every_series() {
        let mut wide = h(&[1.0, 1.0, 1.0, 1.0]);
        wide.set_axis_range(HistAxis::Y, -1.0, 2.0);
        let pad = Pad {
            series: vec![
                DrawnSeries {
                    histogram: h(&[4.0]),
                    color: ColorIndex(600),
                    normalized: false,
                },
                DrawnSeries {
                    histogram: wide,
                    color: ColorIndex(416),
                    normalized: false,
                },
            ],
            ..Pad::default()
        };
        let (x, y) = pad_bounds(&pad);
        assert_eq!(x, [0.0, 4.0]);
        assert_eq!(y[0], -1.0);
        assert!((y[1] - 4.2).abs() < 1e-12);
    }

    #[test]
    fn empty_pad_gets_unit_bounds() {
        assert_eq!(pad_bounds(&Pad::default()), ([0.0, 1.0], [0.0, 1.0]));
    }

    #[test]
    fn ndc_rect_maps_top_right_corner() {
        let area = Rect::new(10, 5, 100, 40);
        let r = ndc_rect(area, StatBox::new(0.6, 0.7, 0.9, 0.9), 3);
        assert_eq!(r, Rect::new(70, 9, 30, 8));

        let tiny = ndc_rect(area, StatBox::new(0.6, 0.89, 0.9, 0.9), 4);
        assert_eq!(tiny.height, 4);

        let clipped = ndc_rect(area, StatBox::new(0.95, 0.0, 1.0, 0.05), 6);
        assert!(clipped.bottom() <= area.bottom());
        assert!(clipped.right() <= area.right());
    }
