    use super::*;
    use crate::model::{AxisRange, CanvasSize, ColorIndex, colors};
    use crate::render::{Canvas, CanvasRecorder, DrawnSeries};
    use crate::style::StyleKind;

    /// Renderer that puts every default summary box at a fixed spot.
    #[derive(Default)]
    struct FixedBoxRenderer {
        first: Option<StatBox>,
        scratch_calls: usize,
        drawn: Vec<(usize, Histogram, bool)>,
        boxes: Vec<(StatBox, Option<ColorIndex>)>,
        legends: Vec<Legend>,
        begun: Vec<(CompositionKind, usize)>,
    }

    impl Renderer for FixedBoxRenderer {
        fn begin(&mut self, kind: CompositionKind, pads: usize) {
            self.begun.push((kind, pads));
        }

        fn draw(&mut self, pad: usize, series: &Histogram, normalized: bool) {
            self.drawn.push((pad, series.clone(), normalized));
        }

        fn draw_scratch(&mut self, _series: &Histogram) {
            self.scratch_calls += 1;
        }

        fn locate_default_stat_box(&self) -> Option<StatBox> {
            if self.scratch_calls == 0 {
                return None;
            }
            self.first
        }

        fn draw_stat_box(
            &mut self,
            _pad: usize,
            placement: StatBox,
            color: Option<ColorIndex>,
            _series: &Histogram,
        ) {
            self.boxes.push((placement, color));
        }

        fn draw_legend(&mut self, _pad: usize, legend: Legend) {
            self.legends.push(legend);
        }
    }

    fn fixed() -> FixedBoxRenderer {
        FixedBoxRenderer {
            first: Some(StatBox::new(0.6, 0.7, 0.9, 0.9)),
            ..FixedBoxRenderer::default()
        }
    }

    fn h(name: &str, counts: &[f64]) -> Histogram {
        Histogram::uniform(name, "", 0.0, counts.len() as f64, counts.to_vec()).unwrap()
    }

    fn close(a: StatBox, b: StatBox) -> bool {
        let eps = 1e-9;
        (a.x_min - b.x_min).abs() < eps
            && (a.y_min - b.y_min).abs() < eps
            && (a.x_max - b.x_max).abs() < eps
            && (a.y_max - b.y_max).abs() < eps
    }

    #[test]
    fn palette_has_25_distinct_colors_in_block_order() {
        let p = palette();
        assert_eq!(p.len(), 25);
        assert_eq!(p[0], colors::BLUE);
        assert_eq!(p[5], colors::BLUE.offset(2));
        assert_eq!(p[10], colors::BLUE.offset(-7));
        assert_eq!(p[24], colors::RED.offset(-9));
        let unique: std::collections::HashSet<_> = p.iter().collect();
        assert_eq!(unique.len(), 25);
    }

    #[test]
    fn series_color_wraps_after_25() {
        assert_eq!(series_color(25), series_color(0));
        assert_eq!(series_color(31), series_color(6));
        let again: Vec<ColorIndex> = (0..30).map(series_color).collect();
        let first: Vec<ColorIndex> = (0..30).map(series_color).collect();
        assert_eq!(again, first);
    }

    #[test]
    fn stack_boxes_matches_worked_example() {
        let boxes = stack_boxes(StatBox::new(0.6, 0.7, 0.9, 0.9), 3);
        let want = [
            StatBox::new(0.6, 0.7, 0.9, 0.9),
            StatBox::new(0.6, 0.5, 0.9, 0.7),
            StatBox::new(0.6, 0.3, 0.9, 0.5),
        ];
        assert_eq!(boxes.len(), 3);
        for (got, want) in boxes.iter().zip(want) {
            assert!(close(*got, want), "{:?} != {:?}", got, want);
        }
        assert!(stack_boxes(StatBox::new(0.0, 0.0, 1.0, 1.0), 0).is_empty());
    }

    #[test]
    fn layout_queries_renderer_after_drawing_first_series() {
        let opts = RenderOptions::default();
        let composer = SeriesComposer::new(&opts);
        let series = vec![h("a", &[1.0]), h("b", &[1.0]), h("c", &[1.0])];

        let mut r = fixed();
        let boxes = composer.layout_stat_boxes(&series, &mut r);
        assert_eq!(r.scratch_calls, 1);
        assert_eq!(boxes.len(), 3);
        assert!(close(boxes[2], StatBox::new(0.6, 0.3, 0.9, 0.5)));
    }

    #[test]
    fn overlay_colors_boxes_and_legend_by_position() {
        let opts = RenderOptions {
            show_stats: true,
            show_legend: true,
            ..RenderOptions::default()
        };
        let a = h("a", &[1.0, 2.0]);
        let b = h("b", &[2.0, 1.0]);
        let mut r = fixed();
        let out = SeriesComposer::new(&opts).overlay(&[&a, &b], &mut r);

        assert_eq!(out, Composition::Drawn);
        assert_eq!(r.begun, vec![(CompositionKind::Overlay, 1)]);
        assert_eq!(r.drawn.len(), 2);
        assert_eq!(r.drawn[0].1.line_color(), Some(series_color(0)));
        assert_eq!(r.drawn[1].1.line_color(), Some(series_color(1)));
        assert_eq!(
            r.boxes.iter().map(|(_, c)| *c).collect::<Vec<_>>(),
            vec![Some(series_color(0)), Some(series_color(1))]
        );
        assert_eq!(r.legends.len(), 1);
        let labels: Vec<&str> = r.legends[0].entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["a", "b"]);
    }

    #[test]
    fn overlay_hides_boxes_and_legend_when_toggled_off() {
        let opts = RenderOptions::default();
        let a = h("a", &[1.0]);
        let mut r = fixed();
        SeriesComposer::new(&opts).overlay(&[&a], &mut r);
        assert!(r.boxes.is_empty());
        assert!(r.legends.is_empty());
        assert!(!r.drawn[0].1.stats_visible());
    }

    #[test]
    fn custom_title_is_shared_by_every_series() {
        let opts = RenderOptions {
            show_legend: true,
            custom_title: Some("Run 283283".to_string()),
            ..RenderOptions::default()
        };
        let a = h("a", &[1.0]);
        let b = h("b", &[1.0]);
        let mut r = fixed();
        SeriesComposer::new(&opts).overlay(&[&a, &b], &mut r);
        let labels: Vec<&str> = r.legends[0].entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Run 283283", "Run 283283"]);
    }

    #[test]
    fn apply_options_clips_axes() {
        let opts = RenderOptions {
            x_range: Some(AxisRange::new(1.0, 3.0)),
            y_range: Some(AxisRange::new(0.0, 10.0)),
            ..RenderOptions::default()
        };
        let mut s = h("s", &[1.0, 2.0, 3.0, 4.0]);
        SeriesComposer::new(&opts).apply_options(&mut s);
        assert_eq!(s.visible_bins(), 1..3);
        assert_eq!(s.y_extent(), (0.0, 10.0));
    }

    #[test]
    fn overlay_normalizes_drawn_copies_only() {
        let opts = RenderOptions {
            normalize: true,
            ..RenderOptions::default()
        };
        let a = h("a", &[1.0, 3.0]);
        let mut r = fixed();
        SeriesComposer::new(&opts).overlay(&[&a], &mut r);
        assert!(r.drawn[0].2);
        assert_eq!(r.drawn[0].1.counts, vec![0.25, 0.75]);
        assert_eq!(a.counts, vec![1.0, 3.0]);
    }

    #[test]
    fn merge_sums_bins_in_order() {
        let opts = RenderOptions::default();
        let a = h("A", &[1.0, 2.0, 3.0]);
        let b = h("B", &[1.0, 1.0, 1.0]);
        let c = h("C", &[0.0, 1.0, 0.0]);
        let mut r = fixed();
        let out = SeriesComposer::new(&opts).merge(&[&a, &b, &c], &mut r).unwrap();
        assert_eq!(out, Composition::Drawn);
        assert_eq!(r.drawn.len(), 1);
        assert_eq!(r.drawn[0].1.counts, vec![2.0, 4.0, 4.0]);
        assert_eq!(a.counts, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn merge_legend_is_drawn_empty() {
        let opts = RenderOptions {
            show_legend: true,
            ..RenderOptions::default()
        };
        let a = h("A", &[1.0]);
        let mut r = fixed();
        SeriesComposer::new(&opts).merge(&[&a], &mut r).unwrap();
        assert_eq!(r.legends.len(), 1);
        assert!(r.legends[0].entries.is_empty());
    }

    #[test]
    fn merge_with_incompatible_binning_draws_nothing() {
        let opts = RenderOptions::default();
        let a = h("A", &[1.0, 2.0]);
        let b = h("B", &[1.0]);
        let mut r = fixed();
        let err = SeriesComposer::new(&opts).merge(&[&a, &b], &mut r).unwrap_err();
        assert!(matches!(err, crate::Error::IncompatibleBinning { .. }));
        assert!(r.begun.is_empty());
    }

    #[test]
    fn empty_selection_is_a_silent_no_op_in_every_mode() {
        let opts = RenderOptions::default();
        let composer = SeriesComposer::new(&opts);
        let mut r = fixed();
        assert_eq!(composer.preview(&[], &mut r), Composition::EmptySelection);
        assert_eq!(composer.overlay(&[], &mut r), Composition::EmptySelection);
        assert_eq!(
            composer.merge(&[], &mut r).unwrap(),
            Composition::EmptySelection
        );
        assert!(r.begun.is_empty());
        assert!(r.drawn.is_empty());
    }

    #[test]
    fn preview_uses_one_pad_per_series_without_colors() {
        let opts = RenderOptions {
            show_legend: true,
            ..RenderOptions::default()
        };
        let a = h("a", &[1.0]);
        let b = h("b", &[2.0]);
        let style = StyleKind::Default.profile();
        let mut rec = CanvasRecorder::new(style, CanvasSize::default());
        SeriesComposer::new(&opts).preview(&[&a, &b], &mut rec);
        let canvas: Canvas = rec.finish().unwrap();

        assert_eq!(canvas.kind, CompositionKind::Preview);
        assert_eq!(canvas.pads.len(), 2);
        for pad in &canvas.pads {
            assert_eq!(pad.series.len(), 1);
            assert_eq!(pad.series[0].color, style.hist_line_color);
            assert!(pad.legend.is_none());
            assert_eq!(pad.stat_boxes.len(), 1);
        }
        let drawn: Vec<&DrawnSeries> = canvas.pads.iter().map(|p| &p.series[0]).collect();
        assert_eq!(drawn[1].histogram.counts, vec![2.0]);
    }

    #[test]
    fn recorder_stacks_boxes_from_profile_geometry() {
        let opts = RenderOptions {
            show_stats: true,
            ..RenderOptions::default()
        };
        let a = h("a", &[1.0]);
        let b = h("b", &[1.0]);
        let style = StyleKind::Publication.profile();
        let mut rec = CanvasRecorder::new(style, CanvasSize::default());
        SeriesComposer::new(&opts).overlay(&[&a, &b], &mut rec);
        let canvas = rec.finish().unwrap();

        let boxes: Vec<StatBox> = canvas.pads[0].stat_boxes.iter().map(|b| b.placement).collect();
        assert_eq!(boxes.len(), 2);
        let height = style.stat_box_height(2);
        assert!((boxes[0].height() - height).abs() < 1e-12);
        assert!((boxes[0].x_max - style.stat_x).abs() < 1e-12);
        assert!((boxes[1].y_max - boxes[0].y_min).abs() < 1e-12);
        assert_eq!(canvas.pads[0].stat_boxes[0].lines.len(), 2);
    }

    #[test]
    fn preview_normalizes_each_pad_and_keeps_sources() {
        let opts = RenderOptions {
            normalize: true,
            ..RenderOptions::default()
        };
        let a = h("a", &[1.0, 3.0]);
        let mut b = h("b", &[2.0, 2.0, 4.0]);
        b.set_stats(false);
        let before = (a.clone(), b.clone());

        let style = StyleKind::Default.profile();
        let mut rec = CanvasRecorder::new(style, CanvasSize::default());
        SeriesComposer::new(&opts).preview(&[&a, &b], &mut rec);
        let canvas = rec.finish().unwrap();

        assert_eq!(canvas.pads.len(), 2);
        for pad in &canvas.pads {
            assert_eq!(pad.series.len(), 1);
            assert!(pad.series[0].normalized);
            assert!((pad.series[0].histogram.integral() - 1.0).abs() < 1e-12);
        }
        assert_eq!(canvas.pads[0].series[0].histogram.counts, vec![0.25, 0.75]);
        assert_eq!(canvas.pads[0].stat_boxes.len(), 1);
        assert_eq!(canvas.pads[1].stat_boxes.len(), 0);
        assert_eq!((a, b), before);
    }

    #[test]
    fn overlay_stacks_boxes_when_first_payload_hides_stats() {
        let opts = RenderOptions {
            show_stats: true,
            ..RenderOptions::default()
        };
        let mut a = h("a", &[1.0, 2.0]);
        a.set_stats(false);
        let b = h("b", &[2.0, 1.0]);
        let style = StyleKind::Default.profile();
        let mut rec = CanvasRecorder::new(style, CanvasSize::default());
        let outcome = SeriesComposer::new(&opts).overlay(&[&a, &b], &mut rec);
        let canvas = rec.finish().unwrap();

        assert_eq!(outcome, Composition::Drawn);
        let boxes = &canvas.pads[0].stat_boxes;
        assert_eq!(boxes.len(), 2);
        assert_eq!(boxes[0].color, Some(series_color(0)));
        assert!((boxes[1].placement.y_max - boxes[0].placement.y_min).abs() < 1e-12);
        assert!(!a.stats_visible());
    }
