use flowlayout::layout::{
    BoxElement, ChildSize, FlowChild, FlowStyle, LayoutNode, Margin, MarginParams, MeasureSpec,
    arrange_flow, measure_flow,
};
use flowlayout::{Rect, Scene, Size};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const AVAILABLE: f32 = 100.0;

/// Random children with whole-number sizes so sums stay exact.
fn random_children(rng: &mut StdRng) -> Vec<FlowChild> {
    let count = rng.gen_range(0..40);
    (0..count)
        .map(|_| {
            let params = MarginParams::new(
                ChildSize::Fixed(rng.gen_range(0..150) as f32),
                ChildSize::Fixed(rng.gen_range(0..50) as f32),
            )
            .with_margin(Margin::new(
                rng.gen_range(0..8) as f32,
                rng.gen_range(0..8) as f32,
                rng.gen_range(0..8) as f32,
                rng.gen_range(0..8) as f32,
            ));
            FlowChild::new(BoxElement::new(0.0, 0.0), params)
        })
        .collect()
}

fn for_each_seed(mut check: impl FnMut(Vec<FlowChild>)) {
    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        check(random_children(&mut rng));
    }
}

fn measure(children: &mut [FlowChild]) -> flowlayout::layout::FlowMeasurement {
    measure_flow(
        children,
        &FlowStyle::default(),
        MeasureSpec::at_most(AVAILABLE),
        MeasureSpec::UNSPECIFIED,
    )
}

#[test]
fn test_no_child_lost() {
    for_each_seed(|mut children| {
        let m = measure(&mut children);
        let flat: Vec<usize> = m.line_indices().into_iter().flatten().collect();
        assert_eq!(flat, (0..children.len()).collect::<Vec<_>>());
        assert!(m.lines.iter().all(|l| !l.is_empty()));
    });
}

#[test]
fn test_break_iff_width_exceeded() {
    for_each_seed(|mut children| {
        let m = measure(&mut children);

        for (i, line) in m.lines.iter().enumerate() {
            let mut running = 0.0;
            for (j, idx) in line.range.clone().enumerate() {
                let box_width = children[idx].box_width();
                if j > 0 {
                    assert!(running + box_width <= AVAILABLE, "child {idx} should have wrapped");
                }
                running += box_width;
            }

            if i > 0 {
                let prev = &m.lines[i - 1];
                let first = children[line.range.start].box_width();
                assert!(prev.width + first > AVAILABLE, "line {i} broke early");
            }
        }
    });
}

#[test]
fn test_height_is_sum_of_line_heights() {
    for_each_seed(|mut children| {
        let m = measure(&mut children);

        for line in &m.lines {
            let tallest = children[line.range.clone()]
                .iter()
                .map(|c| c.box_height())
                .fold(f32::MIN, f32::max);
            assert_eq!(line.height, tallest);
        }
        assert_eq!(m.size.height, m.line_heights().iter().sum::<f32>());
    });
}

#[test]
fn test_width_is_widest_line() {
    for_each_seed(|mut children| {
        let m = measure(&mut children);

        let widest = m
            .lines
            .iter()
            .map(|l| children[l.range.clone()].iter().map(|c| c.box_width()).sum::<f32>())
            .fold(0.0, f32::max);
        assert_eq!(m.size.width, widest);
    });
}

#[test]
fn test_arrangement_matches_measurement() {
    for_each_seed(|mut children| {
        let style = FlowStyle::default();
        let m = measure(&mut children);
        arrange_flow(&mut children, &style, &m, Rect::from_origin_size(Default::default(), m.size));

        let mut top = 0.0;
        for line in &m.lines {
            let mut left = 0.0;
            for child in &children[line.range.clone()] {
                let frame = child.node.frame();
                let margin = child.params.margin;
                assert_eq!(frame.size(), child.node.measured_size());
                assert_eq!(frame.x, left + margin.left);
                assert_eq!(frame.y, top + margin.top);
                left += child.box_width();
            }
            top += line.height;
        }
    });
}

#[test]
fn test_documented_three_child_scenario() {
    let mut children: Vec<FlowChild> = [(40.0, 10.0), (40.0, 20.0), (40.0, 10.0)]
        .into_iter()
        .map(|(w, h)| FlowChild::new(BoxElement::new(w, h), MarginParams::wrap_content()))
        .collect();

    let m = measure(&mut children);
    assert_eq!(m.line_indices(), vec![vec![0, 1], vec![2]]);
    assert_eq!(m.line_heights(), vec![20.0, 10.0]);
    assert_eq!(m.size, Size::new(80.0, 30.0));

    arrange_flow(&mut children, &FlowStyle::default(), &m, Rect::new(0.0, 0.0, 80.0, 30.0));
    let third = children[2].node.frame();
    assert_eq!((third.left(), third.top()), (0.0, 20.0));
}

#[test]
fn test_exact_specs_ignore_children() {
    for_each_seed(|mut children| {
        let m = measure_flow(
            &mut children,
            &FlowStyle::default(),
            MeasureSpec::exact(200.0),
            MeasureSpec::exact(100.0),
        );
        assert_eq!(m.size, Size::new(200.0, 100.0));
    });
}

#[test]
fn test_bundled_scene_lays_out() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/scenes/tags.json");
    let frames = Scene::load(path).unwrap().layout().unwrap();

    assert_eq!(frames[0].0, "tags");
    assert!(frames[0].1.width <= 240.0);
    // Root plus six children plus the two nested boxes.
    assert_eq!(frames.len(), 9);
    let root = frames[0].1;
    for (path, rect) in &frames[1..] {
        assert!(rect.x >= 8.0, "{path} starts inside the left padding");
        assert!(rect.y >= 8.0, "{path} starts inside the top padding");
        assert!(rect.right() <= root.right() + 1e-3, "{path} overflows the right edge");
        assert!(rect.bottom() <= root.bottom() + 1e-3, "{path} overflows the bottom edge");
    }
}
