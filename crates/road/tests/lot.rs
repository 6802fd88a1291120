use road::{build_lot, LineType, LotLayout};

fn default_lot() -> LotLayout {
    LotLayout { spots: 15, width: 4.0, x_offset: 0.0, y_offset: 10.0, length: 8.0 }
}

#[test]
fn fifteen_slots_make_thirty_lanes() {
    let net = build_lot(&default_lot());
    let lanes = net.lanes_list();
    assert_eq!(lanes.len(), 30);

    let upper = lanes.iter().filter(|l| l.start.y > 0.0 && l.end.y > l.start.y).count();
    let lower = lanes.iter().filter(|l| l.start.y < 0.0 && l.end.y < l.start.y).count();
    assert_eq!(upper, 15);
    assert_eq!(lower, 15);

    for lane in &lanes {
        assert_eq!(lane.line_types, [LineType::Continuous, LineType::Continuous]);
        assert!((lane.width - 4.0).abs() < f64::EPSILON);
        assert!((lane.length - 8.0).abs() < 1e-12);
    }
}

#[test]
fn upper_lanes_come_before_lower_lanes() {
    let net = build_lot(&default_lot());
    let lanes = net.lanes_list();
    assert!(lanes[..15].iter().all(|l| (l.start.y - 10.0).abs() < 1e-12));
    assert!(lanes[15..].iter().all(|l| (l.start.y + 10.0).abs() < 1e-12));
}

#[test]
fn lateral_positions_are_symmetric_around_minus_half_width() {
    let layout = default_lot();
    let net = build_lot(&layout);
    let mut xs: Vec<f64> = net.lanes_list()[..15].iter().map(|l| l.start.x).collect();
    xs.sort_by(f64::total_cmp);
    let center = -layout.width / 2.0;
    for (lo, hi) in xs.iter().zip(xs.iter().rev()) {
        assert!(((lo - center) + (hi - center)).abs() < 1e-9, "{lo} vs {hi}");
    }
    assert!((xs[7] - center).abs() < 1e-12);
    assert!((xs[0] + 30.0).abs() < 1e-12);
    assert!((xs[14] - 26.0).abs() < 1e-12);
}

#[test]
fn odd_slot_counts_center_with_floor_division() {
    let layout = LotLayout { spots: 3, ..default_lot() };
    let xs: Vec<f64> = (0..3).map(|k| layout.slot_x(k)).collect();
    assert_eq!(xs, vec![-6.0, -2.0, 2.0]);

    let layout = LotLayout { spots: 4, ..default_lot() };
    let xs: Vec<f64> = (0..4).map(|k| layout.slot_x(k)).collect();
    assert_eq!(xs, vec![-10.0, -6.0, -2.0, 2.0]);
}

#[test]
fn x_offset_widens_the_pitch() {
    let layout = LotLayout { spots: 2, x_offset: 1.0, ..default_lot() };
    assert!((layout.slot_x(1) - layout.slot_x(0) - 5.0).abs() < 1e-12);
}

#[test]
fn generation_is_deterministic() {
    let a = build_lot(&default_lot());
    let b = build_lot(&default_lot());
    let la = a.lanes_list();
    let lb = b.lanes_list();
    assert_eq!(la.len(), lb.len());
    for (x, y) in la.iter().zip(lb.iter()) {
        assert_eq!(x, y);
    }
}
