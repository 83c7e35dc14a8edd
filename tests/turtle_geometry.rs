// tests/turtle_geometry.rs
use glam::DVec2;
use lsystem_raster::{
    Configuration, Error, GeometryBuffer, LSystem, TurtleInterpreter, TurtleOp, TurtleState,
};

const EPS: f64 = 1e-9;

fn close(a: DVec2, b: DVec2) -> bool {
    a.abs_diff_eq(b, EPS)
}

#[test]
fn test_turn_round_trip_restores_heading() {
    let mut turtle = TurtleState::default();
    turtle.turn(90.0);
    assert!((turtle.heading - std::f64::consts::FRAC_PI_2).abs() < EPS);
    turtle.turn(-90.0);
    assert!(turtle.heading.abs() < EPS);
}

#[test]
fn test_forward_moves_one_unit_along_heading() {
    let mut turtle = TurtleState::default();
    let (from, to) = turtle.forward();
    assert_eq!(from, DVec2::ZERO);
    assert!(close(to, DVec2::X));

    turtle.turn(90.0);
    turtle.forward();
    assert!(close(turtle.position, DVec2::new(1.0, 1.0)));
}

#[test]
fn test_symbol_decoding() {
    assert_eq!(TurtleOp::from_symbol('+', 60.0), TurtleOp::Turn(-60.0));
    assert_eq!(TurtleOp::from_symbol('-', 60.0), TurtleOp::Turn(60.0));
    assert_eq!(TurtleOp::from_symbol('F', 60.0), TurtleOp::Move { draw: true });
    assert_eq!(TurtleOp::from_symbol('f', 60.0), TurtleOp::Move { draw: false });
    assert_eq!(TurtleOp::from_symbol('[', 60.0), TurtleOp::Push);
    assert_eq!(TurtleOp::from_symbol(']', 60.0), TurtleOp::Pop);
    assert_eq!(TurtleOp::from_symbol('X', 60.0), TurtleOp::NoOp);
}

#[test]
fn test_push_pop_restores_state() {
    // Branch off, come back, and continue from the saved point.
    let geometry = TurtleInterpreter::new(90.0).run("F[-FF]F").unwrap();
    assert_eq!(geometry.len(), 4);

    let last = geometry.segments()[3];
    assert!(close(last.p1, DVec2::new(1.0, 0.0)));
    assert!(close(last.p2, DVec2::new(2.0, 0.0)));

    // An empty branch changes nothing.
    let plain = TurtleInterpreter::new(90.0).run("F+F").unwrap();
    let bracketed = TurtleInterpreter::new(90.0).run("F[]+[]F").unwrap();
    assert_eq!(plain, bracketed);
}

#[test]
fn test_segment_count_matches_draw_symbols() {
    let symbols = "F-fF+[F-f]XF+ffF";
    let geometry = TurtleInterpreter::new(45.0).run(symbols).unwrap();
    let draws = symbols.chars().filter(|&c| c == 'F').count();
    assert_eq!(geometry.len(), draws);

    let skips_only = TurtleInterpreter::new(90.0).run("f+f-f").unwrap();
    assert!(skips_only.is_empty());
}

#[test]
fn test_segments_keep_draw_order() {
    let geometry = TurtleInterpreter::new(90.0).run("F-F-F").unwrap();
    let segments = geometry.segments();
    for pair in segments.windows(2) {
        assert!(close(pair[0].p2, pair[1].p1), "segments must chain in order");
    }
    assert!(close(segments[2].p2, DVec2::new(0.0, 1.0)));
}

#[test]
fn test_unbalanced_pop_aborts() {
    let err = TurtleInterpreter::new(90.0).run("FF]F").unwrap_err();
    assert_eq!(err, Error::StackUnderflow { index: 2 });
}

#[test]
fn test_deeply_nested_branches_interpret() {
    let depth = 5000;
    let symbols = format!("{}F{}", "[".repeat(depth), "]".repeat(depth));
    let geometry = TurtleInterpreter::new(90.0).run(&symbols).unwrap();
    assert_eq!(geometry.len(), 1);

    let system = LSystem::new(Configuration::new(symbols, Vec::<(char, String)>::new()));
    assert!(system.render().is_ok(), "balanced nesting must render");
}

#[test]
fn test_bounds() {
    let geometry = TurtleInterpreter::new(90.0).run("F-F-fF").unwrap();
    let bounds = geometry.bounds().unwrap();
    let (min_x, min_y, max_x, max_y) = bounds.to_tuple();
    assert!((min_x - -1.0).abs() < EPS);
    assert!(min_y.abs() < EPS);
    assert!((max_x - 1.0).abs() < EPS);
    assert!((max_y - 1.0).abs() < EPS);

    assert_eq!(GeometryBuffer::new().bounds(), Err(Error::EmptyGeometry));
}
