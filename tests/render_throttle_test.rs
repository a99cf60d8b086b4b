use tower_crane::term::RenderThrottle;

#[test]
fn render_throttle_renders_first_frame() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1));
}

#[test]
fn render_throttle_renders_on_change() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1));
    assert!(t.should_render(1, 2));
}

#[test]
fn render_throttle_throttles_when_unchanged() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1));
    assert!(!t.should_render(10, 1));
    assert!(!t.should_render(249, 1));
    assert!(t.should_render(250, 1));
}

#[test]
fn render_throttle_invalidate_forces_render() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1));
    t.invalidate();
    assert!(t.should_render(1, 1));
}

#[test]
fn render_throttle_counts_skipped_frames() {
    let mut t = RenderThrottle::new(100);
    for now in 0..100 {
        t.should_render(now, 7);
    }
    assert_eq!(t.skipped(), 99);
}
