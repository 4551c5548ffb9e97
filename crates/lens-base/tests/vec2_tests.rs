use lens_base::Vec2;

#[test]
fn test_transposed() {
    assert_eq!(Vec2::new(640, 480).transposed(), Vec2::new(480, 640));
}

#[test]
fn test_transposed_twice_is_identity() {
    let v = Vec2::new(1920, 1080);
    assert_eq!(v.transposed().transposed(), v);
}

#[test]
fn test_is_degenerate() {
    assert!(Vec2::new(0, 480).is_degenerate());
    assert!(Vec2::new(640, 0).is_degenerate());
    assert!(!Vec2::new(640, 480).is_degenerate());
}

#[test]
fn test_arithmetic() {
    assert_eq!(Vec2::new(1, 2) + Vec2::new(3, 4), Vec2::new(4, 6));
    assert_eq!(Vec2::new(5, 5) - Vec2::new(1, 2), Vec2::new(4, 3));
    assert_eq!(Vec2::new(2, 3) * 4, Vec2::new(8, 12));
}

#[test]
fn test_display() {
    assert_eq!(Vec2::new(800, 480).to_string(), "800x480");
}
