use lens_base::{Rect, Vec2};

#[test]
fn test_new() {
    let r = Rect::new(Vec2::new(1, 2), Vec2::new(3, 4));
    assert_eq!(r.origin, Vec2::new(1, 2));
    assert_eq!(r.size, Vec2::new(3, 4));
}

#[test]
fn test_from_ltrb_allows_negative_origin() {
    let r = Rect::from_ltrb(-100, 0, 500, 800);
    assert_eq!(r.origin, Vec2::new(-100, 0));
    assert_eq!(r.size, Vec2::new(600, 800));
    assert_eq!((r.left(), r.top(), r.right(), r.bottom()), (-100, 0, 500, 800));
}

#[test]
fn test_min_max() {
    let r = Rect::new(Vec2::new(1, 2), Vec2::new(3, 4));
    assert_eq!(r.min(), Vec2::new(1, 2));
    assert_eq!(r.max(), Vec2::new(4, 6));
}

#[test]
fn test_width_height_area() {
    let r = Rect::from_ltrb(0, 0, 5, 3);
    assert_eq!(r.width(), 5);
    assert_eq!(r.height(), 3);
    assert_eq!(r.area(), 15);
}

#[test]
fn test_zero() {
    let r = Rect::<i32>::zero();
    assert_eq!(r, Rect::from_ltrb(0, 0, 0, 0));
}

#[test]
fn test_contains_rect() {
    let container = Rect::from_ltrb(0, 0, 400, 800);
    assert!(container.contains_rect(Rect::from_ltrb(0, 0, 400, 300)));
    assert!(container.contains_rect(container));
    assert!(!container.contains_rect(Rect::from_ltrb(-100, 0, 500, 800)));
}
