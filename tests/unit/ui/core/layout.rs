use super::*;

#[test]
fn intersect_returns_overlap() {
    let a = Rect::new(0, 0, 5, 5);
    let b = Rect::new(3, 3, 5, 5);
    assert_eq!(a.intersect(b), Rect::new(3, 3, 2, 2));
}

#[test]
fn intersect_disjoint_is_empty() {
    let a = Rect::new(0, 0, 2, 2);
    let b = Rect::new(5, 5, 2, 2);
    assert!(a.intersect(b).is_empty());
}

#[test]
fn split_top_and_bottom() {
    let r = Rect::new(0, 0, 10, 5);
    let (top, rest) = r.split_top(2);
    assert_eq!(top, Rect::new(0, 0, 10, 2));
    assert_eq!(rest, Rect::new(0, 2, 10, 3));

    let (rest, bottom) = r.split_bottom(2);
    assert_eq!(rest, Rect::new(0, 0, 10, 3));
    assert_eq!(bottom, Rect::new(0, 3, 10, 2));
}

#[test]
fn centering_gives_odd_unit_to_right_and_bottom() {
    let insets = Insets::centering(9, 3);
    assert_eq!(insets.left, 4);
    assert_eq!(insets.right, 5);
    assert_eq!(insets.top, 1);
    assert_eq!(insets.bottom, 2);
}

#[test]
fn centering_split_always_sums_to_slack() {
    for slack in 0..40u16 {
        let insets = Insets::centering(slack, slack);
        assert_eq!(insets.horizontal(), slack);
        assert_eq!(insets.left, slack / 2);
        assert!(insets.right >= insets.left);
    }
}

#[test]
fn fit_within_shifts_overflowing_rect_back_inside() {
    let screen = Rect::new(0, 0, 20, 10);
    assert_eq!(
        Rect::new(15, 8, 10, 4).fit_within(screen),
        Rect::new(10, 6, 10, 4)
    );
    assert_eq!(
        Rect::new(2, 1, 5, 3).fit_within(screen),
        Rect::new(2, 1, 5, 3)
    );
}
