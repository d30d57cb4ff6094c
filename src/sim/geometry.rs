//! Axis-aligned box overlap and boundary containment
//!
//! Every walker, coin and wall check in the game is a rectangle anchored at its
//! top-left corner. Y grows downward, so the "bottom" limit is numerically the
//! larger of the two vertical bounds.

use glam::Vec2;

/// Anything with a top-left position and a fixed extent
pub trait Body {
    /// Top-left corner
    fn pos(&self) -> Vec2;
    /// Mutable top-left corner (containment writes through this)
    fn pos_mut(&mut self) -> &mut Vec2;
    /// Width and height
    fn size(&self) -> Vec2;
}

/// A bare rectangle, for hit-testing and tests
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }
}

impl Body for Rect {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn pos_mut(&mut self) -> &mut Vec2 {
        &mut self.pos
    }

    fn size(&self) -> Vec2 {
        self.size
    }
}

/// Which boundary a containment pass pushed the body back from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionSide {
    #[default]
    None,
    Left,
    Right,
    Top,
    Bottom,
}

impl CollisionSide {
    pub fn is_hit(self) -> bool {
        self != CollisionSide::None
    }
}

/// True iff the two boxes intersect on both axes (touching edges do not count)
pub fn overlaps<A, B>(a: &A, b: &B) -> bool
where
    A: Body + ?Sized,
    B: Body + ?Sized,
{
    let (a_pos, a_size) = (a.pos(), a.size());
    let (b_pos, b_size) = (b.pos(), b.size());

    let x = a_pos.x < b_pos.x + b_size.x && a_pos.x + a_size.x > b_pos.x;
    let y = a_pos.y < b_pos.y + b_size.y && a_pos.y + a_size.y > b_pos.y;
    x && y
}

/// Clamp a body inside a rectangle, one edge at a time.
///
/// `min_y` is the bottom limit and `max_y` the top limit (callers pass the
/// bottom first). Edges are checked right, left, bottom, top; when more than
/// one is crossed the last one checked is reported.
pub fn contain<B>(body: &mut B, min_x: f32, max_x: f32, min_y: f32, max_y: f32) -> CollisionSide
where
    B: Body + ?Sized,
{
    let size = body.size();
    let pos = body.pos_mut();
    let mut side = CollisionSide::None;

    if pos.x + size.x > max_x {
        pos.x = max_x - size.x;
        side = CollisionSide::Right;
    }
    if pos.x < min_x {
        pos.x = min_x;
        side = CollisionSide::Left;
    }

    if pos.y + size.y > min_y {
        pos.y = min_y - size.y;
        side = CollisionSide::Bottom;
    }
    if pos.y < max_y {
        pos.y = max_y;
        side = CollisionSide::Top;
    }

    side
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f32 = 1e-3;

    #[test]
    fn test_overlap_partial() {
        let a = Rect::new(100.0, 100.0, 32.0, 32.0);
        let b = Rect::new(120.0, 110.0, 32.0, 32.0);
        assert!(overlaps(&a, &b));
    }

    #[test]
    fn test_overlap_touching_edges_is_miss() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!overlaps(&a, &right));
        assert!(!overlaps(&a, &below));
    }

    #[test]
    fn test_overlap_needs_both_axes() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Same column, far below
        let b = Rect::new(2.0, 50.0, 10.0, 10.0);
        assert!(!overlaps(&a, &b));
    }

    #[test]
    fn test_contain_inside_is_untouched() {
        let mut r = Rect::new(100.0, 100.0, 20.0, 20.0);
        let side = contain(&mut r, 48.0, 816.0, 816.0, 48.0);
        assert_eq!(side, CollisionSide::None);
        assert_eq!(r.pos, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_contain_each_side() {
        let mut r = Rect::new(810.0, 100.0, 20.0, 20.0);
        assert_eq!(contain(&mut r, 48.0, 816.0, 816.0, 48.0), CollisionSide::Right);
        assert_eq!(r.pos.x, 796.0);

        let mut r = Rect::new(10.0, 100.0, 20.0, 20.0);
        assert_eq!(contain(&mut r, 48.0, 816.0, 816.0, 48.0), CollisionSide::Left);
        assert_eq!(r.pos.x, 48.0);

        let mut r = Rect::new(100.0, 805.0, 20.0, 20.0);
        assert_eq!(contain(&mut r, 48.0, 816.0, 816.0, 48.0), CollisionSide::Bottom);
        assert_eq!(r.pos.y, 796.0);

        let mut r = Rect::new(100.0, 0.0, 20.0, 20.0);
        assert_eq!(contain(&mut r, 48.0, 816.0, 816.0, 48.0), CollisionSide::Top);
        assert_eq!(r.pos.y, 48.0);
    }

    #[test]
    fn test_contain_corner_reports_last_check() {
        // Crosses right and bottom: bottom is checked later
        let mut r = Rect::new(900.0, 900.0, 20.0, 20.0);
        assert_eq!(contain(&mut r, 48.0, 816.0, 816.0, 48.0), CollisionSide::Bottom);
        assert_eq!(r.pos, Vec2::new(796.0, 796.0));

        // Crosses left and top: top wins
        let mut r = Rect::new(-5.0, -5.0, 20.0, 20.0);
        assert_eq!(contain(&mut r, 48.0, 816.0, 816.0, 48.0), CollisionSide::Top);
        assert_eq!(r.pos, Vec2::new(48.0, 48.0));
    }

    proptest! {
        #[test]
        fn prop_contain_keeps_box_inside(
            x in -2000.0f32..2000.0,
            y in -2000.0f32..2000.0,
            w in 1.0f32..200.0,
            h in 1.0f32..200.0,
        ) {
            let (min_x, max_x, bottom, top) = (48.0, 816.0, 816.0, 48.0);
            let mut r = Rect::new(x, y, w, h);
            contain(&mut r, min_x, max_x, bottom, top);

            prop_assert!(r.pos.x >= min_x - EPS);
            prop_assert!(r.pos.x + w <= max_x + EPS);
            prop_assert!(r.pos.y >= top - EPS);
            prop_assert!(r.pos.y + h <= bottom + EPS);
        }

        #[test]
        fn prop_overlap_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 0.0f32..300.0, ah in 0.0f32..300.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            bw in 0.0f32..300.0, bh in 0.0f32..300.0,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            let b = Rect::new(bx, by, bw, bh);
            prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
        }
    }
}
