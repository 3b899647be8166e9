//! Player / target hit test
//!
//! Each sprite's half size acts as its reach from the top-left corner. This is
//! looser than a true AABB overlap in some layouts and tighter in others; it
//! is what gives the game its feel, so it is kept as is.

use super::state::Sprite;

/// True when each sprite's position lies within the other's half extent on both axes
pub fn collides(a: &Sprite, b: &Sprite) -> bool {
    let a_reach = a.pos + a.half_extent();
    let b_reach = b.pos + b.half_extent();

    a.pos.x <= b_reach.x && a.pos.y <= b_reach.y && b.pos.x <= a_reach.x && b.pos.y <= a_reach.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    fn plane(x: f32, y: f32) -> Sprite {
        Sprite::new(Vec2::new(x, y), Vec2::new(180.0, 280.0))
    }

    fn bird(x: f32, y: f32) -> Sprite {
        Sprite::new(Vec2::new(x, y), Vec2::new(60.0, 60.0))
    }

    /// Standard axis-aligned bounding box overlap, for comparison
    fn aabb_overlap(a: &Sprite, b: &Sprite) -> bool {
        let a_max = a.pos + a.size;
        let b_max = b.pos + b.size;

        a.pos.x < b_max.x && b.pos.x < a_max.x && a.pos.y < b_max.y && b.pos.y < a_max.y
    }

    #[test]
    fn test_same_position_hits() {
        assert!(collides(&plane(100.0, 100.0), &bird(100.0, 100.0)));
    }

    #[test]
    fn test_target_inside_player_reach() {
        // Bird within the plane's half extent (90, 140)
        assert!(collides(&plane(100.0, 100.0), &bird(150.0, 200.0)));
        // Exactly on the reach boundary still counts
        assert!(collides(&plane(100.0, 100.0), &bird(190.0, 240.0)));
    }

    #[test]
    fn test_target_past_player_reach_misses() {
        // Inside the plane's drawn box but past its half extent
        assert!(!collides(&plane(100.0, 100.0), &bird(200.0, 200.0)));
        assert!(!collides(&plane(100.0, 100.0), &bird(150.0, 300.0)));
    }

    #[test]
    fn test_far_apart_misses() {
        assert!(!collides(&plane(0.0, 0.0), &bird(700.0, 400.0)));
    }

    #[test]
    fn test_half_extent_misses_some_true_overlaps() {
        // Bird overlaps the plane's top-left corner: a true AABB overlap that
        // the half-extent test does not count, since the plane's corner is
        // beyond the bird's 30px reach.
        let p = plane(100.0, 100.0);
        let b = bird(50.0, 50.0);
        assert!(aabb_overlap(&p, &b));
        assert!(!collides(&p, &b));
    }

    proptest! {
        #[test]
        fn prop_collision_symmetric(
            ax in -200.0f32..1000.0, ay in -200.0f32..700.0,
            bx in -200.0f32..1000.0, by in -200.0f32..700.0,
            aw in 1.0f32..300.0, ah in 1.0f32..300.0,
            bw in 1.0f32..300.0, bh in 1.0f32..300.0,
        ) {
            let a = Sprite::new(Vec2::new(ax, ay), Vec2::new(aw, ah));
            let b = Sprite::new(Vec2::new(bx, by), Vec2::new(bw, bh));
            prop_assert_eq!(collides(&a, &b), collides(&b, &a));
        }

        #[test]
        fn prop_hit_implies_overlap(
            ax in -200.0f32..1000.0, ay in -200.0f32..700.0,
            bx in -200.0f32..1000.0, by in -200.0f32..700.0,
        ) {
            // Every half-extent hit between positive-size sprites touches in AABB terms
            let a = plane(ax, ay);
            let b = bird(bx, by);
            if collides(&a, &b) {
                prop_assert!(a.pos.x <= b.pos.x + b.size.x && b.pos.x <= a.pos.x + a.size.x);
                prop_assert!(a.pos.y <= b.pos.y + b.size.y && b.pos.y <= a.pos.y + a.size.y);
            }
        }
    }
}
