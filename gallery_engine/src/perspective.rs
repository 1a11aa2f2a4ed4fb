//! Flat perspective transform for the faced artwork.
//!
//! The illusion is driven entirely by discrete grid relationships: lateral
//! offset from the piece maps to a rotation angle, approach distance maps to
//! a scale factor, and the pivot edge follows which side the visitor stands
//! on. Angles are positive when the piece swings its right side toward the
//! viewer, mirroring CSS `rotateY`.

use serde::{Deserialize, Serialize};

use crate::artwork::ArtworkInstance;
use crate::grid::Facing;
use crate::navigation::User;

/// Full rotation is reached this many cells off-axis.
pub const MAX_PERPENDICULAR_DIST: f32 = 3.0;
/// Rotation at the maximum lateral offset, in degrees.
pub const MAX_VIEWING_ANGLE: f32 = 60.0;
/// Approach distances mapped onto the scale range.
pub const MIN_VIEW_DISTANCE: f32 = 1.0;
pub const MAX_VIEW_DISTANCE: f32 = 5.0;
/// Scale bounds before the final overshoot clamp.
pub const MIN_SCALE: f32 = 0.80;
pub const MAX_SCALE: f32 = 1.00;

/// Offsets at or below this read as "directly in line" when picking the
/// anchor.
const NEGLIGIBLE_OFFSET: f32 = 0.1;

/// Pivot edge for the artwork's rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    LeftCenter,
    RightCenter,
    CenterCenter,
}

impl Anchor {
    pub fn label(self) -> &'static str {
        match self {
            Anchor::LeftCenter => "left-center",
            Anchor::RightCenter => "right-center",
            Anchor::CenterCenter => "center-center",
        }
    }
}

/// How the faced artwork should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewTransform {
    pub rotation_degrees: f32,
    pub scale: f32,
    pub anchor: Anchor,
}

impl ViewTransform {
    /// The no-artwork transform: flat, unscaled, centered.
    pub fn identity() -> Self {
        Self {
            rotation_degrees: 0.0,
            scale: 1.0,
            anchor: Anchor::CenterCenter,
        }
    }
}

/// Clamped linear remap of `value` from `[in_min, in_max]` onto
/// `[out_min, out_max]`. A degenerate input range yields `out_min`.
pub fn map_range(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    if (in_max - in_min).abs() <= f32::EPSILON {
        return out_min;
    }
    let clamped = value.min(in_max).max(in_min);
    (clamped - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// Perspective parameters for `instance` as seen from the user's cell.
pub fn compute_transform(user: &User, instance: &ArtworkInstance) -> ViewTransform {
    let ux = user.position.x as f32;
    let uy = user.position.y as f32;
    let ax = instance.x as f32;
    let ay = instance.y as f32;

    match instance.wall_face {
        // Horizontal wall: lateral x-offset drives the angle, y-distance the
        // scale.
        Facing::Up | Facing::Down => {
            let perp = ux - ax;
            let mut angle = map_range(
                perp.abs(),
                0.0,
                MAX_PERPENDICULAR_DIST,
                0.0,
                MAX_VIEWING_ANGLE,
            );
            let anchor;
            if perp < 0.0 {
                // Viewer left of the piece: positive swing, pivot on the
                // left edge.
                anchor = if perp.abs() > NEGLIGIBLE_OFFSET {
                    Anchor::LeftCenter
                } else {
                    Anchor::CenterCenter
                };
            } else if perp > 0.0 {
                angle = -angle;
                anchor = if perp.abs() > NEGLIGIBLE_OFFSET {
                    Anchor::RightCenter
                } else {
                    Anchor::CenterCenter
                };
            } else {
                angle = 0.0;
                anchor = Anchor::CenterCenter;
            }

            let approach = (uy - ay).abs();
            let scale = map_range(
                approach,
                MIN_VIEW_DISTANCE,
                MAX_VIEW_DISTANCE,
                MAX_SCALE,
                MIN_SCALE,
            );
            finish(angle, scale, anchor)
        }
        // Vertical wall: x-distance to the wall plane drives both angle and
        // scale; the vertical offset only picks the swing direction.
        Facing::Left | Facing::Right => {
            let perp_y = uy - ay;
            let wall_dist = (ux - ax).abs();
            let swing = map_range(
                wall_dist,
                0.0,
                MAX_PERPENDICULAR_DIST,
                0.0,
                MAX_VIEWING_ANGLE,
            );

            let (angle, anchor) = if instance.wall_face == Facing::Right {
                let angle = if perp_y < 0.0 { -swing } else { swing };
                (angle, Anchor::LeftCenter)
            } else {
                let angle = if perp_y < 0.0 { swing } else { -swing };
                (angle, Anchor::RightCenter)
            };

            let scale = map_range(
                wall_dist,
                MIN_VIEW_DISTANCE,
                MAX_VIEW_DISTANCE,
                MAX_SCALE,
                MIN_SCALE,
            );
            finish(angle, scale, anchor)
        }
    }
}

fn finish(angle: f32, scale: f32, anchor: Anchor) -> ViewTransform {
    // Slight overshoot past the nominal bounds is allowed for very close
    // viewing.
    let scale = scale.clamp(MIN_SCALE / 2.0, MAX_SCALE * 1.2);
    ViewTransform {
        rotation_degrees: angle,
        scale,
        anchor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Position;

    const EPSILON: f32 = 1e-5;

    fn instance(x: i32, y: i32, wall_face: Facing) -> ArtworkInstance {
        ArtworkInstance {
            id: "M1".to_string(),
            instance_id: format!("M1-{x}-{y}"),
            x,
            y,
            wall_face,
            name: String::new(),
            image_url: String::new(),
            actual_width: 0,
            actual_height: 0,
            description: String::new(),
            medium: String::new(),
            exhibition: String::new(),
            dimensions_original: String::new(),
        }
    }

    fn viewer(x: i32, y: i32, facing: Facing) -> User {
        User::new(Position::new(x, y), facing)
    }

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() <= EPSILON,
            "{actual} != {expected}"
        );
    }

    #[test]
    fn map_range_interpolates_and_clamps() {
        assert_close(map_range(1.5, 0.0, 3.0, 0.0, 60.0), 30.0);
        assert_close(map_range(-2.0, 0.0, 3.0, 0.0, 60.0), 0.0);
        assert_close(map_range(7.0, 0.0, 3.0, 0.0, 60.0), 60.0);
        // Inverted output range: closer maps larger.
        assert_close(map_range(1.0, 1.0, 5.0, 1.0, 0.8), 1.0);
        assert_close(map_range(5.0, 1.0, 5.0, 1.0, 0.8), 0.8);
    }

    #[test]
    fn map_range_degenerate_input_yields_out_min() {
        assert_close(map_range(2.0, 3.0, 3.0, 0.0, 60.0), 0.0);
    }

    #[test]
    fn head_on_view_is_flat_and_centered() {
        let inst = instance(2, 1, Facing::Down);
        let transform = compute_transform(&viewer(2, 2, Facing::Up), &inst);
        assert_close(transform.rotation_degrees, 0.0);
        assert_close(transform.scale, MAX_SCALE);
        assert_eq!(transform.anchor, Anchor::CenterCenter);
    }

    #[test]
    fn viewer_left_of_piece_swings_positive_from_left_edge() {
        let inst = instance(5, 1, Facing::Down);
        let transform = compute_transform(&viewer(4, 2, Facing::Up), &inst);
        assert_close(transform.rotation_degrees, 20.0);
        assert_eq!(transform.anchor, Anchor::LeftCenter);
    }

    #[test]
    fn viewer_right_of_piece_swings_negative_from_right_edge() {
        let inst = instance(5, 1, Facing::Down);
        let transform = compute_transform(&viewer(7, 2, Facing::Up), &inst);
        assert_close(transform.rotation_degrees, -40.0);
        assert_eq!(transform.anchor, Anchor::RightCenter);
    }

    #[test]
    fn angle_saturates_past_the_perpendicular_limit() {
        let inst = instance(5, 1, Facing::Down);
        let at_limit = compute_transform(&viewer(2, 2, Facing::Up), &inst);
        assert_close(at_limit.rotation_degrees, MAX_VIEWING_ANGLE);
        let beyond = compute_transform(&viewer(1, 2, Facing::Up), &inst);
        assert_close(beyond.rotation_degrees, MAX_VIEWING_ANGLE);
    }

    #[test]
    fn scale_shrinks_monotonically_with_approach_distance() {
        let inst = instance(5, 1, Facing::Down);
        let mut previous = f32::INFINITY;
        for distance in 1..=6 {
            let transform =
                compute_transform(&viewer(5, 1 + distance, Facing::Up), &inst);
            assert!(
                transform.scale <= previous,
                "scale should not grow with distance"
            );
            previous = transform.scale;
        }
        assert_close(
            compute_transform(&viewer(5, 2, Facing::Up), &inst).scale,
            MAX_SCALE,
        );
        assert_close(
            compute_transform(&viewer(5, 6, Facing::Up), &inst).scale,
            MIN_SCALE,
        );
        // Past the far end of the mapping the scale stays pinned.
        assert_close(
            compute_transform(&viewer(5, 8, Facing::Up), &inst).scale,
            MIN_SCALE,
        );
    }

    #[test]
    fn scale_stays_inside_the_overshoot_clamp() {
        let inst = instance(5, 1, Facing::Down);
        for (x, y) in [(5, 2), (5, 11), (1, 2), (11, 11)] {
            let transform = compute_transform(&viewer(x, y, Facing::Up), &inst);
            assert!(transform.scale >= MIN_SCALE / 2.0);
            assert!(transform.scale <= MAX_SCALE * 1.2);
        }
    }

    #[test]
    fn left_wall_piece_pivots_on_its_left_edge() {
        // Piece on the room's left wall, facing right into the room.
        let inst = instance(1, 5, Facing::Right);

        let above = compute_transform(&viewer(2, 4, Facing::Left), &inst);
        assert_close(above.rotation_degrees, -20.0);
        assert_eq!(above.anchor, Anchor::LeftCenter);

        let below = compute_transform(&viewer(2, 6, Facing::Left), &inst);
        assert_close(below.rotation_degrees, 20.0);
        assert_eq!(below.anchor, Anchor::LeftCenter);
    }

    #[test]
    fn right_wall_piece_pivots_on_its_right_edge() {
        let inst = instance(11, 5, Facing::Left);

        let above = compute_transform(&viewer(10, 4, Facing::Right), &inst);
        assert_close(above.rotation_degrees, 20.0);
        assert_eq!(above.anchor, Anchor::RightCenter);

        let below = compute_transform(&viewer(10, 6, Facing::Right), &inst);
        assert_close(below.rotation_degrees, -20.0);
        assert_eq!(below.anchor, Anchor::RightCenter);
    }

    #[test]
    fn vertical_wall_scale_tracks_distance_to_the_wall_plane() {
        let inst = instance(1, 5, Facing::Right);
        assert_close(
            compute_transform(&viewer(2, 5, Facing::Left), &inst).scale,
            MAX_SCALE,
        );
        assert_close(
            compute_transform(&viewer(6, 5, Facing::Left), &inst).scale,
            MIN_SCALE,
        );
    }

    #[test]
    fn identity_transform_is_flat() {
        let transform = ViewTransform::identity();
        assert_close(transform.rotation_degrees, 0.0);
        assert_close(transform.scale, 1.0);
        assert_eq!(transform.anchor, Anchor::CenterCenter);
    }
}
