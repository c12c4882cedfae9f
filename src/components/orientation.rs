use bevy_ecs::prelude::Component;

/// Heading and pitch of an actor in degrees.
///
/// Heading rotates counter-clockwise around the up axis, with 0 looking down
/// the forward (+Y) axis. Pitch tips the actor around its own lateral axis.
#[derive(Component, Clone, Debug, Copy, Default, PartialEq)]
pub struct Orientation {
    pub heading: f32,
    pub pitch: f32,
}

impl Orientation {
    pub fn with_heading(heading: f32) -> Self {
        Orientation {
            heading,
            pitch: 0.0,
        }
    }

    /// Heading that makes an actor at `from` look at `to` (X/Y plane only).
    pub fn look_at(from: (f32, f32), to: (f32, f32)) -> Self {
        let dx = to.0 - from.0;
        let dy = to.1 - from.1;
        Self::with_heading((-dx).atan2(dy).to_degrees())
    }

    /// Rotate a displacement given in the actor's local frame
    /// (`lateral`, `forward`) into world X/Y.
    pub fn local_to_world(&self, lateral: f32, forward: f32) -> (f32, f32) {
        let (sin, cos) = self.heading.to_radians().sin_cos();
        (lateral * cos - forward * sin, lateral * sin + forward * cos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn zero_heading_is_identity() {
        let o = Orientation::default();
        let (x, y) = o.local_to_world(1.0, 2.0);
        assert!(approx(x, 1.0));
        assert!(approx(y, 2.0));
    }

    #[test]
    fn half_turn_mirrors_both_axes() {
        let o = Orientation::with_heading(180.0);
        let (x, y) = o.local_to_world(1.0, 2.0);
        assert!(approx(x, -1.0));
        assert!(approx(y, -2.0));
    }

    #[test]
    fn look_at_straight_ahead() {
        let o = Orientation::look_at((0.0, 0.0), (0.0, 60.0));
        assert!(approx(o.heading, 0.0));
        let o = Orientation::look_at((0.0, 0.0), (-10.0, 0.0));
        assert!(approx(o.heading, 90.0));
    }
}
