//! Render adapter.
//!
//! The round only knows logical positions and orientations. This system
//! pushes them to Raylib once per frame: ground, finish line, every entity
//! with a [`ModelRef`], and the countdown overlay.
//!
//! The logical frame is Z-up with +Y toward the doll; Raylib is Y-up. The
//! mapping `(x, y, z) -> (x, z, -y)` is a proper rotation, so headings keep
//! their sense around the up axis.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::model::ModelRef;
use crate::components::orientation::Orientation;
use crate::components::worldposition::WorldPosition;
use crate::resources::camera3d::Camera3DRes;
use crate::resources::modelstore::ModelStore;
use crate::resources::roundconfig::RoundConfig;
use crate::resources::worldsignals::WorldSignals;

/// Model key of the optional sky dome.
pub const SKYBOX_KEY: &str = "skybox";
const SKYBOX_SCALE: f32 = 1000.0;
const FINISH_LINE_WIDTH: f32 = 10.0;
const OVERLAY_FONT_SIZE: i32 = 40;

/// Map a logical (Z-up) point into Raylib's Y-up frame.
pub fn to_render_space(v: Vector3) -> Vector3 {
    Vector3 {
        x: v.x,
        y: v.z,
        z: -v.y,
    }
}

/// Rotation applied to a model: tip around the lateral axis, then turn.
fn orientation_matrix(orientation: &Orientation) -> Matrix {
    Matrix::rotate_x(orientation.pitch.to_radians())
        * Matrix::rotate_y(orientation.heading.to_radians())
}

pub fn render_system(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    mut models: NonSendMut<ModelStore>,
    camera: Res<Camera3DRes>,
    config: Res<RoundConfig>,
    signals: Res<WorldSignals>,
    actors: Query<(&ModelRef, &WorldPosition, Option<&Orientation>)>,
) {
    let screen_w = rl.get_screen_width();
    let mut d = rl.begin_drawing(&th);
    d.clear_background(Color::SKYBLUE);

    {
        let mut d3 = d.begin_mode3D(camera.0);

        if let Some(sky) = models.get_mut(SKYBOX_KEY) {
            d3.draw_model(&*sky, camera.0.position, SKYBOX_SCALE, Color::WHITE);
        }

        // Field from behind the start line to past the doll
        let field_len = config.finish_line + 40.0;
        d3.draw_plane(
            to_render_space(Vector3::new(0.0, config.finish_line * 0.5, 0.0)),
            Vector2::new(40.0, field_len),
            Color::BEIGE,
        );

        // Finish line: a thin red strip across the field
        d3.draw_cube(
            to_render_space(Vector3::new(0.0, config.finish_line, 0.01)),
            FINISH_LINE_WIDTH,
            0.02,
            0.2,
            Color::RED,
        );

        for (model_ref, position, orientation) in actors.iter() {
            let Some(model) = models.get_mut(&model_ref.key) else {
                continue;
            };
            let orientation = orientation.copied().unwrap_or_default();
            model.set_transform(&orientation_matrix(&orientation));
            let s = model_ref.scale;
            d3.draw_model_ex(
                &*model,
                to_render_space(position.pos),
                Vector3::new(0.0, 1.0, 0.0),
                0.0,
                Vector3::new(s, s, s),
                Color::WHITE,
            );
        }
    }

    if let Some(label) = signals.get_string("time_left") {
        // Rough centering: Raylib's default font is about half as wide as tall
        let text_w = label.len() as i32 * OVERLAY_FONT_SIZE / 2;
        d.draw_text(
            label,
            (screen_w - text_w) / 2,
            20,
            OVERLAY_FONT_SIZE,
            Color::WHITE,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_axis_points_into_the_screen() {
        let v = to_render_space(Vector3::new(1.0, 60.0, 2.0));
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, -60.0);
    }
}
