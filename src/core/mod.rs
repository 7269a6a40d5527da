//! Core domain: camera setup and session bookkeeping.

use bevy::prelude::*;

/// Running totals for the session, updated by movement and combat systems.
#[derive(Resource, Debug, Default)]
pub struct RunStats {
    pub jumps: u32,
    pub attacks: u32,
    pub kills: u32,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RunStats>()
            .add_systems(Startup, setup_camera);
    }
}

fn setup_camera(mut commands: Commands) {
    // World units are meters-ish; scale the viewport to show ~14 units tall.
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: 0.02,
            ..OrthographicProjection::default_2d()
        }),
    ));
}
