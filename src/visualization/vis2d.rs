use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::simulation::scenario::Scenario;
use crate::visualization::surface::{Bounds, ParticleSprite, Surface};

/// Gizmo-backed surface. Simulation space is canvas-like (origin top-left,
/// y down); the default 2D camera is centred with y up.
struct GizmoSurface<'a, 'w, 's> {
    gizmos: &'a mut Gizmos<'w, 's>,
    bounds: Bounds,
}

impl GizmoSurface<'_, '_, '_> {
    fn to_screen(&self, sprite: &ParticleSprite) -> Vec2 {
        Vec2::new(
            (sprite.position.x - 0.5 * self.bounds.width) as f32,
            (0.5 * self.bounds.height - sprite.position.y) as f32,
        )
    }
}

impl Surface for GizmoSurface<'_, '_, '_> {
    fn draw_particle(&mut self, sprite: &ParticleSprite) {
        let center = self.to_screen(sprite);
        let r = sprite.radius as f32;

        if !sprite.glow {
            self.gizmos.circle_2d(center, r, Color::WHITE);
            return;
        }

        // core, light-yellow ring, fading yellow halo
        let core = sprite.core_alpha() as f32;
        let halo = sprite.halo_alpha() as f32;
        self.gizmos.circle_2d(center, r, Color::srgba(1.0, 1.0, 1.0, core));
        self.gizmos.circle_2d(center, r * 1.5, Color::srgba(1.0, 1.0, 0.86, 0.8 * halo));
        self.gizmos.circle_2d(center, sprite.display_radius() as f32, Color::srgba(1.0, 1.0, 0.0, 0.4 * halo));
    }
}

pub fn run_2d(scenario: Scenario) {
    info!(particles = scenario.simulation.len(), "run_2d: starting Bevy 2D viewer");

    let resolution = (scenario.bounds.width as f32, scenario.bounds.height as f32);

    // The binary already installed a tracing subscriber
    let plugins = DefaultPlugins
        .build()
        .disable::<LogPlugin>()
        .set(WindowPlugin {
            primary_window: Some(Window {
                title: "mgsim".into(),
                resolution: resolution.into(),
                ..Default::default()
            }),
            ..Default::default()
        });

    App::new()
        .insert_resource(scenario)
        .insert_resource(ClearColor(Color::BLACK))
        .add_plugins(plugins)
        .add_systems(Startup, setup_camera_system)
        .add_systems(Update, frame_system)
        .run();
}

fn setup_camera_system(mut commands: Commands) {
    commands.spawn(Camera2dBundle::default());
}

/// Physics tick then draw, once per Bevy frame. Resizing the window only
/// moves the visibility bounds
fn frame_system(
    mut scenario: ResMut<Scenario>,
    time: Res<Time>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut gizmos: Gizmos,
) {
    if let Ok(window) = windows.get_single() {
        scenario.bounds = Bounds::new(window.width() as f64, window.height() as f64);
    }

    let timestamp = time.elapsed_seconds_f64() * 1000.0;
    let mut surface = GizmoSurface {
        gizmos: &mut gizmos,
        bounds: scenario.bounds,
    };
    scenario.frame(timestamp, &mut surface);
}
