use bevy::app::AppExit;
use bevy::prelude::*;
use bevy::window::{CursorMoved, PrimaryWindow, WindowResized};
use rand::thread_rng;

use crate::args::ARGS;
use crate::field::Field;
use crate::particle::ParticleId;

mod args;
mod field;
mod particle;
mod settings;

fn main() {
    let window_size = ARGS.window_size();
    let background = ARGS.background_color();

    App::new()
        .insert_resource(ClearColor(background))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "sparkle-field".into(),
                resolution: (window_size.x, window_size.y).into(),
                transparent: background.alpha() == 0.0,
                ..default()
            }),
            ..default()
        }))
        .add_systems(Startup, setup)
        .add_systems(
            Update,
            (track_cursor, handle_resize, handle_keypress, update).chain(),
        )
        .run();
}

#[derive(Component)]
struct FieldCamera;

fn setup(
    mut commands: Commands,
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    // No window means no drawing surface; the whole effect quietly stands down.
    let Ok(window) = window_query.get_single() else {
        return;
    };
    let bounds = Vec2::new(window.width(), window.height());
    let settings = ARGS.settings();
    let color = settings.particle_color;

    // The field simulates in canvas coordinates (y down); placing the camera at
    // the window center and flipping y when writing transforms maps it to world
    // space.
    commands.spawn((
        Camera2d,
        Transform::from_xyz(bounds.x / 2.0, bounds.y / 2.0, 0.0),
        FieldCamera,
    ));

    let mut rng = thread_rng();
    let field = Field::new(&mut rng, bounds, &settings);
    info!("Spawning {} particles over {}x{}", field.particles.len(), bounds.x, bounds.y);

    for (i, p) in field.particles.iter().enumerate() {
        commands.spawn((
            ParticleId(i),
            Mesh2d(meshes.add(Circle::new(p.size))),
            MeshMaterial2d(materials.add(color.with_alpha(p.opacity))),
            Transform::from_xyz(p.pos.x, bounds.y - p.pos.y, 0.0),
        ));
    }
    commands.spawn(field);

    spawn_overlay(&mut commands);
}

/// Centered heading and subheading, drawn by the UI pass above the particles.
fn spawn_overlay(commands: &mut Commands) {
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            row_gap: Val::Px(16.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new(&ARGS.heading),
                TextFont {
                    font_size: 72.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            parent.spawn((
                Text::new(&ARGS.subheading),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.6, 0.65)),
            ));
        });
}

/// Feeds cursor movement into the field's normalized pointer offset.
fn track_cursor(mut cursor_events: EventReader<CursorMoved>, mut field: Single<&mut Field>) {
    for event in cursor_events.read() {
        field.set_pointer(event.position);
    }
}

/// Resizes the drawing surface. The particle population stays as it is; only
/// the wrap bounds and the camera move.
fn handle_resize(
    mut resize_events: EventReader<WindowResized>,
    mut field: Single<&mut Field>,
    mut camera: Single<&mut Transform, With<FieldCamera>>,
) {
    for event in resize_events.read() {
        field.resize(Vec2::new(event.width, event.height));
        camera.translation.x = event.width / 2.0;
        camera.translation.y = event.height / 2.0;
    }
}

/// Esc / Q: quit. Space: pause or resume the animation.
fn handle_keypress(
    kb: Res<ButtonInput<KeyCode>>,
    mut app_exit: EventWriter<AppExit>,
    mut field: Single<&mut Field>,
) {
    if kb.pressed(KeyCode::Escape) || kb.pressed(KeyCode::KeyQ) {
        app_exit.send(AppExit::Success);
    }
    if kb.just_pressed(KeyCode::Space) {
        field.paused = !field.paused;
    }
}

/// The per-frame step: advance every particle, then write each one's render
/// position and opacity through to its mesh entity.
fn update(
    mut field: Single<&mut Field>,
    mut particle_query: Query<(&ParticleId, &mut Transform, &MeshMaterial2d<ColorMaterial>)>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    if field.paused {
        return;
    }
    field.step();

    let height = field.bounds.y;
    for (id, mut transform, material) in &mut particle_query {
        let p = &field.particles[id.0];
        transform.translation.x = p.pos.x;
        transform.translation.y = height - p.pos.y;
        if let Some(material) = materials.get_mut(&material.0) {
            // The fade cycle may overshoot [0, 1] by one step; clamp at draw
            // time only.
            material.color.set_alpha(p.opacity.clamp(0.0, 1.0));
        }
    }
}
