//! Static geometry for the demo room.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Marker for everything the demo room spawns.
#[derive(Component)]
pub struct RoomGeometry;

/// Room footprint (square) and wall dimensions.
pub const ROOM_SIZE: f32 = 24.0;
const WALL_HEIGHT: f32 = 3.0;
const WALL_THICKNESS: f32 = 0.5;
const FLOOR_DEPTH: f32 = 0.5;

/// Crate scatter.
const CRATE_COUNT: usize = 14;
const CRATE_SEED: u64 = 18;
/// Keep crates away from the spawn point.
const SPAWN_CLEARANCE: f32 = 3.0;

/// Spawn a solid box with a matching collider.
fn spawn_block(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    material: Handle<StandardMaterial>,
    center: Vec3,
    size: Vec3,
) {
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
        MeshMaterial3d(material),
        Transform::from_translation(center),
        Collider::cuboid(size.x / 2.0, size.y / 2.0, size.z / 2.0),
        RoomGeometry,
    ));
}

/// Floor slab with its top surface at y = 0.
pub fn spawn_floor(commands: &mut Commands, meshes: &mut Assets<Mesh>, material: Handle<StandardMaterial>) {
    spawn_block(
        commands,
        meshes,
        material,
        Vec3::new(0.0, -FLOOR_DEPTH / 2.0, 0.0),
        Vec3::new(ROOM_SIZE, FLOOR_DEPTH, ROOM_SIZE),
    );
}

/// Four walls enclosing the floor.
pub fn spawn_walls(commands: &mut Commands, meshes: &mut Assets<Mesh>, material: Handle<StandardMaterial>) {
    let half = ROOM_SIZE / 2.0;
    let y = WALL_HEIGHT / 2.0;
    let walls = [
        (Vec3::new(0.0, y, -half), Vec3::new(ROOM_SIZE, WALL_HEIGHT, WALL_THICKNESS)),
        (Vec3::new(0.0, y, half), Vec3::new(ROOM_SIZE, WALL_HEIGHT, WALL_THICKNESS)),
        (Vec3::new(-half, y, 0.0), Vec3::new(WALL_THICKNESS, WALL_HEIGHT, ROOM_SIZE)),
        (Vec3::new(half, y, 0.0), Vec3::new(WALL_THICKNESS, WALL_HEIGHT, ROOM_SIZE)),
    ];

    for (center, size) in walls {
        spawn_block(commands, meshes, material.clone(), center, size);
    }
}

/// Placement attempts allowed per requested crate before giving up.
const ATTEMPTS_PER_CRATE: usize = 50;

/// Whether two axis-aligned crates share any floor area.
fn crates_overlap(a: (Vec3, f32), b: (Vec3, f32)) -> bool {
    let reach = (a.1 + b.1) / 2.0;
    (a.0.x - b.0.x).abs() < reach && (a.0.z - b.0.z).abs() < reach
}

/// Deterministic crate layout: `(center, edge length)` for each crate.
///
/// Crates never overlap each other or the spawn point. If the floor is too
/// crowded to fit `count` crates, fewer are returned.
pub fn crate_layout(seed: u64, count: usize) -> Vec<(Vec3, f32)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let reach = ROOM_SIZE / 2.0 - 1.5;
    let mut crates: Vec<(Vec3, f32)> = Vec::with_capacity(count);

    for _ in 0..count * ATTEMPTS_PER_CRATE {
        if crates.len() == count {
            break;
        }

        let x = rng.gen_range(-reach..reach);
        let z = rng.gen_range(-reach..reach);
        let size = rng.gen_range(0.6..1.6);
        let candidate = (Vec3::new(x, size / 2.0, z), size);

        if Vec2::new(x, z).length() < SPAWN_CLEARANCE {
            continue;
        }
        if crates.iter().any(|&placed| crates_overlap(placed, candidate)) {
            continue;
        }
        crates.push(candidate);
    }

    crates
}

/// Scatter crates across the floor.
pub fn spawn_crates(commands: &mut Commands, meshes: &mut Assets<Mesh>, material: Handle<StandardMaterial>) {
    for (center, size) in crate_layout(CRATE_SEED, CRATE_COUNT) {
        spawn_block(commands, meshes, material.clone(), center, Vec3::splat(size));
    }
}
