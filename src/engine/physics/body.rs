use glam::Vec2;
use rapier2d::prelude::*;

use super::world::PhysicsWorld;

pub use rapier2d::prelude::{ColliderHandle, RigidBodyHandle};

/// A body the character controller can move directly
///
/// The controller never applies forces; it asks for a target position each
/// physics step or tells the body to hold still.
pub trait KinematicBody {
    /// Current world position
    fn position(&self) -> Vec2;

    /// Move to `target` by the end of the current physics step
    fn move_position(&mut self, target: Vec2);

    /// Stop any motion and stay where the body is
    fn stop(&mut self);
}

/// Mutable view of one rigid body in a [`PhysicsWorld`]
pub struct BodyMut<'w> {
    world: &'w mut PhysicsWorld,
    handle: RigidBodyHandle,
}

impl<'w> BodyMut<'w> {
    pub fn new(world: &'w mut PhysicsWorld, handle: RigidBodyHandle) -> Self {
        Self { world, handle }
    }
}

impl KinematicBody for BodyMut<'_> {
    fn position(&self) -> Vec2 {
        self.world
            .get_rigid_body(self.handle)
            .map(|body| {
                let pos = body.translation();
                Vec2::new(pos.x, pos.y)
            })
            .unwrap_or(Vec2::ZERO)
    }

    fn move_position(&mut self, target: Vec2) {
        if let Some(body) = self.world.get_rigid_body_mut(self.handle) {
            body.set_next_kinematic_translation(vector![target.x, target.y]);
        }
    }

    fn stop(&mut self) {
        if let Some(body) = self.world.get_rigid_body_mut(self.handle) {
            let current = *body.translation();
            body.set_next_kinematic_translation(current);
            body.set_linvel(vector![0.0, 0.0], true);
        }
    }
}

/// Common rigid body configurations for game objects
pub mod presets {
    use super::*;

    /// Kinematic, rotation-locked body for the swordsman
    pub fn swordman_body(x: Real, y: Real) -> RigidBody {
        RigidBodyBuilder::kinematic_position_based()
            .translation(vector![x, y])
            .lock_rotations()
            .can_sleep(false) // Players should never sleep
            .build()
    }

    /// Capsule collider sized to the character sprite
    pub fn swordman_collider(width: Real, height: Real) -> Collider {
        let radius = width / 2.0;
        let half_height = ((height / 2.0) - radius).max(0.0);

        ColliderBuilder::capsule_y(half_height, radius)
            .friction(0.0)
            .restitution(0.0)
            .build()
    }

    /// Static wall or prop
    pub fn obstacle(x: Real, y: Real, width: Real, height: Real) -> (RigidBody, Collider) {
        let body = RigidBodyBuilder::fixed().translation(vector![x, y]).build();
        let collider = ColliderBuilder::cuboid(width / 2.0, height / 2.0)
            .friction(0.3)
            .build();
        (body, collider)
    }
}
