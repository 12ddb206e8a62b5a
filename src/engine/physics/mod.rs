// Physics system using rapier2d

pub mod body;
mod world;

pub use body::{presets, BodyMut, KinematicBody, RigidBodyHandle};
pub use world::PhysicsWorld;
