// Swordman controller and entity

use glam::Vec2;

use crate::engine::input::InputSnapshot;
use crate::engine::physics::{presets, BodyMut, KinematicBody, PhysicsWorld, RigidBodyHandle};

use super::animation::{params, AnimationSink, BlendParameters, BlendProjection};
use super::motion::ActorMotionState;
use super::state::{ActionArbiter, ActionMode, ModeTransition};
use super::stats::SwordmanStats;

/// Top-down character controller
///
/// Call [`on_frame`](Self::on_frame) once per logical frame and
/// [`on_physics_step`](Self::on_physics_step) once per fixed physics step.
/// `take_damage` and `die` may be called at any time.
#[derive(Debug)]
pub struct SwordmanController<A = BlendParameters> {
    stats: SwordmanStats,
    motion: ActorMotionState,
    arbiter: ActionArbiter,
    health: i32,
    /// Animation blender input; without one, state still updates
    animator: Option<A>,
}

impl<A: AnimationSink> SwordmanController<A> {
    pub fn new(stats: SwordmanStats, animator: Option<A>) -> Self {
        let mut controller = Self {
            health: stats.max_health,
            stats,
            motion: ActorMotionState::new(),
            arbiter: ActionArbiter::new(),
            animator,
        };

        // Idle pose facing the default direction
        controller.project();
        controller
    }

    /// Logical frame: run state timers, then sample input if free
    pub fn on_frame(&mut self, input: &InputSnapshot, dt: f32) {
        if let Some(transition) = self.arbiter.update(dt) {
            self.on_transition(transition);
        }

        if !self.arbiter.mode().can_move() {
            self.motion.halt();
            return;
        }

        self.motion.sample(input);

        if input.attack_pressed && self.attack() {
            return;
        }

        self.project();
    }

    /// Physics step: move the body along the current intent
    pub fn on_physics_step(&mut self, dt: f32, body: &mut impl KinematicBody) {
        if !self.arbiter.mode().can_move() {
            body.stop();
            return;
        }

        let speed = self.stats.speed(self.motion.is_running());
        let target = body.position() + self.motion.velocity_intent() * speed * dt;
        body.move_position(target);
    }

    /// Start an attack in the current facing. Returns false if not free
    pub fn attack(&mut self) -> bool {
        let Some(transition) = self.arbiter.try_attack(self.stats.attack_duration) else {
            return false;
        };

        self.motion.halt();
        self.on_transition(transition);
        true
    }

    /// Apply a hit
    ///
    /// Ignored while already hurt or dead. Health reaching zero kills the
    /// character.
    pub fn take_damage(&mut self, amount: i32) {
        let Some(transition) = self.arbiter.try_hurt(self.stats.hurt_duration) else {
            return;
        };

        self.health = (self.health - amount.max(0)).max(0);
        self.motion.halt();
        self.on_transition(transition);

        if self.health == 0 {
            self.die();
        }
    }

    /// Kill the character. Further input and damage are ignored
    pub fn die(&mut self) {
        let Some(transition) = self.arbiter.kill() else {
            return;
        };

        self.motion.halt();
        self.on_transition(transition);
        log::info!("Swordman died");
    }

    fn project(&mut self) {
        if let Some(animator) = self.animator.as_mut() {
            BlendProjection::from_motion(&self.motion).apply(animator);
        }
    }

    fn on_transition(&mut self, transition: ModeTransition) {
        let Some(animator) = self.animator.as_mut() else {
            return;
        };

        if transition.from == ActionMode::Attacking {
            animator.set_bool(params::IS_ATTACKING, false);
        }

        match transition.to {
            ActionMode::Attacking => {
                let facing = self.motion.facing();
                animator.set_bool(params::IS_ATTACKING, true);
                animator.set_float(params::HORIZONTAL, facing.x);
                animator.set_float(params::VERTICAL, facing.y);
            }
            ActionMode::Hurt => animator.set_trigger(params::TAKE_DAMAGE),
            ActionMode::Dead => animator.set_trigger(params::DEATH),
            ActionMode::Free => {}
        }
    }

    /// Get the current mode
    pub fn mode(&self) -> ActionMode {
        self.arbiter.mode()
    }

    /// Get the state machine
    pub fn arbiter(&self) -> &ActionArbiter {
        &self.arbiter
    }

    /// Get the movement state
    pub fn motion(&self) -> &ActorMotionState {
        &self.motion
    }

    pub fn facing(&self) -> Vec2 {
        self.motion.facing()
    }

    pub fn velocity_intent(&self) -> Vec2 {
        self.motion.velocity_intent()
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    /// Check if character is alive
    pub fn is_alive(&self) -> bool {
        !self.arbiter.mode().is_terminal()
    }

    pub fn stats(&self) -> &SwordmanStats {
        &self.stats
    }

    pub fn animator(&self) -> Option<&A> {
        self.animator.as_ref()
    }

    pub fn animator_mut(&mut self) -> Option<&mut A> {
        self.animator.as_mut()
    }
}

/// The player's swordsman: controller plus its body in the physics world
#[derive(Debug)]
pub struct Swordman {
    /// Handle to the character's rigid body in the physics world
    pub body_handle: RigidBodyHandle,
    pub controller: SwordmanController,
}

impl Swordman {
    /// Create a swordsman and add its body to the physics world
    pub fn spawn(stats: SwordmanStats, physics: &mut PhysicsWorld, spawn: Vec2) -> Self {
        let body_handle = physics.add_rigid_body(presets::swordman_body(spawn.x, spawn.y));
        physics.add_collider(
            presets::swordman_collider(stats.width, stats.height),
            body_handle,
        );

        Self {
            body_handle,
            controller: SwordmanController::new(stats, Some(BlendParameters::new())),
        }
    }

    /// Run the controller's physics step against this swordsman's body
    pub fn physics_step(&mut self, physics: &mut PhysicsWorld, dt: f32) {
        let mut body = BodyMut::new(physics, self.body_handle);
        self.controller.on_physics_step(dt, &mut body);
    }

    /// Get the swordsman's current position
    pub fn position(&self, physics: &PhysicsWorld) -> Option<Vec2> {
        physics.get_rigid_body(self.body_handle).map(|body| {
            let pos = body.translation();
            Vec2::new(pos.x, pos.y)
        })
    }

    /// Blend parameters for the renderer
    pub fn animation(&self) -> Option<&BlendParameters> {
        self.controller.animator()
    }
}
