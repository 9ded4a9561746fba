//! Movement domain: components and physics layers for locomotion.

use std::time::Duration;

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::ControllerTuning;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Walkable geometry (floors, platforms)
    Ground,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Mutually exclusive speed selection, derived from the controller flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MovementMode {
    #[default]
    Walk,
    Run,
    Sprint,
    Crouch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn flipped(self) -> Self {
        match self {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        }
    }
}

/// Anchor of the downward ground probe, relative to the entity translation.
#[derive(Component, Debug, Clone, Copy)]
pub struct GroundCheck {
    pub anchor: Vec2,
}

impl Default for GroundCheck {
    fn default() -> Self {
        Self {
            anchor: Vec2::new(0.0, -1.0),
        }
    }
}

/// Transient controller state for one character.
///
/// Input handlers flip the flags, the frame systems read them. The pending
/// sprint upgrade lives here as a timer so it is dropped together with the
/// component.
#[derive(Component, Debug, Default)]
pub struct MovementController {
    /// Last reported analog direction, replaced wholesale on every Move event
    pub move_input: Vec2,
    pub crouched: bool,
    pub running: bool,
    pub sprinting: bool,
    pub grounded: bool,
    pub facing: Facing,
    /// Armed on Sprint press, disarmed on release or upgrade
    pub sprint_charge: Option<Timer>,
}

impl MovementController {
    /// Current mode. Crouch wins over sprint, sprint over run, run over walk.
    pub fn mode(&self) -> MovementMode {
        if self.crouched {
            MovementMode::Crouch
        } else if self.sprinting {
            MovementMode::Sprint
        } else if self.running {
            MovementMode::Run
        } else {
            MovementMode::Walk
        }
    }

    pub fn set_move_input(&mut self, value: Vec2) {
        self.move_input = value;
    }

    pub fn clear_move_input(&mut self) {
        self.move_input = Vec2::ZERO;
    }

    pub fn start_crouch(&mut self) {
        self.crouched = true;
    }

    pub fn stop_crouch(&mut self) {
        self.crouched = false;
    }

    /// Enter Run right away and (re)arm the sprint upgrade.
    pub fn start_sprint(&mut self, delay: Duration) {
        self.running = true;
        self.sprinting = false;
        self.sprint_charge = Some(Timer::new(delay, TimerMode::Once));
    }

    /// Back to Walk; a pending upgrade is discarded.
    pub fn stop_sprint(&mut self) {
        self.running = false;
        self.sprinting = false;
        self.sprint_charge = None;
    }

    pub fn sprint_pending(&self) -> bool {
        self.sprint_charge.is_some()
    }

    /// Advance the pending upgrade. Returns `true` on the frame the
    /// upgrade to Sprint happens.
    ///
    /// When the delay elapses the charge is consumed either way; the upgrade
    /// only applies if the Sprint action is still held.
    pub fn tick_sprint_charge(&mut self, delta: Duration, sprint_held: bool) -> bool {
        let Some(charge) = self.sprint_charge.as_mut() else {
            return false;
        };

        charge.tick(delta);
        if !charge.remaining().is_zero() {
            return false;
        }

        self.sprint_charge = None;
        if sprint_held && self.running {
            self.sprinting = true;
            return true;
        }
        false
    }

    /// Vertical launch if grounded. Horizontal velocity is left alone.
    pub fn try_jump(&self, velocity: &mut Vec2, tuning: &ControllerTuning) -> bool {
        if !self.grounded {
            return false;
        }
        velocity.y = tuning.jump_force;
        true
    }

    /// Horizontal velocity for this frame, zero inside the deadzone.
    pub fn horizontal_velocity(&self, tuning: &ControllerTuning) -> f32 {
        let direction = self.move_input.x;
        if direction.abs() > tuning.deadzone {
            direction * tuning.speed_for(self.mode())
        } else {
            0.0
        }
    }

    /// Turn towards the horizontal input direction. Returns `true` only when
    /// the sign of `direction` disagrees with the current facing.
    pub fn face_towards(&mut self, direction: f32) -> bool {
        let should_flip = match self.facing {
            Facing::Right => direction < 0.0,
            Facing::Left => direction > 0.0,
        };
        if should_flip {
            self.facing = self.facing.flipped();
        }
        should_flip
    }
}
