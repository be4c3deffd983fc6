//! The animated Ferris wheel.
//!
//! The wheel turns in the XY plane around its hub. Cabins hang from the rim and
//! never rotate with it, so a camera riding in one stays level.

use std::f32::consts::TAU;

use cgmath::{Matrix4, Point3, Rad, Vector3};

use crate::config::WheelConfig;

/// How far a cabin's center hangs below its attachment point on the rim.
const CABIN_DROP: f32 = 0.6;
const CABIN_SIZE: f32 = 0.8;
const SPOKE_THICKNESS: f32 = 0.12;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FerrisWheel {
    hub: Point3<f32>,
    radius: f32,
    cabins: u32,
    /// Current rotation in radians, kept in `[0, TAU)`.
    angle: f32,
    angular_speed: f32,
    max_speed: f32,
    spinning: bool,
    reversed: bool,
}

impl FerrisWheel {
    pub fn new(hub: Point3<f32>, config: &WheelConfig) -> Self {
        let max_speed = config.max_speed.max(0.0);
        Self {
            hub,
            radius: config.radius,
            cabins: config.cabins.max(1),
            angle: 0.0,
            angular_speed: config.angular_speed.clamp(0.0, max_speed),
            max_speed,
            spinning: true,
            reversed: false,
        }
    }

    pub fn hub(&self) -> Point3<f32> {
        self.hub
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn cabin_count(&self) -> u32 {
        self.cabins
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn angular_speed(&self) -> f32 {
        self.angular_speed
    }

    pub fn is_spinning(&self) -> bool {
        self.spinning
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    pub fn advance(&mut self, dt: f32) {
        if !self.spinning {
            return;
        }
        let direction = if self.reversed { -1.0 } else { 1.0 };
        self.angle = (self.angle + direction * self.angular_speed * dt).rem_euclid(TAU);
    }

    /// Starts or stops the wheel and returns whether it now spins.
    pub fn toggle_spin(&mut self) -> bool {
        self.spinning = !self.spinning;
        self.spinning
    }

    /// Reverses the direction of travel and returns whether it is now reversed.
    pub fn reverse(&mut self) -> bool {
        self.reversed = !self.reversed;
        self.reversed
    }

    pub fn speed_up(&mut self, delta: f32) {
        self.angular_speed = (self.angular_speed + delta).clamp(0.0, self.max_speed);
    }

    pub fn slow_down(&mut self, delta: f32) {
        self.angular_speed = (self.angular_speed - delta).clamp(0.0, self.max_speed);
    }

    /// Angle of the rim point that spoke and cabin `index` attach to.
    fn attachment_angle(&self, index: u32) -> f32 {
        self.angle + TAU * index as f32 / self.cabins as f32
    }

    fn rim_point(&self, index: u32) -> Point3<f32> {
        let theta = self.attachment_angle(index);
        self.hub + Vector3::new(self.radius * theta.cos(), self.radius * theta.sin(), 0.0)
    }

    /// Center of cabin `index`, hanging below its rim attachment.
    pub fn cabin_position(&self, index: u32) -> Point3<f32> {
        self.rim_point(index) - Vector3::new(0.0, CABIN_DROP, 0.0)
    }

    /// Model matrix for cabin `index`. Translation only: cabins stay upright.
    pub fn cabin_transform(&self, index: u32) -> Matrix4<f32> {
        let p = self.cabin_position(index);
        Matrix4::from_translation(Vector3::new(p.x, p.y, p.z)) * Matrix4::from_scale(CABIN_SIZE)
    }

    /// Model matrix stretching a unit cube from the hub to rim point `index`.
    pub fn spoke_transform(&self, index: u32) -> Matrix4<f32> {
        let theta = self.attachment_angle(index);
        let mid = self.hub + Vector3::new(theta.cos(), theta.sin(), 0.0) * (self.radius * 0.5);
        Matrix4::from_translation(Vector3::new(mid.x, mid.y, mid.z))
            * Matrix4::from_angle_z(Rad(theta))
            * Matrix4::from_nonuniform_scale(self.radius, SPOKE_THICKNESS, SPOKE_THICKNESS)
    }

    /// Model matrix for the axle block at the hub.
    pub fn hub_transform(&self) -> Matrix4<f32> {
        Matrix4::from_translation(Vector3::new(self.hub.x, self.hub.y, self.hub.z))
            * Matrix4::from_angle_z(Rad(self.angle))
            * Matrix4::from_nonuniform_scale(0.6, 0.6, 1.0)
    }
}
