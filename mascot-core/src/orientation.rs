/// Heading of the 3D model while it travels across the page
use crate::config::OrientationConfig;
use crate::geometry::Vector;

/// Rotation around three axes (in radians)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Orientation {
    pub pitch: f64,
    pub yaw: f64,
    pub roll: f64,
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

impl Orientation {
    pub fn new(pitch: f64, yaw: f64, roll: f64) -> Self {
        Self { pitch, yaw, roll }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn lerp_towards(&mut self, target: &Orientation, t: f64) {
        self.pitch = lerp(self.pitch, target.pitch, t);
        self.yaw = lerp(self.yaw, target.yaw, t);
        self.roll = lerp(self.roll, target.roll, t);
    }

    /// Ease towards facing `delta` (screen space, y down)
    pub fn face_towards(&mut self, delta: &Vector, config: &OrientationConfig) {
        if delta.x == 0.0 && delta.y == 0.0 {
            return;
        }
        let yaw = delta.x.atan2(delta.y);
        let target = Orientation::new(
            delta.y * config.tilt_factor,
            yaw,
            yaw.sin() * config.roll_factor,
        );
        self.lerp_towards(&target, config.lerp_speed);
    }

    /// Ease pitch and roll back to level, keeping the heading
    pub fn settle(&mut self, config: &OrientationConfig) {
        self.pitch = lerp(self.pitch, 0.0, config.lerp_speed);
        self.roll = lerp(self.roll, 0.0, config.lerp_speed);
    }
}
