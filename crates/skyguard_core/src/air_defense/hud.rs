//! HUD layout and board palette

use skyguard_math::Vec2;

pub const LED_CENTER: Vec2 = Vec2::new(-0.85, 0.85);
pub const LED_BACKGROUND_RADIUS: f32 = 0.045;
pub const LED_BULB_RADIUS: f32 = 0.02;

pub const DRONE_ICON_RADIUS: f32 = 0.02;
const DRONE_ICON_ORIGIN: Vec2 = Vec2::new(0.7, -0.8);
const DRONE_ICON_SPACING: f32 = 0.04;

pub const LED_BACKGROUND_COLOR: [f32; 3] = [0.3, 0.2, 0.2];
pub const LED_ALERT_COLOR: [f32; 3] = [1.0, 0.0, 0.0];
pub const LED_CLEAR_COLOR: [f32; 3] = [0.0, 1.0, 0.0];
pub const BASE_COLOR: [f32; 3] = [0.0, 1.0, 0.0];
pub const DRONE_ICON_COLOR: [f32; 3] = [0.0, 1.0, 0.0];
pub const CITY_COLOR: [f32; 3] = [0.0, 0.0, 0.0];
pub const DRONE_COLOR: [f32; 3] = [0.0, 0.0, 1.0];

/// Red while any helicopter is still flying, green once the sky is clear
pub fn led_color(helicopters_remaining: usize) -> [f32; 3] {
    if helicopters_remaining > 0 {
        LED_ALERT_COLOR
    } else {
        LED_CLEAR_COLOR
    }
}

/// One icon per drone still available, in a row from the bottom right
pub fn drone_icon_centers(drones_left: u32) -> impl Iterator<Item = Vec2> {
    (0..drones_left).map(|i| {
        DRONE_ICON_ORIGIN + Vec2::new(DRONE_ICON_SPACING * i as f32, 0.0)
    })
}
