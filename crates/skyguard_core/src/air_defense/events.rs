//! Game phases and the events reported for each state change

use std::fmt;

use skyguard_math::Vec2;

use super::HelicopterKey;

/// Overall game outcome
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    Running,
    /// Every helicopter was destroyed
    Victory,
    /// The city was breached, or the drones ran out first
    Defeat,
}

impl GamePhase {
    pub fn is_over(self) -> bool {
        self != GamePhase::Running
    }
}

/// Something that changed during a command or a tick
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GameEvent {
    DroneLaunched,
    DroneRecalled,
    DroneDetonated { at: Vec2 },
    /// The drone left the screen
    DroneLost { at: Vec2 },
    HelicopterDestroyed { key: HelicopterKey, at: Vec2 },
    CityBreached { by: HelicopterKey },
    MapToggled { visible: bool },
    PhaseChanged(GamePhase),
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::DroneLaunched => write!(f, "drone launched"),
            GameEvent::DroneRecalled => write!(f, "drone recalled to base"),
            GameEvent::DroneDetonated { at } => {
                write!(f, "drone detonated at ({:.2}, {:.2})", at.x, at.y)
            }
            GameEvent::DroneLost { at } => {
                write!(f, "drone lost off-screen at ({:.2}, {:.2})", at.x, at.y)
            }
            GameEvent::HelicopterDestroyed { key, at } => {
                write!(f, "helicopter {:?} destroyed at ({:.2}, {:.2})", key, at.x, at.y)
            }
            GameEvent::CityBreached { by } => write!(f, "city breached by helicopter {:?}", by),
            GameEvent::MapToggled { visible } => {
                write!(f, "map {}", if *visible { "shown" } else { "hidden" })
            }
            GameEvent::PhaseChanged(phase) => write!(f, "game phase: {:?}", phase),
        }
    }
}
