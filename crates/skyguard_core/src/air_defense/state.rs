//! Game state and rules

use rand::rngs::StdRng;
use rand::SeedableRng;
use slotmap::SlotMap;

use skyguard_math::Vec2;
use skyguard_physics::{circles_collide, steer_towards, Bounds2D, Circle, CollisionFilter};

use super::entities::{Drone, DroneState, Helicopter, HelicopterKey};
use super::events::{GameEvent, GamePhase};
use super::spawn::spawn_point;
use super::AirDefenseConfig;

/// One game of air defense
///
/// Commands (`toggle_launch`, `detonate`, `set_map_visible`) and `update`
/// each report what changed as [`GameEvent`]s. Once the phase leaves
/// [`GamePhase::Running`], commands and ticks are ignored until
/// [`AirDefense::restart`].
pub struct AirDefense {
    config: AirDefenseConfig,
    rng: StdRng,
    screen: Bounds2D,
    city_filter: CollisionFilter,

    drone: Drone,
    helicopters: SlotMap<HelicopterKey, Helicopter>,
    drones_left: u32,
    helicopters_destroyed: u32,
    city_breached: bool,
    map_visible: bool,
    phase: GamePhase,
    elapsed: f32,
}

impl Default for AirDefense {
    fn default() -> Self {
        Self::new(AirDefenseConfig::default())
    }
}

impl AirDefense {
    /// Create a game and spawn its helicopters
    pub fn new(config: AirDefenseConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut game = Self {
            drone: Drone::docked(config.base.center, config.drone_radius),
            helicopters: SlotMap::with_key(),
            drones_left: config.drone_count,
            helicopters_destroyed: 0,
            city_breached: false,
            map_visible: true,
            phase: GamePhase::Running,
            elapsed: 0.0,
            screen: Bounds2D::screen(),
            city_filter: CollisionFilter::city(),
            rng,
            config,
        };
        game.spawn_fleet();
        game
    }

    /// Start a fresh game with the same config
    ///
    /// The RNG is not reseeded, so a seeded game restarts with new spawn
    /// points drawn from the same sequence.
    pub fn restart(&mut self) {
        self.drone = Drone::docked(self.config.base.center, self.config.drone_radius);
        self.drones_left = self.config.drone_count;
        self.helicopters_destroyed = 0;
        self.city_breached = false;
        self.phase = GamePhase::Running;
        self.elapsed = 0.0;
        self.spawn_fleet();
        log::info!(
            "Air defense restarted: {} helicopters, {} drones",
            self.helicopters.len(),
            self.drones_left
        );
    }

    fn spawn_fleet(&mut self) {
        self.helicopters.clear();
        for _ in 0..self.config.helicopter_count {
            let position = spawn_point(&mut self.rng);
            self.helicopters
                .insert(Helicopter::new(position, self.config.helicopter_radius));
        }
    }

    // --- Accessors ---

    pub fn config(&self) -> &AirDefenseConfig {
        &self.config
    }

    pub fn drone(&self) -> &Drone {
        &self.drone
    }

    pub fn helicopter(&self, key: HelicopterKey) -> Option<&Helicopter> {
        self.helicopters.get(key)
    }

    /// Iterate over live helicopters
    pub fn helicopters(&self) -> impl Iterator<Item = (HelicopterKey, &Helicopter)> {
        self.helicopters.iter()
    }

    pub fn helicopters_remaining(&self) -> usize {
        self.helicopters.len()
    }

    pub fn helicopters_destroyed(&self) -> u32 {
        self.helicopters_destroyed
    }

    pub fn drones_left(&self) -> u32 {
        self.drones_left
    }

    pub fn city(&self) -> Circle {
        self.config.city
    }

    pub fn base(&self) -> Circle {
        self.config.base
    }

    pub fn city_breached(&self) -> bool {
        self.city_breached
    }

    pub fn map_visible(&self) -> bool {
        self.map_visible
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Seconds of play since the game started
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Move a helicopter directly (for tests and scripted setups)
    pub fn place_helicopter(&mut self, key: HelicopterKey, position: Vec2) -> bool {
        match self.helicopters.get_mut(key) {
            Some(h) => {
                h.position = position;
                true
            }
            None => false,
        }
    }

    // --- Commands ---

    /// Launch a docked drone, or recall an airborne one at no cost
    pub fn toggle_launch(&mut self) -> Option<GameEvent> {
        if self.phase.is_over() {
            return None;
        }

        match self.drone.state {
            DroneState::Docked if self.drones_left > 0 => {
                self.drone.launch(self.config.base.center);
                Some(GameEvent::DroneLaunched)
            }
            DroneState::Docked => None,
            DroneState::Airborne => {
                self.drone.dock(self.config.base.center);
                Some(GameEvent::DroneRecalled)
            }
        }
    }

    /// Blow up the airborne drone, spending it
    ///
    /// Returns the detonation plus a phase change if that was the last drone.
    pub fn detonate(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.phase.is_over() || !self.drone.is_airborne() {
            return events;
        }

        events.push(GameEvent::DroneDetonated { at: self.drone.position });
        self.spend_drone();
        self.evaluate_phase(&mut events);
        events
    }

    /// Show or hide the map backdrop
    pub fn set_map_visible(&mut self, visible: bool) -> Option<GameEvent> {
        if self.map_visible == visible {
            return None;
        }
        self.map_visible = visible;
        Some(GameEvent::MapToggled { visible })
    }

    // --- Simulation ---

    /// Advance the game by `dt` seconds
    ///
    /// `thrust` is the drone's steering input, each axis in -1.0..=1.0.
    pub fn update(&mut self, dt: f32, thrust: Vec2) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.phase.is_over() {
            return events;
        }

        self.elapsed += dt;

        if self.drone.is_airborne() {
            self.drone.position += thrust * (self.config.drone_speed * dt);
            if self.screen.is_outside(self.drone.position) {
                events.push(GameEvent::DroneLost { at: self.drone.position });
                self.spend_drone();
            }
        }

        let city = self.config.city.center;
        let step = self.config.helicopter_speed * dt;
        for (_, heli) in self.helicopters.iter_mut() {
            heli.position = steer_towards(heli.position, city, step);
        }

        self.resolve_drone_hits(&mut events);
        self.resolve_city_breaches(&mut events);
        self.evaluate_phase(&mut events);

        events
    }

    fn spend_drone(&mut self) {
        self.drones_left = self.drones_left.saturating_sub(1);
        self.drone.dock(self.config.base.center);
    }

    /// The drone takes out at most one helicopter per tick
    fn resolve_drone_hits(&mut self, events: &mut Vec<GameEvent>) {
        if !self.drone.is_airborne() {
            return;
        }

        let drone = self.drone.collider();
        let hit = self.helicopters.iter().find_map(|(key, heli)| {
            (self.drone.filter.collides_with(&heli.filter)
                && circles_collide(&drone, &heli.collider()))
            .then_some(key)
        });

        if let Some(key) = hit {
            if let Some(heli) = self.helicopters.remove(key) {
                events.push(GameEvent::HelicopterDestroyed { key, at: heli.position });
                self.helicopters_destroyed += 1;
                self.spend_drone();
            }
        }
    }

    fn resolve_city_breaches(&mut self, events: &mut Vec<GameEvent>) {
        let city = self.config.city;
        for (key, heli) in self.helicopters.iter() {
            if heli.filter.collides_with(&self.city_filter) && circles_collide(&heli.collider(), &city) {
                if !self.city_breached {
                    events.push(GameEvent::CityBreached { by: key });
                }
                self.city_breached = true;
            }
        }
    }

    fn evaluate_phase(&mut self, events: &mut Vec<GameEvent>) {
        let phase = if self.helicopters.is_empty() {
            GamePhase::Victory
        } else if self.city_breached
            || (self.drones_left == 0 && !self.drone.is_airborne())
        {
            GamePhase::Defeat
        } else {
            GamePhase::Running
        };

        if phase != self.phase {
            self.phase = phase;
            events.push(GameEvent::PhaseChanged(phase));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> AirDefense {
        AirDefense::new(AirDefenseConfig::default().with_seed(1))
    }

    fn first_key(game: &AirDefense) -> HelicopterKey {
        game.helicopters().next().map(|(k, _)| k).unwrap()
    }

    /// Park every helicopter far from the city and the drone
    fn park_fleet(game: &mut AirDefense) {
        let keys: Vec<_> = game.helicopters().map(|(k, _)| k).collect();
        for (i, key) in keys.into_iter().enumerate() {
            game.place_helicopter(key, Vec2::new(-0.9, 0.9 - 0.1 * i as f32));
        }
    }

    #[test]
    fn test_new_game() {
        let game = seeded();
        assert_eq!(game.helicopters_remaining(), 5);
        assert_eq!(game.drones_left(), 7);
        assert_eq!(game.phase(), GamePhase::Running);
        assert_eq!(game.drone().state, DroneState::Docked);
        assert_eq!(game.drone().position, Vec2::new(0.0, -0.45));
        assert!(game.map_visible());
    }

    #[test]
    fn test_same_seed_same_spawns() {
        let a: Vec<Vec2> = seeded().helicopters().map(|(_, h)| h.position).collect();
        let b: Vec<Vec2> = seeded().helicopters().map(|(_, h)| h.position).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_launch_and_recall_are_free() {
        let mut game = seeded();
        assert_eq!(game.toggle_launch(), Some(GameEvent::DroneLaunched));
        assert!(game.drone().is_airborne());
        assert_eq!(game.toggle_launch(), Some(GameEvent::DroneRecalled));
        assert!(!game.drone().is_airborne());
        assert_eq!(game.drones_left(), 7);
    }

    #[test]
    fn test_detonate_requires_airborne_drone() {
        let mut game = seeded();
        assert!(game.detonate().is_empty());
        assert_eq!(game.drones_left(), 7);

        game.toggle_launch();
        let events = game.detonate();
        assert!(matches!(events[0], GameEvent::DroneDetonated { .. }));
        assert_eq!(game.drones_left(), 6);
        assert_eq!(game.drone().position, game.base().center);
    }

    #[test]
    fn test_drone_moves_with_thrust() {
        let mut game = seeded();
        park_fleet(&mut game);
        game.toggle_launch();
        game.update(0.5, Vec2::new(1.0, 0.0));
        let pos = game.drone().position;
        assert!((pos.x - 0.3).abs() < 1e-5);
        assert!((pos.y - (-0.45)).abs() < 1e-5);
    }

    #[test]
    fn test_docked_drone_ignores_thrust() {
        let mut game = seeded();
        park_fleet(&mut game);
        game.update(0.5, Vec2::new(1.0, 1.0));
        assert_eq!(game.drone().position, game.base().center);
    }

    #[test]
    fn test_drone_leaving_screen_is_lost() {
        let mut game = seeded();
        park_fleet(&mut game);
        game.toggle_launch();
        let events = game.update(3.0, Vec2::new(0.0, -1.0));
        assert!(events.iter().any(|e| matches!(e, GameEvent::DroneLost { .. })));
        assert_eq!(game.drones_left(), 6);
        assert!(!game.drone().is_airborne());
    }

    #[test]
    fn test_collision_destroys_helicopter_and_spends_drone() {
        let mut game = seeded();
        park_fleet(&mut game);
        let target = first_key(&game);
        game.place_helicopter(target, Vec2::new(0.0, -0.45));
        game.toggle_launch();

        let events = game.update(0.0, Vec2::ZERO);
        assert!(events
            .iter()
            .any(|e| matches!(e, GameEvent::HelicopterDestroyed { key, .. } if *key == target)));
        assert!(game.helicopter(target).is_none());
        assert_eq!(game.helicopters_destroyed(), 1);
        assert_eq!(game.helicopters_remaining(), 4);
        assert_eq!(game.drones_left(), 6);
        assert!(!game.drone().is_airborne());
    }

    #[test]
    fn test_docked_drone_cannot_collide() {
        let mut game = seeded();
        park_fleet(&mut game);
        let key = first_key(&game);
        game.place_helicopter(key, Vec2::new(0.0, -0.45));
        game.update(0.0, Vec2::ZERO);
        assert_eq!(game.helicopters_remaining(), 5);
    }

    #[test]
    fn test_helicopters_close_on_city() {
        let mut game = seeded();
        let city = game.city().center;
        let before: Vec<f32> = game.helicopters().map(|(_, h)| h.position.distance(city)).collect();
        game.update(0.1, Vec2::ZERO);
        let after: Vec<f32> = game.helicopters().map(|(_, h)| h.position.distance(city)).collect();
        for (b, a) in before.iter().zip(&after) {
            assert!(a < b);
        }
    }

    #[test]
    fn test_breach_ends_in_defeat_and_freezes() {
        let mut game = seeded();
        park_fleet(&mut game);
        let key = first_key(&game);
        game.place_helicopter(key, game.city().center);

        let events = game.update(0.016, Vec2::ZERO);
        assert!(events.contains(&GameEvent::CityBreached { by: key }));
        assert!(events.contains(&GameEvent::PhaseChanged(GamePhase::Defeat)));
        assert!(game.city_breached());

        let elapsed = game.elapsed();
        assert!(game.update(1.0, Vec2::ZERO).is_empty());
        assert_eq!(game.elapsed(), elapsed);
        assert_eq!(game.toggle_launch(), None);
    }

    #[test]
    fn test_running_out_of_drones_is_defeat() {
        let mut config = AirDefenseConfig::default().with_seed(9);
        config.drone_count = 1;
        let mut game = AirDefense::new(config);
        park_fleet(&mut game);

        game.toggle_launch();
        let events = game.detonate();
        assert_eq!(game.drones_left(), 0);
        assert!(events.contains(&GameEvent::PhaseChanged(GamePhase::Defeat)));
    }

    #[test]
    fn test_map_toggle_reports_changes_only() {
        let mut game = seeded();
        assert_eq!(game.set_map_visible(true), None);
        assert_eq!(game.set_map_visible(false), Some(GameEvent::MapToggled { visible: false }));
        assert!(!game.map_visible());
    }

    #[test]
    fn test_restart_resets_counters() {
        let mut game = seeded();
        game.toggle_launch();
        game.detonate();
        game.update(0.5, Vec2::ZERO);
        game.restart();

        assert_eq!(game.drones_left(), 7);
        assert_eq!(game.helicopters_remaining(), 5);
        assert_eq!(game.helicopters_destroyed(), 0);
        assert_eq!(game.elapsed(), 0.0);
        assert_eq!(game.phase(), GamePhase::Running);
    }
}
