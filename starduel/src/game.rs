use bevy::prelude::*;

use crate::collision::step_bullets;
use crate::config::DuelConfig;
use crate::event::EventQueue;
use crate::event::GameEvent;
use crate::event::PlaySound;
use crate::event::SoundCue;
use crate::input::fire_side;
use crate::input::steer;
use crate::outcome::decide_winner;
use crate::outcome::Phase;
use crate::ship::Ship;
use crate::ship::Side;
use crate::weapon;
use crate::weapon::Magazine;

// The whole state of a match, the fixed tick systems are the only thing mutating it and the render
// systems only ever read it.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Match {
    pub yellow: Ship,
    pub red: Ship,
    pub yellow_bullets: Magazine,
    pub red_bullets: Magazine,
    pub phase: Phase,

    // Cleared by a quit request, the app exits at the end of that tick
    pub running: bool,
    pub round: u32,
}

impl Match {
    pub fn new(cfg: &DuelConfig) -> Self {
        Match {
            yellow: Ship::new(Side::Yellow, cfg),
            red: Ship::new(Side::Red, cfg),
            yellow_bullets: Magazine::default(),
            red_bullets: Magazine::default(),
            phase: Phase::Playing,
            running: true,
            round: 1,
        }
    }

    pub fn ship(&self, side: Side) -> &Ship {
        match side {
            Side::Yellow => &self.yellow,
            Side::Red => &self.red,
        }
    }

    pub fn magazine(&self, side: Side) -> &Magazine {
        match side {
            Side::Yellow => &self.yellow_bullets,
            Side::Red => &self.red_bullets,
        }
    }

    pub fn fire(&mut self, side: Side, cfg: &DuelConfig) -> bool {
        match side {
            Side::Yellow => weapon::fire(&self.yellow, &mut self.yellow_bullets, cfg),
            Side::Red => weapon::fire(&self.red, &mut self.red_bullets, cfg),
        }
    }

    // Collision step for both sides, hits land in the queue for the dispatcher
    pub fn step_bullets(&mut self, cfg: &DuelConfig, queue: &mut EventQueue) {
        step_bullets(Side::Yellow, &mut self.yellow_bullets, &self.red, cfg, queue);
        step_bullets(Side::Red, &mut self.red_bullets, &self.yellow, cfg, queue);
    }

    // Apply a single event, returns the sound it should make if any.
    //
    // Once the round is decided only a quit gets through, late key presses and hits are dropped.
    pub fn dispatch(&mut self, event: GameEvent, cfg: &DuelConfig) -> Option<SoundCue> {
        match event {
            GameEvent::Quit => {
                info!("Quit requested, stopping after this tick");
                self.running = false;
                None
            },
            _ if !self.phase.is_playing() => None,
            GameEvent::KeyDown(key) => {
                let side = fire_side(key)?;
                if self.fire(side, cfg) {
                    debug!("{} fired, {} in flight", side.label(), self.magazine(side).len());
                    Some(SoundCue::Fire)
                } else {
                    None
                }
            },
            GameEvent::ShipHit(side) => {
                let ship = match side {
                    Side::Yellow => &mut self.yellow,
                    Side::Red => &mut self.red,
                };
                ship.health.hit();
                debug!("{} hit, health {}", side.label(), ship.health.current);
                Some(SoundCue::Hit)
            },
        }
    }

    // Win check, runs once per tick after the queue is drained.
    //
    // Returns the winner on the tick the round is decided.
    pub fn evaluate(&mut self, cfg: &DuelConfig) -> Option<Side> {
        match self.phase {
            Phase::Playing => {
                let winner = decide_winner(&self.yellow.health, &self.red.health)?;
                info!("Round {} over, {} wins", self.round, winner.label());
                self.phase = Phase::Finished { winner, ticks_left: cfg.banner_ticks };
                Some(winner)
            },
            Phase::Finished { winner, ticks_left } => {
                if ticks_left <= 1 {
                    self.reset(cfg);
                } else {
                    self.phase = Phase::Finished { winner, ticks_left: ticks_left - 1 };
                }
                None
            },
        }
    }

    pub fn steer(&mut self, held: &ButtonInput<KeyCode>, cfg: &DuelConfig) {
        steer(&mut self.yellow, held, cfg);
        steer(&mut self.red, held, cfg);
    }

    // Fresh round in place: full health, no bullets, ships back on their spawn points
    pub fn reset(&mut self, cfg: &DuelConfig) {
        self.yellow.reset(cfg);
        self.red.reset(cfg);
        self.yellow_bullets.clear();
        self.red_bullets.clear();
        self.phase = Phase::Playing;
        self.round += 1;
        info!("Round {} begins", self.round);
    }
}

pub(crate) fn match_in_play(duel: Res<Match>) -> bool {
    duel.phase.is_playing()
}

pub(crate) fn step_physics(
    cfg: Res<DuelConfig>,
    mut duel: ResMut<Match>,
    mut queue: ResMut<EventQueue>,
) {
    duel.step_bullets(&cfg, &mut queue);
}

pub(crate) fn drain_events(
    cfg: Res<DuelConfig>,
    mut duel: ResMut<Match>,
    mut queue: ResMut<EventQueue>,
    mut sounds: EventWriter<PlaySound>,
) {
    for event in queue.drain() {
        if let Some(cue) = duel.dispatch(event, &cfg) {
            sounds.write(PlaySound(cue));
        }
    }
}

pub(crate) fn evaluate_outcome(
    cfg: Res<DuelConfig>,
    mut duel: ResMut<Match>,
) {
    duel.evaluate(&cfg);
}

pub(crate) fn steer_ships(
    cfg: Res<DuelConfig>,
    held: Res<ButtonInput<KeyCode>>,
    mut duel: ResMut<Match>,
) {
    duel.steer(&held, &cfg);
}

pub(crate) fn exit_when_stopped(
    duel: Res<Match>,
    mut exit: EventWriter<AppExit>,
) {
    if !duel.running {
        exit.write(AppExit::Success);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::Bounds;
    use crate::weapon::Bullet;
    use pretty_assertions::assert_eq;

    const YELLOW_FIRE: GameEvent = GameEvent::KeyDown(KeyCode::ControlLeft);
    const RED_FIRE: GameEvent = GameEvent::KeyDown(KeyCode::ControlRight);

    #[test]
    fn test_fire_scenario() {
        let cfg = DuelConfig::default();
        let mut duel = Match::new(&cfg);

        assert_eq!(duel.dispatch(YELLOW_FIRE, &cfg), Some(SoundCue::Fire));
        assert_eq!(duel.yellow_bullets.bullets, vec![Bullet { bounds: Bounds::new(155, 318, 10, 5) }]);

        assert_eq!(duel.dispatch(YELLOW_FIRE, &cfg), Some(SoundCue::Fire));
        assert_eq!(duel.dispatch(YELLOW_FIRE, &cfg), Some(SoundCue::Fire));
        assert_eq!(duel.yellow_bullets.len(), 3);

        // Capped: no bullet and no sound
        assert_eq!(duel.dispatch(YELLOW_FIRE, &cfg), None);
        assert_eq!(duel.yellow_bullets.len(), 3);
        assert!(duel.red_bullets.is_empty());
    }

    #[test]
    fn test_unmapped_keys_are_ignored() {
        let cfg = DuelConfig::default();
        let mut duel = Match::new(&cfg);

        assert_eq!(duel.dispatch(GameEvent::KeyDown(KeyCode::KeyD), &cfg), None);
        assert_eq!(duel.dispatch(GameEvent::KeyDown(KeyCode::Space), &cfg), None);
        assert_eq!(duel, Match::new(&cfg));
    }

    #[test]
    fn test_hit_decrements_once() {
        let cfg = DuelConfig::default();
        let mut duel = Match::new(&cfg);

        assert_eq!(duel.dispatch(GameEvent::ShipHit(Side::Red), &cfg), Some(SoundCue::Hit));
        assert_eq!(duel.dispatch(GameEvent::ShipHit(Side::Red), &cfg), Some(SoundCue::Hit));
        assert_eq!(duel.red.health.current, 8);
        assert_eq!(duel.yellow.health.current, 10);
    }

    #[test]
    fn test_quit_stops_running() {
        let cfg = DuelConfig::default();
        let mut duel = Match::new(&cfg);

        assert_eq!(duel.dispatch(GameEvent::Quit, &cfg), None);
        assert!(!duel.running);
    }

    #[test]
    fn test_finished_drops_input_but_not_quit() {
        let cfg = DuelConfig::default();
        let mut duel = Match::new(&cfg);
        duel.phase = Phase::Finished { winner: Side::Red, ticks_left: 10 };

        assert_eq!(duel.dispatch(RED_FIRE, &cfg), None);
        assert_eq!(duel.dispatch(GameEvent::ShipHit(Side::Yellow), &cfg), None);
        assert!(duel.red_bullets.is_empty());
        assert_eq!(duel.yellow.health.current, 10);

        duel.dispatch(GameEvent::Quit, &cfg);
        assert!(!duel.running);
    }

    #[test]
    fn test_evaluate_holds_then_resets() {
        let cfg = DuelConfig { banner_ticks: 3, ..DuelConfig::default() };
        let mut duel = Match::new(&cfg);
        duel.red.health.current = 0;
        duel.yellow.bounds.x = 200;
        duel.fire(Side::Yellow, &cfg);

        assert_eq!(duel.evaluate(&cfg), Some(Side::Yellow));
        assert_eq!(duel.phase, Phase::Finished { winner: Side::Yellow, ticks_left: 3 });

        assert_eq!(duel.evaluate(&cfg), None);
        assert_eq!(duel.evaluate(&cfg), None);
        assert_eq!(duel.phase, Phase::Finished { winner: Side::Yellow, ticks_left: 1 });

        assert_eq!(duel.evaluate(&cfg), None);
        assert_eq!(duel.phase, Phase::Playing);
        assert_eq!(duel.round, 2);

        let fresh = Match { round: 2, ..Match::new(&cfg) };
        assert_eq!(duel, fresh);
    }

    #[test]
    fn test_both_down_same_tick() {
        let cfg = DuelConfig::default();
        let mut duel = Match::new(&cfg);
        duel.yellow.health.current = 1;
        duel.red.health.current = 1;

        duel.dispatch(GameEvent::ShipHit(Side::Yellow), &cfg);
        duel.dispatch(GameEvent::ShipHit(Side::Red), &cfg);

        assert_eq!(duel.evaluate(&cfg), Some(Side::Yellow));
        assert_eq!(duel.phase.winner(), Some(Side::Yellow));
    }
}
