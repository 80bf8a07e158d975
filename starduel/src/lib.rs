use bevy::input::keyboard::KeyboardInput;
use bevy::prelude::*;
use bevy::window::WindowCloseRequested;

pub mod arena;
pub mod assets;
pub mod audio;
pub mod collision;
pub mod config;
pub mod event;
pub mod game;
pub mod health;
pub mod input;
pub mod math;
pub mod outcome;
pub mod render;
pub mod ship;
pub mod weapon;

use crate::config::DuelConfig;
use crate::event::EventQueue;
use crate::event::PlaySound;
use crate::game::Match;

// Order of operations for a single fixed tick. Each set depends on the one before it finishing in
// the same tick, so hits are applied and the win check sees them without a 1 tick delay.
#[derive(SystemSet, Debug, Hash, Eq, PartialEq, Clone)]
pub enum FixedGameSystem {
    // Platform keyboard/window events into the event queue
    Input,

    // Bullets move, hits get queued
    Physics,

    // Drain the queue: firing, health, quit
    Events,

    // Win check, banner countdown and reset
    Outcome,

    // Held keys move the ships
    Movement,
}

// The simulation half of the game, no window, rendering or audio required.
//
// Uses the `DuelConfig` resource if one was inserted before this plugin, otherwise the default.
pub struct DuelSimPlugin;
impl Plugin for DuelSimPlugin {
    fn build(&self, app: &mut App) {
        let cfg = app.world().get_resource::<DuelConfig>().cloned().unwrap_or_default();

        app.insert_resource(Time::<Fixed>::from_hz(cfg.tick_hz))
            .insert_resource(Match::new(&cfg))
            .insert_resource(cfg)
            .init_resource::<EventQueue>()
            .init_resource::<ButtonInput<KeyCode>>()
            .add_event::<KeyboardInput>()
            .add_event::<WindowCloseRequested>()
            .add_event::<PlaySound>()
            .add_event::<AppExit>()
            .configure_sets(FixedUpdate, (
                FixedGameSystem::Input,
                FixedGameSystem::Physics,
                FixedGameSystem::Events,
                FixedGameSystem::Outcome,
                FixedGameSystem::Movement,
            ).chain())
            .add_systems(FixedUpdate, (
                input::poll_input.in_set(FixedGameSystem::Input),
                game::step_physics
                    .in_set(FixedGameSystem::Physics)
                    .run_if(game::match_in_play),
                game::drain_events.in_set(FixedGameSystem::Events),
                game::evaluate_outcome.in_set(FixedGameSystem::Outcome),
                game::steer_ships
                    .in_set(FixedGameSystem::Movement)
                    .run_if(game::match_in_play),
                game::exit_when_stopped.after(FixedGameSystem::Movement),
            ));

        info!("Round 1 begins");
    }
}
