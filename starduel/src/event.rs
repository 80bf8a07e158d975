use std::collections::VecDeque;

use bevy::prelude::*;

use crate::ship::Side;

// Everything that can happen to a match within a tick.
//
// Input polling pushes Quit/KeyDown, the collision step pushes ShipHit, and the dispatcher drains
// the whole lot once per tick in the order they were pushed.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum GameEvent {
    Quit,
    KeyDown(KeyCode),
    ShipHit(Side),
}

// Strict FIFO, deliberately not a bevy `Events<T>` since those are double buffered and we want
// each tick to start with an empty queue
#[derive(Resource, Debug, Default)]
pub struct EventQueue(VecDeque<GameEvent>);

impl EventQueue {
    pub fn push(&mut self, event: GameEvent) {
        self.0.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn drain(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.0.drain(..)
    }
}

impl Extend<GameEvent> for EventQueue {
    fn extend<T: IntoIterator<Item = GameEvent>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SoundCue {
    Fire,
    Hit,
}

// Side effects leaving the simulation, consumed by the audio plugin if there is one
#[derive(Event, Debug, PartialEq, Eq, Clone, Copy)]
pub struct PlaySound(pub SoundCue);

#[test]
fn test_queue_is_fifo() {
    let mut queue = EventQueue::default();
    queue.push(GameEvent::KeyDown(KeyCode::ControlLeft));
    queue.push(GameEvent::ShipHit(Side::Red));
    queue.push(GameEvent::Quit);

    let drained: Vec<_> = queue.drain().collect();
    assert_eq!(drained, vec![
        GameEvent::KeyDown(KeyCode::ControlLeft),
        GameEvent::ShipHit(Side::Red),
        GameEvent::Quit,
    ]);
    assert!(queue.is_empty());
}
