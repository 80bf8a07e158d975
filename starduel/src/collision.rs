use crate::config::DuelConfig;
use crate::event::EventQueue;
use crate::event::GameEvent;
use crate::ship::Ship;
use crate::ship::Side;
use crate::weapon::Magazine;

// Advance one side's bullets by a tick and resolve what they ran into.
//
// - Overlapping the opposing ship: emit a hit for it and consume the bullet
// - Leading edge past the left/right arena edge: drop it quietly
// - Otherwise it carries on to the next tick
//
// Survivors are collected into a fresh list rather than removed in place, so nothing is skipped or
// visited twice. Health is not touched here, that's the dispatcher's job.
pub fn step_bullets(
    shooter: Side,
    magazine: &mut Magazine,
    target: &Ship,
    cfg: &DuelConfig,
    queue: &mut EventQueue,
) {
    let velocity = cfg.bullet_speed * shooter.heading();
    let arena = cfg.arena();

    let bullets = std::mem::take(&mut magazine.bullets);
    magazine.bullets = bullets
        .into_iter()
        .filter_map(|mut bullet| {
            bullet.bounds.x += velocity;

            if target.bounds.overlaps(&bullet.bounds) {
                queue.push(GameEvent::ShipHit(target.side));
                return None;
            }

            let edge = bullet.leading_edge(shooter);
            if edge > arena.right() || edge < arena.x {
                return None;
            }

            Some(bullet)
        })
        .collect();
}
