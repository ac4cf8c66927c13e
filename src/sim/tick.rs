//! Per-frame simulation step

use super::collision::resolve;
use super::state::World;

/// Advance the world by `dt` seconds: free flight, then wall response
///
/// Returns how many hexagon edges the ball bounced off this frame.
pub fn tick(world: &mut World, dt: f32) -> usize {
    world.ball.update(dt);
    let contacts = resolve(&mut world.ball, world.hexagon.vertices());

    world.frame += 1;
    world.bounces += contacts as u64;
    contacts
}
