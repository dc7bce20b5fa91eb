//! Demo-mode input
//!
//! Steers the player toward the middle of the next gap. Good enough to keep
//! an attract screen alive; not meant to be unbeatable.

use super::obstacle::ObstacleKind;
use super::state::Session;

/// Dead zone around the target line
const MARGIN: f32 = 10.0;

/// y the autopilot aims the player's center at
pub fn target_y(session: &Session) -> f32 {
    let player_x = session.player.x();
    session
        .obstacles
        .iter()
        .find(|o| o.kind == ObstacleKind::TopBarrier && o.entity.right() >= player_x)
        .map(|top| top.bounds().max.y + session.config.gap_height / 2.0)
        .unwrap_or(session.config.playfield_height / 2.0)
}

/// Whether to jump this tick
pub fn wants_jump(session: &Session) -> bool {
    if !session.is_playing() {
        return false;
    }
    let player = &session.player;
    let target = target_y(session);
    let next_center = player.bounds().min.y + player.entity.size.y / 2.0 + player.velocity;

    if player.is_inverted() {
        // Jumping pushes downward; only when drifting up past the line
        player.velocity <= 0.0 && next_center < target - MARGIN
    } else {
        player.velocity >= 0.0 && next_center > target + MARGIN
    }
}
