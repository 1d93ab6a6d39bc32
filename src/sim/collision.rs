//! Collision detection and response
//!
//! All bodies are axis-aligned boxes. Zombies never leave the ground, so the
//! zombie contact policies pair a horizontal overlap test with a "same ground
//! line" test. Removal is mark-then-compact: nothing is spliced out of a
//! collection while it is being scanned.

use super::state::{Block, Bullet, Direction, Survivor, Zombie};
use crate::consts::{GAME_HEIGHT, GAME_WIDTH};
use crate::same_line;

/// Horizontal extent of a box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub left: f32,
    pub right: f32,
}

impl Span {
    pub fn new(left: f32, width: f32) -> Self {
        Self {
            left,
            right: left + width,
        }
    }

    /// Open-interval overlap (touching edges do not collide)
    #[inline]
    pub fn overlaps(&self, other: &Span) -> bool {
        self.left < other.right && self.right > other.left
    }
}

impl Zombie {
    pub fn span(&self) -> Span {
        Span::new(self.pos.x, self.width)
    }
}

impl Block {
    pub fn span(&self) -> Span {
        Span::new(self.pos.x, self.width)
    }
}

impl Bullet {
    pub fn span(&self) -> Span {
        Span::new(self.pos.x, self.width)
    }
}

impl Survivor {
    pub fn span(&self) -> Span {
        Span::new(self.left(), self.width)
    }
}

/// Zombie foot line touches the bottom of a block it walks through
pub fn zombie_touches_block(zombie: &Zombie, block: &Block) -> bool {
    zombie.span().overlaps(&block.span()) && same_line(zombie.pos.y, block.bottom())
}

/// Zombie stands next to the survivor on the same ground line
pub fn zombie_touches_survivor(zombie: &Zombie, survivor: &Survivor) -> bool {
    zombie.span().overlaps(&survivor.span()) && same_line(zombie.pos.y, survivor.pos.y)
}

/// Bullet box overlaps the zombie body (which extends upward from its feet)
pub fn bullet_hits_zombie(bullet: &Bullet, zombie: &Zombie) -> bool {
    bullet.span().overlaps(&zombie.span())
        && bullet.pos.y < zombie.pos.y
        && bullet.pos.y + bullet.height > zombie.pos.y - zombie.height
}

/// Bullet fell through the floor or left either side (the sky is open)
pub fn bullet_out_of_bounds(bullet: &Bullet) -> bool {
    bullet.pos.y > GAME_HEIGHT || bullet.pos.x > GAME_WIDTH || bullet.pos.x < 0.0
}

/// Damage every block a zombie is chewing through
///
/// Each zombie in contact removes one health per call. Blocks that reach zero
/// stop taking damage and are compacted out after the scan.
/// Returns the number of blocks destroyed.
pub fn resolve_block_contacts(zombies: &[Zombie], blocks: &mut Vec<Block>) -> usize {
    let mut destroyed = 0;
    for zombie in zombies {
        for block in blocks.iter_mut().filter(|b| b.health > 0) {
            if zombie_touches_block(zombie, block) {
                block.health -= 1;
                if block.health <= 0 {
                    destroyed += 1;
                }
            }
        }
    }
    blocks.retain(|b| b.health > 0);
    destroyed
}

/// Number of zombies currently in contact with the survivor
pub fn survivor_contacts(zombies: &[Zombie], survivor: &Survivor) -> usize {
    zombies
        .iter()
        .filter(|z| zombie_touches_survivor(z, survivor))
        .count()
}

/// Pair bullets with the first live zombie they overlap
///
/// A bullet kills at most one zombie and a zombie can only be killed once.
/// Both are removed after the scan. Returns the number of kills.
pub fn resolve_bullet_hits(bullets: &mut Vec<Bullet>, zombies: &mut Vec<Zombie>) -> usize {
    let mut zombie_dead = vec![false; zombies.len()];
    let mut bullet_spent = vec![false; bullets.len()];
    let mut kills = 0;

    for (bi, bullet) in bullets.iter().enumerate() {
        let hit = zombies
            .iter()
            .enumerate()
            .find(|(zi, z)| !zombie_dead[*zi] && bullet_hits_zombie(bullet, z))
            .map(|(zi, _)| zi);

        if let Some(zi) = hit {
            zombie_dead[zi] = true;
            bullet_spent[bi] = true;
            kills += 1;
        }
    }

    let mut dead = zombie_dead.iter();
    zombies.retain(|_| !dead.next().copied().unwrap_or(false));
    let mut spent = bullet_spent.iter();
    bullets.retain(|_| !spent.next().copied().unwrap_or(false));

    kills
}

/// Drop bullets that have left the playfield
pub fn cull_bullets(bullets: &mut Vec<Bullet>) {
    bullets.retain(|b| !bullet_out_of_bounds(b));
}

/// Whether the survivor may take one step in `direction` this tick
///
/// The playfield edges and bottom-row blocks both stop movement.
pub fn can_move(survivor: &Survivor, blocks: &[Block], direction: Direction) -> bool {
    let x = survivor.pos.x;
    let step = survivor.speed;
    let half = survivor.width / 2.0;

    let in_field = match direction {
        Direction::Left => x > half,
        Direction::Right => x < GAME_WIDTH - half,
    };
    if !in_field {
        return false;
    }

    !blocks.iter().filter(|b| b.on_ground()).any(|b| match direction {
        Direction::Left => x - step <= b.pos.x + b.width && x > b.pos.x,
        Direction::Right => x + step >= b.pos.x && x < b.pos.x + b.width,
    })
}
