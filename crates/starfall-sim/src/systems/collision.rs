//! Collision detection between projectiles, pickups, and ships.
//!
//! Which pairs collide, and with which geometric test, is decided by one
//! symmetric table so all collision rules live in one place. This system
//! only detects overlaps; the combat system resolves them.

use hecs::{Entity, World};

use starfall_core::components::{Body, Bullet, Enemy, Player, PowerUp};
use starfall_core::enums::BulletOwner;
use starfall_core::types::{Position, Shape};

/// Collision layer of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Player,
    Enemy,
    PlayerShot,
    EnemyShot,
    PowerUp,
}

/// Geometric test applied to a (first, second) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTest {
    /// Circle against a rect approximated as a circle of half its width,
    /// centered on the rect.
    CircleVsHalfWidth,
    /// Circle center strictly inside the rect.
    PointInRect,
    /// Strict axis-aligned rect overlap.
    RectOverlap,
}

/// Which pair of layers met.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    BulletEnemy,
    EnemyBulletPlayer,
    PowerUpPlayer,
}

/// Layer pairs that interact. Order within a row is the canonical
/// (first, second) order used by `HitTest`.
const COLLISION_TABLE: &[(Layer, Layer, HitTest, ContactKind)] = &[
    (Layer::PlayerShot, Layer::Enemy, HitTest::CircleVsHalfWidth, ContactKind::BulletEnemy),
    (Layer::EnemyShot, Layer::Player, HitTest::PointInRect, ContactKind::EnemyBulletPlayer),
    (Layer::PowerUp, Layer::Player, HitTest::RectOverlap, ContactKind::PowerUpPlayer),
];

/// A detected overlap. `first` is the projectile or pickup, `second` the ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub kind: ContactKind,
    pub first: Entity,
    pub second: Entity,
}

/// Look up the rule for a pair of layers in either order.
/// The flag is `true` when the operands must be swapped to match the table.
pub fn rule_for(a: Layer, b: Layer) -> Option<(HitTest, ContactKind, bool)> {
    COLLISION_TABLE.iter().find_map(|&(first, second, test, kind)| {
        if (a, b) == (first, second) {
            Some((test, kind, false))
        } else if (b, a) == (first, second) {
            Some((test, kind, true))
        } else {
            None
        }
    })
}

/// Whether two bodies on the given layers are touching. Symmetric in its
/// arguments; pairs with no rule never collide.
pub fn collides(a: (Layer, &Position, &Shape), b: (Layer, &Position, &Shape)) -> bool {
    match rule_for(a.0, b.0) {
        Some((test, _, false)) => hit_test(test, (a.1, a.2), (b.1, b.2)),
        Some((test, _, true)) => hit_test(test, (b.1, b.2), (a.1, a.2)),
        None => false,
    }
}

fn hit_test(test: HitTest, first: (&Position, &Shape), second: (&Position, &Shape)) -> bool {
    let (first_pos, first_shape) = first;
    let (second_pos, second_shape) = second;

    match test {
        HitTest::CircleVsHalfWidth => {
            let half_width = second_shape.width() / 2.0;
            let center = second_shape.center(second_pos);
            first_pos.distance_to(&center) < radius_of(first_shape) + half_width
        }
        HitTest::PointInRect => {
            first_pos.x > second_pos.x
                && first_pos.x < second_pos.x + second_shape.width()
                && first_pos.y > second_pos.y
                && first_pos.y < second_pos.y + second_shape.height()
        }
        HitTest::RectOverlap => {
            first_pos.x < second_pos.x + second_shape.width()
                && first_pos.x + first_shape.width() > second_pos.x
                && first_pos.y < second_pos.y + second_shape.height()
                && first_pos.y + first_shape.height() > second_pos.y
        }
    }
}

fn radius_of(shape: &Shape) -> f32 {
    match *shape {
        Shape::Circle { radius } => radius,
        Shape::Rect { width, .. } => width / 2.0,
    }
}

struct Collider {
    entity: Entity,
    layer: Layer,
    pos: Position,
    shape: Shape,
}

/// Detect every overlapping live pair the table cares about.
///
/// Contacts are ordered by projectile creation, then target creation, so the
/// combat system can resolve them deterministically.
pub fn run(world: &World) -> Vec<Contact> {
    let bullets = colliders::<Bullet>(world, |world, entity| {
        world.get::<&Bullet>(entity).map_or(Layer::EnemyShot, |b| match b.owner {
            BulletOwner::Player => Layer::PlayerShot,
            BulletOwner::Enemy => Layer::EnemyShot,
        })
    });
    let power_ups = colliders::<PowerUp>(world, |_, _| Layer::PowerUp);
    let enemies = colliders::<Enemy>(world, |_, _| Layer::Enemy);
    let players = colliders::<Player>(world, |_, _| Layer::Player);

    let mut contacts = Vec::new();
    for projectile in bullets.iter().chain(power_ups.iter()) {
        for target in enemies.iter().chain(players.iter()) {
            let Some((_, kind, _)) = rule_for(projectile.layer, target.layer) else {
                continue;
            };
            if collides(
                (projectile.layer, &projectile.pos, &projectile.shape),
                (target.layer, &target.pos, &target.shape),
            ) {
                contacts.push(Contact {
                    kind,
                    first: projectile.entity,
                    second: target.entity,
                });
            }
        }
    }
    contacts
}

/// Power-up pickups only. Used after combat to catch drops that landed on
/// the ship during the same tick.
pub fn pickup_contacts(world: &World) -> Vec<Contact> {
    run(world)
        .into_iter()
        .filter(|contact| contact.kind == ContactKind::PowerUpPlayer)
        .collect()
}

fn colliders<C: hecs::Component>(world: &World, layer_of: impl Fn(&World, Entity) -> Layer) -> Vec<Collider> {
    super::live_in_spawn_order::<C>(world)
        .into_iter()
        .filter_map(|entity| {
            let pos = *world.get::<&Position>(entity).ok()?;
            let shape = world.get::<&Body>(entity).ok()?.shape;
            Some(Collider {
                entity,
                layer: layer_of(world, entity),
                pos,
                shape,
            })
        })
        .collect()
}
