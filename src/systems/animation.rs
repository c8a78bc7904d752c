//! Animation system.
//!
//! Per tick, in order: refresh the idle flag from the movement keys,
//! resolve the animation row and mirroring from the facing direction, then
//! advance the frame clock. A frame only advances when strictly more than
//! the configured delay has elapsed since the previous advance.

use bevy_ecs::prelude::*;

use crate::components::animation::Animation;
use crate::components::heading::Heading;
use crate::components::sprite::Sprite;
use crate::resources::worldtime::WorldTime;

/// Resolve idle state, animation row and frame for every animated walker.
pub fn animate(
    mut query: Query<(&mut Heading, &mut Sprite, &mut Animation)>,
    time: Res<WorldTime>,
) {
    let now_ms = time.elapsed_millis();
    for (mut heading, mut sprite, mut animation) in query.iter_mut() {
        heading.refresh_idle();

        let anim = heading.facing.anim();
        sprite.row = if heading.idle {
            anim.idle_row
        } else {
            anim.walk_row
        };
        sprite.flip_h = anim.flip_h;

        animation.advance(now_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::heading::Direction;
    use bevy_ecs::system::RunSystemOnce;

    fn spawn_walker(world: &mut World) -> Entity {
        world
            .spawn((
                Heading::default(),
                Sprite {
                    sheet_key: "player".to_string(),
                    row: 0,
                    flip_h: false,
                },
                Animation::new(6, 125),
            ))
            .id()
    }

    #[test]
    fn test_idle_resolves_to_idle_row() {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        let entity = spawn_walker(&mut world);

        world.run_system_once(animate).expect("system runs");

        let sprite = world.get::<Sprite>(entity).expect("sprite present");
        assert_eq!(sprite.row, 0);
        assert!(!sprite.flip_h);
        assert!(world.get::<Heading>(entity).expect("heading present").idle);
    }

    #[test]
    fn test_walking_resolves_to_walk_row() {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        let entity = spawn_walker(&mut world);

        world
            .get_mut::<Heading>(entity)
            .expect("heading present")
            .press(Direction::Left);
        world.run_system_once(animate).expect("system runs");

        let sprite = world.get::<Sprite>(entity).expect("sprite present");
        assert_eq!(sprite.row, 4);
        assert!(sprite.flip_h);
        assert!(!world.get::<Heading>(entity).expect("heading present").idle);
    }

    #[test]
    fn test_idle_keeps_facing_row() {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        let entity = spawn_walker(&mut world);

        {
            let mut heading = world.get_mut::<Heading>(entity).expect("heading present");
            heading.press(Direction::Up);
            heading.release(Direction::Up);
        }
        world.run_system_once(animate).expect("system runs");

        // Released keys: idle row of the last facing, not of the default.
        let sprite = world.get::<Sprite>(entity).expect("sprite present");
        assert_eq!(sprite.row, 2);
    }

    #[test]
    fn test_frame_advances_with_the_clock() {
        let mut world = World::new();
        world.insert_resource(WorldTime {
            elapsed: 0.130,
            delta: 0.016,
        });
        let entity = spawn_walker(&mut world);

        world.run_system_once(animate).expect("system runs");
        assert_eq!(
            world
                .get::<Animation>(entity)
                .expect("animation present")
                .frame_index,
            1
        );
    }
}
