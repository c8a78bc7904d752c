//! Walk controller.
//!
//! Turns the heading's movement flags into a per-tick velocity. Diagonal
//! movement is scaled by 1/sqrt(2) so its magnitude equals the
//! axis-aligned walk speed.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::heading::Heading;
use crate::components::inputcontrolled::InputControlled;
use crate::components::rigidbody::RigidBody;

/// Velocity for one tick of walking, in pixels.
pub fn walk_velocity(heading: &Heading, speed: f32) -> Vector2 {
    let mut velocity = Vector2 { x: 0.0, y: 0.0 };

    if heading.up {
        velocity.y -= speed;
    }
    if heading.down {
        velocity.y += speed;
    }
    if heading.right {
        velocity.x += speed;
    }
    if heading.left {
        velocity.x -= speed;
    }

    // Normalize diagonal movement
    if velocity.x != 0.0 && velocity.y != 0.0 {
        velocity.x *= std::f32::consts::FRAC_1_SQRT_2;
        velocity.y *= std::f32::consts::FRAC_1_SQRT_2;
    }

    velocity
}

/// Update each walker's velocity from its heading.
pub fn walk_controller(mut query: Query<(&Heading, &InputControlled, &mut RigidBody)>) {
    for (heading, controlled, mut rigidbody) in query.iter_mut() {
        rigidbody.velocity = walk_velocity(heading, controlled.speed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::animation::Animation;
    use crate::components::heading::Direction;
    use crate::components::mapposition::MapPosition;
    use crate::components::sprite::Sprite;
    use crate::resources::worldtime::WorldTime;
    use crate::systems::animation::animate;
    use crate::systems::movement::movement;
    use bevy_ecs::system::RunSystemOnce;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_single_axis_velocity() {
        let mut heading = Heading::default();
        heading.press(Direction::Right);
        let velocity = walk_velocity(&heading, 2.0);
        assert!(approx_eq(velocity.x, 2.0));
        assert!(approx_eq(velocity.y, 0.0));
    }

    #[test]
    fn test_idle_velocity_is_zero() {
        let heading = Heading::default();
        let velocity = walk_velocity(&heading, 2.0);
        assert!(approx_eq(velocity.x, 0.0));
        assert!(approx_eq(velocity.y, 0.0));
    }

    #[test]
    fn test_diagonal_speed_matches_axis_speed() {
        let mut heading = Heading::default();
        heading.press(Direction::Up);
        heading.press(Direction::Right);
        let velocity = walk_velocity(&heading, 2.0);
        assert!(approx_eq(velocity.x, 2.0 * std::f32::consts::FRAC_1_SQRT_2));
        assert!(approx_eq(velocity.y, -2.0 * std::f32::consts::FRAC_1_SQRT_2));

        let magnitude = (velocity.x * velocity.x + velocity.y * velocity.y).sqrt();
        assert!(approx_eq(magnitude, 2.0));
    }

    #[test]
    fn test_opposed_keys_cancel_per_axis() {
        let mut heading = Heading::default();
        heading.press(Direction::Up);
        heading.press(Direction::Down);
        let velocity = walk_velocity(&heading, 2.0);
        // Per-axis exclusivity already cleared "up".
        assert!(approx_eq(velocity.y, 2.0));
        assert!(approx_eq(velocity.x, 0.0));
    }

    #[test]
    fn test_one_tick_end_to_end() {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        let entity = world
            .spawn((
                MapPosition::new(0.0, 0.0),
                Heading::default(),
                RigidBody::new(),
                InputControlled::new(2.0),
                Sprite {
                    sheet_key: "player".to_string(),
                    row: 0,
                    flip_h: false,
                },
                Animation::new(6, 125),
            ))
            .id();

        let tick = |world: &mut World| {
            world.run_system_once(animate).expect("animate runs");
            world
                .run_system_once(walk_controller)
                .expect("controller runs");
            world.run_system_once(movement).expect("movement runs");
        };

        // Start idle facing down: row 0.
        tick(&mut world);
        assert_eq!(world.get::<Sprite>(entity).expect("sprite").row, 0);

        // Press right, one tick at speed 2: walk row 4, no flip, at (2, 0).
        world
            .get_mut::<Heading>(entity)
            .expect("heading")
            .press(Direction::Right);
        tick(&mut world);
        let sprite = world.get::<Sprite>(entity).expect("sprite");
        assert_eq!(sprite.row, 4);
        assert!(!sprite.flip_h);
        let position = world.get::<MapPosition>(entity).expect("position");
        assert!(approx_eq(position.x, 2.0));
        assert!(approx_eq(position.y, 0.0));

        // Release right: idle row of the right-facing pose, position
        // unchanged.
        world
            .get_mut::<Heading>(entity)
            .expect("heading")
            .release(Direction::Right);
        tick(&mut world);
        assert_eq!(world.get::<Sprite>(entity).expect("sprite").row, 1);
        let position = world.get::<MapPosition>(entity).expect("position");
        assert!(approx_eq(position.x, 2.0));
        assert!(approx_eq(position.y, 0.0));
    }
}
