use gridwalk_core::{Command, Direction, Event, TileCoord};
use gridwalk_system_movement::Movement;
use gridwalk_world::{self as world, query, TileGrid, World};

const MAP: &str = "xxxxx\nxp  x\nx   x\nx   x\nxxxxx\n";

fn boot() -> World {
    let grid = TileGrid::parse(MAP, 5, 5).expect("parse map");
    World::new(grid, 'p').expect("spawn marker present")
}

fn hold(world: &mut World, direction: Direction) {
    let mut events = Vec::new();
    world::apply(world, Command::HoldDirection { direction }, &mut events);
}

fn release(world: &mut World, direction: Direction) {
    let mut events = Vec::new();
    world::apply(world, Command::ReleaseDirection { direction }, &mut events);
}

fn pump_tick(world: &mut World, movement: &mut Movement) -> Vec<Event> {
    let mut events = Vec::new();
    world::apply(world, Command::Tick, &mut events);

    let mut commands = Vec::new();
    movement.handle(
        &events,
        query::player_position(world),
        query::intent(world),
        query::tile_grid(world),
        &mut commands,
    );
    for command in commands {
        world::apply(world, command, &mut events);
    }

    events
}

#[test]
fn held_intent_moves_the_player_each_tick() {
    let mut world = boot();
    let mut movement = Movement::default();

    hold(&mut world, Direction::Right);

    let events = pump_tick(&mut world, &mut movement);
    assert_eq!(query::player_position(&world), TileCoord::new(2, 1));
    assert!(events.contains(&Event::PlayerMoved {
        from: TileCoord::new(1, 1),
        to: TileCoord::new(2, 1),
    }));

    let _ = pump_tick(&mut world, &mut movement);
    assert_eq!(query::player_position(&world), TileCoord::new(3, 1));
}

#[test]
fn walls_hold_the_player_in_place() {
    let mut world = boot();
    let mut movement = Movement::default();

    hold(&mut world, Direction::Up);
    let events = pump_tick(&mut world, &mut movement);

    assert_eq!(query::player_position(&world), TileCoord::new(1, 1));
    assert!(!events
        .iter()
        .any(|event| matches!(event, Event::PlayerMoved { .. })));
}

#[test]
fn released_intent_stops_the_player() {
    let mut world = boot();
    let mut movement = Movement::default();

    hold(&mut world, Direction::Down);
    let _ = pump_tick(&mut world, &mut movement);
    assert_eq!(query::player_position(&world), TileCoord::new(1, 2));

    release(&mut world, Direction::Down);
    let events = pump_tick(&mut world, &mut movement);

    assert_eq!(query::player_position(&world), TileCoord::new(1, 2));
    assert!(!events
        .iter()
        .any(|event| matches!(event, Event::PlayerMoved { .. })));
}

#[test]
fn diagonal_intent_moves_both_axes_in_one_tick() {
    let mut world = boot();
    let mut movement = Movement::default();

    hold(&mut world, Direction::Right);
    hold(&mut world, Direction::Down);
    let _ = pump_tick(&mut world, &mut movement);

    assert_eq!(query::player_position(&world), TileCoord::new(2, 2));
}

#[test]
fn repeated_ticks_against_a_wall_never_move_the_player() {
    let mut world = boot();
    let mut movement = Movement::default();

    hold(&mut world, Direction::Right);
    for _ in 0..4 {
        let _ = pump_tick(&mut world, &mut movement);
    }

    // Two free tiles to the right of the spawn, then the border wall.
    assert_eq!(query::player_position(&world), TileCoord::new(3, 1));
}

#[test]
fn position_stays_in_bounds_under_sustained_diagonal_intent() {
    let mut world = boot();
    let mut movement = Movement::default();

    hold(&mut world, Direction::Left);
    hold(&mut world, Direction::Up);
    for _ in 0..6 {
        let _ = pump_tick(&mut world, &mut movement);
        let position = query::player_position(&world);
        assert!(position.column() < 5);
        assert!(position.row() < 5);
    }
}
