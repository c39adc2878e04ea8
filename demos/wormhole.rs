use wormhole_routing::{Board, Brush, Position, RoutePlanner};

// In this example the goal lies behind a wall and can only be reached through the wormhole
// E marks the entrance and X the exit
fn main() {
    let mut board: Board = "
        S..#...
        ...#...
        .E.#.X.
        ...#...
        ...#..G
    "
    .parse()
    .unwrap();
    let mut planner = RoutePlanner::new();
    let route = board.plan(&mut planner).unwrap();
    println!("{}", board.render_route(&route));

    // Opening the wall makes the direct route available again, but the wormhole is still shorter
    board.paint(Position::new(4, 3), Brush::Open).unwrap();
    let route = board.plan(&mut planner).unwrap();
    println!("{}", board.render_route(&route));

    // Without any exits the long way round is all that is left
    board.paint(Position::new(2, 5), Brush::Open).unwrap();
    match board.plan(&mut planner) {
        Ok(route) => println!("{}", board.render_route(&route)),
        Err(err) => println!("{}", err),
    }
}
