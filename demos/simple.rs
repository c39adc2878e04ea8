use wormhole_routing::{GridMap, Position, RoutePlanner, RouteRequest, TerrainKind};

// In this example a route is planned on a grid with shape
//  ___
// |S  |
// | # |
// |~ G|
//  ___
// S marks the start
// G marks the goal
// # is blocked and ~ is difficult terrain
fn main() {
    let mut grid = GridMap::new(3, 3, TerrainKind::Open).unwrap();
    grid.set(Position::new(1, 1), TerrainKind::Blocked).unwrap();
    grid.set(Position::new(2, 0), TerrainKind::Difficult).unwrap();
    grid.update();
    let request = RouteRequest::new(&grid)
        .with_start(Position::new(0, 0))
        .with_end(Position::new(2, 2));
    match RoutePlanner::new().plan(&request) {
        Ok(route) => {
            println!("A route with cost {} has been found:", route.cost());
            for p in route.nodes() {
                println!("{}", p);
            }
        }
        Err(err) => println!("{}", err),
    }
}
