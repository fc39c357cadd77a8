use grid_astar_sectors::{EditCommand, Level, LevelConfig, Point};

// In this example a path is found on a level with shape
// .....
// .S...
// ..#..
// ...E.
// .....
// S marks the start
// E marks the end
fn main() {
    let mut level = Level::new(LevelConfig {
        width: 5,
        height: 5,
        allow_diagonal_move: true,
        ..LevelConfig::default()
    });
    level.apply(EditCommand::PlaceStart, Point::new(1, 1));
    level.apply(EditCommand::PlaceFinish, Point::new(3, 3));
    level.apply(EditCommand::AddWall, Point::new(2, 2));
    let frame = level.tick();
    if frame.reached_goal {
        println!("A path has been found using the {} heuristic:", frame.heuristic);
        for p in frame.path.iter().rev() {
            println!("{:?}", p);
        }
        println!("{}", level.grid());
    }
}
