use grid_astar_sectors::{EditCommand, Level, Point};

// Paints a few walls on the default 128x72 level, upgrades them to full sectors and shows which
// quadtree sectors the resulting path runs through.
fn main() {
    let mut level = Level::default();
    level.apply(EditCommand::PlaceStart, Point::new(2, 2));
    level.apply(EditCommand::PlaceFinish, Point::new(125, 69));
    for p in [Point::new(40, 20), Point::new(70, 40), Point::new(100, 60)] {
        level.apply(EditCommand::AddWall, p);
    }
    level.apply(EditCommand::ToggleSectorFill, Point::new(0, 0));

    let frame = level.tick();
    println!(
        "{} path cells, {} walls, {} quadtree nodes, search took {:?}",
        frame.path.len(),
        level.grid().count(grid_astar_sectors::CellKind::Wall),
        level.grid().quadtree().node_count(),
        frame.last_search_duration
    );
    for (id, region) in &frame.highlighted_sectors {
        println!("sector {} at ({}, {}) size {}x{}", id.index(), region.x, region.y, region.w, region.h);
    }
}
