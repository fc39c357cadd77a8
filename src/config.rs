/// Construction settings of a [Level](crate::level::Level) and its [Grid](crate::grid::Grid).
///
/// The defaults describe a 1280×720 window drawn with 10 pixel cells: a 128×72 grid whose
/// quadtree bottoms out at depth 3, giving 16×9 cell sectors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelConfig {
    /// Grid width in cells.
    pub width: usize,
    /// Grid height in cells.
    pub height: usize,
    /// Deepest quadtree level; sectors are the regions at this depth.
    pub max_depth: u32,
    /// Objects a quadtree node holds before it subdivides.
    pub node_capacity: usize,
    pub allow_diagonal_move: bool,
    /// Initial state of the visited node overlay, also restored on reset.
    pub show_visited_nodes: bool,
    /// Initial state of the sector highlight overlay, also restored on reset.
    pub show_visited_sectors: bool,
}

impl Default for LevelConfig {
    fn default() -> LevelConfig {
        LevelConfig {
            width: 128,
            height: 72,
            max_depth: 3,
            node_capacity: 4,
            allow_diagonal_move: false,
            show_visited_nodes: false,
            show_visited_sectors: true,
        }
    }
}

impl LevelConfig {
    /// Cells a search may expand before giving up; every cell at most once.
    pub fn max_expansions(&self) -> usize {
        self.width * self.height
    }
}
