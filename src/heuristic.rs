use crate::{C, D, E};
use core::fmt;
use grid_util::point::Point;

/// Distance estimate guiding the search toward the finish. Values are in the same integer units
/// as step costs ([C] for a straight step, [D] for a diagonal one).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Heuristic {
    #[default]
    Euclidean,
    Manhattan,
    /// Octile distance: as many diagonal steps as possible, then straight.
    Diagonal,
}

impl Heuristic {
    pub const ALL: [Heuristic; 3] = [
        Heuristic::Euclidean,
        Heuristic::Manhattan,
        Heuristic::Diagonal,
    ];

    /// The heuristic following this one, wrapping around after the last.
    pub fn next(self) -> Heuristic {
        match self {
            Heuristic::Euclidean => Heuristic::Manhattan,
            Heuristic::Manhattan => Heuristic::Diagonal,
            Heuristic::Diagonal => Heuristic::Euclidean,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Heuristic::Euclidean => "Euclidean",
            Heuristic::Manhattan => "Manhattan",
            Heuristic::Diagonal => "Diagonal",
        }
    }

    pub fn estimate(self, p1: &Point, p2: &Point) -> i32 {
        let delta_x = (p1.x - p2.x).abs();
        let delta_y = (p1.y - p2.y).abs();
        match self {
            // Scaled by D / sqrt(2) rather than C so a pure diagonal never overestimates D. The
            // square is kept integral so the floor is exact.
            Heuristic::Euclidean => {
                let squared = (delta_x as i64).pow(2) + (delta_y as i64).pow(2);
                let scaled = squared * (D * D / 2) as i64;
                (scaled as f64).sqrt().floor() as i32
            }
            Heuristic::Manhattan => (delta_x + delta_y) * C,
            // Formula from https://github.com/riscy/a_star_on_grids
            Heuristic::Diagonal => (E * (delta_x - delta_y).abs() + D * (delta_x + delta_y)) / 2,
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
