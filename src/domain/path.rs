use crate::domain::Coordinate;

#[derive(Clone, PartialEq, Debug, Default)]
pub struct Path {
    points: Vec<Coordinate>,
}

impl Path {
    pub fn new(points: Vec<Coordinate>) -> Self {
        Path { points }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coordinate> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The smallest box containing every point, `None` when the path has no points.
    pub fn bounds(&self) -> Option<CoordinateBounds> {
        let first = self.points.first()?;
        let (mut south, mut west, mut north, mut east) = (first.latitude(), first.longitude(), first.latitude(), first.longitude());

        for point in &self.points[1..] {
            south = south.min(point.latitude());
            north = north.max(point.latitude());
            west = west.min(point.longitude());
            east = east.max(point.longitude());
        }

        // Both corners come from existing, validated points
        Some(CoordinateBounds {
            south_west: Coordinate::new(south, west).ok()?,
            north_east: Coordinate::new(north, east).ok()?,
        })
    }
}

impl From<Vec<Coordinate>> for Path {
    fn from(points: Vec<Coordinate>) -> Self {
        Path::new(points)
    }
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct CoordinateBounds {
    pub south_west: Coordinate,
    pub north_east: Coordinate,
}
