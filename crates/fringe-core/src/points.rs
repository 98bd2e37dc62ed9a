//! Object point clouds for Fresnel synthesis.

/// A point source in object space, coordinates in meters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point3 {
    /// Lateral position, meters.
    pub x: f64,
    /// Vertical position, meters.
    pub y: f64,
    /// Axial position relative to the object center, meters.
    pub z: f64,
}

impl Point3 {
    /// Create a point at `(x, y, z)` meters.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// An ordered sequence of object points.
///
/// No ordering or uniqueness constraints: duplicate points simply add
/// coherent weight. An empty cloud is valid and yields the reference-only
/// hologram.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointCloud {
    points: Vec<Point3>,
}

impl PointCloud {
    /// Empty cloud.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing point list, preserving order.
    pub fn from_points(points: Vec<Point3>) -> Self {
        Self { points }
    }

    /// Append a point.
    pub fn push(&mut self, point: Point3) {
        self.points.push(point);
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true` if the cloud holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The points, in insertion order.
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Iterate over the points in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point3> {
        self.points.iter()
    }
}

impl FromIterator<Point3> for PointCloud {
    fn from_iter<I: IntoIterator<Item = Point3>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl Extend<Point3> for PointCloud {
    fn extend<I: IntoIterator<Item = Point3>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

impl<'a> IntoIterator for &'a PointCloud {
    type Item = &'a Point3;
    type IntoIter = std::slice::Iter<'a, Point3>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
