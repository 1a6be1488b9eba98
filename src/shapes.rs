use std::fmt;

use crate::Vec2;

/// Trait for types which can be used as coordinates of shapes.
///
/// This trait captures the most common requirements of integral and float
/// coordinate types for various shape methods.
pub trait Coord:
    Copy
    + Default
    + PartialEq
    + PartialOrd
    + std::fmt::Display
    + std::ops::Add<Output = Self>
    + std::ops::Sub<Output = Self>
{
}

impl Coord for f32 {}
impl Coord for i32 {}

/// Return the minimum of `a` and `b`, or `a` if `a` and `b` are unordered.
fn min_or_lhs<T: PartialOrd>(a: T, b: T) -> T {
    if b < a {
        b
    } else {
        a
    }
}

/// Return the maximum of `a` and `b`, or `a` if `a` and `b` are unordered.
fn max_or_lhs<T: PartialOrd>(a: T, b: T) -> T {
    if b > a {
        b
    } else {
        a
    }
}

/// A point defined by X and Y coordinates.
#[derive(Copy, Clone, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde_traits", derive(serde::Serialize, serde::Deserialize))]
pub struct Point<T: Coord = i32> {
    pub x: T,
    pub y: T,
}

pub type PointF = Point<f32>;

impl<T: Coord> Point<T> {
    /// Construct a point from X and Y coordinates.
    pub fn from_yx(y: T, x: T) -> Self {
        Point { y, x }
    }

    pub fn translate(self, y: T, x: T) -> Self {
        Point {
            y: self.y + y,
            x: self.x + x,
        }
    }
}

impl Point<f32> {
    pub fn distance(self, other: Self) -> f32 {
        self.vec_to(other).length()
    }

    /// Return the vector from this point to another point.
    pub fn vec_to(self, other: Self) -> Vec2 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        Vec2::from_xy(dx, dy)
    }

    /// Return the vector from the origin to this point.
    pub fn to_vec(self) -> Vec2 {
        Vec2::from_xy(self.x, self.y)
    }
}

impl Point<i32> {
    /// Return self as a [y, x] array. This is useful for indexing into an
    /// image or matrix.
    ///
    /// Panics if the X or Y coordinates of the point are negative.
    pub fn coord(self) -> [usize; 2] {
        assert!(self.y >= 0 && self.x >= 0, "Coordinates are negative");
        [self.y as usize, self.x as usize]
    }

    pub fn to_f32(self) -> Point<f32> {
        Point {
            x: self.x as f32,
            y: self.y as f32,
        }
    }

    pub fn distance(self, other: Point<i32>) -> f32 {
        self.to_f32().distance(other.to_f32())
    }
}

impl<T: Coord> fmt::Debug for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.y, self.x)
    }
}

/// Sort the elements of a tuple. If the ordering of the elements is undefined,
/// return the input unchanged.
fn sort_pair<T: PartialOrd>(pair: (T, T)) -> (T, T) {
    if pair.0 > pair.1 {
        (pair.1, pair.0)
    } else {
        pair
    }
}

/// A bounded line segment ("edge") defined by a start and end point.
///
/// Predicates that concern the unbounded line through the two endpoints are
/// named with a `line_` prefix; the unprefixed methods treat the segment.
#[derive(Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde_traits", derive(serde::Serialize, serde::Deserialize))]
pub struct Line<T: Coord = i32> {
    pub start: Point<T>,
    pub end: Point<T>,
}

pub type LineF = Line<f32>;

impl<T: Coord> fmt::Debug for Line<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?} -> {:?}", self.start, self.end)
    }
}

impl<T: Coord> Line<T> {
    pub fn from_endpoints(start: Point<T>, end: Point<T>) -> Line<T> {
        Line { start, end }
    }

    /// Return true if this line has zero length.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Return a copy of this line with the start and end points swapped.
    pub fn reverse(&self) -> Line<T> {
        Line::from_endpoints(self.end, self.start)
    }
}

impl Line<f32> {
    /// Return the normalized scalar position of the projection of `p` onto
    /// the infinite line through this segment.
    ///
    /// The result is 0 at `start`, 1 at `end`, and outside `[0, 1]` when the
    /// projection falls beyond the segment. Returns 0 for an empty line.
    pub fn project(&self, p: PointF) -> f32 {
        if self.is_empty() {
            return 0.;
        }
        let ab = self.start.vec_to(self.end);
        let ap = self.start.vec_to(p);
        ap.dot(ab) / ab.dot(ab)
    }

    /// Return the euclidean distance between a point and the closest
    /// coordinate that lies on the segment.
    pub fn distance(&self, p: PointF) -> f32 {
        if self.is_empty() {
            return self.start.distance(p);
        }

        // Clamp the scalar projection to the segment, then measure to the
        // projected point. See http://www.faqs.org/faqs/graphics/algorithms-faq/,
        // "Subject 1.02: How do I find the distance from a point to a line?".
        let t = self.project(p).clamp(0., 1.);
        let ab = self.start.vec_to(self.end);
        let closest = self.start.to_vec() + ab * t;
        (p.to_vec() - closest).length()
    }

    /// Return the euclidean distance between a point and the infinite line
    /// through this segment.
    pub fn line_distance(&self, p: PointF) -> f32 {
        if self.is_empty() {
            return self.start.distance(p);
        }
        let ab = self.start.vec_to(self.end);
        let ap = self.start.vec_to(p);
        ab.cross_product_norm(ap).abs() / ab.length()
    }

    /// Return true if `p` lies on this segment, within a euclidean distance
    /// of `tol`.
    pub fn contains_point(&self, p: PointF, tol: f32) -> bool {
        self.distance(p) <= tol
    }

    /// Test whether this line segment intersects `other` at a single point.
    ///
    /// Returns false if the line segments do not intersect, or are coincident
    /// (ie. overlap for part of their lengths).
    pub fn intersects(&self, other: Line<f32>) -> bool {
        // See https://en.wikipedia.org/wiki/Intersection_(geometry)#Two_line_segments
        //
        // Represent the lines as functions parametrized by `s` and `t` and
        // solve for the intersection with Cramer's rule. The segments
        // intersect if the solutions are both in [0, 1].
        let (x1, x2) = (self.start.x, self.end.x);
        let (y1, y2) = (self.start.y, self.end.y);
        let (x3, x4) = (other.start.x, other.end.x);
        let (y3, y4) = (other.start.y, other.end.y);

        let a = x2 - x1;
        let b = -(x4 - x3);
        let c = y2 - y1;
        let d = -(y4 - y3);

        let b0 = x3 - x1;
        let b1 = y3 - y1;

        let det_a = a * d - b * c;
        if det_a == 0. {
            // Lines are either parallel or coincident.
            return false;
        }
        let det_a0 = b0 * d - b * b1;
        let det_a1 = a * b1 - b0 * c;

        // Testing whether the solutions are in [0, 1] can be done without
        // division by comparing signs and magnitudes of the determinants.
        let s_ok = (det_a0 >= 0.) == (det_a > 0.) && det_a0.abs() <= det_a.abs();
        let t_ok = (det_a1 >= 0.) == (det_a > 0.) && det_a1.abs() <= det_a.abs();

        s_ok && t_ok
    }
}

impl Line<i32> {
    pub fn to_f32(&self) -> LineF {
        Line::from_endpoints(self.start.to_f32(), self.end.to_f32())
    }

    /// Return the euclidean distance between a point and the closest
    /// coordinate that lies on the segment.
    pub fn distance(&self, p: Point) -> f32 {
        self.to_f32().distance(p.to_f32())
    }

    /// Test whether this line segment intersects `other` at a single point.
    pub fn intersects(&self, other: Line) -> bool {
        self.to_f32().intersects(other.to_f32())
    }
}

/// Rectangle defined by left, top, right and bottom coordinates.
///
/// The left and top coordinates are inclusive. The right and bottom
/// coordinates are exclusive.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde_traits", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect<T: Coord = i32> {
    top_left: Point<T>,
    bottom_right: Point<T>,
}

pub type RectF = Rect<f32>;

impl<T: Coord> Rect<T> {
    pub fn new(top_left: Point<T>, bottom_right: Point<T>) -> Rect<T> {
        Rect {
            top_left,
            bottom_right,
        }
    }

    /// Return a rect with the given top, left, bottom and right coordinates.
    pub fn from_tlbr(top: T, left: T, bottom: T, right: T) -> Rect<T> {
        Self::new(Point::from_yx(top, left), Point::from_yx(bottom, right))
    }

    /// Return a rect with the given top, left, height and width.
    pub fn from_tlhw(top: T, left: T, height: T, width: T) -> Rect<T> {
        Self::from_tlbr(top, left, top + height, left + width)
    }

    /// Return a rect with top-left corner at 0, 0 and the given height/width.
    pub fn from_hw(height: T, width: T) -> Rect<T> {
        Self::new(Point::default(), Point::from_yx(height, width))
    }

    pub fn top(&self) -> T {
        self.top_left.y
    }

    pub fn left(&self) -> T {
        self.top_left.x
    }

    pub fn right(&self) -> T {
        self.bottom_right.x
    }

    pub fn bottom(&self) -> T {
        self.bottom_right.y
    }

    pub fn width(&self) -> T {
        self.bottom_right.x - self.top_left.x
    }

    pub fn height(&self) -> T {
        self.bottom_right.y - self.top_left.y
    }

    /// Return the top, left, bottom and right coordinates as an array.
    pub fn tlbr(&self) -> [T; 4] {
        [
            self.top_left.y,
            self.top_left.x,
            self.bottom_right.y,
            self.bottom_right.x,
        ]
    }

    /// Return the signed area of this rect.
    pub fn area(&self) -> T
    where
        T: std::ops::Mul<Output = T>,
    {
        self.width() * self.height()
    }

    /// Return true if `other` lies on the boundary or interior of this rect.
    pub fn contains_point(&self, other: Point<T>) -> bool {
        self.top() <= other.y
            && self.bottom() >= other.y
            && self.left() <= other.x
            && self.right() >= other.x
    }

    /// Return true if the width or height of this rect are <= 0.
    pub fn is_empty(&self) -> bool {
        self.right() <= self.left() || self.bottom() <= self.top()
    }

    /// Return true if the intersection of this rect and `other` is non-empty.
    pub fn intersects(&self, other: Rect<T>) -> bool {
        !self.intersection(other).is_empty()
    }

    /// Return the smallest rect that contains both this rect and `other`.
    pub fn union(&self, other: Rect<T>) -> Rect<T> {
        let t = min_or_lhs(self.top(), other.top());
        let l = min_or_lhs(self.left(), other.left());
        let b = max_or_lhs(self.bottom(), other.bottom());
        let r = max_or_lhs(self.right(), other.right());
        Rect::from_tlbr(t, l, b, r)
    }

    /// Return the largest rect that is contained within this rect and `other`.
    pub fn intersection(&self, other: Rect<T>) -> Rect<T> {
        let t = max_or_lhs(self.top(), other.top());
        let l = max_or_lhs(self.left(), other.left());
        let b = min_or_lhs(self.bottom(), other.bottom());
        let r = min_or_lhs(self.right(), other.right());
        Rect::from_tlbr(t, l, b, r)
    }

    /// Return a new rect with each side adjusted so that the result lies
    /// inside `rect`.
    pub fn clamp(&self, rect: Rect<T>) -> Rect<T> {
        self.intersection(rect)
    }
}

impl Rect<i32> {
    pub fn to_f32(&self) -> RectF {
        Rect::from_tlbr(
            self.top_left.y as f32,
            self.top_left.x as f32,
            self.bottom_right.y as f32,
            self.bottom_right.x as f32,
        )
    }
}

#[cfg(test)]
mod tests {
    use rten_tensor::test_util::ApproxEq;

    use super::{Line, Point, PointF, Rect};

    #[test]
    fn test_line_distance() {
        struct Case {
            start: Point,
            end: Point,
            point: Point,
            dist: f32,
        }

        let cases = [
            // Single point
            Case {
                start: Point::default(),
                end: Point::default(),
                point: Point::from_yx(3, 4),
                dist: 5.,
            },
            // Horizontal line
            Case {
                start: Point::from_yx(5, 2),
                end: Point::from_yx(5, 10),
                point: Point::from_yx(8, 5),
                dist: 3.,
            },
            // Vertical line
            Case {
                start: Point::from_yx(5, 3),
                end: Point::from_yx(10, 3),
                point: Point::from_yx(8, 5),
                dist: 2.,
            },
            // Line with +ve gradient
            Case {
                start: Point::default(),
                end: Point::from_yx(5, 5),
                point: Point::from_yx(4, 0),
                dist: (8f32).sqrt(), // Closest point is at (2, 2)
            },
            // Point beyond end of horizontal line
            Case {
                start: Point::from_yx(5, 2),
                end: Point::from_yx(5, 5),
                point: Point::from_yx(5, 10),
                dist: 5.,
            },
        ];

        for case in cases {
            let line = Line::from_endpoints(case.start, case.end);
            let dist = line.distance(case.point);
            assert!(
                dist.approx_eq(&case.dist),
                "line {:?} point {:?} actual {} expected {}",
                line,
                case.point,
                dist,
                case.dist
            );
        }
    }

    #[test]
    fn test_line_line_distance() {
        struct Case {
            line: [i32; 4],
            point: Point,
            dist: f32,
        }

        let cases = [
            // Projection falls inside the segment, same as segment distance.
            Case {
                line: [5, 2, 5, 10],
                point: Point::from_yx(8, 5),
                dist: 3.,
            },
            // Projection falls beyond the segment. The infinite line is
            // closer than the segment endpoints.
            Case {
                line: [5, 2, 5, 5],
                point: Point::from_yx(6, 10),
                dist: 1.,
            },
        ];

        for case in cases {
            let [y1, x1, y2, x2] = case.line;
            let line =
                Line::from_endpoints(Point::from_yx(y1, x1), Point::from_yx(y2, x2)).to_f32();
            let dist = line.line_distance(case.point.to_f32());
            assert!(
                dist.approx_eq(&case.dist),
                "line {:?} point {:?} actual {} expected {}",
                line,
                case.point,
                dist,
                case.dist
            );
        }
    }

    #[test]
    fn test_line_project() {
        let line = Line::from_endpoints(PointF::from_yx(0., 0.), PointF::from_yx(0., 10.));

        assert!(line.project(PointF::from_yx(3., 0.)).approx_eq(&0.));
        assert!(line.project(PointF::from_yx(0., 5.)).approx_eq(&0.5));
        assert!(line.project(PointF::from_yx(2., 10.)).approx_eq(&1.));
        assert!(line.project(PointF::from_yx(0., 20.)).approx_eq(&2.));

        // Empty line projects everything to the start.
        let empty = Line::from_endpoints(PointF::from_yx(1., 1.), PointF::from_yx(1., 1.));
        assert_eq!(empty.project(PointF::from_yx(5., 5.)), 0.);
    }

    #[test]
    fn test_line_contains_point() {
        let line = Line::from_endpoints(PointF::from_yx(0., 0.), PointF::from_yx(10., 10.));

        assert!(line.contains_point(PointF::from_yx(5., 5.), 1e-6));
        assert!(line.contains_point(PointF::from_yx(5.5, 5.), 0.5));
        assert!(!line.contains_point(PointF::from_yx(6., 5.), 0.5));

        // On the infinite line but beyond the segment.
        assert!(!line.contains_point(PointF::from_yx(12., 12.), 0.5));
    }

    /// Create a line from [y1, x1, y2, x2] coordinates.
    fn line_from_coords(coords: [i32; 4]) -> Line {
        Line::from_endpoints(
            Point::from_yx(coords[0], coords[1]),
            Point::from_yx(coords[2], coords[3]),
        )
    }

    #[test]
    fn test_line_intersects() {
        struct Case {
            a: Line,
            b: Line,
            expected: bool,
        }

        let cases = [
            // Horizontal and vertical lines that intersect
            Case {
                a: line_from_coords([0, 5, 10, 5]),
                b: line_from_coords([5, 0, 5, 10]),
                expected: true,
            },
            // Diagonal lines that intersect
            Case {
                a: line_from_coords([0, 0, 10, 10]),
                b: line_from_coords([10, 0, 0, 10]),
                expected: true,
            },
            // Horizontal and vertical lines that do not intersect
            Case {
                a: line_from_coords([0, 5, 10, 5]),
                b: line_from_coords([5, 6, 5, 10]),
                expected: false,
            },
            // Parallel lines that do not touch
            Case {
                a: line_from_coords([0, 5, 0, 10]),
                b: line_from_coords([2, 5, 2, 10]),
                expected: false,
            },
            // Coincident lines
            Case {
                a: line_from_coords([0, 5, 0, 10]),
                b: line_from_coords([0, 5, 0, 10]),
                expected: false,
            },
        ];

        for case in cases {
            assert_eq!(case.a.intersects(case.b), case.expected);

            // `intersects` should be commutative.
            assert_eq!(case.b.intersects(case.a), case.expected);
        }
    }

    #[test]
    fn test_rect_clamp() {
        struct Case {
            rect: Rect,
            boundary: Rect,
            expected: Rect,
        }

        let cases = [
            Case {
                rect: Rect::from_tlbr(-5, -10, 100, 200),
                boundary: Rect::from_tlbr(0, 0, 50, 100),
                expected: Rect::from_tlbr(0, 0, 50, 100),
            },
            Case {
                rect: Rect::from_tlbr(5, 10, 40, 80),
                boundary: Rect::from_tlbr(0, 0, 50, 100),
                expected: Rect::from_tlbr(5, 10, 40, 80),
            },
        ];

        for case in cases {
            assert_eq!(case.rect.clamp(case.boundary), case.expected);
        }
    }

    #[test]
    fn test_rect_contains_point() {
        let r = Rect::from_tlbr(5, 5, 10, 10);

        assert_eq!(r.contains_point(Point::from_yx(0, 0)), false);
        assert_eq!(r.contains_point(Point::from_yx(12, 12)), false);
        assert_eq!(r.contains_point(Point::from_yx(8, 8)), true);
        assert_eq!(r.contains_point(Point::from_yx(5, 5)), true);
    }

    #[test]
    fn test_rect_intersects_and_union() {
        let a = Rect::from_tlbr(0, 0, 10, 10);
        let b = Rect::from_tlbr(5, 5, 15, 15);
        let c = Rect::from_tlbr(20, 20, 25, 25);

        assert!(a.intersects(b));
        assert!(!a.intersects(c));
        assert_eq!(a.intersection(b), Rect::from_tlbr(5, 5, 10, 10));
        assert_eq!(a.union(b), Rect::from_tlbr(0, 0, 15, 15));
    }
}
