use approx::assert_relative_eq;
use bisect3d::math::{Point, Real, Vector};
use bisect3d::query::{split_triangle, IntersectionResult};
use bisect3d::shape::{Plane, PlaneSide, Triangle, DEFAULT_SIDE_EPSILON};

fn area(triangles: &[Triangle]) -> Real {
    triangles.iter().map(|t| t.area()).sum()
}

#[test]
fn one_edge_crossing_gives_three_triangles() {
    let tri = Triangle::new(
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
    );
    let plane = Plane::try_new(Vector::new(1.0, 1.0, 0.0), -0.3).unwrap();
    let mut result = IntersectionResult::new();

    assert!(split_triangle(&plane, &tri, DEFAULT_SIDE_EPSILON, &mut result));
    assert_eq!(result.upper().len() + result.lower().len(), 3);
    assert_relative_eq!(
        area(result.upper()) + area(result.lower()),
        0.5,
        epsilon = 1.0e-6
    );

    let points = result.intersection_points();
    assert_eq!(points.len(), 2);
    for pt in points {
        assert_eq!(plane.side_of(pt, DEFAULT_SIDE_EPSILON), PlaneSide::On);
    }

    // Apart from the two new points, the pieces only use the original vertices.
    let pieces = result.upper().iter().chain(result.lower());
    for pt in pieces.flat_map(|t| t.vertices()) {
        let is_new = points.iter().any(|q| (q - pt).norm() < 1.0e-6);
        let is_original = tri.vertices().contains(&pt);
        assert!(is_new || is_original);
    }
}

#[test]
fn vertex_on_plane_gives_two_triangles() {
    let tri = Triangle::new(
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, -1.0, 0.0),
        Point::new(1.0, 1.0, 0.0),
    );
    let plane = Plane::new(Vector::y_axis(), 0.0);
    let mut result = IntersectionResult::new();

    assert!(tri.split(&plane, DEFAULT_SIDE_EPSILON, &mut result));
    assert_eq!(result.upper().len(), 1);
    assert_eq!(result.lower().len(), 1);
    assert_relative_eq!(area(result.upper()), 0.5, epsilon = 1.0e-6);
    assert_relative_eq!(area(result.lower()), 0.5, epsilon = 1.0e-6);
}

#[test]
fn triangles_away_from_the_plane_are_not_split() {
    let tri = Triangle::new(
        Point::new(0.0, 2.0, 0.0),
        Point::new(1.0, 3.0, 0.0),
        Point::new(0.0, 4.0, 1.0),
    );
    let plane = Plane::new(Vector::y_axis(), 0.0);
    let mut result = IntersectionResult::new();

    assert!(!split_triangle(&plane, &tri, DEFAULT_SIDE_EPSILON, &mut result));
    assert!(result.upper().is_empty() && result.lower().is_empty());
    assert_eq!(tri.sides(&plane, DEFAULT_SIDE_EPSILON), [PlaneSide::Up; 3]);
}
