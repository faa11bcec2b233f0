use std::sync::Arc;

use csgtrace_csg::{find_cell_id, is_in_cell, Cell, CsgError, CsgExpr, Geometry};
use csgtrace_geom::{halfspace, BoundingBox, Halfspace, Region, Surface};
use csgtrace_math::{Point3, Vec3};
use proptest::prelude::*;

fn coord() -> impl Strategy<Value = f64> {
    -10.0f64..10.0
}

fn point() -> impl Strategy<Value = Point3> {
    (coord(), coord(), coord()).prop_map(|(x, y, z)| Point3::new(x, y, z))
}

fn sense() -> impl Strategy<Value = Halfspace> {
    prop_oneof![Just(Halfspace::Negative), Just(Halfspace::Positive)]
}

fn surface() -> impl Strategy<Value = Surface> {
    prop_oneof![
        (point(), point()).prop_filter_map("zero normal", |(p, n)| {
            Surface::plane(p, n.coords).ok()
        }),
        (point(), 0.1f64..8.0).prop_map(|(c, r)| Surface::sphere(c, r).unwrap()),
        (point(), point(), 0.1f64..8.0).prop_filter_map("zero axis", |(a, d, r)| {
            Surface::infinite_cylinder(a, d.coords, r).ok()
        }),
    ]
}

proptest! {
    #[test]
    fn and_cell_equals_conjunction_of_halfspaces(
        s1 in surface(),
        s2 in surface(),
        sign1 in sense(),
        sign2 in sense(),
        points in prop::collection::vec(point(), 1..32),
    ) {
        let cell = Cell::new(
            vec![Region::new(Arc::new(s1), sign1), Region::new(Arc::new(s2), sign2)],
            CsgExpr::leaf(0) & CsgExpr::leaf(1),
        ).unwrap();

        for p in &points {
            let expected = halfspace(p, &s1) == sign1 && halfspace(p, &s2) == sign2;
            prop_assert_eq!(is_in_cell(p, &cell), expected);
        }
    }

    #[test]
    fn complement_partitions_space(s in surface(), sign in sense(), p in point()) {
        let surface = Arc::new(s);
        let inside = Cell::new(vec![Region::new(Arc::clone(&surface), sign)], CsgExpr::leaf(0)).unwrap();
        let outside = Cell::new(vec![Region::new(surface, sign)], !CsgExpr::leaf(0)).unwrap();
        let geometry = Geometry::new(vec![inside, outside], BoundingBox::centered_cube(10.0).unwrap());

        // Exactly one of the two cells holds every point
        prop_assert_eq!(geometry.cells_containing(&p).count(), 1);
        let id = find_cell_id(&p, &geometry).unwrap();
        prop_assert_eq!(id == 0, halfspace(&p, geometry.cells()[0].regions()[0].surface.as_ref()) == sign);
    }

    #[test]
    fn out_of_range_leaf_is_rejected(extra in 1usize..16) {
        let plane = Arc::new(Surface::plane(Point3::origin(), Vec3::x()).unwrap());
        let r = Cell::new(vec![Region::negative(plane)], CsgExpr::leaf(0) | CsgExpr::leaf(extra));
        prop_assert!(matches!(r, Err(CsgError::InvalidCsgTree(_))));
    }
}
