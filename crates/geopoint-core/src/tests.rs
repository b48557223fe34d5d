//! Unit tests for geopoint-core.

#[cfg(test)]
mod point {
    use crate::{Point, PointError, RawGeometry, TypedGeometry};

    #[test]
    fn accessors_keep_lon_lat_order() {
        let p = Point::new(-122.4194, 37.7749);
        assert_eq!(p.lon(), -122.4194);
        assert_eq!(p.lat(), 37.7749);
        assert_eq!(p.coords(), [-122.4194, 37.7749]);
        assert_eq!(p.coordinates(), &[-122.4194, 37.7749]);
        assert_eq!(p.kind(), "Point");
    }

    #[test]
    fn out_of_range_is_accepted() {
        let p = Point::new(540.0, -135.5);
        assert_eq!(p.coords(), [540.0, -135.5]);
    }

    #[test]
    fn absent_differs_from_every_point() {
        let absent: Option<Point> = None;
        assert_ne!(absent, Some(Point::new(0.0, 0.0)));
    }

    #[test]
    fn raw_geometry_narrowing() {
        let ok = RawGeometry::new("Point", vec![1.5, 2.5]);
        assert_eq!(Point::try_from(ok).unwrap(), Point::new(1.5, 2.5));

        let line = RawGeometry::new("LineString", vec![1.0, 2.0]);
        assert_eq!(
            Point::try_from(line).unwrap_err(),
            PointError::WrongKind("LineString".into())
        );

        let short = RawGeometry::new("Point", vec![1.0]);
        assert_eq!(Point::try_from(short).unwrap_err(), PointError::WrongArity(1));

        let long = RawGeometry::new("Point", vec![1.0, 2.0, 3.0]);
        assert_eq!(Point::try_from(long).unwrap_err(), PointError::WrongArity(3));
    }

    #[test]
    fn display() {
        assert_eq!(Point::new(10.0, -20.5).to_string(), "POINT(10 -20.5)");
    }
}

#[cfg(test)]
mod distance {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use crate::{great_circle_km, planar_approx_km, DistanceKind, Point};

    fn sample(rng: &mut SmallRng) -> Point {
        Point::new(rng.gen_range(-180.0..=180.0), rng.gen_range(-90.0..=90.0))
    }

    #[test]
    fn one_degree_of_latitude() {
        let a = Some(Point::new(0.0, 0.0));
        let b = Some(Point::new(0.0, 1.0));
        assert!((planar_approx_km(a, b) - 111.0).abs() < 1e-9);
        let d = great_circle_km(a, b);
        assert!((d - 111.19).abs() < 0.01, "got {d}");
    }

    #[test]
    fn absent_operand_is_zero() {
        let p = Some(Point::new(13.4, 52.5));
        for f in [planar_approx_km, great_circle_km] {
            assert_eq!(f(p, None), 0.0);
            assert_eq!(f(None, p), 0.0);
            assert_eq!(f(None, None), 0.0);
        }
    }

    #[test]
    fn symmetric_and_zero_at_identity() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..1_000 {
            let a = Some(sample(&mut rng));
            let b = Some(sample(&mut rng));
            assert_eq!(planar_approx_km(a, b), planar_approx_km(b, a));
            assert!((great_circle_km(a, b) - great_circle_km(b, a)).abs() < 1e-9);
            assert_eq!(planar_approx_km(a, a), 0.0);
            assert_eq!(great_circle_km(a, a), 0.0);
        }
    }

    #[test]
    fn great_circle_bounded_by_half_circumference() {
        let max = std::f64::consts::PI * crate::distance::EARTH_RADIUS_KM;
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let d = great_circle_km(Some(sample(&mut rng)), Some(sample(&mut rng)));
            assert!(d.is_finite() && d >= 0.0 && d <= max + 1e-9, "got {d}");
        }
    }

    #[test]
    fn antipodal_points_stay_finite() {
        let pairs = [
            (Point::new(0.0, 0.0), Point::new(180.0, 0.0)),
            (Point::new(0.0, 90.0), Point::new(0.0, -90.0)),
            (Point::new(10.0, 30.0), Point::new(-170.0, -30.0)),
        ];
        for (a, b) in pairs {
            let d = a.great_circle_km(b);
            assert!((d - 20_015.086).abs() < 0.01, "{a} -> {b}: got {d}");
        }
    }

    #[test]
    fn algorithms_diverge_with_latitude() {
        let eq = (Point::new(0.0, 0.0), Point::new(1.0, 0.0));
        let north = (Point::new(0.0, 60.0), Point::new(1.0, 60.0));

        let gap = |(a, b): (Point, Point)| (a.planar_km(b) - a.great_circle_km(b)).abs();

        assert!(gap(eq) < 0.5);
        // One degree of longitude at 60° is roughly half the equatorial length.
        assert!((north.0.great_circle_km(north.1) - 55.6).abs() < 0.1);
        assert!(gap(north) > 50.0);
        assert!(gap(north) > gap(eq));
    }

    #[test]
    fn distance_kind_dispatch() {
        let a = Some(Point::new(0.0, 60.0));
        let b = Some(Point::new(1.0, 60.0));
        assert_eq!(DistanceKind::Planar.distance_km(a, b), planar_approx_km(a, b));
        assert_eq!(DistanceKind::GreatCircle.distance_km(a, b), great_circle_km(a, b));
        assert_eq!(DistanceKind::default(), DistanceKind::GreatCircle);
    }

    #[test]
    fn distance_kind_names() {
        assert_eq!(DistanceKind::Planar.to_string(), "planar");
        assert_eq!("great_circle".parse::<DistanceKind>().unwrap(), DistanceKind::GreatCircle);
        assert_eq!("haversine".parse::<DistanceKind>().unwrap(), DistanceKind::GreatCircle);
        assert!("manhattan".parse::<DistanceKind>().is_err());
    }
}

#[cfg(all(test, feature = "serde"))]
mod geojson_serde {
    use crate::{DistanceKind, Point};

    #[test]
    fn point_serializes_as_geojson() {
        let json = serde_json::to_string(&Point::new(-122.4194, 37.7749)).unwrap();
        assert_eq!(json, r#"{"type":"Point","coordinates":[-122.4194,37.7749]}"#);
    }

    #[test]
    fn point_deserialize_validates() {
        let p: Point = serde_json::from_str(r#"{"type":"Point","coordinates":[1.0,2.0]}"#).unwrap();
        assert_eq!(p, Point::new(1.0, 2.0));

        assert!(serde_json::from_str::<Point>(r#"{"type":"Polygon","coordinates":[]}"#).is_err());
        assert!(serde_json::from_str::<Point>(r#"{"type":"Point","coordinates":[1.0]}"#).is_err());
    }

    #[test]
    fn distance_kind_snake_case() {
        let json = serde_json::to_string(&DistanceKind::GreatCircle).unwrap();
        assert_eq!(json, r#""great_circle""#);
    }
}
