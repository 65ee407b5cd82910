use proxhash::{
    GeohashEncoder, GridSampler, PlanarOffset, Point, ProxhashError, ProximityCover, compress,
    expand, project_back,
};
use std::cell::RefCell;

/// Encoder that records the projected points it was asked to encode.
#[derive(Default)]
struct Recorder {
    points: RefCell<Vec<Point>>,
}

impl GeohashEncoder for Recorder {
    fn encode(&self, point: &Point, _precision: usize) -> Option<String> {
        self.points.borrow_mut().push(*point);
        Some(String::from("s"))
    }
}

/// Test 1: Every precision level samples without error
#[test]
fn test_all_precisions() {
    let sampler = GridSampler::new();
    let center = Point::new(-74.0060, 40.7128);

    // Radii scaled to each level keep the grid small.
    let radii = [
        6_000_000.0,
        2_000_000.0,
        300_000.0,
        60_000.0,
        10_000.0,
        2_000.0,
        300.0,
        60.0,
        10.0,
        2.0,
        0.3,
        0.05,
    ];
    for (idx, radius) in radii.iter().enumerate() {
        let precision = idx + 1;
        let codes = sampler.sample(&center, *radius, precision).unwrap();
        assert!(codes.iter().all(|c| c.len() == precision));
    }
}

/// Test 2: Mirrored centroids are all inside the circle
#[test]
fn test_mirrors_respect_radius() {
    let recorder = Recorder::default();
    let sampler = GridSampler::with_encoder(&recorder);
    let center = Point::new(0.0, 0.0);
    let radius = 250.0;

    sampler.sample(&center, radius, 8).unwrap();

    let points = recorder.points.borrow();
    assert!(!points.is_empty());
    let meters_per_degree = 6_371_000.0 * std::f64::consts::PI / 180.0;
    for p in points.iter() {
        let dy = p.y() * meters_per_degree;
        let dx = p.x() * meters_per_degree;
        assert!(
            (dx * dx + dy * dy).sqrt() <= radius + 1e-6,
            "({}, {}) outside radius",
            dx,
            dy
        );
    }
}

/// Test 3: Every accepted offset is encoded in all four quadrants
#[test]
fn test_quadrant_symmetry() {
    let recorder = Recorder::default();
    let sampler = GridSampler::with_encoder(&recorder);
    sampler.sample(&Point::new(0.0, 0.0), 400.0, 7).unwrap();

    let points = recorder.points.borrow();
    let ne = points.iter().filter(|p| p.x() > 0.0 && p.y() > 0.0).count();
    let nw = points.iter().filter(|p| p.x() < 0.0 && p.y() > 0.0).count();
    let se = points.iter().filter(|p| p.x() > 0.0 && p.y() < 0.0).count();
    let sw = points.iter().filter(|p| p.x() < 0.0 && p.y() < 0.0).count();

    assert!(ne > 0);
    assert_eq!(ne, nw);
    assert_eq!(ne, se);
    assert_eq!(ne, sw);
    assert_eq!(ne * 4, points.len());
}

/// Test 4: Query near the eastern antimeridian wraps to negative longitudes
#[test]
fn test_antimeridian_east() {
    let sampler = GridSampler::new();
    let codes = sampler.sample(&Point::new(179.999, 0.0), 1000.0, 6).unwrap();

    // Cells east of the line start with the geohash prefixes of the western
    // hemisphere's far edge.
    assert!(codes.iter().any(|c| c.starts_with('8') || c.starts_with('2')));
    assert!(codes.iter().any(|c| c.starts_with('x') || c.starts_with('r')));
}

/// Test 5: Query near the western antimeridian drops unwrapped samples
#[test]
fn test_antimeridian_west() {
    let sampler = GridSampler::new();
    let codes = sampler.sample(&Point::new(-179.999, 0.0), 1000.0, 6).unwrap();
    let unwrapped = project_back(PlanarOffset::new(0.0, -1000.0), &Point::new(-179.999, 0.0));

    assert!(unwrapped.x() < -180.0);
    // Only the samples that stay east of -180 are encoded.
    assert!(!codes.is_empty());
}

/// Test 6: The pipeline validates the query center before sampling
#[test]
fn test_pipeline_input_validation() {
    let cover = ProximityCover::builder().build().unwrap();

    assert!(cover.query(&Point::new(0.0, 90.0), 100.0).is_ok());
    assert!(matches!(
        cover.query(&Point::new(0.0, 90.5), 100.0),
        Err(ProxhashError::InvalidInput(_))
    ));
    assert!(matches!(
        cover.query(&Point::new(f64::NAN, 0.0), 100.0),
        Err(ProxhashError::InvalidInput(_))
    ));
}

/// Test 7: Compression precision arguments are validated up front
#[test]
fn test_compression_argument_errors() {
    let codes = expand("tdnu2");
    let err = compress(&codes, 0, 7).unwrap_err();
    assert!(matches!(err, ProxhashError::InvalidArgument(_)));
    assert!(err.to_string().contains("min precision"));

    let err = compress(&codes, 3, 13).unwrap_err();
    assert!(err.to_string().contains("cutoff precision"));
}

/// Test 8: Mixed-precision input with a sibling group split across levels
#[test]
fn test_mixed_precision_input() {
    // 31 children at precision 6 plus the last child expanded to precision
    // 7. The expanded child merges back, completing the precision 6 group,
    // which then merges into "tdnu2".
    let mut codes: Vec<String> = expand("tdnu2").into_iter().take(31).collect();
    codes.extend(expand("tdnu2z"));

    assert_eq!(compress(&codes, 3, 7).unwrap(), vec!["tdnu2"]);
}

/// Test 9: Cutoff below minimum truncates merged parents too
#[test]
fn test_cutoff_below_minimum() {
    let codes = expand("tdnu2");
    assert_eq!(compress(&codes, 5, 3).unwrap(), vec!["tdn"]);
}

/// Test 10: Large radius at fine precision still completes
#[test]
fn test_large_grid() {
    let _ = env_logger::builder().is_test(true).try_init();

    let sampler = GridSampler::new();
    let codes = sampler.sample(&Point::new(2.3522, 48.8566), 5_000.0, 7).unwrap();
    let compressed = compress(&codes, 3, 7).unwrap();
    assert!(compressed.len() < codes.len());
}
