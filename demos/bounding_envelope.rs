use cartesian_geometry::{BoundedPointCloud, GeometryError, Point, MAX_BOUND_IDX, MIN_BOUND_IDX};
use tracing_subscriber::prelude::*;

fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "info".into()),
            )
            .with(tracing_subscriber::fmt::layer())
            .init();
    });
}

fn main() -> Result<(), GeometryError> {
    init_tracing();

    // A skewed 3-D scan: most points cluster near the origin, a few outliers
    // stretch the box, so the two centroids differ noticeably.
    let n = 1000;
    let points: Vec<Point> = (0..n)
        .map(|i| {
            let t = i as f64;
            Point::xyz((t * 0.731) % 1.0, (t * 0.419) % 1.0, (t * 0.257) % 1.0)
        })
        .chain([Point::xyz(10.0, 0.5, 0.5), Point::xyz(0.5, -6.0, 0.5)])
        .collect();

    let obj = BoundedPointCloud::new(points)?;
    tracing::info!(
        num_points = obj.num_points(),
        num_dimensions = obj.num_dimensions(),
        "built bounded point cloud"
    );

    for (d, b) in obj.bounds().iter().enumerate() {
        println!(
            "dim {}: min={:.3}, max={:.3}",
            d, b[MIN_BOUND_IDX], b[MAX_BOUND_IDX]
        );
    }
    println!("centroid of bounds: {:?}", obj.centroid_of_bounds().coordinates());
    println!("centroid of cloud:  {:?}", obj.centroid_of_cloud().coordinates());

    let query = Point::xyz(5.0, -3.0, 0.5);
    println!("contains {:?}: {}", query.coordinates(), obj.contains_point(&query));

    // Mixed dimensions are rejected before anything is computed.
    match BoundedPointCloud::new(vec![Point::xy(0.0, 0.0), Point::xyz(0.0, 0.0, 0.0)]) {
        Ok(_) => unreachable!("mixed dimensions must not construct"),
        Err(err) => tracing::warn!(error = %err, "rejected point cloud"),
    }

    Ok(())
}
