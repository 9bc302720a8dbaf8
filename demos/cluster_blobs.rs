use anyhow::Result;
use meanshift_flat::{estimate_bandwidth, generate_blobs, MeanShift, Parameters};
use ndarray::arr2;
use ndarray_rand::rand::SeedableRng;
use rand_isaac::Isaac64Rng;
use std::time::Instant;

fn main() -> Result<()> {
    env_logger::init();

    let mut rng = Isaac64Rng::seed_from_u64(42);
    let centroids = arr2(&[[0.0, 0.0], [8.0, 8.0], [-8.0, 8.0], [8.0, -8.0]]);
    let data = generate_blobs(125, centroids.view(), 0.8, &mut rng);

    let estimated = estimate_bandwidth(data.view())?;
    println!("estimated bandwidth: {:.4}", estimated);

    let bandwidth = 2.5;
    let mut meanshift = MeanShift::<f64>::new(Parameters {
        bandwidth,
        ..Parameters::default()
    });

    let start = Instant::now();
    let labels = meanshift.fit_predict(data.view())?;
    let elapsed = start.elapsed();

    let centers = meanshift.cluster_centers().expect("fitted above");
    println!(
        "found {} clusters over {} points with bandwidth {} in {:?}",
        centers.nrows(),
        labels.len(),
        bandwidth,
        elapsed
    );

    let mut writer = csv::Writer::from_path("centroids.csv")?;
    writer.write_record(&["cluster", "x", "y"])?;
    for (cluster, center) in centers.rows().into_iter().enumerate() {
        writer.write_record(&[
            cluster.to_string(),
            center[0].to_string(),
            center[1].to_string(),
        ])?;
    }
    writer.flush()?;
    println!("wrote centroids.csv");

    Ok(())
}
