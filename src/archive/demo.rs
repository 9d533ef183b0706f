use crate::error::Result;
use crate::model::Histogram;

use super::document::{ARCHIVE_VERSION, ArchiveDocument, Group};

const BINS: usize = 40;

/// Small archive with a few related distributions, for trying the tool out.
pub fn demo_document() -> Result<ArchiveDocument> {
    let rings = [(1, 4.0, 1.2, 900.0), (2, 5.0, 1.5, 700.0), (3, 6.5, 1.0, 500.0)];

    let mut strip = Group::new("SiStrip");
    for (ring, mu, sigma, n) in rings {
        let group = Group::new(format!("ring__{}", ring))
            .with_histogram(gaussian(
                "NumberOfClusters",
                &format!("Number of clusters, ring {}", ring),
                (0.0, 12.0),
                (mu, sigma),
                n,
            )?)
            .with_histogram(gaussian(
                "ClusterCharge",
                &format!("Cluster charge, ring {}", ring),
                (0.0, 400.0),
                (120.0 + 20.0 * f64::from(ring), 35.0),
                n * 4.0,
            )?);
        strip = strip.with_group(group);
    }

    let tracking = Group::new("Tracking")
        .with_histogram(exponential("Pt", "Track pT", (0.0, 20.0), 3.0, 2000.0)?)
        .with_histogram(gaussian("Eta", "Track eta", (-2.5, 2.5), (0.0, 1.1), 2000.0)?)
        .with_histogram(flat("Phi", "Track phi", (-3.2, 3.2), 50.0)?);

    let root = Group::new("DQMData")
        .with_histogram(flat("Events", "Events per lumi section", (0.0, 40.0), 12.0)?)
        .with_group(tracking)
        .with_group(strip);

    Ok(ArchiveDocument {
        version: ARCHIVE_VERSION,
        root,
    })
}

fn build(
    name: &str,
    title: &str,
    (lo, hi): (f64, f64),
    f: impl Fn(f64) -> f64,
) -> Result<Histogram> {
    let width = (hi - lo) / BINS as f64;
    let counts = (0..BINS)
        .map(|i| f(lo + width * (i as f64 + 0.5)).round())
        .collect();
    Histogram::uniform(name, title, lo, hi, counts)
}

fn gaussian(
    name: &str,
    title: &str,
    range: (f64, f64),
    (mu, sigma): (f64, f64),
    n: f64,
) -> Result<Histogram> {
    let width = (range.1 - range.0) / BINS as f64;
    let norm = n * width / (sigma * (2.0 * std::f64::consts::PI).sqrt());
    build(name, title, range, |x| {
        let z = (x - mu) / sigma;
        norm * (-0.5 * z * z).exp()
    })
}

fn exponential(name: &str, title: &str, range: (f64, f64), tau: f64, n: f64) -> Result<Histogram> {
    let width = (range.1 - range.0) / BINS as f64;
    build(name, title, range, |x| n * width / tau * (-x / tau).exp())
}

fn flat(name: &str, title: &str, range: (f64, f64), level: f64) -> Result<Histogram> {
    build(name, title, range, |x| {
        level + (x * 3.0).sin().abs() * level * 0.1
    })
}
