use std::fs;
use std::path::Path;

use tempfile::tempdir;

use fepslice::{
    ConvergencePoint, PrepConfig, collect_series, process_simulations, render_convergence_plot,
};

fn write_log(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

#[test]
fn end_to_end_series_tracks_the_sliced_production_tail() {
    let dir = tempdir().unwrap();
    // 100 production records whose trailing field encodes their 1-based index
    // negated, so sink p's last data line reports -(prefix length).
    let mut log = String::from("#window\nFepEnergy: 500000 0.0 0.0 -0.5\n");
    for i in 1..=100u32 {
        log.push_str(&format!("FepEnergy: {} 1.0 1.0 -{}.0\n", 2_000_000 + i, i));
    }
    write_log(dir.path(), "forward_01.fepout", &log);

    let out = dir.path().join("processed_runs");
    process_simulations(dir.path(), &out, &PrepConfig::default()).unwrap();
    let series = collect_series(&out).unwrap();

    assert_eq!(series.len(), 99);
    let percents: Vec<u8> = series.iter().map(|point| point.percent).collect();
    assert!(percents.windows(2).all(|pair| pair[0] < pair[1]));

    let value_at = |percent: u8| {
        series
            .iter()
            .find(|point| point.percent == percent)
            .map(|point| point.value)
            .unwrap()
    };
    assert_eq!(value_at(1), -1.0);
    assert_eq!(value_at(25), -25.0);
    assert_eq!(value_at(50), -50.0);
    // 57/100 rounds below 0.57 in f64: the 57% sink carries 56 records.
    assert_eq!(value_at(57), -56.0);
}

#[test]
fn derivative_without_production_reports_the_equilibration_tail() {
    let dir = tempdir().unwrap();
    write_log(
        dir.path(),
        "forward_01.fepout",
        "#hdr\nFepEnergy: 500000 0.0 -7.25\n",
    );
    let out = dir.path().join("processed_runs");
    process_simulations(dir.path(), &out, &PrepConfig::default()).unwrap();

    let series = collect_series(&out).unwrap();
    assert_eq!(series.len(), 99);
    assert!(series.iter().all(|point| point.value == -7.25));
}

#[test]
fn headers_only_derivatives_produce_an_empty_series() {
    let dir = tempdir().unwrap();
    write_log(dir.path(), "forward_01.fepout", "#only headers here\n");
    let out = dir.path().join("processed_runs");
    process_simulations(dir.path(), &out, &PrepConfig::default()).unwrap();

    let series = collect_series(&out).unwrap();
    assert!(series.is_empty());
}

#[test]
fn plot_renders_to_the_requested_path() {
    let dir = tempdir().unwrap();
    let points = vec![
        ConvergencePoint {
            percent: 1,
            value: -3.9,
        },
        ConvergencePoint {
            percent: 50,
            value: -4.4,
        },
        ConvergencePoint {
            percent: 99,
            value: -4.5,
        },
    ];
    let image = dir.path().join("convergence_plot.png");
    render_convergence_plot(&points, &image).unwrap();
    let bytes = fs::read(&image).unwrap();
    assert!(!bytes.is_empty());
    // PNG signature.
    assert_eq!(&bytes[..4], b"\x89PNG");
}

#[test]
fn plot_tolerates_an_empty_series() {
    let dir = tempdir().unwrap();
    let image = dir.path().join("empty.png");
    render_convergence_plot(&[], &image).unwrap();
    assert!(image.is_file());
}
