use std::{fs, path::PathBuf};

use lms_classifier::{
    dataset::LabeledSet,
    lms::{LmsClassifier, LmsConfig},
    plot::{plot_decision_surface, PlotSpec},
};
use tempfile::TempDir;

fn data_file(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../data")
        .join(name)
}

#[test]
fn renders_decision_surface_into_new_directory() {
    let train = LabeledSet::load_pair(data_file("Train1.txt"), data_file("Train2.txt")).unwrap();
    let test = LabeledSet::load_pair(data_file("Test1.txt"), data_file("Test2.txt")).unwrap();

    let config = LmsConfig {
        seed: Some(1),
        ..Default::default()
    };
    let mut lms = LmsClassifier::with_config(config).unwrap();
    lms.fit(&train.features, &train.labels).unwrap();

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("nested").join("output").join("lms.png");
    assert!(!output.parent().unwrap().exists());

    let spec = PlotSpec {
        train: &train,
        test: &test,
        boundary: lms.decision_boundary().unwrap(),
    };
    plot_decision_surface(&output, &spec).unwrap();

    let written = fs::metadata(&output).unwrap();
    assert!(written.is_file());
    assert!(written.len() > 0);
}
