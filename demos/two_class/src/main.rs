#![deny(warnings)]

use std::error::Error;

use lms_classifier::{
    config::RunConfig,
    dataset::LabeledSet,
    lms::LmsClassifier,
    loss_functions::{accuracy, mse_loss},
    plot::{plot_decision_surface, PlotSpec},
};
use tracing::{info, Level};

const CONFIG_PATH: &str = "lms.toml";

fn two_class_example() -> Result<(), Box<dyn Error>> {
    let config = RunConfig::load_or_default(CONFIG_PATH)?;

    let train = LabeledSet::load_pair(&config.train.class0, &config.train.class1)?;
    let test = LabeledSet::load_pair(&config.test.class0, &config.test.class1)?;
    info!(train = train.len(), test = test.len(), "loaded datasets");

    let mut lms = LmsClassifier::with_config(config.lms.clone())?;
    lms.fit(&train.features, &train.labels)?;

    let predicted = lms.predict(&test.features)?;
    let scores = lms.decision_function(&test.features)?;
    info!(
        weights = ?lms.weights(),
        accuracy = accuracy(&test.labels, &predicted)?,
        mse = mse_loss(&scores, &test.labels.targets())?,
        "evaluated on test set"
    );

    let spec = PlotSpec {
        train: &train,
        test: &test,
        boundary: lms.decision_boundary()?,
    };
    plot_decision_surface(&config.output, &spec)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();
    two_class_example()
}
