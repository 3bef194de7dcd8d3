#![deny(warnings)]

pub mod boundary;
pub mod config;
pub mod dataset;
pub mod error;
pub mod lms;
pub mod loss_functions;
pub mod matrix;
pub mod plot;
pub mod sampler;

pub use error::{LmsError, Result};
