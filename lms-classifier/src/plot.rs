use std::{error::Error, fs, ops::Range, path::Path};

use plotters::{
    prelude::{
        BitMapBackend, ChartBuilder, Circle, IntoDrawingArea, LabelAreaPosition, PathElement,
        SeriesLabelPosition,
    },
    series::LineSeries,
    style::{Color, RGBColor, BLACK, BLUE, GREEN, RED, WHITE, YELLOW},
};
use tracing::info;

use crate::{
    boundary::DecisionBoundary,
    dataset::LabeledSet,
    error::{LmsError, Result},
    matrix::FeatureMatrix,
};

const SIZE: (u32, u32) = (1280, 960);
/// The boundary is drawn over this span of x0.
const LINE_X: Range<f64> = -3.0..4.0;
const Y_TOP: f64 = 9.0;
const MARGIN: f64 = 0.5;

/// Everything drawn into the decision surface image.
pub struct PlotSpec<'a> {
    pub train: &'a LabeledSet,
    pub test: &'a LabeledSet,
    pub boundary: DecisionBoundary,
}

/// Renders the four point sets and the classification surface to a PNG at `path`.
pub fn plot_decision_surface<P: AsRef<Path>>(path: P, spec: &PlotSpec) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| LmsError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    draw(path, spec).map_err(|err| LmsError::Plot(err.to_string()))?;
    info!(path = %path.display(), "wrote decision surface");
    Ok(())
}

fn draw(path: &Path, spec: &PlotSpec) -> std::result::Result<(), Box<dyn Error>> {
    let series = [
        (spec.train.class_rows(0), BLUE, "Train omega1"),
        (spec.train.class_rows(1), RED, "Train omega2"),
        (spec.test.class_rows(0), GREEN, "Test omega1"),
        (spec.test.class_rows(1), YELLOW, "Test omega2"),
    ];
    let (x_range, y_range) = chart_ranges(series.iter().map(|(points, _, _)| points));

    let root_area = BitMapBackend::new(path, SIZE).into_drawing_area();
    root_area.fill(&WHITE)?;

    let mut ctx = ChartBuilder::on(&root_area)
        .set_label_area_size(LabelAreaPosition::Left, 40)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .caption("LMS classification", ("sans-serif", 40))
        .build_cartesian_2d(x_range, y_range.clone())?;

    ctx.configure_mesh().draw()?;

    for (points, color, label) in series.iter() {
        let color: RGBColor = *color;
        ctx.draw_series(
            points
                .rows()
                .map(|row| Circle::new((row[0], row[1]), 4, color.mix(0.5).filled())),
        )?
        .label(*label)
        .legend(move |(x, y)| Circle::new((x, y), 4, color.mix(0.5).filled()));
    }

    if let Some(segment) = clip_boundary(&spec.boundary, LINE_X, y_range) {
        ctx.draw_series(LineSeries::new(segment, RED.stroke_width(2)))?
            .label("Classification surface")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));
    }

    ctx.configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root_area.present()?;
    Ok(())
}

/// Axis ranges covering every point and the boundary span, topped at `Y_TOP`.
fn chart_ranges<'a, I>(sets: I) -> (Range<f64>, Range<f64>)
where
    I: Iterator<Item = &'a FeatureMatrix>,
{
    let (mut x_min, mut x_max) = (LINE_X.start, LINE_X.end);
    let mut y_min = f64::INFINITY;
    for set in sets {
        for row in set.rows() {
            x_min = x_min.min(row[0]);
            x_max = x_max.max(row[0]);
            y_min = y_min.min(row[1]);
        }
    }
    if !y_min.is_finite() {
        y_min = 0.0;
    }
    let y_min = (y_min - MARGIN).min(Y_TOP - 1.0);
    ((x_min - MARGIN)..(x_max + MARGIN), y_min..Y_TOP)
}

/// End points of the boundary inside the box `x` by `y`, if it crosses it.
fn clip_boundary(
    boundary: &DecisionBoundary,
    x: Range<f64>,
    y: Range<f64>,
) -> Option<Vec<(f64, f64)>> {
    if boundary.is_vertical() {
        let x0 = boundary.vertical_x0()?;
        return x.contains(&x0).then(|| vec![(x0, y.start), (x0, y.end)]);
    }

    let (slope, intercept) = (boundary.slope(), boundary.intercept());
    if slope == 0.0 {
        return y
            .contains(&intercept)
            .then(|| vec![(x.start, intercept), (x.end, intercept)]);
    }

    let at_bottom = (y.start - intercept) / slope;
    let at_top = (y.end - intercept) / slope;
    let lo = x.start.max(at_bottom.min(at_top));
    let hi = x.end.min(at_bottom.max(at_top));
    if !(lo < hi) {
        return None;
    }
    Some(vec![(lo, intercept + slope * lo), (hi, intercept + slope * hi)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_boundary_inside() {
        // x1 = 0.5 - 0.5 * x0
        let boundary = DecisionBoundary::from_weights(&[1.0, 2.0, -0.5]).unwrap();
        let segment = clip_boundary(&boundary, -3.0..4.0, -10.0..9.0).unwrap();
        assert_eq!(segment, vec![(-3.0, 2.0), (4.0, -1.5)]);
    }

    #[test]
    fn test_clip_boundary_crosses_top() {
        // x1 = 4 * x0
        let boundary = DecisionBoundary::from_weights(&[-4.0, 1.0, 0.5]).unwrap();
        let segment = clip_boundary(&boundary, -3.0..4.0, 0.0..8.0).unwrap();
        assert_eq!(segment, vec![(0.0, 0.0), (2.0, 8.0)]);
    }

    #[test]
    fn test_clip_boundary_outside() {
        // x1 = 20, above the box
        let boundary = DecisionBoundary::from_weights(&[0.0, 1.0, -19.5]).unwrap();
        assert!(clip_boundary(&boundary, -3.0..4.0, 0.0..9.0).is_none());
    }

    #[test]
    fn test_clip_boundary_vertical() {
        let boundary = DecisionBoundary::from_weights(&[2.0, 0.0, -0.5]).unwrap();
        let segment = clip_boundary(&boundary, -3.0..4.0, 0.0..9.0).unwrap();
        assert_eq!(segment, vec![(0.5, 0.0), (0.5, 9.0)]);
    }

    #[test]
    fn test_chart_ranges() {
        let points = FeatureMatrix::from_rows(vec![vec![-5.0, 1.0], vec![2.0, 12.0]]).unwrap();
        let (x, y) = chart_ranges([&points].into_iter());
        assert_eq!(x, -5.5..4.5);
        assert_eq!(y, 0.5..9.0);

        let (x, y) = chart_ranges(std::iter::empty());
        assert_eq!(x, -3.5..4.5);
        assert_eq!(y, -0.5..9.0);
    }
}
