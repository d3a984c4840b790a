use std::path::Path;

use plotters::prelude::*;

use crate::consts::EARTH_RADIUS_KM;
use crate::error::{FitsPhotError, Result};
use crate::orbits::OrbitTrack;

const PLOT_SIZE: (u32, u32) = (1200, 900);
const GRID_STEP_DEG: usize = 30;

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for FitsPhotError {
    fn from(e: DrawingAreaErrorKind<E>) -> Self {
        Self::Plot(e.to_string())
    }
}

/// Render orbit tracks around a wireframe Earth as a 3-D PNG. The vertical
/// axis is Z.
pub fn plot_orbits(tracks: &[OrbitTrack], path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let extent = plot_extent(tracks);
    let mut chart = ChartBuilder::on(&root)
        .caption("Satellite Orbital Trajectories", ("sans-serif", 30))
        .margin(20)
        .build_cartesian_3d(-extent..extent, -extent..extent, -extent..extent)?;
    chart.with_projection(|mut pb| {
        pb.yaw = 0.6;
        pb.pitch = 0.3;
        pb.scale = 0.85;
        pb.into_matrix()
    });
    chart.configure_axes().draw()?;

    for ring in earth_wireframe() {
        chart.draw_series(LineSeries::new(ring, BLUE.mix(0.25)))?;
    }

    let colors = [RED, GREEN, BLUE, RGBColor(255, 165, 0), MAGENTA, CYAN];
    for (track, &color) in tracks.iter().zip(colors.iter().cycle()) {
        let points = track
            .samples
            .iter()
            .map(|s| (s.position[0], s.position[2], s.position[1]));
        chart
            .draw_series(LineSeries::new(points, color.stroke_width(2)))?
            .label(track.name.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;
    root.present()?;
    Ok(())
}

/// Half-width of the plotted cube: the largest coordinate, at least the
/// Earth radius, with a small margin.
fn plot_extent(tracks: &[OrbitTrack]) -> f64 {
    tracks
        .iter()
        .flat_map(|t| &t.samples)
        .flat_map(|s| s.position)
        .filter(|v| v.is_finite())
        .fold(EARTH_RADIUS_KM, |m, v| m.max(v.abs()))
        * 1.05
}

/// Meridians and parallels on a sphere of Earth radius, in plot axis order.
fn earth_wireframe() -> Vec<Vec<(f64, f64, f64)>> {
    let point = |lat_deg: f64, lon_deg: f64| {
        let (lat, lon) = (lat_deg.to_radians(), lon_deg.to_radians());
        (
            EARTH_RADIUS_KM * lat.cos() * lon.cos(),
            EARTH_RADIUS_KM * lat.sin(),
            EARTH_RADIUS_KM * lat.cos() * lon.sin(),
        )
    };

    let meridians = (0..360).step_by(GRID_STEP_DEG).map(|lon| {
        (-90..=90)
            .step_by(5)
            .map(|lat| point(lat as f64, lon as f64))
            .collect::<Vec<_>>()
    });
    let parallels = (-60..=60).step_by(GRID_STEP_DEG).map(|lat| {
        (0..=360)
            .step_by(5)
            .map(|lon| point(lat as f64, lon as f64))
            .collect::<Vec<_>>()
    });
    meridians.chain(parallels).collect()
}
