//! Decorative wireframe torus knot behind the hero.
//!
//! The page only talks to [`SceneRenderer`]; the plotters-on-canvas renderer
//! is one implementation of it and can be swapped without touching the rest
//! of the site.

use std::f64::consts::TAU;

use gloo_timers::callback::Interval;
use log::warn;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use thiserror::Error;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

const FRAME_MS: u32 = 16;

const KNOT_RADIUS: f64 = 10.0;
const TUBE_RADIUS: f64 = 3.0;
const TUBULAR_SEGMENTS: usize = 100;
const RADIAL_SEGMENTS: usize = 16;
const KNOT_P: f64 = 2.0;
const KNOT_Q: f64 = 3.0;

/// Half-width of the cube the knot is drawn in. The knot reaches
/// `1.5 * KNOT_RADIUS + TUBE_RADIUS` from the origin at most.
const EXTENT: f64 = 20.0;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("scene canvas is not mounted")]
    NoCanvas,
    #[error("canvas 2d context unavailable")]
    NoContext,
    #[error("drawing failed: {0}")]
    Draw(String),
}

/// Orientation of the knot, in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SceneState {
    pub rotation_x: f64,
    pub rotation_y: f64,
}

impl SceneState {
    pub fn tick(&mut self, delta_seconds: f64) {
        self.rotation_x += delta_seconds * 0.1;
        self.rotation_y += delta_seconds * 0.12;
    }
}

pub trait SceneRenderer {
    fn render(&self, state: &SceneState) -> Result<(), SceneError>;
}

type Point3 = (f64, f64, f64);

fn knot_point(u: f64) -> Point3 {
    let qu_over_p = KNOT_Q / KNOT_P * u;
    let cs = qu_over_p.cos();
    (
        KNOT_RADIUS * (2.0 + cs) * 0.5 * u.cos(),
        KNOT_RADIUS * (2.0 + cs) * 0.5 * u.sin(),
        KNOT_RADIUS * qu_over_p.sin() * 0.5,
    )
}

fn sub(a: Point3, b: Point3) -> Point3 {
    (a.0 - b.0, a.1 - b.1, a.2 - b.2)
}

fn add(a: Point3, b: Point3) -> Point3 {
    (a.0 + b.0, a.1 + b.1, a.2 + b.2)
}

fn cross(a: Point3, b: Point3) -> Point3 {
    (
        a.1 * b.2 - a.2 * b.1,
        a.2 * b.0 - a.0 * b.2,
        a.0 * b.1 - a.1 * b.0,
    )
}

fn normalize(a: Point3) -> Point3 {
    let len = (a.0 * a.0 + a.1 * a.1 + a.2 * a.2).sqrt();
    if len == 0.0 {
        return a;
    }
    (a.0 / len, a.1 / len, a.2 / len)
}

/// Wireframe polylines: one ring per tubular segment plus one strand per
/// radial segment running along the tube.
pub fn torus_knot_wireframe() -> Vec<Vec<Point3>> {
    let mut grid: Vec<Vec<Point3>> = Vec::with_capacity(TUBULAR_SEGMENTS + 1);

    for i in 0..=TUBULAR_SEGMENTS {
        let u = i as f64 / TUBULAR_SEGMENTS as f64 * KNOT_P * TAU;
        let p1 = knot_point(u);
        let p2 = knot_point(u + 0.01);

        let tangent = sub(p2, p1);
        let binormal = normalize(cross(tangent, add(p2, p1)));
        let normal = normalize(cross(binormal, tangent));

        let ring = (0..=RADIAL_SEGMENTS)
            .map(|j| {
                let v = j as f64 / RADIAL_SEGMENTS as f64 * TAU;
                let cx = -TUBE_RADIUS * v.cos();
                let cy = TUBE_RADIUS * v.sin();
                (
                    p1.0 + cx * normal.0 + cy * binormal.0,
                    p1.1 + cx * normal.1 + cy * binormal.1,
                    p1.2 + cx * normal.2 + cy * binormal.2,
                )
            })
            .collect();
        grid.push(ring);
    }

    let strands = (0..=RADIAL_SEGMENTS).map(|j| grid.iter().map(|ring| ring[j]).collect::<Vec<_>>());
    let mut lines: Vec<Vec<Point3>> = strands.collect();
    lines.extend(grid);
    lines
}

/// `#rrggbb` to a plotters color.
pub fn parse_hex_color(hex: &str) -> Option<RGBColor> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(digits.get(range)?, 16).ok();
    Some(RGBColor(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Draws the knot with plotters' 3D projection onto an HTML canvas.
pub struct PlottersCanvasRenderer {
    canvas: HtmlCanvasElement,
    stroke: RGBColor,
    background: RGBColor,
    wireframe: Vec<Vec<Point3>>,
}

impl PlottersCanvasRenderer {
    pub fn new(canvas: HtmlCanvasElement, stroke: RGBColor, background: RGBColor) -> Self {
        Self {
            canvas,
            stroke,
            background,
            wireframe: torus_knot_wireframe(),
        }
    }
}

impl SceneRenderer for PlottersCanvasRenderer {
    fn render(&self, state: &SceneState) -> Result<(), SceneError> {
        let backend = CanvasBackend::with_canvas_object(self.canvas.clone()).ok_or(SceneError::NoContext)?;
        let root = backend.into_drawing_area();
        root.fill(&self.background)
            .map_err(|e| SceneError::Draw(format!("{:?}", e)))?;

        let mut chart = ChartBuilder::on(&root)
            .build_cartesian_3d(-EXTENT..EXTENT, -EXTENT..EXTENT, -EXTENT..EXTENT)
            .map_err(|e| SceneError::Draw(format!("{:?}", e)))?;

        let (pitch, yaw) = (state.rotation_x, state.rotation_y);
        chart.with_projection(|mut pb| {
            pb.pitch = pitch;
            pb.yaw = yaw;
            pb.scale = 0.9;
            pb.into_matrix()
        });

        let style = self.stroke.mix(0.6);
        for line in &self.wireframe {
            chart
                .draw_series(LineSeries::new(line.iter().copied(), &style))
                .map_err(|e| SceneError::Draw(format!("{:?}", e)))?;
        }

        root.present().map_err(|e| SceneError::Draw(format!("{:?}", e)))?;
        Ok(())
    }
}

#[derive(Properties, PartialEq)]
pub struct SceneCanvasProps {
    pub accent: String,
    pub background: String,
}

#[function_component(SceneCanvas)]
pub fn scene_canvas(props: &SceneCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |(accent, background)| {
                let stroke = parse_hex_color(accent).unwrap_or(RED);
                let background = parse_hex_color(background).unwrap_or(BLACK);

                let interval = match canvas_ref.cast::<HtmlCanvasElement>().ok_or(SceneError::NoCanvas) {
                    Ok(canvas) => {
                        canvas.set_width(canvas.client_width().max(1) as u32);
                        canvas.set_height(canvas.client_height().max(1) as u32);

                        let renderer = PlottersCanvasRenderer::new(canvas, stroke, background);
                        let mut state = SceneState::default();
                        let mut failed = false;
                        Some(Interval::new(FRAME_MS, move || {
                            if failed {
                                return;
                            }
                            state.tick(FRAME_MS as f64 / 1000.0);
                            if let Err(err) = renderer.render(&state) {
                                warn!("scene disabled: {}", err);
                                failed = true;
                            }
                        }))
                    }
                    Err(err) => {
                        warn!("{}", err);
                        None
                    }
                };

                move || drop(interval)
            },
            (props.accent.clone(), props.background.clone()),
        );
    }

    html! {
        <canvas ref={canvas_ref} class="scene-canvas" aria-hidden="true"></canvas>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_advances_at_fixed_rates() {
        let mut state = SceneState::default();
        state.tick(2.0);
        assert!((state.rotation_x - 0.2).abs() < 1e-12);
        assert!((state.rotation_y - 0.24).abs() < 1e-12);
    }

    #[test]
    fn wireframe_fits_the_drawing_cube() {
        let lines = torus_knot_wireframe();
        assert_eq!(lines.len(), (RADIAL_SEGMENTS + 1) + (TUBULAR_SEGMENTS + 1));
        for point in lines.iter().flatten() {
            let (x, y, z) = *point;
            assert!(x.abs() <= EXTENT && y.abs() <= EXTENT && z.abs() <= EXTENT);
        }
    }

    #[test]
    fn rings_have_tube_radius() {
        let lines = torus_knot_wireframe();
        let ring = &lines[RADIAL_SEGMENTS + 1];
        let center = knot_point(0.0);
        for point in ring {
            let d = sub(*point, center);
            let dist = (d.0 * d.0 + d.1 * d.1 + d.2 * d.2).sqrt();
            assert!((dist - TUBE_RADIUS).abs() < 1e-6, "distance {dist}");
        }
    }

    #[test]
    fn parses_hex_colors() {
        assert_eq!(parse_hex_color("#ff3e3e"), Some(RGBColor(0xff, 0x3e, 0x3e)));
        assert_eq!(parse_hex_color("ff3e3e"), None);
        assert_eq!(parse_hex_color("#fff"), None);
        assert_eq!(parse_hex_color("#zz0000"), None);
    }
}
