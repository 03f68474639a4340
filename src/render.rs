//! SVG chart rendering for the comfort visualization
//!
//! Draws the fixed training table as a connected line with point
//! markers and overlays the live (temperature, predicted score) point
//! in a distinct style. Output is a self-contained SVG fragment the
//! page injects directly.

use std::fmt::Write;

use crate::comfort::TRAINING_TABLE;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 400.0;
const MARGIN_LEFT: f64 = 56.0;
const MARGIN_RIGHT: f64 = 24.0;
const MARGIN_TOP: f64 = 32.0;
const MARGIN_BOTTOM: f64 = 48.0;

struct Scale {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Scale {
    /// Cover the training table and stretch to include the live point
    fn covering(live_temp: f64, live_score: f64) -> Self {
        Self {
            x_min: (live_temp - 2.0).min(0.0),
            x_max: (live_temp + 2.0).max(40.0),
            y_min: (live_score - 1.0).min(0.0),
            y_max: (live_score + 1.0).max(10.0),
        }
    }

    fn x(&self, temperature: f64) -> f64 {
        let plot_width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
        MARGIN_LEFT + (temperature - self.x_min) / (self.x_max - self.x_min) * plot_width
    }

    fn y(&self, score: f64) -> f64 {
        let plot_height = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
        MARGIN_TOP + (self.y_max - score) / (self.y_max - self.y_min) * plot_height
    }
}

/// Render the comfort-vs-temperature chart with the live point overlaid
#[must_use]
pub fn comfort_chart(city: &str, live_temp: f64, live_score: f64) -> String {
    let scale = Scale::covering(live_temp, live_score);

    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {WIDTH} {HEIGHT}" role="img" aria-label="Comfort prediction chart">"#
    );

    // Axes
    let x_axis_y = scale.y(scale.y_min);
    let y_axis_x = scale.x(scale.x_min);
    let _ = write!(
        svg,
        r#"<line x1="{y_axis_x:.1}" y1="{:.1}" x2="{y_axis_x:.1}" y2="{x_axis_y:.1}" stroke="gray"/>"#,
        scale.y(scale.y_max)
    );
    let _ = write!(
        svg,
        r#"<line x1="{y_axis_x:.1}" y1="{x_axis_y:.1}" x2="{:.1}" y2="{x_axis_y:.1}" stroke="gray"/>"#,
        scale.x(scale.x_max)
    );
    let _ = write!(
        svg,
        r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="14">Temperature (°C)</text>"#,
        WIDTH / 2.0,
        HEIGHT - 10.0
    );
    let _ = write!(
        svg,
        r#"<text x="16" y="{:.1}" text-anchor="middle" font-size="14" transform="rotate(-90 16 {:.1})">Comfort Score (1-10)</text>"#,
        HEIGHT / 2.0,
        HEIGHT / 2.0
    );

    // Training data line
    let mut points = String::new();
    for p in &TRAINING_TABLE {
        let _ = write!(
            points,
            "{:.1},{:.1} ",
            scale.x(p.temperature),
            scale.y(p.score)
        );
    }
    let _ = write!(
        svg,
        r#"<polyline points="{}" fill="none" stroke="skyblue" stroke-width="2"/>"#,
        points.trim_end()
    );

    // Training point markers
    for p in &TRAINING_TABLE {
        let _ = write!(
            svg,
            r#"<circle class="train" cx="{:.1}" cy="{:.1}" r="4" fill="skyblue"/>"#,
            scale.x(p.temperature),
            scale.y(p.score)
        );
    }

    // Live point, drawn last so it sits on top
    let _ = write!(
        svg,
        r#"<circle class="live" cx="{:.1}" cy="{:.1}" r="7" fill="red"/>"#,
        scale.x(live_temp),
        scale.y(live_score)
    );
    let _ = write!(
        svg,
        r#"<text x="{:.1}" y="{:.1}" font-size="12" fill="red">Live ({})</text>"#,
        scale.x(live_temp) + 10.0,
        scale.y(live_score) - 8.0,
        escape_text(city)
    );

    svg.push_str("</svg>");
    svg
}

fn escape_text(raw: &str) -> String {
    raw.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
