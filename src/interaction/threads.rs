//! Background field of sine-wave lines that drift over time and bend
//! towards the pointer.

use crate::interaction::{Point, Size};

pub const LINE_COUNT: usize = 40;
pub const LINE_SEPARATION: f64 = 15.0;
pub const BASE_AMPLITUDE: f64 = 50.0;
pub const TIME_STEP: f64 = 0.005;
pub const SAMPLE_STEP: f64 = 5.0;
pub const LINE_WIDTH: f64 = 1.5;

/// Cyan, purple, white; line `i` uses `COLORS[i % 3]`.
pub const COLORS: [&str; 3] = ["#06b6d4", "#8b5cf6", "#ffffff"];

#[derive(Debug, Clone, PartialEq)]
pub struct ThreadLine {
    pub color: &'static str,
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThreadField {
    amplitude: f64,
    mouse_interaction: bool,
    time: f64,
    pointer: Point,
}

impl Default for ThreadField {
    fn default() -> Self {
        Self::new(1.0, true)
    }
}

impl ThreadField {
    pub fn new(amplitude: f64, mouse_interaction: bool) -> Self {
        Self {
            amplitude,
            mouse_interaction,
            time: 0.0,
            pointer: Point::new(0.0, 0.0),
        }
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    /// Ignored when mouse interaction is off.
    pub fn pointer_moved(&mut self, position: Point) {
        if self.mouse_interaction {
            self.pointer = position;
        }
    }

    /// Advances the clock by one frame and returns the lines to stroke.
    pub fn frame(&mut self, canvas: Size) -> Vec<ThreadLine> {
        self.time += TIME_STEP;
        (0..LINE_COUNT)
            .map(|i| ThreadLine {
                color: COLORS[i % COLORS.len()],
                points: self.sample_line(i, canvas),
            })
            .collect()
    }

    fn sample_line(&self, line: usize, canvas: Size) -> Vec<Point> {
        let mut points = Vec::new();
        let mut x = 0.0;
        while x < canvas.width {
            points.push(Point::new(x, self.y_at(line, x, canvas.height)));
            x += SAMPLE_STEP;
        }
        points
    }

    /// `h/2 + (i - 20) * 15 + sin(x * 0.003 + t + i * 0.2) * A + mouse`
    pub fn y_at(&self, line: usize, x: f64, canvas_height: f64) -> f64 {
        let i = line as f64;
        let wave = (x * 0.003 + self.time + i * 0.2).sin() * BASE_AMPLITUDE * self.amplitude;
        let mouse = if self.mouse_interaction {
            (x * 0.01 + self.time).sin() * ((self.pointer.x - x) * 0.001) * 20.0
        } else {
            0.0
        };
        canvas_height / 2.0 + (i - LINE_COUNT as f64 / 2.0) * LINE_SEPARATION + wave + mouse
    }
}
