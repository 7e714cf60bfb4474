//! The drawing-surface capability consumed by the interpreter.
//!
//! Scrawl itself never renders anything; the host supplies an
//! implementation (an HTML canvas binding, an SVG writer, a recorder in
//! tests) and the drawing builtins mutate it.

/// Abstract 2D canvas the drawing builtins call out to.
///
/// Fill and stroke colors are plain strings; the sentinel `"none"`
/// suppresses the corresponding fill/stroke operation. `rect` and `line`
/// read the colors current at draw time, so prior `stroke`/`fill`/
/// `noStroke`/`noFill` calls couple directly into later draws.
pub trait DrawingSurface {
    /// Surface width in drawing units.
    fn width(&self) -> f64;

    /// Surface height in drawing units.
    fn height(&self) -> f64;

    /// Starts a new path, discarding any path under construction.
    fn begin_path(&mut self);

    /// Moves the path cursor without drawing.
    fn move_to(&mut self, x: f64, y: f64);

    /// Adds a straight segment from the path cursor to `(x, y)`.
    fn line_to(&mut self, x: f64, y: f64);

    /// Adds a rectangle to the current path.
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Adds a circular arc to the current path.
    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64);

    /// Closes the current subpath.
    fn close_path(&mut self);

    /// Fills the current path with the current fill color.
    fn fill(&mut self);

    /// Strokes the current path with the current stroke color.
    fn stroke(&mut self);

    /// Sets the fill color (`"none"` disables filling).
    fn set_fill_color(&mut self, color: String);

    /// Sets the stroke color (`"none"` disables stroking).
    fn set_stroke_color(&mut self, color: String);

    /// Current fill color.
    fn fill_color(&self) -> &str;

    /// Current stroke color.
    fn stroke_color(&self) -> &str;
}
