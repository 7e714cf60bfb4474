//! Drawing builtins: the only operations that touch the surface.
//!
//! `rect` and `line` read the fill/stroke color sentinels current at draw
//! time, so color-setting calls earlier in the program directly change
//! what later draw calls do.

use crate::error::{LocatedError, Result};
use crate::parser::Expr;
use crate::runtime::Interpreter;

/// Color value that suppresses the corresponding fill/stroke operation.
pub const NO_COLOR: &str = "none";

impl Interpreter<'_> {
    pub(crate) fn eval_rgb(&mut self, args: &[Expr], offset: Option<usize>) -> Result<Option<Expr>> {
        if args.len() != 3 {
            return Err(LocatedError::at(
                format!("rgb requires exactly 3 arguments, got {}", args.len()),
                offset,
            ));
        }

        let r = clamp_channel(self.number_arg(&args[0], "rgb")?);
        let g = clamp_channel(self.number_arg(&args[1], "rgb")?);
        let b = clamp_channel(self.number_arg(&args[2], "rgb")?);
        Ok(Some(Expr::string(format!("rgb({},{},{})", r, g, b))))
    }

    pub(crate) fn eval_stroke(
        &mut self,
        args: &[Expr],
        offset: Option<usize>,
    ) -> Result<Option<Expr>> {
        let color = self.color_arg("stroke", args, offset)?;
        self.surface().set_stroke_color(color);
        Ok(None)
    }

    pub(crate) fn eval_fill(
        &mut self,
        args: &[Expr],
        offset: Option<usize>,
    ) -> Result<Option<Expr>> {
        let color = self.color_arg("fill", args, offset)?;
        self.surface().set_fill_color(color);
        Ok(None)
    }

    pub(crate) fn eval_no_stroke(
        &mut self,
        args: &[Expr],
        offset: Option<usize>,
    ) -> Result<Option<Expr>> {
        if !args.is_empty() {
            return Err(LocatedError::at(
                format!("noStroke takes no arguments, got {}", args.len()),
                offset,
            ));
        }
        self.surface().set_stroke_color(NO_COLOR.to_string());
        Ok(None)
    }

    pub(crate) fn eval_no_fill(
        &mut self,
        args: &[Expr],
        offset: Option<usize>,
    ) -> Result<Option<Expr>> {
        if !args.is_empty() {
            return Err(LocatedError::at(
                format!("noFill takes no arguments, got {}", args.len()),
                offset,
            ));
        }
        self.surface().set_fill_color(NO_COLOR.to_string());
        Ok(None)
    }

    pub(crate) fn eval_rect(
        &mut self,
        args: &[Expr],
        offset: Option<usize>,
    ) -> Result<Option<Expr>> {
        if args.len() != 4 {
            return Err(LocatedError::at(
                format!("rect requires exactly 4 arguments, got {}", args.len()),
                offset,
            ));
        }

        let x = self.number_arg(&args[0], "rect")?;
        let y = self.number_arg(&args[1], "rect")?;
        let w = self.number_arg(&args[2], "rect")?;
        let h = self.number_arg(&args[3], "rect")?;

        let surface = self.surface();
        surface.begin_path();
        surface.rect(x, y, w, h);
        if surface.fill_color() != NO_COLOR {
            surface.fill();
        }
        if surface.stroke_color() != NO_COLOR {
            surface.stroke();
        }
        Ok(None)
    }

    pub(crate) fn eval_line(
        &mut self,
        args: &[Expr],
        offset: Option<usize>,
    ) -> Result<Option<Expr>> {
        if args.len() != 4 {
            return Err(LocatedError::at(
                format!("line requires exactly 4 arguments, got {}", args.len()),
                offset,
            ));
        }

        let x1 = self.number_arg(&args[0], "line")?;
        let y1 = self.number_arg(&args[1], "line")?;
        let x2 = self.number_arg(&args[2], "line")?;
        let y2 = self.number_arg(&args[3], "line")?;

        let surface = self.surface();
        surface.begin_path();
        surface.move_to(x1, y1);
        surface.line_to(x2, y2);
        // Lines are stroked, never filled
        if surface.stroke_color() != NO_COLOR {
            surface.stroke();
        }
        Ok(None)
    }

    /// Evaluates the single string argument of `stroke`/`fill`.
    fn color_arg(&mut self, what: &str, args: &[Expr], offset: Option<usize>) -> Result<String> {
        let [arg] = args else {
            return Err(LocatedError::at(
                format!("{} requires exactly 1 argument, got {}", what, args.len()),
                offset,
            ));
        };
        match self.evaluate_value(arg)? {
            Expr::String { value, .. } => Ok(value),
            other => Err(LocatedError::at(
                format!("{} requires a string, got {}", what, other.type_name()),
                arg.offset(),
            )),
        }
    }
}

/// Floors a color component and clamps it into 0..=255.
fn clamp_channel(value: f64) -> i64 {
    (value.floor() as i64).clamp(0, 255)
}
