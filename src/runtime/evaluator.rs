use crate::error::{LocatedError, Result};
use crate::parser::{Expr, Program};
use crate::runtime::SymbolTable;
use crate::surface::DrawingSurface;

/// Hard cap on `while` iterations; the loop fails closed instead of
/// silently truncating.
pub const MAX_LOOP_ITERATIONS: usize = 1_000_000;

/// Tree-walking evaluator for Scrawl programs.
///
/// Owns the scope chain and borrows the host's drawing surface for the
/// duration of a run. Top-level expressions are evaluated strictly in
/// source order against the shared root scope: an error short-circuits
/// only the expression it occurred in, and root-level `set` mutations
/// (as well as all surface mutations) persist across the rest of the run.
pub struct Interpreter<'a> {
    env: SymbolTable,
    surface: &'a mut dyn DrawingSurface,
}

impl<'a> Interpreter<'a> {
    /// Creates an interpreter whose root scope binds numeric `width` and
    /// `height` (rebindable via `set`, like any other binding).
    pub fn new(surface: &'a mut dyn DrawingSurface, width: f64, height: f64) -> Self {
        let mut env = SymbolTable::new();
        env.define("width", Expr::number(width));
        env.define("height", Expr::number(height));
        Interpreter { env, surface }
    }

    /// Evaluates every top-level expression, returning one result per
    /// expression in source order. `Ok(None)` marks expressions that
    /// produce no value (the drawing builtins).
    pub fn run(&mut self, program: &Program) -> Vec<Result<Option<Expr>>> {
        tracing::debug!(exprs = program.exprs.len(), "running program");
        program
            .exprs
            .iter()
            .map(|expr| self.evaluate(expr))
            .collect()
    }

    /// Evaluates a single expression.
    pub fn evaluate(&mut self, expr: &Expr) -> Result<Option<Expr>> {
        match expr {
            // Literals are self-quoting
            Expr::Number { .. } | Expr::String { .. } | Expr::Boolean { .. } => {
                Ok(Some(expr.clone()))
            }

            Expr::Symbol { name, offset } => match name.as_str() {
                // Reserved literals; environment lookup cannot shadow these
                "true" => Ok(Some(Expr::Boolean {
                    value: true,
                    offset: *offset,
                })),
                "false" => Ok(Some(Expr::Boolean {
                    value: false,
                    offset: *offset,
                })),
                _ => match self.env.lookup(name) {
                    Some(value) => Ok(Some(value.clone())),
                    None => Err(LocatedError::at(
                        format!("Symbol {} undefined", name),
                        *offset,
                    )),
                },
            },

            Expr::List { elements, offset } => {
                let Some((head, args)) = elements.split_first() else {
                    return Err(LocatedError::at("Cannot evaluate empty list", *offset));
                };
                match head {
                    Expr::Symbol {
                        name,
                        offset: head_offset,
                    } => self.call_builtin(name, *head_offset, args, *offset),
                    _ => Err(LocatedError::at(
                        format!("Cannot evaluate list {}", expr),
                        *offset,
                    )),
                }
            }
        }
    }

    /// Dispatches a list form to its builtin. Each builtin receives its
    /// arguments unevaluated and controls its own evaluation order, arity
    /// checking, and short-circuiting.
    fn call_builtin(
        &mut self,
        name: &str,
        name_offset: Option<usize>,
        args: &[Expr],
        offset: Option<usize>,
    ) -> Result<Option<Expr>> {
        match name {
            "+" => self.eval_add(args),
            "-" => self.eval_sub(args),
            "*" => self.eval_mul(args),
            "/" => self.eval_div(args, offset),
            ">" | ">=" | "<" | "<=" => self.eval_comparison(name, args, offset),
            "=" => self.eval_equality(args, offset),
            "if" => self.eval_if(args, offset),
            "let" => self.eval_let(args, offset),
            "set" => self.eval_set(args, offset),
            "while" => self.eval_while(args, offset),
            "rgb" => self.eval_rgb(args, offset),
            "stroke" => self.eval_stroke(args, offset),
            "fill" => self.eval_fill(args, offset),
            "noStroke" => self.eval_no_stroke(args, offset),
            "noFill" => self.eval_no_fill(args, offset),
            "rect" => self.eval_rect(args, offset),
            "line" => self.eval_line(args, offset),
            _ => Err(LocatedError::at(
                format!("Unimplemented built-in function {}", name),
                name_offset,
            )),
        }
    }

    /// The drawing surface this run mutates.
    pub(crate) fn surface(&mut self) -> &mut dyn DrawingSurface {
        &mut *self.surface
    }

    /// Evaluates an expression that must produce a value.
    pub(crate) fn evaluate_value(&mut self, expr: &Expr) -> Result<Expr> {
        match self.evaluate(expr)? {
            Some(value) => Ok(value),
            None => Err(LocatedError::at(
                "Expression produced no value",
                expr.offset(),
            )),
        }
    }

    /// Evaluates an argument that must be a number; `what` names the
    /// operation for the diagnostic ("Addition requires numbers, got ...").
    pub(crate) fn number_arg(&mut self, arg: &Expr, what: &str) -> Result<f64> {
        match self.evaluate_value(arg)? {
            Expr::Number { value, .. } => Ok(value),
            other => Err(LocatedError::at(
                format!("{} requires numbers, got {}", what, other.type_name()),
                arg.offset(),
            )),
        }
    }

    /// Truthiness rule shared by `if` and `while`: number != 0,
    /// string != "", boolean as-is. Anything else is an error.
    fn truthy(&mut self, expr: &Expr, what: &str) -> Result<bool> {
        match self.evaluate_value(expr)? {
            Expr::Number { value, .. } => Ok(value != 0.0),
            Expr::String { value, .. } => Ok(!value.is_empty()),
            Expr::Boolean { value, .. } => Ok(value),
            other => Err(LocatedError::at(
                format!(
                    "{} condition must be a number, string, or boolean, got {}",
                    what,
                    other.type_name()
                ),
                expr.offset(),
            )),
        }
    }

    // =========================================================================
    // Arithmetic
    // =========================================================================

    fn eval_add(&mut self, args: &[Expr]) -> Result<Option<Expr>> {
        let mut sum = 0.0;
        for arg in args {
            sum += self.number_arg(arg, "Addition")?;
        }
        Ok(Some(Expr::number(sum)))
    }

    fn eval_sub(&mut self, args: &[Expr]) -> Result<Option<Expr>> {
        let Some((first, rest)) = args.split_first() else {
            return Ok(Some(Expr::number(0.0)));
        };
        let mut acc = self.number_arg(first, "Subtraction")?;
        if rest.is_empty() {
            return Ok(Some(Expr::number(-acc)));
        }
        for arg in rest {
            acc -= self.number_arg(arg, "Subtraction")?;
        }
        Ok(Some(Expr::number(acc)))
    }

    fn eval_mul(&mut self, args: &[Expr]) -> Result<Option<Expr>> {
        let mut product = 1.0;
        for arg in args {
            product *= self.number_arg(arg, "Multiplication")?;
        }
        Ok(Some(Expr::number(product)))
    }

    fn eval_div(&mut self, args: &[Expr], offset: Option<usize>) -> Result<Option<Expr>> {
        let Some((first, rest)) = args.split_first() else {
            return Err(LocatedError::at(
                "Division requires at least 1 argument",
                offset,
            ));
        };
        let first_value = self.number_arg(first, "Division")?;

        if rest.is_empty() {
            if first_value == 0.0 {
                return Err(LocatedError::at("Division by zero", first.offset()));
            }
            return Ok(Some(Expr::number(1.0 / first_value)));
        }

        let mut acc = first_value;
        for arg in rest {
            let divisor = self.number_arg(arg, "Division")?;
            if divisor == 0.0 {
                return Err(LocatedError::at("Division by zero", arg.offset()));
            }
            acc /= divisor;
        }
        Ok(Some(Expr::number(acc)))
    }

    // =========================================================================
    // Comparison and equality
    // =========================================================================

    fn eval_comparison(
        &mut self,
        op: &str,
        args: &[Expr],
        offset: Option<usize>,
    ) -> Result<Option<Expr>> {
        if args.len() < 2 {
            return Err(LocatedError::at(
                format!("{} requires at least 2 arguments", op),
                offset,
            ));
        }

        let relation: fn(f64, f64) -> bool = match op {
            ">" => |a, b| a > b,
            ">=" => |a, b| a >= b,
            "<" => |a, b| a < b,
            _ => |a, b| a <= b,
        };

        let mut values = Vec::with_capacity(args.len());
        for arg in args {
            values.push(self.number_arg(arg, "Comparison")?);
        }

        // Every consecutive pair must satisfy the relation
        let holds = values.windows(2).all(|pair| relation(pair[0], pair[1]));
        Ok(Some(Expr::boolean(holds)))
    }

    fn eval_equality(&mut self, args: &[Expr], offset: Option<usize>) -> Result<Option<Expr>> {
        if args.len() < 2 {
            return Err(LocatedError::at("= requires at least 2 arguments", offset));
        }

        let mut values = Vec::with_capacity(args.len());
        for arg in args {
            let value = self.evaluate_value(arg)?;
            match value {
                Expr::Number { .. } | Expr::String { .. } | Expr::Boolean { .. } => {}
                ref other => {
                    return Err(LocatedError::at(
                        format!("Cannot compare {} values", other.type_name()),
                        arg.offset(),
                    ));
                }
            }
            values.push(value);
        }

        let first = &values[0];
        let all_equal = values[1..].iter().all(|value| values_equal(first, value));
        Ok(Some(Expr::boolean(all_equal)))
    }

    // =========================================================================
    // Control flow and bindings
    // =========================================================================

    fn eval_if(&mut self, args: &[Expr], offset: Option<usize>) -> Result<Option<Expr>> {
        if args.len() != 3 {
            return Err(LocatedError::at(
                format!("if requires exactly 3 arguments, got {}", args.len()),
                offset,
            ));
        }

        // Exactly one branch is evaluated; the other is never touched
        let branch = if self.truthy(&args[0], "if")? {
            &args[1]
        } else {
            &args[2]
        };
        Ok(Some(self.evaluate_value(branch)?))
    }

    fn eval_let(&mut self, args: &[Expr], offset: Option<usize>) -> Result<Option<Expr>> {
        if args.len() < 2 {
            return Err(LocatedError::at(
                "let requires a bindings list and a body",
                offset,
            ));
        }

        // Validate binding structure before touching the environment
        let pairs = match &args[0] {
            Expr::List { elements, .. } => elements,
            other => {
                return Err(LocatedError::at(
                    "let requires a bindings list as its first argument",
                    other.offset(),
                ));
            }
        };

        let mut bindings = Vec::with_capacity(pairs.len());
        for pair in pairs {
            let Expr::List { elements, offset } = pair else {
                return Err(LocatedError::at(
                    "let binding must be a (symbol expression) pair",
                    pair.offset(),
                ));
            };
            let [name_expr, value_expr] = elements.as_slice() else {
                return Err(LocatedError::at(
                    "let binding must be a (symbol expression) pair",
                    *offset,
                ));
            };
            let Expr::Symbol { name, .. } = name_expr else {
                return Err(LocatedError::at(
                    "let binding requires a symbol name",
                    name_expr.offset(),
                ));
            };
            bindings.push((name.clone(), value_expr));
        }

        self.env.enter_scope();
        let result = self.eval_let_body(bindings, &args[1..]);
        self.env.exit_scope();
        result
    }

    fn eval_let_body(
        &mut self,
        bindings: Vec<(String, &Expr)>,
        body: &[Expr],
    ) -> Result<Option<Expr>> {
        // Sequential binding: later bindings see earlier ones
        for (name, value_expr) in bindings {
            let value = self.evaluate_value(value_expr)?;
            self.env.define(name, value);
        }

        let mut last = None;
        for expr in body {
            last = self.evaluate(expr)?;
        }
        Ok(last)
    }

    fn eval_set(&mut self, args: &[Expr], offset: Option<usize>) -> Result<Option<Expr>> {
        if args.len() != 2 {
            return Err(LocatedError::at(
                format!("set requires exactly 2 arguments, got {}", args.len()),
                offset,
            ));
        }

        let Expr::Symbol {
            name,
            offset: name_offset,
        } = &args[0]
        else {
            return Err(LocatedError::at(
                "set requires a symbol as its first argument",
                args[0].offset(),
            ));
        };

        // The binding must already exist somewhere in the scope chain
        if self.env.lookup(name).is_none() {
            return Err(LocatedError::at(
                format!("Cannot set undefined symbol {}", name),
                *name_offset,
            ));
        }

        let value = self.evaluate_value(&args[1])?;
        self.env.assign(name, value.clone());
        Ok(Some(value))
    }

    fn eval_while(&mut self, args: &[Expr], offset: Option<usize>) -> Result<Option<Expr>> {
        let Some((condition, body)) = args.split_first() else {
            return Err(LocatedError::at("while requires a condition", offset));
        };

        let mut iterations: usize = 0;
        loop {
            if !self.truthy(condition, "while")? {
                return Ok(Some(Expr::boolean(false)));
            }

            iterations += 1;
            if iterations > MAX_LOOP_ITERATIONS {
                return Err(LocatedError::at(
                    format!(
                        "While loop exceeded maximum of {} iterations",
                        MAX_LOOP_ITERATIONS
                    ),
                    offset,
                ));
            }

            // Body results are discarded
            for expr in body {
                self.evaluate(expr)?;
            }
        }
    }
}

/// Primitive equality: same variant, same value. Offsets are ignored;
/// mismatched (but supported) variants compare unequal rather than erroring.
fn values_equal(a: &Expr, b: &Expr) -> bool {
    match (a, b) {
        (Expr::Number { value: a, .. }, Expr::Number { value: b, .. }) => a == b,
        (Expr::String { value: a, .. }, Expr::String { value: b, .. }) => a == b,
        (Expr::Boolean { value: a, .. }, Expr::Boolean { value: b, .. }) => a == b,
        _ => false,
    }
}
