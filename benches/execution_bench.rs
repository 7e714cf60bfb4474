//! Criterion benchmarks for parsing and end-to-end execution.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scrawl::{parse, DrawingSurface, Interpreter};

#[derive(Default)]
struct NoopSurface {
    fill: String,
    stroke: String,
}

impl DrawingSurface for NoopSurface {
    fn width(&self) -> f64 {
        300.0
    }
    fn height(&self) -> f64 {
        300.0
    }
    fn begin_path(&mut self) {}
    fn move_to(&mut self, _x: f64, _y: f64) {}
    fn line_to(&mut self, _x: f64, _y: f64) {}
    fn rect(&mut self, _x: f64, _y: f64, _width: f64, _height: f64) {}
    fn arc(&mut self, _x: f64, _y: f64, _radius: f64, _start: f64, _end: f64) {}
    fn close_path(&mut self) {}
    fn fill(&mut self) {}
    fn stroke(&mut self) {}
    fn set_fill_color(&mut self, color: String) {
        self.fill = color;
    }
    fn set_stroke_color(&mut self, color: String) {
        self.stroke = color;
    }
    fn fill_color(&self) -> &str {
        &self.fill
    }
    fn stroke_color(&self) -> &str {
        &self.stroke
    }
}

const GRID_SCRIPT: &str = r#"
(noStroke)
(let ((y 0))
  (while (< y height)
    (let ((x 0))
      (while (< x width)
        (fill (rgb x y 128))
        (rect x y 10 10)
        (set x (+ x 10))))
    (set y (+ y 10))))
"#;

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_grid_script", |b| {
        b.iter(|| parse(black_box(GRID_SCRIPT)))
    });
}

fn bench_execute(c: &mut Criterion) {
    let program = parse(GRID_SCRIPT).expect("benchmark script should parse");

    c.bench_function("run_grid_script", |b| {
        b.iter(|| {
            let mut surface = NoopSurface::default();
            let mut interpreter = Interpreter::new(&mut surface, 300.0, 300.0);
            black_box(interpreter.run(black_box(&program)))
        })
    });

    let arithmetic = parse("(+ 1 (* 2 3) (- 10 4) (/ 100 5))").expect("should parse");
    c.bench_function("run_arithmetic", |b| {
        b.iter(|| {
            let mut surface = NoopSurface::default();
            let mut interpreter = Interpreter::new(&mut surface, 300.0, 300.0);
            black_box(interpreter.run(black_box(&arithmetic)))
        })
    });
}

criterion_group!(benches, bench_parse, bench_execute);
criterion_main!(benches);
