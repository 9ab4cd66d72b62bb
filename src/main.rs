//! Benchmark and demo runner for the matrix operations.

use std::time::Instant;

use clap::Parser;
use densemat::{Matrix, ops};
use log::info;

#[derive(Parser)]
#[command(name = "densemat")]
#[command(about = "Time the dense matrix operations on square inputs")]
#[command(version)]
struct Cli {
    /// Square matrix sizes to benchmark
    #[arg(short, long, value_delimiter = ',', default_value = "64,128,256")]
    sizes: Vec<usize>,

    /// Timed runs per operation
    #[arg(short, long, default_value_t = 3)]
    iterations: usize,

    /// Print a small worked example before benchmarking
    #[arg(long)]
    demo: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.demo {
        demo()?;
    }

    println!("=== Dense Matrix Benchmark ===\n");
    let iterations = cli.iterations.max(1);

    for &size in &cli.sizes {
        info!("benchmarking {size}x{size}, {iterations} iterations");
        println!("Matrix: {}×{}", size, size);
        println!("{}", "-".repeat(50));

        let a = filled(size)?;
        let b = filled(size)?;
        let mut c = Matrix::zeros(size, size)?;

        let ms = time_ms(iterations, || ops::multiply(&a, &b, &mut c))?;
        match size.checked_mul(size).and_then(|s| s.checked_mul(size)) {
            Some(cube) => println!(
                "{:16} {:8.3} ms  {:6.2} GFLOPS",
                "multiply",
                ms,
                2.0 * cube as f64 / (ms / 1000.0) / 1e9
            ),
            None => println!("{:16} {:8.3} ms", "multiply", ms),
        }

        let ms = time_ms(iterations, || ops::add(&a, &b, &mut c))?;
        println!("{:16} {:8.3} ms", "add", ms);

        let ms = time_ms(iterations, || ops::transpose(&a, &mut c))?;
        println!("{:16} {:8.3} ms", "transpose", ms);
        println!();
    }

    Ok(())
}

/// Deterministic test data, same pattern for every size.
fn filled(size: usize) -> densemat::Result<Matrix> {
    let mut m = Matrix::init(size, size)?;
    for (i, x) in m.as_mut_slice().iter_mut().enumerate() {
        *x = (i % 100) as f32 / 10.0;
    }
    Ok(m)
}

/// Average wall time of `f` over `iterations` runs, after one warmup.
fn time_ms<F>(iterations: usize, mut f: F) -> densemat::Result<f64>
where
    F: FnMut() -> densemat::Result<()>,
{
    f()?;
    let mut total = 0.0;
    for _ in 0..iterations {
        let start = Instant::now();
        f()?;
        total += start.elapsed().as_secs_f64();
    }
    Ok(total / iterations as f64 * 1000.0)
}

fn demo() -> Result<(), Box<dyn std::error::Error>> {
    let mut stdout = std::io::stdout().lock();

    let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])?;
    let at = a.transposed()?;
    let mut gram = Matrix::zeros(2, 2)?;
    ops::multiply(&a, &at, &mut gram)?;

    println!("A =");
    a.format_to(&mut stdout)?;
    println!("A^T =");
    at.format_to(&mut stdout)?;
    println!("A * A^T =");
    gram.format_to(&mut stdout)?;
    println!("trace(A * A^T) = {:.2}", ops::trace(&gram)?);

    let v = Matrix::from_vec(1, 2, vec![3.0, 4.0])?;
    println!("|[3, 4]| = {:.2}\n", ops::euclidean_norm(&v)?);
    Ok(())
}
