extern crate descent;

use std::io::Write;
use std::process::{Command, Stdio};

use descent::gallery::{rastrigin, sample_grid};

/// Samples Rastrigin's function on a grid and hands the surface to gnuplot.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let problem = rastrigin(2);
    let n = 150;
    let samples = sample_grid::<f32, _>(&problem, n);

    let mut gnuplot = Command::new("gnuplot")
        .arg("-persist")
        .stdin(Stdio::piped())
        .spawn()?;
    {
        let pipe = gnuplot.stdin.as_mut().ok_or("gnuplot has no stdin")?;
        writeln!(pipe, "splot '-' u 1:2:3 w pm3d")?;
        for (k, row) in samples.outer_iter().enumerate() {
            writeln!(pipe, "{} {} {}", row[0], row[1], row[2])?;
            if (k + 1) % n == 0 {
                writeln!(pipe)?;
            }
        }
        writeln!(pipe, "e")?;
    }
    gnuplot.wait()?;
    Ok(())
}
