use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};

/// State layout: [x0, y0, x1, y1, x2, y2, u0, v0, u1, v1, u2, v2].
type State = [f64; 12];

/// Spring / damping / central-attraction parameters.
#[derive(Debug, Clone, Copy)]
struct Params {
    /// Spring constant.
    k: f64,
    /// Natural spring length.
    l: f64,
    /// Damping along each spring.
    b: f64,
    /// Strength of the inverse-square pull toward the origin.
    g: f64,
}

const PARAMS: Params = Params {
    k: 0.25,
    l: 1.0,
    b: 4.0,
    g: 5.0,
};

const INITIAL: State = [
    6.0, 8.2, 8.2, 8.0, 8.2, 8.2, //
    0.4, -0.4, 0.1, -0.25, 0.5, -0.25,
];

/// Spacing of the output rows.
const OUTPUT_DT: f64 = 0.25;
/// Integrator sub-steps per output row.
const SUBSTEPS: usize = 25;
const T_END: f64 = 2500.0;

/// Pairs of bodies joined by a spring.
const SPRINGS: [(usize, usize); 3] = [(0, 1), (0, 2), (1, 2)];

/// Stiffening spring: tension grows with the cube of the stretch.
fn spring_tension(r: f64, k: f64, l: f64) -> f64 {
    let rho = l / r;
    k * r * (1.0 - rho) * (1.0 + rho + rho * rho)
}

fn derivative(w: &State, p: &Params) -> State {
    let mut f = [0.0; 12];
    for i in 0..3 {
        f[2 * i] = w[2 * i + 6];
        f[2 * i + 1] = w[2 * i + 7];
    }

    for &(i, j) in &SPRINGS {
        let dx = w[2 * j] - w[2 * i];
        let dy = w[2 * j + 1] - w[2 * i + 1];
        let dist = dx.hypot(dy);
        let (ux, uy) = (dx / dist, dy / dist);

        // Relative speed along the spring.
        let s = (w[2 * j + 6] - w[2 * i + 6]) * ux + (w[2 * j + 7] - w[2 * i + 7]) * uy;
        let pull = spring_tension(dist, p.k, p.l) + p.b * s;

        f[2 * i + 6] += pull * ux;
        f[2 * i + 7] += pull * uy;
        f[2 * j + 6] -= pull * ux;
        f[2 * j + 7] -= pull * uy;
    }

    if p.g > 0.0 {
        for i in 0..3 {
            let (x, y) = (w[2 * i], w[2 * i + 1]);
            let r = x.hypot(y).max(1e-4);
            let r3 = r * r * r;
            f[2 * i + 6] -= p.g * x / r3;
            f[2 * i + 7] -= p.g * y / r3;
        }
    }
    f
}

fn axpy(w: &State, h: f64, k: &State) -> State {
    let mut out = *w;
    for (o, d) in out.iter_mut().zip(k) {
        *o += h * d;
    }
    out
}

/// One classic fourth-order Runge-Kutta step.
fn rk4_step(w: &State, h: f64, p: &Params) -> State {
    let k1 = derivative(w, p);
    let k2 = derivative(&axpy(w, h / 2.0, &k1), p);
    let k3 = derivative(&axpy(w, h / 2.0, &k2), p);
    let k4 = derivative(&axpy(w, h, &k3), p);

    let mut out = *w;
    for i in 0..out.len() {
        out[i] += h / 6.0 * (k1[i] + 2.0 * k2[i] + 2.0 * k3[i] + k4[i]);
    }
    out
}

/// `%.8e` as printf writes it: signed exponent with at least two digits.
fn format_c_exp(v: f64) -> String {
    let rust = format!("{v:.8e}");
    let Some((mantissa, exp)) = rust.split_once('e') else {
        return rust; // NaN / inf
    };
    match exp.parse::<i32>() {
        Ok(e) => {
            let sign = if e < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", e.abs())
        }
        Err(_) => rust,
    }
}

fn format_row(t: f64, w: &State) -> String {
    let mut line = format_c_exp(t);
    for v in w {
        line.push(' ');
        line.push_str(&format_c_exp(*v));
    }
    line
}

fn main() -> Result<()> {
    let output_path = std::env::args().nth(1).unwrap_or_else(|| "out".to_string());
    let file = File::create(&output_path)
        .with_context(|| format!("creating output file {output_path}"))?;
    let mut out = BufWriter::new(file);

    let h = OUTPUT_DT / SUBSTEPS as f64;
    let n_rows = (T_END / OUTPUT_DT).round() as usize;
    let mut w = INITIAL;

    writeln!(out, "{}", format_row(0.0, &w))?;
    for row in 1..=n_rows {
        for _ in 0..SUBSTEPS {
            w = rk4_step(&w, h, &PARAMS);
        }
        writeln!(out, "{}", format_row(row as f64 * OUTPUT_DT, &w))?;
    }
    out.flush().context("flushing output file")?;

    println!(
        "Wrote {} rows (t = 0 … {T_END}) to {output_path}",
        n_rows + 1
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spring_is_slack_at_natural_length() {
        assert_eq!(spring_tension(1.0, 0.25, 1.0), 0.0);
        assert!(spring_tension(2.0, 0.25, 1.0) > 0.0);
        assert!(spring_tension(0.5, 0.25, 1.0) < 0.0);
    }

    #[test]
    fn springs_conserve_momentum_without_central_pull() {
        let p = Params { g: 0.0, ..PARAMS };
        let f = derivative(&INITIAL, &p);
        let fx: f64 = (0..3).map(|i| f[2 * i + 6]).sum();
        let fy: f64 = (0..3).map(|i| f[2 * i + 7]).sum();
        assert!(fx.abs() < 1e-12);
        assert!(fy.abs() < 1e-12);
    }

    #[test]
    fn stretched_spring_pulls_bodies_together() {
        let p = Params { g: 0.0, b: 0.0, ..PARAMS };
        let mut w = [0.0; 12];
        w[0] = -2.0; // body 0 at (-2, 0)
        w[2] = 2.0; // body 1 at (2, 0)
        w[4] = 0.0;
        w[5] = 10.0; // body 2 far above
        let f = derivative(&w, &p);
        assert!(f[6] > 0.0, "body 0 should accelerate toward body 1");
        assert!(f[8] < 0.0, "body 1 should accelerate toward body 0");
    }

    #[test]
    fn integration_stays_finite() {
        let h = OUTPUT_DT / SUBSTEPS as f64;
        let mut w = INITIAL;
        for _ in 0..(40 * SUBSTEPS) {
            w = rk4_step(&w, h, &PARAMS);
        }
        assert!(w.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn rows_have_time_plus_twelve_fields() {
        let line = format_row(0.25, &INITIAL);
        let fields: Vec<&str> = line.split_whitespace().collect();
        assert_eq!(fields.len(), 13);
        assert_eq!(fields[0], "2.50000000e-01");
        assert_eq!(fields[1], "6.00000000e+00");
        assert_eq!(fields[1].parse::<f64>().unwrap(), 6.0);
    }

    #[test]
    fn exponent_matches_printf() {
        assert_eq!(format_c_exp(0.0), "0.00000000e+00");
        assert_eq!(format_c_exp(-0.4), "-4.00000000e-01");
        assert_eq!(format_c_exp(2500.0), "2.50000000e+03");
        assert_eq!(format_c_exp(1.5e-123), "1.50000000e-123");
        assert_eq!(format_c_exp(f64::INFINITY), "inf");
    }
}
