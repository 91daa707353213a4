//! Safeguarded secant root finder on a sign-changing bracket.

use fk_core::Real;

/// Root finder configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BracketConfig {
    /// Maximum residual evaluations after the bracket is established
    pub max_iterations: usize,
    /// Absolute tolerance on the residual
    pub abs_tol: Real,
    /// Tolerance relative to the problem's force scale
    pub rel_tol: Real,
    /// Cells marched from the starting point when searching for a sign change
    pub scan_segments: usize,
}

impl Default for BracketConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            abs_tol: 1e-9,
            rel_tol: 1e-8,
            scan_segments: 400,
        }
    }
}

impl BracketConfig {
    /// Residual tolerance for a problem whose forces are of order `scale`.
    pub fn tolerance(&self, scale: Real) -> Real {
        self.abs_tol.max(self.rel_tol * scale.abs())
    }
}

/// Root finder result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BracketResult {
    /// Best abscissa found
    pub x: Real,
    /// Residual at `x`
    pub residual: Real,
    /// Number of residual evaluations
    pub iterations: usize,
    /// Converged flag
    pub converged: bool,
}

/// Outcome of [`scan_sign_change`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scan {
    /// Adjacent points `(x, f(x))` with residuals of opposite sign
    Bracket { lo: (Real, Real), hi: (Real, Real) },
    /// No sign change up to the end of the range; the scanned point with
    /// the smallest residual
    Exhausted {
        x: Real,
        residual: Real,
        evaluations: usize,
    },
}

/// March from `start` toward `end` in `segments` equal cells and stop at the
/// first cell over which `f` changes sign.
///
/// Only the cell nearest `start` is returned, so a residual that rises to a
/// peak and falls again is bracketed on its rising side.
pub fn scan_sign_change<F>(
    f: &F,
    (start, f_start): (Real, Real),
    end: Real,
    segments: usize,
) -> Scan
where
    F: Fn(Real) -> Real,
{
    let segments = segments.max(1);
    let step = (end - start) / segments as Real;
    let (mut a, mut fa) = (start, f_start);
    let mut best = (start, f_start);

    for i in 1..=segments {
        let b = if i == segments { end } else { start + i as Real * step };
        let fb = f(b);
        if fb.is_finite() && fb.abs() < best.1.abs() {
            best = (b, fb);
        }
        if fa.is_finite() && fb.is_finite() && fa * fb <= 0.0 {
            return Scan::Bracket {
                lo: (a, fa),
                hi: (b, fb),
            };
        }
        a = b;
        fa = fb;
    }

    Scan::Exhausted {
        x: best.0,
        residual: best.1,
        evaluations: segments,
    }
}

/// Find `x` in `[a, b]` with `|f(x)| <= tol`, given `f(a)` and `f(b)` of
/// opposite sign.
///
/// Takes secant steps while they stay inside the bracket and shrink it by at
/// least half; otherwise bisects. On failure the best point seen is returned
/// with `converged = false`.
pub fn solve_bracketed<F>(
    f: &F,
    (mut a, mut fa): (Real, Real),
    (mut b, mut fb): (Real, Real),
    tol: Real,
    max_iterations: usize,
) -> BracketResult
where
    F: Fn(Real) -> Real,
{
    let mut best = if fa.abs() <= fb.abs() { (a, fa) } else { (b, fb) };
    let done = |x: Real, fx: Real, iterations: usize| BracketResult {
        x,
        residual: fx,
        iterations,
        converged: true,
    };

    if best.1.abs() <= tol {
        return done(best.0, best.1, 0);
    }
    if fa * fb > 0.0 {
        return BracketResult {
            x: best.0,
            residual: best.1,
            iterations: 0,
            converged: false,
        };
    }

    let mut iterations = 0;
    while iterations < max_iterations {
        let width = (b - a).abs();

        let secant = b - fb * (b - a) / (fb - fa);
        let inside = secant.is_finite() && secant > a.min(b) && secant < a.max(b);
        let x = if inside { secant } else { 0.5 * (a + b) };
        let fx = f(x);
        iterations += 1;

        if fx.abs() < best.1.abs() {
            best = (x, fx);
        }
        if fx.abs() <= tol {
            return done(x, fx, iterations);
        }
        if fa * fx < 0.0 {
            b = x;
            fb = fx;
        } else {
            a = x;
            fa = fx;
        }

        // Secant stalled against one end: force a bisection
        if (b - a).abs() > 0.5 * width && iterations < max_iterations {
            let m = 0.5 * (a + b);
            let fm = f(m);
            iterations += 1;
            if fm.abs() < best.1.abs() {
                best = (m, fm);
            }
            if fm.abs() <= tol {
                return done(m, fm, iterations);
            }
            if fa * fm < 0.0 {
                b = m;
                fb = fm;
            } else {
                a = m;
                fa = fm;
            }
        }

        if (b - a).abs() <= Real::EPSILON * (a.abs() + b.abs()) {
            break;
        }
    }

    BracketResult {
        x: best.0,
        residual: best.1,
        iterations,
        converged: false,
    }
}
