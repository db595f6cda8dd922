//! Fixed-precision float formatting without `format!` on floats.
//!
//! Float-to-decimal formatting has panicked on some wasm toolchain/browser
//! combinations, so view labels go through here instead: scale, round into an
//! `i64`, then format integers.

/// Formats `v` with exactly `decimals` fractional digits (at most 9).
///
/// Non-finite input renders as `NaN`, `Inf` or `-Inf`.
pub fn fixed(v: f64, decimals: usize) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if !v.is_finite() {
        return infinity(v);
    }

    let decimals = decimals.min(9);
    let scale = 10_i64.pow(decimals as u32);
    let scaled = (v * scale as f64).round();
    if !scaled.is_finite() || scaled.abs() > i64::MAX as f64 {
        return infinity(v);
    }

    let scaled = scaled as i64;
    let abs = scaled.unsigned_abs();
    let scale = scale as u64;

    let mut out = String::new();
    if scaled < 0 {
        out.push('-');
    }
    out.push_str(&(abs / scale).to_string());
    if decimals > 0 {
        let frac = (abs % scale).to_string();
        out.push('.');
        out.extend(std::iter::repeat('0').take(decimals - frac.len()));
        out.push_str(&frac);
    }
    out
}

/// Like [`fixed`], but drops trailing fractional zeros (`50.000` -> `50`).
pub fn trimmed(v: f64, max_decimals: usize) -> String {
    let s = fixed(v, max_decimals);
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn infinity(v: f64) -> String {
    if v.is_sign_negative() {
        "-Inf".to_string()
    } else {
        "Inf".to_string()
    }
}
