/// Renders a float the way search-team tooling expects in text exports:
/// shortest round-trip digits, a trailing `.0` on integral values, and
/// scientific notation with a signed two-digit exponent below 1e-4 or from
/// 1e16 upward.
pub fn repr_f64(value: f64) -> String {
    if value.is_nan() {
        return "nan".into();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.into();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0.0" } else { "0.0" }.into();
    }

    let scientific = format!("{:e}", value);
    if let Some((mantissa, exp)) = scientific.split_once('e') {
        if let Ok(exp) = exp.parse::<i32>() {
            if !(-4..16).contains(&exp) {
                let sign = if exp < 0 { '-' } else { '+' };
                return format!("{}e{}{:02}", mantissa, sign, exp.abs());
            }
        }
    }

    let fixed = format!("{}", value);
    if fixed.contains('.') {
        fixed
    } else {
        format!("{}.0", fixed)
    }
}
