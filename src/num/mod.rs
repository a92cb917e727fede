/// Canonical text for an f64 number token: integers through `itoa`, the
/// rest through `ryu`. Non-finite values become `null`, matching what a
/// standard JSON encoder does with them.
pub fn format_f64(value: f64) -> String {
    if !value.is_finite() {
        return "null".to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value.fract() == 0.0 && value >= i64::MIN as f64 && value <= i64::MAX as f64 {
        let mut buffer = itoa::Buffer::new();
        return buffer.format(value as i64).to_string();
    }
    let mut buffer = ryu::Buffer::new();
    buffer.format(value).to_string()
}
