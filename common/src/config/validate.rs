pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

/// Checks that `value` lies in `min..=max`, naming the field in the error.
pub(crate) fn check_range(name: &str, value: u32, min: u32, max: u32) -> Result<(), String> {
    if value < min || value > max {
        return Err(format!("{} must be between {} and {}, got {}", name, min, max, value));
    }
    Ok(())
}
