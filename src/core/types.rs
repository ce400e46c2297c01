/*!
 * Core Types
 * Common types used across the simulator
 */

/// Process ID type
pub type Pid = u32;

/// Priority level (1-10, higher is more important)
pub type Priority = u8;

/// Priority bounds
pub const MIN_PRIORITY: Priority = 1;
pub const MAX_PRIORITY: Priority = 10;
pub const DEFAULT_PRIORITY: Priority = 5;

/// Validate priority value
pub fn validate_priority(priority: Priority) -> Result<Priority, String> {
    if (MIN_PRIORITY..=MAX_PRIORITY).contains(&priority) {
        Ok(priority)
    } else {
        Err(format!(
            "Priority {} outside valid range {}-{}",
            priority, MIN_PRIORITY, MAX_PRIORITY
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_validation() {
        assert!(validate_priority(0).is_err());
        assert_eq!(validate_priority(MIN_PRIORITY).unwrap(), 1);
        assert_eq!(validate_priority(DEFAULT_PRIORITY).unwrap(), 5);
        assert_eq!(validate_priority(MAX_PRIORITY).unwrap(), 10);
        assert!(validate_priority(11).is_err());
    }
}
