//! Exit code constants for the promptplan CLI.
//!
//! - 0: Success (including runs where no row produced a file)
//! - 1: User error (missing input file, unusable plan header)
//! - 2: I/O failure while reading inputs or resolving paths

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: a required input is missing or the plan table has no usable header.
pub const USER_ERROR: i32 = 1;

/// I/O failure: an input exists but could not be read, or the base directory is unknown.
pub const IO_FAILURE: i32 = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, IO_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
