//! Exit code constants for the mobitor CLI.
//!
//! - 0: Success (also the default for any monitored outcome)
//! - 1: User error (bad args, unreadable config)
//! - 127: Monitored command could not be launched (only under the
//!   `propagate` exit-code policy)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// The monitored command could not be started.
pub const LAUNCH_FAILURE: i32 = 127;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, LAUNCH_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn launch_failure_matches_shell_convention() {
        assert_eq!(LAUNCH_FAILURE, 127);
    }
}
