//! CLI command implementations
//!
//! Every command returns the process exit code:
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Success |
//! | 2 | Configuration or validation error |
//! | 3 | Batch rejected by the conversion engine |
//! | 5 | Fatal or system error |

pub mod convert;
pub mod describe;
pub mod init;
pub mod validate;

use crate::domain::LeadflowError;

/// Exit code for a successful command
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for configuration and validation errors
pub const EXIT_INVALID: i32 = 2;
/// Exit code for an engine rejection
pub const EXIT_REJECTED: i32 = 3;
/// Exit code for fatal and system errors
pub const EXIT_FATAL: i32 = 5;

/// Map an error to the exit code reported for it
pub fn exit_code_for(error: &LeadflowError) -> i32 {
    match error {
        LeadflowError::Configuration(_)
        | LeadflowError::InvalidRequest { .. }
        | LeadflowError::Validation(_)
        | LeadflowError::Serialization(_) => EXIT_INVALID,
        LeadflowError::Engine(e) if e.is_rejection() => EXIT_REJECTED,
        _ => EXIT_FATAL,
    }
}
