//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

/// Default log filter when neither `--verbose` nor `RUST_LOG` is given
pub const DEFAULT_LOG_FILTER: &str = "info";

// =============================================================================
// Routes
// =============================================================================

/// Mount point of the User actions; also the redirect target after a write
pub const USERS_PATH: &str = "/User";

