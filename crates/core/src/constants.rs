/// Constants used throughout the teardown workspace
// Registry defaults
pub const DEFAULT_INITIAL_CAPACITY: usize = 4;
pub const DEFAULT_RELEASE_ON_DROP: bool = true;

// Environment variable names
pub const TEARDOWN_LOG_VAR: &str = "TEARDOWN_LOG";
pub const TEARDOWN_INITIAL_CAPACITY_VAR: &str = "TEARDOWN_INITIAL_CAPACITY";
pub const TEARDOWN_RELEASE_ON_DROP_VAR: &str = "TEARDOWN_RELEASE_ON_DROP";
