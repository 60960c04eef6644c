//! Configuration schema types for the tutor.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod provider;
mod request;
mod system;

pub use provider::*;
pub use request::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TutorConfig {
    pub provider: ProviderConfig,
    pub request: RequestConfig,
    pub export: ExportConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}
