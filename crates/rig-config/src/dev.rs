//! Development server configuration types.

use serde::{Deserialize, Serialize};

use crate::bundle::helpers::{default_port, default_true};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevServer {
    /// Serve the HTML shell for unknown paths (client-side routing)
    #[serde(default = "default_true")]
    pub history_api_fallback: bool,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl DevServer {
    pub fn on_port(port: u16) -> Self {
        Self {
            history_api_fallback: true,
            port,
        }
    }
}

impl Default for DevServer {
    fn default() -> Self {
        Self::on_port(default_port())
    }
}
