//! Client settings baked in at build time.
//!
//! - `LINKS_API_BASE`: origin of the `/links` service, e.g.
//!   `http://localhost:3000`. Empty means the page's own origin, which is
//!   the case when the backend serves the client.
//! - `LINKS_PROJECTION`: `composed` to sort the filtered list instead of
//!   showing whichever of filter or sort was touched last.

use links_common::ProjectionMode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
    pub projection: ProjectionMode,
}

impl ClientConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("LINKS_API_BASE"), option_env!("LINKS_PROJECTION"))
    }

    pub fn from_values(api_base: Option<&str>, projection: Option<&str>) -> Self {
        let api_base = api_base.unwrap_or_default().trim().trim_end_matches('/').to_string();
        let projection = match projection.unwrap_or_default().parse::<ProjectionMode>() {
            Ok(mode) => mode,
            Err(e) => {
                log::warn!("LINKS_PROJECTION: {}, using last-action-wins", e);
                ProjectionMode::default()
            }
        };
        Self { api_base, projection }
    }
}
