//! Properties of the `LinksComponent`.

use yew::prelude::*;

use crate::config::ClientConfig;

#[derive(Properties, PartialEq, Clone)]
pub struct LinksProps {
    /// Where the `/links` service lives and how the filter bar projects.
    /// Read once when the component is created.
    pub config: ClientConfig,
}
