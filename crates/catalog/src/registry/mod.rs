//! Catalog registry: entry types, validation, and the built-in block set.

mod defaults;
mod types;

pub use defaults::default_ocean_catalog;
pub use types::{
    CatalogConfig, CatalogConfigError, CatalogEntry, CatalogGroup, SidebarGroup, SidebarItem,
};
