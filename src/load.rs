use tracing::debug;

use crate::error::SidebarError;
use crate::model::SidebarItem;

/// Reads a sidebar item list from JSON (Docusaurus sidebar shape).
///
/// Items are tagged by `type`; unrecognized types become
/// [`SidebarItem::Unknown`] instead of failing the whole sidebar.
pub fn load_sidebar(json: &str) -> Result<Vec<SidebarItem>, SidebarError> {
    let items: Vec<SidebarItem> = serde_json::from_str(json)?;
    debug!(items = items.len(), "loaded sidebar");
    Ok(items)
}
