//! The components a user can drag onto the canvas.

use crate::category::NodeCategory;
use crate::drag_payload::DragPayload;

/// A draggable component in the editor sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaletteItem {
    /// Component kind, also used as the node id prefix.
    pub kind: &'static str,
    pub label: &'static str,
    /// Name of the icon drawn for this component.
    pub icon: &'static str,
    pub category: NodeCategory,
}

const fn item(
    kind: &'static str,
    label: &'static str,
    icon: &'static str,
    category: NodeCategory,
) -> PaletteItem {
    PaletteItem {
        kind,
        label,
        icon,
        category,
    }
}

/// Every component, grouped by section in sidebar order.
pub static PALETTE: [PaletteItem; 9] = [
    item("SAP", "ERP", "Database", NodeCategory::Connector),
    item("SALESFORCE", "CRM", "Database", NodeCategory::Connector),
    item("fileJson", "JSON", "FileJson", NodeCategory::Connector),
    item("fileXml", "XML", "FileCode", NodeCategory::Connector),
    item("lookup", "Lookup", "Filter", NodeCategory::Transformation),
    item("aggregate", "Aggregate", "Layers", NodeCategory::Transformation),
    item("split", "Conditional Split", "Zap", NodeCategory::Transformation),
    item("cron", "Cron", "Link", NodeCategory::Job),
    item("webhook", "Webhook", "Link", NodeCategory::Job),
];

/// Find a component by its kind. Kinds are case sensitive.
pub fn find(kind: &str) -> Option<&'static PaletteItem> {
    PALETTE.iter().find(|item| item.kind == kind)
}

/// The components listed under the sidebar section for `category`. Empty for
/// start and end, which aren't in the palette.
pub fn section(category: NodeCategory) -> impl Iterator<Item = &'static PaletteItem> {
    PALETTE.iter().filter(move |item| item.category == category)
}

/// Heading of the sidebar section for `category`, if it has one.
pub fn section_title(category: NodeCategory) -> Option<&'static str> {
    match category {
        NodeCategory::Connector => Some("Connectors"),
        NodeCategory::Transformation => Some("Transformations"),
        NodeCategory::Job => Some("Jobs"),
        NodeCategory::Start | NodeCategory::End => None,
    }
}

impl PaletteItem {
    /// The payload attached when this component starts being dragged.
    pub fn drag_payload(&self) -> DragPayload {
        DragPayload {
            kind: self.kind.to_string(),
            label: self.label.to_string(),
            icon_type: self.icon.to_string(),
            category: self.category,
        }
    }
}
