//! Model behind the visual flow editor: node categories, the connection rules
//! between them, and the editable graph a session builds.

pub mod category;
pub mod drag_payload;
pub mod flow_graph;
pub mod palette;
pub mod session;
pub mod validator;

pub use category::{NodeCategory, ParseCategoryError};
pub use drag_payload::{DragPayload, DropError};
pub use flow_graph::{Edge, EdgeId, FlowGraph, FlowNode, GraphError, NodeId, Position};
pub use palette::{PALETTE, PaletteItem};
pub use session::{Deleted, EditorSession};
pub use validator::{
    CategoryLookup, ConnectionRule, check_category_pair, is_valid_category_pair,
    is_valid_connection,
};
