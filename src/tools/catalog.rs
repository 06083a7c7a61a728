//! The built-in tool catalog
//!
//! Provides the compiled-in descriptor table and lookup methods.

use crate::error::{Result, ToolboxError};

use super::definition::ToolDescriptor;

/// Tools shipped in the `tools/` directory of every build
pub const BUILTIN_TOOLS: [ToolDescriptor; 3] = [
    ToolDescriptor::new(
        "Quest Editor",
        "GUI editor for MapleStory quest XMLs (QuestInfo, Check, Act).",
        "MapleStory Quest Editor.exe",
    ),
    ToolDescriptor::new(
        "WZ Icon Flattener",
        "Flatten dumped WZ data into PNG icons + JSON database (icon_db.json).",
        "wz_icon_flattener_gui.exe",
    ),
    ToolDescriptor::new(
        "WZ Icon Viewer",
        "Browse and search the flattened MapleStory PNG icons.",
        "wz_icon_viewer_gui.exe",
    ),
];

/// Ordered, immutable set of tool descriptors
#[derive(Debug, Clone)]
pub struct ToolCatalog {
    tools: Vec<ToolDescriptor>,
}

impl ToolCatalog {
    /// Create a catalog from an explicit descriptor list
    pub fn new(tools: Vec<ToolDescriptor>) -> Self {
        Self { tools }
    }

    /// The catalog this build ships with
    pub fn builtin() -> Self {
        Self::new(BUILTIN_TOOLS.to_vec())
    }

    /// All descriptors in display order
    pub fn tools(&self) -> &[ToolDescriptor] {
        &self.tools
    }

    /// Number of tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Descriptor at a display position
    pub fn get(&self, index: usize) -> Option<&ToolDescriptor> {
        self.tools.get(index)
    }

    /// Find a tool by executable name, slug or title
    ///
    /// Exact executable-name matches win over the looser forms.
    pub fn find(&self, query: &str) -> Option<&ToolDescriptor> {
        self.tools
            .iter()
            .find(|t| t.exe_name == query)
            .or_else(|| self.tools.iter().find(|t| t.matches(query)))
    }

    /// Like `find`, but an unknown name is an error
    pub fn resolve(&self, query: &str) -> Result<&ToolDescriptor> {
        self.find(query)
            .ok_or_else(|| ToolboxError::UnknownTool(query.to_string()))
    }
}

impl Default for ToolCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
