//! Tool descriptors
//!
//! A descriptor names one bundled executable and carries the text shown
//! on its card.

/// One launchable tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolDescriptor {
    /// Card heading
    pub title: &'static str,
    /// One-line summary shown under the heading
    pub description: &'static str,
    /// Executable file name, also the canonical tool identifier
    pub exe_name: &'static str,
}

impl ToolDescriptor {
    /// Create a new descriptor
    pub const fn new(title: &'static str, description: &'static str, exe_name: &'static str) -> Self {
        Self {
            title,
            description,
            exe_name,
        }
    }

    /// Identifier used by the launcher
    pub fn id(&self) -> &'static str {
        self.exe_name
    }

    /// Command-line friendly name derived from the title
    ///
    /// "WZ Icon Viewer" becomes "wz-icon-viewer".
    pub fn slug(&self) -> String {
        let mut slug = String::with_capacity(self.title.len());
        for ch in self.title.chars() {
            if ch.is_ascii_alphanumeric() {
                slug.push(ch.to_ascii_lowercase());
            } else if !slug.is_empty() && !slug.ends_with('-') {
                slug.push('-');
            }
        }
        while slug.ends_with('-') {
            slug.pop();
        }
        slug
    }

    /// Check whether a user-supplied name refers to this tool
    ///
    /// Accepts the executable name, the slug, or the title (case-insensitive).
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        query == self.exe_name || query.eq_ignore_ascii_case(&self.slug()) || query.eq_ignore_ascii_case(self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWER: ToolDescriptor = ToolDescriptor::new(
        "WZ Icon Viewer",
        "Browse and search the flattened MapleStory PNG icons.",
        "wz_icon_viewer_gui.exe",
    );

    #[test]
    fn test_id_is_exe_name() {
        assert_eq!(VIEWER.id(), "wz_icon_viewer_gui.exe");
    }

    #[test]
    fn test_slug_from_title() {
        assert_eq!(VIEWER.slug(), "wz-icon-viewer");
        let odd = ToolDescriptor::new("  Quest -- Editor! ", "", "q.exe");
        assert_eq!(odd.slug(), "quest-editor");
    }

    #[test]
    fn test_matches_exe_slug_and_title() {
        assert!(VIEWER.matches("wz_icon_viewer_gui.exe"));
        assert!(VIEWER.matches("wz-icon-viewer"));
        assert!(VIEWER.matches("WZ-Icon-Viewer"));
        assert!(VIEWER.matches("wz icon viewer"));
        assert!(!VIEWER.matches("wz_icon_flattener_gui.exe"));
        assert!(!VIEWER.matches("viewer"));
    }
}
