//! Layout direction of the host container.

/// Horizontal layout direction.
///
/// Start/end anchors resolve against the leading and trailing edges, which
/// swap physical sides under right-to-left layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LayoutDirection {
    #[default]
    Ltr,
    Rtl,
}

impl LayoutDirection {
    pub fn is_rtl(self) -> bool {
        matches!(self, LayoutDirection::Rtl)
    }
}
