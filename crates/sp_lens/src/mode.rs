use sp_value::Value;

/// The operation a navigator performs on its focus.
///
/// Only [`ForceUpdate`](Self::ForceUpdate) carries a default value, since it
/// is the only mode able to use one.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Mode {
    /// Read the focus.
    #[default]
    View,
    /// Replace the focus.
    Update,
    /// Replace the focus, or insert the default into an empty container.
    ForceUpdate(Value),
}

impl Mode {
    /// Returns the default value of [`Mode::ForceUpdate`].
    #[inline]
    pub fn default_value(&self) -> Option<&Value> {
        match self {
            Self::ForceUpdate(default) => Some(default),
            _ => None,
        }
    }

    /// Returns `true` for the modes that rebuild the container.
    #[inline]
    pub fn is_write(&self) -> bool {
        !matches!(self, Self::View)
    }

    /// The mode for the levels above the last step of a path.
    ///
    /// Defaults only apply at the innermost level, so `ForceUpdate`
    /// becomes `Update`.
    #[inline]
    pub(crate) fn outer(&self) -> Mode {
        match self {
            Self::View => Self::View,
            Self::Update | Self::ForceUpdate(_) => Self::Update,
        }
    }
}
