//! Layout defaults applied to new sections.

/// Spaces prepended to every line of a section.
pub const DEFAULT_INDENTATION: usize = 2;

/// Minimum spaces between the longest flag name and the usage text.
pub const DEFAULT_PADDING: usize = 4;

/// Whether flags are listed in name order.
pub const DEFAULT_SORT_FLAGS: bool = false;

/// Usage columns are shared across all sections unless configured otherwise.
pub const DEFAULT_ALIGNMENT: Alignment = Alignment::Global;

/// Scope over which the usage column is aligned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    /// One column for the whole document, from the longest visible name of
    /// any section.
    #[default]
    Global,
    /// Each section aligns on its own longest visible name.
    PerSection,
}

/// Program-wide layout settings.
///
/// # Examples
///
/// ```
/// use flag_sections::{Alignment, Layout, Program};
///
/// let layout = Layout {
///     indentation: 4,
///     alignment: Alignment::PerSection,
///     ..Layout::default()
/// };
/// let mut program = Program::new().with_layout(layout);
/// let section = program.new_section("General");
/// assert_eq!(section.indentation, 4);
/// assert_eq!(section.padding, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Spaces prepended to every line of a section.
    pub indentation: usize,
    /// Minimum spaces between the longest flag name and the usage text.
    pub padding: usize,
    /// Whether new sections list flags in name order.
    pub sort_flags: bool,
    /// Scope of usage-column alignment.
    pub alignment: Alignment,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            indentation: DEFAULT_INDENTATION,
            padding: DEFAULT_PADDING,
            sort_flags: DEFAULT_SORT_FLAGS,
            alignment: DEFAULT_ALIGNMENT,
        }
    }
}
