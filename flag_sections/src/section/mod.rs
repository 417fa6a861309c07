//! Named groups of flags rendered as one help block.

pub(crate) mod layout;

use tracing::trace;

use crate::flag::{Flag, FlagDescriptor};

use layout::column_width;

/// A titled group of flags with optional description and footer text.
///
/// Sections are normally created through
/// [`Program::new_section`](crate::Program::new_section), which seeds the
/// layout fields from the program defaults. The public fields may be changed
/// freely before rendering.
///
/// # Examples
///
/// ```
/// use flag_sections::Section;
///
/// let mut section = Section::new("General");
/// section.bool_p("verbose", 'v', false, "Enable verbose output");
/// section.compute_column_width(section.max_visible_name_len());
///
/// assert_eq!(
///     section.render(),
///     "General:\n  -v, --verbose    Enable verbose output\n",
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Section {
    /// Title line; omitted when empty.
    pub name: String,
    /// Text written before the flags, one indented line per input line.
    pub description: String,
    /// Text written after the flags, one indented line per input line.
    pub footer: String,
    /// Spaces prepended to every flag, description and footer line.
    pub indentation: usize,
    /// Minimum spaces between the longest flag name and the usage text.
    pub padding: usize,
    /// Visit flags in name order instead of registration order.
    pub sort_flags: bool,
    flags: Vec<Flag>,
    resolved_column_width: Option<usize>,
}

impl Section {
    /// Creates an empty section using the library layout defaults.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            footer: String::new(),
            indentation: crate::DEFAULT_INDENTATION,
            padding: crate::DEFAULT_PADDING,
            sort_flags: crate::DEFAULT_SORT_FLAGS,
            flags: Vec::new(),
            resolved_column_width: None,
        }
    }

    /// Registers a flag.
    pub fn add(&mut self, flag: Flag) -> &mut Self {
        self.flags.push(flag);
        self
    }

    /// Registers a boolean switch.
    pub fn bool(&mut self, name: &str, default: bool, usage: &str) -> &mut Self {
        self.add(Flag::bool(name, default, usage))
    }

    /// Registers a boolean switch with a shorthand.
    pub fn bool_p(&mut self, name: &str, short: char, default: bool, usage: &str) -> &mut Self {
        self.add(Flag::bool(name, default, usage).short(short))
    }

    /// Registers a string flag.
    pub fn string(&mut self, name: &str, default: &str, usage: &str) -> &mut Self {
        self.add(Flag::string(name, default, usage))
    }

    /// Registers a string flag with a shorthand.
    pub fn string_p(&mut self, name: &str, short: char, default: &str, usage: &str) -> &mut Self {
        self.add(Flag::string(name, default, usage).short(short))
    }

    /// Registers a signed integer flag.
    pub fn int(&mut self, name: &str, default: i64, usage: &str) -> &mut Self {
        self.add(Flag::int(name, default, usage))
    }

    /// Registers a signed integer flag with a shorthand.
    pub fn int_p(&mut self, name: &str, short: char, default: i64, usage: &str) -> &mut Self {
        self.add(Flag::int(name, default, usage).short(short))
    }

    /// Registers an unsigned integer flag.
    pub fn uint(&mut self, name: &str, default: u64, usage: &str) -> &mut Self {
        self.add(Flag::uint(name, default, usage))
    }

    /// Registers a floating point flag.
    pub fn float(&mut self, name: &str, default: f64, usage: &str) -> &mut Self {
        self.add(Flag::float(name, default, usage))
    }

    /// Registers a string list flag.
    pub fn string_list(&mut self, name: &str, defaults: &[&str], usage: &str) -> &mut Self {
        self.add(Flag::string_list(name, defaults, usage))
    }

    /// Registers a signed integer list flag.
    pub fn int_list(&mut self, name: &str, defaults: &[i64], usage: &str) -> &mut Self {
        self.add(Flag::int_list(name, defaults, usage))
    }

    /// Registers an unsigned integer list flag.
    pub fn uint_list(&mut self, name: &str, defaults: &[u64], usage: &str) -> &mut Self {
        self.add(Flag::uint_list(name, defaults, usage))
    }

    /// Registers a boolean list flag.
    pub fn bool_list(&mut self, name: &str, defaults: &[bool], usage: &str) -> &mut Self {
        self.add(Flag::bool_list(name, defaults, usage))
    }

    /// Finds a registered flag by name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Flag> {
        self.flags.iter().find(|flag| flag.name() == name)
    }

    /// Finds a registered flag by name for modification.
    pub fn lookup_mut(&mut self, name: &str) -> Option<&mut Flag> {
        self.flags.iter_mut().find(|flag| flag.name() == name)
    }

    /// Registered flags, in registration order, hidden ones included.
    pub fn flags(&self) -> impl Iterator<Item = &Flag> {
        self.flags.iter()
    }

    /// Visits every flag, hidden ones included, honouring [`Self::sort_flags`].
    pub fn visit_all<F>(&self, mut visit: F)
    where
        F: FnMut(&Flag),
    {
        if self.sort_flags {
            let mut sorted: Vec<&Flag> = self.flags.iter().collect();
            sorted.sort_by(|a, b| a.name().cmp(b.name()));
            sorted.into_iter().for_each(visit);
        } else {
            for flag in &self.flags {
                visit(flag);
            }
        }
    }

    /// Length of the longest visible flag name, or 0 without visible flags.
    #[must_use]
    pub fn max_visible_name_len(&self) -> usize {
        self.flags
            .iter()
            .filter(|flag| !flag.is_hidden())
            .map(|flag| flag.name().chars().count())
            .max()
            .unwrap_or(0)
    }

    /// Returns `true` when the section has nothing to render: no visible
    /// flags, no description and no footer.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.max_visible_name_len() == 0 && self.description.is_empty() && self.footer.is_empty()
    }

    /// Fixes the usage column from the longest name in the chosen scope.
    pub fn compute_column_width(&mut self, shared_max_name_len: usize) {
        self.resolved_column_width = Some(column_width(
            self.indentation,
            shared_max_name_len,
            self.padding,
        ));
    }

    /// Column at which usage text starts.
    ///
    /// Falls back to the section's own longest name until
    /// [`Self::compute_column_width`] has been called.
    #[must_use]
    pub fn resolved_column_width(&self) -> usize {
        self.resolved_column_width.unwrap_or_else(|| {
            column_width(self.indentation, self.max_visible_name_len(), self.padding)
        })
    }

    /// Renders the title, description, visible flags and footer.
    ///
    /// Returns an empty string for an [empty](Self::is_empty) section.
    #[must_use]
    pub fn render(&self) -> String {
        if self.is_empty() {
            return String::new();
        }

        let mut out = String::new();
        let prefix = " ".repeat(self.indentation);
        let width = self.resolved_column_width();
        trace!(section = %self.name, width, "rendering section");

        if !self.name.is_empty() {
            out.push_str(&self.name);
            out.push_str(":\n");
        }

        if !self.description.is_empty() {
            layout::write_with_prefix(&mut out, &self.description, &prefix);
        }

        self.visit_all(|flag| {
            if !flag.is_hidden() {
                layout::write_flag_line(&mut out, flag, self.indentation, width);
            }
        });

        if !self.footer.is_empty() {
            layout::write_with_prefix(&mut out, &self.footer, &prefix);
        }

        out
    }
}
