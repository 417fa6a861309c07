//! The top-level help document: header text plus an ordered list of sections.

mod parse;

pub use parse::HELP_FLAG;

use std::fmt;
use std::io::{self, BufWriter, Write};

use tracing::debug;

use crate::config::{Alignment, Layout};
use crate::error::Result;
use crate::section::Section;

/// Owns the sections of a command-line program and assembles its help text.
///
/// Layout defaults (`indentation`, `padding`, `sort_flags`) are copied into
/// each section when it is created; changing them later does not affect
/// sections that already exist.
///
/// # Examples
///
/// ```
/// use flag_sections::Program;
///
/// let mut program = Program::new().name("myapp").version("v1.0.0");
/// program
///     .new_section("General Options")
///     .bool_p("verbose", 'v', false, "Enable verbose output");
/// program.new_section("Database Options").int("db-port", 5432, "Port");
///
/// assert_eq!(
///     program.render_help(),
///     concat!(
///         "myapp v1.0.0\n",
///         "General Options:\n",
///         "  -v, --verbose    Enable verbose output\n",
///         "\n",
///         "Database Options:\n",
///         "      --db-port    Port (default: 5432)\n",
///     ),
/// );
/// ```
pub struct Program {
    /// Program name written at the start of the header.
    pub name: String,
    /// Version written after the name.
    pub version: String,
    /// Free-form text written after the header line.
    pub description: String,
    /// Whether sections share one usage column.
    pub alignment: Alignment,
    /// Indentation copied into new sections.
    pub indentation: usize,
    /// Extra padding copied into new sections.
    pub padding: usize,
    /// Sort preference copied into new sections.
    pub sort_flags: bool,
    sections: Vec<Section>,
    writer: Box<dyn Write>,
}

impl Program {
    /// Creates a program with the default layout, writing help to stderr.
    #[must_use]
    pub fn new() -> Self {
        let layout = Layout::default();
        Self {
            name: String::new(),
            version: String::new(),
            description: String::new(),
            alignment: layout.alignment,
            indentation: layout.indentation,
            padding: layout.padding,
            sort_flags: layout.sort_flags,
            sections: Vec::with_capacity(8),
            writer: Box::new(io::stderr()),
        }
    }

    /// Sets the program name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the program version.
    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Sets the free-form description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the alignment scope.
    #[must_use]
    pub const fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Applies every field of `layout`.
    #[must_use]
    pub const fn with_layout(mut self, layout: Layout) -> Self {
        self.indentation = layout.indentation;
        self.padding = layout.padding;
        self.sort_flags = layout.sort_flags;
        self.alignment = layout.alignment;
        self
    }

    /// Current layout settings.
    #[must_use]
    pub const fn layout(&self) -> Layout {
        Layout {
            indentation: self.indentation,
            padding: self.padding,
            sort_flags: self.sort_flags,
            alignment: self.alignment,
        }
    }

    /// Replaces the sink used by [`Self::usage`].
    #[must_use]
    pub fn writer(mut self, writer: impl Write + 'static) -> Self {
        self.writer = Box::new(writer);
        self
    }

    /// Appends a section seeded with the current layout defaults.
    ///
    /// The section is returned for further configuration and flag
    /// registration.
    #[expect(
        clippy::indexing_slicing,
        reason = "the index addresses the element pushed just above"
    )]
    pub fn new_section(&mut self, name: impl Into<String>) -> &mut Section {
        let mut section = Section::new(name);
        section.indentation = self.indentation;
        section.padding = self.padding;
        section.sort_flags = self.sort_flags;

        let index = self.sections.len();
        self.sections.push(section);
        &mut self.sections[index]
    }

    /// Sections in creation order.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Finds the first section with the given name.
    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|section| section.name == name)
    }

    /// Assembles the full help document.
    ///
    /// Empty sections are skipped without leaving a blank line; every other
    /// section is separated from preceding output by one blank line.
    pub fn render_help(&mut self) -> String {
        let mut out = String::new();

        if !self.name.is_empty() {
            out.push_str(&self.name);
        }

        if !self.version.is_empty() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&self.version);
        }

        if !self.description.is_empty() {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&self.description);
            out.push('\n');
        }

        let global_max = self
            .sections
            .iter()
            .map(Section::max_visible_name_len)
            .max()
            .unwrap_or(0);

        for section in &mut self.sections {
            if section.is_empty() {
                debug!(section = %section.name, "skipping empty section");
                continue;
            }

            let scope_max = match self.alignment {
                Alignment::Global => global_max,
                Alignment::PerSection => section.max_visible_name_len(),
            };
            section.compute_column_width(scope_max);
            debug!(
                section = %section.name,
                width = section.resolved_column_width(),
                "resolved usage column"
            );

            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&section.render());
        }

        out
    }

    /// Writes the help document to `writer` in one buffered write.
    ///
    /// # Errors
    ///
    /// Returns [`FlagSectionsError::Io`](crate::FlagSectionsError::Io) when
    /// writing or flushing fails.
    pub fn write_help_to<W: Write>(&mut self, writer: W) -> Result<()> {
        let text = self.render_help();
        let mut buffered = BufWriter::new(writer);
        buffered.write_all(text.as_bytes())?;
        buffered.flush()?;
        Ok(())
    }

    /// Writes the help document to the configured sink (stderr by default).
    ///
    /// # Errors
    ///
    /// Returns [`FlagSectionsError::Io`](crate::FlagSectionsError::Io) when
    /// writing or flushing fails.
    pub fn usage(&mut self) -> Result<()> {
        let text = self.render_help();
        let mut buffered = BufWriter::new(&mut self.writer);
        buffered.write_all(text.as_bytes())?;
        buffered.flush()?;
        Ok(())
    }
}

impl Default for Program {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Program")
            .field("name", &self.name)
            .field("version", &self.version)
            .field("description", &self.description)
            .field("alignment", &self.alignment)
            .field("indentation", &self.indentation)
            .field("padding", &self.padding)
            .field("sort_flags", &self.sort_flags)
            .field("sections", &self.sections)
            .field("writer", &"<writer>")
            .finish()
    }
}
