//! Icon header generator
//!
//! Turns an ordered list of icon files into one C header holding their
//! escaped contents, their names and the icon count:
//!
//! ```text
//! /* THIS FILE IS GENERATED DO NOT EDIT */
//!
//! #pragma once
//!
//! static const char *editor_nd_icon_sources[] = {
//! 	"\3c\73...",
//! 	"\3c\73..."
//! };
//!
//! static const char *editor_nd_icon_names[] = {
//! 	"MeshND",
//! 	"NodeND"
//! };
//!
//! static const int editor_nd_icon_count = 2;
//! ```
//!
//! Nothing is written until every input has been read, and the header is
//! moved into place atomically.

use std::fmt::Write as _;
use std::fs::File;
use std::path::Path;

use crate::error::{IconGenError, IconGenResult};
use crate::escape::escape_reader;
use crate::models::{GeneratedArtifact, GeneratedHeader, IconEntry, IconSource, Symbols};

/// First line of every generated header.
pub const GENERATED_WARNING: &str = "/* THIS FILE IS GENERATED DO NOT EDIT */";

/// Generate the header at `output` from `inputs` using the default symbols.
///
/// ```no_run
/// use std::path::PathBuf;
///
/// let inputs = vec![PathBuf::from("icons/MeshND.svg"), PathBuf::from("icons/NodeND.svg")];
/// icongen::generate("editor/icons/editor_nd_icons.gen.h", &inputs).unwrap();
/// ```
pub fn generate<O, P>(output: O, inputs: &[P]) -> IconGenResult<()>
where
    O: AsRef<Path>,
    P: AsRef<Path>,
{
    IconGenerator::default().generate(output, inputs)?;
    Ok(())
}

/// Configurable header generator.
#[derive(Debug, Clone, Default)]
pub struct IconGenerator {
    symbols: Symbols,
}

impl IconGenerator {
    pub fn new(symbols: Symbols) -> Self {
        Self { symbols }
    }

    /// Generator using `<prefix>_sources`, `<prefix>_names`, `<prefix>_count`.
    pub fn with_prefix(prefix: &str) -> Self {
        Self::new(Symbols::with_prefix(prefix))
    }

    pub fn symbols(&self) -> &Symbols {
        &self.symbols
    }

    /// Read every input, in order, into an artifact.
    ///
    /// Fails on the first input that cannot be opened or read.
    pub fn collect<P: AsRef<Path>>(&self, inputs: &[P]) -> IconGenResult<GeneratedArtifact> {
        let mut entries = Vec::with_capacity(inputs.len());

        for input in inputs {
            let source = IconSource::new(input.as_ref());
            let literal = read_escaped(&source.path)?;

            tracing::debug!(
                path = %source.path.display(),
                name = %source.name,
                escaped_len = literal.len(),
                "embedded icon"
            );
            if source.name.is_empty() {
                tracing::warn!(
                    path = %source.path.display(),
                    "icon file name is too short, derived name is empty"
                );
            }

            entries.push(IconEntry {
                literal,
                name: source.name,
            });
        }

        Ok(GeneratedArtifact { entries })
    }

    /// Render an artifact as header text.
    pub fn render(&self, artifact: &GeneratedArtifact) -> String {
        let mut out = String::new();

        out.push_str(GENERATED_WARNING);
        out.push_str("\n\n");
        out.push_str("#pragma once\n");

        write_string_array(&mut out, &self.symbols.sources, artifact.literals());
        write_string_array(&mut out, &self.symbols.names, artifact.names());

        let _ = writeln!(
            out,
            "\nstatic const int {} = {};",
            self.symbols.count,
            artifact.count()
        );

        out
    }

    /// Read `inputs` and render the header without writing it.
    pub fn render_inputs<P: AsRef<Path>>(&self, inputs: &[P]) -> IconGenResult<String> {
        let artifact = self.collect(inputs)?;
        Ok(self.render(&artifact))
    }

    /// Read `inputs`, render the header and write it atomically to `output`.
    ///
    /// The returned text is the one that was written.
    pub fn generate<O, P>(&self, output: O, inputs: &[P]) -> IconGenResult<GeneratedHeader>
    where
        O: AsRef<Path>,
        P: AsRef<Path>,
    {
        let output = output.as_ref();
        let artifact = self.collect(inputs)?;
        let text = self.render(&artifact);

        crate::fs::write_atomic(output, text.as_bytes())?;

        tracing::info!(
            output = %output.display(),
            count = artifact.count(),
            "generated icon header"
        );
        Ok(GeneratedHeader { artifact, text })
    }
}

/// Open `path` and escape its contents. The handle is dropped on return.
fn read_escaped(path: &Path) -> IconGenResult<String> {
    let read_err = |source: std::io::Error| IconGenError::Read {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(read_err)?;
    escape_reader(file).map_err(read_err)
}

/// `static const char *<name>[] = { ... };` with one quoted entry per line.
fn write_string_array<'a>(out: &mut String, name: &str, items: impl ExactSizeIterator<Item = &'a str>) {
    let last = items.len().saturating_sub(1);

    let _ = writeln!(out, "\nstatic const char *{}[] = {{", name);
    for (i, item) in items.enumerate() {
        out.push_str("\t\"");
        out.push_str(item);
        out.push('"');
        if i != last {
            out.push(',');
        }
        out.push('\n');
    }
    out.push_str("};\n");
}
