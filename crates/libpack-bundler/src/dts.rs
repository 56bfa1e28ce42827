//! TypeScript declaration aggregation.
//!
//! Collects the exported type surface of the entry module into declaration
//! text using OXC's isolated declarations, the same transform the bundler
//! ecosystem uses for `.d.ts` emit. Each input descriptor yields one text
//! fragment; the writer joins fragments with newline separators into a
//! single `index.d.ts`.

use std::path::{Path, PathBuf};

use oxc_allocator::Allocator;
use oxc_codegen::Codegen;
use oxc_isolated_declarations::{IsolatedDeclarations, IsolatedDeclarationsOptions};
use oxc_parser::Parser;
use oxc_span::SourceType;

use crate::compile::join_diagnostics;
use crate::{Error, Result};

/// Descriptor for one declaration input file.
#[derive(Debug, Clone)]
pub struct DtsSource {
    /// Path to the TypeScript source to extract declarations from.
    pub file_path: PathBuf,
}

impl DtsSource {
    /// Descriptor for the given source path.
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }
}

/// Generate declaration-text fragments, one per input descriptor, in input
/// order.
///
/// # Errors
///
/// Fails if any input file is missing, is not TypeScript, fails to parse,
/// or cannot be expressed as isolated declarations. There is no
/// skip-and-continue: a library build with a broken type surface must not
/// produce a truncated declaration file.
pub fn generate_declaration_fragments(
    sources: &[DtsSource],
    strip_internal: bool,
) -> Result<Vec<String>> {
    let mut fragments = Vec::with_capacity(sources.len());

    for source in sources {
        if !is_typescript_module(&source.file_path) {
            return Err(Error::Declarations {
                file: source.file_path.clone(),
                message: "not a TypeScript source file".to_string(),
            });
        }

        let text = std::fs::read_to_string(&source.file_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::EntryNotFound(source.file_path.clone())
            } else {
                Error::Io(e)
            }
        })?;

        tracing::debug!(file = %source.file_path.display(), "generating declarations");
        fragments.push(generate_dts(&text, &source.file_path, strip_internal)?);
    }

    Ok(fragments)
}

/// Check if a module path is a TypeScript file.
fn is_typescript_module(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| matches!(ext, "ts" | "tsx" | "mts" | "cts"))
        .unwrap_or(false)
}

/// Generate `.d.ts` content from TypeScript source.
fn generate_dts(source: &str, file_path: &Path, strip_internal: bool) -> Result<String> {
    let allocator = Allocator::default();

    let source_type = SourceType::from_path(file_path).map_err(|_| Error::Declarations {
        file: file_path.to_path_buf(),
        message: "invalid TypeScript file extension".to_string(),
    })?;

    let parse_result = Parser::new(&allocator, source, source_type).parse();
    if !parse_result.errors.is_empty() {
        return Err(Error::Parse {
            file: file_path.to_path_buf(),
            message: join_diagnostics(&parse_result.errors),
        });
    }

    let options = IsolatedDeclarationsOptions { strip_internal };
    let dts_result =
        IsolatedDeclarations::new(&allocator, options).build(&parse_result.program);

    if !dts_result.errors.is_empty() {
        return Err(Error::Declarations {
            file: file_path.to_path_buf(),
            message: join_diagnostics(&dts_result.errors),
        });
    }

    let generated = Codegen::new().build(&dts_result.program);
    Ok(generated.code)
}
