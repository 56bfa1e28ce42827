//! Entry-module compilation on the OXC pipeline.
//!
//! A single entry module is parsed, stripped of TypeScript types, optionally
//! minified, and emitted as an ES module with an external source map:
//!
//! ```text
//! TypeScript source → oxc_parser → oxc_transformer (type stripping)
//!                                       ↓
//!                        oxc_minifier (per MinifyLevel)
//!                                       ↓
//!                        oxc_codegen (ESM + source map)
//! ```
//!
//! Import statements are preserved verbatim. Declared dependencies are
//! external by definition: this build never resolves or inlines other
//! modules, so the loading environment supplies them at runtime.

use std::path::Path;

use oxc_allocator::Allocator;
use oxc_codegen::{Codegen, CodegenOptions};
use oxc_minifier::Minifier;
use oxc_parser::Parser;
use oxc_semantic::SemanticBuilder;
use oxc_span::SourceType;
use oxc_transformer::{TransformOptions, Transformer};

use crate::{Error, MinifyLevel, Result};

/// A compiled entry module, held in memory until the writer persists it.
#[derive(Debug, Clone)]
pub struct CompiledBundle {
    /// Generated JavaScript (ESM).
    pub code: String,
    /// External source map as a JSON string, when enabled.
    pub map: Option<String>,
}

/// Compile a TypeScript/JavaScript source into an ES module.
///
/// # Errors
///
/// Fails on an unknown file extension, parse errors, or transform errors.
/// All diagnostics for a failing phase are joined into a single message.
pub(crate) fn compile_module(
    source: &str,
    file_path: &Path,
    minify: MinifyLevel,
    sourcemap: bool,
) -> Result<CompiledBundle> {
    let allocator = Allocator::default();

    let source_type = SourceType::from_path(file_path).map_err(|_| {
        Error::InvalidConfig(format!(
            "Unsupported entry extension: {}",
            file_path.display()
        ))
    })?;

    let parse_result = Parser::new(&allocator, source, source_type).parse();
    if !parse_result.errors.is_empty() {
        return Err(Error::Parse {
            file: file_path.to_path_buf(),
            message: join_diagnostics(&parse_result.errors),
        });
    }
    let mut program = parse_result.program;

    // Type stripping needs scope information from a semantic pass.
    let scoping = SemanticBuilder::new()
        .build(&program)
        .semantic
        .into_scoping();

    let transform_options = TransformOptions::default();
    let transform_result = Transformer::new(&allocator, file_path, &transform_options)
        .build_with_scoping(scoping, &mut program);
    if !transform_result.errors.is_empty() {
        return Err(Error::Transform {
            file: file_path.to_path_buf(),
            message: join_diagnostics(&transform_result.errors),
        });
    }

    let minified_scoping = match minify.to_minifier_options() {
        Some(options) => Minifier::new(options).minify(&allocator, &mut program).scoping,
        None => None,
    };

    let codegen_options = CodegenOptions {
        minify: minify.is_enabled(),
        source_map_path: sourcemap.then(|| file_path.to_path_buf()),
        ..CodegenOptions::default()
    };
    let generated = Codegen::new()
        .with_options(codegen_options)
        .with_scoping(minified_scoping)
        .build(&program);

    Ok(CompiledBundle {
        code: generated.code,
        map: generated.map.map(|map| map.to_json_string()),
    })
}

/// Join oxc diagnostics into one error message.
pub(crate) fn join_diagnostics<D: std::fmt::Debug>(diagnostics: &[D]) -> String {
    diagnostics
        .iter()
        .map(|d| format!("{:?}", d))
        .collect::<Vec<String>>()
        .join(", ")
}
