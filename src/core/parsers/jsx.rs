use anyhow::{Result, anyhow};
use std::path::Path;
use std::sync::Arc;
use swc_common::{FileName, Globals, SourceMap};
use swc_ecma_ast::Module;
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax, TsSyntax};

/// A parsed source file.
///
/// Keeps the raw text next to the AST: text-based heuristics (screen
/// registration) run on the source, everything else on the module.
pub struct ParsedJSX {
    pub module: Module,
    pub source: String,
}

/// Pick the parser dialect from the file extension.
///
/// `.ts` files must not enable JSX (`<T>value` casts would misparse), and
/// plain JavaScript goes through the ECMAScript parser with JSX enabled since
/// React Native projects routinely put JSX in `.js` files.
pub fn syntax_for_path(file_path: &str) -> Syntax {
    match Path::new(file_path).extension().and_then(|e| e.to_str()) {
        Some("ts" | "mts" | "cts") => Syntax::Typescript(TsSyntax {
            tsx: false,
            decorators: true,
            ..Default::default()
        }),
        Some("js" | "jsx" | "mjs" | "cjs") => Syntax::Es(EsSyntax {
            jsx: true,
            decorators: true,
            ..Default::default()
        }),
        _ => Syntax::Typescript(TsSyntax {
            tsx: true,
            decorators: true,
            ..Default::default()
        }),
    }
}

/// Parse JSX/TSX source code string into an AST.
///
/// Accepts a shared SourceMap for thread-safe parallel parsing.
pub fn parse_jsx_source(
    code: String,
    file_path: &str,
    source_map: Arc<SourceMap>,
) -> Result<ParsedJSX> {
    use swc_common::GLOBALS;

    // Wrap in GLOBALS.set() for thread safety
    GLOBALS.set(&Globals::new(), || {
        let source_file =
            source_map.new_source_file(FileName::Real(file_path.into()).into(), code.clone());

        let syntax = syntax_for_path(file_path);
        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);

        let module = parser
            .parse_module()
            .map_err(|e| anyhow!("Failed to parse {}: {:?}", file_path, e.kind()))?;

        // Recoverable errors still mean the file is not valid source.
        if let Some(e) = parser.take_errors().into_iter().next() {
            return Err(anyhow!("Failed to parse {}: {:?}", file_path, e.kind()));
        }

        Ok(ParsedJSX {
            module,
            source: code,
        })
    })
}
