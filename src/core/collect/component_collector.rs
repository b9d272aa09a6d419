//! Component declaration collection.
//!
//! `ComponentCollector` walks one module and records the top-level
//! declarations that look like components, the file's imports and the name
//! behind its default export, in a single AST pass.

use swc_ecma_ast::{
    ArrowExpr, Class, ClassDecl, Constructor, DefaultDecl, ExportDefaultDecl, ExportDefaultExpr,
    ExportSpecifier, Expr, FnDecl, Function, GetterProp, ImportDecl, ModuleExportName,
    NamedExport, Pat, SetterProp, VarDeclarator,
};
use swc_ecma_visit::{Visit, VisitWith};

use crate::core::collect::helpers::{innermost_ident, unwrap_ts_expr};
use crate::core::collect::types::{DeclaredComponent, FileDeclarations, import_bindings};
use crate::utils::is_component_name;

/// Collects component candidates from a single file.
///
/// # Usage
///
/// ```ignore
/// let mut collector = ComponentCollector::new();
/// parsed.module.visit_with(&mut collector);
/// let declarations = collector.finish();
/// ```
#[derive(Default)]
pub struct ComponentCollector {
    /// Tracks nesting depth: 0 = module level, >0 = inside function/arrow/class.
    scope_depth: usize,
    declarations: FileDeclarations,
}

impl ComponentCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> FileDeclarations {
        self.declarations
    }

    fn is_module_level(&self) -> bool {
        self.scope_depth == 0
    }

    fn push(&mut self, name: &str) {
        if self.is_module_level() && is_component_name(name) {
            self.declarations.components.push(DeclaredComponent {
                name: name.to_string(),
            });
        }
    }

    fn nested<F: FnOnce(&mut Self)>(&mut self, f: F) {
        self.scope_depth += 1;
        f(self);
        self.scope_depth -= 1;
    }
}

impl Visit for ComponentCollector {
    fn visit_fn_decl(&mut self, node: &FnDecl) {
        self.push(node.ident.sym.as_str());
        node.visit_children_with(self);
    }

    fn visit_class_decl(&mut self, node: &ClassDecl) {
        self.push(node.ident.sym.as_str());
        node.visit_children_with(self);
    }

    fn visit_var_declarator(&mut self, node: &VarDeclarator) {
        if let Pat::Ident(binding) = &node.name
            && let Some(init) = &node.init
        {
            match unwrap_ts_expr(init) {
                Expr::Arrow(_) | Expr::Fn(_) => self.push(binding.id.sym.as_str()),
                _ => {}
            }
        }
        node.visit_children_with(self);
    }

    fn visit_export_default_decl(&mut self, node: &ExportDefaultDecl) {
        match &node.decl {
            DefaultDecl::Fn(fn_expr) => {
                if let Some(ident) = &fn_expr.ident {
                    self.push(ident.sym.as_str());
                    self.declarations.default_export = Some(ident.sym.to_string());
                }
            }
            DefaultDecl::Class(class_expr) => {
                if let Some(ident) = &class_expr.ident {
                    self.push(ident.sym.as_str());
                    self.declarations.default_export = Some(ident.sym.to_string());
                }
            }
            DefaultDecl::TsInterfaceDecl(_) => {}
        }
        node.visit_children_with(self);
    }

    fn visit_export_default_expr(&mut self, node: &ExportDefaultExpr) {
        // `export default Profile` or `export default withAuth(Profile)`
        if let Some(ident) = innermost_ident(&node.expr) {
            self.declarations.default_export = Some(ident.sym.to_string());
        }
        node.visit_children_with(self);
    }

    fn visit_named_export(&mut self, node: &NamedExport) {
        // `export { Profile as default }` (re-exports with `from` are not followed)
        if node.src.is_some() {
            return;
        }
        for specifier in &node.specifiers {
            if let ExportSpecifier::Named(named) = specifier
                && let Some(ModuleExportName::Ident(exported)) = &named.exported
                && exported.sym.as_str() == "default"
                && let ModuleExportName::Ident(orig) = &named.orig
            {
                self.declarations.default_export = Some(orig.sym.to_string());
            }
        }
    }

    fn visit_import_decl(&mut self, node: &ImportDecl) {
        self.declarations.imports.extend(import_bindings(node));
    }

    fn visit_function(&mut self, node: &Function) {
        self.nested(|this| node.visit_children_with(this));
    }

    fn visit_arrow_expr(&mut self, node: &ArrowExpr) {
        self.nested(|this| node.visit_children_with(this));
    }

    fn visit_class(&mut self, node: &Class) {
        self.nested(|this| node.visit_children_with(this));
    }

    fn visit_constructor(&mut self, node: &Constructor) {
        self.nested(|this| node.visit_children_with(this));
    }

    fn visit_getter_prop(&mut self, node: &GetterProp) {
        self.nested(|this| node.visit_children_with(this));
    }

    fn visit_setter_prop(&mut self, node: &SetterProp) {
        self.nested(|this| node.visit_children_with(this));
    }
}
