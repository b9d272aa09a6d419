//! Helper functions for AST node extraction.
//!
//! Pure functions with no state dependencies, shared by the collector and the
//! usage heuristics.

use swc_ecma_ast::{CallExpr, Expr, ExprOrSpread, Ident, PropName};

/// Unwrap TypeScript-specific expression wrappers to get the inner expression.
pub fn unwrap_ts_expr(expr: &Expr) -> &Expr {
    match expr {
        Expr::TsAs(ts_as) => unwrap_ts_expr(&ts_as.expr),
        Expr::TsConstAssertion(ts_const) => unwrap_ts_expr(&ts_const.expr),
        Expr::TsSatisfies(ts_sat) => unwrap_ts_expr(&ts_sat.expr),
        Expr::TsNonNull(non_null) => unwrap_ts_expr(&non_null.expr),
        Expr::Paren(paren) => unwrap_ts_expr(&paren.expr),
        _ => expr,
    }
}

/// The first call argument, if it is a plain (non-spread) identifier.
pub fn first_ident_arg(call: &CallExpr) -> Option<&Ident> {
    match call.args.first() {
        Some(ExprOrSpread { spread: None, expr }) => match unwrap_ts_expr(expr) {
            Expr::Ident(ident) => Some(ident),
            _ => None,
        },
        _ => None,
    }
}

/// Follow the first argument through nested calls: `memo(connect(a)(List))` → `List`.
///
/// Used to name the component behind `export default <wrapped expression>`.
pub fn innermost_ident(expr: &Expr) -> Option<&Ident> {
    match unwrap_ts_expr(expr) {
        Expr::Ident(ident) => Some(ident),
        Expr::Call(call) => match call.args.first() {
            Some(ExprOrSpread { spread: None, expr }) => innermost_ident(expr),
            _ => None,
        },
        _ => None,
    }
}

/// Extract property name from a PropName node.
pub fn extract_prop_name(key: &PropName) -> Option<String> {
    match key {
        PropName::Ident(ident) => Some(ident.sym.to_string()),
        PropName::Str(s) => s.value.as_str().map(|s| s.to_string()),
        _ => None,
    }
}
