//! Higher-order component usage.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use swc_ecma_ast::{CallExpr, Callee, Expr, MemberProp};
use swc_ecma_visit::{Visit, VisitWith};

use super::{EvidenceKind, Heuristic, SourceUnit, UsageEvidence};
use crate::core::collect::helpers::{first_ident_arg, unwrap_ts_expr};
use crate::utils::is_component_name;

static HOC_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(with|connect)[A-Z]").expect("valid regex"));

/// Records components passed to a wrapper call.
///
/// Recognized callees:
/// - `withAuth(Profile)`, `connectStore(List)`: identifiers matching `^(with|connect)[A-Z]`
/// - `connect(...)` and `redux.connect(...)`
/// - any identifier or member property listed in `hocNames`
///
/// The curried form `connect(mapState)(List)` records the argument of the
/// outer call.
#[derive(Debug, Clone, Default)]
pub struct HocWrapping {
    extra_names: Vec<String>,
}

impl HocWrapping {
    pub fn new(extra_names: impl IntoIterator<Item = String>) -> Self {
        Self {
            extra_names: extra_names.into_iter().collect(),
        }
    }

    fn is_hoc_name(&self, name: &str) -> bool {
        name == "connect" || HOC_NAME_REGEX.is_match(name) || self.is_extra(name)
    }

    fn is_extra(&self, name: &str) -> bool {
        self.extra_names.iter().any(|n| n == name)
    }

    fn is_hoc_callee(&self, expr: &Expr) -> bool {
        match unwrap_ts_expr(expr) {
            Expr::Ident(ident) => self.is_hoc_name(ident.sym.as_str()),
            Expr::Member(member) => match &member.prop {
                MemberProp::Ident(prop) => {
                    prop.sym.as_str() == "connect" || self.is_extra(prop.sym.as_str())
                }
                _ => false,
            },
            _ => false,
        }
    }

    /// Whether `call` wraps its first argument.
    fn wraps_argument(&self, call: &CallExpr) -> bool {
        let Callee::Expr(callee) = &call.callee else {
            return false;
        };
        if self.is_hoc_callee(callee) {
            return true;
        }
        // withStyles(styles)(Card)
        match unwrap_ts_expr(callee) {
            Expr::Call(inner) => match &inner.callee {
                Callee::Expr(inner_callee) => self.is_hoc_callee(inner_callee),
                _ => false,
            },
            _ => false,
        }
    }
}

impl Heuristic for HocWrapping {
    fn kind(&self) -> EvidenceKind {
        EvidenceKind::HigherOrderComponent
    }

    fn detect(&self, unit: &SourceUnit) -> Vec<UsageEvidence> {
        let mut visitor = HocCallVisitor {
            heuristic: self,
            names: BTreeSet::new(),
        };
        unit.parsed.module.visit_with(&mut visitor);
        visitor
            .names
            .into_iter()
            .map(|name| UsageEvidence::name(self.kind(), name, unit.relative_path))
            .collect()
    }
}

struct HocCallVisitor<'a> {
    heuristic: &'a HocWrapping,
    names: BTreeSet<String>,
}

impl Visit for HocCallVisitor<'_> {
    fn visit_call_expr(&mut self, node: &CallExpr) {
        if self.heuristic.wraps_argument(node)
            && let Some(ident) = first_ident_arg(node)
            && is_component_name(ident.sym.as_str())
        {
            self.names.insert(ident.sym.to_string());
        }
        node.visit_children_with(self);
    }
}
