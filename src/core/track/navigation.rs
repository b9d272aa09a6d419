//! Navigation config usage.
//!
//! Route tables in React Navigation and similar libraries reference screens
//! through a `component` key rather than JSX:
//!
//! ```text
//! const routes = [{ name: "Home", component: HomeScreen }];
//! <Stack.Screen name="Profile" component={ProfileScreen} />
//! ```

use std::collections::BTreeSet;

use swc_ecma_ast::{Expr, JSXAttr, JSXAttrName, JSXAttrValue, JSXExpr, KeyValueProp};
use swc_ecma_visit::{Visit, VisitWith};

use super::{EvidenceKind, Heuristic, SourceUnit, UsageEvidence};
use crate::core::collect::helpers::{extract_prop_name, unwrap_ts_expr};
use crate::utils::is_component_name;

const COMPONENT_KEY: &str = "component";

#[derive(Debug, Clone, Copy, Default)]
pub struct NavigationConfig;

impl Heuristic for NavigationConfig {
    fn kind(&self) -> EvidenceKind {
        EvidenceKind::NavigationConfig
    }

    fn detect(&self, unit: &SourceUnit) -> Vec<UsageEvidence> {
        let mut visitor = ComponentKeyVisitor::default();
        unit.parsed.module.visit_with(&mut visitor);
        visitor
            .names
            .into_iter()
            .map(|name| UsageEvidence::name(self.kind(), name, unit.relative_path))
            .collect()
    }
}

#[derive(Default)]
struct ComponentKeyVisitor {
    names: BTreeSet<String>,
}

impl ComponentKeyVisitor {
    fn record_expr(&mut self, expr: &Expr) {
        if let Expr::Ident(ident) = unwrap_ts_expr(expr)
            && is_component_name(ident.sym.as_str())
        {
            self.names.insert(ident.sym.to_string());
        }
    }
}

impl Visit for ComponentKeyVisitor {
    fn visit_key_value_prop(&mut self, node: &KeyValueProp) {
        if extract_prop_name(&node.key).as_deref() == Some(COMPONENT_KEY) {
            self.record_expr(&node.value);
        }
        node.visit_children_with(self);
    }

    fn visit_jsx_attr(&mut self, node: &JSXAttr) {
        if let JSXAttrName::Ident(name) = &node.name
            && name.sym.as_str() == COMPONENT_KEY
            && let Some(JSXAttrValue::JSXExprContainer(container)) = &node.value
            && let JSXExpr::Expr(expr) = &container.expr
        {
            self.record_expr(expr);
        }
        node.visit_children_with(self);
    }
}
