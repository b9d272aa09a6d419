//! JSX element usage.

use std::collections::BTreeSet;

use swc_ecma_ast::{JSXElementName, JSXMemberExpr, JSXObject, JSXOpeningElement};
use swc_ecma_visit::{Visit, VisitWith};

use super::{EvidenceKind, Heuristic, SourceUnit, UsageEvidence};
use crate::utils::is_component_tag;

/// Records capitalized JSX tag names.
///
/// For member tags every capitalized segment counts, so `<Stack.Screen>`
/// records both `Stack` and `Screen`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsxUsage;

impl Heuristic for JsxUsage {
    fn kind(&self) -> EvidenceKind {
        EvidenceKind::JsxElement
    }

    fn detect(&self, unit: &SourceUnit) -> Vec<UsageEvidence> {
        let mut visitor = JsxTagVisitor::default();
        unit.parsed.module.visit_with(&mut visitor);
        visitor
            .names
            .into_iter()
            .map(|name| UsageEvidence::name(self.kind(), name, unit.relative_path))
            .collect()
    }
}

#[derive(Default)]
struct JsxTagVisitor {
    names: BTreeSet<String>,
}

impl JsxTagVisitor {
    fn record(&mut self, name: &str) {
        if is_component_tag(name) {
            self.names.insert(name.to_string());
        }
    }

    fn record_member(&mut self, member: &JSXMemberExpr) {
        match &member.obj {
            JSXObject::Ident(ident) => self.record(ident.sym.as_str()),
            JSXObject::JSXMemberExpr(inner) => self.record_member(inner),
        }
        self.record(member.prop.sym.as_str());
    }
}

impl Visit for JsxTagVisitor {
    fn visit_jsx_opening_element(&mut self, node: &JSXOpeningElement) {
        match &node.name {
            JSXElementName::Ident(ident) => self.record(ident.sym.as_str()),
            JSXElementName::JSXMemberExpr(member) => self.record_member(member),
            // <svg:rect> is never a component
            JSXElementName::JSXNamespacedName(_) => {}
        }
        node.visit_children_with(self);
    }
}
