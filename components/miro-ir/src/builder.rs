//! Construction of synthesized nodes. Passes that synthesize code make
//! an [`ExprFactory`] anchored at the span of the node that triggered
//! the synthesis, so every new node's diagnostics point back to the
//! original call site.

use crate::{
    decl::Annotation,
    expr::{ConstantData, Expr, ExprData, ExprKind},
    span::Span,
    symbol::Symbol,
    tables::{Spans, Tables},
    ty::Ty,
    word::Word,
};

pub struct ExprFactory<'me> {
    tables: &'me mut Tables,
    spans: &'me mut Spans,
    span: Span,
}

impl<'me> ExprFactory<'me> {
    pub fn new(tables: &'me mut Tables, spans: &'me mut Spans, span: Span) -> Self {
        Self {
            tables,
            spans,
            span,
        }
    }

    /// The span every node from this factory inherits.
    pub fn span(&self) -> Span {
        self.span
    }

    fn add(&mut self, data: ExprData) -> Expr {
        let expr = self.tables.add(data);
        self.spans.push(expr, self.span);
        expr
    }

    pub fn word(&mut self, text: impl crate::word::ToString) -> Word {
        Word::intern(self.tables, text)
    }

    /// A call to `callee` with the given ordered arguments.
    pub fn call(&mut self, callee: Symbol, arguments: Vec<Expr>, ty: Ty) -> Expr {
        self.add(ExprData {
            ty,
            kind: ExprKind::Call { callee, arguments },
        })
    }

    /// A compile-time string constant.
    pub fn string_constant(&mut self, text: impl crate::word::ToString, ty: Ty) -> Expr {
        let word = self.word(text);
        self.add(ExprData {
            ty,
            kind: ExprKind::Constant(ConstantData::String(word)),
        })
    }

    /// A constructor-style annotation, ready to attach to a declaration.
    pub fn annotation(&mut self, ctor: Symbol, arguments: Vec<Expr>) -> Annotation {
        Annotation { ctor, arguments }
    }
}
