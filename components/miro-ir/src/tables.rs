use crate::{
    decl::{Decl, DeclData},
    expr::{Expr, ExprData},
    span::Span,
    ty::{Ty, TyData},
    word::Word,
};
use miro_id::tables;

tables! {
    /// Tables that store the data for the nodes of one file.
    /// You can use `tables[expr]` (etc) to access the data, and
    /// `tables[decl] = ..`-style mutation through `IndexMut` for the
    /// allocating tables.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct Tables {
        decls: alloc Decl => DeclData,
        exprs: alloc Expr => ExprData,
        words: intern Word => String,
        tys: intern Ty => TyData,
    }
}

origin_table! {
    /// Side table with the source spans of every node. Only needed for
    /// diagnostics, so it's kept out of the node data.
    #[derive(Clone, Debug, Default, PartialEq, Eq)]
    pub struct Spans {
        decl_spans: Decl => Span,
        expr_spans: Expr => Span,
    }
}
