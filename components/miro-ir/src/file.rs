use crate::{
    decl::{Decl, DeclData},
    error::IrError,
    expr::{Expr, ExprData},
    span::Span,
    symbol::Symbols,
    tables::{Spans, Tables},
};

/// One source file after name/type resolution: the node tables, the
/// symbol arena, and the ordered list of top-level declarations. The
/// unit of independent pass execution -- nothing in here is shared with
/// any other file.
#[derive(Debug)]
pub struct File {
    pub name: String,
    pub tables: Tables,
    pub spans: Spans,
    pub symbols: Symbols,

    /// Top-level declarations in source order. Passes splice into this.
    pub decls: Vec<Decl>,
}

impl File {
    pub fn new(name: impl ToString) -> Self {
        Self {
            name: name.to_string(),
            tables: Tables::default(),
            spans: Spans::default(),
            symbols: Symbols::default(),
            decls: Vec::new(),
        }
    }

    /// Allocates a declaration node (without appending it to the
    /// top-level list; backing fields and class members are not
    /// top-level).
    pub fn declare(&mut self, data: DeclData, span: Span) -> Decl {
        let decl = self.tables.add(data);
        self.spans.push(decl, span);
        decl
    }

    /// Allocates a declaration and binds its own symbol to it in one
    /// step.
    pub fn declare_bound(&mut self, data: DeclData, span: Span) -> Result<Decl, IrError> {
        let symbol = data.symbol();
        let decl = self.declare(data, span);
        self.symbols.bind(symbol, decl)?;
        Ok(decl)
    }

    pub fn add_expr(&mut self, data: ExprData, span: Span) -> Expr {
        let expr = self.tables.add(data);
        self.spans.push(expr, span);
        expr
    }

    /// Appends a declaration to the top-level list.
    pub fn append(&mut self, decl: Decl) {
        self.decls.push(decl);
    }
}
