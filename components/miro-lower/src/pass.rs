use miro_ir::{decl::Decl, span::Span, symbol::Symbol, IrError};

use crate::cx::LowerCx;

/// What a pass did with one declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PassResult {
    /// Keep the declaration where it is (in-place mutation of its data
    /// counts as `Unchanged`: the declaration id survives).
    Unchanged,

    /// Splice this ordered list in at the declaration's position.
    /// `Replaced(vec![])` deletes the declaration entirely; the pass is
    /// then responsible for unbinding or rebinding any symbol that still
    /// referenced it.
    Replaced(Vec<Decl>),
}

/// One lowering pass. The runner calls `lower_decl` once per top-level
/// declaration, in source order. Declarations a pass does not recognize
/// must come back `Unchanged` with zero side effects.
pub trait LoweringPass {
    fn name(&self) -> &'static str;

    fn lower_decl(&mut self, cx: &mut LowerCx<'_>, decl: Decl) -> Result<PassResult, LowerError>;
}

#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum LowerError {
    /// The foreign-code intrinsic was called with something other than a
    /// single compile-time string constant. A diagnosed, source-located
    /// compile error: this unit fails, others may proceed.
    #[error("foreign code must be a compile-time string constant")]
    NonConstantForeignCode { span: Span },

    /// A pass removed a declaration while `symbol` was still bound to
    /// it. An internal defect in the pass, fatal.
    #[error("symbol {symbol:?} still references a removed declaration")]
    DanglingSymbol { symbol: Symbol },

    /// Misuse of the node/symbol API, fatal.
    #[error(transparent)]
    Ir(#[from] IrError),
}
