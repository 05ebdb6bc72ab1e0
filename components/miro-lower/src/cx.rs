use miro_ir::{
    diagnostic::Diagnostics,
    symbol::{Symbol, Symbols},
    tables::{Spans, Tables},
};

/// The well-known symbols the backend context supplies to lowering.
/// Matching is by identity: a call is "the" foreign-code intrinsic
/// exactly when its callee id equals `foreign_code`, never by name.
/// The front-end allocates these per file; lowering only reads them.
#[derive(Copy, Clone, Debug)]
pub struct Intrinsics {
    /// The intrinsic that embeds literal foreign source text. Its one
    /// recognized shape is a single string-constant argument.
    pub foreign_code: Symbol,

    /// The annotation constructor placed on externally-bound
    /// declarations; its single argument is the wrapper text.
    pub foreign_fun: Symbol,
}

/// Mutable per-file lowering context handed to each pass. Borrows the
/// file's innards so a pass can read nodes, synthesize new ones, and
/// adjust symbol bindings, while the runner keeps ownership of the
/// top-level declaration order.
pub struct LowerCx<'me> {
    pub tables: &'me mut Tables,
    pub spans: &'me mut Spans,
    pub symbols: &'me mut Symbols,
    pub intrinsics: &'me Intrinsics,
    pub diagnostics: &'me mut Diagnostics,
}
