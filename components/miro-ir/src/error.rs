use crate::symbol::Symbol;

/// Fatal misuse of the node/symbol API. These signal a bug in an earlier
/// stage (or in a pass), never bad user input: the compile unit is
/// abandoned, the process survives.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum IrError {
    #[error("symbol {symbol:?} dereferenced but never bound")]
    UnboundSymbol { symbol: Symbol },

    #[error("symbol {symbol:?} is already bound; rebinding requires an explicit unbind")]
    AlreadyBound { symbol: Symbol },

    #[error("index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("value-argument access on property reference {symbol:?}; property access is never call-shaped")]
    UnsupportedOperation { symbol: Symbol },
}
