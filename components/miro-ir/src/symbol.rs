//! Symbols are stable, reboundable handles identifying declarations
//! independent of where they are stored. A symbol is either *bound*
//! (resolves to a declaration) or *unbound* (a placeholder awaiting a
//! later binding), so forward references never require the referenced
//! declaration to exist yet.

use crate::{decl::Decl, error::IrError};
use miro_id::{alloc_table::AllocTable, id};

id! {
    /// Handle into a [`Symbols`] table. Identity is stable for the whole
    /// pipeline; two symbols are "the same" exactly when their ids are equal.
    pub struct Symbol
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Function,
    Property,
    Field,
    Class,
    Variable,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
struct SymbolData {
    kind: SymbolKind,
    binding: Option<Decl>,
}

/// The per-file symbol arena. Binding and rebinding are explicit,
/// auditable operations; there is no silent overwrite.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Symbols {
    table: AllocTable<Symbol, SymbolData>,
}

impl Symbols {
    /// Creates a fresh, unbound symbol of the given kind.
    pub fn create(&mut self, kind: SymbolKind) -> Symbol {
        self.table.add(SymbolData {
            kind,
            binding: None,
        })
    }

    /// Binds `symbol` to `decl`. Fails if the symbol is already bound;
    /// rebinding goes through [`Symbols::unbind`] first.
    pub fn bind(&mut self, symbol: Symbol, decl: Decl) -> Result<(), IrError> {
        let data = self.table.data_mut(symbol);
        if data.binding.is_some() {
            return Err(IrError::AlreadyBound { symbol });
        }
        data.binding = Some(decl);
        Ok(())
    }

    /// Removes the binding of `symbol`, returning the declaration it
    /// pointed at. Fails if the symbol was not bound.
    pub fn unbind(&mut self, symbol: Symbol) -> Result<Decl, IrError> {
        let data = self.table.data_mut(symbol);
        data.binding
            .take()
            .ok_or(IrError::UnboundSymbol { symbol })
    }

    /// Resolves `symbol` to the declaration it is bound to.
    pub fn dereference(&self, symbol: Symbol) -> Result<Decl, IrError> {
        self.table
            .data(symbol)
            .binding
            .ok_or(IrError::UnboundSymbol { symbol })
    }

    /// Non-fatal inspection of a symbol's binding.
    pub fn binding(&self, symbol: Symbol) -> Option<Decl> {
        self.table.data(symbol).binding
    }

    pub fn kind(&self, symbol: Symbol) -> SymbolKind {
        self.table.data(symbol).kind
    }

    /// All symbols created so far, in creation order.
    pub fn iter(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.table.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dereference_unbound() {
        let mut symbols = Symbols::default();
        let s = symbols.create(SymbolKind::Function);
        assert_eq!(
            symbols.dereference(s),
            Err(IrError::UnboundSymbol { symbol: s })
        );
    }

    #[test]
    fn bind_twice_fails() {
        let mut symbols = Symbols::default();
        let s = symbols.create(SymbolKind::Function);
        let d0 = Decl::from(0usize);
        let d1 = Decl::from(1usize);
        symbols.bind(s, d0).unwrap();
        assert_eq!(
            symbols.bind(s, d1),
            Err(IrError::AlreadyBound { symbol: s })
        );
        assert_eq!(symbols.dereference(s), Ok(d0));
    }

    #[test]
    fn explicit_rebind() {
        let mut symbols = Symbols::default();
        let s = symbols.create(SymbolKind::Property);
        let d0 = Decl::from(0usize);
        let d1 = Decl::from(1usize);
        symbols.bind(s, d0).unwrap();
        assert_eq!(symbols.unbind(s), Ok(d0));
        symbols.bind(s, d1).unwrap();
        assert_eq!(symbols.dereference(s), Ok(d1));
    }
}
