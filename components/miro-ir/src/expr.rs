use crate::{error::IrError, symbol::Symbol, ty::Ty, word::Word};
use miro_id::id;

id! {
    /// An expression node. Expressions double as statements: a function
    /// body is an ordered sequence of `Expr`.
    pub struct Expr
}

/// Every expression carries its resolved type; the kind is the
/// interesting part.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExprData {
    pub ty: Ty,
    pub kind: ExprKind,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ExprKind {
    /// `f(a, b, ...)` -- the callee is a symbol, resolved earlier.
    Call {
        callee: Symbol,
        arguments: Vec<Expr>,
    },

    /// `return expr`
    Return(Expr),

    /// `{ expr[0]; expr[1]; ... }`
    Block(Vec<Expr>),

    /// A compile-time constant.
    Constant(ConstantData),

    /// Reference to a local variable or parameter.
    VariableRef(Symbol),

    /// Reference to a property (see [`PropertyRef`]).
    PropertyRef(PropertyRef),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ConstantData {
    String(Word),
    Int(i64),
    Bool(bool),
}

/// A reference to a property. Depending on what the property exposes,
/// any subset of field/getter/setter may be present. By construction a
/// property reference carries *zero* positional value arguments:
/// property access is never call-shaped, and the value-argument view
/// fails accordingly.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PropertyRef {
    pub property: Symbol,
    pub field: Option<Symbol>,
    pub getter: Option<Symbol>,
    pub setter: Option<Symbol>,

    /// Fixed-arity type-argument slots, sized once at construction and
    /// individually filled in as inference supplies them.
    type_arguments: Box<[Option<Ty>]>,
}

impl PropertyRef {
    pub fn new(
        property: Symbol,
        field: Option<Symbol>,
        getter: Option<Symbol>,
        setter: Option<Symbol>,
        type_argument_count: usize,
    ) -> Self {
        Self {
            property,
            field,
            getter,
            setter,
            type_arguments: vec![None; type_argument_count].into_boxed_slice(),
        }
    }

    pub fn type_argument_count(&self) -> usize {
        self.type_arguments.len()
    }

    /// Reads a type-argument slot. `Ok(None)` means "not yet inferred";
    /// an out-of-range index is a caller bug.
    pub fn type_argument(&self, index: usize) -> Result<Option<Ty>, IrError> {
        self.type_arguments
            .get(index)
            .copied()
            .ok_or(IrError::IndexOutOfRange {
                index,
                len: self.type_arguments.len(),
            })
    }

    /// The explicit write for a slot allocated at construction.
    pub fn set_type_argument(&mut self, index: usize, ty: Ty) -> Result<(), IrError> {
        let len = self.type_arguments.len();
        let slot = self
            .type_arguments
            .get_mut(index)
            .ok_or(IrError::IndexOutOfRange { index, len })?;
        *slot = Some(ty);
        Ok(())
    }

    /// Always fails: a property reference structurally cannot carry call
    /// arguments, and reading them signals a bug in an earlier stage.
    pub fn argument_count(&self) -> Result<usize, IrError> {
        Err(IrError::UnsupportedOperation {
            symbol: self.property,
        })
    }

    /// Always fails, see [`PropertyRef::argument_count`].
    pub fn argument(&self, _index: usize) -> Result<Expr, IrError> {
        Err(IrError::UnsupportedOperation {
            symbol: self.property,
        })
    }
}

impl ExprKind {
    /// The positional value-argument view. Only calls have arguments;
    /// property references fail by contract; every other kind trivially
    /// has none.
    pub fn arguments(&self) -> Result<&[Expr], IrError> {
        match self {
            ExprKind::Call { arguments, .. } => Ok(arguments),
            ExprKind::PropertyRef(property_ref) => Err(IrError::UnsupportedOperation {
                symbol: property_ref.property,
            }),
            ExprKind::Return(_)
            | ExprKind::Block(_)
            | ExprKind::Constant(_)
            | ExprKind::VariableRef(_) => Ok(&[]),
        }
    }

    pub fn argument_count(&self) -> Result<usize, IrError> {
        Ok(self.arguments()?.len())
    }

    pub fn argument(&self, index: usize) -> Result<Expr, IrError> {
        let arguments = self.arguments()?;
        arguments
            .get(index)
            .copied()
            .ok_or(IrError::IndexOutOfRange {
                index,
                len: arguments.len(),
            })
    }
}
