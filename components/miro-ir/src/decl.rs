use crate::{expr::Expr, symbol::Symbol, ty::Ty, word::Word};
use miro_id::id;

id! {
    /// A declaration node. Top-level declarations are listed, in order,
    /// in [`crate::file::File::decls`]; nested ones (backing fields,
    /// class members) live only in the tables.
    pub struct Decl
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DeclData {
    Function(FunctionData),
    Property(PropertyData),
    Field(FieldData),
    Class(ClassData),
    Variable(VariableData),
}

/// A function declaration. `body: None` means "externally bound": fully
/// lowered, no compiled body; the implementation comes from the foreign
/// environment at link time.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FunctionData {
    pub name: Word,
    pub symbol: Symbol,
    pub parameters: Vec<Parameter>,
    pub return_ty: Ty,

    /// Ordered statements; mutated in place by the pipeline stage that
    /// owns the mutation, cleared when the function becomes externally
    /// bound.
    pub body: Option<Vec<Expr>>,

    /// Structured metadata consumed by the code generator.
    pub annotations: Vec<Annotation>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Parameter {
    pub name: Word,
    pub ty: Ty,
}

/// Constructor-style metadata attached to a declaration: an annotation
/// constructor symbol plus its fixed argument list.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Annotation {
    pub ctor: Symbol,
    pub arguments: Vec<Expr>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PropertyData {
    pub name: Word,
    pub symbol: Symbol,
    pub ty: Ty,

    /// The backing field, if the property has one. A `Field` decl in the
    /// same tables.
    pub backing_field: Option<Decl>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldData {
    pub name: Word,
    pub symbol: Symbol,
    pub ty: Ty,
    pub initializer: Option<Expr>,
}

/// Opaque to the passes in this crate: classes pass through unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClassData {
    pub name: Word,
    pub symbol: Symbol,
    pub members: Vec<Decl>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VariableData {
    pub name: Word,
    pub symbol: Symbol,
    pub ty: Ty,
}

impl DeclData {
    pub fn name(&self) -> Word {
        match self {
            DeclData::Function(data) => data.name,
            DeclData::Property(data) => data.name,
            DeclData::Field(data) => data.name,
            DeclData::Class(data) => data.name,
            DeclData::Variable(data) => data.name,
        }
    }

    /// The declaration's own symbol (the one the front-end bound to it).
    pub fn symbol(&self) -> Symbol {
        match self {
            DeclData::Function(data) => data.symbol,
            DeclData::Property(data) => data.symbol,
            DeclData::Field(data) => data.symbol,
            DeclData::Class(data) => data.symbol,
            DeclData::Variable(data) => data.symbol,
        }
    }

    pub fn as_function(&self) -> Option<&FunctionData> {
        match self {
            DeclData::Function(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_function_mut(&mut self) -> Option<&mut FunctionData> {
        match self {
            DeclData::Function(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_property(&self) -> Option<&PropertyData> {
        match self {
            DeclData::Property(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_field(&self) -> Option<&FieldData> {
        match self {
            DeclData::Field(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_field_mut(&mut self) -> Option<&mut FieldData> {
        match self {
            DeclData::Field(data) => Some(data),
            _ => None,
        }
    }
}

impl From<FunctionData> for DeclData {
    fn from(value: FunctionData) -> Self {
        Self::Function(value)
    }
}

impl From<PropertyData> for DeclData {
    fn from(value: PropertyData) -> Self {
        Self::Property(value)
    }
}

impl From<FieldData> for DeclData {
    fn from(value: FieldData) -> Self {
        Self::Field(value)
    }
}

impl From<ClassData> for DeclData {
    fn from(value: ClassData) -> Self {
        Self::Class(value)
    }
}

impl From<VariableData> for DeclData {
    fn from(value: VariableData) -> Self {
        Self::Variable(value)
    }
}
