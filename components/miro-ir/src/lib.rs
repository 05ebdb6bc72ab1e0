//! The miro IR: the typed tree of declarations and expressions that sits
//! between name/type resolution and code generation, together with the
//! symbol layer that lets nodes reference declarations without owning them.

#[macro_use]
pub mod origin_table;

pub mod builder;
pub mod decl;
pub mod diagnostic;
pub mod error;
pub mod expr;
pub mod file;
pub mod lines;
pub mod span;
pub mod symbol;
pub mod tables;
pub mod ty;
pub mod word;

pub use error::IrError;
