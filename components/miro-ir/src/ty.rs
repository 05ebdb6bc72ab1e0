use crate::{tables::Tables, word::Word};
use miro_id::id;

id! {
    /// An interned, fully resolved type. This middle-end never infers
    /// types; it only carries them through.
    pub struct Ty
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TyData {
    /// A named nominal type, e.g. `Int` or `String`.
    Named(Word),

    /// The unit type of bodies that produce no value.
    Unit,

    /// Type of expressions that failed an earlier stage.
    Error,
}

impl Ty {
    pub fn named(tables: &mut Tables, name: impl crate::word::ToString) -> Self {
        let word = Word::intern(tables, name);
        tables.add(TyData::Named(word))
    }

    pub fn unit(tables: &mut Tables) -> Self {
        tables.add(TyData::Unit)
    }

    pub fn error(tables: &mut Tables) -> Self {
        tables.add(TyData::Error)
    }

    pub fn data(self, tables: &Tables) -> TyData {
        tables[self]
    }
}
