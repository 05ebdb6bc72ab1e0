use crate::tables::Tables;
use miro_id::id;

id! {
    /// An interned string (identifier, literal text). The intern table
    /// lives in the per-file [`Tables`].
    pub struct Word
}

impl Word {
    pub fn intern(tables: &mut Tables, string: impl ToString) -> Self {
        tables.add(string.to_string())
    }

    pub fn as_str(self, tables: &Tables) -> &str {
        &tables[self]
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(self, tables: &Tables) -> u32 {
        self.as_str(tables).len() as u32
    }
}

pub trait ToString {
    fn to_string(self) -> String;
}

impl ToString for String {
    fn to_string(self) -> String {
        self
    }
}

impl ToString for &str {
    fn to_string(self) -> String {
        self.to_owned()
    }
}
