//! The `miro_id` crate contains utilities for creating "local" ids that are
//! specific to a particular data structure (for example, the tree of
//! expressions within one file).
//!
//! In general each id I maps to some value V, but ids come in two forms:
//!
//! * allocating ids -- each time you add a value V, you get a fresh id I back.
//!   This is appropriate when you will be adding other "metadata" attached to
//!   the id, such as a span.
//! * interning ids -- if you add the same value V twice, you get back the same
//!   id I twice.
//!
//! To use these utilities, you make use of two macros:
//!
//! * `id!(pub struct Id)` creates a struct `Id` that can be used as an id.
//! * `tables! { .. }` declares a struct housing a set of `Id -> Value`
//!   mappings; also defines whether those are *allocating* or *interning*
//!   mappings.

use std::hash::Hash;

pub mod alloc_table;
pub mod intern_table;

/// Raw id protocol implemented by every `id!` struct: a thin u32 that can
/// round-trip through `usize` (needed for `IndexVec` side tables).
pub trait InternId: Copy + Eq + Hash + 'static {
    fn as_u32(self) -> u32;
    fn from_u32(id: u32) -> Self;
}

/// This module is used by the `tables` macro.
pub mod table_types {
    #![allow(non_camel_case_types)]
    pub type alloc<K, V> = crate::alloc_table::AllocTable<K, V>;
    pub type intern<K, V> = crate::intern_table::InternTable<K, V>;
}

/// Declares a struct usable as an id within a table.
#[macro_export]
macro_rules! id {
    ($(#[$attr:meta])* $v:vis struct $n:ident) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
        $v struct $n(u32);

        impl $crate::InternId for $n {
            fn as_u32(self) -> u32 {
                self.0
            }

            fn from_u32(id: u32) -> Self {
                Self(id)
            }
        }

        impl From<usize> for $n {
            fn from(u: usize) -> $n {
                assert!(u < u32::MAX as usize);
                $n(u as u32)
            }
        }

        impl From<$n> for usize {
            fn from(n: $n) -> usize {
                n.0 as usize
            }
        }
    }
}

/// Declares a struct containing a group of alloc/interning tables, along with
/// methods for accessing them.
///
/// Example:
///
/// ```rust,ignore
/// tables! {
///     pub struct Foo {
///         exprs: alloc Expr => ExprData,
///         tys: intern Ty => TyData,
///     }
/// }
/// ```
#[macro_export]
macro_rules! tables {
    ($(#[$attr:meta])* $vis:vis struct $n:ident {
        $(
            $f:ident: $tty:ident $k:ty => $v:ty,
        )*
    }) => {
        $(#[$attr])*
        $vis struct $n {
            $(
                $f: miro_id::table_types::$tty<$k, $v>,
            )*
        }

        impl Default for $n {
            fn default() -> Self {
                Self {
                    $($f: <miro_id::table_types::$tty<$k,$v>>::default(),)*
                }
            }
        }

        impl<K: miro_id::InternId> std::ops::Index<K> for $n
        where
            $n: miro_id::InternKey<K>,
        {
            type Output = <$n as miro_id::InternKey<K>>::Value;

            fn index(&self, key: K) -> &Self::Output {
                miro_id::InternKey::data(self, key)
            }
        }

        impl<K: miro_id::InternId> std::ops::IndexMut<K> for $n
        where
            $n: miro_id::InternKeyMut<K>,
        {
            fn index_mut(&mut self, key: K) -> &mut Self::Output {
                miro_id::InternKeyMut::data_mut(self, key)
            }
        }

        impl $n {
            pub fn add<K, V>(&mut self, value: V) -> K
            where
                Self: miro_id::InternValue<V, Key = K>,
                K: miro_id::InternId,
                V: std::hash::Hash + Eq,
            {
                miro_id::InternValue::add(self, value)
            }
        }

        $(
            impl miro_id::InternValue<$v> for $n {
                type Key = $k;

                fn add(&mut self, value: $v) -> Self::Key {
                    self.$f.add(value)
                }
            }

            impl miro_id::InternKey<$k> for $n {
                type Value = $v;

                fn data(&self, key: $k) -> &$v {
                    self.$f.data(key)
                }
            }

            miro_id::table_mut_impl!($tty, $n, $f, $k, $v);
        )*
    }
}

/// Helper for `tables!`: only allocating tables hand out `&mut` access.
/// Mutating an interned value would break hash-consing.
#[macro_export]
macro_rules! table_mut_impl {
    (alloc, $n:ident, $f:ident, $k:ty, $v:ty) => {
        impl miro_id::InternKeyMut<$k> for $n {
            fn data_mut(&mut self, key: $k) -> &mut $v {
                self.$f.data_mut(key)
            }
        }
    };
    (intern, $n:ident, $f:ident, $k:ty, $v:ty) => {};
}

pub trait InternValue<V: Hash + Eq> {
    type Key: InternId;

    fn add(&mut self, value: V) -> Self::Key;
}

pub trait InternKey<K: InternId> {
    type Value: Hash + Eq;

    fn data(&self, key: K) -> &Self::Value;
}

pub trait InternKeyMut<K: InternId>: InternKey<K> {
    fn data_mut(&mut self, key: K) -> &mut Self::Value;
}
