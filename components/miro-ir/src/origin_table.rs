/// Declares a side table struct mapping ids to some per-node fact
/// (here, spans). Kept separate from the node data itself so that the
/// node tables stay small and hash-friendly. Values must be pushed in
/// allocation order, one per id.
macro_rules! origin_table {
    ($(#[$attr:meta])* $pub:vis struct $table:ident { $($field:ident : $key:ty => $origins:ty,)* }) => {
        $(#[$attr])*
        $pub struct $table {
            $(
                $field: miro_collections::IndexVec<$key, $origins>,
            )*
        }

        impl<K> std::ops::Index<K> for $table
        where
            K: $crate::origin_table::HasOriginIn<$table>,
        {
            type Output = K::Origin;

            fn index(&self, index: K) -> &Self::Output {
                index.origin_in(self)
            }
        }

        impl $table {
            $pub fn get<K>(&self, k: K) -> K::Origin
            where
                K: $crate::origin_table::HasOriginIn<Self>,
            {
                <K::Origin>::clone(K::origin_in(k, self))
            }

            $pub fn push<K>(&mut self, k: K, s: K::Origin)
            where
                K: $crate::origin_table::PushOriginIn<Self>,
            {
                K::push_origin_in(k, self, s)
            }
        }

        $(
            impl $crate::origin_table::HasOriginIn<$table> for $key {
                type Origin = $origins;

                fn origin_in(self, table: &$table) -> &Self::Origin {
                    &table.$field[self]
                }
            }

            impl $crate::origin_table::PushOriginIn<$table> for $key {
                type Origin = $origins;

                fn push_origin_in(self, table: &mut $table, origin: Self::Origin) {
                    assert_eq!(<$key>::from(table.$field.len()), self);
                    table.$field.push(origin);
                }
            }
        )*
    }
}

pub trait HasOriginIn<T> {
    type Origin: Clone;

    fn origin_in(self, origins: &T) -> &Self::Origin;
}

pub trait PushOriginIn<T> {
    type Origin: Clone;

    fn push_origin_in(self, origins: &mut T, origin: Self::Origin);
}
