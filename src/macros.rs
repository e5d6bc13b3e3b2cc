//! Descriptor construction macros.
//!
//! [`json_message!`](crate::json_message) builds the static
//! [`MessageDescriptor`](crate::MessageDescriptor) of a struct from a compact
//! field list. Each entry names the cardinality, the struct field (which is
//! also the JSON key) and the [`FieldKind`](crate::FieldKind); optional and
//! repeated fields additionally name their presence flag or count field.
//!
//! ```text
//! json_message!(Type {
//!     singular name: Kind,
//!     optional name: Kind [has_name],
//!     repeated name: Kind [name_count],
//! });
//! ```
//!
//! Storage types are mapped to cells through [`AsCell`](crate::AsCell);
//! `Message` fields must hold a type that implements
//! [`Message`](crate::Message) itself. Descriptors whose JSON keys differ
//! from the struct field names are written by hand.

/// Implements [`Message`](crate::Message) for a struct.
///
/// ```
/// use pbjson::{decode, json_message};
///
/// #[derive(Default)]
/// struct Sample {
///     id: u32,
///     label: [u8; 8],
///     has_label: bool,
///     values: [i16; 4],
///     values_count: u32,
/// }
///
/// json_message!(Sample {
///     singular id: UInt32,
///     optional label: String [has_label],
///     repeated values: Int32 [values_count],
/// });
///
/// let mut s = Sample::default();
/// decode(br#"{"id":7,"values":[1,-2]}"#, &mut s).unwrap();
/// assert_eq!(s.id, 7);
/// assert!(!s.has_label);
/// assert_eq!(&s.values[..s.values_count as usize], &[1, -2]);
/// ```
#[macro_export]
macro_rules! json_message {
    ($ty:ident { $($card:ident $name:ident : $kind:ident $([$aux:ident])?),* $(,)? }) => {
        impl $crate::Message for $ty {
            fn descriptor() -> &'static $crate::MessageDescriptor<Self> {
                static DESCRIPTOR: $crate::MessageDescriptor<$ty> = $crate::MessageDescriptor {
                    name: stringify!($ty),
                    fields: &[$($crate::json_field!($ty, $card $name: $kind $([$aux])?)),*],
                };
                &DESCRIPTOR
            }
        }
    };
}

/// One [`FieldDescriptor`](crate::FieldDescriptor) entry of
/// [`json_message!`](crate::json_message).
#[doc(hidden)]
#[macro_export]
macro_rules! json_field {
    (@cell Message, $e:expr) => {
        $crate::Cell::Message($e)
    };
    (@cell $kind:ident, $e:expr) => {
        $crate::AsCell::as_cell($e)
    };
    (@cell_mut Message, $e:expr) => {
        $crate::CellMut::Message($e)
    };
    (@cell_mut $kind:ident, $e:expr) => {
        $crate::AsCell::as_cell_mut($e)
    };

    // Singular und Optional: nur Index 0.
    (@single $ty:ident, $name:ident, $kind:ident) => {
        $crate::Element::<$ty> {
            get: |m: &$ty, i: usize| {
                if i == 0 {
                    Some($crate::json_field!(@cell $kind, &m.$name))
                } else {
                    None
                }
            },
            get_mut: |m: &mut $ty, i: usize| {
                if i == 0 {
                    Some($crate::json_field!(@cell_mut $kind, &mut m.$name))
                } else {
                    None
                }
            },
        }
    };

    ($ty:ident, singular $name:ident: $kind:ident) => {
        $crate::FieldDescriptor::<$ty> {
            name: stringify!($name),
            kind: $crate::FieldKind::$kind,
            aux: $crate::Aux::None,
            element: $crate::json_field!(@single $ty, $name, $kind),
        }
    };
    ($ty:ident, optional $name:ident: $kind:ident [$has:ident]) => {
        $crate::FieldDescriptor::<$ty> {
            name: stringify!($name),
            kind: $crate::FieldKind::$kind,
            aux: $crate::Aux::Presence {
                get: |m: &$ty| m.$has,
                set: |m: &mut $ty, present: bool| m.$has = present,
            },
            element: $crate::json_field!(@single $ty, $name, $kind),
        }
    };
    ($ty:ident, repeated $name:ident: $kind:ident [$count:ident]) => {
        $crate::FieldDescriptor::<$ty> {
            name: stringify!($name),
            kind: $crate::FieldKind::$kind,
            aux: $crate::Aux::Count {
                get: |m: &$ty| m.$count,
                set: |m: &mut $ty, count: u32| m.$count = count,
            },
            element: $crate::Element::<$ty> {
                get: |m: &$ty, i: usize| m.$name.get(i).map(|e| $crate::json_field!(@cell $kind, e)),
                get_mut: |m: &mut $ty, i: usize| m.$name.get_mut(i).map(|e| $crate::json_field!(@cell_mut $kind, e)),
            },
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::testing::{Inner, Outer};
    use crate::{Cell, CellMut, FieldKind, Message};

    #[test]
    fn names_and_kinds_in_declaration_order() {
        let desc = Outer::descriptor();
        assert_eq!(desc.name, "Outer");
        let names: Vec<_> = desc.fields.iter().map(|f| f.name).collect();
        assert_eq!(names, ["name", "inner", "codes", "ratio"]);
        assert_eq!(desc.fields[1].kind, FieldKind::Message);
    }

    #[test]
    fn singular_answers_index_zero_only() {
        let msg = Inner { x: 9, ..Default::default() };
        let x = Inner::descriptor().field(b"x").unwrap();
        assert!(matches!((x.element.get)(&msg, 0), Some(Cell::I32(&9))));
        assert!((x.element.get)(&msg, 1).is_none());
    }

    #[test]
    fn repeated_accessors_cover_capacity() {
        let mut msg = Outer::default();
        let codes = Outer::descriptor().field(b"codes").unwrap();
        if let Some(CellMut::U16(v)) = (codes.element.get_mut)(&mut msg, 3) {
            *v = 77;
        }
        assert_eq!(msg.codes[3], 77);
        assert!((codes.element.get_mut)(&mut msg, 4).is_none());
    }

    #[test]
    fn aux_setters_write_struct_fields() {
        use crate::Aux;

        let mut msg = Outer::default();
        let desc = Outer::descriptor();
        match desc.fields[1].aux {
            Aux::Presence { set, get } => {
                set(&mut msg, true);
                assert!(get(&msg));
            }
            _ => panic!("inner should be optional"),
        }
        match desc.fields[2].aux {
            Aux::Count { set, .. } => set(&mut msg, 3),
            _ => panic!("codes should be repeated"),
        }
        assert!(msg.has_inner);
        assert_eq!(msg.codes_count, 3);
    }

    #[test]
    fn message_cells_are_type_erased() {
        let msg = Outer::default();
        let inner = Outer::descriptor().field(b"inner").unwrap();
        assert!(matches!((inner.element.get)(&msg, 0), Some(Cell::Message(_))));
    }
}
