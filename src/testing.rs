//! Message fixtures shared by the unit tests.

use crate::cell::{AsCell, Cell, CellMut};
use crate::descriptor::{Aux, Element, FieldDescriptor, FieldKind, Message, MessageDescriptor};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inner {
    pub x: i32,
    pub flag: bool,
}

crate::json_message!(Inner {
    singular x: Int32,
    singular flag: Bool,
});

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outer {
    pub name: [u8; 12],
    pub inner: Inner,
    pub has_inner: bool,
    pub codes: [u16; 4],
    pub codes_count: u32,
    pub ratio: f64,
}

crate::json_message!(Outer {
    singular name: String,
    optional inner: Message [has_inner],
    repeated codes: UInt32 [codes_count],
    singular ratio: Double,
});

/// Nested message without presence flag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Holder {
    pub leaf: Inner,
    pub level: i8,
}

crate::json_message!(Holder {
    singular leaf: Message,
    singular level: Enum,
});

/// Narrow enum cells, 64-bit integers and two fields sharing one key. The
/// descriptor is written by hand since the keys differ from the struct
/// fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Flags {
    pub level: i8,
    pub mode: u16,
    pub dup_first: bool,
    pub dup_second: i32,
    pub big: u64,
    pub has_big: bool,
    pub delta: i64,
}

static FLAGS_FIELDS: [FieldDescriptor<Flags>; 6] = [
    FieldDescriptor {
        name: "level",
        kind: FieldKind::Enum,
        aux: Aux::None,
        element: Element {
            get: |m: &Flags, i| (i == 0).then_some(m.level.as_cell()),
            get_mut: |m: &mut Flags, i| (i == 0).then_some(m.level.as_cell_mut()),
        },
    },
    FieldDescriptor {
        name: "mode",
        kind: FieldKind::UEnum,
        aux: Aux::None,
        element: Element {
            get: |m: &Flags, i| (i == 0).then_some(m.mode.as_cell()),
            get_mut: |m: &mut Flags, i| (i == 0).then_some(m.mode.as_cell_mut()),
        },
    },
    FieldDescriptor {
        name: "dup",
        kind: FieldKind::Bool,
        aux: Aux::None,
        element: Element {
            get: |m: &Flags, i| (i == 0).then_some(m.dup_first.as_cell()),
            get_mut: |m: &mut Flags, i| (i == 0).then_some(m.dup_first.as_cell_mut()),
        },
    },
    FieldDescriptor {
        name: "dup",
        kind: FieldKind::Int32,
        aux: Aux::None,
        element: Element {
            get: |m: &Flags, i| (i == 0).then_some(m.dup_second.as_cell()),
            get_mut: |m: &mut Flags, i| (i == 0).then_some(m.dup_second.as_cell_mut()),
        },
    },
    FieldDescriptor {
        name: "big",
        kind: FieldKind::UInt64,
        aux: Aux::Presence {
            get: |m: &Flags| m.has_big,
            set: |m: &mut Flags, v| m.has_big = v,
        },
        element: Element {
            get: |m: &Flags, i| (i == 0).then_some(m.big.as_cell()),
            get_mut: |m: &mut Flags, i| (i == 0).then_some(m.big.as_cell_mut()),
        },
    },
    FieldDescriptor {
        name: "delta",
        kind: FieldKind::Int64,
        aux: Aux::None,
        element: Element {
            get: |m: &Flags, i| (i == 0).then_some(m.delta.as_cell()),
            get_mut: |m: &mut Flags, i| (i == 0).then_some(m.delta.as_cell_mut()),
        },
    },
];

impl Message for Flags {
    fn descriptor() -> &'static MessageDescriptor<Self> {
        static DESCRIPTOR: MessageDescriptor<Flags> = MessageDescriptor {
            name: "Flags",
            fields: &FLAGS_FIELDS,
        };
        &DESCRIPTOR
    }
}

/// Descriptor claims `String` for an `i32` cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mismatched {
    pub value: i32,
}

impl Message for Mismatched {
    fn descriptor() -> &'static MessageDescriptor<Self> {
        static DESCRIPTOR: MessageDescriptor<Mismatched> = MessageDescriptor {
            name: "Mismatched",
            fields: &[FieldDescriptor {
                name: "value",
                kind: FieldKind::String,
                aux: Aux::None,
                element: Element {
                    get: |m: &Mismatched, i| if i == 0 { Some(Cell::I32(&m.value)) } else { None },
                    get_mut: |m: &mut Mismatched, i| if i == 0 { Some(CellMut::I32(&mut m.value)) } else { None },
                },
            }],
        };
        &DESCRIPTOR
    }
}
