use crate::{FieldCodec, Naming};

/// Describes how a record type maps to a table.
///
/// Provided by [`Entity::definition`](crate::Entity::definition), usually
/// generated by `#[derive(Entity)]`.
#[derive(Debug, Clone)]
pub struct EntityDef {
    /// Type name, bare or module qualified.
    pub type_name: &'static str,

    /// Table naming for the type. A `Naming::Forced` here is an explicit
    /// table name.
    pub table: Option<Naming>,

    /// Naming applied to every field without its own override.
    pub naming: Option<Naming>,

    /// One entry per struct field, in declaration order.
    pub fields: Vec<FieldDef>,
}

/// Describes one struct field.
#[derive(Debug, Clone)]
pub struct FieldDef {
    /// Name of the field in the struct.
    pub name: &'static str,

    /// Declared type, as written in the source.
    pub ty: &'static str,

    /// Whether the field accepts a missing or null column.
    pub nullable: bool,

    /// Whether this is the identity (key) field.
    pub identity: bool,

    /// Ignored fields take no part in mapping.
    pub ignore: bool,

    /// Field-level naming override.
    pub naming: Option<Naming>,

    pub codec: FieldCodec,
}

impl EntityDef {
    pub fn new(type_name: &'static str) -> EntityDef {
        EntityDef {
            type_name,
            table: None,
            naming: None,
            fields: vec![],
        }
    }

    pub fn table(mut self, name: &'static str) -> EntityDef {
        self.table = Some(Naming::forced(name));
        self
    }

    pub fn naming(mut self, naming: Naming) -> EntityDef {
        self.naming = Some(naming);
        self
    }

    pub fn field(mut self, field: FieldDef) -> EntityDef {
        self.fields.push(field);
        self
    }
}

impl FieldDef {
    pub fn new(name: &'static str, ty: &'static str) -> FieldDef {
        FieldDef {
            name,
            ty,
            nullable: false,
            identity: false,
            ignore: false,
            naming: None,
            codec: FieldCodec::NONE,
        }
    }

    pub fn nullable(mut self) -> FieldDef {
        self.nullable = true;
        self
    }

    pub fn identity(mut self) -> FieldDef {
        self.identity = true;
        self
    }

    pub fn ignore(mut self) -> FieldDef {
        self.ignore = true;
        self
    }

    pub fn naming(mut self, naming: Naming) -> FieldDef {
        self.naming = Some(naming);
        self
    }

    pub fn column(self, name: &'static str) -> FieldDef {
        self.naming(Naming::forced(name))
    }

    pub fn codec(mut self, codec: FieldCodec) -> FieldDef {
        self.codec = codec;
        self
    }
}
