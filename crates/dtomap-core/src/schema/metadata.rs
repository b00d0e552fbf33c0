use super::{bare_type_name, EntityDef, FieldDescriptor, Identity, IdentityType};
use crate::{Entity, Error, Naming, Result};

/// How a record type maps to its table. Built once per type and cached.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityMetadata {
    /// Type name as given by the definition.
    pub type_name: &'static str,

    pub table_name: String,

    /// Mapped fields in declaration order. Ignored fields are not included.
    pub fields: Vec<FieldDescriptor>,

    pub identity: Option<Identity>,
}

impl EntityMetadata {
    pub fn of<T: Entity>() -> Result<EntityMetadata> {
        EntityMetadata::from_def(T::definition())
    }

    pub fn from_def(def: EntityDef) -> Result<EntityMetadata> {
        let entity = bare_type_name(def.type_name);
        let default_naming = def.naming.clone().unwrap_or_default();

        let mut fields = Vec::with_capacity(def.fields.len());
        let mut identity: Option<Identity> = None;

        for field in def.fields.into_iter().filter(|field| !field.ignore) {
            let naming = field.naming.as_ref().unwrap_or(&default_naming);

            if field.identity {
                if let Some(existing) = identity {
                    let first: &FieldDescriptor = &fields[existing.index];
                    return Err(Error::ambiguous_identity(
                        entity,
                        first.native_name,
                        field.name,
                    ));
                }

                let Some(ty) = IdentityType::classify(field.ty) else {
                    return Err(Error::unsupported_identity(entity, field.name, field.ty));
                };

                identity = Some(Identity {
                    index: fields.len(),
                    ty,
                });
            }

            let schema_name = naming.resolve(field.name);

            if fields
                .iter()
                .any(|existing: &FieldDescriptor| existing.schema_name == schema_name)
            {
                return Err(Error::duplicate_column(entity, schema_name));
            }

            fields.push(FieldDescriptor {
                schema_name,
                native_name: field.name,
                is_identity: field.identity,
                nullable: field.nullable,
                codec: field.codec,
            });
        }

        let table_name = def
            .table
            .as_ref()
            .or(def.naming.as_ref())
            .unwrap_or(&Naming::SnakeCase)
            .resolve(entity);

        Ok(EntityMetadata {
            type_name: def.type_name,
            table_name,
            fields,
            identity,
        })
    }

    /// Bare type name, used in error messages.
    pub fn entity_name(&self) -> &str {
        bare_type_name(self.type_name)
    }

    pub fn identity_field(&self) -> Option<&FieldDescriptor> {
        self.identity.map(|identity| &self.fields[identity.index])
    }

    pub fn identity_type(&self) -> Option<IdentityType> {
        self.identity.map(|identity| identity.ty)
    }

    /// Returns the identity, failing when the type declares none.
    pub fn require_identity(&self, operation: &'static str) -> Result<Identity> {
        self.identity
            .ok_or_else(|| Error::missing_identity(self.entity_name(), operation))
    }

    pub fn columns_without_identity(&self) -> impl Iterator<Item = &FieldDescriptor> + '_ {
        self.fields.iter().filter(|field| !field.is_identity)
    }
}
