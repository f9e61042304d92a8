#![allow(dead_code)]

use rowmap_core::{stmt::Value, Error, Field, Primitive, Record, Result};

fn no_field(record: &'static str, index: usize) -> Error {
    Error::metadata(record, format!("no field at index {index}"))
}

/// `{id (pk, autoinc), name, created_at (readonly)}`, registered by hand.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub created_at: Option<String>,
}

static USER_FIELDS: [Field; 3] = [
    Field::new("id", "id").with_primary_key().with_auto_increment(),
    Field::new("name", "name"),
    Field::new("created_at", "created_at").with_read_only(),
];

impl Record for User {
    const NAME: &'static str = "User";

    fn fields() -> &'static [Field] {
        &USER_FIELDS
    }

    fn get(&self, index: usize) -> Result<Value> {
        match index {
            0 => Ok(self.id.to_value()),
            1 => Ok(self.name.to_value()),
            2 => Ok(self.created_at.to_value()),
            _ => Err(no_field(Self::NAME, index)),
        }
    }

    fn set(&mut self, index: usize, value: Value) -> Result<()> {
        match index {
            0 => self.id = Primitive::load(value)?,
            1 => self.name = Primitive::load(value)?,
            2 => self.created_at = Primitive::load(value)?,
            _ => return Err(no_field(Self::NAME, index)),
        }
        Ok(())
    }
}

/// A key-less record: only updatable through a custom WHERE clause.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AuditEntry {
    pub action: String,
    pub actor: String,
}

static AUDIT_ENTRY_FIELDS: [Field; 2] = [
    Field::new("action", "action"),
    Field::new("actor", "actor_name"),
];

impl Record for AuditEntry {
    const NAME: &'static str = "AuditEntry";

    fn fields() -> &'static [Field] {
        &AUDIT_ENTRY_FIELDS
    }

    fn get(&self, index: usize) -> Result<Value> {
        match index {
            0 => Ok(self.action.to_value()),
            1 => Ok(self.actor.to_value()),
            _ => Err(no_field(Self::NAME, index)),
        }
    }

    fn set(&mut self, index: usize, value: Value) -> Result<()> {
        match index {
            0 => self.action = Primitive::load(value)?,
            1 => self.actor = Primitive::load(value)?,
            _ => return Err(no_field(Self::NAME, index)),
        }
        Ok(())
    }
}

/// Declares a `label` column but its accessor does not handle it.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Broken {
    pub code: String,
}

static BROKEN_FIELDS: [Field; 2] = [
    Field::new("code", "code").with_primary_key(),
    Field::new("label", "label"),
];

impl Record for Broken {
    const NAME: &'static str = "Broken";

    fn fields() -> &'static [Field] {
        &BROKEN_FIELDS
    }

    fn get(&self, index: usize) -> Result<Value> {
        match index {
            0 => Ok(self.code.to_value()),
            _ => Err(no_field(Self::NAME, index)),
        }
    }

    fn set(&mut self, index: usize, value: Value) -> Result<()> {
        match index {
            0 => self.code = Primitive::load(value)?,
            _ => return Err(no_field(Self::NAME, index)),
        }
        Ok(())
    }
}

/// Two fields marked primary key, as a hand-written table can declare.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Account {
    pub id: i64,
    pub email: String,
    pub legacy_id: i64,
}

static ACCOUNT_FIELDS: [Field; 3] = [
    Field::new("id", "id").with_primary_key(),
    Field::new("email", "email"),
    Field::new("legacy_id", "legacy_id").with_primary_key(),
];

impl Record for Account {
    const NAME: &'static str = "Account";

    fn fields() -> &'static [Field] {
        &ACCOUNT_FIELDS
    }

    fn get(&self, index: usize) -> Result<Value> {
        match index {
            0 => Ok(self.id.to_value()),
            1 => Ok(self.email.to_value()),
            2 => Ok(self.legacy_id.to_value()),
            _ => Err(no_field(Self::NAME, index)),
        }
    }

    fn set(&mut self, index: usize, value: Value) -> Result<()> {
        match index {
            0 => self.id = Primitive::load(value)?,
            1 => self.email = Primitive::load(value)?,
            2 => self.legacy_id = Primitive::load(value)?,
            _ => return Err(no_field(Self::NAME, index)),
        }
        Ok(())
    }
}

/// Every column is owned by the database: nothing to insert, nothing to set.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Ticket {
    pub id: i64,
    pub issued_at: String,
}

static TICKET_FIELDS: [Field; 2] = [
    Field::new("id", "id")
        .with_primary_key()
        .with_auto_increment()
        .with_read_only(),
    Field::new("issued_at", "issued_at").with_read_only(),
];

impl Record for Ticket {
    const NAME: &'static str = "Ticket";

    fn fields() -> &'static [Field] {
        &TICKET_FIELDS
    }

    fn get(&self, index: usize) -> Result<Value> {
        match index {
            0 => Ok(self.id.to_value()),
            1 => Ok(self.issued_at.to_value()),
            _ => Err(no_field(Self::NAME, index)),
        }
    }

    fn set(&mut self, index: usize, value: Value) -> Result<()> {
        match index {
            0 => self.id = Primitive::load(value)?,
            1 => self.issued_at = Primitive::load(value)?,
            _ => return Err(no_field(Self::NAME, index)),
        }
        Ok(())
    }
}

/// A read-only primary key next to one ordinary column.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

static TAG_FIELDS: [Field; 2] = [
    Field::new("id", "id").with_primary_key().with_read_only(),
    Field::new("name", "name"),
];

impl Record for Tag {
    const NAME: &'static str = "Tag";

    fn fields() -> &'static [Field] {
        &TAG_FIELDS
    }

    fn get(&self, index: usize) -> Result<Value> {
        match index {
            0 => Ok(self.id.to_value()),
            1 => Ok(self.name.to_value()),
            _ => Err(no_field(Self::NAME, index)),
        }
    }

    fn set(&mut self, index: usize, value: Value) -> Result<()> {
        match index {
            0 => self.id = Primitive::load(value)?,
            1 => self.name = Primitive::load(value)?,
            _ => return Err(no_field(Self::NAME, index)),
        }
        Ok(())
    }
}
