/// Column metadata for one mapped field of a record type.
///
/// A record type's descriptor table is a `&'static [Field]` in field
/// declaration order. Fields without a column are not part of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Rust field name
    pub name: &'static str,

    /// Column the field maps to
    pub column: &'static str,

    /// True if the field is the record's primary key
    pub primary_key: bool,

    /// True if the database assigns the value on insert
    pub auto_increment: bool,

    /// True if the database owns the value (never inserted or updated)
    pub read_only: bool,
}

impl Field {
    pub const fn new(name: &'static str, column: &'static str) -> Self {
        Self {
            name,
            column,
            primary_key: false,
            auto_increment: false,
            read_only: false,
        }
    }

    pub const fn with_primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    pub const fn with_auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }

    pub const fn with_read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Whether the field is part of an INSERT column list.
    pub const fn is_insertable(&self) -> bool {
        !self.auto_increment && !self.read_only
    }

    /// Whether the field is part of an UPDATE SET clause.
    pub const fn is_updatable(&self) -> bool {
        !self.primary_key && !self.read_only
    }
}
