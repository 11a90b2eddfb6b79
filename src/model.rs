//! Schema model built by the scanner and consumed by the emitter.

/// A single column of a table.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub typ: String,
    pub primary_key: bool,
}

/// A FOREIGN KEY edge from the owning table to `target_table`.
///
/// `target_table` is never checked against the schema; dangling references
/// are emitted as written.
#[derive(Debug, Clone, PartialEq)]
pub struct Relation {
    pub source_field: String,
    pub target_table: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub name: String,
    pub fields: Vec<Field>,
    pub relations: Vec<Relation>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: vec![],
            relations: vec![],
        }
    }
}

/// Tables in first-declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    pub tables: Vec<Table>,
}

impl Schema {
    /// Start a fresh table under `name` and return its index.
    ///
    /// Re-declaring a name discards its previously accumulated fields and
    /// relations but keeps the table's original position: last declaration
    /// wins, first declaration orders.
    pub fn declare(&mut self, name: &str) -> usize {
        if let Some(idx) = self.tables.iter().position(|t| t.name == name) {
            self.tables[idx] = Table::new(name);
            idx
        } else {
            self.tables.push(Table::new(name));
            self.tables.len() - 1
        }
    }
}
