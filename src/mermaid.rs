//! Mermaid `erDiagram` emitter.

use crate::model::{Field, Schema, Table};

/// Render a schema as Mermaid `erDiagram` source.
///
/// Attribute blocks come first in table declaration order, then one
/// relationship line per foreign key in the same order. Tables without
/// fields get no block but may still appear as relation endpoints.
pub fn render(schema: &Schema) -> String {
    let mut output = String::from("erDiagram\n");

    for table in &schema.tables {
        if table.fields.is_empty() {
            continue;
        }
        render_table(&mut output, table);
    }

    for table in &schema.tables {
        for rel in &table.relations {
            output.push_str(&format!(
                "  {} }}|--|| {} : \"{}\"\n",
                table.name, rel.target_table, rel.source_field
            ));
        }
    }

    output
}

fn render_table(output: &mut String, table: &Table) {
    output.push_str(&format!("  {} {{\n", table.name));
    for field in &table.fields {
        render_field(output, field);
    }
    output.push_str("  }\n");
}

fn render_field(output: &mut String, field: &Field) {
    output.push_str(&format!("    {} {}", field.name, field.typ));
    if field.primary_key {
        output.push_str(" PK");
    }
    output.push('\n');
}
