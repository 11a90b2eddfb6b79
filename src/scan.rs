//! Line-oriented scanner for CREATE TABLE statements.
//!
//! Each input line is trimmed and classified against an ordered list of
//! matchers; the first hit wins and everything else is ignored. Scanning is
//! best-effort and total: malformed SQL yields a partial schema, never an
//! error.

use crate::model::{Field, Relation, Schema};

/// Classification of one trimmed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineKind {
    TableDecl(String),
    ForeignKey {
        source_field: String,
        target_table: String,
    },
    FieldDef {
        name: String,
        typ: String,
        primary_key: bool,
    },
    Ignored,
}

/// Classify a trimmed line, trying matchers in priority order.
pub fn classify(line: &str) -> LineKind {
    if let Some(name) = search(line, table_decl_at) {
        return LineKind::TableDecl(name);
    }
    if let Some((source_field, target_table)) = search(line, foreign_key_at) {
        return LineKind::ForeignKey {
            source_field,
            target_table,
        };
    }
    // End of a table body; never a field.
    if !line.starts_with(')') {
        if let Some((name, typ, primary_key)) = field_def(line) {
            return LineKind::FieldDef {
                name,
                typ,
                primary_key,
            };
        }
    }
    LineKind::Ignored
}

/// Build a [`Schema`] from raw SQL text.
///
/// A fold over lines carrying the schema plus the index of the table
/// currently being filled. Field and foreign-key lines seen before any
/// `CREATE TABLE` are dropped.
pub fn scan(input: &str) -> Schema {
    let (schema, _) = input.lines().fold(
        (Schema::default(), None::<usize>),
        |(mut schema, current), raw| {
            let line = raw.trim();
            match classify(line) {
                LineKind::TableDecl(name) => {
                    let idx = schema.declare(&name);
                    (schema, Some(idx))
                }
                LineKind::ForeignKey {
                    source_field,
                    target_table,
                } => {
                    if let Some(idx) = current {
                        schema.tables[idx].relations.push(Relation {
                            source_field,
                            target_table,
                        });
                    }
                    (schema, current)
                }
                LineKind::FieldDef {
                    name,
                    typ,
                    primary_key,
                } => {
                    if let Some(idx) = current {
                        schema.tables[idx].fields.push(Field {
                            name,
                            typ,
                            primary_key,
                        });
                    }
                    (schema, current)
                }
                LineKind::Ignored => (schema, current),
            }
        },
    );
    schema
}

fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Try `matcher` at every position of `line` (unanchored match).
fn search<T>(line: &str, matcher: impl Fn(&str) -> Option<T>) -> Option<T> {
    line.char_indices().find_map(|(i, _)| matcher(&line[i..]))
}

/// Case-insensitive keyword at the start of `s`; returns the rest.
fn keyword<'a>(s: &'a str, kw: &str) -> Option<&'a str> {
    let rest = s.get(kw.len()..)?;
    if s[..kw.len()].eq_ignore_ascii_case(kw) {
        Some(rest)
    } else {
        None
    }
}

/// At least one whitespace character.
fn ws1(s: &str) -> Option<&str> {
    let rest = s.trim_start();
    if rest.len() == s.len() { None } else { Some(rest) }
}

/// A run of word characters; returns the run and the rest.
fn word(s: &str) -> Option<(&str, &str)> {
    let end = s
        .char_indices()
        .find(|&(_, c)| !is_word(c))
        .map_or(s.len(), |(i, _)| i);
    if end == 0 { None } else { Some(s.split_at(end)) }
}

/// An identifier optionally wrapped in a backtick or double-quote pair.
fn quoted_word(s: &str) -> Option<String> {
    let s = s.strip_prefix(['`', '"']).unwrap_or(s);
    word(s).map(|(w, _)| w.to_string())
}

/// `IF NOT EXISTS` followed by whitespace.
fn if_not_exists(s: &str) -> Option<&str> {
    let s = keyword(s, "IF")?;
    let s = ws1(s)?;
    let s = keyword(s, "NOT")?;
    let s = ws1(s)?;
    let s = keyword(s, "EXISTS")?;
    ws1(s)
}

/// `CREATE TABLE [IF NOT EXISTS] <ident>` starting at `s`.
fn table_decl_at(s: &str) -> Option<String> {
    let s = keyword(s, "CREATE")?;
    let s = ws1(s)?;
    let s = keyword(s, "TABLE")?;
    let s = ws1(s)?;
    if let Some(tail) = if_not_exists(s) {
        if let Some(name) = quoted_word(tail) {
            return Some(name);
        }
    }
    quoted_word(s)
}

/// Non-empty parenthesized text: everything up to the closing paren.
fn paren_body(s: &str) -> Option<(&str, &str)> {
    let end = s.find(')')?;
    if end == 0 {
        return None;
    }
    Some((&s[..end], &s[end + 1..]))
}

/// `FOREIGN KEY (<cols>) REFERENCES <ident>(<cols>)` starting at `s`.
///
/// Whitespace is required after `KEY` and before `REFERENCES`, optional
/// before the target column list. The source column list is kept as raw
/// text with quote characters stripped; the target column list must be
/// present but is otherwise discarded.
fn foreign_key_at(s: &str) -> Option<(String, String)> {
    let s = keyword(s, "FOREIGN")?;
    let s = ws1(s)?;
    let s = keyword(s, "KEY")?;
    let s = ws1(s)?;
    let s = s.strip_prefix('(')?;
    let (cols, s) = paren_body(s)?;
    let s = ws1(s)?;
    let s = keyword(s, "REFERENCES")?;
    let s = ws1(s)?;
    let (target, s) = word(s)?;
    let s = s.trim_start();
    let s = s.strip_prefix('(')?;
    let (_target_cols, _) = paren_body(s)?;

    let source = cols.replace(['`', '"'], "").trim().to_string();
    Some((source, target.to_string()))
}

/// A run of word characters and parentheses, e.g. `VARCHAR(255)`.
fn type_token(s: &str) -> Option<(&str, &str)> {
    let end = s
        .char_indices()
        .find(|&(_, c)| !(is_word(c) || c == '(' || c == ')'))
        .map_or(s.len(), |(i, _)| i);
    if end == 0 { None } else { Some(s.split_at(end)) }
}

/// `<ident> <type> <constraints...>` anchored at the start of the line.
///
/// The constraint remainder runs up to the first `,` or `)`; the field is
/// a primary key iff that remainder contains `primary key` in any case.
fn field_def(line: &str) -> Option<(String, String, bool)> {
    let s = line.trim_start();
    let s = s.strip_prefix(['`', '"']).unwrap_or(s);
    let (name, s) = word(s)?;
    let s = s.strip_prefix(['`', '"']).unwrap_or(s);
    let s = ws1(s)?;
    let (typ, s) = type_token(s)?;
    let remainder = &s[..s.find([',', ')']).unwrap_or(s.len())];
    let primary_key = remainder.to_lowercase().contains("primary key");
    Some((name.to_string(), typ.to_string(), primary_key))
}
