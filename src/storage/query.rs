//! Parameterised statement builder for optional filters.
//!
//! A [`Query`] starts from a fixed statement whose text already ends in a
//! `WHERE` clause (usually `WHERE 1=1`) and accumulates `AND column op ?N`
//! predicates only for values that are present. Column names are
//! `&'static str` so that only compile-time identifiers ever reach the SQL
//! text; every value is bound.

use rusqlite::{params_from_iter, types::Value, Connection, Row};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Eq,
    Like,
}

impl Op {
    fn as_sql(self) -> &'static str {
        match self {
            Op::Eq => "=",
            Op::Like => "LIKE",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Predicate {
    column: &'static str,
    op: Op,
    value: Value,
}

#[derive(Clone, Debug)]
pub struct Query {
    base: &'static str,
    bound: Vec<Value>,
    predicates: Vec<Predicate>,
    order_by: Option<&'static str>,
}

impl Query {
    pub fn new(base: &'static str) -> Self {
        Self {
            base,
            bound: Vec::new(),
            predicates: Vec::new(),
            order_by: None,
        }
    }

    /// Bind a value for a placeholder already written in the base statement.
    /// Base placeholders must be numbered `?1..?N` in bind order.
    pub fn bind(mut self, value: impl Into<Value>) -> Self {
        self.bound.push(value.into());
        self
    }

    pub fn and_eq<V: Into<Value>>(mut self, column: &'static str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.predicates.push(Predicate {
                column,
                op: Op::Eq,
                value: value.into(),
            });
        }
        self
    }

    /// The caller owns the wildcards: `%2` matches values ending in `2`.
    pub fn and_like(mut self, column: &'static str, pattern: Option<&str>) -> Self {
        if let Some(pattern) = pattern {
            self.predicates.push(Predicate {
                column,
                op: Op::Like,
                value: Value::Text(pattern.to_owned()),
            });
        }
        self
    }

    pub fn order_by(mut self, columns: &'static str) -> Self {
        self.order_by = Some(columns);
        self
    }

    pub fn predicate_count(&self) -> usize {
        self.predicates.len()
    }

    /// Render the statement text and the values in placeholder order.
    pub fn render(&self) -> (String, Vec<&Value>) {
        let mut sql = String::from(self.base.trim_end());
        let mut values: Vec<&Value> = self.bound.iter().collect();
        for predicate in &self.predicates {
            values.push(&predicate.value);
            sql.push_str(&format!(
                "\n  AND {} {} ?{}",
                predicate.column,
                predicate.op.as_sql(),
                values.len()
            ));
        }
        if let Some(order_by) = self.order_by {
            sql.push_str("\nORDER BY ");
            sql.push_str(order_by);
        }
        (sql, values)
    }

    pub fn execute(&self, conn: &Connection) -> rusqlite::Result<usize> {
        let (sql, values) = self.render();
        let mut stmt = conn.prepare(&sql)?;
        stmt.execute(params_from_iter(values))
    }

    pub fn query_map<T, F>(&self, conn: &Connection, f: F) -> rusqlite::Result<Vec<T>>
    where
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let (sql, values) = self.render();
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map(params_from_iter(values), f)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }
}
