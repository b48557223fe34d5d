//! SQLite binding for the 25-byte point record (feature `sqlite`).
//!
//! `PointColumn` wraps a present point; use `Option<PointColumn>` for a
//! nullable column so SQL `NULL` reads and writes as an absent point.
//!
//! ```rust,ignore
//! conn.execute("INSERT INTO places (pos) VALUES (?1)", [PointColumn(p)])?;
//! let pos: Option<PointColumn> = conn.query_row("SELECT pos FROM places", [], |r| r.get(0))?;
//! ```

use std::borrow::Cow;

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, Value, ValueRef};

use geopoint_core::Point;

use crate::column::{self, ColumnValue};
use crate::{binary, CodecError};

/// A present point stored as a `BLOB` in the layout of [`crate::binary`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointColumn(pub Point);

impl PointColumn {
    #[inline]
    pub fn into_inner(self) -> Point {
        self.0
    }
}

impl From<Point> for PointColumn {
    fn from(p: Point) -> Self {
        PointColumn(p)
    }
}

impl<'a> From<ValueRef<'a>> for ColumnValue<'a> {
    fn from(v: ValueRef<'a>) -> Self {
        match v {
            ValueRef::Null       => ColumnValue::Null,
            ValueRef::Integer(i) => ColumnValue::Integer(i),
            ValueRef::Real(f)    => ColumnValue::Real(f),
            ValueRef::Text(t)    => ColumnValue::Text(String::from_utf8_lossy(t)),
            ValueRef::Blob(b)    => ColumnValue::Blob(Cow::Borrowed(b)),
        }
    }
}

impl FromSql for PointColumn {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match column::scan(&ColumnValue::from(value)) {
            Ok(p) => Ok(PointColumn(p)),
            Err(CodecError::InvalidType(_)) => Err(FromSqlError::InvalidType),
            Err(e) => Err(FromSqlError::Other(Box::new(e))),
        }
    }
}

impl ToSql for PointColumn {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        let record = binary::encode(Some(&self.0))
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
        Ok(ToSqlOutput::Owned(Value::Blob(record.to_vec())))
    }
}
