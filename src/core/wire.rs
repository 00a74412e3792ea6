//! Stats API envelope and the typed header→field projection over its result sets.
//!
//! The API answers with a list of named partitions, each a header array plus row
//! arrays. [`Projection`] resolves an explicit `(upstream column, internal field)`
//! table against a partition's headers once, so a renamed or missing upstream
//! column fails here instead of surfacing later as an absent value.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::core::CsError;

#[derive(Deserialize)]
pub(crate) struct StatsEnvelope {
    #[serde(rename = "resultSets")]
    pub(crate) result_sets: Vec<ResultSet>,
}

#[derive(Deserialize)]
pub(crate) struct ResultSet {
    pub(crate) name: String,
    pub(crate) headers: Vec<String>,
    #[serde(rename = "rowSet", default)]
    pub(crate) row_set: Vec<Vec<Value>>,
}

impl StatsEnvelope {
    pub(crate) fn parse(body: &str) -> Result<Self, CsError> {
        serde_json::from_str(body).map_err(CsError::Json)
    }

    pub(crate) fn find(&self, name: &str) -> Option<&ResultSet> {
        self.result_sets.iter().find(|set| set.name == name)
    }

    /// Like [`find`](Self::find), but a missing partition is an error.
    pub(crate) fn partition(&self, name: &str) -> Result<&ResultSet, CsError> {
        self.find(name)
            .ok_or_else(|| CsError::MissingData(format!("{name} data not found")))
    }
}

impl ResultSet {
    pub(crate) fn first_row(&self) -> Result<&[Value], CsError> {
        self.row_set
            .first()
            .map(Vec::as_slice)
            .ok_or_else(|| CsError::MissingData(format!("{} has no rows", self.name)))
    }
}

/// Column lookup table for one partition, validated against its headers.
#[derive(Debug)]
pub(crate) struct Projection {
    partition: String,
    width: usize,
    index: HashMap<&'static str, usize>,
}

impl Projection {
    /// Resolve every `(upstream, internal)` pair against `set.headers`.
    ///
    /// # Errors
    ///
    /// Returns `CsError::MissingData` naming the first upstream column that the
    /// partition does not carry.
    pub(crate) fn new(
        set: &ResultSet,
        mapping: &[(&'static str, &'static str)],
    ) -> Result<Self, CsError> {
        let mut index = HashMap::with_capacity(mapping.len());
        for &(upstream, internal) in mapping {
            let pos = set
                .headers
                .iter()
                .position(|h| h == upstream)
                .ok_or_else(|| {
                    CsError::MissingData(format!(
                        "column {upstream} missing in partition {}",
                        set.name
                    ))
                })?;
            index.insert(internal, pos);
        }
        Ok(Self {
            partition: set.name.clone(),
            width: set.headers.len(),
            index,
        })
    }

    /// Bind a row to this projection. Rows shorter than the header array are rejected.
    pub(crate) fn row<'r>(&'r self, values: &'r [Value]) -> Result<Row<'r>, CsError> {
        if values.len() < self.width {
            return Err(CsError::MissingData(format!(
                "row in {} has {} values for {} headers",
                self.partition,
                values.len(),
                self.width
            )));
        }
        Ok(Row {
            projection: self,
            values,
        })
    }
}

/// One row seen through a [`Projection`], addressed by internal field name.
pub(crate) struct Row<'r> {
    projection: &'r Projection,
    values: &'r [Value],
}

impl Row<'_> {
    fn value(&self, field: &str) -> Result<&Value, CsError> {
        let idx = self.projection.index.get(field).ok_or_else(|| {
            CsError::MissingData(format!(
                "field {field} is not mapped for {}",
                self.projection.partition
            ))
        })?;
        // `row()` checked the width, so the index is in bounds.
        Ok(&self.values[*idx])
    }

    fn type_error(&self, field: &str, v: &Value, want: &str) -> CsError {
        CsError::Data(format!(
            "{}.{field}: expected {want}, got {v}",
            self.projection.partition
        ))
    }

    pub(crate) fn f64(&self, field: &str) -> Result<f64, CsError> {
        let v = self.value(field)?;
        match v {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
        .ok_or_else(|| self.type_error(field, v, "number"))
    }

    /// Null reads as `None`; any other non-numeric value is an error.
    pub(crate) fn opt_f64(&self, field: &str) -> Result<Option<f64>, CsError> {
        if self.value(field)?.is_null() {
            return Ok(None);
        }
        self.f64(field).map(Some)
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub(crate) fn u32(&self, field: &str) -> Result<u32, CsError> {
        let v = self.value(field)?;
        let n = match v {
            Value::Number(n) => n.as_u64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && *f >= 0.0)
                    .map(|f| f as u64)
            }),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        };
        n.and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| self.type_error(field, v, "non-negative integer"))
    }

    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn opt_i32(&self, field: &str) -> Result<Option<i32>, CsError> {
        let v = self.value(field)?;
        let n = match v {
            Value::Null => return Ok(None),
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
            Value::String(s) => s.trim().trim_start_matches('+').parse().ok(),
            _ => None,
        };
        n.and_then(|n| i32::try_from(n).ok())
            .map(Some)
            .ok_or_else(|| self.type_error(field, v, "integer"))
    }

    /// Text form of a value. Null and empty strings read as `None`.
    pub(crate) fn string(&self, field: &str) -> Result<Option<String>, CsError> {
        Ok(match self.value(field)? {
            Value::Null => None,
            Value::String(s) if s.trim().is_empty() => None,
            Value::String(s) => Some(s.trim().to_string()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            other => Some(other.to_string()),
        })
    }

    pub(crate) fn required_string(&self, field: &str) -> Result<String, CsError> {
        self.string(field)?.ok_or_else(|| {
            CsError::MissingData(format!("{}.{field} is empty", self.projection.partition))
        })
    }
}
