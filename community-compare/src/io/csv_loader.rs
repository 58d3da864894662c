//! CSV membership loading.

use crate::{
    core::{MembershipRow, MembershipTable},
    errors::CompareError,
    io::{COMMUNITY_COL, NODE_COL},
};
use std::{fs::File, path::Path};

/// Load a method's (node, community) table from a headed CSV file.
///
/// Columns are matched by name, so extra columns and arbitrary column order
/// are fine. Missing `node`/`community` columns fail up front.
pub(crate) fn load_csv(path: &Path) -> Result<MembershipTable, CompareError> {
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(file);

    for col in [NODE_COL, COMMUNITY_COL] {
        if !reader.headers()?.iter().any(|header| header == col) {
            return Err(CompareError::ColumnDoesNotExist(col.to_string()));
        }
    }

    let mut rows = vec![];
    for record in reader.deserialize::<MembershipRow>() {
        rows.push(record?);
    }
    Ok(MembershipTable::new(rows))
}
