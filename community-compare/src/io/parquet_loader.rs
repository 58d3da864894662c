//! Parquet membership loading via the arrow record-batch reader.

use crate::{
    core::{MembershipRow, MembershipTable},
    errors::CompareError,
    io::{COMMUNITY_COL, NODE_COL},
};
use arrow_array::{
    cast::AsArray,
    types::{Int32Type, Int64Type, UInt32Type, UInt64Type},
    Array,
};
use arrow_schema::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use std::{fs::File, path::Path};

/// Load a method's (node, community) table from a parquet file.
///
/// Both columns may be string or integer typed; integers are normalised to
/// their decimal string form so parquet and csv data join identically.
pub(crate) fn load_parquet(path: &Path) -> Result<MembershipTable, CompareError> {
    let file = File::open(path)?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    let schema = builder.schema().clone();

    let node_index = column_index(&schema, NODE_COL)?;
    let community_index = column_index(&schema, COMMUNITY_COL)?;

    let mut rows = vec![];
    for batch in builder.build()? {
        let batch = batch?;
        let nodes = column_strings(batch.column(node_index).as_ref(), NODE_COL, path)?;
        let communities =
            column_strings(batch.column(community_index).as_ref(), COMMUNITY_COL, path)?;
        rows.extend(
            nodes
                .into_iter()
                .zip(communities)
                .map(|(node, community)| MembershipRow { node, community }),
        );
    }
    Ok(MembershipTable::new(rows))
}

fn column_index(schema: &arrow_schema::Schema, column: &str) -> Result<usize, CompareError> {
    schema
        .index_of(column)
        .map_err(|_| CompareError::ColumnDoesNotExist(column.to_string()))
}

/// Lift one column of a record batch into strings.
fn column_strings(
    array: &dyn Array,
    column: &str,
    path: &Path,
) -> Result<Vec<String>, CompareError> {
    let lift_error = || CompareError::NullsInColumn {
        column: column.to_string(),
        path: path.to_path_buf(),
    };
    let values: Option<Vec<String>> = match array.data_type() {
        DataType::Utf8 => array
            .as_string::<i32>()
            .iter()
            .map(|v| v.map(str::to_string))
            .collect(),
        DataType::LargeUtf8 => array
            .as_string::<i64>()
            .iter()
            .map(|v| v.map(str::to_string))
            .collect(),
        DataType::Utf8View => array
            .as_string_view()
            .iter()
            .map(|v| v.map(str::to_string))
            .collect(),
        DataType::Int32 => array
            .as_primitive::<Int32Type>()
            .iter()
            .map(|v| v.map(|value| value.to_string()))
            .collect(),
        DataType::Int64 => array
            .as_primitive::<Int64Type>()
            .iter()
            .map(|v| v.map(|value| value.to_string()))
            .collect(),
        DataType::UInt32 => array
            .as_primitive::<UInt32Type>()
            .iter()
            .map(|v| v.map(|value| value.to_string()))
            .collect(),
        DataType::UInt64 => array
            .as_primitive::<UInt64Type>()
            .iter()
            .map(|v| v.map(|value| value.to_string()))
            .collect(),
        dtype => {
            return Err(CompareError::UnsupportedColumnType {
                column: column.to_string(),
                path: path.to_path_buf(),
                dtype: dtype.to_string(),
            })
        }
    };
    values.ok_or_else(lift_error)
}

#[cfg(test)]
mod test {
    use super::*;
    use arrow_array::{Int64Array, RecordBatch, StringArray};
    use arrow_schema::{Field, Schema};
    use parquet::arrow::ArrowWriter;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn write_fixture(path: &Path) {
        let schema = Arc::new(Schema::new(vec![
            Field::new(NODE_COL, DataType::Utf8, false),
            Field::new(COMMUNITY_COL, DataType::Int64, false),
        ]));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(StringArray::from(vec!["n1", "n2", "n3"])),
                Arc::new(Int64Array::from(vec![0_i64, 0, 1])),
            ],
        )
        .unwrap();
        let file = File::create(path).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();
    }

    #[test]
    fn loads_and_normalises_integer_communities() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("leiden.parquet");
        write_fixture(&path);

        let table = load_parquet(&path).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.rows()[0].node, "n1");
        assert_eq!(table.rows()[0].community, "0");
        assert_eq!(table.rows()[2].community, "1");
    }

    #[test]
    fn agrees_with_the_csv_loader() {
        let dir = tempfile::tempdir().unwrap();
        let parquet_path = dir.path().join("m.parquet");
        write_fixture(&parquet_path);

        let csv_path = dir.path().join("m.csv");
        std::fs::write(&csv_path, "node,community\nn1,0\nn2,0\nn3,1\n").unwrap();

        let from_parquet = load_parquet(&parquet_path).unwrap();
        let from_csv = crate::io::csv_loader::load_csv(&csv_path).unwrap();
        assert_eq!(from_parquet, from_csv);
    }

    #[test]
    fn missing_node_column_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.parquet");
        let schema = Arc::new(Schema::new(vec![Field::new(
            "vertex",
            DataType::Utf8,
            false,
        )]));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![Arc::new(StringArray::from(vec!["n1"]))],
        )
        .unwrap();
        let file = File::create(&path).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let err = load_parquet(&path).unwrap_err();
        assert!(matches!(err, CompareError::ColumnDoesNotExist(ref col) if col == NODE_COL));
    }
}
