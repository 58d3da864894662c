use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum CompareError {
    #[error("IO error: {0}")]
    IOError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Parquet error: {0}")]
    ParquetError(#[from] parquet::errors::ParquetError),

    #[error("Arrow error: {0}")]
    ArrowError(#[from] arrow_schema::ArrowError),

    #[error("Unsupported file extension {extension:?}, supported extensions: {supported}")]
    UnsupportedFormat {
        extension: String,
        supported: &'static str,
    },

    #[error("Column {0} does not exist")]
    ColumnDoesNotExist(String),

    #[error("Column {column} in {path} has unsupported data type {dtype}")]
    UnsupportedColumnType {
        column: String,
        path: PathBuf,
        dtype: String,
    },

    #[error("Column {column} in {path} contains null values")]
    NullsInColumn { column: String, path: PathBuf },

    #[error("Data directory {0} does not exist or is not a directory")]
    DataDirNotFound(PathBuf),

    #[error("No data files with extension {extension:?} found in {path}")]
    NoDataFiles { path: PathBuf, extension: String },

    #[error("No method named {0}")]
    MethodNotFound(String),
}
