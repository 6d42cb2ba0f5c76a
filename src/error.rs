use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("caloriesRange must be an array of two numbers (got {len})")]
    InvalidCaloriesRange { len: usize },

    #[error("missing required column `{0}`")]
    MissingColumn(&'static str),

    #[error("row {row}: calories value `{value}` is not a number")]
    InvalidCalories { row: usize, value: String },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
