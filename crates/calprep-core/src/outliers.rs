use polars::prelude::*;

use crate::error::Result;

/// Removes operator rows with extreme runtimes: anything at or above
/// mean + 3 standard deviations of `RUNTIME_NS` is dropped. Both statistics
/// are computed over the unfiltered frame, population stddev (ddof 0).
pub fn drop_runtime_outliers(operators: &DataFrame) -> Result<DataFrame> {
    let runtime = col("RUNTIME_NS").cast(DataType::Float64);
    let bound = runtime.clone().mean() + lit(3.0) * runtime.clone().std(0);

    let filtered = operators.clone().lazy().filter(runtime.lt(bound)).collect()?;
    Ok(filtered)
}
