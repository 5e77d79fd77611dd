use std::path::Path;

use polars::prelude::*;
use tracing::{debug, info};

use crate::enrichment::{
    enrich_dual_input, join_first_chunk, join_table_and_column_meta, DUAL_INPUT_DROP,
    SINGLE_INPUT_DROP,
};
use crate::error::Result;
use crate::outliers::drop_runtime_outliers;
use crate::run::{RunDirectory, JOINS_CSV, JOIN_STAGES_CSV, OPERATORS_CSV};
use crate::selectivity::{
    fill_missing_strings, fill_missing_with_zero, with_selectivity, SELECTIVITY_LEFT,
    SELECTIVITY_RIGHT,
};

/// Operator rows evaluated by the expression engine; the calibration test
/// corpus contains no such queries, so these rows are removed.
const EXPRESSION_EVALUATOR: &str = "ExpressionEvaluator";

/// The three cleaned tables of one calibration run.
#[derive(Debug, Clone)]
pub struct OperatorDatasets {
    pub operators: DataFrame,
    pub joins: DataFrame,
    pub join_stages: DataFrame,
}

/// Builds the fully joined scan-operator dataset of a single-input
/// workload: outlier-screened operator rows carrying denormalized table,
/// column, and chunk-0 segment attributes, with selectivities derived and
/// every remaining missing value defaulted to 0 / "0".
pub fn load_joined_data(path: &Path) -> Result<DataFrame> {
    let run = RunDirectory::new(path);
    let operators = run.csv(OPERATORS_CSV)?;
    let metadata = run.load_metadata()?;

    let total = operators.height();
    let operators = drop_runtime_outliers(&operators)?;
    debug!(
        kept = operators.height(),
        total, "runtime outliers removed"
    );

    let joined = join_table_and_column_meta(operators, &metadata)?;
    let joined = join_first_chunk(joined, &metadata)?;

    let joined = joined
        .lazy()
        .filter(col("OPERATOR_IMPLEMENTATION").neq_missing(lit(EXPRESSION_EVALUATOR)))
        .collect()?;

    let joined = with_selectivity(joined, SELECTIVITY_LEFT, "INPUT_ROWS_LEFT")?;
    let joined = with_selectivity(joined, SELECTIVITY_RIGHT, "INPUT_ROWS_RIGHT")?;
    let joined = fill_missing_with_zero(joined)?;

    debug!(
        rows = joined.height(),
        columns = joined.width(),
        "joined dataset ready"
    );
    Ok(joined)
}

/// Builds the cleaned dataset of one named operator export. The dual-input
/// shape (split left/right input-row counts) is enriched once per side; the
/// single-input shape follows the joined-data path without outlier removal.
/// Merge-key and denormalized-count columns are dropped per shape, and
/// selectivity is derived for each side the schema provides.
pub fn load_operator_data(path: &Path, file_name: &str) -> Result<DataFrame> {
    let run = RunDirectory::new(path);
    let operators = run.csv(file_name)?;
    let metadata = run.load_metadata()?;

    let has_two_inputs = operators.column("INPUT_ROWS_LEFT").is_ok()
        && operators.column("INPUT_ROWS_RIGHT").is_ok();

    let joined = if has_two_inputs {
        let joined = enrich_dual_input(operators, &metadata)?;
        joined.drop_many(DUAL_INPUT_DROP.iter().copied())
    } else {
        let joined = join_table_and_column_meta(operators, &metadata)?;
        let joined = fill_missing_strings(joined)?;
        let joined = join_first_chunk(joined, &metadata)?;
        let joined = joined
            .lazy()
            .filter(col("OPERATOR_IMPLEMENTATION").neq_missing(lit(EXPRESSION_EVALUATOR)))
            .collect()?;
        joined.drop_many(SINGLE_INPUT_DROP.iter().copied())
    };

    let dataset = if joined.column("INPUT_ROWS_LEFT").is_ok() {
        let joined = with_selectivity(joined, SELECTIVITY_RIGHT, "INPUT_ROWS_RIGHT")?;
        with_selectivity(joined, SELECTIVITY_LEFT, "INPUT_ROWS_LEFT")?
    } else {
        with_selectivity(joined, SELECTIVITY_LEFT, "INPUT_ROWS")?
    };

    debug!(
        file = file_name,
        rows = dataset.height(),
        columns = dataset.width(),
        "operator dataset ready"
    );
    Ok(dataset)
}

/// Assembles the three datasets of a calibration run: general operator
/// data, join-operator data, and join-stage data. Join stages are enriched
/// with the attributes of their join on `JOIN_ID` before the id column,
/// which only existed as a merge key, is dropped from both frames. Rows
/// with any remaining missing field are removed from all three outputs.
pub fn load_all_operator_data(path: &Path) -> Result<OperatorDatasets> {
    let operators = load_operator_data(path, OPERATORS_CSV)?;
    let joins = load_operator_data(path, JOINS_CSV)?;

    let run = RunDirectory::new(path);
    let join_stages = run
        .csv(JOIN_STAGES_CSV)?
        .lazy()
        .join(
            joins.clone().lazy(),
            [col("JOIN_ID")],
            [col("JOIN_ID")],
            JoinArgs::new(JoinType::Left),
        )
        .collect()?;

    let joins = joins.drop_many(["JOIN_ID"]);
    let join_stages = join_stages.drop_many(["JOIN_ID"]);

    let operators = operators.lazy().drop_nulls(None).collect()?;
    let joins = joins.lazy().drop_nulls(None).collect()?;
    let join_stages = join_stages.lazy().drop_nulls(None).collect()?;

    info!(
        operators = operators.height(),
        joins = joins.height(),
        join_stages = join_stages.height(),
        "calibration datasets assembled"
    );

    Ok(OperatorDatasets {
        operators,
        joins,
        join_stages,
    })
}
