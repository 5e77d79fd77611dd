pub mod datasets;
pub mod enrichment;
pub mod error;
pub mod export;
pub mod outliers;
pub mod run;
pub mod selectivity;
