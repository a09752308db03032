pub mod dto;

pub use dto::{
    aggregate_total_tons, ChartSeries, RangeError, SummaryRange, SummaryRecord, SummaryResponse,
};
