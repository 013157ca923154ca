pub mod breakdowns;
pub mod charts;
pub mod dataset;
pub mod export;
pub mod rankings;
pub mod svg;
pub mod trends;
