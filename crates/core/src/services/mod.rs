pub mod candle_service;
pub mod grid_service;
pub mod series_service;
