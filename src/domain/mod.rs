// 領域層：原始 record、轉換後的模型與 transport port

pub mod model;
pub mod ports;
pub mod record;
