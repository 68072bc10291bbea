pub mod alert;
pub mod data_block;
pub mod data_point;
pub mod precipitation;
pub mod storm;
pub mod temperature;
pub mod wind;

pub use alert::*;
pub use data_block::*;
pub use data_point::*;
pub use precipitation::*;
pub use storm::*;
pub use temperature::*;
pub use wind::*;
