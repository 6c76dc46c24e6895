pub mod roi_result;

pub use roi_result::RoiResult;
