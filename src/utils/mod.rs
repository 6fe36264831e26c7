//! 工具模块

mod mask;

pub use mask::mask_api_key;
