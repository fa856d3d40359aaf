#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use sp_cfg as cfg;
pub use sp_lens as lens;
pub use sp_path as path;
pub use sp_utils as utils;
pub use sp_value as value;
