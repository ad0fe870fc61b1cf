#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use recfmt_reflect as reflect;
pub use recfmt_utils as utils;
