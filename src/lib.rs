#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use kit_bools as bools;
pub use kit_convert as convert;
pub use kit_reflect as reflect;
