//! Layout collection and selection; the implementation lives in the
//! private `core` module.

mod core;

pub use self::core::LayoutRegistry;
