// Utils compartidos

pub mod audio;
pub mod charts_ffi;
pub mod constants;
pub mod format;
pub mod i18n;
pub mod storage;

pub use constants::*;
pub use i18n::*;
