pub mod layout;
pub mod marquee;

pub use layout::*;
pub use marquee::*;
