pub mod bar;
pub mod levels;
pub mod snapshot;

pub use bar::*;
pub use levels::*;
pub use snapshot::*;
