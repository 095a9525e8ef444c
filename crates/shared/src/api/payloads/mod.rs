mod users;
pub use users::*;

mod exercises;
pub use exercises::*;

mod logs;
pub use logs::*;
