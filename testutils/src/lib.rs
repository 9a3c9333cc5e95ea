mod apps;
mod constants;
mod fake;
mod objs;

pub use apps::*;
pub use constants::*;
pub use fake::*;
pub use objs::*;
