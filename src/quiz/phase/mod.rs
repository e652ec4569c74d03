mod question;
mod results;
mod selection;

pub use self::question::*;
pub use self::results::*;
pub use self::selection::*;
