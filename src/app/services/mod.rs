mod debounce;
mod form;
mod log;
mod template;

pub use self::debounce::{*};
pub use self::form::{*};
pub use self::log::{*};
pub use self::template::{*};
