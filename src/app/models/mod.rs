mod country;
mod date_picker;
mod dialog;
mod form;
mod notification;

pub use self::country::{*};
pub use self::date_picker::{*};
pub use self::dialog::{*};
pub use self::form::{*};
pub use self::notification::{*};
