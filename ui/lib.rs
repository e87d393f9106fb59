mod button;
mod card;
mod form;
mod layout;
mod util;

pub use self::button::*;
pub use self::card::*;
pub use self::form::*;
pub use self::layout::*;
pub use self::util::*;
