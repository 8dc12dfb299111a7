pub mod card;
pub mod category_picker;

pub use card::Card;
pub use category_picker::{category_picker, code_legend};
