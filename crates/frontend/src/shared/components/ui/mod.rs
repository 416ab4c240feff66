pub mod checkbox;
pub mod input;
pub mod radio;
pub mod select;
pub mod textarea;

pub use checkbox::Checkbox;
pub use input::Input;
pub use radio::Radio;
pub use select::Select;
pub use textarea::JsonTextarea;
