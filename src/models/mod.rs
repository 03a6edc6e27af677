// Catalog record types.
// Decoded, validated representations of API resources.

mod common;

pub mod character;
pub mod comic;
pub mod creator;
pub mod event;
pub mod series;
pub mod story;

pub use character::Character;
pub use comic::Comic;
pub use common::{Dates, Prices, Summary, TextObject};
pub use creator::Creator;
pub use event::Event;
pub use series::Series;
pub use story::Story;
