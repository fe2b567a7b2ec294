mod commentary;
mod common;
mod matches;
mod news;
mod player;
mod rankings;
mod scorecard;
mod search;

pub use commentary::*;
pub use common::*;
pub use matches::*;
pub use news::*;
pub use player::*;
pub use rankings::*;
pub use scorecard::*;
pub use search::*;
