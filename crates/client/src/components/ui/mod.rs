//! UI primitives (Button, Card, Avatar, etc.)

pub mod avatar;
pub mod button;
pub mod card;
pub mod dropdown;
pub mod separator;

pub use avatar::*;
pub use button::*;
pub use card::*;
pub use dropdown::*;
pub use separator::*;
