pub mod colors;
pub mod date;
pub mod formatting;
pub mod path;
pub mod table;
pub mod time;
pub mod timezone;

pub use formatting::hours2readable;
pub use formatting::mins2readable;
