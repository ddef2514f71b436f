pub mod loaders;
pub mod records;
pub mod room;
pub mod seating;
pub mod student;

pub use loaders::{load_roster_toml, parse_roster_toml};
pub use records::{ClassRecord, ClassSummary, RoomRecord, RoomSummary};
pub use room::{RoomConfiguration, RoomLayout, RoomShape, SEATS_PER_BENCH};
pub use seating::{Bench, SeatingGrid};
pub use student::{ClassRoster, Student};
