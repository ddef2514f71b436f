pub mod toml_loader;

pub use toml_loader::{load_roster_toml, parse_roster_toml};
