//! Configuration loaded from `.credstore.toml`.

pub mod settings;

pub use settings::Settings;
