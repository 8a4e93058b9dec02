pub mod capabilities;
pub mod context;
pub mod locale;
pub mod presets;
pub mod registry;
pub mod resolver;
pub mod scanner;
pub mod update;
