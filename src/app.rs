pub mod core;
pub mod metrics;
pub mod registry;
pub mod settings;
pub mod types;

pub use self::core::panel::PanelController;
pub use self::core::App;
pub use self::types::{Action, LoadStatus, Mode, PanelView, ReloadToken};
