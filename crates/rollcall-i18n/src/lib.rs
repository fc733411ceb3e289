//! # Rollcall I18n
//!
//! Internationalization support using the Fluent localization system.
//!
//! Locale resources live in `locales/<code>/main.ftl` and are validated for
//! key and parameter parity across locales by the build script, so a missing
//! translation is a build error rather than a runtime surprise.

pub mod bundle;
pub mod error;
pub mod locale;
pub mod manager;
pub mod resource;

pub use bundle::BundleManager;
pub use error::{I18nError, I18nResult};
pub use locale::Locale;
pub use manager::I18nManager;
pub use resource::ResourceManager;
