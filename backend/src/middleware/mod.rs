pub mod locale;

pub use locale::{locale_middleware, resolve_culture};
