pub mod app;
pub mod components;
pub mod context;
pub mod routes;
pub mod views;
pub mod vm;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use app::App;
pub use context::{AppContext, DEFAULT_TITLE, UiApp, build_app_context};
pub use routes::Route;
