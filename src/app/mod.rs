mod app;
mod keyboard;

pub use app::OverlayApp;
