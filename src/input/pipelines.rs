// Input pipelines - turning device state into navigation

pub mod dispatch;

pub use dispatch::InputDispatcher;
