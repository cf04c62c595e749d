pub mod browser;
pub mod history;
pub mod tabs;

pub use browser::{Browser, Status};
pub use history::History;
pub use tabs::TabQueue;
