pub mod assets;
pub mod form;
pub mod frontend;
pub mod inputs;
pub mod preview;
pub mod profile;
pub mod render;

pub use frontend::App;
