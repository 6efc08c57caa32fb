pub mod channel;
pub mod month;
pub mod settings;
pub mod state;
pub mod yearly;
