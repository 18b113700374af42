pub mod deposit;
pub mod initialize_gateway;
pub mod submit;
pub mod views;

pub use deposit::*;
pub use initialize_gateway::*;
pub use submit::*;
pub use views::*;
