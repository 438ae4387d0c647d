pub mod faucet;
pub mod quota;
pub mod withdrawal_window;

pub use faucet::*;
pub use quota::*;
pub use withdrawal_window::*;
