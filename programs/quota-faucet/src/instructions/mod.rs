pub mod donate;
pub mod initialize;
pub mod set_quota;
pub mod transfer_ownership;
pub mod views;
pub mod withdraw;

pub use donate::*;
pub use initialize::*;
pub use set_quota::*;
pub use transfer_ownership::*;
pub use views::*;
pub use withdraw::*;
