pub mod complaint_handler;
pub mod officer_handler;
pub mod review_handler;

pub use complaint_handler::*;
pub use officer_handler::*;
pub use review_handler::*;
