mod complaint_dto;
mod review_dto;

pub use complaint_dto::*;
pub use review_dto::*;
