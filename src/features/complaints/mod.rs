//! Civic complaints: submission, status tracking, reviews and officer stats.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/complaints` | No | List complaints, newest first |
//! | GET | `/api/complaints/{id}` | No | Get one complaint |
//! | POST | `/api/complaints` | No | Submit a complaint |
//! | PATCH | `/api/complaints/{id}/status` | No | Update status / assign officer |
//! | POST | `/api/reviews` | No | Review a complaint |
//! | GET | `/api/complaints/{id}/reviews` | No | List reviews of a complaint |
//! | GET | `/api/officers/{id}/stats` | No | Resolved / in-progress / work-done counts |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{ComplaintStorage, DatabaseStorage};
