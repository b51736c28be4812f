pub mod controller;
pub mod model;
pub mod router;
pub mod service;

pub use router::{init_admin_notifications_router, init_notifications_router};
