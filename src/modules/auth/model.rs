pub use academia_models::auth::*;
pub use academia_models::users::SessionUser;
