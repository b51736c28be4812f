pub use academia_models::dashboard::*;
