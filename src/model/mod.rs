/// Authentication request and response models
pub mod auth;
/// Feed item records returned from tag streams
pub mod feed;
/// Tag stream query and response models
pub mod stream;
