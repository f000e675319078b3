pub mod models;
pub mod notification;
pub mod preference;
pub mod selection;
pub mod timeline;
pub mod ui;
