pub mod aggregate;
pub mod builder;
pub mod journal;
pub mod presentation;
pub mod scale;
pub mod store;
