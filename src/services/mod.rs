//! Link building, navigation values and the envelope builder.

pub mod links;
pub mod navigation;
pub mod pagination;
