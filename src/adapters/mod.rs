// Adapters layer: concrete implementations of the domain ports (http service, page view).

pub mod http;
pub mod view;
