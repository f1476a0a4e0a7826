mod route_app;
mod route_app_error;

pub use route_app::RouteApp;
pub use route_app_error::RouteAppError;
