pub mod model;
pub use model as Model;

pub mod handler;
pub use handler as Handler;

pub mod routes;
pub use routes as Routes;

pub mod middleware;
pub use middleware as Middleware;

pub mod builtins;
pub use builtins as BuiltIns;

pub mod utils;
