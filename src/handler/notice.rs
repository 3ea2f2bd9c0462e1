pub mod create;
pub use create as Create;
