pub mod adapters;
pub mod campaign;
pub mod signals;
