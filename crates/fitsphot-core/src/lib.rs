pub mod catalog;
pub mod consts;
pub mod detection;
pub mod error;
pub mod features;
pub mod io;
pub mod orbits;
pub mod pipeline;
