pub mod constants;
pub mod data_backend;
pub mod data_types;
pub mod lookup;
pub mod renderer;
pub mod shared_main;
pub mod view;
