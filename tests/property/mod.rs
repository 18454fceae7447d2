pub mod grid_properties;
