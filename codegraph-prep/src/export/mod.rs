pub mod vis;
