pub mod lumen;
