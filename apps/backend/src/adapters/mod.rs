pub mod store_sea;
