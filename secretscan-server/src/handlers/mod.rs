pub mod plugin;
pub mod scanners;
pub mod secret_scanner;
