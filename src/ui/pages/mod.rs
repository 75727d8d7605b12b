pub mod packages;

pub use packages::PackagesPage;
