pub mod package_tests;
pub mod registry_tests;
