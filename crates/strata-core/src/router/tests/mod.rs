pub mod facade_tests;
