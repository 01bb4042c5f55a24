//! Unit test suite exercising the public library API with the
//! in-memory fakes from `gitlost::test_utils`.

mod aggregation_tests;
mod detection_tests;
mod listing_cache_tests;
