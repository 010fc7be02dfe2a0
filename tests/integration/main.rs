//! HTTP-level integration tests against the real router.

mod helpers;

mod files_test;
mod health_test;
