// tests/support/mod.rs
// Shared by several integration test binaries; not every binary uses every helper.
#[allow(dead_code, unused_imports)]
pub mod clock;

#[allow(dead_code, unused_imports)]
pub mod db;

#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(unused_imports)]
pub use clock::{FixedClock, TickingClock, fixed_now};
#[allow(unused_imports)]
pub use db::{TestContext, setup_test_db};
#[allow(unused_imports)]
pub use mocks::CountingLikeRepo;
