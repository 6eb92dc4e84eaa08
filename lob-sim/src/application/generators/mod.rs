mod snapshot_simulator;

pub use snapshot_simulator::{SnapshotSimulator, generate};
