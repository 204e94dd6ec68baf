//! Contact-tracing clusters: case data, the transmission network built from
//! it, and the view tying both to the force graph.

pub mod controller;
pub mod error;
pub mod fetch;
pub mod network;
pub mod record;
mod view;

pub use controller::{ClusterController, LoadPhase};
pub use error::FetchError;
pub use network::build_network;
pub use record::CaseRecord;
pub use view::Clusters;
