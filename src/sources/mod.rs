pub mod client;
pub mod fields;
pub mod provider;
pub mod remoteok;
pub mod remotive;
pub mod sample;

pub use client::JobBoardClient;
pub use provider::JobBoard;
pub use remoteok::RemoteOkBoard;
pub use remotive::RemotiveBoard;
pub use sample::sample_postings;
