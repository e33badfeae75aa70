//! Configuration structures and types
pub mod compiler;
pub mod etherscan;
pub mod network;
pub mod root;

// Re-export main config types
pub use compiler::{CompilerConfig, CompilerSettings, OptimizerSettings, SolidityConfig};
pub use etherscan::EtherscanConfig;
pub use network::{ActiveNetwork, Endpoint, NetworkConfig};
pub use root::RootConfig;
