pub mod chain;

pub use chain::ChainGateway;
