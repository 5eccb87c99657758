pub mod pool_instructions;
pub mod registry_instructions;
pub mod rpc;
pub mod utils;
