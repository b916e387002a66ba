pub mod rpc;

pub use rpc::{ApiError, JsonRpcRequest, JsonRpcResponse, LoginParams};
