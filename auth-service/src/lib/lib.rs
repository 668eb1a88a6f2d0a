pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod server;

pub use outbound::repositories;

pub mod proto {
    tonic::include_proto!("auth");

    /// Encoded descriptor set for gRPC server reflection
    pub const FILE_DESCRIPTOR_SET: &[u8] = tonic::include_file_descriptor_set!("auth_descriptor");
}
