use tonic_reflection::server::ServerReflection;
use tonic_reflection::server::ServerReflectionServer;

use crate::proto::FILE_DESCRIPTOR_SET;

pub mod auth_grpc_server;
pub mod handlers;

pub use auth_grpc_server::AuthGrpcService;

/// Reflection service describing `auth.AuthService`, for tools like grpcurl.
pub fn reflection_service(
) -> Result<ServerReflectionServer<impl ServerReflection>, tonic_reflection::server::Error> {
    tonic_reflection::server::Builder::configure()
        .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[test]
    fn test_descriptor_set_describes_auth_service() {
        assert!(contains(FILE_DESCRIPTOR_SET, b"auth.proto"));
        assert!(contains(FILE_DESCRIPTOR_SET, b"AuthService"));
        assert!(contains(FILE_DESCRIPTOR_SET, b"Signup"));
    }

    #[test]
    fn test_reflection_service_builds() {
        assert!(reflection_service().is_ok());
    }
}
