//! Service kinds
//!
//! The scheme of a connection URI names the service. It decides which parts of the
//! URI locate the resource: `s3` takes the host as bucket and the path as key, `ssm`
//! takes the whole path as the parameter name. Other schemes are accepted and carry
//! no resource identifier.

use crate::field::Field;

/// The service named by a URI scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ServiceKind {
    /// object storage: `s3://bucket/key`
    S3,
    /// parameter store: `ssm:///path/to/parameter`
    Ssm,
    /// any other scheme
    Other,
}

impl ServiceKind {
    /// Classifies a scheme. Schemes are compared case-insensitively.
    #[must_use]
    pub fn from_scheme(scheme: &str) -> Self {
        if scheme.eq_ignore_ascii_case("s3") {
            Self::S3
        } else if scheme.eq_ignore_ascii_case("ssm") {
            Self::Ssm
        } else {
            Self::Other
        }
    }

    /// Fields that identify a resource of this service
    #[must_use]
    pub const fn resource_fields(self) -> &'static [Field] {
        match self {
            Self::S3 => &[Field::Bucket, Field::Key],
            Self::Ssm => &[Field::Name],
            Self::Other => &[],
        }
    }
}
