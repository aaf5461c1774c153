//! Named fields of a connection URI

use std::fmt;

/// A named field of a [`UriConfig`](crate::UriConfig).
///
/// The names are the keyword arguments of the client and resource constructors
/// (`region_name`, `aws_access_key_id`, ...) and of the get calls (`Bucket`, `Key`, `Name`).
/// They are the keys of every mapping returned by the group accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// `service_name`: the URI scheme
    ServiceName,
    /// `aws_access_key_id`: the userinfo username
    AccessKeyId,
    /// `aws_secret_access_key`: the userinfo password up to its first colon
    SecretAccessKey,
    /// `aws_session_token`: the userinfo password after its first colon
    SessionToken,
    /// `region_name`
    RegionName,
    /// `api_version`
    ApiVersion,
    /// `endpoint_url`
    EndpointUrl,
    /// `verify`
    Verify,
    /// `config`
    Config,
    /// `Bucket`: the host of an `s3` URI
    Bucket,
    /// `Key`: the path of an `s3` URI, without leading slashes
    Key,
    /// `Name`: the path of an `ssm` URI
    Name,
}

impl Field {
    /// Fields returned by `credentials`
    pub const CREDENTIALS: &'static [Self] = &[Self::AccessKeyId, Self::SecretAccessKey, Self::SessionToken];

    /// Fields returned by `configuration` in safe mode
    pub const CONFIGURATION: &'static [Self] = &[
        Self::AccessKeyId,
        Self::SecretAccessKey,
        Self::SessionToken,
        Self::RegionName,
    ];

    /// Fields returned by `for_client` in safe mode
    pub const CLIENT: &'static [Self] = &[
        Self::ServiceName,
        Self::RegionName,
        Self::ApiVersion,
        Self::EndpointUrl,
        Self::Verify,
        Self::AccessKeyId,
        Self::SecretAccessKey,
        Self::SessionToken,
        Self::Config,
    ];

    /// Fields carried by the query string, in encoding order
    pub const QUERY: &'static [Self] = &[
        Self::RegionName,
        Self::ApiVersion,
        Self::EndpointUrl,
        Self::Verify,
        Self::Config,
    ];

    const ALL: &'static [Self] = &[
        Self::ServiceName,
        Self::AccessKeyId,
        Self::SecretAccessKey,
        Self::SessionToken,
        Self::RegionName,
        Self::ApiVersion,
        Self::EndpointUrl,
        Self::Verify,
        Self::Config,
        Self::Bucket,
        Self::Key,
        Self::Name,
    ];

    /// Returns the parameter name of the field.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ServiceName => "service_name",
            Self::AccessKeyId => "aws_access_key_id",
            Self::SecretAccessKey => "aws_secret_access_key",
            Self::SessionToken => "aws_session_token",
            Self::RegionName => "region_name",
            Self::ApiVersion => "api_version",
            Self::EndpointUrl => "endpoint_url",
            Self::Verify => "verify",
            Self::Config => "config",
            Self::Bucket => "Bucket",
            Self::Key => "Key",
            Self::Name => "Name",
        }
    }

    /// Looks up a field by its parameter name. Names are case-sensitive.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|field| field.name() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
