//! Error handling types

use thiserror::Error;

/// Boxed error used for causes coming from user-supplied factories
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for implementation discovery
#[derive(Error, Debug)]
pub enum Error {
    /// Required interface descriptor is missing or blank
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// No lookup strategy produced an implementation name
    #[error("Implementation for interface '{interface}' not found")]
    NotFound {
        /// Fully-qualified name of the interface being resolved
        interface: String,
    },

    /// An implementation name was found but the type is not loadable in the scope
    #[error("Implementation '{implementation}' not found")]
    ImplementationNotFound {
        /// Name of the implementation that could not be located
        implementation: String,
        /// Underlying lookup failure
        #[source]
        source: TypeLookupError,
    },

    /// The implementation type was located but construction failed
    #[error("Implementation '{implementation}' not instantiated: {source}")]
    InstantiationFailed {
        /// Name of the implementation whose factory failed
        implementation: String,
        /// Underlying construction failure
        #[source]
        source: BoxError,
    },

    /// The resolved instance does not provide the contract requested by the caller
    #[error("Implementation '{implementation}' does not provide contract '{contract}'")]
    ContractMismatch {
        /// Name of the implementation that was constructed
        implementation: String,
        /// Contract the caller tried to coerce the instance into
        contract: &'static str,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },
}

/// Failure to locate a named type within a loading scope
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("type '{name}' is not registered in loading scope '{scope}'")]
pub struct TypeLookupError {
    /// Name that was looked up
    pub name: String,
    /// Identifier of the scope that was searched
    pub scope: String,
}

impl TypeLookupError {
    /// Create a lookup error for a name missing from a scope
    pub fn new<N: Into<String>, S: Into<String>>(name: N, scope: S) -> Self {
        Self {
            name: name.into(),
            scope: scope.into(),
        }
    }
}

// Resolution error creation methods
impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a not found error for an interface
    pub fn not_found<S: Into<String>>(interface: S) -> Self {
        Self::NotFound {
            interface: interface.into(),
        }
    }

    /// Create an implementation not found error
    pub fn implementation_not_found<S: Into<String>>(
        implementation: S,
        source: TypeLookupError,
    ) -> Self {
        Self::ImplementationNotFound {
            implementation: implementation.into(),
            source,
        }
    }

    /// Create an instantiation failure error
    pub fn instantiation_failed<S: Into<String>>(implementation: S, source: BoxError) -> Self {
        Self::InstantiationFailed {
            implementation: implementation.into(),
            source,
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
