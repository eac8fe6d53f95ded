//! objview-core
//!
//! Turns a loosely-typed ledger object record into a display-ready view model:
//! - owner identity decoding across historical encodings (`owner`)
//! - type string normalization (`normalize`)
//! - heuristic field classification into references and properties (`classify`)
//! - view model assembly (`assemble`)
//!
//! The engine is pure: no I/O, no global state, no failure modes. Problems
//! degrade to absent values plus diagnostics.

pub mod assemble;
pub mod classify;
pub mod config;
pub mod diagnostics;
pub mod errors;
pub mod model;
pub mod normalize;
pub mod owner;
pub mod parse;
pub mod version;

pub use crate::errors::{ObjviewError, ObjviewResult};

/// Record keys with a dedicated meaning.
/// These mirror the query layer's field names and must remain stable.
pub mod keys {
    pub const TYPE: &str = "objType";
    pub const OWNER: &str = "owner";
    pub const READ_ONLY: &str = "readonly";
    pub const CONTRACT_ID: &str = "contract_id";
    pub const ETH_ADDRESS: &str = "ethAddress";
    pub const ETH_TOKEN_ID: &str = "ethTokenId";
}

/// Default engine settings.
pub mod defaults {
    /// Framework module path prefix stripped from type strings.
    pub const STD_LIB_PREFIX: &str = "0x2::";
    /// Byte length of an address owner payload.
    pub const ADDRESS_LEN: usize = 20;
    /// Maximum JSON payload accepted by the parse helpers (2 MiB).
    pub const MAX_RECORD_BYTES: usize = 2 * 1024 * 1024;
}

/// Convenience re-exports.
pub mod prelude {
    pub use crate::assemble::{assemble, Assembler};
    pub use crate::classify::{classify, classify_field};
    pub use crate::config::{
        validate_config, EngineConfig, OwnerBytesEncoding, OwnerConfig, ReferencePolicy,
    };
    pub use crate::diagnostics::{Diagnostic, DiagnosticLevel, Diagnostics};
    pub use crate::model::{
        CanonicalOwner, ClassifiedField, DescriptionExtras, ObjectReference, RawRecord,
        ScalarProperty, ScalarValue, ViewModel,
    };
    pub use crate::normalize::{normalize_type, normalize_type_default};
    pub use crate::owner::{decode_owner, OwnerEncoding};
    pub use crate::parse::{ObjectResponse, PayloadKind};
    pub use crate::version::ObjectVersion;
    pub use crate::{ObjviewError, ObjviewResult};
}
