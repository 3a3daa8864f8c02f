pub mod codec;
pub mod headers;

pub use codec::{decode, encode, CodecError};
pub use headers::{build_headers, AuthHeaders, JSON_CONTENT_TYPE};
