//! Signed, time-bounded bearer tokens (compact JWS, HS256).

pub mod claims;
pub mod codec;
pub mod decoder;
pub mod encoder;
pub mod key;

pub use claims::{Claims, ExtraClaims};
pub use codec::TokenCodec;
pub use decoder::JwtDecoder;
pub use encoder::JwtEncoder;
pub use key::SigningKey;
