use bincode::{
    Decode, Encode,
    config::{legacy, standard as std_config},
};

use crate::VersionError;

/// Serialize a value into a byte vector. (bincode wrapper)
///
/// # Parameters
/// - `data`: The value to serialize (must implement the `Encode` trait)
/// - `standard`: Whether to use the standard encoding (varint)
///
/// # Returns
/// - `Ok(Vec<u8>)`: Serialized bytes
/// - `Err(VersionError)`: Serialization error
pub(crate) fn serialize<T: Encode>(data: T, standard: bool) -> Result<Vec<u8>, VersionError> {
    if standard {
        return Ok(bincode::encode_to_vec(data, std_config())?);
    }
    Ok(bincode::encode_to_vec(data, legacy())?)
}

/// Deserialize a value from the front of a slice.
///
/// # Returns
/// - `Ok((O, usize))`: Deserialized value and the number of bytes it consumed
/// - `Err(VersionError)`: Deserialization error
pub(crate) fn deserialize<O: Decode<()>>(
    data: &[u8],
    standard: bool,
) -> Result<(O, usize), VersionError> {
    if standard {
        return Ok(bincode::decode_from_slice(data, std_config())?);
    }
    Ok(bincode::decode_from_slice(data, legacy())?)
}

/// Like [`deserialize`] with the standard config, but fails with
/// `DecodeError::LimitExceeded` once more than `LIMIT` bytes would be read
/// or allocated.
pub(crate) fn deserialize_limited<O: Decode<()>, const LIMIT: usize>(
    data: &[u8],
) -> Result<(O, usize), VersionError> {
    Ok(bincode::decode_from_slice(
        data,
        std_config().with_limit::<LIMIT>(),
    )?)
}
