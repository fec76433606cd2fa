use uuid::Uuid;

/// Creates a deterministic GUID from a name.
///
/// The MD5 digest is read with the little-endian field layout .NET's `Guid(byte[])`
/// uses, so a name keeps the GUID the Unity-side generator gave it.
pub fn deterministic_guid(name: &str) -> String {
    let digest = md5::compute(name.as_bytes());
    let guid = Uuid::from_bytes_le(digest.0);
    guid.hyphenated()
        .encode_upper(&mut Uuid::encode_buffer())
        .to_string()
}
