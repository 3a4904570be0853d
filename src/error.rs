use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("null key can't be associated with a value")]
    NullKey,
    #[error("key not found")]
    KeyNotFound,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            Error::NullKey.to_string(),
            "null key can't be associated with a value"
        );
        assert_eq!(Error::KeyNotFound.to_string(), "key not found");
        assert_ne!(Error::NullKey, Error::KeyNotFound);
    }
}
