use bytes::Bytes;
use std::convert;
use std::fmt;

/// The cleartext password a client offered for a logon attempt.
///
/// The wrapper keeps credential material out of the session trail: both the
/// `Display` and `Debug` forms redact the contents, so a password can ride
/// through instrumented provider calls without ending up in log output. Code
/// that actually submits the password reads it through `AsRef<[u8]>`.
#[derive(PartialEq, Eq, Clone)]
pub struct Password {
    bytes: Bytes,
}

impl Password {
    /// Wraps the raw bytes of a client-supplied password.
    pub fn new(bytes: Bytes) -> Self {
        Password { bytes }
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "*******")
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password {{ bytes: ******* }}")
    }
}

impl convert::From<&str> for Password {
    fn from(s: &str) -> Self {
        Self::new(String::from(s).into())
    }
}

impl convert::From<String> for Password {
    fn from(s: String) -> Self {
        Self::new(s.into())
    }
}

impl convert::AsRef<[u8]> for Password {
    fn as_ref(&self) -> &[u8] {
        self.bytes.as_ref()
    }
}
