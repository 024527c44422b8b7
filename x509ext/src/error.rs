use std::fmt;

#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
/// The error type of the x509ext crate
pub enum Error {
	/// An extension value is not valid DER for the structure its OID announces
	Decode(String),
	/// A string could not be interpreted as a dotted object identifier
	InvalidOid(String),
	/// Reading a persisted extension set failed
	Load(LoadError),
	/// An I/O error other than running out of input occurred
	Io(String),
	/// The DER encoded `Name` is not a sequence of relative distinguished names
	InvalidName,
	/// The given certificate couldn't be parsed
	#[cfg(feature = "x509-parser")]
	CouldNotParseCertificate,
	/// The given certificate signing request is not parseable
	#[cfg(feature = "x509-parser")]
	CouldNotParseCertificationRequest,
	/// The given SubjectPublicKeyInfo is not parseable
	#[cfg(feature = "x509-parser")]
	CouldNotParsePublicKey,
	/// Error returned by the pem crate
	#[cfg(feature = "pem")]
	PemError(String),
}

/// The reason a persisted extension set could not be loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum LoadError {
	/// The stream does not start with the extension set magic number
	BadMagicNumber(i64),
	/// The stream was written by an unsupported version of the format
	UnsupportedVersion(i32),
	/// The stream ended while a field was still expected
	Truncated,
	/// A count or length field holds a negative number
	NegativeLength(i32),
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		use self::Error::*;
		match self {
			Decode(e) => write!(f, "Could not decode extension value: {}", e)?,
			InvalidOid(oid) => write!(f, "Invalid object identifier: {:?}", oid)?,
			Load(e) => write!(f, "Could not load extension set: {}", e)?,
			Io(e) => write!(f, "I/O error: {}", e)?,
			InvalidName => write!(f, "Invalid distinguished name encoding")?,
			#[cfg(feature = "x509-parser")]
			CouldNotParseCertificate => write!(f, "Could not parse certificate")?,
			#[cfg(feature = "x509-parser")]
			CouldNotParseCertificationRequest => write!(
				f,
				"Could not parse certificate signing \
				request"
			)?,
			#[cfg(feature = "x509-parser")]
			CouldNotParsePublicKey => write!(f, "Could not parse subject public key info")?,
			#[cfg(feature = "pem")]
			PemError(e) => write!(f, "PEM error: {}", e)?,
		};
		Ok(())
	}
}

impl fmt::Display for LoadError {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			LoadError::BadMagicNumber(magic) => {
				write!(f, "bad magic number 0x{:X}", magic)
			},
			LoadError::UnsupportedVersion(version) => {
				write!(f, "unsupported format version {}", version)
			},
			LoadError::Truncated => write!(f, "not enough bytes"),
			LoadError::NegativeLength(len) => write!(f, "negative length field {}", len),
		}
	}
}

impl std::error::Error for Error {}

impl std::error::Error for LoadError {}

impl From<yasna::ASN1Error> for Error {
	fn from(e: yasna::ASN1Error) -> Self {
		Error::Decode(e.to_string())
	}
}

impl From<LoadError> for Error {
	fn from(e: LoadError) -> Self {
		Error::Load(e)
	}
}

/// A pem error
#[cfg(all(feature = "pem", feature = "x509-parser"))]
pub(crate) trait ExternalError<T>: Sized {
	fn _err(self) -> Result<T, Error>;
}

#[cfg(all(feature = "pem", feature = "x509-parser"))]
impl<T> ExternalError<T> for Result<T, pem::PemError> {
	fn _err(self) -> Result<T, Error> {
		self.map_err(|e| Error::PemError(e.to_string()))
	}
}
