use std::fmt;

#[cfg(all(feature = "pem", feature = "x509-parser"))]
use crate::error::ExternalError;
use crate::render::name::Name;
use crate::{Error, PublicKey};

/// The DER encoding of an issuer's X.501 `Name`.
///
/// Kept as encoded so that names read from a certificate, including multi
/// valued RDNs and unusual string types, are written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IssuerName {
	der: Vec<u8>,
}

impl IssuerName {
	/// Wraps an encoded `Name`, checking that it is a sequence of RDNs.
	pub fn from_der(der: impl Into<Vec<u8>>) -> Result<Self, Error> {
		let der = der.into();
		Name::from_der(&der).map_err(|_| Error::InvalidName)?;
		Ok(IssuerName { der })
	}
}

impl AsRef<[u8]> for IssuerName {
	fn as_ref(&self) -> &[u8] {
		&self.der
	}
}

impl fmt::Display for IssuerName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match Name::from_der(&self.der) {
			Ok(name) => write!(f, "{}", name),
			Err(_) => write!(f, "{}", crate::hex_string(&self.der)),
		}
	}
}

/// The content octets of a certificate serial number `INTEGER`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SerialNumber {
	octets: Vec<u8>,
}

impl SerialNumber {
	/// Takes the big endian octets of a serial number as found in a certificate.
	pub fn from_slice(octets: &[u8]) -> Self {
		SerialNumber {
			octets: octets.to_vec(),
		}
	}
}

impl From<Vec<u8>> for SerialNumber {
	fn from(octets: Vec<u8>) -> Self {
		SerialNumber { octets }
	}
}

/// Uses the shortest encoding that still reads as a positive number.
impl From<u64> for SerialNumber {
	fn from(n: u64) -> Self {
		let bytes = n.to_be_bytes();
		let first = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len() - 1);
		let mut octets = Vec::with_capacity(bytes.len() - first + 1);
		if bytes[first] & 0x80 != 0 {
			octets.push(0);
		}
		octets.extend_from_slice(&bytes[first..]);
		SerialNumber { octets }
	}
}

impl AsRef<[u8]> for SerialNumber {
	fn as_ref(&self) -> &[u8] {
		&self.octets
	}
}

/// Formats like a rendered `authorityCertSerialNumber`.
impl fmt::Display for SerialNumber {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", crate::hex_string(&self.octets))
	}
}

/// Holds what the issuer of a certificate contributes to its authority key
/// identifier: the issuer's subject name, the serial number of the issuer's
/// certificate and the issuer's public key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issuer {
	/// The subject name of the issuer's certificate.
	pub name: IssuerName,

	/// The serial number of the issuer's certificate.
	pub serial_number: SerialNumber,

	/// The public key of the issuer, used for the key identifier.
	pub public_key: PublicKey,
}

impl Issuer {
	/// Reads the issuer details from the issuer's DER encoded certificate.
	#[cfg(feature = "x509-parser")]
	pub fn from_certificate_der(der: &[u8]) -> Result<Self, Error> {
		let (_remainder, x509) =
			x509_parser::parse_x509_certificate(der).or(Err(Error::CouldNotParseCertificate))?;
		Ok(Issuer {
			name: IssuerName::from_der(x509.subject().as_raw())?,
			serial_number: SerialNumber::from_slice(x509.raw_serial()),
			public_key: PublicKey::from_raw(x509.public_key().subject_public_key.data.to_vec()),
		})
	}

	/// Reads the issuer details from the issuer's certificate in the ASCII PEM format.
	#[cfg(all(feature = "pem", feature = "x509-parser"))]
	pub fn from_certificate_pem(pem_str: &str) -> Result<Self, Error> {
		let certificate = pem::parse(pem_str)._err()?;
		Self::from_certificate_der(certificate.contents())
	}
}

#[cfg(test)]
pub(crate) fn common_name(cn: &str) -> IssuerName {
	use yasna::models::ObjectIdentifier;

	let der = yasna::construct_der(|w| {
		w.write_sequence(|w| {
			w.next().write_set(|w| {
				w.next().write_sequence(|w| {
					w.next()
						.write_oid(&ObjectIdentifier::from_slice(crate::oid::OID_COMMON_NAME));
					w.next().write_utf8_string(cn);
				})
			})
		})
	});
	IssuerName { der }
}

#[cfg(test)]
mod issuer_tests {
	use super::*;

	#[test]
	fn rejects_garbage_names() {
		assert_eq!(IssuerName::from_der(vec![0x04, 0x00]), Err(Error::InvalidName));
	}

	#[test]
	fn displays_as_distinguished_name() {
		let name = common_name("Crab CA");
		assert_eq!(name.to_string(), "CN=Crab CA");
		assert_eq!(IssuerName::from_der(name.as_ref().to_vec()), Ok(name));
	}

	#[test]
	fn serial_from_integer_is_minimal() {
		assert_eq!(SerialNumber::from(7u64).as_ref(), &[0x07]);
		assert_eq!(SerialNumber::from(0u64).as_ref(), &[0x00]);
		assert_eq!(SerialNumber::from(0x80u64).as_ref(), &[0x00, 0x80]);
		assert_eq!(SerialNumber::from(0x0100u64), SerialNumber::from(vec![0x01, 0x00]));
	}

	#[test]
	fn serial_displays_as_hex() {
		assert_eq!(SerialNumber::from(vec![0x01, 0xAB]).to_string(), "0x01AB");
	}
}
