use ring::digest;

#[cfg(feature = "x509-parser")]
use crate::Error;

/// Access to the bits of a subject public key.
///
/// Implemented for [`PublicKey`]; key types of other crates can implement it
/// to feed [`KeyIdentifierGenerator`] directly.
pub trait PublicKeyData {
	/// The content of the `subjectPublicKey` BIT STRING of the key's
	/// SubjectPublicKeyInfo, without the unused-bits octet.
	fn raw_bytes(&self) -> &[u8];
}

impl<K: PublicKeyData + ?Sized> PublicKeyData for &K {
	fn raw_bytes(&self) -> &[u8] {
		(**self).raw_bytes()
	}
}

/// A public key, held as its raw `subjectPublicKey` bits
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PublicKey {
	raw: Vec<u8>,
}

impl PublicKey {
	/// Wraps the raw key bits, as returned by e.g. rcgen's `KeyPair::public_key_raw`.
	pub fn from_raw(raw: impl Into<Vec<u8>>) -> Self {
		PublicKey { raw: raw.into() }
	}

	/// Extracts the key bits from a DER encoded SubjectPublicKeyInfo
	#[cfg(feature = "x509-parser")]
	pub fn from_spki_der(spki: &[u8]) -> Result<Self, Error> {
		use x509_parser::prelude::FromDer;
		let (_remainder, spki) = x509_parser::x509::SubjectPublicKeyInfo::from_der(spki)
			.map_err(|_| Error::CouldNotParsePublicKey)?;
		Ok(PublicKey {
			raw: spki.subject_public_key.data.to_vec(),
		})
	}
}

impl PublicKeyData for PublicKey {
	fn raw_bytes(&self) -> &[u8] {
		&self.raw
	}
}

/// Derives key identifiers from a public key using the two methods of
/// [RFC 5280 4.2.1.2](https://www.rfc-editor.org/rfc/rfc5280#section-4.2.1.2).
///
/// ```
/// # use x509ext::{KeyIdentifierGenerator, PublicKey};
/// let key = PublicKey::from_raw(vec![0x04, 0x01, 0x02]);
/// let generator = KeyIdentifierGenerator::new(&key);
/// assert_eq!(generator.generate_160_bit_hash_id().len(), 20);
/// assert_eq!(generator.generate_64_bit_hash_id()[0] >> 4, 0b0100);
/// ```
#[derive(Debug)]
pub struct KeyIdentifierGenerator<'a> {
	raw: &'a [u8],
}

impl<'a> KeyIdentifierGenerator<'a> {
	/// Creates a generator for `key`
	pub fn new<K: PublicKeyData + ?Sized>(key: &'a K) -> Self {
		KeyIdentifierGenerator {
			raw: key.raw_bytes(),
		}
	}

	/// Method 1: the SHA-1 hash of the subject public key bits.
	pub fn generate_160_bit_hash_id(&self) -> Vec<u8> {
		self.sha1().as_ref().to_vec()
	}

	/// Method 2: a four bit type field of `0100` followed by the least
	/// significant 60 bits of the SHA-1 hash.
	pub fn generate_64_bit_hash_id(&self) -> Vec<u8> {
		let digest = self.sha1();
		let mut id = digest.as_ref()[12..].to_vec();
		id[0] = 0x40 | (id[0] & 0x0f);
		id
	}

	fn sha1(&self) -> digest::Digest {
		digest::digest(&digest::SHA1_FOR_LEGACY_USE_ONLY, self.raw)
	}
}

#[cfg(test)]
mod key_identifier_tests {
	use super::*;

	// SHA-1("abc")
	const ABC_SHA1: [u8; 20] = [
		0xa9, 0x99, 0x3e, 0x36, 0x47, 0x06, 0x81, 0x6a, 0xba, 0x3e, 0x25, 0x71, 0x78, 0x50, 0xc2,
		0x6c, 0x9c, 0xd0, 0xd8, 0x9d,
	];

	#[test]
	fn method_one_is_sha1() {
		let key = PublicKey::from_raw(b"abc".to_vec());
		assert_eq!(
			KeyIdentifierGenerator::new(&key).generate_160_bit_hash_id(),
			ABC_SHA1
		);
	}

	#[test]
	fn method_two_keeps_low_60_bits() {
		let key = PublicKey::from_raw(b"abc".to_vec());
		let id = KeyIdentifierGenerator::new(&key).generate_64_bit_hash_id();
		assert_eq!(id, vec![0x48, 0x50, 0xc2, 0x6c, 0x9c, 0xd0, 0xd8, 0x9d]);
	}

	#[cfg(feature = "x509-parser")]
	#[test]
	fn spki_parsing() {
		use yasna::models::ObjectIdentifier;

		let spki = yasna::construct_der(|w| {
			w.write_sequence(|w| {
				w.next().write_sequence(|w| {
					w.next()
						.write_oid(&ObjectIdentifier::from_slice(&[1, 3, 101, 112]));
				});
				w.next().write_bitvec_bytes(&[0x11; 32], 256);
			})
		});
		let key = PublicKey::from_spki_der(&spki).unwrap();
		assert_eq!(key.raw_bytes(), &[0x11; 32]);
		assert_eq!(
			PublicKey::from_spki_der(&spki[..10]),
			Err(Error::CouldNotParsePublicKey)
		);
	}
}
