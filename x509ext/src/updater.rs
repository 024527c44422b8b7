use crate::ext::{AuthorityKeyIdentifier, Extension, SubjectKeyIdentifier};
use crate::render::pkix::{read_authority_key_identifier, AuthorityKeyId};
use crate::{
	Error, ExtensionSet, ExtensionType, IssuerName, KeyIdentifierGenerator, PublicKeyData,
	SerialNumber,
};

/// Which of the optional fields an authority key identifier carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AkiShape {
	KeyIdentifier,
	IssuerAndSerial,
	All,
}

impl AkiShape {
	fn of(aki: &AuthorityKeyId) -> Self {
		match (&aki.key_identifier, &aki.serial) {
			(Some(_), None) => AkiShape::KeyIdentifier,
			(None, _) => AkiShape::IssuerAndSerial,
			(Some(_), Some(_)) => AkiShape::All,
		}
	}
}

/// Regenerates the key identifier extensions of `set` for a new certificate.
///
/// A subject key identifier is replaced by the 160 bit SHA-1 key identifier
/// of `subject_public_key`. An authority key identifier is rebuilt from
/// `issuer_public_key`, `issuer_name` and `issuer_serial`, carrying the same
/// optional fields as the value it replaces:
///
/// * a key identifier without serial number stays a key identifier only,
/// * issuer and serial number without key identifier stay that way,
/// * anything else gets all three fields.
///
/// Criticality is kept and all other extensions are left alone. All new
/// values are computed before the set is touched, so on error the set is
/// unchanged.
pub fn update<S, I>(
	set: &mut ExtensionSet,
	subject_public_key: &S,
	issuer_public_key: &I,
	issuer_name: &IssuerName,
	issuer_serial: &SerialNumber,
) -> Result<(), Error>
where
	S: PublicKeyData + ?Sized,
	I: PublicKeyData + ?Sized,
{
	let mut replacements: Vec<Box<dyn Extension>> = Vec::new();
	for ext in set.iter() {
		match ext.extension_type() {
			Some(ExtensionType::SubjectKeyIdentifier) => {
				let ski = SubjectKeyIdentifier {
					key_identifier: KeyIdentifierGenerator::new(subject_public_key)
						.generate_160_bit_hash_id(),
				};
				tracing::debug!(oid = ext.oid(), "regenerating subject key identifier");
				replacements.push(Box::new(ski));
			},
			Some(ExtensionType::AuthorityKeyIdentifier) => {
				let octets = yasna::parse_der(ext.value(), |r| r.read_bytes())?;
				let old = yasna::parse_der(&octets, read_authority_key_identifier)?;
				let shape = AkiShape::of(&old);
				let key_identifier = || {
					KeyIdentifierGenerator::new(issuer_public_key).generate_160_bit_hash_id()
				};
				let issuer = || (issuer_name.clone(), issuer_serial.clone());
				let aki = match shape {
					AkiShape::KeyIdentifier => AuthorityKeyIdentifier {
						key_identifier: Some(key_identifier()),
						issuer: None,
					},
					AkiShape::IssuerAndSerial => AuthorityKeyIdentifier {
						key_identifier: None,
						issuer: Some(issuer()),
					},
					AkiShape::All => AuthorityKeyIdentifier {
						key_identifier: Some(key_identifier()),
						issuer: Some(issuer()),
					},
				};
				tracing::debug!(
					oid = ext.oid(),
					?shape,
					"regenerating authority key identifier"
				);
				replacements.push(Box::new(aki));
			},
			_ => {},
		}
	}
	for ext in &replacements {
		set.replace_extension(ext.as_ref());
	}
	Ok(())
}
