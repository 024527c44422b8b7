use std::fmt::Debug;

use yasna::models::ObjectIdentifier;
use yasna::{DERWriter, DERWriterSeq, Tag};

use crate::{oid, IssuerName, SerialNumber};

/// The criticality of an extension.
///
/// This controls how a certificate-using system should handle an unrecognized or un-parsable
/// extension.
///
/// See [RFC 5280 Section 4.2] for more information.
///
/// [RFC 5280 Section 4.2]: <https://www.rfc-editor.org/rfc/rfc5280#section-4.2>
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Criticality {
	/// The extension MUST be recognized and parsed correctly.
	Critical,

	/// The extension MAY be ignored if it is not recognized or parsed correctly.
	NonCritical,
}

impl From<bool> for Criticality {
	fn from(critical: bool) -> Self {
		if critical {
			Criticality::Critical
		} else {
			Criticality::NonCritical
		}
	}
}

/// An extension whose value this crate encodes itself.
///
/// Criticality is not part of the trait: regenerated values keep whatever
/// criticality the extension they replace had.
pub(crate) trait Extension: Debug {
	/// Return the OID of the extension.
	fn oid(&self) -> ObjectIdentifier;

	/// Write the extension's value to the DER writer.
	fn write_value(&self, writer: DERWriter);

	/// The extnValue OCTET STRING, as stored in an extension set.
	fn to_octets(&self) -> Vec<u8> {
		let value = yasna::construct_der(|writer| self.write_value(writer));
		yasna::construct_der(|writer| writer.write_bytes(&value))
	}
}

/// Writes one element of an `Extensions` SEQUENCE.
///
/// `octets` is the already encoded extnValue OCTET STRING.
pub(crate) fn write_extension(
	writer: &mut DERWriterSeq,
	oid: &ObjectIdentifier,
	criticality: Criticality,
	octets: &[u8],
) {
	//  Extension ::= SEQUENCE {
	//    extnID    OBJECT IDENTIFIER,
	//    critical  BOOLEAN DEFAULT FALSE,
	//    extnValue OCTET STRING
	//  }
	writer.next().write_sequence(|writer| {
		writer.next().write_oid(oid);
		if criticality == Criticality::Critical {
			writer.next().write_bool(true);
		}
		writer.next().write_der(octets);
	});
}

/// An X.509v3 subject key identifier extension according to
/// [RFC 5280 4.2.1.2](https://www.rfc-editor.org/rfc/rfc5280#section-4.2.1.2).
#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) struct SubjectKeyIdentifier {
	pub(crate) key_identifier: Vec<u8>,
}

impl Extension for SubjectKeyIdentifier {
	fn oid(&self) -> ObjectIdentifier {
		ObjectIdentifier::from_slice(oid::OID_SUBJECT_KEY_IDENTIFIER)
	}

	fn write_value(&self, writer: DERWriter) {
		// SubjectKeyIdentifier ::= KeyIdentifier
		// KeyIdentifier ::= OCTET STRING
		writer.write_bytes(&self.key_identifier);
	}
}

/// An X.509v3 authority key identifier extension according to
/// [RFC 5280 4.2.1.1](https://www.rfc-editor.org/rfc/rfc5280#section-4.2.1.1).
///
/// The issuer name and serial number are either both written or both left out.
#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) struct AuthorityKeyIdentifier {
	pub(crate) key_identifier: Option<Vec<u8>>,
	pub(crate) issuer: Option<(IssuerName, SerialNumber)>,
}

impl Extension for AuthorityKeyIdentifier {
	fn oid(&self) -> ObjectIdentifier {
		ObjectIdentifier::from_slice(oid::OID_AUTHORITY_KEY_IDENTIFIER)
	}

	fn write_value(&self, writer: DERWriter) {
		/*
			AuthorityKeyIdentifier ::= SEQUENCE {
				   keyIdentifier             [0] KeyIdentifier           OPTIONAL,
				   authorityCertIssuer       [1] GeneralNames            OPTIONAL,
				   authorityCertSerialNumber [2] CertificateSerialNumber OPTIONAL  }
			KeyIdentifier ::= OCTET STRING
		*/
		writer.write_sequence(|writer| {
			if let Some(key_identifier) = &self.key_identifier {
				writer
					.next()
					.write_tagged_implicit(Tag::context(0), |writer| {
						writer.write_bytes(key_identifier)
					});
			}
			if let Some((name, serial)) = &self.issuer {
				writer
					.next()
					.write_tagged_implicit(Tag::context(1), |writer| {
						writer.write_sequence(|writer| {
							// directoryName [4] Name, explicit since Name is a CHOICE
							writer.next().write_tagged(Tag::context(4), |writer| {
								writer.write_der(name.as_ref())
							});
						})
					});
				writer
					.next()
					.write_tagged_implicit(Tag::context(2), |writer| {
						writer.write_bigint_bytes(serial.as_ref(), true)
					});
			}
		});
	}
}
