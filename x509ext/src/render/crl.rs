//! CRL and CRL entry extensions, and the distribution point structures they
//! share with certificates.

use yasna::models::ObjectIdentifier;
use yasna::{ASN1Result, BERReader, BERReaderSeq, Tag, TagClass};

use crate::hex::hex_string;
use crate::names;
use crate::oid;
use crate::render::der::{
	bit_is_set, format_time, invalid, read_generalized_time, read_integer_bytes,
};
use crate::render::general_name::{read_general_names, GeneralName};
use crate::render::name::{attribute_value, Name};
use crate::render::Lines;

/// Identifies the reason a certificate was revoked.
/// See [RFC 5280 §5.3.1][1]
///
/// [1]: <https://www.rfc-editor.org/rfc/rfc5280#section-5.3.1>
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[allow(missing_docs)] // Not going to bother documenting all of these.
pub enum RevocationReason {
	Unspecified = 0,
	KeyCompromise = 1,
	CaCompromise = 2,
	AffiliationChanged = 3,
	Superseded = 4,
	CessationOfOperation = 5,
	CertificateHold = 6,
	// 7 is not defined.
	RemoveFromCrl = 8,
	PrivilegeWithdrawn = 9,
	AaCompromise = 10,
}

impl RevocationReason {
	/// The reason for an encoded `CRLReason`, if it is one RFC 5280 defines.
	pub fn from_code(code: i64) -> Option<Self> {
		use RevocationReason::*;
		Some(match code {
			0 => Unspecified,
			1 => KeyCompromise,
			2 => CaCompromise,
			3 => AffiliationChanged,
			4 => Superseded,
			5 => CessationOfOperation,
			6 => CertificateHold,
			8 => RemoveFromCrl,
			9 => PrivilegeWithdrawn,
			10 => AaCompromise,
			_ => return None,
		})
	}

	/// The ASN.1 identifier of the reason.
	pub fn name(&self) -> &'static str {
		use RevocationReason::*;
		match self {
			Unspecified => "unspecified",
			KeyCompromise => "keyCompromise",
			CaCompromise => "cACompromise",
			AffiliationChanged => "affiliationChanged",
			Superseded => "superseded",
			CessationOfOperation => "cessationOfOperation",
			CertificateHold => "certificateHold",
			RemoveFromCrl => "removeFromCRL",
			PrivilegeWithdrawn => "privilegeWithdrawn",
			AaCompromise => "aACompromise",
		}
	}
}

/// Named bits of `ReasonFlags`.
const REASON_FLAGS: [&str; 9] = [
	"unused",
	"keyCompromise",
	"cACompromise",
	"affiliationChanged",
	"superseded",
	"cessationOfOperation",
	"certificateHold",
	"privilegeWithdrawn",
	"aACompromise",
];

/// CRL number and delta CRL indicator: a non-negative INTEGER.
pub(super) fn crl_number(out: &mut Lines<'_>, value: &[u8]) -> ASN1Result<()> {
	let number = yasna::parse_der(value, read_integer_bytes)?;
	out.line(0, hex_string(&number));
	Ok(())
}

pub(super) fn reason_code(out: &mut Lines<'_>, value: &[u8]) -> ASN1Result<()> {
	let code = yasna::parse_der(value, |r| r.read_enum())?;
	match RevocationReason::from_code(code) {
		Some(reason) => out.line(0, reason.name()),
		None => out.line(0, format!("Unrecognised reason code ({})", code)),
	}
	Ok(())
}

pub(super) fn hold_instruction_code(out: &mut Lines<'_>, value: &[u8]) -> ASN1Result<()> {
	let code = yasna::parse_der(value, |r| r.read_oid())?;
	match names::hold_instruction(code.components()) {
		Some(name) => out.line(0, name),
		None => out.line(0, oid::to_dotted(&code)),
	}
	Ok(())
}

pub(super) fn invalidity_date(out: &mut Lines<'_>, value: &[u8]) -> ASN1Result<()> {
	let date = yasna::parse_der(value, read_generalized_time)?;
	out.line(0, format_time(&date));
	Ok(())
}

enum DistributionPointName {
	FullName(Vec<GeneralName>),
	RelativeToIssuer(Name),
}

fn read_distribution_point_name(reader: BERReader<'_, '_>) -> ASN1Result<DistributionPointName> {
	let tag = reader.lookahead_tag()?;
	match (tag.tag_class, tag.tag_number) {
		(TagClass::ContextSpecific, 0) => Ok(DistributionPointName::FullName(
			reader.read_tagged_implicit(Tag::context(0), read_general_names)?,
		)),
		(TagClass::ContextSpecific, 1) => Ok(DistributionPointName::RelativeToIssuer(
			reader.read_tagged_implicit(Tag::context(1), Name::read_rdn)?,
		)),
		_ => Err(invalid()),
	}
}

fn distribution_point_name(out: &mut Lines<'_>, depth: usize, name: &DistributionPointName) {
	out.line(depth, "Distribution Point Name:");
	match name {
		DistributionPointName::FullName(names) => {
			out.line(depth + 1, "Full Name:");
			for name in names {
				out.line(depth + 2, name.display(out.opts()));
			}
		},
		DistributionPointName::RelativeToIssuer(rdn) => {
			out.line(depth + 1, "Name Relative to CRL Issuer:");
			for (attr_type, value) in rdn.attributes() {
				out.line(
					depth + 2,
					format!("{}={}", attribute_type_name(attr_type), attribute_value(attr_type, value)),
				);
			}
		},
	}
}

fn attribute_type_name(attr_type: &ObjectIdentifier) -> String {
	names::attribute_type(attr_type.components())
		.map(|(short, _, _)| short.to_string())
		.unwrap_or_else(|| oid::to_dotted(attr_type))
}

fn reason_flags(out: &mut Lines<'_>, depth: usize, flags: &(Vec<u8>, usize)) {
	let (bytes, len) = flags;
	for (bit, flag) in REASON_FLAGS.iter().enumerate().take(*len) {
		if bit_is_set(bytes, bit) {
			out.line(depth, flag);
		}
	}
}

pub(super) fn issuing_distribution_point(out: &mut Lines<'_>, value: &[u8]) -> ASN1Result<()> {
	yasna::parse_der(value, |r| {
		r.read_sequence(|seq| {
			let name = seq.read_optional(|r| {
				r.read_tagged(Tag::context(0), read_distribution_point_name)
			})?;
			let user_certs = read_flag(seq, 1)?;
			let ca_certs = read_flag(seq, 2)?;
			let some_reasons = seq.read_optional(|r| {
				r.read_tagged_implicit(Tag::context(3), |r| r.read_bitvec_bytes())
			})?;
			let indirect = read_flag(seq, 4)?;
			let attribute_certs = read_flag(seq, 5)?;

			if let Some(name) = &name {
				distribution_point_name(out, 0, name);
			}
			out.line(0, format!("Only Contains User Certificates: {}", user_certs));
			out.line(0, format!("Only Contains CA Certificates: {}", ca_certs));
			if let Some(reasons) = &some_reasons {
				out.line(0, "Only Some Reasons:");
				reason_flags(out, 1, reasons);
			}
			out.line(0, format!("Indirect CRL: {}", indirect));
			out.line(0, format!("Only Contains Attribute Certificates: {}", attribute_certs));
			Ok(())
		})
	})
}

/// `[n] IMPLICIT BOOLEAN DEFAULT FALSE`
fn read_flag(seq: &mut BERReaderSeq<'_, '_>, n: u64) -> ASN1Result<bool> {
	Ok(seq
		.read_optional(|r| r.read_tagged_implicit(Tag::context(n), |r| r.read_bool()))?
		.unwrap_or(false))
}

/// CRL distribution points and freshest CRL: `SEQUENCE OF DistributionPoint`.
pub(super) fn distribution_points(out: &mut Lines<'_>, value: &[u8], title: &str) -> ASN1Result<()> {
	yasna::parse_der(value, |r| {
		let mut n = 0;
		r.read_sequence_of(|r| {
			let point = DistributionPoint::read(r)?;
			n += 1;
			out.line(0, format!("{} [{}]:", title, n));
			point.render(out, 1);
			Ok(())
		})
	})
}

struct DistributionPoint {
	name: Option<DistributionPointName>,
	reasons: Option<(Vec<u8>, usize)>,
	issuer: Option<Vec<GeneralName>>,
}

impl DistributionPoint {
	fn read(reader: BERReader<'_, '_>) -> ASN1Result<Self> {
		reader.read_sequence(|seq| {
			let name = seq.read_optional(|r| {
				r.read_tagged(Tag::context(0), read_distribution_point_name)
			})?;
			let reasons = seq.read_optional(|r| {
				r.read_tagged_implicit(Tag::context(1), |r| r.read_bitvec_bytes())
			})?;
			let issuer = seq
				.read_optional(|r| r.read_tagged_implicit(Tag::context(2), read_general_names))?;
			Ok(DistributionPoint {
				name,
				reasons,
				issuer,
			})
		})
	}

	fn render(&self, out: &mut Lines<'_>, depth: usize) {
		if let Some(name) = &self.name {
			distribution_point_name(out, depth, name);
		}
		if let Some(reasons) = &self.reasons {
			out.line(depth, "Reasons:");
			reason_flags(out, depth + 1, reasons);
		}
		if let Some(issuer) = &self.issuer {
			out.line(depth, "CRL Issuer:");
			for name in issuer {
				out.line(depth + 1, name.display(out.opts()));
			}
		}
	}
}
