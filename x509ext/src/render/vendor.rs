//! Vendor specific extensions: Entrust, Netscape, Microsoft, S/MIME and VeriSign.

use yasna::ASN1Result;

use crate::hex::hex_string;
use crate::oid;
use crate::render::der::{
	binary_string, bit_is_set, format_time, read_remaining, read_string, read_time,
};
use crate::render::name::attribute_value;
use crate::render::Lines;

const NETSCAPE_CERT_TYPES: [&str; 8] = [
	"sslClient",
	"sslServer",
	"smime",
	"objectSigning",
	"reserved",
	"sslCA",
	"smimeCA",
	"objectSigningCA",
];

const ENTRUST_INFO_FLAGS: [&str; 3] = ["keyUpdateAllowed", "newExtensions", "pKIXCertificate"];

/// `EntrustVersInfoSyntax ::= SEQUENCE { entrustVers GeneralString, entrustInfoFlags BIT STRING }`
pub(super) fn entrust_version_information(out: &mut Lines<'_>, value: &[u8]) -> ASN1Result<()> {
	let (version, (flags, len)) = yasna::parse_der(value, |r| {
		r.read_sequence(|seq| {
			let version = read_string(seq.next())?;
			let flags = seq.next().read_bitvec_bytes()?;
			Ok((version, flags))
		})
	})?;
	let names = ENTRUST_INFO_FLAGS
		.iter()
		.enumerate()
		.take(len)
		.filter(|(bit, _)| bit_is_set(&flags, *bit))
		.map(|(_, name)| *name)
		.collect::<Vec<_>>();
	out.line(0, format!("Version: {}", version));
	out.line(0, format!("Information Flags: {}", names.join(", ")));
	Ok(())
}

pub(super) fn netscape_certificate_type(out: &mut Lines<'_>, value: &[u8]) -> ASN1Result<()> {
	let (bits, len) = yasna::parse_der(value, |r| r.read_bitvec_bytes())?;
	for (bit, name) in NETSCAPE_CERT_TYPES.iter().enumerate().take(len) {
		if bit_is_set(&bits, bit) {
			out.line(0, name);
		}
	}
	Ok(())
}

/// Netscape URLs and comment, and most of the VeriSign extensions.
pub(super) fn ia5_string(out: &mut Lines<'_>, value: &[u8]) -> ASN1Result<()> {
	let text = yasna::parse_der(value, |r| r.read_ia5_string())?;
	out.line(0, text);
	Ok(())
}

/// A BIT STRING shown as the base 2 number it forms.
pub(super) fn bit_string_binary(out: &mut Lines<'_>, value: &[u8]) -> ASN1Result<()> {
	let (bits, _) = yasna::parse_der(value, |r| r.read_bitvec_bytes())?;
	out.line(0, binary_string(&bits));
	Ok(())
}

/// The certificate template name, a BMPString.
pub(super) fn ms_certificate_type(out: &mut Lines<'_>, value: &[u8]) -> ASN1Result<()> {
	let name = yasna::parse_der(value, read_string)?;
	out.line(0, name);
	Ok(())
}

/// The low 16 bits are the certificate index, the high 16 bits the key index.
pub(super) fn ms_ca_version(out: &mut Lines<'_>, value: &[u8]) -> ASN1Result<()> {
	let version = yasna::parse_der(value, |r| r.read_u32())?;
	out.line(0, format!("Certificate Index: {}", version & 0xffff));
	out.line(0, format!("Key Index: {}", version >> 16));
	Ok(())
}

pub(super) fn ms_crl_next_publish(out: &mut Lines<'_>, value: &[u8]) -> ASN1Result<()> {
	let time = yasna::parse_der(value, read_time)?;
	out.line(0, format_time(&time));
	Ok(())
}

pub(super) fn ms_certificate_template(out: &mut Lines<'_>, value: &[u8]) -> ASN1Result<()> {
	let (id, major, minor) = yasna::parse_der(value, |r| {
		r.read_sequence(|seq| {
			let id = seq.next().read_oid()?;
			let major = seq.next().read_u64()?;
			let minor = seq.read_optional(|r| r.read_u64())?;
			Ok((id, major, minor))
		})
	})?;
	out.line(0, format!("Template ID: {}", oid::to_dotted(&id)));
	out.line(0, format!("Major Version: {}", major));
	if let Some(minor) = minor {
		out.line(0, format!("Minor Version: {}", minor));
	}
	Ok(())
}

pub(super) fn smime_capabilities(out: &mut Lines<'_>, value: &[u8]) -> ASN1Result<()> {
	yasna::parse_der(value, |r| {
		let mut n = 0;
		r.read_sequence_of(|r| {
			r.read_sequence(|seq| {
				let capability = seq.next().read_oid()?;
				let parameters = read_remaining(seq)?;
				n += 1;
				out.line(0, format!("S/MIME Capability [{}]:", n));
				out.line(1, format!("Object ID: {}", oid::to_dotted(&capability)));
				if !parameters.is_empty() {
					out.line(1, format!("Parameter: {}", hex_string(&parameters)));
				}
				Ok(())
			})
		})
	})
}

/// `NonVerified ::= SET OF Attribute`
pub(super) fn verisign_non_verified(out: &mut Lines<'_>, value: &[u8]) -> ASN1Result<()> {
	yasna::parse_der(value, |r| {
		r.read_set_of(|r| {
			r.read_sequence(|seq| {
				let attr_type = seq.next().read_oid()?;
				let dotted = oid::to_dotted(&attr_type);
				seq.next().read_set_of(|r| {
					let der = r.read_der()?;
					out.line(0, format!("{}={}", dotted, attribute_value(&attr_type, &der)));
					Ok(())
				})
			})
		})
	})
}

#[cfg(test)]
mod vendor_tests {
	use super::*;
	use crate::render::RenderOptions;
	use yasna::models::ObjectIdentifier;

	fn run(f: fn(&mut Lines<'_>, &[u8]) -> ASN1Result<()>, value: &[u8]) -> String {
		let opts = RenderOptions::default();
		let mut out = Lines::new(&opts);
		f(&mut out, value).unwrap();
		out.finish()
	}

	#[test]
	fn ca_version_splits_indices() {
		let value = yasna::construct_der(|w| w.write_u32(0x0002_0001));
		assert_eq!(run(ms_ca_version, &value), "Certificate Index: 1\nKey Index: 2\n");
	}

	#[test]
	fn netscape_types() {
		let value = yasna::construct_der(|w| w.write_bitvec_bytes(&[0b1100_0000], 2));
		assert_eq!(run(netscape_certificate_type, &value), "sslClient\nsslServer\n");
	}

	#[test]
	fn template() {
		let value = yasna::construct_der(|w| {
			w.write_sequence(|w| {
				w.next()
					.write_oid(&ObjectIdentifier::from_slice(&[1, 3, 6, 1, 4, 1, 311, 21, 8, 1]));
				w.next().write_u8(100);
			})
		});
		assert_eq!(
			run(ms_certificate_template, &value),
			"Template ID: 1.3.6.1.4.1.311.21.8.1\nMajor Version: 100\n"
		);
	}

	#[test]
	fn smime() {
		let value = yasna::construct_der(|w| {
			w.write_sequence(|w| {
				w.next().write_sequence(|w| {
					w.next()
						.write_oid(&ObjectIdentifier::from_slice(&[1, 2, 840, 113549, 3, 2]));
					w.next().write_u8(128);
				});
			})
		});
		assert_eq!(
			run(smime_capabilities, &value),
			"S/MIME Capability [1]:\n    Object ID: 1.2.840.113549.3.2\n    Parameter: 0x0202 0080\n"
		);
	}

	#[test]
	fn token_type_binary() {
		let value = yasna::construct_der(|w| w.write_bitvec_bytes(&[0x05], 8));
		assert_eq!(run(bit_string_binary, &value), "101\n");
	}
}
