#![allow(dead_code)]

use yasna::models::ObjectIdentifier;
use yasna::Tag;

pub const KEY_USAGE: &str = "2.5.29.15";
pub const BASIC_CONSTRAINTS: &str = "2.5.29.19";
pub const SUBJECT_KEY_IDENTIFIER: &str = "2.5.29.14";
pub const AUTHORITY_KEY_IDENTIFIER: &str = "2.5.29.35";

/// Wraps an extension structure into the extnValue OCTET STRING.
pub fn octets(inner: &[u8]) -> Vec<u8> {
	yasna::construct_der(|w| w.write_bytes(inner))
}

pub fn key_usage(bits: &[usize]) -> Vec<u8> {
	let len = bits.iter().max().map_or(0, |b| b + 1);
	let mut bytes = vec![0u8; (len + 7) / 8];
	for bit in bits {
		bytes[bit / 8] |= 0x80 >> (bit % 8);
	}
	octets(&yasna::construct_der(|w| w.write_bitvec_bytes(&bytes, len)))
}

pub fn basic_constraints(ca: bool, path_len: Option<u8>) -> Vec<u8> {
	octets(&yasna::construct_der(|w| {
		w.write_sequence(|w| {
			if ca {
				w.next().write_bool(true);
			}
			if let Some(n) = path_len {
				w.next().write_u8(n);
			}
		})
	}))
}

pub fn subject_key_identifier(key_id: &[u8]) -> Vec<u8> {
	octets(&yasna::construct_der(|w| w.write_bytes(key_id)))
}

/// An authority key identifier with the given optional fields; the issuer is
/// a single directory name with one common name.
pub fn authority_key_identifier(
	key_id: Option<&[u8]>,
	issuer_cn: Option<&str>,
	serial: Option<u64>,
) -> Vec<u8> {
	octets(&yasna::construct_der(|w| {
		w.write_sequence(|w| {
			if let Some(key_id) = key_id {
				w.next()
					.write_tagged_implicit(Tag::context(0), |w| w.write_bytes(key_id));
			}
			if let Some(cn) = issuer_cn {
				w.next().write_tagged_implicit(Tag::context(1), |w| {
					w.write_sequence(|w| {
						w.next()
							.write_tagged(Tag::context(4), |w| write_cn_name(w, cn));
					})
				});
			}
			if let Some(serial) = serial {
				w.next()
					.write_tagged_implicit(Tag::context(2), |w| w.write_u64(serial));
			}
		})
	}))
}

pub fn cn_name(cn: &str) -> Vec<u8> {
	yasna::construct_der(|w| write_cn_name(w, cn))
}

fn write_cn_name(w: yasna::DERWriter, cn: &str) {
	w.write_sequence(|w| {
		w.next().write_set(|w| {
			w.next().write_sequence(|w| {
				w.next()
					.write_oid(&ObjectIdentifier::from_slice(&[2, 5, 4, 3]));
				w.next().write_utf8_string(cn);
			})
		})
	})
}

#[cfg(feature = "x509-parser")]
pub fn default_params() -> rcgen::CertificateParams {
	let mut params = rcgen::CertificateParams::new(vec![
		"crabs.crabs".to_string(), "localhost".to_string(),
	]);
	params
		.distinguished_name
		.push(rcgen::DnType::OrganizationName, "Crab widgits SE");
	params.distinguished_name.push(rcgen::DnType::CommonName, "Master CA");
	params
}
