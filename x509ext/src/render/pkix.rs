//! Decoders for the certificate extensions of
//! [RFC 5280 section 4.2](https://www.rfc-editor.org/rfc/rfc5280#section-4.2).

use yasna::{ASN1Result, BERReader, Tag};

use crate::hex::hex_string;
use crate::names;
use crate::oid;
use crate::render::der::{bit_is_set, format_time, read_generalized_time, read_integer_bytes};
use crate::render::general_name::{read_general_names, GeneralName};
use crate::render::name::attribute_value;
use crate::render::Lines;

/// Named bits of `KeyUsage`.
const KEY_USAGES: [&str; 9] = [
	"digitalSignature",
	"nonRepudiation",
	"keyEncipherment",
	"dataEncipherment",
	"keyAgreement",
	"keyCertSign",
	"cRLSign",
	"encipherOnly",
	"decipherOnly",
];

/// AIA and SIA share `SEQUENCE OF AccessDescription`, only the heading differs.
pub(super) fn information_access(out: &mut Lines<'_>, value: &[u8], title: &str) -> ASN1Result<()> {
	yasna::parse_der(value, |r| {
		let mut n = 0;
		r.read_sequence_of(|r| {
			r.read_sequence(|seq| {
				let method = seq.next().read_oid()?;
				let location = GeneralName::read(seq.next())?;
				n += 1;
				let method = names::access_method(method.components())
					.map(str::to_string)
					.unwrap_or_else(|| oid::to_dotted(&method));
				out.line(0, format!("{} [{}]:", title, n));
				out.line(1, format!("Access Method: {}", method));
				out.line(1, "Access Location:");
				let location = location.display(out.opts());
				out.line(2, location);
				Ok(())
			})
		})
	})
}

pub(super) fn subject_directory_attributes(out: &mut Lines<'_>, value: &[u8]) -> ASN1Result<()> {
	yasna::parse_der(value, |r| {
		r.read_sequence_of(|r| {
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

pub(super) fn subject_key_identifier(out: &mut Lines<'_>, value: &[u8]) -> ASN1Result<()> {
	let key_id = yasna::parse_der(value, |r| r.read_bytes())?;
	out.line(0, format!("Key Identifier: {}", hex_string(&key_id)));
	Ok(())
}

pub(super) fn key_usage(out: &mut Lines<'_>, value: &[u8]) -> ASN1Result<()> {
	let (bits, len) = yasna::parse_der(value, |r| r.read_bitvec_bytes())?;
	for (bit, usage) in KEY_USAGES.iter().enumerate().take(len) {
		if bit_is_set(&bits, bit) {
			out.line(0, usage);
		}
	}
	Ok(())
}

pub(super) fn private_key_usage_period(out: &mut Lines<'_>, value: &[u8]) -> ASN1Result<()> {
	let (not_before, not_after) = yasna::parse_der(value, |r| {
		r.read_sequence(|seq| {
			let not_before = seq.read_optional(|r| {
				r.read_tagged_implicit(Tag::context(0), read_generalized_time)
			})?;
			let not_after = seq.read_optional(|r| {
				r.read_tagged_implicit(Tag::context(1), read_generalized_time)
			})?;
			Ok((not_before, not_after))
		})
	})?;
	let show = |t: Option<time::OffsetDateTime>| {
		t.map(|t| format_time(&t)).unwrap_or_else(|| "No value".to_string())
	};
	out.line(0, format!("Not Before: {}", show(not_before)));
	out.line(0, format!("Not After: {}", show(not_after)));
	Ok(())
}

/// Subject and issuer alternative names and the certificate issuer CRL entry extension.
pub(super) fn general_names(out: &mut Lines<'_>, value: &[u8]) -> ASN1Result<()> {
	let names = yasna::parse_der(value, read_general_names)?;
	for name in names {
		out.line(0, name.display(out.opts()));
	}
	Ok(())
}

pub(super) fn basic_constraints(out: &mut Lines<'_>, value: &[u8]) -> ASN1Result<()> {
	let (ca, path_len) = yasna::parse_der(value, |r| {
		r.read_sequence(|seq| {
			let ca = seq.read_optional(|r| r.read_bool())?.unwrap_or(false);
			let path_len = seq.read_optional(|r| r.read_u64())?;
			Ok((ca, path_len))
		})
	})?;
	out.line(0, if ca { "Subject is a CA" } else { "Subject is not a CA" });
	match path_len {
		Some(n) => out.line(0, format!("Path length constraint = {}", n)),
		None => out.line(0, "No path length constraint"),
	}
	Ok(())
}

pub(super) fn name_constraints(out: &mut Lines<'_>, value: &[u8]) -> ASN1Result<()> {
	let (permitted, excluded) = yasna::parse_der(value, |r| {
		r.read_sequence(|seq| {
			let permitted = seq.read_optional(|r| {
				r.read_tagged_implicit(Tag::context(0), read_general_subtrees)
			})?;
			let excluded = seq.read_optional(|r| {
				r.read_tagged_implicit(Tag::context(1), read_general_subtrees)
			})?;
			Ok((permitted, excluded))
		})
	})?;
	subtrees(out, "Permitted", permitted);
	subtrees(out, "Excluded", excluded);
	Ok(())
}

struct GeneralSubtree {
	base: GeneralName,
	minimum: u64,
	maximum: Option<u64>,
}

fn read_general_subtrees(reader: BERReader<'_, '_>) -> ASN1Result<Vec<GeneralSubtree>> {
	let mut subtrees = Vec::new();
	reader.read_sequence_of(|r| {
		r.read_sequence(|seq| {
			let base = GeneralName::read(seq.next())?;
			let minimum = seq
				.read_optional(|r| r.read_tagged_implicit(Tag::context(0), |r| r.read_u64()))?
				.unwrap_or(0);
			let maximum =
				seq.read_optional(|r| r.read_tagged_implicit(Tag::context(1), |r| r.read_u64()))?;
			subtrees.push(GeneralSubtree {
				base,
				minimum,
				maximum,
			});
			Ok(())
		})
	})?;
	Ok(subtrees)
}

fn subtrees(out: &mut Lines<'_>, kind: &str, subtrees: Option<Vec<GeneralSubtree>>) {
	let Some(subtrees) = subtrees else {
		out.line(0, format!("{} Subtrees: No value", kind));
		return;
	};
	out.line(0, format!("{} Subtrees:", kind));
	for (i, subtree) in subtrees.iter().enumerate() {
		out.line(1, format!("{} Subtree [{}]:", kind, i + 1));
		out.line(2, "Base:");
		let base = subtree.base.display(out.opts());
		out.line(3, base);
		out.line(2, format!("Minimum: {}", subtree.minimum));
		if let Some(maximum) = subtree.maximum {
			out.line(2, format!("Maximum: {}", maximum));
		}
	}
}

pub(super) fn authority_key_identifier(out: &mut Lines<'_>, value: &[u8]) -> ASN1Result<()> {
	let aki = yasna::parse_der(value, read_authority_key_identifier)?;
	if let Some(key_id) = &aki.key_identifier {
		out.line(0, format!("Key Identifier: {}", hex_string(key_id)));
	}
	if let Some(issuer) = &aki.issuer {
		out.line(0, "Certificate Issuer:");
		for name in issuer {
			out.line(1, name.display(out.opts()));
		}
	}
	if let Some(serial) = &aki.serial {
		out.line(0, format!("Certificate Serial Number: {}", hex_string(serial)));
	}
	Ok(())
}

/// The decoded fields of an `AuthorityKeyIdentifier`.
pub(crate) struct AuthorityKeyId {
	pub(crate) key_identifier: Option<Vec<u8>>,
	pub(crate) issuer: Option<Vec<GeneralName>>,
	pub(crate) serial: Option<Vec<u8>>,
}

pub(crate) fn read_authority_key_identifier(reader: BERReader<'_, '_>) -> ASN1Result<AuthorityKeyId> {
	reader.read_sequence(|seq| {
		let key_identifier =
			seq.read_optional(|r| r.read_tagged_implicit(Tag::context(0), |r| r.read_bytes()))?;
		let issuer =
			seq.read_optional(|r| r.read_tagged_implicit(Tag::context(1), read_general_names))?;
		let serial =
			seq.read_optional(|r| r.read_tagged_implicit(Tag::context(2), read_integer_bytes))?;
		Ok(AuthorityKeyId {
			key_identifier,
			issuer,
			serial,
		})
	})
}

pub(super) fn extended_key_usage(out: &mut Lines<'_>, value: &[u8]) -> ASN1Result<()> {
	yasna::parse_der(value, |r| {
		r.read_sequence_of(|r| {
			let purpose = r.read_oid()?;
			match names::extended_key_usage(purpose.components()) {
				Some(name) => out.line(0, name),
				None => out.line(0, oid::to_dotted(&purpose)),
			}
			Ok(())
		})
	})
}

pub(super) fn ocsp_no_check(out: &mut Lines<'_>, value: &[u8]) -> ASN1Result<()> {
	yasna::parse_der(value, |r| r.read_null())?;
	out.line(0, "OCSP No Check");
	Ok(())
}

#[cfg(test)]
mod pkix_tests {
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
	fn key_usage_bits() {
		// digitalSignature (0) and keyCertSign (5)
		let value = yasna::construct_der(|w| {
			w.write_bitvec_bytes(&[0b1000_0100], 6);
		});
		assert_eq!(run(key_usage, &value), "digitalSignature\nkeyCertSign\n");
	}

	#[test]
	fn basic_constraints_ca() {
		let value = yasna::construct_der(|w| {
			w.write_sequence(|w| {
				w.next().write_bool(true);
				w.next().write_u8(3);
			})
		});
		assert_eq!(
			run(basic_constraints, &value),
			"Subject is a CA\nPath length constraint = 3\n"
		);
	}

	#[test]
	fn basic_constraints_defaults() {
		let value = yasna::construct_der(|w| w.write_sequence(|_| {}));
		assert_eq!(
			run(basic_constraints, &value),
			"Subject is not a CA\nNo path length constraint\n"
		);
	}

	#[test]
	fn information_access_layout() {
		let value = yasna::construct_der(|w| {
			w.write_sequence(|w| {
				w.next().write_sequence(|w| {
					w.next().write_oid(&ObjectIdentifier::from_slice(oid::OID_AD_OCSP));
					w.next().write_tagged_implicit(Tag::context(6), |w| {
						w.write_ia5_string("http://ocsp.example")
					});
				});
			})
		});
		let opts = RenderOptions::default();
		let mut out = Lines::new(&opts);
		information_access(&mut out, &value, "Authority Information Access").unwrap();
		assert_eq!(
			out.finish(),
			"Authority Information Access [1]:\n    Access Method: OCSP\n    Access Location:\n        Uniform Resource Identifier: http://ocsp.example\n"
		);
	}

	#[test]
	fn authority_key_identifier_key_id_only() {
		let value = yasna::construct_der(|w| {
			w.write_sequence(|w| {
				w.next()
					.write_tagged_implicit(Tag::context(0), |w| w.write_bytes(&[0xAB, 0xCD]));
			})
		});
		assert_eq!(run(authority_key_identifier, &value), "Key Identifier: 0xABCD\n");
	}

	#[test]
	fn name_constraints_subtrees() {
		let value = yasna::construct_der(|w| {
			w.write_sequence(|w| {
				w.next().write_tagged_implicit(Tag::context(0), |w| {
					w.write_sequence(|w| {
						w.next().write_sequence(|w| {
							w.next().write_tagged_implicit(Tag::context(2), |w| {
								w.write_ia5_string(".example.com")
							});
						});
					})
				});
			})
		});
		assert_eq!(
			run(name_constraints, &value),
			"Permitted Subtrees:\n    Permitted Subtree [1]:\n        Base:\n            DNS Name: .example.com\n        Minimum: 0\nExcluded Subtrees: No value\n"
		);
	}

	#[test]
	fn extended_key_usage_names() {
		let value = yasna::construct_der(|w| {
			w.write_sequence(|w| {
				w.next()
					.write_oid(&ObjectIdentifier::from_slice(&[1, 3, 6, 1, 5, 5, 7, 3, 1]));
				w.next().write_oid(&ObjectIdentifier::from_slice(&[1, 2, 3, 4]));
			})
		});
		assert_eq!(
			run(extended_key_usage, &value),
			"TLS Web Server Authentication\n1.2.3.4\n"
		);
	}

	#[test]
	fn truncated_value_fails() {
		let opts = RenderOptions::default();
		let mut out = Lines::new(&opts);
		assert!(basic_constraints(&mut out, &[0x30, 0x03, 0x01, 0x01]).is_err());
	}
}
