//! Extensions of the Common PKI (formerly ISIS-MTT) profile.

use yasna::{ASN1Result, BERReader, BERReaderSeq, Tag, TagClass};

use crate::hex::hex_string;
use crate::names;
use crate::oid;
use crate::render::der::{
	format_time, invalid, read_generalized_time, read_integer_bytes, read_remaining, read_string,
};
use crate::render::general_name::{read_general_names, GeneralName};
use crate::render::qualified::monetary_value;
use crate::render::Lines;

pub(super) fn admission(out: &mut Lines<'_>, value: &[u8]) -> ASN1Result<()> {
	yasna::parse_der(value, |r| {
		r.read_sequence(|seq| {
			// the authority is an untagged CHOICE, the admissions a universal SEQUENCE
			let authority = seq.read_optional(GeneralName::read)?;
			if let Some(authority) = authority {
				let authority = authority.display(out.opts());
				out.line(0, format!("Admission Authority: {}", authority));
			}
			let mut n = 0;
			seq.next().read_sequence_of(|r| {
				r.read_sequence(|seq| {
					n += 1;
					out.line(0, format!("Admission [{}]:", n));
					admissions(out, seq)
				})
			})
		})
	})
}

fn admissions(out: &mut Lines<'_>, seq: &mut BERReaderSeq<'_, '_>) -> ASN1Result<()> {
	let authority = seq.read_optional(|r| r.read_tagged(Tag::context(0), GeneralName::read))?;
	if let Some(authority) = authority {
		let authority = authority.display(out.opts());
		out.line(1, format!("Admission Authority: {}", authority));
	}
	seq.read_optional(|r| r.read_tagged(Tag::context(1), |r| naming_authority(out, r, 1)))?;
	seq.next().read_sequence_of(|r| {
		r.read_sequence(|seq| {
			out.line(1, "Profession Info:");
			profession_info(out, seq, 2)
		})
	})
}

/// `NamingAuthority ::= SEQUENCE { OID OPTIONAL, IA5String OPTIONAL, DirectoryString OPTIONAL }`
fn naming_authority(out: &mut Lines<'_>, reader: BERReader<'_, '_>, depth: usize) -> ASN1Result<()> {
	reader.read_sequence(|seq| {
		let id = seq.read_optional(|r| r.read_oid())?;
		let url = seq.read_optional(|r| r.read_ia5_string())?;
		let text = seq.read_optional(read_string)?;
		if let Some(id) = id {
			out.line(depth, format!("Naming Authority OID: {}", oid::to_dotted(&id)));
		}
		if let Some(url) = url {
			out.line(depth, format!("Naming Authority URL: {}", url));
		}
		if let Some(text) = text {
			out.line(depth, format!("Naming Authority Text: {}", text));
		}
		Ok(())
	})
}

fn profession_info(out: &mut Lines<'_>, seq: &mut BERReaderSeq<'_, '_>, depth: usize) -> ASN1Result<()> {
	seq.read_optional(|r| r.read_tagged(Tag::context(0), |r| naming_authority(out, r, depth)))?;
	seq.next().read_sequence_of(|r| {
		out.line(depth, format!("Profession Item: {}", read_string(r)?));
		Ok(())
	})?;
	let oids = seq.read_optional(|r| {
		let mut oids = Vec::new();
		r.read_sequence_of(|r| {
			oids.push(r.read_oid()?);
			Ok(())
		})?;
		Ok(oids)
	})?;
	for oid in oids.unwrap_or_default() {
		out.line(depth, format!("Profession OID: {}", oid::to_dotted(&oid)));
	}
	if let Some(number) = seq.read_optional(|r| r.read_printable_string())? {
		out.line(depth, format!("Registration Number: {}", number));
	}
	if let Some(info) = seq.read_optional(|r| r.read_bytes())? {
		out.line(depth, format!("Add Profession Info: {}", hex_string(&info)));
	}
	Ok(())
}

pub(super) fn liability_limitation_flag(out: &mut Lines<'_>, value: &[u8]) -> ASN1Result<()> {
	let flag = yasna::parse_der(value, |r| r.read_bool())?;
	out.line(0, flag);
	Ok(())
}

pub(super) fn date_of_cert_gen(out: &mut Lines<'_>, value: &[u8]) -> ASN1Result<()> {
	let date = yasna::parse_der(value, read_generalized_time)?;
	out.line(0, format_time(&date));
	Ok(())
}

pub(super) fn procuration(out: &mut Lines<'_>, value: &[u8]) -> ASN1Result<()> {
	yasna::parse_der(value, |r| {
		r.read_sequence(|seq| {
			let country =
				seq.read_optional(|r| r.read_tagged(Tag::context(1), |r| r.read_printable_string()))?;
			let substitution = seq.read_optional(|r| r.read_tagged(Tag::context(2), read_string))?;
			if let Some(country) = country {
				out.line(0, format!("Country: {}", country));
			}
			if let Some(substitution) = substitution {
				out.line(0, format!("Type of Substitution: {}", substitution));
			}
			seq.next().read_tagged(Tag::context(3), |r| signing_for(out, r))
		})
	})
}

/// `SigningFor ::= CHOICE { thirdPerson GeneralName, certRef IssuerSerial }`
fn signing_for(out: &mut Lines<'_>, reader: BERReader<'_, '_>) -> ASN1Result<()> {
	let tag = reader.lookahead_tag()?;
	if tag.tag_class == TagClass::ContextSpecific {
		let person = GeneralName::read(reader)?;
		let person = person.display(out.opts());
		out.line(0, format!("Third Person: {}", person));
		return Ok(());
	}
	reader.read_sequence(|seq| {
		let issuer = read_general_names(seq.next())?;
		let serial = read_integer_bytes(seq.next())?;
		read_remaining(seq)?;
		out.line(0, "Certificate Reference:");
		out.line(1, "Issuer:");
		for name in issuer {
			out.line(2, name.display(out.opts()));
		}
		out.line(1, format!("Serial Number: {}", hex_string(&serial)));
		Ok(())
	})
}

pub(super) fn monetary_limit(out: &mut Lines<'_>, value: &[u8]) -> ASN1Result<()> {
	yasna::parse_der(value, |r| r.read_sequence(|seq| monetary_value(out, seq, 0)))
}

pub(super) fn declaration_of_majority(out: &mut Lines<'_>, value: &[u8]) -> ASN1Result<()> {
	yasna::parse_der(value, |r| {
		let tag = r.lookahead_tag()?;
		if tag.tag_class != TagClass::ContextSpecific {
			return Err(invalid());
		}
		match tag.tag_number {
			0 => {
				let age = r.read_tagged_implicit(Tag::context(0), |r| r.read_i64())?;
				out.line(0, format!("Not Younger Than: {}", age));
			},
			1 => r.read_tagged_implicit(Tag::context(1), |r| {
				r.read_sequence(|seq| {
					let full_age = seq.read_optional(|r| r.read_bool())?.unwrap_or(true);
					let country = seq.next().read_printable_string()?;
					out.line(0, format!("Full Age at Country: {} ({})", country, full_age));
					Ok(())
				})
			})?,
			2 => {
				let born = r.read_tagged_implicit(Tag::context(2), read_generalized_time)?;
				out.line(0, format!("Date of Birth: {}", format_time(&born)));
			},
			_ => return Err(invalid()),
		}
		Ok(())
	})
}

/// The card serial number is shown as the raw value, whatever it encodes.
pub(super) fn iccsn(out: &mut Lines<'_>, value: &[u8]) -> ASN1Result<()> {
	out.line(0, hex_string(value));
	Ok(())
}

/// Restriction and additional information.
pub(super) fn directory_string(out: &mut Lines<'_>, value: &[u8]) -> ASN1Result<()> {
	let text = yasna::parse_der(value, read_string)?;
	out.line(0, text);
	Ok(())
}

pub(super) fn validity_model(out: &mut Lines<'_>, value: &[u8]) -> ASN1Result<()> {
	let model = yasna::parse_der(value, |r| {
		r.read_sequence(|seq| {
			let model = seq.next().read_oid()?;
			read_remaining(seq)?;
			Ok(model)
		})
	})?;
	match names::validity_model(model.components()) {
		Some(name) => out.line(0, name),
		None => out.line(0, oid::to_dotted(&model)),
	}
	Ok(())
}

#[cfg(test)]
mod common_pki_tests {
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
	fn admission_layout() {
		let value = yasna::construct_der(|w| {
			w.write_sequence(|w| {
				w.next().write_sequence(|w| {
					w.next().write_sequence(|w| {
						w.next().write_tagged(Tag::context(1), |w| {
							w.write_sequence(|w| {
								w.next().write_ia5_string("https://registry.example");
							})
						});
						w.next().write_sequence(|w| {
							w.next().write_sequence(|w| {
								w.next().write_sequence(|w| {
									w.next().write_utf8_string("Apotheker");
								});
								w.next().write_printable_string("12345");
							});
						});
					});
				});
			})
		});
		assert_eq!(
			run(admission, &value),
			"Admission [1]:\n\
			\x20   Naming Authority URL: https://registry.example\n\
			\x20   Profession Info:\n\
			\x20       Profession Item: Apotheker\n\
			\x20       Registration Number: 12345\n"
		);
	}

	#[test]
	fn declaration_choices() {
		let age = yasna::construct_der(|w| {
			w.write_tagged_implicit(Tag::context(0), |w| w.write_u8(18))
		});
		assert_eq!(run(declaration_of_majority, &age), "Not Younger Than: 18\n");

		let country = yasna::construct_der(|w| {
			w.write_tagged_implicit(Tag::context(1), |w| {
				w.write_sequence(|w| {
					w.next().write_printable_string("DE");
				})
			})
		});
		assert_eq!(
			run(declaration_of_majority, &country),
			"Full Age at Country: DE (true)\n"
		);
	}

	#[test]
	fn validity_models() {
		let value = yasna::construct_der(|w| {
			w.write_sequence(|w| {
				w.next()
					.write_oid(&ObjectIdentifier::from_slice(oid::OID_VALIDITY_MODEL_CHAIN));
			})
		});
		assert_eq!(run(validity_model, &value), "Chain Model\n");
	}

	#[test]
	fn monetary() {
		let value = yasna::construct_der(|w| {
			w.write_sequence(|w| {
				w.next().write_printable_string("EUR");
				w.next().write_u32(250);
				w.next().write_u8(3);
			})
		});
		assert_eq!(
			run(monetary_limit, &value),
			"Currency: EUR\nAmount: 250\nExponent: 3\n"
		);
	}
}
