//! Qualified certificate extensions of
//! [RFC 3739](https://www.rfc-editor.org/rfc/rfc3739) and ETSI EN 319 412-5.

use yasna::{ASN1Result, BERReader, BERReaderSeq};

use crate::hex::hex_string;
use crate::names;
use crate::oid::{self, *};
use crate::render::der::{read_oid_sequence, read_remaining, read_string, TAG_INTEGER};
use crate::render::general_name::GeneralName;
use crate::render::Lines;

pub(super) fn biometric_info(out: &mut Lines<'_>, value: &[u8]) -> ASN1Result<()> {
	yasna::parse_der(value, |r| {
		let mut n = 0;
		r.read_sequence_of(|r| {
			r.read_sequence(|seq| {
				let data_type = {
					let r = seq.next();
					if r.lookahead_tag()? == TAG_INTEGER {
						r.read_i64()?.to_string()
					} else {
						oid::to_dotted(&r.read_oid()?)
					}
				};
				let hash_alg = seq.next().read_sequence(|seq| {
					let alg = seq.next().read_oid()?;
					read_remaining(seq)?;
					Ok(alg)
				})?;
				let hash = seq.next().read_bytes()?;
				let source_uri = seq.read_optional(|r| r.read_ia5_string())?;

				n += 1;
				out.line(0, format!("Biometric Data [{}]", n));
				out.line(1, format!("Type: {}", data_type));
				out.line(1, format!("Hash Algorithm: {}", oid::to_dotted(&hash_alg)));
				out.line(1, format!("Hash: {}", hex_string(&hash)));
				if let Some(uri) = source_uri {
					out.line(1, format!("Source Data URI: {}", uri));
				}
				Ok(())
			})
		})
	})
}

pub(super) fn qc_statements(out: &mut Lines<'_>, value: &[u8]) -> ASN1Result<()> {
	yasna::parse_der(value, |r| {
		let mut n = 0;
		r.read_sequence_of(|r| {
			r.read_sequence(|seq| {
				n += 1;
				out.line(0, format!("QC Statement [{}]:", n));
				qc_statement(out, seq)
			})
		})
	})
}

fn qc_statement(out: &mut Lines<'_>, seq: &mut BERReaderSeq<'_, '_>) -> ASN1Result<()> {
	let statement_id = seq.next().read_oid()?;
	let id = statement_id.components().as_slice();
	let name = names::qc_statement(id);
	match id {
		OID_QCS_SYNTAX_V1 | OID_QCS_SYNTAX_V2 => {
			out.line(1, name.unwrap_or_default());
			seq.read_optional(|r| r.read_sequence(|seq| semantics_information(out, seq)))?;
		},
		OID_QC_COMPLIANCE | OID_QC_SSCD => out.line(1, name.unwrap_or_default()),
		OID_QC_LIMIT_VALUE => {
			out.line(1, name.unwrap_or_default());
			seq.next().read_sequence(|seq| monetary_value(out, seq, 2))?;
		},
		OID_QC_RETENTION_PERIOD => {
			let years = seq.next().read_i64()?;
			out.line(1, format!("{}: {}", name.unwrap_or_default(), years));
		},
		OID_QC_PDS => {
			out.line(1, name.unwrap_or_default());
			seq.next().read_sequence_of(|r| {
				r.read_sequence(|seq| {
					let url = seq.next().read_ia5_string()?;
					let language = read_string(seq.next())?;
					out.line(2, format!("{} ({})", url, language));
					Ok(())
				})
			})?;
		},
		OID_QC_TYPE => {
			out.line(1, name.unwrap_or_default());
			for qc_type in read_oid_sequence(seq.next())? {
				match names::qc_type(qc_type.components()) {
					Some(name) => out.line(2, name),
					None => out.line(2, oid::to_dotted(&qc_type)),
				}
			}
		},
		_ => {
			let info = read_remaining(seq)?;
			if info.is_empty() {
				out.line(1, oid::to_dotted(&statement_id));
			} else {
				out.line(1, format!("{}: {}", oid::to_dotted(&statement_id), hex_string(&info)));
			}
		},
	}
	Ok(())
}

fn semantics_information(out: &mut Lines<'_>, seq: &mut BERReaderSeq<'_, '_>) -> ASN1Result<()> {
	let semantics_id = seq.read_optional(|r| r.read_oid())?;
	let authorities = seq.read_optional(|r| {
		let mut names = Vec::new();
		r.read_sequence_of(|r| {
			names.push(GeneralName::read(r)?);
			Ok(())
		})?;
		Ok(names)
	})?;
	if let Some(id) = semantics_id {
		out.line(2, format!("Semantics Identifier: {}", oid::to_dotted(&id)));
	}
	if let Some(authorities) = authorities {
		out.line(2, "Name Registration Authorities:");
		for name in authorities {
			out.line(3, name.display(out.opts()));
		}
	}
	Ok(())
}

/// `MonetaryValue ::= SEQUENCE { currency Iso4217CurrencyCode, amount INTEGER, exponent INTEGER }`
pub(super) fn monetary_value(
	out: &mut Lines<'_>,
	seq: &mut BERReaderSeq<'_, '_>,
	depth: usize,
) -> ASN1Result<()> {
	let currency = read_currency(seq.next())?;
	let amount = seq.next().read_i64()?;
	let exponent = seq.next().read_i64()?;
	out.line(depth, format!("Currency: {}", currency));
	out.line(depth, format!("Amount: {}", amount));
	out.line(depth, format!("Exponent: {}", exponent));
	Ok(())
}

/// `Iso4217CurrencyCode ::= CHOICE { alphabetic PrintableString, numeric INTEGER (1..999) }`
fn read_currency(reader: BERReader<'_, '_>) -> ASN1Result<String> {
	if reader.lookahead_tag()? == TAG_INTEGER {
		reader.read_u64().map(|n| n.to_string())
	} else {
		reader.read_printable_string()
	}
}
