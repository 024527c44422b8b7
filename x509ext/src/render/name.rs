use yasna::models::ObjectIdentifier;
use yasna::{ASN1Result, BERReader};

use crate::hex::plain_hex;
use crate::names::{attribute_type, AttributeSyntax};
use crate::oid;
use crate::render::der::{format_time, read_generalized_time, read_string};

/// A decoded X.501 `Name`, kept as the encoded sequence of relative
/// distinguished names with their attribute values still in DER.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Name {
	rdns: Vec<Vec<(ObjectIdentifier, Vec<u8>)>>,
}

impl Name {
	pub(crate) fn read(reader: BERReader<'_, '_>) -> ASN1Result<Self> {
		let mut rdns = Vec::new();
		reader.read_sequence_of(|r| {
			let mut rdn = Vec::new();
			r.read_set_of(|r| {
				r.read_sequence(|seq| {
					let oid = seq.next().read_oid()?;
					let value = seq.next().read_der()?;
					rdn.push((oid, value));
					Ok(())
				})
			})?;
			rdns.push(rdn);
			Ok(())
		})?;
		Ok(Name { rdns })
	}

	pub(crate) fn from_der(der: &[u8]) -> ASN1Result<Self> {
		yasna::parse_der(der, Name::read)
	}

	/// A single relative distinguished name, as found in a distribution point name.
	pub(crate) fn read_rdn(reader: BERReader<'_, '_>) -> ASN1Result<Self> {
		let mut rdn = Vec::new();
		reader.read_set_of(|r| {
			r.read_sequence(|seq| {
				let oid = seq.next().read_oid()?;
				let value = seq.next().read_der()?;
				rdn.push((oid, value));
				Ok(())
			})
		})?;
		Ok(Name { rdns: vec![rdn] })
	}

	/// Every attribute of every RDN, in encoded order.
	pub(crate) fn attributes(&self) -> impl Iterator<Item = &(ObjectIdentifier, Vec<u8>)> {
		self.rdns.iter().flatten()
	}
}

impl std::fmt::Display for Name {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let rendered = self
			.rdns
			.iter()
			.map(|rdn| {
				rdn.iter()
					.map(|(oid, value)| {
						let key = attribute_type(oid.components())
							.map(|(short, _, _)| short.to_string())
							.unwrap_or_else(|| oid::to_dotted(oid));
						format!("{}={}", key, dn_value(value))
					})
					.collect::<Vec<_>>()
					.join("+")
			})
			.collect::<Vec<_>>()
			.join(",");
		f.write_str(&rendered)
	}
}

fn dn_value(der: &[u8]) -> String {
	match yasna::parse_der(der, read_string) {
		Ok(s) => escape_dn_value(&s),
		Err(_) => format!("#{}", plain_hex(der)),
	}
}

fn escape_dn_value(value: &str) -> String {
	let mut out = String::with_capacity(value.len());
	let last = value.chars().count().saturating_sub(1);
	for (i, c) in value.chars().enumerate() {
		let needs_escape = matches!(c, ',' | '+' | '"' | '\\' | '<' | '>' | ';' | '=')
			|| (i == 0 && (c == '#' || c == ' '))
			|| (i == last && c == ' ');
		if needs_escape {
			out.push('\\');
		}
		out.push(c);
	}
	out
}

/// Renders the value of a directory attribute according to the syntax of its type.
///
/// Values of unknown types, or values not matching the expected syntax, are
/// shown as a hex string of their encoding.
pub(crate) fn attribute_value(oid: &ObjectIdentifier, der: &[u8]) -> String {
	let syntax = attribute_type(oid.components())
		.map(|(_, _, syntax)| syntax)
		.unwrap_or(AttributeSyntax::Other);
	let rendered = match syntax {
		AttributeSyntax::DirectoryString
		| AttributeSyntax::PrintableString
		| AttributeSyntax::Ia5String => yasna::parse_der(der, read_string).ok(),
		AttributeSyntax::GeneralizedTime => yasna::parse_der(der, read_generalized_time)
			.ok()
			.map(|t| format_time(&t)),
		AttributeSyntax::Other => None,
	};
	rendered.unwrap_or_else(|| crate::hex::hex_string(der))
}
