use std::net::{Ipv4Addr, Ipv6Addr};

use yasna::models::ObjectIdentifier;
use yasna::{ASN1Result, BERReader, Tag, TagClass};

use crate::hex::hex_string;
use crate::oid::{self, OID_MS_UPN};
use crate::render::der::{invalid, read_string};
use crate::render::name::Name;
use crate::render::RenderOptions;

/// `GeneralName` as defined in
/// [RFC 5280 section 4.2.1.6](https://www.rfc-editor.org/rfc/rfc5280#section-4.2.1.6).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum GeneralName {
	OtherName {
		type_id: ObjectIdentifier,
		/// DER of the value inside the explicit `[0]` tag
		value: Vec<u8>,
	},
	Rfc822Name(String),
	DnsName(String),
	X400Address(Vec<u8>),
	DirectoryName(Name),
	EdiPartyName {
		name_assigner: Option<String>,
		party_name: String,
	},
	Uri(String),
	IpAddress(Vec<u8>),
	RegisteredId(ObjectIdentifier),
}

impl GeneralName {
	pub(crate) fn read(reader: BERReader<'_, '_>) -> ASN1Result<Self> {
		let tag = reader.lookahead_tag()?;
		if tag.tag_class != TagClass::ContextSpecific {
			return Err(invalid());
		}
		let name = match tag.tag_number {
			0 => reader.read_tagged_implicit(Tag::context(0), |r| {
				r.read_sequence(|seq| {
					let type_id = seq.next().read_oid()?;
					let value = seq.next().read_tagged(Tag::context(0), |r| r.read_der())?;
					Ok(GeneralName::OtherName { type_id, value })
				})
			})?,
			1 => GeneralName::Rfc822Name(
				reader.read_tagged_implicit(Tag::context(1), |r| r.read_ia5_string())?,
			),
			2 => GeneralName::DnsName(
				reader.read_tagged_implicit(Tag::context(2), |r| r.read_ia5_string())?,
			),
			3 => GeneralName::X400Address(reader.read_der()?),
			4 => GeneralName::DirectoryName(reader.read_tagged(Tag::context(4), Name::read)?),
			5 => reader.read_tagged_implicit(Tag::context(5), |r| {
				r.read_sequence(|seq| {
					let name_assigner =
						seq.read_optional(|r| r.read_tagged(Tag::context(0), read_string))?;
					let party_name = seq.next().read_tagged(Tag::context(1), read_string)?;
					Ok(GeneralName::EdiPartyName {
						name_assigner,
						party_name,
					})
				})
			})?,
			6 => GeneralName::Uri(
				reader.read_tagged_implicit(Tag::context(6), |r| r.read_ia5_string())?,
			),
			7 => GeneralName::IpAddress(
				reader.read_tagged_implicit(Tag::context(7), |r| r.read_bytes())?,
			),
			8 => GeneralName::RegisteredId(
				reader.read_tagged_implicit(Tag::context(8), |r| r.read_oid())?,
			),
			_ => return Err(invalid()),
		};
		Ok(name)
	}

	pub(crate) fn display(&self, opts: &RenderOptions) -> String {
		match self {
			GeneralName::OtherName { type_id, value } => {
				if type_id.components().as_slice() == OID_MS_UPN {
					if let Ok(upn) = yasna::parse_der(value, |r| r.read_utf8string()) {
						return format!("Other Name: UPN: {}", upn);
					}
				}
				format!("Other Name: {}: {}", oid::to_dotted(type_id), hex_string(value))
			},
			GeneralName::Rfc822Name(mailbox) => format!("RFC 822 Name: {}", mailbox),
			GeneralName::DnsName(dns) => format!("DNS Name: {}", dns),
			GeneralName::X400Address(der) => format!("X.400 Address: {}", hex_string(der)),
			GeneralName::DirectoryName(name) => format!("Directory Name: {}", name),
			GeneralName::EdiPartyName {
				name_assigner: Some(assigner),
				party_name,
			} => format!("EDI Party Name: {} ({})", party_name, assigner),
			GeneralName::EdiPartyName {
				name_assigner: None,
				party_name,
			} => format!("EDI Party Name: {}", party_name),
			GeneralName::Uri(uri) if opts.link_uris => {
				format!("Uniform Resource Identifier: <a href=\"{0}\">{0}</a>", uri)
			},
			GeneralName::Uri(uri) => format!("Uniform Resource Identifier: {}", uri),
			GeneralName::IpAddress(octets) => format!("IP Address: {}", ip_address(octets)),
			GeneralName::RegisteredId(oid) => format!("Registered ID: {}", oid::to_dotted(oid)),
		}
	}
}

/// Reads `GeneralNames ::= SEQUENCE SIZE (1..MAX) OF GeneralName`.
pub(crate) fn read_general_names(reader: BERReader<'_, '_>) -> ASN1Result<Vec<GeneralName>> {
	let mut names = Vec::new();
	reader.read_sequence_of(|r| {
		names.push(GeneralName::read(r)?);
		Ok(())
	})?;
	Ok(names)
}

/// Renders an `iPAddress`. Name constraints carry an address followed by a mask
/// of the same length.
fn ip_address(octets: &[u8]) -> String {
	fn v4(o: &[u8]) -> Ipv4Addr {
		Ipv4Addr::new(o[0], o[1], o[2], o[3])
	}
	fn v6(o: &[u8]) -> Ipv6Addr {
		let mut a = [0u8; 16];
		a.copy_from_slice(o);
		Ipv6Addr::from(a)
	}
	match octets.len() {
		4 => v4(octets).to_string(),
		16 => v6(octets).to_string(),
		8 => format!("{}/{}", v4(&octets[..4]), v4(&octets[4..])),
		32 => format!("{}/{}", v6(&octets[..16]), v6(&octets[16..])),
		_ => hex_string(octets),
	}
}

#[cfg(test)]
mod general_name_tests {
	use super::*;

	fn parse(der: &[u8]) -> GeneralName {
		yasna::parse_der(der, GeneralName::read).unwrap()
	}

	#[test]
	fn dns_and_uri() {
		let dns = yasna::construct_der(|w| {
			w.write_tagged_implicit(Tag::context(2), |w| w.write_ia5_string("crabs.example"))
		});
		let opts = RenderOptions::default();
		assert_eq!(parse(&dns).display(&opts), "DNS Name: crabs.example");

		let uri = yasna::construct_der(|w| {
			w.write_tagged_implicit(Tag::context(6), |w| w.write_ia5_string("http://a.example/"))
		});
		assert_eq!(
			parse(&uri).display(&opts),
			"Uniform Resource Identifier: http://a.example/"
		);
		let mut linked = RenderOptions::default();
		linked.link_uris = true;
		assert_eq!(
			parse(&uri).display(&linked),
			"Uniform Resource Identifier: <a href=\"http://a.example/\">http://a.example/</a>"
		);
	}

	#[test]
	fn ip_addresses() {
		let ip = |bytes: &[u8]| {
			let der = yasna::construct_der(|w| {
				w.write_tagged_implicit(Tag::context(7), |w| w.write_bytes(bytes))
			});
			parse(&der).display(&RenderOptions::default())
		};
		assert_eq!(ip(&[192, 0, 2, 1]), "IP Address: 192.0.2.1");
		assert_eq!(
			ip(&[10, 0, 0, 0, 255, 0, 0, 0]),
			"IP Address: 10.0.0.0/255.0.0.0"
		);
		let mut v6 = [0u8; 16];
		v6[15] = 1;
		assert_eq!(ip(&v6), "IP Address: ::1");
	}

	#[test]
	fn upn_other_name() {
		let der = yasna::construct_der(|w| {
			w.write_tagged_implicit(Tag::context(0), |w| {
				w.write_sequence(|w| {
					w.next().write_oid(&ObjectIdentifier::from_slice(OID_MS_UPN));
					w.next()
						.write_tagged(Tag::context(0), |w| w.write_utf8_string("ferris@crabs.example"));
				})
			})
		});
		assert_eq!(
			parse(&der).display(&RenderOptions::default()),
			"Other Name: UPN: ferris@crabs.example"
		);
	}

	#[test]
	fn edi_party_name_without_assigner() {
		let der = yasna::construct_der(|w| {
			w.write_tagged_implicit(Tag::context(5), |w| {
				w.write_sequence(|w| {
					w.next()
						.write_tagged(Tag::context(1), |w| w.write_utf8_string("Party"));
				})
			})
		});
		assert_eq!(parse(&der).display(&RenderOptions::default()), "EDI Party Name: Party");
	}

	#[test]
	fn rejects_universal_tags() {
		let der = yasna::construct_der(|w| w.write_ia5_string("x"));
		assert!(yasna::parse_der(&der, GeneralName::read).is_err());
	}
}
