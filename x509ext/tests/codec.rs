mod util;

use util::*;
use yasna::models::ObjectIdentifier;
use x509ext::{friendly_name, hex_clear_dump, render, Error, ExtensionType, RenderOptions, X509Ext};

#[test]
fn key_usage_lists_exactly_the_set_bits() {
	let text = render(KEY_USAGE, &key_usage(&[0, 5])).unwrap();
	let lines = text.lines().collect::<Vec<_>>();
	assert_eq!(lines, vec!["digitalSignature", "keyCertSign"]);
}

#[test]
fn basic_constraints_ca_with_path_length() {
	let text = render(BASIC_CONSTRAINTS, &basic_constraints(true, Some(3))).unwrap();
	assert!(text.contains("is a CA"));
	assert!(text.contains("Path length constraint = 3"));
}

#[test]
fn basic_constraints_defaults() {
	let text = render(BASIC_CONSTRAINTS, &basic_constraints(false, None)).unwrap();
	assert!(text.contains("is not a CA"));
	assert!(text.contains("No path length constraint"));
}

#[test]
fn unknown_oid_renders_hex_dump() {
	let inner = [0x0C, 0x03, b'a', b'b', b'c'];
	let text = render("1.2.3.4.5.6.7.8.9.0", &octets(&inner)).unwrap();
	assert_eq!(text, hex_clear_dump(&inner));
	assert_eq!(friendly_name("1.2.3.4.5.6.7.8.9.0"), None);
}

#[test]
fn malformed_value_is_an_error() {
	// a BOOLEAN where the SEQUENCE should be
	let value = octets(&[0x01, 0x01, 0xFF]);
	assert!(matches!(render(BASIC_CONSTRAINTS, &value), Err(Error::Decode(_))));
}

#[test]
fn authority_key_identifier_fields() {
	let value = authority_key_identifier(Some(&[0x01, 0x02]), Some("Crab CA"), Some(0x2A));
	assert_eq!(
		render(AUTHORITY_KEY_IDENTIFIER, &value).unwrap(),
		"Key Identifier: 0x0102\n\
		Certificate Issuer:\n\
		\x20   Directory Name: CN=Crab CA\n\
		Certificate Serial Number: 0x002A\n"
	);
}

#[test]
fn uri_links_are_optional() {
	let san = octets(&yasna::construct_der(|w| {
		w.write_sequence(|w| {
			w.next()
				.write_tagged_implicit(yasna::Tag::context(6), |w| {
					w.write_ia5_string("https://crab.example")
				});
		})
	}));
	let ext = X509Ext::new("2.5.29.17", san, false);
	assert_eq!(
		ext.string_value().unwrap(),
		"Uniform Resource Identifier: https://crab.example\n"
	);
	let linked = ext
		.string_value_with(&RenderOptions::default().with_link_uris(true))
		.unwrap();
	assert_eq!(
		linked,
		"Uniform Resource Identifier: <a href=\"https://crab.example\">https://crab.example</a>\n"
	);
}

#[test]
fn names_resolve_through_the_type_table() {
	assert_eq!(friendly_name(KEY_USAGE), Some("Key Usage"));
	let ext = X509Ext::new(BASIC_CONSTRAINTS, basic_constraints(true, None), true);
	assert_eq!(ext.extension_type(), Some(ExtensionType::BasicConstraints));
	assert_eq!(ext.name(), Some(ExtensionType::BasicConstraints.friendly_name()));
	for ty in ExtensionType::ALL {
		assert_eq!(friendly_name(ty.oid()), Some(ty.friendly_name()));
	}
}

fn write_uri(w: yasna::DERWriter, uri: &str) {
	w.write_tagged_implicit(yasna::Tag::context(6), |w| w.write_ia5_string(uri));
}

#[test]
fn crl_distribution_points_are_numbered_without_gaps() {
	let value = octets(&yasna::construct_der(|w| {
		w.write_sequence(|w| {
			w.next().write_sequence(|w| {
				w.next().write_tagged(yasna::Tag::context(0), |w| {
					w.write_tagged_implicit(yasna::Tag::context(0), |w| {
						w.write_sequence(|w| write_uri(w.next(), "http://crl.example/a.crl"))
					})
				});
			});
			w.next().write_sequence(|w| {
				w.next().write_tagged(yasna::Tag::context(0), |w| {
					w.write_tagged_implicit(yasna::Tag::context(0), |w| {
						w.write_sequence(|w| write_uri(w.next(), "http://crl.example/b.crl"))
					})
				});
				w.next().write_tagged_implicit(yasna::Tag::context(1), |w| {
					w.write_bitvec_bytes(&[0b0100_0000], 2)
				});
			});
		})
	}));
	assert_eq!(
		render("2.5.29.31", &value).unwrap(),
		"CRL Distribution Point [1]:\n\
		\x20   Distribution Point Name:\n\
		\x20       Full Name:\n\
		\x20           Uniform Resource Identifier: http://crl.example/a.crl\n\
		CRL Distribution Point [2]:\n\
		\x20   Distribution Point Name:\n\
		\x20       Full Name:\n\
		\x20           Uniform Resource Identifier: http://crl.example/b.crl\n\
		\x20   Reasons:\n\
		\x20       keyCompromise\n"
	);
}

#[test]
fn certificate_policies_end_with_the_last_qualifier() {
	let cps: &[u64] = &[1, 3, 6, 1, 5, 5, 7, 2, 1];
	let value = octets(&yasna::construct_der(|w| {
		w.write_sequence(|w| {
			w.next().write_sequence(|w| {
				w.next().write_oid(&ObjectIdentifier::from_slice(&[2, 23, 140, 1, 2, 1]));
			});
			w.next().write_sequence(|w| {
				w.next().write_oid(&ObjectIdentifier::from_slice(&[1, 2, 3, 4]));
				w.next().write_sequence(|w| {
					w.next().write_sequence(|w| {
						w.next().write_oid(&ObjectIdentifier::from_slice(cps));
						w.next().write_ia5_string("https://cps.example/1");
					});
					w.next().write_sequence(|w| {
						w.next().write_oid(&ObjectIdentifier::from_slice(cps));
						w.next().write_ia5_string("https://cps.example/2");
					});
				});
			});
		})
	}));
	assert_eq!(
		render("2.5.29.32", &value).unwrap(),
		"Certificate Policy [1]:\n\
		\x20   Policy Identifier: 2.23.140.1.2.1\n\
		Certificate Policy [2]:\n\
		\x20   Policy Identifier: 1.2.3.4\n\
		\x20   Policy Qualifier Information [2,1]:\n\
		\x20       CPS Pointer: https://cps.example/1\n\
		\x20   Policy Qualifier Information [2,2]:\n\
		\x20       CPS Pointer: https://cps.example/2\n"
	);
}

#[test]
fn qc_statements_end_with_the_last_statement() {
	let value = octets(&yasna::construct_der(|w| {
		w.write_sequence(|w| {
			w.next().write_sequence(|w| {
				w.next().write_oid(&ObjectIdentifier::from_slice(&[0, 4, 0, 1862, 1, 1]));
			});
			w.next().write_sequence(|w| {
				w.next().write_oid(&ObjectIdentifier::from_slice(&[0, 4, 0, 1862, 1, 4]));
			});
		})
	}));
	assert_eq!(
		render("1.3.6.1.5.5.7.1.3", &value).unwrap(),
		"QC Statement [1]:\n\
		\x20   QC Compliance\n\
		QC Statement [2]:\n\
		\x20   QC SSCD\n"
	);
}

#[test]
fn microsoft_application_policies_are_dumped() {
	let inner = yasna::construct_der(|w| {
		w.write_sequence(|w| {
			w.next().write_sequence(|w| {
				w.next().write_oid(&ObjectIdentifier::from_slice(&[1, 3, 6, 1, 5, 5, 7, 3, 1]));
			});
		})
	});
	let oid = "1.3.6.1.4.1.311.21.10";
	assert_eq!(friendly_name(oid), Some("Microsoft Application Policies"));
	assert_eq!(render(oid, &octets(&inner)).unwrap(), hex_clear_dump(&inner));
}
