mod util;

use util::*;
use x509ext::{
	render, update, ExtensionSet, IssuerName, KeyIdentifierGenerator, PublicKey, SerialNumber,
};

fn keys() -> (PublicKey, PublicKey) {
	(
		PublicKey::from_raw(vec![0x04; 65]),
		PublicKey::from_raw(vec![0x05; 65]),
	)
}

fn issuer() -> (IssuerName, SerialNumber) {
	(
		IssuerName::from_der(cn_name("New CA")).unwrap(),
		SerialNumber::from(vec![0x01, 0x00]),
	)
}

fn run(set: &mut ExtensionSet) {
	let (subject, issuer_key) = keys();
	let (name, serial) = issuer();
	update(set, &subject, &issuer_key, &name, &serial).unwrap();
}

#[test]
fn key_identifier_only_shape_is_kept() {
	let mut set = ExtensionSet::new();
	set.add_extension(
		AUTHORITY_KEY_IDENTIFIER,
		false,
		authority_key_identifier(Some(&[0xEE; 20]), None, None),
	);
	run(&mut set);

	let (_, issuer_key) = keys();
	let expected_id = KeyIdentifierGenerator::new(&issuer_key).generate_160_bit_hash_id();
	assert_eq!(
		set.get_extension_value(AUTHORITY_KEY_IDENTIFIER),
		Some(authority_key_identifier(Some(&expected_id), None, None).as_slice())
	);
	assert!(!set.is_critical(AUTHORITY_KEY_IDENTIFIER));
}

#[test]
fn issuer_and_serial_shape_is_kept() {
	let mut set = ExtensionSet::new();
	set.add_extension(
		AUTHORITY_KEY_IDENTIFIER,
		false,
		authority_key_identifier(None, Some("Old CA"), Some(9)),
	);
	run(&mut set);
	assert_eq!(
		set.get_extension_value(AUTHORITY_KEY_IDENTIFIER),
		Some(authority_key_identifier(None, Some("New CA"), Some(0x100)).as_slice())
	);
}

#[test]
fn mixed_shape_gets_all_fields() {
	let mut set = ExtensionSet::new();
	set.add_extension(
		AUTHORITY_KEY_IDENTIFIER,
		true,
		authority_key_identifier(Some(&[0xEE; 20]), None, Some(9)),
	);
	run(&mut set);
	let text = render(
		AUTHORITY_KEY_IDENTIFIER,
		set.get_extension_value(AUTHORITY_KEY_IDENTIFIER).unwrap(),
	)
	.unwrap();
	assert!(text.starts_with("Key Identifier: "));
	assert!(text.contains("Directory Name: CN=New CA"));
	assert!(text.ends_with("Certificate Serial Number: 0x0100\n"));
	assert!(set.is_critical(AUTHORITY_KEY_IDENTIFIER));
}

#[test]
fn subject_key_identifier_is_regenerated() {
	let mut set = ExtensionSet::new();
	set.add_extension(SUBJECT_KEY_IDENTIFIER, true, subject_key_identifier(&[0xAA; 8]));
	set.add_extension(KEY_USAGE, true, key_usage(&[0, 5]));
	run(&mut set);

	let (subject, _) = keys();
	let expected_id = KeyIdentifierGenerator::new(&subject).generate_160_bit_hash_id();
	assert_eq!(
		set.get_extension_value(SUBJECT_KEY_IDENTIFIER),
		Some(subject_key_identifier(&expected_id).as_slice())
	);
	assert!(set.is_critical(SUBJECT_KEY_IDENTIFIER));
	assert_eq!(set.get_extension_value(KEY_USAGE), Some(key_usage(&[0, 5]).as_slice()));
}

#[test]
fn set_without_key_identifiers_is_unchanged() {
	let mut set = ExtensionSet::new();
	set.add_extension(BASIC_CONSTRAINTS, true, basic_constraints(true, None));
	let before = set.clone();
	run(&mut set);
	assert_eq!(set, before);
}
