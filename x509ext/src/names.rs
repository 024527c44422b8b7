//! Friendly names for object identifiers that appear inside extension values.

use crate::oid::*;

/// Key purposes of the extended key usage extension.
pub(crate) fn extended_key_usage(oid: &[u64]) -> Option<&'static str> {
	Some(match oid {
		[1, 3, 6, 1, 5, 5, 7, 3, 1] => "TLS Web Server Authentication",
		[1, 3, 6, 1, 5, 5, 7, 3, 2] => "TLS Web Client Authentication",
		[1, 3, 6, 1, 5, 5, 7, 3, 3] => "Code Signing",
		[1, 3, 6, 1, 5, 5, 7, 3, 4] => "Email Protection",
		[1, 3, 6, 1, 5, 5, 7, 3, 5] => "IPSec End System",
		[1, 3, 6, 1, 5, 5, 7, 3, 6] => "IPSec Tunnel",
		[1, 3, 6, 1, 5, 5, 7, 3, 7] => "IPSec User",
		[1, 3, 6, 1, 5, 5, 7, 3, 8] => "Time Stamping",
		[1, 3, 6, 1, 5, 5, 7, 3, 9] => "OCSP Signing",
		[1, 3, 6, 1, 5, 5, 7, 3, 17] => "IPSec IKE",
		[1, 3, 6, 1, 5, 5, 7, 3, 21] => "SSH Client",
		[1, 3, 6, 1, 5, 5, 7, 3, 22] => "SSH Server",
		[2, 5, 29, 37, 0] => "Any Extended Key Usage",
		[1, 3, 6, 1, 5, 2, 3, 4] => "PKINIT Client Authentication",
		[1, 3, 6, 1, 5, 2, 3, 5] => "Kerberos KDC",
		[1, 3, 6, 1, 4, 1, 311, 2, 1, 21] => "Individual Code Signing",
		[1, 3, 6, 1, 4, 1, 311, 2, 1, 22] => "Commercial Code Signing",
		[1, 3, 6, 1, 4, 1, 311, 10, 3, 1] => "Microsoft Trust List Signing",
		[1, 3, 6, 1, 4, 1, 311, 10, 3, 3] => "Microsoft Server Gated Crypto",
		[1, 3, 6, 1, 4, 1, 311, 10, 3, 4] => "Encrypted File System",
		[1, 3, 6, 1, 4, 1, 311, 10, 3, 12] => "Document Signing",
		[1, 3, 6, 1, 4, 1, 311, 20, 2, 2] => "Smartcard Logon",
		[2, 16, 840, 1, 113730, 4, 1] => "Netscape Server Gated Crypto",
		[1, 2, 840, 113583, 1, 1, 5] => "Adobe PDF Signing",
		_ => return None,
	})
}

/// Access methods of the authority and subject information access extensions.
pub(crate) fn access_method(oid: &[u64]) -> Option<&'static str> {
	Some(match oid {
		OID_AD_OCSP => "OCSP",
		OID_AD_CA_ISSUERS => "CA Issuers",
		OID_AD_TIME_STAMPING => "Time Stamping",
		OID_AD_CA_REPOSITORY => "CA Repository",
		_ => return None,
	})
}

/// Certificate policy qualifier identifiers.
pub(crate) fn policy_qualifier(oid: &[u64]) -> Option<&'static str> {
	Some(match oid {
		OID_QT_CPS => "CPS Pointer",
		OID_QT_UNOTICE => "User Notice",
		_ => return None,
	})
}

pub(crate) fn hold_instruction(oid: &[u64]) -> Option<&'static str> {
	Some(match oid {
		OID_HOLD_INSTRUCTION_NONE => "None",
		OID_HOLD_INSTRUCTION_CALL_ISSUER => "Call Issuer",
		OID_HOLD_INSTRUCTION_REJECT => "Reject",
		_ => return None,
	})
}

/// Statement identifiers of the qualified certificate statements extension.
pub(crate) fn qc_statement(oid: &[u64]) -> Option<&'static str> {
	Some(match oid {
		OID_QCS_SYNTAX_V1 => "QC Syntax V1",
		OID_QCS_SYNTAX_V2 => "QC Syntax V2",
		OID_QC_COMPLIANCE => "QC Compliance",
		OID_QC_LIMIT_VALUE => "QC EU Limit Value",
		OID_QC_RETENTION_PERIOD => "QC Retention Period",
		OID_QC_SSCD => "QC SSCD",
		OID_QC_PDS => "QC PKI Disclosure Statements",
		OID_QC_TYPE => "QC Type",
		_ => return None,
	})
}

pub(crate) fn qc_type(oid: &[u64]) -> Option<&'static str> {
	Some(match oid {
		OID_QCT_ESIGN => "Electronic Signature",
		OID_QCT_ESEAL => "Electronic Seal",
		OID_QCT_WEB => "Website Authentication",
		_ => return None,
	})
}

pub(crate) fn validity_model(oid: &[u64]) -> Option<&'static str> {
	Some(match oid {
		OID_VALIDITY_MODEL_CHAIN => "Chain Model",
		OID_VALIDITY_MODEL_SHELL => "Shell Model",
		_ => return None,
	})
}

/// How the value of an attribute is expected to be encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AttributeSyntax {
	DirectoryString,
	PrintableString,
	Ia5String,
	GeneralizedTime,
	Other,
}

/// Directory attribute types: short name used inside distinguished names,
/// friendly name used in attribute lists, and the value syntax.
pub(crate) fn attribute_type(oid: &[u64]) -> Option<(&'static str, &'static str, AttributeSyntax)> {
	use AttributeSyntax::*;
	Some(match oid {
		OID_COMMON_NAME => ("CN", "Common Name", DirectoryString),
		OID_SURNAME => ("SURNAME", "Surname", DirectoryString),
		OID_SERIAL_NUMBER => ("SERIALNUMBER", "Serial Number", PrintableString),
		OID_COUNTRY_NAME => ("C", "Country", PrintableString),
		OID_LOCALITY_NAME => ("L", "Locality", DirectoryString),
		OID_STATE_OR_PROVINCE_NAME => ("ST", "State", DirectoryString),
		OID_STREET_ADDRESS => ("STREET", "Street", DirectoryString),
		OID_ORG_NAME => ("O", "Organisation", DirectoryString),
		OID_ORG_UNIT_NAME => ("OU", "Organisational Unit", DirectoryString),
		OID_TITLE => ("T", "Title", DirectoryString),
		OID_POSTAL_CODE => ("POSTALCODE", "Postal Code", DirectoryString),
		OID_GIVEN_NAME => ("GIVENNAME", "Given Name", DirectoryString),
		OID_INITIALS => ("INITIALS", "Initials", DirectoryString),
		OID_GENERATION_QUALIFIER => ("GENERATION", "Generation Qualifier", DirectoryString),
		OID_DN_QUALIFIER => ("DNQ", "DN Qualifier", PrintableString),
		OID_PSEUDONYM => ("PSEUDONYM", "Pseudonym", DirectoryString),
		OID_DOMAIN_COMPONENT => ("DC", "Domain Component", Ia5String),
		OID_USER_ID => ("UID", "User ID", DirectoryString),
		OID_EMAIL_ADDRESS => ("E", "Email Address", Ia5String),
		OID_UNSTRUCTURED_NAME => ("unstructuredName", "Unstructured Name", Ia5String),
		OID_UNSTRUCTURED_ADDRESS => (
			"unstructuredAddress",
			"Unstructured Address",
			PrintableString,
		),
		OID_DATE_OF_BIRTH => ("DateOfBirth", "Date of Birth", GeneralizedTime),
		OID_PLACE_OF_BIRTH => ("PlaceOfBirth", "Place of Birth", DirectoryString),
		OID_GENDER => ("Gender", "Gender", PrintableString),
		OID_COUNTRY_OF_CITIZENSHIP => (
			"CountryOfCitizenship",
			"Country of Citizenship",
			PrintableString,
		),
		OID_COUNTRY_OF_RESIDENCE => (
			"CountryOfResidence",
			"Country of Residence",
			PrintableString,
		),
		_ => return None,
	})
}

#[cfg(test)]
mod names_tests {
	use super::*;

	#[test]
	fn known_and_unknown() {
		assert_eq!(
			extended_key_usage(&[1, 3, 6, 1, 5, 5, 7, 3, 1]),
			Some("TLS Web Server Authentication")
		);
		assert_eq!(extended_key_usage(&[1, 2, 3]), None);
		assert_eq!(access_method(OID_AD_OCSP), Some("OCSP"));
		assert_eq!(attribute_type(OID_COUNTRY_NAME).map(|a| a.0), Some("C"));
		assert_eq!(attribute_type(&[2, 5, 4, 99]), None);
	}
}
