use yasna::models::ObjectIdentifier;

use crate::Error;

/// id-at-commonName in [RFC 5280](https://www.rfc-editor.org/rfc/rfc5280#appendix-A)
pub const OID_COMMON_NAME: &[u64] = &[2, 5, 4, 3];
/// id-at-surname in [RFC 5280](https://www.rfc-editor.org/rfc/rfc5280#appendix-A)
pub const OID_SURNAME: &[u64] = &[2, 5, 4, 4];
/// id-at-serialNumber in [RFC 5280](https://www.rfc-editor.org/rfc/rfc5280#appendix-A)
pub const OID_SERIAL_NUMBER: &[u64] = &[2, 5, 4, 5];
/// id-at-countryName in [RFC 5280](https://www.rfc-editor.org/rfc/rfc5280#appendix-A)
pub const OID_COUNTRY_NAME: &[u64] = &[2, 5, 4, 6];
/// id-at-localityName in [RFC 5280](https://www.rfc-editor.org/rfc/rfc5280#appendix-A)
pub const OID_LOCALITY_NAME: &[u64] = &[2, 5, 4, 7];
/// id-at-stateOrProvinceName in [RFC 5280](https://www.rfc-editor.org/rfc/rfc5280#appendix-A)
pub const OID_STATE_OR_PROVINCE_NAME: &[u64] = &[2, 5, 4, 8];
/// id-at-streetAddress in X.520
pub const OID_STREET_ADDRESS: &[u64] = &[2, 5, 4, 9];
/// id-at-organizationName in [RFC 5280](https://www.rfc-editor.org/rfc/rfc5280#appendix-A)
pub const OID_ORG_NAME: &[u64] = &[2, 5, 4, 10];
/// id-at-organizationalUnitName in [RFC 5280](https://www.rfc-editor.org/rfc/rfc5280#appendix-A)
pub const OID_ORG_UNIT_NAME: &[u64] = &[2, 5, 4, 11];
/// id-at-title in [RFC 5280](https://www.rfc-editor.org/rfc/rfc5280#appendix-A)
pub const OID_TITLE: &[u64] = &[2, 5, 4, 12];
/// id-at-postalCode in X.520
pub const OID_POSTAL_CODE: &[u64] = &[2, 5, 4, 17];
/// id-at-givenName in [RFC 5280](https://www.rfc-editor.org/rfc/rfc5280#appendix-A)
pub const OID_GIVEN_NAME: &[u64] = &[2, 5, 4, 42];
/// id-at-initials in [RFC 5280](https://www.rfc-editor.org/rfc/rfc5280#appendix-A)
pub const OID_INITIALS: &[u64] = &[2, 5, 4, 43];
/// id-at-generationQualifier in [RFC 5280](https://www.rfc-editor.org/rfc/rfc5280#appendix-A)
pub const OID_GENERATION_QUALIFIER: &[u64] = &[2, 5, 4, 44];
/// id-at-dnQualifier in [RFC 5280](https://www.rfc-editor.org/rfc/rfc5280#appendix-A)
pub const OID_DN_QUALIFIER: &[u64] = &[2, 5, 4, 46];
/// id-at-pseudonym in [RFC 5280](https://www.rfc-editor.org/rfc/rfc5280#appendix-A)
pub const OID_PSEUDONYM: &[u64] = &[2, 5, 4, 65];
/// id-domainComponent in [RFC 4519](https://www.rfc-editor.org/rfc/rfc4519#section-2.4)
pub const OID_DOMAIN_COMPONENT: &[u64] = &[0, 9, 2342, 19200300, 100, 1, 25];
/// id-userId in [RFC 4519](https://www.rfc-editor.org/rfc/rfc4519#section-2.39)
pub const OID_USER_ID: &[u64] = &[0, 9, 2342, 19200300, 100, 1, 1];
/// emailAddress in [RFC 2985](https://www.rfc-editor.org/rfc/rfc2985#appendix-A)
pub const OID_EMAIL_ADDRESS: &[u64] = &[1, 2, 840, 113549, 1, 9, 1];
/// unstructuredName in [RFC 2985](https://www.rfc-editor.org/rfc/rfc2985#appendix-A)
pub const OID_UNSTRUCTURED_NAME: &[u64] = &[1, 2, 840, 113549, 1, 9, 2];
/// unstructuredAddress in [RFC 2985](https://www.rfc-editor.org/rfc/rfc2985#appendix-A)
pub const OID_UNSTRUCTURED_ADDRESS: &[u64] = &[1, 2, 840, 113549, 1, 9, 8];
/// dateOfBirth in [RFC 3739](https://www.rfc-editor.org/rfc/rfc3739#appendix-A.1)
pub const OID_DATE_OF_BIRTH: &[u64] = &[1, 3, 6, 1, 5, 5, 7, 9, 1];
/// placeOfBirth in [RFC 3739](https://www.rfc-editor.org/rfc/rfc3739#appendix-A.1)
pub const OID_PLACE_OF_BIRTH: &[u64] = &[1, 3, 6, 1, 5, 5, 7, 9, 2];
/// gender in [RFC 3739](https://www.rfc-editor.org/rfc/rfc3739#appendix-A.1)
pub const OID_GENDER: &[u64] = &[1, 3, 6, 1, 5, 5, 7, 9, 3];
/// countryOfCitizenship in [RFC 3739](https://www.rfc-editor.org/rfc/rfc3739#appendix-A.1)
pub const OID_COUNTRY_OF_CITIZENSHIP: &[u64] = &[1, 3, 6, 1, 5, 5, 7, 9, 4];
/// countryOfResidence in [RFC 3739](https://www.rfc-editor.org/rfc/rfc3739#appendix-A.1)
pub const OID_COUNTRY_OF_RESIDENCE: &[u64] = &[1, 3, 6, 1, 5, 5, 7, 9, 5];

/// id-ce-subjectKeyIdentifier in [RFC 5280](https://www.rfc-editor.org/rfc/rfc5280#appendix-A)
pub const OID_SUBJECT_KEY_IDENTIFIER: &[u64] = &[2, 5, 29, 14];
/// id-ce-authorityKeyIdentifier in [RFC 5280](https://www.rfc-editor.org/rfc/rfc5280#appendix-A)
pub const OID_AUTHORITY_KEY_IDENTIFIER: &[u64] = &[2, 5, 29, 35];

/// id-qt-cps in [RFC 5280](https://www.rfc-editor.org/rfc/rfc5280#appendix-A.1)
pub const OID_QT_CPS: &[u64] = &[1, 3, 6, 1, 5, 5, 7, 2, 1];
/// id-qt-unotice in [RFC 5280](https://www.rfc-editor.org/rfc/rfc5280#appendix-A.1)
pub const OID_QT_UNOTICE: &[u64] = &[1, 3, 6, 1, 5, 5, 7, 2, 2];

/// id-ad-ocsp in [RFC 5280](https://www.rfc-editor.org/rfc/rfc5280#appendix-A.1)
pub const OID_AD_OCSP: &[u64] = &[1, 3, 6, 1, 5, 5, 7, 48, 1];
/// id-ad-caIssuers in [RFC 5280](https://www.rfc-editor.org/rfc/rfc5280#appendix-A.1)
pub const OID_AD_CA_ISSUERS: &[u64] = &[1, 3, 6, 1, 5, 5, 7, 48, 2];
/// id-ad-timeStamping in [RFC 5280](https://www.rfc-editor.org/rfc/rfc5280#appendix-A.1)
pub const OID_AD_TIME_STAMPING: &[u64] = &[1, 3, 6, 1, 5, 5, 7, 48, 3];
/// id-ad-caRepository in [RFC 5280](https://www.rfc-editor.org/rfc/rfc5280#appendix-A.1)
pub const OID_AD_CA_REPOSITORY: &[u64] = &[1, 3, 6, 1, 5, 5, 7, 48, 5];

/// id-holdinstruction-none in [RFC 5280](https://www.rfc-editor.org/rfc/rfc5280#section-5.3.2)
pub const OID_HOLD_INSTRUCTION_NONE: &[u64] = &[1, 2, 840, 10040, 2, 1];
/// id-holdinstruction-callissuer in [RFC 5280](https://www.rfc-editor.org/rfc/rfc5280#section-5.3.2)
pub const OID_HOLD_INSTRUCTION_CALL_ISSUER: &[u64] = &[1, 2, 840, 10040, 2, 2];
/// id-holdinstruction-reject in [RFC 5280](https://www.rfc-editor.org/rfc/rfc5280#section-5.3.2)
pub const OID_HOLD_INSTRUCTION_REJECT: &[u64] = &[1, 2, 840, 10040, 2, 3];

/// id-ms-san-upn, the Microsoft user principal name `otherName`
pub const OID_MS_UPN: &[u64] = &[1, 3, 6, 1, 4, 1, 311, 20, 2, 3];

/// id-qcs-pkixQCSyntax-v1 in [RFC 3739](https://www.rfc-editor.org/rfc/rfc3739#appendix-A.2)
pub const OID_QCS_SYNTAX_V1: &[u64] = &[1, 3, 6, 1, 5, 5, 7, 11, 1];
/// id-qcs-pkixQCSyntax-v2 in [RFC 3739](https://www.rfc-editor.org/rfc/rfc3739#appendix-A.2)
pub const OID_QCS_SYNTAX_V2: &[u64] = &[1, 3, 6, 1, 5, 5, 7, 11, 2];
/// id-etsi-qcs-QcCompliance in ETSI EN 319 412-5
pub const OID_QC_COMPLIANCE: &[u64] = &[0, 4, 0, 1862, 1, 1];
/// id-etsi-qcs-QcLimitValue in ETSI EN 319 412-5
pub const OID_QC_LIMIT_VALUE: &[u64] = &[0, 4, 0, 1862, 1, 2];
/// id-etsi-qcs-QcRetentionPeriod in ETSI EN 319 412-5
pub const OID_QC_RETENTION_PERIOD: &[u64] = &[0, 4, 0, 1862, 1, 3];
/// id-etsi-qcs-QcSSCD in ETSI EN 319 412-5
pub const OID_QC_SSCD: &[u64] = &[0, 4, 0, 1862, 1, 4];
/// id-etsi-qcs-QcPDS in ETSI EN 319 412-5
pub const OID_QC_PDS: &[u64] = &[0, 4, 0, 1862, 1, 5];
/// id-etsi-qcs-QcType in ETSI EN 319 412-5
pub const OID_QC_TYPE: &[u64] = &[0, 4, 0, 1862, 1, 6];

/// id-etsi-qct-esign in ETSI EN 319 412-5
pub const OID_QCT_ESIGN: &[u64] = &[0, 4, 0, 1862, 1, 6, 1];
/// id-etsi-qct-eseal in ETSI EN 319 412-5
pub const OID_QCT_ESEAL: &[u64] = &[0, 4, 0, 1862, 1, 6, 2];
/// id-etsi-qct-web in ETSI EN 319 412-5
pub const OID_QCT_WEB: &[u64] = &[0, 4, 0, 1862, 1, 6, 3];

/// id-validity-model-chain in Common PKI
pub const OID_VALIDITY_MODEL_CHAIN: &[u64] = &[1, 3, 6, 1, 4, 1, 8301, 3, 5, 1];
/// id-validity-model-shell in Common PKI
pub const OID_VALIDITY_MODEL_SHELL: &[u64] = &[1, 3, 6, 1, 4, 1, 8301, 3, 5, 2];

/// Renders the components of `oid` in dotted decimal notation.
pub(crate) fn to_dotted(oid: &ObjectIdentifier) -> String {
	oid.components()
		.iter()
		.map(|c| c.to_string())
		.collect::<Vec<_>>()
		.join(".")
}

/// Parses a dotted decimal object identifier such as `2.5.29.15`.
pub(crate) fn from_dotted(oid: &str) -> Result<ObjectIdentifier, Error> {
	let components = oid
		.split('.')
		.map(str::parse::<u64>)
		.collect::<Result<Vec<_>, _>>()
		.map_err(|_| Error::InvalidOid(oid.to_string()))?;
	// X.660: at least two arcs, the first one being 0, 1 or 2
	match components.as_slice() {
		[first, second, ..] if *first <= 2 && (*first == 2 || *second < 40) => {},
		_ => return Err(Error::InvalidOid(oid.to_string())),
	}
	Ok(ObjectIdentifier::new(components))
}
