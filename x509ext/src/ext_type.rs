//! The table of extension types this crate knows by name.

macro_rules! extension_types {
	($($(#[$meta:meta])* $variant:ident => ($oid:literal, $name:literal),)*) => {
		/// An X.509 extension type known by its object identifier.
		///
		/// Only some of these have a dedicated decoder; the others are recognised
		/// by name and rendered as a hex dump.
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
		#[non_exhaustive]
		pub enum ExtensionType {
			$($(#[$meta])* #[allow(missing_docs)] $variant,)*
		}

		impl ExtensionType {
			/// Every known extension type, in table order.
			pub const ALL: &'static [ExtensionType] = &[$(ExtensionType::$variant,)*];

			/// The dotted decimal object identifier of this extension type.
			pub fn oid(&self) -> &'static str {
				match self {
					$(ExtensionType::$variant => $oid,)*
				}
			}

			/// Display name of this extension type.
			pub fn friendly_name(&self) -> &'static str {
				match self {
					$(ExtensionType::$variant => $name,)*
				}
			}

			/// Looks up the extension type registered for `oid`.
			pub fn resolve_oid(oid: &str) -> Option<ExtensionType> {
				match oid {
					$($oid => Some(ExtensionType::$variant),)*
					_ => None,
				}
			}
		}
	};
}

extension_types! {
	EntrustVersionInformation => ("1.2.840.113533.7.65.0", "Entrust Version Information"),
	AuthorityInformationAccess => ("1.3.6.1.5.5.7.1.1", "Authority Information Access"),
	SubjectInformationAccess => ("1.3.6.1.5.5.7.1.11", "Subject Information Access"),
	SubjectDirectoryAttributes => ("2.5.29.9", "Subject Directory Attributes"),
	SubjectKeyIdentifier => ("2.5.29.14", "Subject Key Identifier"),
	KeyUsage => ("2.5.29.15", "Key Usage"),
	PrivateKeyUsagePeriod => ("2.5.29.16", "Private Key Usage Period"),
	SubjectAlternativeName => ("2.5.29.17", "Subject Alternative Name"),
	IssuerAlternativeName => ("2.5.29.18", "Issuer Alternative Name"),
	BasicConstraints => ("2.5.29.19", "Basic Constraints"),
	CrlNumber => ("2.5.29.20", "CRL Number"),
	ReasonCode => ("2.5.29.21", "Reason Code"),
	HoldInstructionCode => ("2.5.29.23", "Hold Instruction Code"),
	InvalidityDate => ("2.5.29.24", "Invalidity Date"),
	DeltaCrlIndicator => ("2.5.29.27", "Delta CRL Indicator"),
	IssuingDistributionPoint => ("2.5.29.28", "Issuing Distribution Point"),
	CertificateIssuer => ("2.5.29.29", "Certificate Issuer"),
	NameConstraints => ("2.5.29.30", "Name Constraints"),
	CrlDistributionPoints => ("2.5.29.31", "CRL Distribution Points"),
	CertificatePolicies => ("2.5.29.32", "Certificate Policies"),
	PolicyMappings => ("2.5.29.33", "Policy Mappings"),
	AuthorityKeyIdentifier => ("2.5.29.35", "Authority Key Identifier"),
	PolicyConstraints => ("2.5.29.36", "Policy Constraints"),
	ExtendedKeyUsage => ("2.5.29.37", "Extended Key Usage"),
	FreshestCrl => ("2.5.29.46", "Freshest CRL"),
	InhibitAnyPolicy => ("2.5.29.54", "Inhibit Any Policy"),

	NetscapeCertificateType => ("2.16.840.1.113730.1.1", "Netscape Certificate Type"),
	NetscapeBaseUrl => ("2.16.840.1.113730.1.2", "Netscape Base URL"),
	NetscapeRevocationUrl => ("2.16.840.1.113730.1.3", "Netscape Revocation URL"),
	NetscapeCaRevocationUrl => ("2.16.840.1.113730.1.4", "Netscape CA Revocation URL"),
	NetscapeCertificateRenewalUrl => ("2.16.840.1.113730.1.7", "Netscape Certificate Renewal URL"),
	NetscapeCaPolicyUrl => ("2.16.840.1.113730.1.8", "Netscape CA Policy URL"),
	NetscapeSslServerName => ("2.16.840.1.113730.1.12", "Netscape SSL Server Name"),
	NetscapeComment => ("2.16.840.1.113730.1.13", "Netscape Comment"),

	// X.509 attribute certificate and CRL extensions without a decoder
	AuthorityAttributeIdentifier => ("2.5.29.38", "Authority Attribute Identifier"),
	RoleSpecificationCertificateIdentifier => ("2.5.29.39", "Role Specification Certificate Identifier"),
	CrlStreamIdentifier => ("2.5.29.40", "CRL Stream Identifier"),
	BasicAttConstraints => ("2.5.29.41", "Basic Attribute Constraints"),
	DelegatedNameConstraints => ("2.5.29.42", "Delegated Name Constraints"),
	TimeSpecification => ("2.5.29.43", "Time Specification"),
	CrlScope => ("2.5.29.44", "CRL Scope"),
	StatusReferrals => ("2.5.29.45", "Status Referrals"),
	OrderedList => ("2.5.29.47", "Ordered List"),
	AttributeDescriptor => ("2.5.29.48", "Attribute Descriptor"),
	UserNotice => ("2.5.29.49", "User Notice"),
	SoaIdentifier => ("2.5.29.50", "SOA Identifier"),
	BaseUpdateTime => ("2.5.29.51", "Base Update Time"),
	AcceptableCertificatePolicies => ("2.5.29.52", "Acceptable Certificate Policies"),
	DeltaInformation => ("2.5.29.53", "Delta Information"),
	TargetInformation => ("2.5.29.55", "Target Information"),
	NoRevocationAvailability => ("2.5.29.56", "No Revocation Availability"),
	AcceptablePrivilegePolicies => ("2.5.29.57", "Acceptable Privilege Policies"),

	// obsolete arcs
	AuthorityKeyIdentifierObs => ("2.5.29.1", "Authority Key Identifier (obsolete)"),
	PrimaryKeyAttributesObs => ("2.5.29.2", "Primary Key Attributes (obsolete)"),
	CertificatePoliciesObs => ("2.5.29.3", "Certificate Policies (obsolete)"),
	PrimaryKeyUsageRestrictionObs => ("2.5.29.4", "Primary Key Usage Restriction (obsolete)"),
	PolicyMappingsObs => ("2.5.29.5", "Policy Mappings (obsolete)"),
	SubtreesConstraintObs => ("2.5.29.6", "Subtrees Constraint (obsolete)"),
	SubjectAlternativeNameObs => ("2.5.29.7", "Subject Alternative Name (obsolete)"),
	IssuerAlternativeNameObs => ("2.5.29.8", "Issuer Alternative Name (obsolete)"),
	BasicConstraintsObs => ("2.5.29.10", "Basic Constraints (obsolete)"),
	NameConstraintsObs => ("2.5.29.11", "Name Constraints (obsolete)"),
	PolicyConstraintsObs => ("2.5.29.12", "Policy Constraints (obsolete)"),
	BasicConstraintsObs1 => ("2.5.29.13", "Basic Constraints (obsolete)"),
	ExpirationDateObs => ("2.5.29.22", "Expiration Date (obsolete)"),
	CrlDistributionPointsObs => ("2.5.29.25", "CRL Distribution Points (obsolete)"),
	IssuingDistributionPointObs => ("2.5.29.26", "Issuing Distribution Point (obsolete)"),
	PolicyConstraintsObs1 => ("2.5.29.34", "Policy Constraints (obsolete)"),

	BiometricInfo => ("1.3.6.1.5.5.7.1.2", "Biometric Info"),
	QcStatements => ("1.3.6.1.5.5.7.1.3", "QC Statements"),
	OcspNoCheck => ("1.3.6.1.5.5.7.48.1.5", "OCSP No Check"),

	// Common PKI / ISIS-MTT
	LiabilityLimitationFlag => ("0.2.262.1.10.12.0", "Liability Limitation Flag"),
	DateOfCertGen => ("1.3.36.8.3.1", "Date of Certificate Generation"),
	Procuration => ("1.3.36.8.3.2", "Procuration"),
	Admission => ("1.3.36.8.3.3", "Admission"),
	MonetaryLimit => ("1.3.36.8.3.4", "Monetary Limit"),
	DeclarationOfMajority => ("1.3.36.8.3.5", "Declaration of Majority"),
	Iccsn => ("1.3.36.8.3.11", "Integrated Circuit Card Serial Number"),
	Restriction => ("1.3.36.8.3.8", "Restriction"),
	AdditionalInformation => ("1.3.36.8.3.15", "Additional Information"),
	ValidityModel => ("1.3.6.1.4.1.8301.3.5", "Validity Model"),

	MsEnrollCertTypeExtension => ("1.3.6.1.4.1.311.20.2", "Microsoft Certificate Type"),
	MsCaVersion => ("1.3.6.1.4.1.311.21.1", "Microsoft CA Version"),
	MsCaCertificateHash => ("1.3.6.1.4.1.311.21.2", "Microsoft CA Certificate Hash"),
	MsCrlNextPublish => ("1.3.6.1.4.1.311.21.4", "Microsoft CRL Next Publish"),
	MsCertificateTemplate => ("1.3.6.1.4.1.311.21.7", "Microsoft Certificate Template"),
	MsApplicationPolicies => ("1.3.6.1.4.1.311.21.10", "Microsoft Application Policies"),

	SmimeCapabilities => ("1.2.840.113549.1.9.15", "S/MIME Capabilities"),
	LogoType => ("1.3.6.1.5.5.7.1.12", "Logotype"),

	SetHashedRootKey => ("2.23.42.7.0", "SET Hashed Root Key"),
	SetCertificateType => ("2.23.42.7.1", "SET Certificate Type"),
	SetMerchantData => ("2.23.42.7.2", "SET Merchant Data"),
	SetCardCertRequired => ("2.23.42.7.3", "SET Card Certificate Required"),
	SetTunneling => ("2.23.42.7.4", "SET Tunneling"),
	SetSetExtensions => ("2.23.42.7.5", "SET Extensions"),
	SetSetQualifier => ("2.23.42.7.6", "SET Qualifier"),

	VsCzag => ("2.16.840.1.113733.1.6.3", "VeriSign CZAG"),
	VsNonVerified => ("2.16.840.1.113733.1.6.4", "VeriSign Non Verified"),
	VsFidelityToken => ("2.16.840.1.113733.1.6.5", "VeriSign Fidelity Token"),
	VsInBoxV1 => ("2.16.840.1.113733.1.6.6", "VeriSign In Box V1"),
	VsSerialNumberRollover => ("2.16.840.1.113733.1.6.7", "VeriSign Serial Number Rollover"),
	VsTokenType => ("2.16.840.1.113733.1.6.8", "VeriSign Token Type"),
	VsInBoxV2 => ("2.16.840.1.113733.1.6.10", "VeriSign In Box V2"),
	VsOnSiteJurisdictionHash => ("2.16.840.1.113733.1.6.11", "VeriSign On Site Jurisdiction Hash"),
	VsUnknown => ("2.16.840.1.113733.1.6.13", "VeriSign Unknown"),
	VsDnbDunsNumber => ("2.16.840.1.113733.1.6.15", "VeriSign D&B D-U-N-S Number"),

	CtSignedCertificateTimestamps => ("1.3.6.1.4.1.11129.2.4.2", "Signed Certificate Timestamp List"),

	AppleCodeSigning => ("1.2.840.113635.100.6.1.13", "Apple Application Code Signing"),
	AppleInstallerSigning => ("1.2.840.113635.100.6.1.14", "Apple Installer Package Signing"),
	AppleDevProgram => ("1.2.840.113635.100.6.2.6", "Apple Developer Program"),
}

/// Display name of the extension registered for the dotted `oid`, if any.
pub fn friendly_name(oid: &str) -> Option<&'static str> {
	ExtensionType::resolve_oid(oid).map(|t| t.friendly_name())
}

#[cfg(test)]
mod ext_type_tests {
	use std::collections::HashSet;

	use super::*;

	#[test]
	fn oids_are_unique() {
		let mut seen = HashSet::new();
		for t in ExtensionType::ALL {
			assert!(seen.insert(t.oid()), "{} registered twice", t.oid());
		}
	}

	#[test]
	fn resolve_is_inverse_of_oid() {
		for t in ExtensionType::ALL {
			assert_eq!(ExtensionType::resolve_oid(t.oid()), Some(*t));
		}
	}

	#[test]
	fn lookup() {
		assert_eq!(friendly_name("2.5.29.15"), Some("Key Usage"));
		assert_eq!(friendly_name("1.3.36.8.3.11"), Some("Integrated Circuit Card Serial Number"));
		assert_eq!(friendly_name("1.2.3.4.5.6.7.8.9.0"), None);
	}
}
